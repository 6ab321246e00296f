//! Core logic for the finger report.
//!
//! This crate turns raw collaborator data into report-ready records:
//! - Interval: compact and detailed idle-time labels
//! - Identity: splitting the comma-delimited identity (GECOS) field
//! - Idle: choosing the timestamp an idle time is measured from
//! - Record: aggregating a session and an account into a `UserInfoRecord`
//! - Status: mailbox and plan file checks for the detailed report
//!
//! Nothing here talks to the operating system directly; the host is reached
//! through the traits in [`host`].

pub mod fields;
pub mod host;
pub mod identity;
pub mod idle;
pub mod interval;
pub mod record;
pub mod status;

pub use host::{AccountDirectory, FileStat, Filesystem, HostError, SessionTable};
pub use identity::{Identity, format_phone, parse_identity};
pub use idle::{PRIMARY_CONSOLE, resolve_idle};
pub use interval::format_interval;
pub use record::{
    AccountEntry, CLOCK_FORMAT, ReportContext, SessionEntry, UserInfoRecord, WEEKDAY_FORMAT,
    aggregate, profile,
};
pub use status::{MailStatus, PlanStatus, check_mail, check_plan};
