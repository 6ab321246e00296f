//! Aggregation of a login session and an account into one report record.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{self, bounded};
use crate::host::Filesystem;
use crate::identity::parse_identity;
use crate::idle::{device_path, idle_seconds, resolve_idle};
use crate::interval::format_interval;

/// Calendar label of the login day, e.g. `Mar 03`.
pub const WEEKDAY_FORMAT: &str = "%b %d";

/// Clock label of the login time, e.g. `09:41`.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// One active login record from the session table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub user: String,
    /// Terminal device name relative to the device directory, e.g. `pts/1`.
    pub device: String,
    /// Remote host the session came from, empty for local logins.
    pub host: String,
    pub login_time: DateTime<Utc>,
}

/// Static account metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEntry {
    /// Comma-delimited name, office and phone (the GECOS field).
    pub identity: String,
    pub home_directory: String,
    pub shell: String,
}

/// Inputs sampled once per report run.
#[derive(Debug, Clone)]
pub struct ReportContext<Tz: TimeZone> {
    pub now: DateTime<Utc>,
    /// Zone the login and mail times are displayed in.
    pub tz: Tz,
    /// Directory holding terminal device files.
    pub device_dir: PathBuf,
}

impl<Tz: TimeZone> ReportContext<Tz> {
    pub fn new(now: DateTime<Utc>, tz: Tz, device_dir: impl Into<PathBuf>) -> Self {
        Self {
            now,
            tz,
            device_dir: device_dir.into(),
        }
    }
}

/// Everything the presentation layer needs about one user on one session.
///
/// Unknown values are empty strings rather than missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoRecord {
    pub login: String,
    pub full_name: String,
    pub office_location: String,
    pub office_phone: String,
    pub home_directory: String,
    pub shell: String,
    pub terminal: String,
    pub remote_host: String,
    /// Compact idle label, e.g. `2` or `1:05`.
    pub idle_time_label: String,
    /// Detailed idle label from the same duration, e.g. `idle 0:02`.
    pub idle_detail: String,
    pub login_weekday: String,
    pub login_clock_time: String,
    pub messages_enabled: bool,
}

/// Builds the record for `session` belonging to `account`.
///
/// Never fails: a device file that cannot be inspected leaves the idle
/// labels empty and messages off.
pub fn aggregate<Tz, F>(
    session: &SessionEntry,
    account: &AccountEntry,
    ctx: &ReportContext<Tz>,
    files: &F,
) -> UserInfoRecord
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
    F: Filesystem + ?Sized,
{
    let mut record = profile(&session.user, account);
    record.terminal = bounded(&session.device, fields::TERMINAL);
    record.remote_host = bounded(&session.host, fields::REMOTE_HOST);

    let local = session.login_time.with_timezone(&ctx.tz);
    record.login_weekday = bounded(&local.format(WEEKDAY_FORMAT).to_string(), fields::WEEKDAY);
    record.login_clock_time = bounded(&local.format(CLOCK_FORMAT).to_string(), fields::CLOCK_TIME);

    let device = files.stat(&device_path(&ctx.device_dir, &session.device));
    record.messages_enabled = device.is_some_and(|stat| stat.accepts_messages());

    let last_accessed = |_: &Path| device.map(|stat| stat.accessed);
    let idle = resolve_idle(
        &session.device,
        session.login_time,
        ctx.now,
        &ctx.device_dir,
        last_accessed,
    );
    record.idle_time_label = bounded(&idle, fields::IDLE);
    record.idle_detail = idle_seconds(
        &session.device,
        session.login_time,
        ctx.now,
        &ctx.device_dir,
        last_accessed,
    )
    .map(|seconds| bounded(&format_interval(seconds, true), fields::IDLE))
    .unwrap_or_default();

    record
}

/// Builds the account-only part of a record, for a user with no session.
pub fn profile(login: &str, account: &AccountEntry) -> UserInfoRecord {
    let identity = parse_identity(&account.identity);
    UserInfoRecord {
        login: bounded(login, fields::LOGIN),
        full_name: identity.full_name,
        office_location: identity.office_location,
        office_phone: identity.office_phone,
        home_directory: bounded(&account.home_directory, fields::DIRECTORY),
        shell: bounded(&account.shell, fields::SHELL),
        ..UserInfoRecord::default()
    }
}
