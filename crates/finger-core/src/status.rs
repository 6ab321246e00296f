//! Mailbox and plan file checks for the detailed report.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::host::Filesystem;

/// Name of the plan file in a user's home directory.
pub const PLAN_FILE: &str = ".plan";

/// State of a user's mailbox at the time of the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailStatus {
    NoMail,
    /// The mailbox was accessed after its last change.
    Read { at: DateTime<Utc> },
    /// The mailbox changed after it was last accessed.
    NewMail {
        received: DateTime<Utc>,
        unread_since: DateTime<Utc>,
    },
}

/// Contents of a user's plan file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStatus {
    NoPlan,
    Plan(Vec<String>),
    /// The plan file exists but could not be read.
    Unreadable(String),
}

/// Checks the mailbox `mail_dir/login`.
pub fn check_mail<F: Filesystem + ?Sized>(files: &F, mail_dir: &Path, login: &str) -> MailStatus {
    let Some(stat) = files.stat(&mail_dir.join(login)) else {
        return MailStatus::NoMail;
    };

    if stat.accessed >= stat.modified {
        MailStatus::Read { at: stat.accessed }
    } else {
        MailStatus::NewMail {
            received: stat.modified,
            unread_since: stat.accessed,
        }
    }
}

/// Reads the plan file in `home`, line by line and unmodified.
pub fn check_plan<F: Filesystem + ?Sized>(files: &F, home: &Path) -> PlanStatus {
    let path = home.join(PLAN_FILE);
    if !files.exists(&path) {
        return PlanStatus::NoPlan;
    }

    match files.read_lines(&path) {
        Ok(lines) => PlanStatus::Plan(lines),
        Err(e) => {
            tracing::warn!(error = %e, "plan file exists but is unreadable");
            PlanStatus::Unreadable(e.to_string())
        }
    }
}
