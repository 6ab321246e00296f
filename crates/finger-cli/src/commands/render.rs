//! Text layout of records: table rows and the detailed block.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use chrono::{DateTime, TimeZone, Utc};
use finger_core::{MailStatus, PlanStatus, PRIMARY_CONSOLE, UserInfoRecord};

use crate::Mode;

/// Login time in the "On since" line, e.g. `Mon Mar 03 09:41 (UTC)`.
pub const LOGIN_FORMAT: &str = "%a %b %d %H:%M (%Z)";

/// Mailbox times, e.g. `Sat Apr 05 15:30 2025 (UTC)`.
pub const MAIL_TIME_FORMAT: &str = "%a %b %d %H:%M %Y (%Z)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Login,
    Name,
    Tty,
    Idle,
    Directory,
    Shell,
    Weekday,
    Time,
    Office,
    Phone,
}

impl Column {
    const fn title(self) -> &'static str {
        match self {
            Self::Login | Self::Weekday => "Login",
            Self::Name => "Name",
            Self::Tty => "TTY",
            Self::Idle => "Idle",
            Self::Directory => "Directory",
            Self::Shell => "Shell",
            Self::Time => "Time",
            Self::Office => "Office",
            Self::Phone => "Phone",
        }
    }

    const fn width(self) -> usize {
        match self {
            Self::Login | Self::Name => 15,
            Self::Tty => 9,
            Self::Idle => 8,
            Self::Directory | Self::Shell => 20,
            Self::Weekday | Self::Time | Self::Office => 10,
            Self::Phone => 12,
        }
    }

    fn value<'a>(self, record: &'a UserInfoRecord, terminal: &'a str) -> &'a str {
        match self {
            Self::Login => &record.login,
            Self::Name => &record.full_name,
            Self::Tty => terminal,
            Self::Idle => &record.idle_time_label,
            Self::Directory => &record.home_directory,
            Self::Shell => &record.shell,
            Self::Weekday => &record.login_weekday,
            Self::Time => &record.login_clock_time,
            Self::Office => &record.office_location,
            Self::Phone => &record.office_phone,
        }
    }
}

const fn columns(mode: Mode) -> &'static [Column] {
    use Column::{Directory, Idle, Login, Name, Office, Phone, Shell, Time, Tty, Weekday};
    match mode {
        Mode::Short => &[Login, Name, Tty, Idle],
        Mode::Compact => &[Login, Name, Tty, Idle, Weekday, Time],
        Mode::Long => &[
            Login, Name, Tty, Idle, Directory, Shell, Weekday, Time, Office, Phone,
        ],
        Mode::Default | Mode::NoExtras | Mode::Detailed => {
            &[Login, Name, Tty, Idle, Weekday, Time, Office, Phone]
        }
    }
}

fn layout<'a>(cells: impl Iterator<Item = (&'a str, usize)>) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{cell:<width$}");
    }
    line.trim_end().to_string()
}

/// Column titles for a table in `mode`.
pub fn header(mode: Mode) -> String {
    layout(columns(mode).iter().map(|c| (c.title(), c.width())))
}

/// One table row, showing `terminal` in the TTY column.
pub fn row(mode: Mode, record: &UserInfoRecord, terminal: &str) -> String {
    layout(
        columns(mode)
            .iter()
            .map(|c| (c.value(record, terminal), c.width())),
    )
}

/// Marks the console and pseudo-terminals in session listings.
pub fn listing_terminal(device: &str) -> String {
    if device == PRIMARY_CONSOLE || device.starts_with("pts") {
        format!("*{device}")
    } else {
        device.to_string()
    }
}

/// Writes the login, directory and office lines of the detailed block.
pub fn write_profile<W: Write>(w: &mut W, record: &UserInfoRecord) -> io::Result<()> {
    writeln!(w, "Login: {:<33}Name: {}", record.login, record.full_name)?;
    writeln!(
        w,
        "Directory: {:<29}Shell: {}",
        record.home_directory, record.shell
    )?;

    let office: Vec<&str> = [&record.office_location, &record.office_phone]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if !office.is_empty() {
        writeln!(w, "Office: {}", office.join(", "))?;
    }
    Ok(())
}

/// Writes the "On since" line for one session.
pub fn write_session<W, Tz>(
    w: &mut W,
    record: &UserInfoRecord,
    login_time: DateTime<Utc>,
    tz: &Tz,
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let since = login_time.with_timezone(tz).format(LOGIN_FORMAT);
    let mut line = format!("On since {since} on {}", record.terminal);
    if !record.remote_host.is_empty() {
        let _ = write!(line, " from {}", record.remote_host);
    }
    if !record.idle_detail.is_empty() {
        let _ = write!(line, ",       {}", record.idle_detail);
    }
    let messages = if record.messages_enabled { "on" } else { "off" };
    writeln!(w, "{line} (messages {messages})")
}

pub fn write_never_logged_in<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Never logged in.")
}

pub fn write_mail<W, Tz>(w: &mut W, status: &MailStatus, tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let stamp = |t: &DateTime<Utc>| t.with_timezone(tz).format(MAIL_TIME_FORMAT).to_string();
    match status {
        MailStatus::NoMail => writeln!(w, "No Mail."),
        MailStatus::Read { at } => writeln!(w, "Mail last read {}", stamp(at)),
        MailStatus::NewMail {
            received,
            unread_since,
        } => {
            writeln!(w, "New mail received {}", stamp(received))?;
            writeln!(w, "     Unread since {}", stamp(unread_since))
        }
    }
}

pub fn write_plan<W: Write>(w: &mut W, status: &PlanStatus) -> io::Result<()> {
    match status {
        PlanStatus::NoPlan => writeln!(w, "No Plan."),
        PlanStatus::Plan(lines) => {
            writeln!(w, "Plan:")?;
            for line in lines {
                writeln!(w, "{line}")?;
            }
            Ok(())
        }
        PlanStatus::Unreadable(reason) => writeln!(w, "Plan: unreadable ({reason})"),
    }
}
