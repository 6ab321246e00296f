//! Reports on named users.

use std::fmt;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::TimeZone;
use finger_core::{SessionEntry, UserInfoRecord, profile};

use super::{Host, Report, render, write_json};
use crate::Mode;

/// Runs the report for each name in `users`, in order.
///
/// Unknown users and remote (`user@host`) queries are reported on stderr and
/// skipped.
pub fn run<W, H, Tz>(
    w: &mut W,
    report: &Report<'_, H, Tz>,
    mode: Mode,
    users: &[String],
    json: bool,
) -> Result<()>
where
    W: Write,
    H: Host + ?Sized,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let sessions = report
        .host
        .active_sessions()
        .context("failed to read session table")?;

    let mut records = Vec::new();
    let mut blocks = 0;
    for name in users {
        if name.contains('@') {
            eprintln!("finger: {name}: remote queries are not supported.");
            continue;
        }

        let Some(account) = report
            .host
            .lookup_account(name)
            .with_context(|| format!("failed to look up account {name}"))?
        else {
            eprintln!("finger: {name}: no such user.");
            continue;
        };

        let own: Vec<&SessionEntry> = sessions.iter().filter(|s| s.user == *name).collect();
        let user_records: Vec<UserInfoRecord> =
            own.iter().map(|s| report.record(s, &account)).collect();
        tracing::debug!(user = %name, sessions = own.len(), "resolved user");

        if json {
            if user_records.is_empty() {
                records.push(profile(name, &account));
            } else {
                records.extend(user_records);
            }
            continue;
        }

        match mode {
            Mode::Short | Mode::Compact | Mode::Long => {
                for record in &user_records {
                    writeln!(w, "{}", render::row(mode, record, &record.terminal))?;
                }
            }
            Mode::Default | Mode::NoExtras | Mode::Detailed => {
                if blocks > 0 {
                    writeln!(w)?;
                }
                blocks += 1;

                let summary = user_records
                    .first()
                    .cloned()
                    .unwrap_or_else(|| profile(name, &account));
                render::write_profile(w, &summary)?;
                if own.is_empty() {
                    render::write_never_logged_in(w)?;
                }
                for (session, record) in own.iter().zip(&user_records) {
                    render::write_session(w, record, session.login_time, &report.ctx.tz)?;
                }
                if mode != Mode::NoExtras {
                    report.write_extras(w, name, Path::new(&account.home_directory))?;
                }
            }
        }
    }

    if json {
        write_json(w, &records)?;
    }
    Ok(())
}
