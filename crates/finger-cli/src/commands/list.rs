//! Listing of every active login session.

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::TimeZone;
use finger_core::{AccountEntry, SessionEntry, UserInfoRecord};

use super::{Host, Report, render, write_json};
use crate::Mode;

/// Runs the listing: a table of all sessions, or with [`Mode::Detailed`] a
/// detailed block for each logged-in user.
pub fn run<W, H, Tz>(w: &mut W, report: &Report<'_, H, Tz>, mode: Mode, json: bool) -> Result<()>
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
    tracing::debug!(count = sessions.len(), "active sessions");

    if mode == Mode::Detailed {
        return detailed(w, report, &sessions, json);
    }

    let mut records = Vec::with_capacity(sessions.len());
    for session in &sessions {
        if let Some(account) = account_for(report, session)? {
            records.push(report.record(session, &account));
        }
    }

    if json {
        return write_json(w, &records);
    }

    writeln!(w, "{}", render::header(mode))?;
    for record in &records {
        let terminal = render::listing_terminal(&record.terminal);
        writeln!(w, "{}", render::row(mode, record, &terminal))?;
    }
    Ok(())
}

fn detailed<W, H, Tz>(
    w: &mut W,
    report: &Report<'_, H, Tz>,
    sessions: &[SessionEntry],
    json: bool,
) -> Result<()>
where
    W: Write,
    H: Host + ?Sized,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut seen = HashSet::new();
    let mut entries: Vec<(&SessionEntry, AccountEntry, UserInfoRecord)> = Vec::new();
    for session in sessions {
        if !seen.insert(session.user.as_str()) {
            continue;
        }
        if let Some(account) = account_for(report, session)? {
            let record = report.record(session, &account);
            entries.push((session, account, record));
        }
    }

    if json {
        let records: Vec<UserInfoRecord> = entries.into_iter().map(|(_, _, r)| r).collect();
        return write_json(w, &records);
    }

    for (session, account, record) in &entries {
        render::write_profile(w, record)?;
        render::write_session(w, record, session.login_time, &report.ctx.tz)?;
        report.write_extras(w, &session.user, Path::new(&account.home_directory))?;
        writeln!(w)?;
    }
    Ok(())
}

fn account_for<H, Tz>(
    report: &Report<'_, H, Tz>,
    session: &SessionEntry,
) -> Result<Option<AccountEntry>>
where
    H: Host + ?Sized,
    Tz: TimeZone,
{
    let account = report
        .host
        .lookup_account(&session.user)
        .with_context(|| format!("failed to look up account {}", session.user))?;
    if account.is_none() {
        tracing::debug!(user = %session.user, "session without account, skipping");
    }
    Ok(account)
}
