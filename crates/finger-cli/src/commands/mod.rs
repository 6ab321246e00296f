//! Report generation for the listing and per-user modes.

pub mod list;
pub mod render;
pub mod user;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::TimeZone;
use finger_core::{
    AccountDirectory, AccountEntry, Filesystem, ReportContext, SessionEntry, SessionTable,
    UserInfoRecord, check_mail, check_plan,
};

/// Everything a report needs from the host.
pub trait Host: SessionTable + AccountDirectory + Filesystem {}

impl<T: SessionTable + AccountDirectory + Filesystem> Host for T {}

/// One report run: the host, the sampled clock and where mailboxes live.
pub struct Report<'a, H: ?Sized, Tz: TimeZone> {
    pub host: &'a H,
    pub ctx: ReportContext<Tz>,
    pub mail_dir: PathBuf,
}

impl<'a, H, Tz> Report<'a, H, Tz>
where
    H: Host + ?Sized,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    pub fn new(host: &'a H, ctx: ReportContext<Tz>, mail_dir: impl Into<PathBuf>) -> Self {
        Self {
            host,
            ctx,
            mail_dir: mail_dir.into(),
        }
    }

    pub fn record(&self, session: &SessionEntry, account: &AccountEntry) -> UserInfoRecord {
        finger_core::aggregate(session, account, &self.ctx, self.host)
    }

    /// Writes the mail and plan lines for `login`.
    pub fn write_extras<W: Write>(&self, w: &mut W, login: &str, home: &Path) -> Result<()> {
        let mail = check_mail(self.host, &self.mail_dir, login);
        render::write_mail(w, &mail, &self.ctx.tz)?;
        let plan = check_plan(self.host, home);
        render::write_plan(w, &plan)?;
        Ok(())
    }
}

/// Prints records as a JSON array.
pub fn write_json<W: Write>(w: &mut W, records: &[UserInfoRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    writeln!(w, "{json}")?;
    Ok(())
}
