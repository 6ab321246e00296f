//! Command-line argument definitions.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

/// Report who is logged in, or what is known about given users.
///
/// Without user names, lists every active login session. With user names,
/// shows the account details and sessions of each user.
#[derive(Debug, Parser)]
#[command(name = "finger", version, about, long_about = None)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent command-line switch"
)]
pub struct Cli {
    /// Long format: adds home directory and shell.
    #[arg(short = 'l')]
    pub long: bool,

    /// Short format: login, name, terminal and idle time.
    #[arg(short = 's')]
    pub short: bool,

    /// Detailed report without mail and plan.
    #[arg(short = 'm')]
    pub no_extras: bool,

    /// Compact format: short format plus login time.
    #[arg(short = 'p')]
    pub compact: bool,

    /// Print records as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Users to report on.
    pub users: Vec<String>,
}

/// How records are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No flag: table for listings, detailed report for users.
    Default,
    /// `-l`
    Long,
    /// `-s`
    Short,
    /// `-p`
    Compact,
    /// `-m`: detailed report without mail and plan.
    NoExtras,
    /// `-ls`: detailed report for everyone logged in, once per user.
    Detailed,
}

/// An unsupported combination of mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageError;

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Usage: finger [-lmps] [user ...]")
    }
}

impl std::error::Error for UsageError {}

impl Cli {
    /// Resolves the mode flags into a single layout.
    pub const fn mode(&self) -> Result<Mode, UsageError> {
        match (self.long, self.short, self.no_extras, self.compact) {
            (false, false, false, false) => Ok(Mode::Default),
            (true, false, false, false) => Ok(Mode::Long),
            (false, true, false, false) => Ok(Mode::Short),
            (false, false, true, false) => Ok(Mode::NoExtras),
            (false, false, false, true) => Ok(Mode::Compact),
            (true, true, false, false) => Ok(Mode::Detailed),
            _ => Err(UsageError),
        }
    }
}
