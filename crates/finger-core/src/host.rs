//! Collaborator interfaces for reaching the host system.
//!
//! The core never reads the session table, the account database or file
//! metadata itself. Callers hand it implementations of these traits.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::record::{AccountEntry, SessionEntry};

/// Group write permission on a terminal device, i.e. `mesg y`.
const GROUP_WRITE: u32 = 0o020;

/// Errors from host collaborators.
///
/// Absent accounts and files are not errors; they are reported as `None`.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HostError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Metadata snapshot of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub accessed: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Permission bits as in `st_mode`.
    pub mode: u32,
}

impl FileStat {
    /// Whether other users may write to this terminal device.
    pub const fn accepts_messages(&self) -> bool {
        self.mode & GROUP_WRITE != 0
    }
}

/// Looks up accounts by login name.
pub trait AccountDirectory {
    fn lookup_account(&self, name: &str) -> Result<Option<AccountEntry>, HostError>;
}

/// Enumerates the active login sessions.
///
/// Each call starts a fresh pass over the table.
pub trait SessionTable {
    fn active_sessions(&self) -> Result<Vec<SessionEntry>, HostError>;
}

/// Read-only file access.
pub trait Filesystem {
    /// Returns metadata for `path`, or `None` if it is missing or inaccessible.
    fn stat(&self, path: &Path) -> Option<FileStat>;

    /// Reads `path` line by line, without line terminators.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, HostError>;

    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_some()
    }
}
