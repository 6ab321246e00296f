//! Host collaborators backed by the local system.
//!
//! - `utmp`: the binary login session table
//! - `passwd`: the colon-delimited account database
//! - `fs`: file metadata and contents through `std::fs`

pub mod fs;
pub mod passwd;
pub mod utmp;

use std::path::{Path, PathBuf};

use finger_core::{
    AccountDirectory, AccountEntry, FileStat, Filesystem, HostError, SessionEntry, SessionTable,
};

pub use fs::SystemFilesystem;
pub use passwd::PasswdFile;
pub use utmp::UtmpFile;

/// The three host collaborators wired to files on this machine.
#[derive(Debug, Clone)]
pub struct SystemHost {
    pub sessions: UtmpFile,
    pub accounts: PasswdFile,
    pub files: SystemFilesystem,
}

impl SystemHost {
    pub fn new(utmp_path: impl Into<PathBuf>, passwd_path: impl Into<PathBuf>) -> Self {
        Self {
            sessions: UtmpFile::new(utmp_path),
            accounts: PasswdFile::new(passwd_path),
            files: SystemFilesystem,
        }
    }
}

impl SessionTable for SystemHost {
    fn active_sessions(&self) -> Result<Vec<SessionEntry>, HostError> {
        self.sessions.active_sessions()
    }
}

impl AccountDirectory for SystemHost {
    fn lookup_account(&self, name: &str) -> Result<Option<AccountEntry>, HostError> {
        self.accounts.lookup_account(name)
    }
}

impl Filesystem for SystemHost {
    fn stat(&self, path: &Path) -> Option<FileStat> {
        self.files.stat(path)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, HostError> {
        self.files.read_lines(path)
    }
}
