//! Account lookups in a passwd-format database.

use std::path::PathBuf;

use finger_core::{AccountDirectory, AccountEntry, HostError};

const FIELD_COUNT: usize = 7;

/// A passwd file, `name:password:uid:gid:gecos:home:shell` per line.
#[derive(Debug, Clone)]
pub struct PasswdFile {
    path: PathBuf,
}

impl PasswdFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AccountDirectory for PasswdFile {
    fn lookup_account(&self, name: &str) -> Result<Option<AccountEntry>, HostError> {
        let bytes = std::fs::read(&self.path).map_err(|e| HostError::io(&self.path, e))?;
        // Legacy GECOS fields may hold Latin-1; one such entry must not hide the rest
        let contents = String::from_utf8_lossy(&bytes);
        Ok(find_account(&contents, name))
    }
}

/// Finds the first entry for `name` in passwd-format text.
pub fn find_account(contents: &str, name: &str) -> Option<AccountEntry> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .find_map(|(index, line)| {
            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() < FIELD_COUNT {
                tracing::warn!(line = index + 1, "skipping malformed passwd entry");
                return None;
            }
            (fields[0] == name).then(|| AccountEntry {
                identity: fields[4].to_string(),
                home_directory: fields[5].to_string(),
                shell: fields[6].to_string(),
            })
        })
}
