//! Reader for the binary utmp session table.
//!
//! Records use the glibc layout on 64-bit Linux:
//!
//! | offset | field          | size |
//! |--------|----------------|------|
//! | 0      | `ut_type`      | 2    |
//! | 8      | `ut_line`      | 32   |
//! | 44     | `ut_user`      | 32   |
//! | 76     | `ut_host`      | 256  |
//! | 340    | `ut_tv.tv_sec` | 4    |

use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::DateTime;
use finger_core::{HostError, SessionEntry, SessionTable};

pub const RECORD_SIZE: usize = 384;

/// `ut_type` of a record describing a logged-in user.
pub const USER_PROCESS: i16 = 7;

const TYPE_OFFSET: usize = 0;
const LINE_OFFSET: usize = 8;
const LINE_SIZE: usize = 32;
const USER_OFFSET: usize = 44;
const USER_SIZE: usize = 32;
const HOST_OFFSET: usize = 76;
const HOST_SIZE: usize = 256;
const TV_SEC_OFFSET: usize = 340;

/// A utmp file on disk.
#[derive(Debug, Clone)]
pub struct UtmpFile {
    path: PathBuf,
}

impl UtmpFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionTable for UtmpFile {
    fn active_sessions(&self) -> Result<Vec<SessionEntry>, HostError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no session table");
                return Ok(Vec::new());
            }
            Err(e) => return Err(HostError::io(&self.path, e)),
        };
        Ok(parse_sessions(&bytes))
    }
}

/// Decodes the user-process records in a raw utmp table.
pub fn parse_sessions(bytes: &[u8]) -> Vec<SessionEntry> {
    let chunks = bytes.chunks_exact(RECORD_SIZE);
    if !chunks.remainder().is_empty() {
        tracing::debug!(
            trailing = chunks.remainder().len(),
            "ignoring partial utmp record"
        );
    }

    chunks.filter_map(parse_record).collect()
}

fn parse_record(record: &[u8]) -> Option<SessionEntry> {
    let ut_type = i16::from_ne_bytes([record[TYPE_OFFSET], record[TYPE_OFFSET + 1]]);
    if ut_type != USER_PROCESS {
        return None;
    }

    let user = text(&record[USER_OFFSET..USER_OFFSET + USER_SIZE]);
    let device = text(&record[LINE_OFFSET..LINE_OFFSET + LINE_SIZE]);
    let host = text(&record[HOST_OFFSET..HOST_OFFSET + HOST_SIZE]);
    let tv_sec = i32::from_ne_bytes([
        record[TV_SEC_OFFSET],
        record[TV_SEC_OFFSET + 1],
        record[TV_SEC_OFFSET + 2],
        record[TV_SEC_OFFSET + 3],
    ]);

    let Some(login_time) = DateTime::from_timestamp(i64::from(tv_sec), 0) else {
        tracing::debug!(%user, tv_sec, "skipping session with invalid login time");
        return None;
    };

    Some(SessionEntry {
        user,
        device,
        host,
        login_time,
    })
}

/// NUL-padded fixed field to text.
fn text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ut_type: i16, user: &str, line: &str, host: &str, tv_sec: i32) -> Vec<u8> {
        let mut buf = vec![0u8; RECORD_SIZE];
        buf[TYPE_OFFSET..TYPE_OFFSET + 2].copy_from_slice(&ut_type.to_ne_bytes());
        buf[LINE_OFFSET..LINE_OFFSET + line.len()].copy_from_slice(line.as_bytes());
        buf[USER_OFFSET..USER_OFFSET + user.len()].copy_from_slice(user.as_bytes());
        buf[HOST_OFFSET..HOST_OFFSET + host.len()].copy_from_slice(host.as_bytes());
        buf[TV_SEC_OFFSET..TV_SEC_OFFSET + 4].copy_from_slice(&tv_sec.to_ne_bytes());
        buf
    }

    #[test]
    fn decodes_user_process_records() {
        let mut table = record(USER_PROCESS, "alice", "pts/1", "10.0.0.5", 1_700_000_000);
        table.extend(record(USER_PROCESS, "bob", "console", "", 1_700_000_600));

        let sessions = parse_sessions(&table);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].user, "alice");
        assert_eq!(sessions[0].device, "pts/1");
        assert_eq!(sessions[0].host, "10.0.0.5");
        assert_eq!(sessions[0].login_time.timestamp(), 1_700_000_000);
        assert_eq!(sessions[1].user, "bob");
        assert_eq!(sessions[1].host, "");
    }

    #[test]
    fn skips_other_record_types() {
        let boot_time = 2;
        let login_process = 6;
        let mut table = record(boot_time, "reboot", "~", "", 1_700_000_000);
        table.extend(record(login_process, "LOGIN", "tty1", "", 1_700_000_000));
        table.extend(record(USER_PROCESS, "carol", "tty2", "", 1_700_000_000));

        let sessions = parse_sessions(&table);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].user, "carol");
    }

    #[test]
    fn full_width_fields_have_no_terminator() {
        let user = "u".repeat(USER_SIZE);
        let table = record(USER_PROCESS, &user, "tty1", "", 0);
        assert_eq!(parse_sessions(&table)[0].user, user);
    }

    #[test]
    fn ignores_trailing_partial_record() {
        let mut table = record(USER_PROCESS, "dave", "pts/0", "", 1_700_000_000);
        table.extend([0u8; 100]);
        assert_eq!(parse_sessions(&table).len(), 1);
    }

    #[test]
    fn missing_table_has_no_sessions() {
        let temp = tempfile::tempdir().unwrap();
        let utmp = UtmpFile::new(temp.path().join("utmp"));
        assert!(utmp.active_sessions().unwrap().is_empty());
    }

    #[test]
    fn reads_table_from_disk_on_every_call() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("utmp");
        std::fs::write(&path, record(USER_PROCESS, "erin", "pts/4", "", 1_700_000_000)).unwrap();

        let utmp = UtmpFile::new(&path);
        assert_eq!(utmp.active_sessions().unwrap().len(), 1);
        assert_eq!(utmp.active_sessions().unwrap().len(), 1);
    }
}
