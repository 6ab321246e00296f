//! File access through `std::fs`.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use chrono::{DateTime, Utc};
use finger_core::{FileStat, Filesystem, HostError};

/// Reads metadata and contents of files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFilesystem;

impl Filesystem for SystemFilesystem {
    fn stat(&self, path: &Path) -> Option<FileStat> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "stat failed");
                return None;
            }
        };

        Some(FileStat {
            accessed: timestamp(meta.atime(), meta.atime_nsec())?,
            modified: timestamp(meta.mtime(), meta.mtime_nsec())?,
            mode: meta.mode(),
        })
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, HostError> {
        let file = File::open(path).map_err(|e| HostError::io(path, e))?;
        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| HostError::io(path, e))?;
            if read == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            // Bytes are kept as written; only invalid UTF-8 is replaced
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }
        Ok(lines)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timestamp(secs: i64, nsecs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, nsecs.clamp(0, 999_999_999) as u32)
}
