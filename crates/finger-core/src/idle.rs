//! Idle-time resolution for a login session.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::interval::format_interval;

/// Device name of the primary console.
///
/// Its idle time is measured from the login time instead of the device file.
pub const PRIMARY_CONSOLE: &str = "console";

/// Path of the device file for a session's terminal.
pub fn device_path(device_dir: &Path, device: &str) -> PathBuf {
    device_dir.join(device)
}

/// Seconds since the last activity on `device`, or `None` when unknown.
///
/// Future timestamps give a zero duration.
#[allow(clippy::cast_precision_loss)]
pub fn idle_seconds<F>(
    device: &str,
    login_time: DateTime<Utc>,
    now: DateTime<Utc>,
    device_dir: &Path,
    last_accessed: F,
) -> Option<f64>
where
    F: FnOnce(&Path) -> Option<DateTime<Utc>>,
{
    let since = if device == PRIMARY_CONSOLE {
        login_time
    } else {
        let path = device_path(device_dir, device);
        let accessed = last_accessed(&path);
        if accessed.is_none() {
            tracing::debug!(path = %path.display(), "device unavailable, idle time unknown");
        }
        accessed?
    };

    let elapsed_ms = (now - since).num_milliseconds().max(0);
    Some(elapsed_ms as f64 / 1000.0)
}

/// Compact idle-time label for a session, empty when the device is unavailable.
pub fn resolve_idle<F>(
    device: &str,
    login_time: DateTime<Utc>,
    now: DateTime<Utc>,
    device_dir: &Path,
    last_accessed: F,
) -> String
where
    F: FnOnce(&Path) -> Option<DateTime<Utc>>,
{
    idle_seconds(device, login_time, now, device_dir, last_accessed)
        .map(|seconds| format_interval(seconds, false))
        .unwrap_or_default()
}
