//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Every key names a file or directory the report reads from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Binary login session table.
    pub utmp_path: PathBuf,
    /// Account database in passwd format.
    pub passwd_path: PathBuf,
    /// Directory holding terminal device files.
    pub device_dir: PathBuf,
    /// Directory holding one mailbox per user.
    pub mail_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            utmp_path: PathBuf::from("/var/run/utmp"),
            passwd_path: PathBuf::from("/etc/passwd"),
            device_dir: PathBuf::from("/dev"),
            mail_dir: PathBuf::from("/var/mail"),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // FINGER_UTMP_PATH, FINGER_MAIL_DIR, ...
        figment = figment.merge(Env::prefixed("FINGER_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for finger.
///
/// On Linux: `~/.config/finger`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("finger"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_system_locations() {
        let config = Config::default();
        assert_eq!(config.utmp_path, PathBuf::from("/var/run/utmp"));
        assert_eq!(config.passwd_path, PathBuf::from("/etc/passwd"));
        assert_eq!(config.device_dir, PathBuf::from("/dev"));
        assert_eq!(config.mail_dir, PathBuf::from("/var/mail"));
    }

    #[test]
    fn dirs_config_path_ends_with_finger() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "finger");
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("finger.toml");
        std::fs::write(&path, "mail_dir = \"/srv/mail\"\nutmp_path = \"/tmp/utmp\"\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.mail_dir, PathBuf::from("/srv/mail"));
        assert_eq!(config.utmp_path, PathBuf::from("/tmp/utmp"));
    }
}
