//! Config root and file location resolution

use directories::UserDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config root directory.
pub const LTC_CLI_HOME_VAR: &str = "LTC_CLI_HOME";

/// The directory the config file lives under: `LTC_CLI_HOME` when set
/// and non-empty, the user's home directory otherwise.
pub fn config_root() -> PathBuf {
    if let Ok(home) = env::var(LTC_CLI_HOME_VAR) {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }

    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Location of the config file under a config root.
pub fn config_file_location(root: &Path) -> PathBuf {
    root.join(".ltc").join("config.yml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_root_env_override() {
        let original = env::var(LTC_CLI_HOME_VAR).ok();
        env::set_var(LTC_CLI_HOME_VAR, "/custom/ltc-home");

        assert_eq!(config_root(), PathBuf::from("/custom/ltc-home"));

        match original {
            Some(val) => env::set_var(LTC_CLI_HOME_VAR, val),
            None => env::remove_var(LTC_CLI_HOME_VAR),
        }
    }

    #[test]
    fn test_config_file_location() {
        let path = config_file_location(Path::new("/custom/ltc-home"));
        assert_eq!(path, PathBuf::from("/custom/ltc-home/.ltc/config.yml"));
    }
}
