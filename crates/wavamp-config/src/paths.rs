//! Platform-specific configuration paths.
//!
//! - Linux: `~/.config/wavamp/config.toml`
//! - macOS: `~/Library/Application Support/wavamp/config.toml`
//! - Windows: `%APPDATA%\wavamp\config.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "wavamp";

/// File name of the main configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user configuration file.
pub fn config_file_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_in_app_dir() {
        let path = config_file_path();
        assert!(path.ends_with("wavamp/config.toml"));
        assert_eq!(path.parent(), Some(user_config_dir().as_path()));
    }
}
