//! The `config.toml` document.

use crate::ConfigError;
use crate::validation::validate_config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wavamp_core::{DEFAULT_FILE_HINT, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, Volume};
use wavamp_io::{AudioSpec, PlaybackMode, PlayerSettings};

/// Player configuration as stored in `config.toml`.
///
/// Every table and field is optional; missing values take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmpConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Output device settings.
    pub audio: AudioConfig,
    /// Playback defaults.
    pub player: PlayerConfig,
}

/// `[window]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Inner width in pixels.
    pub width: u32,
    /// Inner height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH as u32,
            height: DEFAULT_WINDOW_HEIGHT as u32,
            title: "wavamp".to_string(),
        }
    }
}

/// `[audio]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Device sample rate when converting.
    pub sample_rate: u32,
    /// Device channel count when converting.
    pub channels: u16,
    /// Requested device buffer size in frames.
    pub buffer_frames: u32,
    /// Convert to the device format (`true`) or open the device in the
    /// file's own format (`false`).
    pub convert: bool,
    /// Output device index or name; the default device when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            channels: 2,
            buffer_frames: 4096,
            convert: true,
            device: None,
        }
    }
}

/// `[player]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// File opened when none is given.
    pub default_file: String,
    /// Volume before the first change, in `[0.0, 1.0]`.
    pub initial_volume: f32,
    /// Whether playback waits for the first play press.
    pub start_paused: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_file: DEFAULT_FILE_HINT.to_string(),
            initial_volume: 1.0,
            start_paused: true,
        }
    }
}

impl AmpConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// A file that exists but cannot be read or fails validation is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_config(self)?;
        Ok(())
    }

    /// Device format used in converted mode.
    pub fn target_spec(&self) -> AudioSpec {
        AudioSpec::new(self.audio.sample_rate, self.audio.channels)
    }

    /// Playback mode selected by `audio.convert`.
    pub fn playback_mode(&self) -> PlaybackMode {
        if self.audio.convert {
            PlaybackMode::Converted
        } else {
            PlaybackMode::Direct
        }
    }

    /// Build [`PlayerSettings`] from this configuration.
    pub fn player_settings(&self) -> PlayerSettings {
        PlayerSettings {
            mode: self.playback_mode(),
            target: self.target_spec(),
            buffer_frames: self.audio.buffer_frames,
            device_name: self.audio.device.clone(),
            start_paused: self.player.start_paused,
            initial_volume: Volume::new(self.player.initial_volume),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AmpConfig::from_toml("").unwrap();
        assert_eq!(config, AmpConfig::default());
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.player.default_file, "music.wav");
        assert!(config.player.start_paused);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = AmpConfig::from_toml(
            r#"
[audio]
sample_rate = 44100
device = "USB"

[player]
initial_volume = 0.5
"#,
        )
        .unwrap();
        assert_eq!(config.audio.sample_rate, 44100);
        assert_eq!(config.audio.channels, 2);
        assert_eq!(config.audio.device.as_deref(), Some("USB"));
        assert_eq!(config.player.initial_volume, 0.5);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn invalid_values_fail_to_parse() {
        let err = AmpConfig::from_toml("[audio]\nchannels = 12\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn wrong_type_is_a_toml_error() {
        let err = AmpConfig::from_toml("[window]\nwidth = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn to_toml_omits_missing_device() {
        let toml = AmpConfig::default().to_toml().unwrap();
        assert!(toml.contains("[window]"));
        assert!(toml.contains("buffer_frames = 4096"));
        assert!(!toml.contains("device"));
    }

    #[test]
    fn convert_flag_selects_mode() {
        let mut config = AmpConfig::default();
        assert_eq!(config.playback_mode(), PlaybackMode::Converted);
        config.audio.convert = false;
        assert_eq!(config.player_settings().mode, PlaybackMode::Direct);
    }

    #[test]
    fn player_settings_carry_audio_and_player_tables() {
        let mut config = AmpConfig::default();
        config.audio.sample_rate = 44100;
        config.audio.channels = 1;
        config.audio.buffer_frames = 1024;
        config.audio.device = Some("1".into());
        config.player.initial_volume = 0.25;
        config.player.start_paused = false;

        let settings = config.player_settings();
        assert_eq!(settings.target, AudioSpec::new(44100, 1));
        assert_eq!(settings.buffer_frames, 1024);
        assert_eq!(settings.device_name.as_deref(), Some("1"));
        assert_eq!(settings.initial_volume.get(), 0.25);
        assert!(!settings.start_paused);
    }
}
