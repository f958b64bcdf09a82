//! File-backed configuration tests.

use tempfile::TempDir;
use wavamp_config::{AmpConfig, ConfigError};
use wavamp_io::PlaybackMode;

#[test]
fn save_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AmpConfig::default();
    config.window.title = "my player".into();
    config.audio.convert = false;
    config.audio.device = Some("USB".into());
    config.player.initial_volume = 0.75;
    config.save(&path).unwrap();

    let loaded = AmpConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.playback_mode(), PlaybackMode::Direct);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AmpConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AmpConfig::default());
}

#[test]
fn load_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = AmpConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn invalid_file_is_an_error_even_with_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[audio]\nbuffer_frames = 100\n").unwrap();

    let err = AmpConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("power of two"));
}
