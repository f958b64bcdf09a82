//! End-to-end tests for the `wavamp` binary.
//!
//! Only commands that need no audio device are run here.

use std::process::Command;
use tempfile::TempDir;

/// Helper to get the path to the `wavamp` binary built by cargo.
fn wavamp_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wavamp"))
}

#[test]
fn cli_help_lists_subcommands() {
    let output = wavamp_bin()
        .arg("--help")
        .output()
        .expect("failed to run wavamp --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in ["play", "info", "devices", "tone"] {
        assert!(stdout.contains(cmd), "help should mention '{cmd}'");
    }
}

#[test]
fn cli_tone_then_info() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("music.wav");

    let output = wavamp_bin()
        .args(["tone", path.to_str().unwrap()])
        .args(["--freq", "220", "--duration", "0.5", "--sample-rate", "22050", "--channels", "1"])
        .output()
        .expect("failed to run wavamp tone");
    assert!(
        output.status.success(),
        "tone failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(path.is_file());

    let output = wavamp_bin()
        .args(["info", path.to_str().unwrap()])
        .output()
        .expect("failed to run wavamp info");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Format:      PCM 16-bit"), "{stdout}");
    assert!(stdout.contains("Channels:    1"), "{stdout}");
    assert!(stdout.contains("Sample Rate: 22050 Hz"), "{stdout}");
    assert!(stdout.contains("11025 frames"), "{stdout}");
}

#[test]
fn cli_info_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = wavamp_bin()
        .args(["info", dir.path().join("absent.wav").to_str().unwrap()])
        .output()
        .expect("failed to run wavamp info");
    assert!(!output.status.success());
}

#[test]
fn cli_tone_rejects_bad_channel_count() {
    let dir = TempDir::new().unwrap();
    let output = wavamp_bin()
        .args(["tone", dir.path().join("t.wav").to_str().unwrap(), "--channels", "0"])
        .output()
        .expect("failed to run wavamp tone");
    assert!(!output.status.success());
}

#[test]
fn cli_play_rejects_out_of_range_volume() {
    let output = wavamp_bin()
        .args(["play", "music.wav", "--volume", "2"])
        .output()
        .expect("failed to run wavamp play");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn cli_play_logs_settings_before_loading() {
    let dir = TempDir::new().unwrap();
    let output = wavamp_bin()
        .env("RUST_LOG", "info")
        .args(["play", dir.path().join("absent.wav").to_str().unwrap()])
        .args(["--config", dir.path().join("config.toml").to_str().unwrap()])
        .args(["--raw", "--volume", "0.5"])
        .output()
        .expect("failed to run wavamp play");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("play settings"), "{stderr}");
    assert!(stderr.contains("Direct"), "{stderr}");
    assert!(stderr.contains("couldn't play"), "{stderr}");
}
