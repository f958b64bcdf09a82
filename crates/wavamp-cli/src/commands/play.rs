//! Play a WAV file to the end.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use wavamp_config::{AmpConfig, config_file_path};
use wavamp_core::Volume;
use wavamp_io::{CpalBackend, PlaybackMode, Player};

/// How often the queue is topped up and the progress bar redrawn.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Args)]
pub struct PlayArgs {
    /// WAV file to play (default: player.default_file from the config, usually music.wav)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Playback volume (0-1)
    #[arg(long, value_parser = parse_volume)]
    volume: Option<f32>,

    /// Output device (index, exact name, or partial name)
    #[arg(short, long)]
    device: Option<String>,

    /// Open the device in the file's own format instead of converting
    #[arg(long)]
    raw: bool,

    /// Configuration file (default: user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_volume(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("invalid volume '{s}': {e}"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("volume {v} out of range [0, 1]"))
    }
}

pub fn run(args: PlayArgs) -> anyhow::Result<()> {
    let config_path = args.config.unwrap_or_else(config_file_path);
    let config = AmpConfig::load_or_default(&config_path)
        .with_context(|| format!("couldn't read {}", config_path.display()))?;

    let mut settings = config.player_settings();
    settings.start_paused = false;
    if args.raw {
        settings.mode = PlaybackMode::Direct;
    }
    if args.device.is_some() {
        settings.device_name = args.device;
    }
    if let Some(v) = args.volume {
        settings.initial_volume = Volume::new(v);
    }
    let buffer_frames = settings.buffer_frames;
    tracing::info!(
        config = %config_path.display(),
        mode = ?settings.mode,
        device = settings.device_name.as_deref().unwrap_or("default"),
        volume = settings.initial_volume.get(),
        "play settings"
    );

    let (err_tx, err_rx) = crossbeam_channel::bounded::<String>(16);
    let mut player = Player::new(Arc::new(CpalBackend::new()), settings).with_stream_error_handler(
        Arc::new(move |msg: &str| {
            let _ = err_tx.try_send(msg.to_string());
        }),
    );

    let file = args
        .file
        .unwrap_or_else(|| PathBuf::from(&config.player.default_file));
    println!("Loading {}...", file.display());
    player
        .load(&file)
        .with_context(|| format!("couldn't play {}", file.display()))?;

    if let (Some(spec), Some(device)) = (player.loaded_spec(), player.device_spec()) {
        tracing::info!(
            path = %file.display(),
            file_rate = spec.sample_rate,
            file_channels = spec.channels,
            device = %device,
            buffer_frames,
            "playback starting"
        );
        println!(
            "  {} Hz, {} ch, {}-bit {} -> {}",
            spec.sample_rate, spec.channels, spec.bits_per_sample, spec.format, device
        );
    }
    println!("\nPlaying... Press Ctrl+C to stop.\n");

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        println!("\nStopping...");
        r.store(false, Ordering::SeqCst);
    })?;

    let duration = player.duration_secs();
    let pb = ProgressBar::new(1000);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("##-"),
    );

    while running.load(Ordering::SeqCst) && !player.is_finished() {
        player.pump();
        while let Ok(msg) = err_rx.try_recv() {
            tracing::warn!(error = %msg, "output stream error");
            pb.println(format!("stream error: {msg}"));
        }
        pb.set_position((player.progress() * 1000.0) as u64);
        pb.set_message(format!(
            "{} / {}",
            format_time(player.position_secs()),
            format_time(duration)
        ));
        std::thread::sleep(POLL_INTERVAL);
    }

    if running.load(Ordering::SeqCst) {
        // The last queued samples are still in the device buffer
        if let Some(spec) = player.device_spec() {
            let tail = f64::from(buffer_frames) / f64::from(spec.sample_rate);
            std::thread::sleep(Duration::from_secs_f64(tail));
        }
        pb.finish_with_message(format!("{} / {}", format_time(duration), format_time(duration)));
        println!("Done!");
        tracing::info!(duration_secs = duration, "playback finished");
    } else {
        pb.abandon();
        tracing::info!(position_secs = player.position_secs(), "stopped by Ctrl+C");
    }

    player.close();
    Ok(())
}

/// Format seconds as `M:SS`.
fn format_time(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
