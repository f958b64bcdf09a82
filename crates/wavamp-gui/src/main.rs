//! wavamp GUI entry point.

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use wavamp_config::{AmpConfig, config_file_path};
use wavamp_gui::{AmpApp, panic_and_abort};
use wavamp_io::CpalBackend;

/// Drag-and-drop WAV player.
#[derive(Parser, Debug)]
#[command(name = "wavamp-gui")]
#[command(about = "Drag-and-drop WAV player")]
#[command(version)]
struct Args {
    /// Configuration file (default: user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// WAV file to load at startup
    #[arg(long)]
    file: Option<PathBuf>,

    /// Open the device in the file's own format instead of converting
    #[arg(long)]
    raw: bool,

    /// Output device name or index (overrides the config file)
    #[arg(long)]
    device: Option<String>,
}

fn main() {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config_file_path);
    let mut config = match AmpConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => panic_and_abort("Couldn't read configuration!", &e.to_string()),
    };
    if args.raw {
        config.audio.convert = false;
    }
    if args.device.is_some() {
        config.audio.device = args.device.clone();
    }

    tracing::info!(
        config = %config_path.display(),
        mode = ?config.playback_mode(),
        device = config.audio.device.as_deref().unwrap_or("default"),
        "starting wavamp"
    );

    let width = config.window.width;
    let height = config.window.height;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_resizable(false)
            .with_drag_and_drop(true)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    let settings = config.player_settings();
    let startup_file = args.file.clone();
    let title = config.window.title.clone();
    let result = eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let backend = Arc::new(CpalBackend::new());
            let mut app = AmpApp::new(backend, settings, width as i32, height as i32);
            if let Some(path) = startup_file {
                app.open(&path);
            }
            Ok(Box::new(app))
        }),
    );

    if let Err(e) = result {
        panic_and_abort("Couldn't create window!", &e.to_string());
    }
}
