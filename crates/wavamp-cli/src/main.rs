//! wavamp - play WAV files from the command line.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wavamp")]
#[command(author, version, about = "WAV player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a WAV file until it ends
    Play(commands::play::PlayArgs),

    /// Show WAV file metadata
    Info(commands::info::InfoArgs),

    /// List audio output devices
    Devices(commands::devices::DevicesArgs),

    /// Write a sine test tone to a WAV file
    Tone(commands::tone::ToneArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay quiet by default so the progress bar is readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => commands::play::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Devices(args) => commands::devices::run(args),
        Commands::Tone(args) => commands::tone::run(args),
    }
}
