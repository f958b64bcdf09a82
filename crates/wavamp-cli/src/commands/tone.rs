//! Sine test tone generation.

use clap::Args;
use std::path::PathBuf;
use wavamp_io::{WavFormat, WavSpec, write_wav_interleaved};

/// Write a sine tone to a 16-bit PCM WAV file.
#[derive(Args)]
pub struct ToneArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Frequency in Hz
    #[arg(long, default_value = "440.0")]
    freq: f32,

    /// Duration in seconds
    #[arg(long, default_value = "2.0")]
    duration: f32,

    /// Sample rate
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Channel count (the tone is copied to every channel)
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u16).range(1..=8))]
    channels: u16,

    /// Amplitude (0-1)
    #[arg(long, default_value = "0.5")]
    amplitude: f32,
}

/// Run the tone command.
pub fn run(args: ToneArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.sample_rate > 0, "sample rate must be positive");
    anyhow::ensure!(args.duration >= 0.0, "duration must not be negative");

    println!("Generating sine tone...");
    println!("  {} Hz for {:.2}s", args.freq, args.duration);

    let samples = sine_tone(
        args.freq,
        args.duration,
        args.sample_rate,
        args.channels,
        args.amplitude.clamp(0.0, 1.0),
    );
    let spec = WavSpec {
        channels: args.channels,
        sample_rate: args.sample_rate,
        bits_per_sample: 16,
        format: WavFormat::Pcm,
    };

    write_wav_interleaved(&args.output, &samples, spec)?;
    println!(
        "Wrote {} frames to {}",
        samples.len() / args.channels as usize,
        args.output.display()
    );
    Ok(())
}

/// Interleaved sine samples, identical on every channel.
fn sine_tone(freq: f32, duration: f32, sample_rate: u32, channels: u16, amplitude: f32) -> Vec<f32> {
    let num_frames = (duration * sample_rate as f32) as usize;
    (0..num_frames)
        .flat_map(|i| {
            let t = i as f32 / sample_rate as f32;
            let s = (2.0 * std::f32::consts::PI * freq * t).sin() * amplitude;
            std::iter::repeat_n(s, channels as usize)
        })
        .collect()
}
