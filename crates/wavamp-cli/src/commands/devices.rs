//! Audio output device listing.

use clap::Args;
use wavamp_io::{AudioBackend, CpalBackend};

#[derive(Args)]
pub struct DevicesArgs {
    /// Only show the default output device
    #[arg(long)]
    default: bool,
}

pub fn run(args: DevicesArgs) -> anyhow::Result<()> {
    let backend = CpalBackend::new();

    if args.default {
        match backend.default_output_device()? {
            Some(device) => println!(
                "{} ({} Hz, {} ch)",
                device.name, device.default_sample_rate, device.default_channels
            ),
            None => println!("No default output device."),
        }
        return Ok(());
    }

    let devices = backend.list_devices()?;
    if devices.is_empty() {
        println!("No audio output devices found.");
        return Ok(());
    }

    println!("Output Devices:");
    for (idx, device) in devices.iter().enumerate() {
        let marker = if device.is_default { " (default)" } else { "" };
        println!(
            "  [{}] {} ({} Hz, {} ch){}",
            idx, device.name, device.default_sample_rate, device.default_channels, marker
        );
    }
    println!();
    println!("Tip: Use device index or partial name with --device:");
    println!("  wavamp play music.wav --device 0");

    Ok(())
}
