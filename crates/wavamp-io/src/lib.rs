//! Audio I/O layer for the wavamp player.
//!
//! This crate provides:
//!
//! - **WAV loading**: [`read_wav_interleaved`] and [`read_wav_info`]
//! - **Format conversion**: [`FormatConverter`] remaps channels and resamples
//!   decoded audio to the output device's format
//! - **Queued output**: [`AudioQueue`] and [`OutputDevice`] feed an output
//!   stream from samples queued on the UI thread
//! - **Playback**: [`Player`] ties loading, conversion, volume and the device
//!   together behind the handful of operations the front ends need
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wavamp_io::{CpalBackend, Player, PlayerSettings};
//!
//! let mut player = Player::new(Arc::new(CpalBackend::new()), PlayerSettings::default());
//! player.load("music.wav")?;
//! player.toggle_pause();
//! loop {
//!     player.pump();
//!     if player.is_finished() { break; }
//!     std::thread::sleep(std::time::Duration::from_millis(10));
//! }
//! ```

pub mod backend;
mod convert;
pub mod cpal_backend;
mod device;
mod output;
mod player;
mod queue;
mod wav;

pub use backend::{AudioBackend, BackendStreamConfig, ErrorCallback, OutputCallback, StreamHandle};
pub use convert::{AudioSpec, FormatConverter};
pub use cpal_backend::CpalBackend;
pub use device::AudioDevice;
pub use output::OutputDevice;
pub use player::{PlaybackMode, Player, PlayerSettings, StreamErrorHandler};
pub use queue::AudioQueue;
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav_info, read_wav_interleaved, write_wav_interleaved};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("No audio device available")]
    NoDevice,

    /// The requested format cannot be played.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
