//! WAV file reading and writing.

use crate::convert::AudioSpec;
use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

impl std::fmt::Display for WavFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WavFormat::Pcm => f.write_str("PCM"),
            WavFormat::IeeeFloat => f.write_str("IEEE Float"),
        }
    }
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let num_frames = reader.duration() as u64;
    let duration_secs = num_frames as f64 / spec.sample_rate as f64;

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format: spec.sample_format.into(),
    })
}

impl From<SampleFormat> for WavFormat {
    fn from(format: SampleFormat) -> Self {
        match format {
            SampleFormat::Float => WavFormat::IeeeFloat,
            SampleFormat::Int => WavFormat::Pcm,
        }
    }
}

/// Format descriptor of a loaded WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (e.g., 16, 24, 32).
    pub bits_per_sample: u16,
    /// Sample encoding.
    pub format: WavFormat,
}

impl WavSpec {
    /// The device-facing part of the spec (rate and channel count).
    pub fn audio_spec(&self) -> AudioSpec {
        AudioSpec::new(self.sample_rate, self.channels)
    }
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 16,
            format: WavFormat::Pcm,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            format: spec.sample_format.into(),
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: match spec.format {
                WavFormat::IeeeFloat => SampleFormat::Float,
                WavFormat::Pcm => SampleFormat::Int,
            },
        }
    }
}

/// Read a WAV file into interleaved f32 samples along with its spec.
///
/// Integer PCM is normalized into `[-1.0, 1.0)`; the channel layout is kept
/// as stored in the file.
///
/// # Example
/// ```ignore
/// let (samples, spec) = read_wav_interleaved("music.wav")?;
/// println!("{} frames at {} Hz", samples.len() / spec.channels as usize, spec.sample_rate);
/// ```
pub fn read_wav_interleaved<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());

    if spec.channels == 0 {
        return Err(Error::Wav(hound::Error::FormatError("file contains no channels")));
    }

    let samples: Vec<f32> = match spec.format {
        WavFormat::IeeeFloat => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        WavFormat::Pcm => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        samples = samples.len(),
        "wav loaded"
    );

    Ok((samples, spec))
}

/// Write interleaved samples to a WAV file.
///
/// 32-bit float specs are written as-is; integer specs are scaled and
/// clamped to the bit depth.
pub fn write_wav_interleaved<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    match spec.format {
        WavFormat::IeeeFloat => {
            for &sample in samples {
                writer.write_sample(sample)?;
            }
        }
        WavFormat::Pcm => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            for &sample in samples {
                let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
                writer.write_sample(int_sample)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}
