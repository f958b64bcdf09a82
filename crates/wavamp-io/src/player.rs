//! Playback of one loaded WAV file through an [`OutputDevice`].

use crate::backend::AudioBackend;
use crate::convert::{AudioSpec, FormatConverter};
use crate::output::OutputDevice;
use crate::wav::{WavSpec, read_wav_interleaved};
use crate::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wavamp_core::{PlaybackState, Volume, apply_gain};

/// Frames moved from the converter to the device queue per chunk.
const CHUNK_FRAMES: usize = 1024;

/// How decoded audio reaches the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Open the device in the file's own format and queue the whole buffer
    /// at once. Volume is applied when the buffer is queued.
    Direct,
    /// Open the device in the target format and feed it converted chunks,
    /// each scaled by the volume at the time it is queued.
    #[default]
    Converted,
}

/// Player configuration.
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    /// Direct or converted playback.
    pub mode: PlaybackMode,
    /// Device format in [`PlaybackMode::Converted`].
    pub target: AudioSpec,
    /// Requested device buffer size in frames.
    pub buffer_frames: u32,
    /// Output device selector (index or name); `None` uses the default.
    pub device_name: Option<String>,
    /// Paused state before the first toggle.
    pub start_paused: bool,
    /// Volume before the first change.
    pub initial_volume: Volume,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            mode: PlaybackMode::Converted,
            target: AudioSpec::new(48000, 2),
            buffer_frames: 4096,
            device_name: None,
            start_paused: true,
            initial_volume: Volume::FULL,
        }
    }
}

/// Callback for errors raised on the audio thread.
pub type StreamErrorHandler = Arc<dyn Fn(&str) + Send + Sync>;

struct Track {
    path: PathBuf,
    samples: Vec<f32>,
    spec: WavSpec,
}

/// Loads WAV files and plays them with pause, rewind and volume control.
///
/// Every operation is a no-op when nothing is loaded. Call
/// [`pump`](Self::pump) regularly (once per UI frame) so converted playback
/// keeps the device queue topped up.
pub struct Player {
    backend: Arc<dyn AudioBackend>,
    settings: PlayerSettings,
    on_stream_error: StreamErrorHandler,
    track: Option<Track>,
    device: Option<OutputDevice>,
    converter: Option<FormatConverter>,
    state: PlaybackState,
    volume: Volume,
    total_frames: u64,
    scratch: Vec<f32>,
}

impl Player {
    /// Create a player with nothing loaded.
    pub fn new(backend: Arc<dyn AudioBackend>, settings: PlayerSettings) -> Self {
        Self {
            backend,
            state: PlaybackState::new(settings.start_paused),
            volume: settings.initial_volume,
            settings,
            on_stream_error: Arc::new(|msg: &str| tracing::error!("output stream error: {msg}")),
            track: None,
            device: None,
            converter: None,
            total_frames: 0,
            scratch: Vec::new(),
        }
    }

    /// Route audio-thread stream errors to `handler` instead of the log.
    pub fn with_stream_error_handler(mut self, handler: StreamErrorHandler) -> Self {
        self.on_stream_error = handler;
        self
    }

    /// Replace the loaded file with `path`.
    ///
    /// The current device is closed and the current buffer freed first, so
    /// a failed load leaves nothing loaded. On success the whole file is
    /// queued from the start and the current paused state is applied.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.close();

        let (samples, spec) = read_wav_interleaved(path)?;
        let device_spec = match self.settings.mode {
            PlaybackMode::Direct => spec.audio_spec(),
            PlaybackMode::Converted => self.settings.target,
        };

        let handler = Arc::clone(&self.on_stream_error);
        let device = OutputDevice::open(
            self.backend.as_ref(),
            device_spec,
            self.settings.buffer_frames,
            self.settings.device_name.as_deref(),
            Box::new(move |msg: &str| handler(msg)),
        )?;

        if self.settings.mode == PlaybackMode::Converted {
            self.converter = Some(FormatConverter::new(spec.audio_spec(), device_spec));
        }
        self.track = Some(Track {
            path: path.to_path_buf(),
            samples,
            spec,
        });
        self.device = Some(device);
        self.restart();

        if let Some(device) = &self.device {
            device.set_paused(self.state.is_paused());
        }

        tracing::info!(
            path = %path.display(),
            channels = spec.channels,
            sample_rate = spec.sample_rate,
            device = %device_spec,
            mode = ?self.settings.mode,
            "file loaded"
        );
        Ok(())
    }

    /// Close the device and free the loaded buffer.
    pub fn close(&mut self) {
        if self.device.take().is_some() {
            tracing::debug!("output device closed");
        }
        self.converter = None;
        self.track = None;
        self.total_frames = 0;
    }

    /// Drop queued audio and start the loaded file over.
    pub fn rewind(&mut self) {
        if self.device.is_some() {
            self.restart();
            tracing::debug!("rewound");
        }
    }

    /// Flip the paused state and apply it to the device.
    ///
    /// Returns the paused state afterwards. Without a device nothing changes.
    pub fn toggle_pause(&mut self) -> bool {
        if let Some(device) = &self.device {
            let paused = self.state.toggle();
            if paused {
                device.pause();
            } else {
                device.resume();
            }
            tracing::debug!(paused, "pause toggled");
        }
        self.state.is_paused()
    }

    /// Whether playback is paused.
    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Set the volume for audio queued from now on.
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }

    /// Current volume.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Move converted audio into the device queue.
    ///
    /// Tops the queue up to two device buffers, in chunks of at most 1024
    /// frames, each scaled by the current volume. Does nothing in
    /// [`PlaybackMode::Direct`].
    pub fn pump(&mut self) {
        let (Some(device), Some(converter)) = (&self.device, &mut self.converter) else {
            return;
        };

        let channels = device.spec().channels as usize;
        let low_water = device.buffer_frames() as usize * 2 * channels;
        self.scratch.resize(CHUNK_FRAMES * channels, 0.0);

        while device.queued_samples() < low_water && converter.available() > 0 {
            let n = converter.get(&mut self.scratch);
            if n == 0 {
                break;
            }
            let chunk = &mut self.scratch[..n];
            apply_gain(chunk, self.volume.get());
            device.queue_audio(chunk);
        }
    }

    /// Whether a file is loaded and a device is open.
    pub fn is_loaded(&self) -> bool {
        self.device.is_some()
    }

    /// Path of the loaded file.
    pub fn loaded_path(&self) -> Option<&Path> {
        self.track.as_ref().map(|t| t.path.as_path())
    }

    /// Format of the loaded file.
    pub fn loaded_spec(&self) -> Option<WavSpec> {
        self.track.as_ref().map(|t| t.spec)
    }

    /// Format the device was opened with.
    pub fn device_spec(&self) -> Option<AudioSpec> {
        self.device.as_ref().map(|d| d.spec())
    }

    /// The open device, if any.
    pub fn device(&self) -> Option<&OutputDevice> {
        self.device.as_ref()
    }

    /// True once everything loaded has been handed to the device.
    ///
    /// False when nothing is loaded.
    pub fn is_finished(&self) -> bool {
        let Some(device) = &self.device else {
            return false;
        };
        let converter_empty = self.converter.as_ref().is_none_or(|c| c.available() == 0);
        converter_empty && device.queued_samples() == 0
    }

    /// Fraction of the file played, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        match &self.device {
            Some(device) if self.total_frames > 0 => {
                (device.queue().played_frames() as f64 / self.total_frames as f64).min(1.0) as f32
            }
            _ => 0.0,
        }
    }

    /// Playback position in seconds.
    pub fn position_secs(&self) -> f64 {
        self.device.as_ref().map_or(0.0, |d| {
            d.queue().played_frames() as f64 / f64::from(d.spec().sample_rate)
        })
    }

    /// Length of the loaded file at the device rate, in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.device.as_ref().map_or(0.0, |d| {
            self.total_frames as f64 / f64::from(d.spec().sample_rate)
        })
    }

    /// Clear the device and queue the loaded buffer from the beginning.
    fn restart(&mut self) {
        let (Some(device), Some(track)) = (&self.device, &self.track) else {
            return;
        };
        device.clear_queued_audio();
        device.queue().reset_played();

        match &mut self.converter {
            None => {
                let mut samples = track.samples.clone();
                apply_gain(&mut samples, self.volume.get());
                device.queue_audio(&samples);
                self.total_frames = (samples.len() / device.spec().channels as usize) as u64;
            }
            Some(converter) => {
                converter.clear();
                converter.put(&track.samples);
                converter.flush();
                self.total_frames = (converter.available() / device.spec().channels as usize) as u64;
                self.pump();
            }
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("backend", &self.backend.name())
            .field("settings", &self.settings)
            .field("loaded", &self.loaded_path())
            .field("paused", &self.state.is_paused())
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}
