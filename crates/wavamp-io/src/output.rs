//! An opened output device fed from an [`AudioQueue`].

use crate::backend::{AudioBackend, BackendStreamConfig, ErrorCallback, StreamHandle};
use crate::convert::AudioSpec;
use crate::queue::AudioQueue;
use crate::{Error, Result};
use std::sync::Arc;

/// An output stream whose callback drains an [`AudioQueue`].
///
/// Samples are queued from the owning thread and played in order. The
/// device starts paused. Dropping it closes the stream.
#[derive(Debug)]
pub struct OutputDevice {
    spec: AudioSpec,
    buffer_frames: u32,
    queue: Arc<AudioQueue>,
    _stream: Option<StreamHandle>,
}

impl OutputDevice {
    /// Open a device through `backend`.
    ///
    /// `device_name` selects a device by index or name; `None` uses the
    /// default. Stream errors raised later on the audio thread are passed
    /// to `on_error`.
    pub fn open(
        backend: &dyn AudioBackend,
        spec: AudioSpec,
        buffer_frames: u32,
        device_name: Option<&str>,
        on_error: ErrorCallback,
    ) -> Result<Self> {
        if spec.channels == 0 || spec.sample_rate == 0 {
            return Err(Error::UnsupportedFormat(spec.to_string()));
        }

        let queue = Arc::new(AudioQueue::new(spec.channels));
        let config = BackendStreamConfig {
            sample_rate: spec.sample_rate,
            buffer_size: buffer_frames,
            channels: spec.channels,
            device_name: device_name.map(str::to_owned),
        };

        let cb_queue = Arc::clone(&queue);
        let stream = backend.build_output_stream(
            &config,
            Box::new(move |data: &mut [f32]| {
                cb_queue.fill(data);
            }),
            on_error,
        )?;

        tracing::debug!(backend = backend.name(), %spec, buffer_frames, "output device opened");

        Ok(Self {
            spec,
            buffer_frames,
            queue,
            _stream: Some(stream),
        })
    }

    /// A queue with no stream behind it.
    ///
    /// Behaves like an opened device whose callback never runs; useful for
    /// headless runs and tests.
    pub fn detached(spec: AudioSpec, buffer_frames: u32) -> Self {
        Self {
            spec,
            buffer_frames,
            queue: Arc::new(AudioQueue::new(spec.channels)),
            _stream: None,
        }
    }

    /// Format the device was opened with.
    pub fn spec(&self) -> AudioSpec {
        self.spec
    }

    /// Requested device buffer size in frames.
    pub fn buffer_frames(&self) -> u32 {
        self.buffer_frames
    }

    /// The queue feeding the stream.
    pub fn queue(&self) -> &Arc<AudioQueue> {
        &self.queue
    }

    /// Append interleaved samples for playback.
    pub fn queue_audio(&self, samples: &[f32]) {
        self.queue.push(samples);
    }

    /// Drop all queued audio.
    pub fn clear_queued_audio(&self) {
        self.queue.clear();
    }

    /// Samples waiting to be played.
    pub fn queued_samples(&self) -> usize {
        self.queue.queued_samples()
    }

    /// Frames waiting to be played.
    pub fn queued_frames(&self) -> usize {
        self.queue.queued_frames()
    }

    /// Stop consuming queued audio; the device outputs silence.
    pub fn pause(&self) {
        self.queue.set_paused(true);
    }

    /// Resume consuming queued audio.
    pub fn resume(&self) {
        self.queue.set_paused(false);
    }

    /// Set the paused state.
    pub fn set_paused(&self, paused: bool) {
        self.queue.set_paused(paused);
    }

    /// Whether the device is paused.
    pub fn is_paused(&self) -> bool {
        self.queue.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_device_queues_and_pauses() {
        let device = OutputDevice::detached(AudioSpec::new(48000, 2), 1024);
        assert!(device.is_paused());
        device.queue_audio(&[0.0; 10]);
        assert_eq!(device.queued_frames(), 5);
        device.resume();
        assert!(!device.is_paused());
        device.clear_queued_audio();
        assert_eq!(device.queued_samples(), 0);
    }
}
