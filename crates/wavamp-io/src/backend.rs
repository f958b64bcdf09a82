//! Pluggable audio output backend.
//!
//! [`AudioBackend`] keeps the player independent of any particular platform
//! audio API. [`CpalBackend`](crate::CpalBackend) is the real implementation;
//! tests supply their own that hands the callback back to the test instead of
//! a sound card.
//!
//! The trait uses boxed closures for callbacks rather than generic
//! parameters, so it is object-safe and a [`Player`](crate::Player) can hold
//! an `Arc<dyn AudioBackend>`. Streams come back as a type-erased
//! [`StreamHandle`] that stops playback on drop.

use crate::{AudioDevice, Result};

/// Configuration for building an output stream.
#[derive(Debug, Clone)]
pub struct BackendStreamConfig {
    /// Requested sample rate in Hz.
    pub sample_rate: u32,
    /// Preferred buffer size in frames.
    pub buffer_size: u32,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Optional device selector (uses the system default if `None`).
    pub device_name: Option<String>,
}

impl Default for BackendStreamConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            buffer_size: 4096,
            channels: 2,
            device_name: None,
        }
    }
}

/// Type-erased audio stream handle.
///
/// The stream is active while this handle exists; dropping it closes the
/// device.
pub struct StreamHandle {
    _inner: Box<dyn Send>,
}

impl StreamHandle {
    /// Wrap a backend-specific stream object, keeping it alive until drop.
    pub fn new<T: Send + 'static>(stream: T) -> Self {
        Self {
            _inner: Box::new(stream),
        }
    }
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle").finish_non_exhaustive()
    }
}

/// Output callback, run on the audio thread.
///
/// Receives an interleaved buffer (`[L0, R0, L1, R1, ...]` for stereo) to
/// fill completely.
pub type OutputCallback = Box<dyn FnMut(&mut [f32]) + Send>;

/// Error callback, receives a human-readable message.
pub type ErrorCallback = Box<dyn FnMut(&str) + Send>;

/// Platform audio output.
pub trait AudioBackend: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Enumerate output devices.
    fn list_devices(&self) -> Result<Vec<AudioDevice>>;

    /// The system's default output device, if any.
    fn default_output_device(&self) -> Result<Option<AudioDevice>>;

    /// Open and start an f32 output stream.
    ///
    /// Fails when no device matches or the device rejects the requested
    /// rate, channel count or buffer size.
    fn build_output_stream(
        &self,
        config: &BackendStreamConfig,
        callback: OutputCallback,
        error_callback: ErrorCallback,
    ) -> Result<StreamHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendStreamConfig::default();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.channels, 2);
        assert!(config.device_name.is_none());
    }

    #[test]
    fn test_stream_handle_debug() {
        let handle = StreamHandle::new(42u32);
        assert!(format!("{:?}", handle).contains("StreamHandle"));
    }
}
