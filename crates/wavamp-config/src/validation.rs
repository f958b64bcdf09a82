//! Range checks for configuration values.

use crate::AmpConfig;
use thiserror::Error;

/// Smallest window edge that still fits the controls.
pub const MIN_WINDOW_EDGE: u32 = 200;
/// Accepted device sample rates.
pub const SAMPLE_RATE_RANGE: std::ops::RangeInclusive<u32> = 8000..=192_000;
/// Accepted device channel counts.
pub const CHANNEL_RANGE: std::ops::RangeInclusive<u16> = 1..=8;
/// Accepted device buffer sizes (powers of two only).
pub const BUFFER_FRAMES_RANGE: std::ops::RangeInclusive<u32> = 64..=16384;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Integer value out of range.
    #[error("'{field}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Dotted name of the field.
        field: &'static str,
        /// The rejected value.
        value: u64,
        /// Minimum allowed value.
        min: u64,
        /// Maximum allowed value.
        max: u64,
    },

    /// Volume outside `[0.0, 1.0]`.
    #[error("'player.initial_volume' value {0} out of range [0, 1]")]
    Volume(f32),

    /// Buffer size that is not a power of two.
    #[error("'audio.buffer_frames' value {0} is not a power of two")]
    NotPowerOfTwo(u32),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn check_range<T: Into<u64> + Copy>(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: T,
    min: T,
    max: T,
) {
    let (value, min, max) = (value.into(), min.into(), max.into());
    if value < min || value > max {
        errors.push(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
}

/// Check every field of `config`.
///
/// A single problem is returned as is; several are wrapped in
/// [`ValidationError::Multiple`].
pub fn validate_config(config: &AmpConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();

    check_range(&mut errors, "window.width", config.window.width, MIN_WINDOW_EDGE, u32::MAX);
    check_range(&mut errors, "window.height", config.window.height, MIN_WINDOW_EDGE, u32::MAX);

    let audio = &config.audio;
    check_range(
        &mut errors,
        "audio.sample_rate",
        audio.sample_rate,
        *SAMPLE_RATE_RANGE.start(),
        *SAMPLE_RATE_RANGE.end(),
    );
    check_range(
        &mut errors,
        "audio.channels",
        audio.channels,
        *CHANNEL_RANGE.start(),
        *CHANNEL_RANGE.end(),
    );
    check_range(
        &mut errors,
        "audio.buffer_frames",
        audio.buffer_frames,
        *BUFFER_FRAMES_RANGE.start(),
        *BUFFER_FRAMES_RANGE.end(),
    );
    if !audio.buffer_frames.is_power_of_two() {
        errors.push(ValidationError::NotPowerOfTwo(audio.buffer_frames));
    }

    let volume = config.player.initial_volume;
    if !(0.0..=1.0).contains(&volume) {
        errors.push(ValidationError::Volume(volume));
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate_config(&AmpConfig::default()), Ok(()));
    }

    #[test]
    fn small_window_is_rejected() {
        let mut config = AmpConfig::default();
        config.window.width = 100;
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::OutOfRange { field: "window.width", value: 100, .. })
        ));
    }

    #[test]
    fn buffer_must_be_power_of_two() {
        let mut config = AmpConfig::default();
        config.audio.buffer_frames = 1000;
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::NotPowerOfTwo(1000))
        );
    }

    #[test]
    fn nan_volume_is_rejected() {
        let mut config = AmpConfig::default();
        config.player.initial_volume = f32::NAN;
        assert!(matches!(validate_config(&config), Err(ValidationError::Volume(_))));
    }

    #[test]
    fn several_problems_are_collected() {
        let mut config = AmpConfig::default();
        config.audio.channels = 0;
        config.audio.sample_rate = 1000;
        match validate_config(&config) {
            Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected multiple errors, got {other:?}"),
        }
    }
}
