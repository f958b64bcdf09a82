//! Playback volume and the slider that controls it.

use crate::geometry::Rect;

/// Linear volume multiplier in `[0.0, 1.0]`.
///
/// Construction clamps, so a `Volume` is always in range. NaN maps to
/// silence.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume(f32);

impl Volume {
    /// Silence.
    pub const MUTE: Self = Self(0.0);

    /// Unity gain.
    pub const FULL: Self = Self(1.0);

    /// Create a volume, clamping into `[0.0, 1.0]`.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self::MUTE
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// The multiplier.
    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Volume for a pointer at horizontal position `x` over `slider`.
    ///
    /// The left edge is silence, the right edge full volume. Positions
    /// outside the track clamp to the nearest end.
    pub fn from_slider(slider: Rect, x: i32) -> Self {
        if slider.is_empty() {
            return Self::MUTE;
        }
        Self::new((x - slider.x) as f32 / slider.w as f32)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}

/// Rectangle of the slider knob for `volume`.
///
/// The knob is `knob_width` wide, as tall as the track and centered on the
/// volume's position along it.
pub fn knob_rect(slider: Rect, volume: Volume, knob_width: i32) -> Rect {
    let center = slider.x + (volume.get() * slider.w as f32).round() as i32;
    Rect::new(center - knob_width / 2, slider.y, knob_width, slider.h)
}

/// Scale every sample by `gain` in place.
#[inline]
pub fn apply_gain(samples: &mut [f32], gain: f32) {
    if gain == 1.0 {
        return;
    }
    for s in samples.iter_mut() {
        *s *= gain;
    }
}
