//! Clickable control layout.
//!
//! The player window has two square buttons and one horizontal slider:
//!
//! ```text
//!   ┌────────┐                    ┌────────┐
//!   │ rewind │                    │ pause  │
//!   └────────┘                    └────────┘
//!
//!        ════════════════■═══════════════      volume
//! ```

use crate::geometry::{Point, Rect};
use crate::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Size of the square rewind and pause buttons.
const BUTTON_SIZE: i32 = 100;

/// Top edge of both buttons.
const BUTTON_TOP: i32 = 100;

/// Left edge of the rewind button.
const REWIND_LEFT: i32 = 100;

/// Left edge of the pause button.
const PAUSE_LEFT: i32 = 400;

/// Width of the volume slider track.
const SLIDER_WIDTH: i32 = 500;

/// Height of the volume slider track.
const SLIDER_HEIGHT: i32 = 20;

/// Top edge of the volume slider at the default window height.
const SLIDER_TOP: i32 = 400;

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Restart the loaded file from the beginning.
    Rewind,
    /// Toggle between paused and playing.
    PlayPause,
    /// Volume slider.
    Volume,
}

/// Rectangles of every control for a given window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLayout {
    /// Rewind button.
    pub rewind: Rect,
    /// Play/pause button.
    pub pause: Rect,
    /// Volume slider track.
    pub volume: Rect,
}

impl ControlLayout {
    /// Layout for a window of `width` x `height` pixels.
    ///
    /// The buttons keep their fixed offsets. The slider is centered
    /// horizontally and keeps its distance from the bottom edge; when the
    /// window is narrower than the slider it shrinks to fit with a small
    /// margin.
    pub fn for_window(width: i32, height: i32) -> Self {
        let slider_w = SLIDER_WIDTH.min((width - 20).max(0));
        let slider_top = (height - (DEFAULT_WINDOW_HEIGHT - SLIDER_TOP)).max(0);
        Self {
            rewind: Rect::new(REWIND_LEFT, BUTTON_TOP, BUTTON_SIZE, BUTTON_SIZE),
            pause: Rect::new(PAUSE_LEFT, BUTTON_TOP, BUTTON_SIZE, BUTTON_SIZE),
            volume: Rect::new((width - slider_w) / 2, slider_top, slider_w, SLIDER_HEIGHT),
        }
    }

    /// Which control, if any, is under `p`.
    ///
    /// Rewind is checked first, then pause, then the volume slider.
    pub fn hit_test(&self, p: Point) -> Option<Control> {
        if self.rewind.contains(p) {
            Some(Control::Rewind)
        } else if self.pause.contains(p) {
            Some(Control::PlayPause)
        } else if self.volume.contains(p) {
            Some(Control::Volume)
        } else {
            None
        }
    }
}

impl Default for ControlLayout {
    fn default() -> Self {
        Self::for_window(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_window() {
        let layout = ControlLayout::default();
        assert_eq!(layout.rewind, Rect::new(100, 100, 100, 100));
        assert_eq!(layout.pause, Rect::new(400, 100, 100, 100));
        assert_eq!(layout.volume, Rect::new(70, 400, 500, 20));
    }

    #[test]
    fn hit_test_each_control() {
        let layout = ControlLayout::default();
        assert_eq!(layout.hit_test(Point::new(150, 150)), Some(Control::Rewind));
        assert_eq!(layout.hit_test(Point::new(450, 150)), Some(Control::PlayPause));
        assert_eq!(layout.hit_test(Point::new(320, 410)), Some(Control::Volume));
        assert_eq!(layout.hit_test(Point::new(300, 150)), None);
        assert_eq!(layout.hit_test(Point::new(0, 0)), None);
    }

    #[test]
    fn overlapping_controls_resolve_in_order() {
        let layout = ControlLayout {
            rewind: Rect::new(0, 0, 100, 100),
            pause: Rect::new(50, 50, 100, 100),
            volume: Rect::new(75, 75, 100, 20),
        };
        // Inside all three: rewind wins.
        assert_eq!(layout.hit_test(Point::new(80, 80)), Some(Control::Rewind));
        // Inside pause and volume only: pause wins.
        assert_eq!(layout.hit_test(Point::new(120, 80)), Some(Control::PlayPause));
        // Volume alone.
        assert_eq!(layout.hit_test(Point::new(160, 80)), Some(Control::Volume));
    }

    #[test]
    fn larger_window_recenters_slider() {
        let layout = ControlLayout::for_window(1000, 600);
        assert_eq!(layout.volume, Rect::new(250, 520, 500, 20));
        assert_eq!(layout.rewind, Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn narrow_window_shrinks_slider() {
        let layout = ControlLayout::for_window(300, 480);
        assert_eq!(layout.volume.w, 280);
        assert_eq!(layout.volume.x, 10);
    }
}
