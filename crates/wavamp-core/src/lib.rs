//! wavamp Core - UI-independent logic for the wavamp player
//!
//! Everything here is pure and allocation-light so the GUI and CLI front
//! ends can share it and it can be tested without a window or audio device.
//!
//! # Modules
//!
//! - [`geometry`] - [`Point`] and [`Rect`] with point-in-rect tests
//! - [`controls`] - [`ControlLayout`] for the rewind, pause and volume controls
//! - [`volume`] - [`Volume`] multiplier, slider math and [`apply_gain`]
//! - [`transport`] - [`InputEvent`] to [`Action`] dispatch and [`PlaybackState`]
//! - [`pulse`] - [`BackgroundPulse`] colour cycling
//!
//! # Example
//!
//! ```rust
//! use wavamp_core::{Action, ControlLayout, InputEvent, Point, dispatch};
//!
//! let layout = ControlLayout::default();
//! let action = dispatch(&layout, InputEvent::MouseDown(Point::new(450, 150)));
//! assert_eq!(action, Some(Action::TogglePause));
//! ```

pub mod controls;
pub mod geometry;
pub mod pulse;
pub mod transport;
pub mod volume;

pub use controls::{Control, ControlLayout};
pub use geometry::{Point, Rect};
pub use pulse::BackgroundPulse;
pub use transport::{Action, InputEvent, PlaybackState, dispatch};
pub use volume::{Volume, apply_gain, knob_rect};

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 640;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;

/// Filename hinted to the user when nothing has been loaded yet.
pub const DEFAULT_FILE_HINT: &str = "music.wav";
