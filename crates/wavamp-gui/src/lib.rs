//! wavamp GUI - a drag-and-drop WAV player window.
//!
//! Drop a `.wav` file on the window to play it. The two white squares are
//! rewind (left) and play/pause (right); the bar along the bottom sets the
//! volume when converting to the device format.

pub mod app;
pub mod dialogs;
pub mod input;
pub mod render;

pub use app::{AmpApp, Outcome};
pub use dialogs::{panic_and_abort, show_error};
