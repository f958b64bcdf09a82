//! Input events, the actions they trigger, and the pause flag.

use crate::controls::{Control, ControlLayout};
use crate::geometry::Point;
use crate::volume::Volume;
use std::path::PathBuf;

/// Input events the player reacts to, independent of the windowing toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// Primary button pressed at a position.
    MouseDown(Point),
    /// Pointer moved while the primary button is held.
    MouseDrag(Point),
    /// A file was dropped onto the window.
    FileDropped(PathBuf),
}

/// What the player should do in response to an [`InputEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the event loop.
    Quit,
    /// Clear queued audio and start the loaded file over.
    Rewind,
    /// Flip the paused flag.
    TogglePause,
    /// Change the playback volume.
    SetVolume(Volume),
    /// Replace the loaded file.
    Load(PathBuf),
}

/// Map an input event to an action using the control layout.
///
/// Presses on the slider jump the volume to the pointer; drags only count
/// while the pointer stays over the track.
pub fn dispatch(layout: &ControlLayout, event: InputEvent) -> Option<Action> {
    match event {
        InputEvent::Quit => Some(Action::Quit),
        InputEvent::MouseDown(p) => match layout.hit_test(p)? {
            Control::Rewind => Some(Action::Rewind),
            Control::PlayPause => Some(Action::TogglePause),
            Control::Volume => Some(Action::SetVolume(Volume::from_slider(layout.volume, p.x))),
        },
        InputEvent::MouseDrag(p) => layout
            .volume
            .contains(p)
            .then(|| Action::SetVolume(Volume::from_slider(layout.volume, p.x))),
        InputEvent::FileDropped(path) => Some(Action::Load(path)),
    }
}

/// Paused/playing flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    paused: bool,
}

impl PlaybackState {
    /// Create with an explicit initial state.
    pub const fn new(paused: bool) -> Self {
        Self { paused }
    }

    /// Whether playback is paused.
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

impl Default for PlaybackState {
    /// Starts paused.
    fn default() -> Self {
        Self::new(true)
    }
}
