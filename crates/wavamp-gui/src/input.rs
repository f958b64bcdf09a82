//! Translation of egui input into [`InputEvent`]s.

use egui::{Event, PointerButton, Pos2};
use wavamp_core::{InputEvent, Point};

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x.floor() as i32, pos.y.floor() as i32)
}

/// Turns raw egui events into player input, tracking whether the primary
/// button is held so pointer motion can be reported as a drag.
#[derive(Debug, Default)]
pub struct InputTranslator {
    primary_held: bool,
}

impl InputTranslator {
    /// Create a translator with no button held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one frame of raw events, in order.
    pub fn translate(&mut self, events: &[Event]) -> Vec<InputEvent> {
        let mut out = Vec::new();
        for event in events {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.primary_held = *pressed;
                    if *pressed {
                        out.push(InputEvent::MouseDown(to_point(*pos)));
                    }
                }
                Event::PointerMoved(pos) if self.primary_held => {
                    out.push(InputEvent::MouseDrag(to_point(*pos)));
                }
                Event::PointerGone => self.primary_held = false,
                _ => {}
            }
        }
        out
    }

    /// Collect this frame's input from `ctx`.
    ///
    /// A close request comes first, then pointer events, then dropped files.
    pub fn collect(&mut self, ctx: &egui::Context) -> Vec<InputEvent> {
        ctx.input(|i| {
            let mut out = Vec::new();
            if i.viewport().close_requested() {
                out.push(InputEvent::Quit);
            }
            out.extend(self.translate(&i.events));
            out.extend(
                i.raw
                    .dropped_files
                    .iter()
                    .filter_map(|f| f.path.clone())
                    .map(InputEvent::FileDropped),
            );
            out
        })
    }
}
