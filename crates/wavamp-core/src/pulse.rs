//! Background colour cycling.

/// Green channel that steps by one every frame and wraps at 256.
///
/// Gives a visible heartbeat that the event loop is still spinning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackgroundPulse {
    green: u8,
}

impl BackgroundPulse {
    /// Start at black.
    pub const fn new() -> Self {
        Self { green: 0 }
    }

    /// Return the value to draw this frame and step to the next one.
    pub fn advance(&mut self) -> u8 {
        let current = self.green;
        self.green = self.green.wrapping_add(1);
        current
    }
}
