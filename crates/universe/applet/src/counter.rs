use universe_protocol::constants::MAX_COUNTER;

/// Saturating access counter
///
/// Increments stop at [`MAX_COUNTER`]. [`set`](Self::set) stores any value
/// as-is, including values above the ceiling, which further increments then
/// leave unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessCounter(u16);

impl AccessCounter {
    /// Create a counter holding `value`
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Current value
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Count one access, unless the ceiling has been reached
    pub const fn increment(&mut self) {
        if self.0 < MAX_COUNTER {
            self.0 += 1;
        }
    }

    /// Overwrite the value
    pub const fn set(&mut self, value: u16) {
        self.0 = value;
    }
}
