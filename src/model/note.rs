/// A timed target on the playfield.
///
/// Positions are in playfield pixels, conventionally within `512x384`, and
/// `time` is the start time in milliseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Note {
    pub x: i32,
    pub y: i32,
    pub time: i32,
    pub is_slider: bool,
}

impl Note {
    /// Create a new [`Note`].
    pub const fn new(x: i32, y: i32, time: i32, is_slider: bool) -> Self {
        Self {
            x,
            y,
            time,
            is_slider,
        }
    }

    /// Create a new circle.
    pub const fn circle(x: i32, y: i32, time: i32) -> Self {
        Self::new(x, y, time, false)
    }

    /// Create a new slider head.
    pub const fn slider(x: i32, y: i32, time: i32) -> Self {
        Self::new(x, y, time, true)
    }

    /// Whether the note is a circle.
    pub const fn is_circle(&self) -> bool {
        !self.is_slider
    }

    /// Displacement from `prev` to `self`.
    pub(crate) fn shift_from(&self, prev: &Self) -> (f64, f64) {
        (
            f64::from(self.x) - f64::from(prev.x),
            f64::from(self.y) - f64::from(prev.y),
        )
    }

    /// Time in milliseconds since `prev`, adjusted by `clock_rate`.
    pub(crate) fn delta_time(&self, prev: &Self, clock_rate: f64) -> f64 {
        (f64::from(self.time) - f64::from(prev.time)) / clock_rate
    }
}
