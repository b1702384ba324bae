//! Board configuration.

use crate::domain::BoardTime;

/// Configuration for the departure board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Start of the declared service-day window.
    pub day_start: BoardTime,

    /// End of the declared service-day window.
    pub day_end: BoardTime,

    /// Length of the departure window shown when a query gives only a
    /// starting time (minutes).
    pub window_mins: u32,
}

impl BoardConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(day_start: BoardTime, day_end: BoardTime, window_mins: u32) -> Self {
        Self {
            day_start,
            day_end,
            window_mins,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            day_start: BoardTime::MIDNIGHT,
            day_end: BoardTime::end_of_day(),
            window_mins: 60,
        }
    }
}
