//! Domain types for the departure board.
//!
//! The core vocabulary: a minute-granularity time of day and the stop
//! (route, station, time) scheduled at it. Times are validated at parse
//! time, so code that receives a `BoardTime` can trust its validity.

mod stop;
mod time;

pub use stop::Stop;
pub use time::{BoardTime, ParseTimeError};
