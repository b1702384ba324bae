//! The scheduled departure event.

use serde::Serialize;

use super::BoardTime;

/// A single scheduled departure: a route calling at a station at a time.
///
/// A stop has no identity beyond its fields; two stops with the same route,
/// station, and time are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Name of the route making this stop (e.g. "London-Norwich")
    pub route_name: String,

    /// Name of the station where the stop happens
    pub station_name: String,

    /// Scheduled time of day
    pub time: BoardTime,
}

impl Stop {
    /// Create a new stop.
    pub fn new(route_name: impl Into<String>, station_name: impl Into<String>, time: BoardTime) -> Self {
        Self {
            route_name: route_name.into(),
            station_name: station_name.into(),
            time,
        }
    }
}
