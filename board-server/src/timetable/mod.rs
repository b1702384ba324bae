//! The in-memory timetable store.
//!
//! A [`Timetable`] accumulates stops grouped by station and answers
//! "what departs between X and Y" by producing a sliced snapshot: a fresh
//! timetable restricted to the window, with each station's stops sorted
//! chronologically. Slicing never mutates the source.

mod config;
mod render;

pub use config::BoardConfig;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{BoardTime, Stop};

/// An in-memory store of stops grouped by station.
///
/// The `from`/`to` window is descriptive metadata only: it is reported when
/// the timetable is rendered but never enforced on inserts. A stop outside
/// the declared window is stored and will appear if a matching sub-window
/// is sliced.
///
/// # Examples
///
/// ```
/// use board_server::domain::BoardTime;
/// use board_server::timetable::Timetable;
///
/// let mut table = Timetable::new(
///     BoardTime::MIDNIGHT,
///     BoardTime::end_of_day(),
/// );
/// table.add_stop("London-Norwich", "Baldock", BoardTime::parse("11:00").unwrap());
///
/// let board = table.sliced(
///     BoardTime::parse("10:00").unwrap(),
///     BoardTime::parse("11:00").unwrap(),
/// );
/// assert_eq!(board.stops_for("Baldock").len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    from: BoardTime,
    to: BoardTime,
    // BTreeMap so station enumeration order is deterministic.
    stops_per_station: BTreeMap<String, Vec<Stop>>,
}

impl Timetable {
    /// Create an empty timetable with the given declared window.
    ///
    /// The window is not validated; `from` may be after `to`.
    pub fn new(from: BoardTime, to: BoardTime) -> Self {
        Self {
            from,
            to,
            stops_per_station: BTreeMap::new(),
        }
    }

    /// Start of the declared window.
    pub fn from(&self) -> BoardTime {
        self.from
    }

    /// End of the declared window.
    pub fn to(&self) -> BoardTime {
        self.to
    }

    /// Append a stop to a station, creating the station if absent.
    ///
    /// Any route/station strings and any time are accepted. Returns the
    /// stop that was stored.
    pub fn add_stop(
        &mut self,
        route: impl Into<String>,
        station: impl Into<String>,
        time: BoardTime,
    ) -> Stop {
        let stop = Stop::new(route, station, time);
        self.stops_per_station
            .entry(stop.station_name.clone())
            .or_default()
            .push(stop.clone());
        stop
    }

    /// Register a station with an empty stop list.
    ///
    /// Overwrites any existing list for that station, so this is a
    /// destructive reset when the station already has stops. Returns the
    /// station name.
    pub fn add_station(&mut self, station: impl Into<String>) -> String {
        let station = station.into();
        self.stops_per_station.insert(station.clone(), Vec::new());
        station
    }

    /// Iterate over station names in enumeration order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.stops_per_station.keys().map(String::as_str)
    }

    /// The stops recorded for a station, in insertion order.
    ///
    /// An unknown station yields an empty slice.
    pub fn stops_for(&self, station: &str) -> &[Stop] {
        self.stops_per_station
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Build a read-only snapshot of departures in `[from, to]`.
    ///
    /// Every station in the source appears in the output, even with no
    /// matching stops. Each station's stops are filtered to the window and
    /// sorted chronologically; stops at the same minute keep their relative
    /// insertion order. The source is never altered.
    pub fn sliced(&self, from: BoardTime, to: BoardTime) -> Timetable {
        let mut board = Timetable::new(from, to);
        for (station, stops) in &self.stops_per_station {
            let mut selected = stops_between(stops, from, to);
            selected.sort_by_key(|stop| stop.time);
            board.stops_per_station.insert(station.clone(), selected);
        }
        board
    }

    /// Load the demonstration dataset: two routes over five stations.
    pub fn load_sample(&mut self) {
        let stops = [
            ("London-Norwich", "Stevenage", "10:00"),
            ("London-Norwich", "Baldock", "11:00"),
            ("London-Norwich", "Ipswitch", "12:00"),
            ("London-Norwich", "XPTO", "13:00"),
            ("Norwich-London", "Baldock", "9:00"),
            ("Norwich-London", "Oxford", "10:00"),
            ("Norwich-London", "Ipswitch", "11:00"),
            ("Norwich-London", "XPTO", "11:00"),
        ];
        for (route, station, time) in stops {
            // The fixture times are literals and always parse
            if let Ok(time) = BoardTime::parse(time) {
                self.add_stop(route, station, time);
            }
        }
    }
}

/// Select the stops whose time lies in `[from, to]`, inclusive at minute
/// granularity. Input order is preserved; no sorting happens here.
pub fn stops_between(stops: &[Stop], from: BoardTime, to: BoardTime) -> Vec<Stop> {
    stops
        .iter()
        .filter(|stop| stop.time >= from && stop.time <= to)
        .cloned()
        .collect()
}
