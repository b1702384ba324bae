//! Plain-text rendering of a departure board.

use super::Timetable;

/// Separator printed after each station section.
const SEPARATOR: &str = "---------------------";

impl Timetable {
    /// Render this timetable as a human-readable departure report.
    ///
    /// Intended for an already-sliced timetable: stops are printed in the
    /// order they are stored, one `HH:MM - route` line per stop, with a
    /// `-- No departures` marker for stations with nothing in the window.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("DEPARTURES FROM {} to {}\n", self.from, self.to));

        for (station, stops) in &self.stops_per_station {
            out.push_str(&format!("\nSTATION: {station}\n"));
            if stops.is_empty() {
                out.push_str("-- No departures\n");
            } else {
                for stop in stops {
                    out.push_str(&format!("{} - {}\n", stop.time, stop.route_name));
                }
            }
            out.push_str(SEPARATOR);
            out.push('\n');
        }

        out
    }
}
