//! Query-parameter and response types for the web layer.

use serde::{Deserialize, Serialize};

/// Query parameters for the departure board view.
#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    /// Start of the window in HH:MM format (defaults to now)
    pub from: Option<String>,

    /// Output format: "json" for JSON, anything else for plain text
    pub format: Option<String>,
}

/// Query parameters for adding a stop.
///
/// Carries the board parameters too, because the response to an add is the
/// refreshed departure board.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStopQuery {
    /// Name of the route making the stop
    pub route_name: String,

    /// Station where the stop happens
    pub station: String,

    /// Scheduled time in HH:MM format
    pub time: String,

    /// Start of the window for the board rendered in the response
    pub from: Option<String>,

    /// Output format for the board rendered in the response
    pub format: Option<String>,
}

/// JSON body returned for errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
