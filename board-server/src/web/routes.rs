//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, info, warn};

use crate::domain::{BoardTime, ParseTimeError};
use crate::timetable::BoardConfig;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(board))
        .route("/health", get(health))
        .route("/add", get(add_stop))
        .route("/add-sample", get(add_sample))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Show departures in a window starting at `from` (default: now).
async fn board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Response, AppError> {
    render_board(&state, query.from.as_deref(), query.format.as_deref())
}

/// Add a stop, then show the refreshed board.
async fn add_stop(
    State(state): State<AppState>,
    Query(query): Query<AddStopQuery>,
) -> Result<Response, AppError> {
    let time = BoardTime::parse(&query.time)?;

    {
        let mut timetable = state.timetable.write().map_err(|_| AppError::poisoned())?;
        let stop = timetable.add_stop(&query.route_name, &query.station, time);
        info!(
            route = %stop.route_name,
            station = %stop.station_name,
            time = %stop.time,
            "added stop"
        );
    }

    render_board(&state, query.from.as_deref(), query.format.as_deref())
}

/// Load the demonstration dataset, then show the board.
async fn add_sample(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Response, AppError> {
    {
        let mut timetable = state.timetable.write().map_err(|_| AppError::poisoned())?;
        timetable.load_sample();
        info!("loaded sample timetable");
    }

    render_board(&state, query.from.as_deref(), query.format.as_deref())
}

/// Resolve the query window: `from` defaults to the current time of day,
/// `to` is `from` plus the configured window length.
fn resolve_window(
    from: Option<&str>,
    config: &BoardConfig,
) -> Result<(BoardTime, BoardTime), ParseTimeError> {
    let from = match from {
        Some(s) => BoardTime::parse(s)?,
        None => BoardTime::now(),
    };
    Ok((from, from.saturating_add_minutes(config.window_mins)))
}

/// Whether the query asked for JSON output.
fn wants_json(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.eq_ignore_ascii_case("json"))
}

/// Slice the shared timetable and render it in the requested format.
fn render_board(
    state: &AppState,
    from: Option<&str>,
    format: Option<&str>,
) -> Result<Response, AppError> {
    let (from, to) = resolve_window(from, &state.config)?;

    let board = {
        let timetable = state.timetable.read().map_err(|_| AppError::poisoned())?;
        timetable.sliced(from, to)
    };

    if wants_json(format) {
        Ok(Json(board).into_response())
    } else {
        Ok(board.to_text().into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn poisoned() -> Self {
        AppError::Internal {
            message: "timetable lock poisoned".to_string(),
        }
    }
}

impl From<ParseTimeError> for AppError {
    fn from(e: ParseTimeError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        match status {
            StatusCode::BAD_REQUEST => warn!(%status, %message, "request rejected"),
            _ => error!(%status, %message, "request failed"),
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
