//! Web layer for the departure board.
//!
//! Thin plumbing that turns query parameters into calls on the timetable
//! store and renders the result as plain text or JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
