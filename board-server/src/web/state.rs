//! Application state for the web layer.

use std::sync::{Arc, RwLock};

use crate::timetable::{BoardConfig, Timetable};

/// Shared application state.
///
/// The timetable is a single shared store that handlers may hit
/// concurrently, so it sits behind a reader-writer lock: adds take the
/// write lock, board queries take the read lock and slice a snapshot.
#[derive(Clone)]
pub struct AppState {
    /// The shared timetable store
    pub timetable: Arc<RwLock<Timetable>>,

    /// Board configuration
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state around a timetable.
    pub fn new(timetable: Timetable, config: BoardConfig) -> Self {
        Self {
            timetable: Arc::new(RwLock::new(timetable)),
            config: Arc::new(config),
        }
    }
}
