//! Departure board server.
//!
//! An in-memory timetable of stops (route, station, time) that answers
//! "what departs between X and Y", served over HTTP as plain text or JSON.

pub mod domain;
pub mod timetable;
pub mod web;
