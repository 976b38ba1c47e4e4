//! Storage layer for the Fantasy Baseball Roster Tracker
//!
//! This module provides the persisted roster history, organized into
//! logical components:
//! - `models`: Transition event data structures and wire format
//! - `log`: The append-only per-player event log file
//!
//! The log file is the single source of truth for roster history; snapshot
//! data is transient input and is never retained beyond the events the
//! differ extracts from it.

pub mod log;
pub mod models;


// Re-export the main types and log struct for easy access
pub use log::{EventLog, EventMap};
pub use models::*;
