//! Fantasy Baseball Roster Tracker Library
//!
//! A Rust library for tracking day-over-day major-league roster status of
//! fantasy-baseball players, recording call-up and send-down transitions in a
//! persistent event log, and aggregating accrued on-roster time as a proxy
//! for MLB service time.
//!
//! ## Features
//!
//! - **Snapshot Diffing**: Compare daily roster snapshots into discrete
//!   transition events, with a configurable backfill anchor for players
//!   first observed with no prior history
//! - **Event Log**: Append-only per-player transition history persisted as a
//!   single JSON file, written atomically under an exclusive advisory lock
//! - **Service Time Aggregation**: Replay a player's event history into
//!   total accrued on-roster days as of any reference date
//! - **Range Backfill**: Replay a whole span of snapshot dates through the
//!   differ in one locked cycle
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fbb_roster::{commands::report::{handle_report, ReportParams}, config::TrackerConfig};
//!
//! # fn example() -> fbb_roster::Result<()> {
//! let config = TrackerConfig::resolve(None, None, None, false)?;
//! handle_report(
//!     &config,
//!     ReportParams {
//!         as_of: None,
//!         player_name: None,
//!         as_json: false,
//!     },
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Every path and constant can be supplied by flag or environment variable:
//! ```bash
//! export FBB_ROSTER_SNAPSHOT_DIR=/var/lib/fbb/snapshots
//! export FBB_ROSTER_EVENT_LOG=/var/lib/fbb/events.json
//! export FBB_ROSTER_BACKFILL_DATE=2025-03-27
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod service;
pub mod snapshot;
pub mod storage;

// Re-export commonly used types
pub use cli::types::MlbId;
pub use config::{MissingSnapshotPolicy, TrackerConfig};
pub use error::{Result, RosterError};
pub use storage::{EventKind, EventLog, PlayerEvent, TransitionEvent};

pub const SNAPSHOT_DIR_ENV_VAR: &str = "FBB_ROSTER_SNAPSHOT_DIR";
pub const EVENT_LOG_ENV_VAR: &str = "FBB_ROSTER_EVENT_LOG";
pub const BACKFILL_DATE_ENV_VAR: &str = "FBB_ROSTER_BACKFILL_DATE";
