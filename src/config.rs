//! Resolved runtime configuration for the roster tracker.
//!
//! Every component takes its paths and constants from a [`TrackerConfig`]
//! built here, never from module-level globals, so tests can run isolated
//! against temporary storage.

use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

use crate::error::{Result, RosterError};
use crate::{BACKFILL_DATE_ENV_VAR, EVENT_LOG_ENV_VAR, SNAPSHOT_DIR_ENV_VAR};

/// How the differ treats a missing snapshot file for the prior day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSnapshotPolicy {
    /// A missing snapshot behaves as an empty roster; every player on
    /// today's roster with no prior history gets a backdated call-up.
    TreatAsEmpty,
    /// A missing prior snapshot aborts the diff for that day with zero
    /// events.
    Skip,
}

/// Resolved configuration shared by all commands.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Directory holding one `roster-YYYY-MM-DD.json` file per day.
    pub snapshot_dir: PathBuf,

    /// Path of the persisted event log file.
    pub event_log_path: PathBuf,

    /// Date assigned to the call-up of a player first observed on roster
    /// with no recorded history (normally the season's opening day).
    pub backfill_date: NaiveDate,

    /// Policy for missing snapshot files.
    pub missing_snapshot: MissingSnapshotPolicy,
}

impl TrackerConfig {
    /// Build a config from optional CLI overrides.
    ///
    /// Resolution order per value: flag > environment variable > default
    /// under the platform data directory.
    pub fn resolve(
        snapshot_dir: Option<PathBuf>,
        event_log: Option<PathBuf>,
        backfill_date: Option<NaiveDate>,
        skip_missing: bool,
    ) -> Result<Self> {
        let snapshot_dir = match snapshot_dir.or_else(|| env_path(SNAPSHOT_DIR_ENV_VAR)) {
            Some(dir) => dir,
            None => data_dir()?.join("snapshots"),
        };

        let event_log_path = match event_log.or_else(|| env_path(EVENT_LOG_ENV_VAR)) {
            Some(path) => path,
            None => data_dir()?.join("events.json"),
        };

        let backfill_date = match backfill_date {
            Some(date) => date,
            None => match env::var(BACKFILL_DATE_ENV_VAR) {
                Ok(raw) => raw.parse()?,
                Err(_) => default_backfill_date(),
            },
        };

        let missing_snapshot = if skip_missing {
            MissingSnapshotPolicy::Skip
        } else {
            MissingSnapshotPolicy::TreatAsEmpty
        };

        Ok(Self {
            snapshot_dir,
            event_log_path,
            backfill_date,
            missing_snapshot,
        })
    }
}

/// Opening day of the tracked season.
pub fn default_backfill_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 27).expect("valid calendar date")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).map(PathBuf::from)
}

/// Base data directory: `<platform data dir>/fbb-roster`.
fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| RosterError::Config {
        message: "Could not determine data directory".to_string(),
    })?;
    Ok(base.join("fbb-roster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_values() {
        let config = TrackerConfig::resolve(
            Some(PathBuf::from("/tmp/snaps")),
            Some(PathBuf::from("/tmp/events.json")),
            NaiveDate::from_ymd_opt(2025, 3, 18),
            false,
        )
        .unwrap();

        assert_eq!(config.snapshot_dir, PathBuf::from("/tmp/snaps"));
        assert_eq!(config.event_log_path, PathBuf::from("/tmp/events.json"));
        assert_eq!(
            config.backfill_date,
            NaiveDate::from_ymd_opt(2025, 3, 18).unwrap()
        );
        assert_eq!(config.missing_snapshot, MissingSnapshotPolicy::TreatAsEmpty);
    }

    #[test]
    fn test_skip_missing_flag_selects_policy() {
        let config = TrackerConfig::resolve(
            Some(PathBuf::from("/tmp/snaps")),
            Some(PathBuf::from("/tmp/events.json")),
            None,
            true,
        )
        .unwrap();

        assert_eq!(config.missing_snapshot, MissingSnapshotPolicy::Skip);
    }

    #[test]
    fn test_default_backfill_date_is_opening_day() {
        assert_eq!(
            default_backfill_date(),
            NaiveDate::from_ymd_opt(2025, 3, 27).unwrap()
        );
    }
}
