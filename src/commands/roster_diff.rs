//! Daily roster diff command
//!
//! Loads the day's snapshot and the prior day's snapshot, diffs them into
//! transition events, and merges the result into the event log under an
//! exclusive lock.

use crate::{
    config::TrackerConfig,
    diff::EventDiffer,
    error::Result,
    snapshot::SnapshotStore,
    storage::EventLog,
};
use chrono::NaiveDate;

use super::today;

/// Parameters for the diff command
pub struct DiffParams {
    /// Diff this date instead of today.
    pub date: Option<NaiveDate>,
    /// Print the events without writing the log.
    pub dry_run: bool,
    /// Output emitted events as JSON instead of text lines.
    pub as_json: bool,
    /// Print per-step progress information.
    pub verbose: bool,
}

/// Run the daily diff and merge the resulting events into the event log.
pub fn handle_diff(config: &TrackerConfig, params: DiffParams) -> Result<()> {
    let date = params.date.unwrap_or_else(today);
    let store = SnapshotStore::new(&config.snapshot_dir);
    let differ = EventDiffer::new(&store, config);

    if params.verbose {
        println!("Diffing roster snapshots for {date}...");
    }

    let events = differ.diff(date)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else if events.is_empty() {
        println!("No roster transitions on {date}");
    } else {
        for ev in &events {
            println!("{}: {} ({})", ev.player, ev.event.kind, ev.event.date);
        }
    }

    if params.dry_run {
        if params.verbose {
            println!("Dry run - event log not modified");
        }
        return Ok(());
    }

    let mut log = EventLog::open(&config.event_log_path)?;
    let appended = log.extend(events);
    log.save()?;

    if params.verbose {
        println!(
            "✓ {appended} new event(s) recorded in {}",
            config.event_log_path.display()
        );
    }

    Ok(())
}
