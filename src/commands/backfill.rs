//! Range backfill command for rebuilding the event log from retained snapshots
//!
//! Replays the daily diff for every date in an inclusive range. The whole
//! range runs under a single log lock and persists once at the end, so a
//! concurrent daily run cannot interleave partway through the replay.

use crate::{
    config::TrackerConfig,
    diff::EventDiffer,
    error::{Result, RosterError},
    snapshot::SnapshotStore,
    storage::EventLog,
};
use chrono::{Days, NaiveDate};

/// Replay snapshots from `from` through `through` (inclusive) into the log.
pub fn handle_backfill(
    config: &TrackerConfig,
    from: NaiveDate,
    through: NaiveDate,
    verbose: bool,
) -> Result<()> {
    if from > through {
        return Err(RosterError::Config {
            message: format!("Backfill range is empty: {from} is after {through}"),
        });
    }

    let store = SnapshotStore::new(&config.snapshot_dir);
    let differ = EventDiffer::new(&store, config);
    let mut log = EventLog::open(&config.event_log_path)?;

    let mut total_days = 0;
    let mut total_events = 0;

    let mut date = from;
    while date <= through {
        let events = differ.diff(date)?;
        let appended = log.extend(events);

        if verbose {
            println!("✓ {date}: {appended} new event(s)");
        } else {
            println!("Processing {date}...");
        }

        total_days += 1;
        total_events += appended;
        date = date
            .checked_add_days(Days::new(1))
            .expect("date arithmetic in calendar range");
    }

    log.save()?;

    println!("\n✓ Backfill complete!");
    println!("Days processed: {total_days}");
    println!("Events recorded: {total_events}");

    Ok(())
}
