//! Roster snapshot diffing.
//!
//! Compares a day's snapshot against the immediately preceding calendar
//! day's snapshot and produces zero or more transition events per player.
//! The differ never mutates the event log; merging its output is the
//! caller's job.

use anyhow::Result;
use chrono::{Days, NaiveDate};
use log::info;

use crate::config::{MissingSnapshotPolicy, TrackerConfig};
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::storage::{PlayerEvent, TransitionEvent};

/// Diffs daily snapshots into transition events.
pub struct EventDiffer<'a> {
    store: &'a SnapshotStore,
    backfill_date: NaiveDate,
    missing_snapshot: MissingSnapshotPolicy,
}

impl<'a> EventDiffer<'a> {
    pub fn new(store: &'a SnapshotStore, config: &TrackerConfig) -> Self {
        Self {
            store,
            backfill_date: config.backfill_date,
            missing_snapshot: config.missing_snapshot,
        }
    }

    /// Diff `today` against the prior calendar day.
    ///
    /// A missing snapshot for either day is handled per the configured
    /// [`MissingSnapshotPolicy`]; under `TreatAsEmpty` it behaves as an
    /// empty roster, under `Skip` a missing prior snapshot yields no
    /// events at all.
    pub fn diff(&self, today: NaiveDate) -> Result<Vec<PlayerEvent>> {
        let yesterday = today
            .checked_sub_days(Days::new(1))
            .expect("date arithmetic in calendar range");

        let Some(current) = self.store.load(today)? else {
            info!("no snapshot for {today}, nothing to diff");
            return Ok(Vec::new());
        };

        let previous = self.store.load(yesterday)?;
        if previous.is_none() && self.missing_snapshot == MissingSnapshotPolicy::Skip {
            info!("no snapshot for {yesterday}, skipping diff for {today}");
            return Ok(Vec::new());
        }

        Ok(diff_snapshots(
            &current,
            previous.as_deref(),
            today,
            self.backfill_date,
        ))
    }
}

/// Pure diff of two snapshots.
///
/// For every player listed in `current`:
/// - no prior status + on roster -> `CalledUp` dated at `backfill_date`
///   (a player observed with no history is assumed active since season
///   start, not freshly promoted)
/// - off -> on: `CalledUp` dated `today`
/// - on -> off: `SentDown` dated `today`
/// - unchanged status: no event
///
/// Players absent from `current` never produce events; a demotion is only
/// recorded the day a snapshot explicitly lists them with
/// `on_roster: false`.
pub fn diff_snapshots(
    current: &Snapshot,
    previous: Option<&Snapshot>,
    today: NaiveDate,
    backfill_date: NaiveDate,
) -> Vec<PlayerEvent> {
    let mut events = Vec::new();

    for (name, entry) in &current.players {
        let prev_status = previous.and_then(|snapshot| snapshot.status(name));

        let event = match (prev_status, entry.on_roster) {
            (None, true) => Some(TransitionEvent::called_up(backfill_date)),
            (Some(false), true) => Some(TransitionEvent::called_up(today)),
            (Some(true), false) => Some(TransitionEvent::sent_down(today)),
            _ => None,
        };

        if let Some(event) = event {
            events.push(PlayerEvent::new(name.clone(), event));
        }
    }

    events
}
