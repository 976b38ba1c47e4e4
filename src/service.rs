//! Service time aggregation.
//!
//! Replays a player's transition history into total accrued on-roster days
//! as of a reference date. Pure, read-only functions of the persisted log;
//! nothing here is incrementally maintained, every call re-walks the full
//! history.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::storage::{EventKind, EventMap, TransitionEvent};

/// Accrued service time for one player; the reporting interface consumed
/// by downstream collaborators (chat commands, print summaries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerService {
    pub service_days: i64,
}

/// Derived per-player service summary. Recomputed on demand, never
/// persisted.
pub type ServiceSummary = BTreeMap<String, PlayerService>;

/// Total on-roster days for one player's history as of `as_of`.
///
/// Events are stable-sorted by date first; the persisted order carries no
/// guarantee. The walk keeps the start of the current on-roster span:
/// - `CalledUp` sets the span start; a repeated call-up with no
///   intervening send-down overwrites it, discarding the earlier partial
///   span rather than double-accruing overlapping days
/// - `SentDown` closes the span and credits its length; a send-down with
///   no open span is ignored
/// - a span still open at the end accrues through `as_of`, or nothing if
///   `as_of` precedes the span start
///
/// No events -> 0 days.
pub fn service_days(events: &[TransitionEvent], as_of: NaiveDate) -> i64 {
    let mut ordered = events.to_vec();
    ordered.sort_by_key(|event| event.date);

    let mut anchor: Option<NaiveDate> = None;
    let mut accumulated = 0i64;

    for event in &ordered {
        match event.kind {
            EventKind::CalledUp => {
                anchor = Some(event.date);
            }
            EventKind::SentDown => {
                if let Some(start) = anchor.take() {
                    accumulated += (event.date - start).num_days();
                }
            }
        }
    }

    if let Some(start) = anchor {
        accumulated += (as_of - start).num_days().max(0);
    }

    accumulated
}

/// Service days for every player in the log as of `as_of`.
///
/// Players are independent; the per-player replay fans out across threads.
pub fn summarize(events: &EventMap, as_of: NaiveDate) -> ServiceSummary {
    events
        .par_iter()
        .map(|(name, history)| {
            (
                name.clone(),
                PlayerService {
                    service_days: service_days(history, as_of),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests;
