//! Daily roster snapshot files and the store that reads them.
//!
//! A snapshot is one JSON file per calendar date, produced by an external
//! collector (spreadsheet ingestion, Yahoo polling). The store only reads;
//! a missing file for a date is a valid "no data" state, not an error.
//!
//! Snapshot entries are validated per player: an entry missing `mlb_id` or
//! `on_roster` is skipped for the day with a warning while the rest of the
//! roster is still processed.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, warn};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::cli::types::MlbId;


/// One player's status within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub mlb_id: MlbId,
    pub on_roster: bool,
}

/// A dated roster snapshot: player name -> status. Immutable once written.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub players: BTreeMap<String, PlayerEntry>,
}

impl Snapshot {
    /// Roster status for a player, or `None` when the snapshot does not
    /// list them.
    pub fn status(&self, name: &str) -> Option<bool> {
        self.players.get(name).map(|entry| entry.on_roster)
    }
}

/// Raw file form; entries are kept as JSON values so one malformed player
/// cannot fail the whole snapshot.
#[derive(Deserialize)]
struct RawSnapshot {
    date: NaiveDate,
    players: BTreeMap<String, Value>,
}

/// Reads dated snapshot files from a directory, caching parsed results.
///
/// A range backfill reads every snapshot twice (once as "today", once as
/// the next day's "yesterday"); the LRU cache keeps those re-reads in
/// memory. Only present snapshots are cached so a file that appears later
/// is picked up.
pub struct SnapshotStore {
    dir: PathBuf,
    cache: Mutex<LruCache<NaiveDate, Arc<Snapshot>>>,
}

/// Parsed snapshots kept in memory per store.
const SNAPSHOT_CACHE_CAPACITY: usize = 32;

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(SNAPSHOT_CACHE_CAPACITY).unwrap(),
            )),
        }
    }

    /// Path of the snapshot file for a date: `<dir>/roster-YYYY-MM-DD.json`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("roster-{}.json", date.format("%Y-%m-%d")))
    }

    /// Load the snapshot for a date.
    ///
    /// Returns `Ok(None)` when no file exists for the date. A file that is
    /// not valid JSON at the top level is a fatal error; individual player
    /// entries that fail validation are skipped with a warning.
    pub fn load(&self, date: NaiveDate) -> Result<Option<Arc<Snapshot>>> {
        if let Some(snapshot) = self.cache.lock().unwrap().get(&date) {
            debug!("snapshot {date}: cache hit");
            return Ok(Some(Arc::clone(snapshot)));
        }

        let path = self.path_for(date);
        if !path.exists() {
            return Ok(None);
        }

        let snapshot = Arc::new(read_snapshot(&path, date)?);
        self.cache
            .lock()
            .unwrap()
            .put(date, Arc::clone(&snapshot));

        Ok(Some(snapshot))
    }
}

fn read_snapshot(path: &Path, date: NaiveDate) -> Result<Snapshot> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;

    let raw: RawSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Snapshot file {} is not valid", path.display()))?;

    if raw.date != date {
        warn!(
            "snapshot {}: file says date {}, using requested date",
            path.display(),
            raw.date
        );
    }

    let mut players = BTreeMap::new();
    for (name, value) in raw.players {
        match serde_json::from_value::<PlayerEntry>(value) {
            Ok(entry) => {
                players.insert(name, entry);
            }
            Err(err) => {
                // Data-quality problem for this player only; the rest of
                // the roster still gets diffed.
                warn!("snapshot {date}: skipping {name:?}: {err}");
            }
        }
    }

    Ok(Snapshot { date, players })
}
