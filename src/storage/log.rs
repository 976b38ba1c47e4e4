//! The persisted per-player event log.
//!
//! A single JSON file mapping player name to an ordered array of transition
//! events. The file is rewritten in full on every save via a temp file and
//! an atomic rename, so a crash mid-write never corrupts the previous log.
//! Writers hold an exclusive advisory lock on a sidecar `.lock` file for
//! the whole load -> append -> save cycle.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::RosterError;
use crate::storage::models::{PlayerEvent, TransitionEvent};

/// Per-player transition history, keyed by player name.
pub type EventMap = BTreeMap<String, Vec<TransitionEvent>>;

/// Append-only per-player transition history backed by a JSON file.
///
/// The persisted order of a player's events is not guaranteed; readers that
/// do temporal computation must sort by date first (see
/// [`crate::service::service_days`]).
#[derive(Debug)]
pub struct EventLog {
    path: PathBuf,
    events: EventMap,

    /// Advisory lock held while the log is open for writing.
    _lock_file: Option<File>,
}

impl EventLog {
    /// Open the log for a read-modify-write cycle.
    ///
    /// Takes an exclusive advisory lock on `<path>.lock`; a second writer
    /// fails fast with [`RosterError::LogLocked`] instead of interleaving.
    /// A missing log file is the first-run case and yields an empty log.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let lock_file = Self::acquire_lock(&path)?;
        let events = Self::read_events(&path)?;

        Ok(Self {
            path,
            events,
            _lock_file: Some(lock_file),
        })
    }

    /// Load the log read-only, without taking the lock.
    ///
    /// Safe against a concurrent writer because saves replace the file
    /// atomically; a reader sees either the old or the new log, never a
    /// partial write.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let events = Self::read_events(&path)?;

        Ok(Self {
            path,
            events,
            _lock_file: None,
        })
    }

    /// All recorded events, keyed by player name.
    pub fn events(&self) -> &EventMap {
        &self.events
    }

    /// Recorded events for one player, if any.
    pub fn player(&self, name: &str) -> Option<&[TransitionEvent]> {
        self.events.get(name).map(Vec::as_slice)
    }

    /// Number of players with at least one recorded event.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append one event to a player's history, creating it if absent.
    ///
    /// Re-running the same diff twice must not duplicate history: an event
    /// identical in `(date, kind)` to one already recorded for the player
    /// is skipped. Returns whether the event was actually appended.
    pub fn append(&mut self, player_event: PlayerEvent) -> bool {
        let PlayerEvent { player, event } = player_event;
        let history = self.events.entry(player).or_default();

        if history.contains(&event) {
            return false;
        }

        history.push(event);
        true
    }

    /// Append a batch of events, returning how many were new.
    pub fn extend(&mut self, player_events: impl IntoIterator<Item = PlayerEvent>) -> usize {
        player_events
            .into_iter()
            .filter(|ev| self.append(ev.clone()))
            .count()
    }

    /// Persist the full mapping, atomically replacing the previous file.
    ///
    /// The serialized log is written to a temp file in the target directory,
    /// synced, then renamed over the target; a failure at any step leaves
    /// the prior log file intact.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(&self.events)?;

        let mut tmp = File::create(&tmp_path)
            .with_context(|| format!("Failed to create temp log file {}", tmp_path.display()))?;
        tmp.write_all(contents.as_bytes())?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!("Failed to replace event log file {}", self.path.display())
        })?;

        Ok(())
    }

    fn read_events(path: &Path) -> Result<EventMap> {
        if !path.exists() {
            return Ok(EventMap::new());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read event log file {}", path.display()))?;

        // A malformed log (bad JSON or an unparsable date) is fatal for the
        // run, never skipped entry-by-entry.
        let events: EventMap = serde_json::from_str(&contents)
            .with_context(|| format!("Event log file {} is corrupt", path.display()))?;

        Ok(events)
    }

    fn acquire_lock(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }

        let lock_path = path.with_extension("json.lock");
        let lock_file = File::create(&lock_path)
            .with_context(|| format!("Failed to create lock file {}", lock_path.display()))?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| RosterError::LogLocked {
                path: path.to_path_buf(),
            })?;

        Ok(lock_file)
    }
}
