//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Common configuration arguments shared between commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Snapshot directory (or set `FBB_ROSTER_SNAPSHOT_DIR` env var).
    #[clap(long)]
    pub snapshot_dir: Option<PathBuf>,

    /// Event log file (or set `FBB_ROSTER_EVENT_LOG` env var).
    #[clap(long)]
    pub event_log: Option<PathBuf>,

    /// Backfill anchor date for players first observed on roster with no
    /// prior history (or set `FBB_ROSTER_BACKFILL_DATE` env var).
    #[clap(long)]
    pub backfill_date: Option<NaiveDate>,

    /// Skip the diff when the prior day's snapshot is missing instead of
    /// treating it as an empty roster.
    #[clap(long)]
    pub skip_missing: bool,
}

impl ConfigArgs {
    /// Resolve the flags against env vars and defaults.
    pub fn into_config(self) -> crate::Result<crate::TrackerConfig> {
        crate::TrackerConfig::resolve(
            self.snapshot_dir,
            self.event_log,
            self.backfill_date,
            self.skip_missing,
        )
    }
}

#[derive(Debug, Parser)]
#[clap(name = "fbb-roster", about = "Fantasy Baseball roster and service time CLI")]
pub struct RosterApp {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Diff a day's roster snapshot against the prior day and record
    /// transition events.
    ///
    /// Reads `roster-<date>.json` and `roster-<date - 1>.json` from the
    /// snapshot directory and merges the resulting call-up / send-down
    /// events into the event log. Duplicate events for a player on the
    /// same date are skipped.
    Diff {
        #[clap(flatten)]
        config: ConfigArgs,

        /// Diff this date instead of today (YYYY-MM-DD).
        #[clap(long, short)]
        date: Option<NaiveDate>,

        /// Print the events without writing the log.
        #[clap(long)]
        dry_run: bool,

        /// Output emitted events as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print per-step progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Report accrued on-roster service days per player.
    ///
    /// Replays each player's recorded transition history and credits one
    /// day per calendar day spent on the active roster.
    Report {
        #[clap(flatten)]
        config: ConfigArgs,

        /// Compute service days as of this date instead of today (YYYY-MM-DD).
        #[clap(long)]
        as_of: Option<NaiveDate>,

        /// Filter by player name (substring match) - repeatable: `-n Smith -n Johnson`.
        #[clap(long, short = 'n')]
        player_name: Option<Vec<String>>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the recorded transition history for a single player.
    History {
        #[clap(flatten)]
        config: ConfigArgs,

        /// Player name as it appears in the snapshots (exact match).
        player: String,

        /// Output events as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Replay a range of snapshot dates through the differ.
    ///
    /// Runs the daily diff for every date from `--from` through `--through`
    /// (inclusive) under a single log lock, then persists once. Useful for
    /// rebuilding the event log from retained snapshots.
    Backfill {
        #[clap(flatten)]
        config: ConfigArgs,

        /// First date to replay (YYYY-MM-DD).
        #[clap(long)]
        from: NaiveDate,

        /// Last date to replay, inclusive (YYYY-MM-DD).
        #[clap(long)]
        through: NaiveDate,

        /// Show per-day progress information.
        #[clap(long)]
        verbose: bool,
    },
}
