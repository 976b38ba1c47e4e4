//! Service time report command
//!
//! Replays the event log into per-player accrued service days and prints
//! them, as text lines or as the JSON reporting map consumed by downstream
//! collaborators.

use crate::{
    config::TrackerConfig,
    error::Result,
    service::{summarize, ServiceSummary},
    storage::EventLog,
};
use chrono::NaiveDate;

use super::today;

/// Parameters for the report command
pub struct ReportParams {
    /// Compute service days as of this date instead of today.
    pub as_of: Option<NaiveDate>,
    /// Substring filters on player name; a player matching any filter is
    /// included.
    pub player_name: Option<Vec<String>>,
    /// Output results as JSON instead of text lines.
    pub as_json: bool,
}

/// Compute and print accrued service days per player.
pub fn handle_report(config: &TrackerConfig, params: ReportParams) -> Result<()> {
    let as_of = params.as_of.unwrap_or_else(today);
    let log = EventLog::load(&config.event_log_path)?;

    let mut summary = summarize(log.events(), as_of);
    if let Some(filters) = &params.player_name {
        summary = filter_players(summary, filters);
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.is_empty() {
        println!("No players in event log");
        return Ok(());
    }

    println!("Service days as of {as_of}:");

    // Most service time first; name breaks ties
    let mut rows: Vec<_> = summary.iter().collect();
    rows.sort_by(|a, b| b.1.service_days.cmp(&a.1.service_days).then(a.0.cmp(b.0)));

    for (name, service) in rows {
        println!("  {name}: {}", service.service_days);
    }

    Ok(())
}

fn filter_players(summary: ServiceSummary, filters: &[String]) -> ServiceSummary {
    let lowered: Vec<String> = filters.iter().map(|f| f.to_lowercase()).collect();

    summary
        .into_iter()
        .filter(|(name, _)| {
            let name = name.to_lowercase();
            lowered.iter().any(|f| name.contains(f))
        })
        .collect()
}
