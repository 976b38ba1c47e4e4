//! Player transition history command

use crate::{
    config::TrackerConfig,
    error::{Result, RosterError},
    storage::EventLog,
};

/// Print one player's recorded transitions in chronological order.
pub fn handle_history(config: &TrackerConfig, player: &str, as_json: bool) -> Result<()> {
    let log = EventLog::load(&config.event_log_path)?;

    let history = log
        .player(player)
        .ok_or_else(|| RosterError::PlayerNotFound {
            name: player.to_string(),
        })?;

    let mut events = history.to_vec();
    events.sort_by_key(|event| event.date);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!("{player}:");
    for event in &events {
        println!("  {} {}", event.date, event.kind);
    }

    Ok(())
}
