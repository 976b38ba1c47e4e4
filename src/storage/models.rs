//! Data models for the storage layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a roster status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Transition from not-on-roster to on-roster.
    CalledUp,
    /// Transition from on-roster to not-on-roster.
    SentDown,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::CalledUp => write!(f, "called up"),
            EventKind::SentDown => write!(f, "sent down"),
        }
    }
}

/// A dated roster status change for one player. Immutable once recorded.
///
/// Wire format: `{"date": "YYYY-MM-DD", "event": "called_up" | "sent_down"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub date: NaiveDate,
    #[serde(rename = "event")]
    pub kind: EventKind,
}

impl TransitionEvent {
    pub fn called_up(date: NaiveDate) -> Self {
        Self {
            date,
            kind: EventKind::CalledUp,
        }
    }

    pub fn sent_down(date: NaiveDate) -> Self {
        Self {
            date,
            kind: EventKind::SentDown,
        }
    }
}

/// A transition event paired with the player it belongs to; the differ's
/// output unit, merged into the event log by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEvent {
    pub player: String,
    #[serde(flatten)]
    pub event: TransitionEvent,
}

impl PlayerEvent {
    pub fn new(player: impl Into<String>, event: TransitionEvent) -> Self {
        Self {
            player: player.into(),
            event,
        }
    }
}
