//! Command implementations for the Fantasy Baseball Roster Tracker CLI

pub mod backfill;
pub mod history;
pub mod report;
pub mod roster_diff;

use chrono::{Local, NaiveDate};

/// Today's date in the local timezone; the default for `diff` and `report`.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
