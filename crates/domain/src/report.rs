//! Report — one day of hub activity, as written by the sandman daemon.
//!
//! The daemon stores each day as a JSON-lines file: a header object on the
//! first line, then one item object per line. Field names on the wire are
//! camelCase.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First line of a report file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHeader {
    /// Report format version the daemon wrote.
    pub version: u32,
    /// When the daemon started writing this report.
    pub starting_time: String,
}

/// A single recorded event plus the wall-clock time it happened at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    /// Local time in `YYYY/MM/DD HH:MM:SS TZ` format.
    pub date_time: String,
    /// What happened.
    pub event: ReportEvent,
}

/// The events the daemon records, tagged by `"type"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportEvent {
    /// A control was actuated (`"stop"`, `"move up"`, `"move down"`).
    Control {
        /// Name of the control.
        control: String,
        /// Action performed on it.
        action: String,
        /// Where the command came from (voice, schedule, …).
        source: String,
    },
    /// A scheduled action fired.
    Schedule {
        /// Name of the schedule action.
        action: String,
    },
    /// A status request was answered.
    Status,
}

impl ReportEvent {
    /// Human-readable one-liner for template rendering.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Control {
                control,
                action,
                source,
            } => format!("{control}: {action} ({source})"),
            Self::Schedule { action } => format!("schedule: {action}"),
            Self::Status => "status requested".to_string(),
        }
    }
}

/// A fully parsed report for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The day the report covers.
    pub date: NaiveDate,
    /// Header line.
    pub header: ReportHeader,
    /// Items in file order (chronological).
    pub items: Vec<ReportItem>,
}
