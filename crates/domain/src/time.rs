//! Time and timestamp helpers.

use chrono::{DateTime, Local};

/// Local-time timestamp used for file modification times.
///
/// The hub is a single physical machine and everything user-facing (report
/// dates, download names) is expressed in its wall-clock time.
pub type Timestamp = DateTime<Local>;
