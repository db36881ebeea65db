// ── Event log entry types ──

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Severity tag of a log line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Alarm,
    Sys,
}

/// One immutable line in the events dock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
    /// Strictly increasing across the lifetime of a log, never reused.
    pub sequence: u64,
    pub recorded_at: DateTime<Local>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {}", self.severity.as_ref(), self.message)
    }
}

/// Dialog results that are relayed to the log verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum PassThrough {
    #[strum(serialize = "open file")]
    OpenFile,
    #[strum(serialize = "save file")]
    SaveFile,
    #[strum(serialize = "color")]
    Color,
    #[strum(serialize = "font")]
    Font,
}
