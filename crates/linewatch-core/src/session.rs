// ── Session: the composition root the presentation layer drives ──
//
// Owns one of each state holder and applies the side effects that follow
// a state change (WARN lines on watch values, INFO lines on selections),
// so every inbound UI event is exactly one method call here.

use tracing::debug;

use crate::model::{LogEntry, Page, PassThrough, Severity};
use crate::store::{BoundedLog, SelectionState, ThresholdState};

/// Line appended by [`Session::raise_alarm`].
pub const ALARM_MESSAGE: &str = "OverTemp (fake) (Ctrl+K)";

/// Result of a threshold write, everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdChange {
    /// The clamped value now shown by every mirror.
    pub value: u8,
    /// Label should be drawn bold in the alert colour.
    pub alert: bool,
    /// WARN line written because the value landed on a watch value.
    pub logged: Option<LogEntry>,
}

#[derive(Debug, Clone)]
pub struct Session {
    log: BoundedLog,
    threshold: ThresholdState,
    selection: SelectionState,
}

impl Session {
    pub fn new(log: BoundedLog, threshold: ThresholdState, selection: SelectionState) -> Self {
        Self {
            log,
            threshold,
            selection,
        }
    }

    // ── Read side ────────────────────────────────────────────────────

    pub fn log(&self) -> &BoundedLog {
        &self.log
    }

    pub fn threshold(&self) -> &ThresholdState {
        &self.threshold
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // ── Inbound events ───────────────────────────────────────────────

    pub fn append(&mut self, severity: Severity, message: impl Into<String>) -> LogEntry {
        self.log.append(severity, message)
    }

    pub fn clear_log(&mut self) -> LogEntry {
        self.log.clear()
    }

    /// Write the threshold. Every call that lands exactly on a watch value
    /// logs, whether or not the value changed.
    pub fn set_threshold(&mut self, value: i64) -> ThresholdChange {
        let value = self.threshold.set_value(value);
        let logged = self
            .threshold
            .is_watch_value(value)
            .then(|| self.log.append(Severity::Warn, format!("threshold changed: {value}")));

        ThresholdChange {
            value,
            alert: self.threshold.is_alert(),
            logged,
        }
    }

    pub fn select_group(&mut self, group: &str) -> Page {
        let event = self.selection.select_group(group);
        self.log.append(Severity::Info, event.notice);
        event.page
    }

    pub fn select_device(&mut self, group: &str, device: &str) -> Page {
        let event = self.selection.select_device(group, device);
        self.log.append(Severity::Info, event.notice);
        event.page
    }

    pub fn set_page(&mut self, page: Page) -> Page {
        self.selection.set_page(page)
    }

    /// Relay a dialog result. `None` (cancelled) and empty values are no-ops.
    pub fn pass_through(&mut self, kind: PassThrough, value: Option<&str>) -> Option<LogEntry> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            debug!(%kind, "dialog cancelled");
            return None;
        };
        Some(self.log.append(Severity::Info, format!("{kind}: {value}")))
    }

    pub fn raise_alarm(&mut self) -> LogEntry {
        self.log.append(Severity::Alarm, ALARM_MESSAGE)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            BoundedLog::new(),
            ThresholdState::default(),
            SelectionState::new("Line1 / DeviceA"),
        )
    }
}
