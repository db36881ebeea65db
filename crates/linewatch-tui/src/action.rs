//! All possible UI actions. Actions are the sole mechanism for state mutation.

use linewatch_core::{Page, PassThrough, Severity};

/// Which modal dialog to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    OpenFile,
    SaveFile,
    Color,
    Font,
    About,
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    /// Clock refresh from the periodic timer.
    Tick,
    Render,
    Resize(u16, u16),

    // ── Focus / overlays ──────────────────────────────────────────
    FocusNext,
    FocusPrev,
    ToggleHelp,

    // ── Event log ─────────────────────────────────────────────────
    Append(Severity, String),
    ClearLog,
    RaiseAlarm,

    // ── Threshold ─────────────────────────────────────────────────
    SetThreshold(i64),

    // ── Selection / pages ─────────────────────────────────────────
    SelectGroup(String),
    SelectDevice { group: String, device: String },
    SetPage(Page),

    // ── Dialogs ───────────────────────────────────────────────────
    OpenDialog(DialogKind),
    /// A pass-through dialog closed. `None` means the user cancelled.
    DialogResolved {
        kind: PassThrough,
        value: Option<String>,
    },
}
