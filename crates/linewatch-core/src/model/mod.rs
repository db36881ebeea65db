// ── Domain model ──
//
// Plain value types shared by the state holders, the config loader and
// the TUI.

mod entry;
mod plant;

pub use entry::{LogEntry, PassThrough, Severity};
pub use plant::{Device, Group, Page, default_plant};
