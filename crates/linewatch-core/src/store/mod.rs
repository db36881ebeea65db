// ── State holders ──
//
// Independent, render-free holders. None of them references another; the
// `Session` composes them.

mod log;
mod selection;
mod threshold;

pub use log::{BoundedLog, CLEARED_MESSAGE, MAX_ITEMS};
pub use selection::{SelectionEvent, SelectionState};
pub use threshold::{
    ALERT_ABOVE, MAX_VALUE, MIN_VALUE, ThresholdPolicy, ThresholdState, WATCH_VALUES,
};
