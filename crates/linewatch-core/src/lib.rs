//! UI state for the `linewatch` monitor and keypad, with no rendering surface.
//!
//! The presentation layer owns a single [`Session`] and turns every input
//! event into one call on it:
//!
//! - **[`BoundedLog`]**: newest-first event/alarm log capped at
//!   [`MAX_ITEMS`] entries; overflow silently evicts the oldest line.
//! - **[`ThresholdState`]**: one value clamped to `0..=100`, mirrored by
//!   every gauge. Writes landing exactly on a watch value log a WARN line.
//! - **[`SelectionState`]**: selected device path and visible [`Page`].
//! - **[`Keypad`]**: the twelve-key grid and its single press handler.
//!
//! Nothing here performs I/O; file paths, colours and fonts picked in
//! dialogs are only relayed to the log as text.

pub mod keypad;
pub mod model;
pub mod session;
pub mod store;

pub use keypad::{Direction, Key, Keypad};
pub use model::{Device, Group, LogEntry, Page, PassThrough, Severity, default_plant};
pub use session::{ALARM_MESSAGE, Session, ThresholdChange};
pub use store::{
    BoundedLog, MAX_ITEMS, SelectionEvent, SelectionState, ThresholdPolicy, ThresholdState,
};
