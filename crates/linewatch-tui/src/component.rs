//! Component trait: the building block for every pane and page.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use linewatch_core::Session;

use crate::action::Action;

/// Every UI element implements Component.
///
/// Components never mutate the [`Session`]; they read it to render and
/// answer input with an [`Action`], which the app applies.
///
/// Lifecycle: (`handle_key_event` | `update` | `render`)*
pub trait Component: Send {
    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent, _session: &Session) -> Result<Option<Action>> {
        Ok(None)
    }

    /// React to an action the app has already applied to the session.
    /// May return a follow-up action.
    fn update(&mut self, _action: &Action, _session: &Session) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session);

    /// While true, every key except Ctrl+C goes to this component
    /// (e.g. a text field in edit mode).
    fn captures_input(&self) -> bool {
        false
    }

    /// Whether this component currently holds input focus.
    #[allow(dead_code)]
    fn focused(&self) -> bool {
        false
    }

    /// Set focus state.
    fn set_focused(&mut self, _focused: bool) {}

    /// Unique identifier for this component (for focus management).
    #[allow(dead_code)]
    fn id(&self) -> &str;
}
