//! Horizontal sub-tab bar used inside pages (Monitor/Quick, Info/Params).

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme;

/// Renders a tab bar line with the active tab highlighted, followed by the
/// `[ ]` switching hint.
///
/// The active tab gets Electric Purple + brackets; inactive tabs get Dim White.
pub fn render_sub_tabs<'a>(labels: &[&'a str], active_index: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2 + 2);
    spans.push(Span::raw("  "));

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme::key_hint()));
        }

        if i == active_index {
            spans.push(Span::styled(
                format!("[{label}]"),
                theme::tab_active().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {label} "), theme::tab_inactive()));
        }
    }

    spans.push(Span::styled("   [ ] ", theme::key_hint_key()));
    spans.push(Span::styled("switch tab", theme::key_hint()));

    Line::from(spans)
}
