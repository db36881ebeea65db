//! Label + value rows for the detail page's form fields.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use tui_input::Input;

use crate::theme;

/// Width of the label column.
const LABEL_WIDTH: usize = 10;

/// A read-only `label  value` row.
pub fn value_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label:<width$}", width = LABEL_WIDTH),
            Style::default().fg(theme::DIM_WHITE),
        ),
        Span::styled(value.to_owned(), Style::default().fg(theme::NEON_CYAN)),
    ])
}

/// An editable field row. The cursor block is drawn while `editing`.
pub fn input_row(label: &str, input: &Input, selected: bool, editing: bool) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let label_style = if selected {
        theme::tab_active()
    } else {
        Style::default().fg(theme::DIM_WHITE)
    };

    let value = input.value();
    let mut spans = vec![
        Span::styled(marker.to_owned(), theme::key_hint_key()),
        Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), label_style),
    ];

    if editing {
        let cursor = input.cursor();
        let before: String = value.chars().take(cursor).collect();
        let at: String = value.chars().skip(cursor).take(1).collect();
        let after: String = value.chars().skip(cursor + 1).collect();
        let cursor_style = Style::default()
            .fg(theme::BG_DARK)
            .bg(theme::NEON_CYAN)
            .add_modifier(Modifier::BOLD);

        spans.push(Span::styled(before, Style::default().fg(theme::NEON_CYAN)));
        spans.push(Span::styled(
            if at.is_empty() { " ".to_owned() } else { at },
            cursor_style,
        ));
        spans.push(Span::styled(after, Style::default().fg(theme::NEON_CYAN)));
    } else {
        spans.push(Span::styled(
            value.to_owned(),
            Style::default()
                .fg(theme::NEON_CYAN)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    Line::from(spans)
}
