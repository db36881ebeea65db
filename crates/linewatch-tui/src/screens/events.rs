//! Events dock: the bounded log, newest first.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use linewatch_core::Session;

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct EventsDock {
    focused: bool,
    /// Rows skipped from the top (0 = newest entry visible).
    scroll_offset: usize,
}

impl EventsDock {
    pub fn new() -> Self {
        Self {
            focused: false,
            scroll_offset: 0,
        }
    }

    fn max_offset(session: &Session) -> usize {
        session.log().len().saturating_sub(1)
    }
}

impl Component for EventsDock {
    fn handle_key_event(&mut self, key: KeyEvent, session: &Session) -> Result<Option<Action>> {
        let max = Self::max_offset(session);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = (self.scroll_offset + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.scroll_offset = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll_offset = max,
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_offset = (self.scroll_offset + 10).min(max);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action, session: &Session) -> Result<Option<Action>> {
        match action {
            Action::ClearLog => self.scroll_offset = 0,
            // Eviction can shrink what's scrollable.
            _ => self.scroll_offset = self.scroll_offset.min(Self::max_offset(session)),
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let log = session.log();
        let block = Block::default()
            .title(format!(" Events / Alarms ({}) ", log.len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible = inner.height as usize;
        let msg_width = (inner.width as usize).saturating_sub(16).max(8);

        let lines: Vec<Line> = log
            .iter()
            .skip(self.scroll_offset)
            .take(visible)
            .map(|entry| {
                let color = theme::severity_color(entry.severity);
                let message: String = entry.message.chars().take(msg_width).collect();
                Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.recorded_at.format("%H:%M:%S")),
                        Style::default().fg(theme::BORDER_GRAY),
                    ),
                    Span::styled(
                        format!("{:<5} ", entry.severity.as_ref()),
                        Style::default().fg(color),
                    ),
                    Span::styled(message, theme::table_row()),
                ])
            })
            .collect();

        if lines.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "  (no events)",
                    theme::key_hint(),
                ))),
                inner,
            );
        } else {
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Events"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use linewatch_core::Severity;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session_with(n: usize) -> Session {
        let mut session = Session::default();
        for i in 0..n {
            session.append(Severity::Info, format!("line {i}"));
        }
        session
    }

    #[test]
    fn scroll_is_bounded_by_log_length() {
        let session = session_with(3);
        let mut dock = EventsDock::new();
        for _ in 0..10 {
            dock.handle_key_event(key(KeyCode::Char('j')), &session).ok();
        }
        assert_eq!(dock.scroll_offset, 2);
        dock.handle_key_event(key(KeyCode::Char('g')), &session).ok();
        assert_eq!(dock.scroll_offset, 0);
    }

    #[test]
    fn clear_resets_scroll() {
        let mut session = session_with(5);
        let mut dock = EventsDock::new();
        dock.handle_key_event(key(KeyCode::Char('G')), &session).ok();
        assert_eq!(dock.scroll_offset, 4);

        session.clear_log();
        dock.update(&Action::ClearLog, &session).ok();
        assert_eq!(dock.scroll_offset, 0);
    }
}
