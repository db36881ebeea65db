//! Keypad screen: a small inline panel that echoes each pressed key above
//! itself, one label per line.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::info;

use linewatch_config::UiSettings;
use linewatch_core::{Direction, Keypad};

use crate::event::{Event, EventReader};
use crate::theme;
use crate::tui::Tui;

/// Width of one key cell, e.g. `" [ 1 ] "`.
const CELL_WIDTH: usize = 7;

pub struct KeypadApp {
    keypad: Keypad,
    running: bool,
}

impl KeypadApp {
    pub fn new() -> Self {
        Self {
            keypad: Keypad::new(),
            running: true,
        }
    }

    /// Rows needed by the inline viewport: the grid, a hint line, borders.
    pub fn height(&self) -> u16 {
        u16::try_from(self.keypad.rows() + 3).unwrap_or(u16::MAX)
    }

    /// Returns the label pressed by `key`, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<&'static str> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                None
            }
            KeyCode::Up => {
                self.keypad.move_cursor(Direction::Up);
                None
            }
            KeyCode::Down => {
                self.keypad.move_cursor(Direction::Down);
                None
            }
            KeyCode::Left => {
                self.keypad.move_cursor(Direction::Left);
                None
            }
            KeyCode::Right => {
                self.keypad.move_cursor(Direction::Right);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.keypad.press_selected(),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                self.keypad.press(c.encode_utf8(&mut buf))
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let block = Block::default()
            .title(" Keypad ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [grid_area, hint_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let selected = self.keypad.selected().map(|k| k.label);
        let lines: Vec<Line> = (0..self.keypad.rows())
            .map(|row| {
                let spans: Vec<Span> = (0..self.keypad.cols())
                    .flat_map(|col| match self.keypad.key_at(row, col) {
                        Some(key) => vec![
                            Span::raw(" "),
                            Span::styled(
                                format!("[ {} ]", key.label),
                                theme::button(Some(key.label) == selected),
                            ),
                            Span::raw(" "),
                        ],
                        None => vec![Span::raw(" ".repeat(CELL_WIDTH))],
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), grid_area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("arrows ", theme::key_hint_key()),
                Span::styled("move ", theme::key_hint()),
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("press ", theme::key_hint()),
                Span::styled("q ", theme::key_hint_key()),
                Span::styled("quit", theme::key_hint()),
            ])),
            hint_area,
        );
    }

    /// Run the keypad in an inline viewport until quit.
    pub async fn run(&mut self, ui: &UiSettings) -> Result<()> {
        let mut tui = Tui::inline(self.height())?;
        tui.enter()?;

        let mut events = EventReader::new(ui.clock_interval(), ui.render_interval());
        info!("keypad started");

        tui.draw(|frame| self.render(frame))?;
        while self.running {
            let Some(event) = events.next().await else {
                break;
            };
            match event {
                Event::Key(key) => {
                    if let Some(label) = self.handle_key(key) {
                        info!(label, "key pressed");
                        tui.print_above(label)?;
                    }
                }
                Event::Render | Event::Resize(..) => tui.draw(|frame| self.render(frame))?,
                Event::Tick => {}
            }
        }

        events.stop();
        tui.exit()?;
        info!("keypad closed");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typed_labels_press_directly() {
        let mut app = KeypadApp::new();
        assert_eq!(app.handle_key(key(KeyCode::Char('7'))), Some("7"));
        assert_eq!(app.handle_key(key(KeyCode::Char('+'))), Some("+"));
        assert_eq!(app.handle_key(key(KeyCode::Char('x'))), None);
        assert!(app.running);
    }

    #[test]
    fn arrows_then_enter_press_selected() {
        let mut app = KeypadApp::new();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Some("0"));
        assert_eq!(app.handle_key(key(KeyCode::Char(' '))), Some("0"));
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = KeypadApp::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);

        let mut app = KeypadApp::new();
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn renders_every_label() {
        let app = KeypadApp::new();
        let mut terminal = Terminal::new(TestBackend::new(30, app.height())).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for label in ["1", "5", "9", "0", "+", "-"] {
            assert!(text.contains(&format!("[ {label} ]")), "missing {label}");
        }
    }
}
