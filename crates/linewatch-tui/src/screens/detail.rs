//! Device detail page: editable Info form and a scrolling Params list.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_input::Input;

use linewatch_core::{Page, PassThrough, Session, Severity};

use crate::action::Action;
use crate::component::Component;
use crate::dialog::edit_input;
use crate::theme;
use crate::widgets::{form, sub_tabs};

const TABS: [&str; 2] = ["Info", "Params"];

/// Message logged by the fake "Save Params" button.
pub const SAVE_PARAMS_MESSAGE: &str = "save params (fake)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Ip,
}

pub struct DetailScreen {
    focused: bool,
    tab: usize,
    field: Field,
    editing: bool,
    name: Input,
    ip: Input,
    params_scroll: u16,
    heading_color: Option<Color>,
}

impl DetailScreen {
    pub fn new(session: &Session, device_ip: &str) -> Self {
        Self {
            focused: false,
            tab: 0,
            field: Field::Name,
            editing: false,
            name: Input::new(session.selection().device_name().to_owned()),
            ip: Input::new(device_ip.to_owned()),
            params_scroll: 0,
            heading_color: None,
        }
    }

    fn active_input(&mut self) -> &mut Input {
        match self.field {
            Field::Name => &mut self.name,
            Field::Ip => &mut self.ip,
        }
    }

    fn info_key(&mut self, key: KeyEvent) {
        if self.editing {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.editing = false,
                _ => {
                    edit_input(self.active_input(), key);
                }
            }
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.field = Field::Ip,
            KeyCode::Char('k') | KeyCode::Up => self.field = Field::Name,
            KeyCode::Enter => self.editing = true,
            _ => {}
        }
    }

    fn params_key(&mut self, code: KeyCode) {
        let max = u16::try_from(param_lines().len().saturating_sub(1)).unwrap_or(u16::MAX);
        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.params_scroll = (self.params_scroll + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.params_scroll = self.params_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => self.params_scroll = (self.params_scroll + 10).min(max),
            KeyCode::PageUp => self.params_scroll = self.params_scroll.saturating_sub(10),
            _ => {}
        }
    }

    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            form::input_row(
                "Name",
                &self.name,
                self.focused && self.field == Field::Name,
                self.editing && self.field == Field::Name,
            ),
            form::input_row(
                "IP",
                &self.ip,
                self.focused && self.field == Field::Ip,
                self.editing && self.field == Field::Ip,
            ),
            Line::from(""),
            Line::from(vec![
                Span::styled("  j/k ", theme::key_hint_key()),
                Span::styled("field  ", theme::key_hint()),
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("edit  ", theme::key_hint()),
                Span::styled("w ", theme::key_hint_key()),
                Span::styled("save params  ", theme::key_hint()),
                Span::styled("b ", theme::key_hint_key()),
                Span::styled("back", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_params(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = param_lines()
            .into_iter()
            .map(|(label, value)| form::value_row(&label, &value))
            .collect();
        frame.render_widget(Paragraph::new(lines).scroll((self.params_scroll, 0)), area);
    }
}

/// Static parameter rows: `Param A0..A19`, `Param B0..B19`, `Extra 0..14`.
fn param_lines() -> Vec<(String, String)> {
    let a = (0..20).map(|i| (format!("Param A{i}"), i.to_string()));
    let b = (0..20).map(|i| (format!("Param B{i}"), (i * 10).to_string()));
    let extra = (0..15).map(|i| (format!("Extra {i}"), "...".to_owned()));
    a.chain(b).chain(extra).collect()
}

impl Component for DetailScreen {
    fn handle_key_event(&mut self, key: KeyEvent, _session: &Session) -> Result<Option<Action>> {
        if self.editing {
            self.info_key(key);
            return Ok(None);
        }
        match key.code {
            KeyCode::Char(']') => self.tab = (self.tab + 1) % TABS.len(),
            KeyCode::Char('[') => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            KeyCode::Char('w') => {
                return Ok(Some(Action::Append(
                    Severity::Info,
                    SAVE_PARAMS_MESSAGE.into(),
                )));
            }
            KeyCode::Esc | KeyCode::Char('b') => return Ok(Some(Action::SetPage(Page::Overview))),
            _ if self.tab == 0 => self.info_key(key),
            code => self.params_key(code),
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action, session: &Session) -> Result<Option<Action>> {
        match action {
            Action::SelectDevice { .. } => {
                self.name = Input::new(session.selection().device_name().to_owned());
                self.editing = false;
            }
            Action::SetPage(Page::Overview) => self.editing = false,
            Action::DialogResolved {
                kind: PassThrough::Color,
                value: Some(hex),
            } => {
                if let Ok(color) = hex.parse::<Color>() {
                    self.heading_color = Some(color);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [heading_area, tabs_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        let heading_style = match self.heading_color {
            Some(color) => theme::heading().fg(color),
            None => theme::heading(),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  Device Detail - {}", session.selection().selected_path()),
                heading_style,
            ))),
            heading_area,
        );
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&TABS, self.tab)),
            tabs_area,
        );

        if self.tab == 0 {
            self.render_info(frame, body_area);
        } else {
            self.render_params(frame, body_area);
        }
    }

    fn captures_input(&self) -> bool {
        self.editing
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Device Detail"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(screen: &mut DetailScreen, session: &Session, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), session)
            .ok()
            .flatten()
    }

    #[test]
    fn param_rows_cover_all_groups() {
        let rows = param_lines();
        assert_eq!(rows.len(), 55);
        assert_eq!(rows[19], ("Param A19".to_owned(), "19".to_owned()));
        assert_eq!(rows[25], ("Param B5".to_owned(), "50".to_owned()));
        assert_eq!(rows[54], ("Extra 14".to_owned(), "...".to_owned()));
    }

    #[test]
    fn fields_start_from_selection_and_config() {
        let session = Session::default();
        let screen = DetailScreen::new(&session, "192.168.1.10");
        assert_eq!(screen.name.value(), "DeviceA");
        assert_eq!(screen.ip.value(), "192.168.1.10");
    }

    #[test]
    fn editing_captures_keys_until_escape() {
        let session = Session::default();
        let mut screen = DetailScreen::new(&session, "192.168.1.10");

        press(&mut screen, &session, KeyCode::Enter);
        assert!(screen.captures_input());
        // 'b' and 'w' are text while editing, not commands.
        assert_eq!(press(&mut screen, &session, KeyCode::Char('b')), None);
        assert_eq!(press(&mut screen, &session, KeyCode::Char('w')), None);
        assert_eq!(screen.name.value(), "DeviceAbw");
        screen
            .handle_key_event(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL), &session)
            .ok();
        assert_eq!(screen.name.value(), "DeviceAbw");

        press(&mut screen, &session, KeyCode::Esc);
        assert!(!screen.captures_input());
        assert_eq!(
            press(&mut screen, &session, KeyCode::Char('b')),
            Some(Action::SetPage(Page::Overview))
        );
    }

    #[test]
    fn save_params_logs_info() {
        let session = Session::default();
        let mut screen = DetailScreen::new(&session, "192.168.1.10");
        assert_eq!(
            press(&mut screen, &session, KeyCode::Char('w')),
            Some(Action::Append(Severity::Info, SAVE_PARAMS_MESSAGE.into()))
        );
    }

    #[test]
    fn device_selection_resets_name() {
        let mut session = Session::default();
        let mut screen = DetailScreen::new(&session, "192.168.1.10");
        session.select_device("Line2", "DeviceC");
        screen
            .update(
                &Action::SelectDevice {
                    group: "Line2".into(),
                    device: "DeviceC".into(),
                },
                &session,
            )
            .ok();
        assert_eq!(screen.name.value(), "DeviceC");
    }

    #[test]
    fn color_pick_sets_heading_color() {
        let session = Session::default();
        let mut screen = DetailScreen::new(&session, "192.168.1.10");
        screen
            .update(
                &Action::DialogResolved {
                    kind: PassThrough::Color,
                    value: Some("#50fa7b".into()),
                },
                &session,
            )
            .ok();
        assert_eq!(screen.heading_color, Some(Color::Rgb(80, 250, 123)));
    }

    #[test]
    fn params_scroll_is_bounded() {
        let session = Session::default();
        let mut screen = DetailScreen::new(&session, "192.168.1.10");
        press(&mut screen, &session, KeyCode::Char(']'));
        press(&mut screen, &session, KeyCode::Up);
        assert_eq!(screen.params_scroll, 0);
        for _ in 0..100 {
            press(&mut screen, &session, KeyCode::Char('j'));
        }
        assert_eq!(screen.params_scroll, 54);
    }
}
