//! Overview page: threshold mirrors on the Monitor tab, quick actions on
//! the Quick tab.

use chrono::Local;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, LineGauge, Paragraph};

use linewatch_core::{Page, PassThrough, Session, Severity};
use linewatch_core::store::{MAX_VALUE, MIN_VALUE};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{gauges, sub_tabs};

const TABS: [&str; 2] = ["Monitor", "Quick"];
const BUTTONS: [&str; 2] = ["Go Device Detail", "Add INFO event"];

/// Message logged by the "Add INFO event" button.
pub const ADD_INFO_MESSAGE: &str = "user clicked Add INFO";

pub struct OverviewScreen {
    focused: bool,
    tab: usize,
    button: usize,
    /// Shown in the Monitor tab's timestamp field.
    timestamp: String,
    font: Option<String>,
}

impl OverviewScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            tab: 0,
            button: 0,
            timestamp: now_stamp(),
            font: None,
        }
    }

    fn monitor_key(&mut self, code: KeyCode, value: i64) -> Option<Action> {
        let target = match code {
            KeyCode::Left | KeyCode::Char('h') => value - 1,
            KeyCode::Right | KeyCode::Char('l') => value + 1,
            KeyCode::PageDown => value - 10,
            KeyCode::PageUp => value + 10,
            KeyCode::Home => i64::from(MIN_VALUE),
            KeyCode::End => i64::from(MAX_VALUE),
            KeyCode::Char('n') => {
                self.timestamp = now_stamp();
                return None;
            }
            _ => return None,
        };
        Some(Action::SetThreshold(target))
    }

    fn quick_key(&mut self, code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
                self.button = self.button.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => {
                self.button = (self.button + 1).min(BUTTONS.len() - 1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(match self.button {
                0 => Action::SetPage(Page::Detail),
                _ => Action::Append(Severity::Info, ADD_INFO_MESSAGE.into()),
            }),
            _ => None,
        }
    }

    fn render_monitor(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let threshold = session.threshold();
        let value = threshold.current_value();
        let ratio = f64::from(value) / f64::from(MAX_VALUE);

        let rows = Layout::vertical([
            Constraint::Length(1), // timestamp
            Constraint::Length(1), // threshold label
            Constraint::Length(1), // slider
            Constraint::Length(1), // progress
            Constraint::Length(1), // spacer
            Constraint::Length(3), // dial + lcd
            Constraint::Min(0),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("  Timestamp  ", Style::default().fg(theme::DIM_WHITE)),
                Span::styled(self.timestamp.clone(), Style::default().fg(theme::ELECTRIC_YELLOW)),
                Span::styled("   n ", theme::key_hint_key()),
                Span::styled("now", theme::key_hint()),
            ])),
            rows[0],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("Threshold: {value}"),
                    theme::threshold_label(threshold.is_alert()),
                ),
            ])),
            rows[1],
        );

        let slider_color = if threshold.is_alert() {
            theme::ERROR_RED
        } else {
            theme::ELECTRIC_PURPLE
        };
        frame.render_widget(
            LineGauge::default()
                .ratio(ratio)
                .label("  Slider ")
                .filled_style(Style::default().fg(slider_color))
                .unfilled_style(Style::default().fg(theme::BORDER_GRAY)),
            rows[2],
        );

        let [_, progress_area] =
            Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(rows[3]);
        frame.render_widget(
            Gauge::default()
                .ratio(ratio)
                .label(format!("{value}%"))
                .gauge_style(Style::default().fg(theme::NEON_CYAN).bg(theme::BG_HIGHLIGHT)),
            progress_area,
        );

        let [_, dial_area, _, lcd_area] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(rows[5]);
        frame.render_widget(Paragraph::new(gauges::dial_lines(value)), dial_area);
        frame.render_widget(Paragraph::new(gauges::lcd_lines(value)), lcd_area);
    }

    fn render_quick(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw("  ")];
        for (i, label) in BUTTONS.iter().enumerate() {
            spans.push(Span::styled(
                format!(" {label} "),
                theme::button(self.focused && i == self.button),
            ));
            spans.push(Span::raw("  "));
        }
        let lines = vec![
            Line::from(""),
            Line::from(spans),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ←/→ ", theme::key_hint_key()),
                Span::styled("choose  ", theme::key_hint()),
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("press", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl Component for OverviewScreen {
    fn handle_key_event(&mut self, key: KeyEvent, session: &Session) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char(']') => {
                self.tab = (self.tab + 1) % TABS.len();
                Ok(None)
            }
            KeyCode::Char('[') => {
                self.tab = (self.tab + TABS.len() - 1) % TABS.len();
                Ok(None)
            }
            code if self.tab == 0 => {
                let value = i64::from(session.threshold().current_value());
                Ok(self.monitor_key(code, value))
            }
            code => Ok(self.quick_key(code)),
        }
    }

    fn update(&mut self, action: &Action, _session: &Session) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.timestamp = now_stamp(),
            Action::DialogResolved {
                kind: PassThrough::Font,
                value: Some(font),
            } if !font.is_empty() => self.font = Some(font.clone()),
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

        let mut heading = vec![Span::styled(
            format!("  Overview - {}", session.selection().selected_path()),
            theme::heading(),
        )];
        if let Some(font) = &self.font {
            heading.push(Span::styled(format!("  [font: {font}]"), theme::key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(heading)), heading_area);
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&TABS, self.tab)),
            tabs_area,
        );

        if self.tab == 0 {
            self.render_monitor(frame, body_area, session);
        } else {
            self.render_quick(frame, body_area);
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Overview"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(screen: &mut OverviewScreen, session: &Session, code: KeyCode) -> Option<Action> {
        screen
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), session)
            .ok()
            .flatten()
    }

    #[test]
    fn monitor_keys_request_threshold_writes() {
        let session = Session::default();
        let mut screen = OverviewScreen::new();
        assert_eq!(press(&mut screen, &session, KeyCode::Right), Some(Action::SetThreshold(31)));
        assert_eq!(press(&mut screen, &session, KeyCode::Left), Some(Action::SetThreshold(29)));
        assert_eq!(press(&mut screen, &session, KeyCode::PageUp), Some(Action::SetThreshold(40)));
        assert_eq!(press(&mut screen, &session, KeyCode::PageDown), Some(Action::SetThreshold(20)));
        assert_eq!(press(&mut screen, &session, KeyCode::Home), Some(Action::SetThreshold(0)));
        assert_eq!(press(&mut screen, &session, KeyCode::End), Some(Action::SetThreshold(100)));
    }

    #[test]
    fn quick_tab_buttons() {
        let session = Session::default();
        let mut screen = OverviewScreen::new();
        press(&mut screen, &session, KeyCode::Char(']'));

        assert_eq!(
            press(&mut screen, &session, KeyCode::Enter),
            Some(Action::SetPage(Page::Detail))
        );
        press(&mut screen, &session, KeyCode::Right);
        assert_eq!(
            press(&mut screen, &session, KeyCode::Enter),
            Some(Action::Append(Severity::Info, ADD_INFO_MESSAGE.into()))
        );
        // Arrow keys no longer drive the threshold on this tab.
        assert_eq!(press(&mut screen, &session, KeyCode::Right), None);
    }

    #[test]
    fn font_pick_is_remembered() {
        let session = Session::default();
        let mut screen = OverviewScreen::new();
        screen
            .update(
                &Action::DialogResolved {
                    kind: PassThrough::Font,
                    value: Some("Hack".into()),
                },
                &session,
            )
            .ok();
        assert_eq!(screen.font.as_deref(), Some("Hack"));

        screen
            .update(
                &Action::DialogResolved {
                    kind: PassThrough::Font,
                    value: None,
                },
                &session,
            )
            .ok();
        assert_eq!(screen.font.as_deref(), Some("Hack"));
    }
}
