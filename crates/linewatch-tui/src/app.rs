//! Application core: event loop, pane focus, action dispatch.
//!
//! The [`App`] owns the [`Session`]. Components only read it; every change
//! arrives as an [`Action`], is applied here, then broadcast so each pane
//! can refresh whatever view state it keeps.

use std::collections::HashMap;

use chrono::Local;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use linewatch_config::{Config, UiSettings};
use linewatch_core::{Session, Severity};

use crate::action::{Action, DialogKind};
use crate::component::Component;
use crate::dialog::{Dialog, DialogOutcome};
use crate::event::{Event, EventReader};
use crate::screen::{Focus, ScreenId};
use crate::screens::{create_screens, events::EventsDock, tree::DeviceTree};
use crate::theme;
use crate::tui::Tui;

const TREE_WIDTH: u16 = 32;
const EVENTS_WIDTH: u16 = 44;

/// Startup lines, oldest first so the newest-first dock shows them
/// top to bottom as Boot OK, Packet lost, OverTemp.
const SEED_EVENTS: [(Severity, &str); 3] = [
    (Severity::Alarm, "OverTemp (fake)"),
    (Severity::Warn, "Packet lost (fake)"),
    (Severity::Info, "Boot OK"),
];

/// Top-level application state and event loop.
pub struct App {
    session: Session,
    focus: Focus,
    tree: DeviceTree,
    /// Stacked pages, keyed by ScreenId. The session's page picks one.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    events: EventsDock,
    /// Open modal, if any. Takes every key until it closes.
    dialog: Option<Dialog>,
    help_visible: bool,
    running: bool,
    clock: String,
    ui: UiSettings,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut session = config.build_session();
        for (severity, message) in SEED_EVENTS {
            session.append(severity, message);
        }

        let screens = create_screens(&session, &config.plant.device_ip);

        let mut app = Self {
            session,
            focus: Focus::default(),
            tree: DeviceTree::new(config.plant.groups.clone()),
            screens,
            events: EventsDock::new(),
            dialog: None,
            help_visible: false,
            running: true,
            clock: clock_now(),
            ui: config.ui.clone(),
            action_tx,
            action_rx,
        };
        app.sync_focus();
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn active_screen(&self) -> ScreenId {
        ScreenId::from(self.session.selection().current_page())
    }

    fn active_page(&self) -> Option<&dyn Component> {
        self.screens.get(&self.active_screen()).map(|page| &**page)
    }

    /// Push focus flags down to every component.
    fn sync_focus(&mut self) {
        let active = self.active_screen();
        self.tree.set_focused(self.focus == Focus::Tree);
        self.events.set_focused(self.focus == Focus::Events);
        for (id, screen) in &mut self.screens {
            screen.set_focused(self.focus == Focus::Page && *id == active);
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(self.ui.clock_interval(), self.ui.render_interval());

        info!("monitor event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("monitor event loop ended");
        Ok(())
    }

    /// Apply an action and everything it triggers, without a terminal.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.action_tx.send(action)?;
        while let Ok(action) = self.action_rx.try_recv() {
            self.process_action(&action)?;
        }
        Ok(())
    }

    /// Route a key press and apply the resulting action.
    pub fn press(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = self.handle_key_event(key)? {
            self.dispatch(action)?;
        }
        Ok(())
    }

    /// Map a key to an action. Order: modal dialog, help overlay, a
    /// component capturing text, global keys, then the focused pane.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if let Some(dialog) = &mut self.dialog {
            return Ok(match dialog.handle_key_event(key) {
                DialogOutcome::Pending => None,
                DialogOutcome::Dismissed => {
                    self.dialog = None;
                    None
                }
                DialogOutcome::Resolved { kind, value } => {
                    self.dialog = None;
                    Some(Action::DialogResolved { kind, value })
                }
            });
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Clear and alarm fire even while a text field has the keyboard.
        if key.modifiers == KeyModifiers::CONTROL {
            match key.code {
                KeyCode::Char('l') => return Ok(Some(Action::ClearLog)),
                KeyCode::Char('k') => return Ok(Some(Action::RaiseAlarm)),
                _ => {}
            }
        }

        let active = self.active_screen();
        if self.focus == Focus::Page {
            if let Some(page) = self.screens.get_mut(&active) {
                if page.captures_input() {
                    return page.handle_key_event(key, &self.session);
                }
            }
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (_, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            (KeyModifiers::NONE, KeyCode::Tab) => return Ok(Some(Action::FocusNext)),
            (_, KeyCode::BackTab) => return Ok(Some(Action::FocusPrev)),
            (KeyModifiers::NONE, KeyCode::F(1)) => {
                return Ok(Some(Action::OpenDialog(DialogKind::About)));
            }
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='2')) => {
                let screen = c
                    .to_digit(10)
                    .and_then(|n| u8::try_from(n).ok())
                    .and_then(ScreenId::from_number);
                if let Some(screen) = screen {
                    return Ok(Some(Action::SetPage(screen.page())));
                }
            }
            (KeyModifiers::CONTROL, KeyCode::Char(c)) => {
                let action = match c {
                    'o' => Some(Action::OpenDialog(DialogKind::OpenFile)),
                    's' => Some(Action::OpenDialog(DialogKind::SaveFile)),
                    'p' => Some(Action::OpenDialog(DialogKind::Color)),
                    'f' => Some(Action::OpenDialog(DialogKind::Font)),
                    _ => None,
                };
                if action.is_some() {
                    return Ok(action);
                }
            }
            _ => {}
        }

        match self.focus {
            Focus::Tree => self.tree.handle_key_event(key, &self.session),
            Focus::Events => self.events.handle_key_event(key, &self.session),
            Focus::Page => match self.screens.get_mut(&active) {
                Some(page) => page.handle_key_event(key, &self.session),
                None => Ok(None),
            },
        }
    }

    /// Apply one action to the session, then propagate it to every component.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::Tick => self.clock = clock_now(),
            Action::Render => return Ok(()),
            Action::Resize(w, h) => debug!(width = w, height = h, "terminal resized"),

            Action::FocusNext => {
                self.focus = self.focus.next();
                self.sync_focus();
            }
            Action::FocusPrev => {
                self.focus = self.focus.prev();
                self.sync_focus();
            }
            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::Append(severity, message) => {
                self.session.append(*severity, message.clone());
            }
            Action::ClearLog => {
                self.session.clear_log();
            }
            Action::RaiseAlarm => {
                self.session.raise_alarm();
                self.dialog = Some(Dialog::alarm());
            }

            Action::SetThreshold(value) => {
                let change = self.session.set_threshold(*value);
                debug!(
                    requested = value,
                    value = change.value,
                    alert = change.alert,
                    "threshold set"
                );
            }

            Action::SelectGroup(group) => {
                self.session.select_group(group);
                self.sync_focus();
            }
            Action::SelectDevice { group, device } => {
                self.session.select_device(group, device);
                self.sync_focus();
            }
            Action::SetPage(page) => {
                debug!(%page, "switching page");
                self.session.set_page(*page);
                self.sync_focus();
            }

            Action::OpenDialog(kind) => self.dialog = Some(Dialog::open(*kind)),
            Action::DialogResolved { kind, value } => {
                self.session.pass_through(*kind, value.as_deref());
            }
        }

        let mut follow_ups = Vec::new();
        follow_ups.extend(self.tree.update(action, &self.session)?);
        follow_ups.extend(self.events.update(action, &self.session)?);
        for screen in self.screens.values_mut() {
            follow_ups.extend(screen.update(action, &self.session)?);
        }
        for follow_up in follow_ups {
            self.action_tx.send(follow_up)?;
        }

        Ok(())
    }

    /// Render the full application frame.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let [toolbar_area, body_area, tab_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [tree_area, page_area, events_area] = Layout::horizontal([
            Constraint::Length(TREE_WIDTH),
            Constraint::Min(20),
            Constraint::Length(EVENTS_WIDTH),
        ])
        .areas(body_area);

        self.render_toolbar(frame, toolbar_area);
        self.tree.render(frame, tree_area, &self.session);
        if let Some(page) = self.active_page() {
            page.render(frame, page_area, &self.session);
        }
        self.events.render(frame, events_area, &self.session);
        self.render_tab_bar(frame, tab_area);
        self.render_status_bar(frame, status_area);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
        if let Some(dialog) = &self.dialog {
            dialog.render(frame, area);
        }
    }

    fn render_toolbar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" linewatch ", theme::title_style())];
        for (key, label) in [
            ("^O", "open"),
            ("^S", "save"),
            ("^P", "color"),
            ("^F", "font"),
            ("F1", "about"),
            ("^L", "clear"),
            ("^K", "alarm"),
        ] {
            spans.push(Span::styled(format!(" {key} "), theme::key_hint_key()));
            spans.push(Span::styled(label, theme::key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let active = self.active_screen();
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == active {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(ScreenId::ALL.iter().position(|&s| s == active).unwrap_or(0));

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let threshold = self.session.threshold();
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.clock.clone(), Style::default().fg(theme::ELECTRIC_YELLOW)),
            Span::styled(" │ ", theme::key_hint()),
            Span::styled(
                format!("threshold {}", threshold.current_value()),
                theme::threshold_label(threshold.is_alert()),
            ),
            Span::styled(
                format!(
                    " │ {} │ Tab focus  ? help  q quit",
                    self.session.selection().selected_path()
                ),
                theme::key_hint(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 60u16.min(area.width.saturating_sub(4));
        let help_height = 20u16.min(area.height.saturating_sub(4));
        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(Clear, help_area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let row = |key: &str, label: &str| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme::key_hint_key()),
                Span::styled(label.to_owned(), theme::key_hint()),
            ])
        };
        let section = |title: &str| {
            Line::from(Span::styled(
                format!("  {title}"),
                Style::default().fg(theme::NEON_CYAN),
            ))
        };

        let help_text = vec![
            Line::from(""),
            section("Navigation"),
            row("Tab", "Focus tree / page / events"),
            row("1-2", "Overview / Device Detail"),
            row("j/k Enter", "Move / select"),
            row("h/l", "Collapse / expand tree"),
            row("[ ]", "Switch tab"),
            row("Esc b", "Back to overview"),
            Line::from(""),
            section("Monitor"),
            row("←/→ PgUp/Dn", "Threshold ±1 / ±10"),
            row("Home/End", "Threshold 0 / 100"),
            Line::from(""),
            section("Global"),
            row("^O ^S ^P ^F", "Open / save / color / font"),
            row("^L ^K", "Clear events / alarm"),
            row("F1 ? q", "About / help / quit"),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}

fn clock_now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use linewatch_core::{Page, PassThrough};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};

    use super::*;
    use crate::widgets::gauges::lcd_rows;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn messages(app: &App) -> Vec<String> {
        app.session().log().iter().map(ToString::to_string).collect()
    }

    fn render_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(app: &App) -> String {
        let buffer = render_buffer(app);
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Cell position of the first occurrence of `needle`.
    fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let wanted: Vec<String> = needle.chars().map(String::from).collect();
        (0..buffer.area.height).find_map(|y| {
            let row: Vec<&str> = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.windows(wanted.len())
                .position(|cells| cells.iter().zip(&wanted).all(|(a, b)| *a == b.as_str()))
                .map(|x| (u16::try_from(x).unwrap(), y))
        })
    }

    #[test]
    fn starts_with_seed_events_newest_first() {
        let app = app();
        assert_eq!(
            messages(&app),
            vec![
                "INFO  Boot OK",
                "WARN  Packet lost (fake)",
                "ALARM OverTemp (fake)",
            ]
        );
        assert_eq!(app.session().threshold().current_value(), 30);
        assert_eq!(
            app.session().selection().current_selection(),
            ("Line1 / DeviceA", Page::Overview)
        );
    }

    #[test]
    fn threshold_keys_log_on_watch_values() {
        let mut app = app();
        for _ in 0..2 {
            app.press(key(KeyCode::PageUp)).unwrap();
        }
        assert_eq!(app.session().threshold().current_value(), 50);
        assert_eq!(messages(&app)[0], "WARN  threshold changed: 50");

        app.press(key(KeyCode::End)).unwrap();
        assert_eq!(app.session().threshold().current_value(), 100);
        assert!(app.session().threshold().is_alert());
        // 100 is not a watch value.
        assert_eq!(app.session().log().len(), 4);
    }

    #[test]
    fn tree_selection_switches_page() {
        let mut app = app();
        app.press(key(KeyCode::BackTab)).unwrap();
        app.press(key(KeyCode::Char('j'))).unwrap();
        app.press(key(KeyCode::Char('j'))).unwrap();
        app.press(key(KeyCode::Enter)).unwrap();

        assert_eq!(
            app.session().selection().current_selection(),
            ("Line1 / DeviceB", Page::Detail)
        );
        assert_eq!(messages(&app)[0], "INFO  select device: Line1/DeviceB");

        app.press(key(KeyCode::Char('k'))).unwrap();
        app.press(key(KeyCode::Char('k'))).unwrap();
        app.press(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            app.session().selection().current_selection(),
            ("Line1 / DeviceB", Page::Overview)
        );
        assert_eq!(messages(&app)[0], "INFO  click group: Line1");
    }

    #[test]
    fn clear_and_alarm() {
        let mut app = app();
        app.press(ctrl('l')).unwrap();
        assert_eq!(messages(&app), vec!["SYS   events cleared (Ctrl+L)"]);

        app.press(ctrl('k')).unwrap();
        assert_eq!(messages(&app)[0], "ALARM OverTemp (fake) (Ctrl+K)");
        assert!(app.dialog.is_some());

        // The warning box swallows keys until dismissed.
        app.press(key(KeyCode::Char('q'))).unwrap();
        assert!(app.running);
        app.press(key(KeyCode::Enter)).unwrap();
        assert!(app.dialog.is_none());
    }

    #[test]
    fn dialogs_relay_values_and_ignore_cancel() {
        let mut app = app();
        app.press(ctrl('s')).unwrap();
        app.press(key(KeyCode::Enter)).unwrap();
        assert_eq!(messages(&app)[0], "INFO  save file: output.txt");

        let before = app.session().log().len();
        app.press(ctrl('o')).unwrap();
        app.press(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.session().log().len(), before);

        app.dispatch(Action::DialogResolved {
            kind: PassThrough::Color,
            value: Some("#ff6363".into()),
        })
        .unwrap();
        assert_eq!(messages(&app)[0], "INFO  color: #ff6363");
    }

    #[test]
    fn quick_tab_and_detail_back() {
        let mut app = app();
        app.press(key(KeyCode::Char(']'))).unwrap();
        app.press(key(KeyCode::Char('j'))).unwrap();
        app.press(key(KeyCode::Enter)).unwrap();
        assert_eq!(messages(&app)[0], "INFO  user clicked Add INFO");

        app.press(key(KeyCode::Char('k'))).unwrap();
        app.press(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.session().selection().current_page(), Page::Detail);

        app.press(key(KeyCode::Char('w'))).unwrap();
        assert_eq!(messages(&app)[0], "INFO  save params (fake)");

        app.press(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.session().selection().current_page(), Page::Overview);
    }

    #[test]
    fn editing_field_captures_global_keys() {
        let mut app = app();
        app.press(key(KeyCode::Char('2'))).unwrap();
        app.press(key(KeyCode::Enter)).unwrap();
        app.press(key(KeyCode::Char('q'))).unwrap();
        assert!(app.running);
        app.press(key(KeyCode::Esc)).unwrap();
        app.press(key(KeyCode::Char('q'))).unwrap();
        assert!(!app.running);
    }

    #[test]
    fn clear_and_alarm_fire_while_editing() {
        let mut app = app();
        app.press(key(KeyCode::Char('2'))).unwrap();
        app.press(key(KeyCode::Enter)).unwrap();

        app.press(ctrl('l')).unwrap();
        assert_eq!(messages(&app), vec!["SYS   events cleared (Ctrl+L)"]);

        app.press(ctrl('k')).unwrap();
        assert_eq!(messages(&app)[0], "ALARM OverTemp (fake) (Ctrl+K)");
        app.press(key(KeyCode::Enter)).unwrap();
        assert!(app.dialog.is_none());

        // Still editing: plain letters go into the field.
        app.press(key(KeyCode::Char('x'))).unwrap();
        app.press(key(KeyCode::Esc)).unwrap();
        let text = screen_text(&app);
        assert!(text.contains("DeviceAx"));
        assert!(!text.contains("DeviceAl"));
    }

    #[test]
    fn mirrors_follow_threshold_changes() {
        let mut app = app();
        app.dispatch(Action::SetThreshold(85)).unwrap();

        let buffer = render_buffer(&app);
        let text = screen_text(&app);
        assert!(text.contains("Threshold: 85"));
        assert!(text.contains("85%"));
        for row in lcd_rows(85) {
            assert!(text.contains(row.as_str()), "missing LCD row {row:?}");
        }
        assert!(!text.contains("Threshold: 30"));

        let (x, y) = find_text(&buffer, "Threshold: 85").unwrap();
        let cell = &buffer[(x, y)];
        assert_eq!(cell.fg, theme::ERROR_RED);
        assert!(cell.modifier.contains(Modifier::BOLD));

        app.dispatch(Action::SetThreshold(80)).unwrap();
        let buffer = render_buffer(&app);
        let (x, y) = find_text(&buffer, "Threshold: 80").unwrap();
        let cell = &buffer[(x, y)];
        assert_eq!(cell.fg, theme::DIM_WHITE);
        assert!(!cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn log_never_exceeds_capacity() {
        let mut app = app();
        for i in 0..320 {
            app.dispatch(Action::Append(Severity::Info, format!("n{i}"))).unwrap();
        }
        assert_eq!(app.session().log().len(), 300);
        assert_eq!(messages(&app)[0], "INFO  n319");
    }

    #[test]
    fn renders_all_panes() {
        let app = app();
        let text = screen_text(&app);
        assert!(text.contains("Overview - Line1 / DeviceA"));
        assert!(text.contains("Threshold: 30"));
        assert!(text.contains("Events / Alarms (3)"));
        assert!(text.contains("Boot OK"));
        assert!(text.contains("DeviceC"));
        assert!(text.contains("1 Overview"));
    }

    #[test]
    fn renders_detail_page() {
        let mut app = app();
        app.dispatch(Action::SelectDevice {
            group: "Line2".into(),
            device: "DeviceC".into(),
        })
        .unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Device Detail - Line2 / DeviceC"));
        assert!(text.contains("192.168.1.10"));
    }

    #[test]
    fn help_overlay_toggles() {
        let mut app = app();
        app.press(key(KeyCode::Char('?'))).unwrap();
        assert!(screen_text(&app).contains("Keyboard Shortcuts"));
        app.press(key(KeyCode::Esc)).unwrap();
        assert!(!app.help_visible);
    }
}
