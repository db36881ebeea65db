//! Device tree pane: production lines with their devices and a status column.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use linewatch_core::{Group, Session};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

/// One visible row of the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Group(usize),
    Device(usize, usize),
}

pub struct DeviceTree {
    focused: bool,
    groups: Vec<Group>,
    expanded: Vec<bool>,
    cursor: usize,
}

impl DeviceTree {
    pub fn new(groups: Vec<Group>) -> Self {
        let expanded = vec![true; groups.len()];
        Self {
            focused: false,
            groups,
            expanded,
            cursor: 0,
        }
    }

    fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (gi, group) in self.groups.iter().enumerate() {
            rows.push(Row::Group(gi));
            if self.expanded[gi] {
                rows.extend((0..group.devices.len()).map(|di| Row::Device(gi, di)));
            }
        }
        rows
    }

    fn current(&self) -> Option<Row> {
        self.rows().get(self.cursor).copied()
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn set_expanded(&mut self, open: bool) {
        let Some(row) = self.current() else {
            return;
        };
        let gi = match row {
            Row::Group(gi) | Row::Device(gi, _) => gi,
        };
        self.expanded[gi] = open;
        if !open {
            // Park the cursor on the collapsed group.
            self.cursor = self
                .rows()
                .iter()
                .position(|r| *r == Row::Group(gi))
                .unwrap_or(0);
        }
    }

    fn activate(&self) -> Option<Action> {
        match self.current()? {
            Row::Group(gi) => Some(Action::SelectGroup(self.groups[gi].name.clone())),
            Row::Device(gi, di) => Some(Action::SelectDevice {
                group: self.groups[gi].name.clone(),
                device: self.groups[gi].devices[di].name.clone(),
            }),
        }
    }
}

impl Component for DeviceTree {
    fn handle_key_event(&mut self, key: KeyEvent, _session: &Session) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Char('h') | KeyCode::Left => self.set_expanded(false),
            KeyCode::Char('l') | KeyCode::Right => self.set_expanded(true),
            KeyCode::Enter | KeyCode::Char(' ') => return Ok(self.activate()),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let block = Block::default()
            .title(" Devices ")
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

        let selected_path = session.selection().selected_path();
        let name_width = (inner.width as usize).saturating_sub(8).max(4);

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("  {:<name_width$}", "Item"), theme::table_header()),
            Span::styled("Status", theme::table_header()),
        ])];

        for (i, row) in self.rows().into_iter().enumerate() {
            let (label, status, is_selected_path) = match row {
                Row::Group(gi) => {
                    let group = &self.groups[gi];
                    let arrow = if self.expanded[gi] { "▾" } else { "▸" };
                    (format!("{arrow} {}", group.name), group.status.as_str(), false)
                }
                Row::Device(gi, di) => {
                    let group = &self.groups[gi];
                    let device = &group.devices[di];
                    let path = format!("{} / {}", group.name, device.name);
                    (
                        format!("    {}", device.name),
                        device.status.as_str(),
                        path == selected_path,
                    )
                }
            };

            let mut style = if self.focused && i == self.cursor {
                theme::table_selected()
            } else {
                theme::table_row()
            };
            if is_selected_path {
                style = style.fg(theme::NEON_CYAN).add_modifier(Modifier::BOLD);
            }
            let cursor = if i == self.cursor { "›" } else { " " };

            lines.push(Line::from(vec![
                Span::styled(format!("{cursor} {label:<name_width$}"), style),
                Span::styled(
                    status.to_owned(),
                    Style::default().fg(theme::status_color(status)),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "Devices"
    }
}
