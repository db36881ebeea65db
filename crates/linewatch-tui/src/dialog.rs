//! Modal dialogs: path prompts, colour/font pickers, and message boxes.
//!
//! A dialog is one synchronous question. Pickers and prompts resolve to
//! `Some(value)` or `None` (cancelled); message boxes just close.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tui_input::{Input, InputRequest};

use linewatch_core::PassThrough;

use crate::action::DialogKind;
use crate::theme;
use crate::widgets::form;

/// Font families offered by the font picker.
pub const FONT_FAMILIES: &[&str] = &[
    "Fira Code",
    "JetBrains Mono",
    "Iosevka",
    "Cascadia Code",
    "Source Code Pro",
    "Hack",
];

/// Prefilled name in the save prompt.
pub const DEFAULT_SAVE_NAME: &str = "output.txt";

const ABOUT_TEXT: &[&str] = &[
    "linewatch monitor demo",
    "- Tree / Events dock / Stacked pages / Tabs",
    "- Slider / Dial / Progress / LCD",
    "- Scrolling parameter list",
    "- File / Color / Font dialogs",
    "- Ctrl+L clear events, Ctrl+K alarm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// What a key press did to the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open.
    Pending,
    /// A pass-through dialog closed; `None` means cancelled.
    Resolved {
        kind: PassThrough,
        value: Option<String>,
    },
    /// A message box was acknowledged.
    Dismissed,
}

#[derive(Debug, Clone)]
pub enum Dialog {
    Prompt {
        kind: PassThrough,
        title: &'static str,
        input: Input,
    },
    Choice {
        kind: PassThrough,
        title: &'static str,
        /// `(shown label, value relayed to the log)`
        options: Vec<(String, String)>,
        selected: usize,
    },
    Message {
        title: &'static str,
        lines: Vec<String>,
        level: MessageLevel,
    },
}

impl Dialog {
    pub fn open(kind: DialogKind) -> Self {
        match kind {
            DialogKind::OpenFile => Self::Prompt {
                kind: PassThrough::OpenFile,
                title: " Open File ",
                input: Input::default(),
            },
            DialogKind::SaveFile => Self::Prompt {
                kind: PassThrough::SaveFile,
                title: " Save File ",
                input: Input::new(DEFAULT_SAVE_NAME.into()),
            },
            DialogKind::Color => Self::Choice {
                kind: PassThrough::Color,
                title: " Select Color ",
                options: theme::PICKER_COLORS
                    .iter()
                    .map(|(name, hex)| ((*name).to_owned(), (*hex).to_owned()))
                    .collect(),
                selected: 0,
            },
            DialogKind::Font => Self::Choice {
                kind: PassThrough::Font,
                title: " Select Font ",
                options: FONT_FAMILIES
                    .iter()
                    .map(|f| ((*f).to_owned(), (*f).to_owned()))
                    .collect(),
                selected: 0,
            },
            DialogKind::About => Self::Message {
                title: " About ",
                lines: ABOUT_TEXT.iter().map(|l| (*l).to_owned()).collect(),
                level: MessageLevel::Info,
            },
        }
    }

    /// Warning box shown after an alarm is raised.
    pub fn alarm() -> Self {
        Self::Message {
            title: " Alarm ",
            lines: vec!["OverTemp (fake)".into()],
            level: MessageLevel::Warning,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> DialogOutcome {
        match self {
            Self::Prompt { kind, input, .. } => match key.code {
                KeyCode::Esc => cancelled(*kind),
                KeyCode::Enter => DialogOutcome::Resolved {
                    kind: *kind,
                    value: Some(input.value().to_owned()),
                },
                _ => {
                    edit_input(input, key);
                    DialogOutcome::Pending
                }
            },
            Self::Choice {
                kind,
                options,
                selected,
                ..
            } => match key.code {
                KeyCode::Esc => cancelled(*kind),
                KeyCode::Enter => DialogOutcome::Resolved {
                    kind: *kind,
                    value: options.get(*selected).map(|(_, value)| value.clone()),
                },
                KeyCode::Char('j') | KeyCode::Down => {
                    *selected = (*selected + 1).min(options.len().saturating_sub(1));
                    DialogOutcome::Pending
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    DialogOutcome::Pending
                }
                _ => DialogOutcome::Pending,
            },
            Self::Message { .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => DialogOutcome::Dismissed,
                _ => DialogOutcome::Pending,
            },
        }
    }

    /// Render centered over `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (title, border, body, height) = match self {
            Self::Prompt { input, title, .. } => {
                let body = vec![
                    Line::from(""),
                    form::input_row("Path", input, true, true),
                    Line::from(""),
                    hint_line(&[("Enter", "accept"), ("Esc", "cancel")]),
                ];
                (*title, theme::NEON_CYAN, body, 6)
            }
            Self::Choice {
                title,
                options,
                selected,
                kind,
            } => {
                let mut body = vec![Line::from("")];
                body.extend(options.iter().enumerate().map(|(i, (label, value))| {
                    let style = if i == *selected {
                        theme::table_selected()
                    } else {
                        theme::table_row()
                    };
                    let swatch = match kind {
                        PassThrough::Color => Span::styled(
                            "██ ",
                            Style::default().fg(value.parse().unwrap_or(theme::DIM_WHITE)),
                        ),
                        _ => Span::raw("   "),
                    };
                    Line::from(vec![
                        Span::raw("  "),
                        swatch,
                        Span::styled(format!("{label:<20}"), style),
                    ])
                }));
                body.push(Line::from(""));
                body.push(hint_line(&[("j/k", "move"), ("Enter", "pick"), ("Esc", "cancel")]));
                let height = u16::try_from(body.len() + 2).unwrap_or(u16::MAX);
                (*title, theme::ELECTRIC_PURPLE, body, height)
            }
            Self::Message {
                title,
                lines,
                level,
            } => {
                let color = match level {
                    MessageLevel::Info => theme::NEON_CYAN,
                    MessageLevel::Warning => theme::ELECTRIC_YELLOW,
                };
                let mut body = vec![Line::from("")];
                body.extend(lines.iter().map(|l| {
                    Line::from(Span::styled(
                        format!("  {l}"),
                        Style::default().fg(theme::DIM_WHITE),
                    ))
                }));
                body.push(Line::from(""));
                body.push(hint_line(&[("Enter", "ok")]));
                let height = u16::try_from(body.len() + 2).unwrap_or(u16::MAX);
                (*title, color, body, height)
            }
        };

        let width = 56u16.min(area.width.saturating_sub(4));
        let height = height.min(area.height.saturating_sub(2));
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(area.x + x, area.y + y, width, height);

        frame.render_widget(Clear, dialog_area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            dialog_area,
        );

        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);
        frame.render_widget(Paragraph::new(body), inner);
    }
}

fn cancelled(kind: PassThrough) -> DialogOutcome {
    DialogOutcome::Resolved { kind, value: None }
}

/// Modified letters are shortcuts, never text.
fn input_request(key: KeyEvent) -> Option<InputRequest> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

/// Text-field key mapping shared with the detail page's form.
pub(crate) fn edit_input(input: &mut Input, key: KeyEvent) -> bool {
    input_request(key).is_some_and(|request| {
        input.handle(request);
        true
    })
}

fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (key, label) in hints {
        spans.push(Span::styled(format!("{key} "), theme::key_hint_key()));
        spans.push(Span::styled(format!("{label}  "), theme::key_hint()));
    }
    Line::from(spans)
}
