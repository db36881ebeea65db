//! SilkCircuit Neon palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use linewatch_core::Severity;

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const CORAL: Color = Color::Rgb(255, 106, 193); // #ff6ac1
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

/// Named colours offered by the colour picker, as `(name, hex)`.
pub const PICKER_COLORS: &[(&str, &str)] = &[
    ("Electric Purple", "#e135ff"),
    ("Neon Cyan", "#80ffea"),
    ("Coral", "#ff6ac1"),
    ("Electric Yellow", "#f1fa8c"),
    ("Success Green", "#50fa7b"),
    ("Error Red", "#ff6363"),
    ("Light Blue", "#8be9fd"),
];

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Large page heading ("Overview - …", "Device Detail - …").
pub fn heading() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(NEON_CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Push button, optionally under the cursor.
pub fn button(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(BG_DARK)
            .bg(ELECTRIC_PURPLE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(NEON_CYAN).bg(BG_HIGHLIGHT)
    }
}

/// Threshold label: bold alert colour above the alert level, plain otherwise.
pub fn threshold_label(alert: bool) -> Style {
    if alert {
        Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM_WHITE)
    }
}

/// Colour for a log line's severity tag.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => NEON_CYAN,
        Severity::Warn => ELECTRIC_YELLOW,
        Severity::Alarm => ERROR_RED,
        Severity::Sys => ELECTRIC_PURPLE,
    }
}

/// Colour for a tree status column ("OK" is green, anything else is a fault).
pub fn status_color(status: &str) -> Color {
    if status.eq_ignore_ascii_case("ok") {
        SUCCESS_GREEN
    } else {
        ERROR_RED
    }
}
