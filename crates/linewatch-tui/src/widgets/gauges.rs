//! Text renderings of the threshold mirrors that ratatui has no widget for:
//! a three-digit seven-segment LCD and a 270° dial.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme;

/// Seven-segment glyphs, three rows per digit. Index 10 is a blank cell.
const SEGMENTS: [[&str; 3]; 11] = [
    [" _ ", "| |", "|_|"],
    ["   ", "  |", "  |"],
    [" _ ", " _|", "|_ "],
    [" _ ", " _|", " _|"],
    ["   ", "|_|", "  |"],
    [" _ ", "|_ ", " _|"],
    [" _ ", "|_ ", "|_|"],
    [" _ ", "  |", "  |"],
    [" _ ", "|_|", "|_|"],
    [" _ ", "|_|", " _|"],
    ["   ", "   ", "   "],
];

/// Number of digit cells the LCD shows.
pub const LCD_DIGITS: usize = 3;

/// Needle glyphs from the 0 end of the dial (lower left) to the 100 end
/// (lower right).
const NEEDLES: [&str; 7] = ["↙", "←", "↖", "↑", "↗", "→", "↘"];

/// The three text rows of the LCD, right-aligned with blank leading cells.
pub fn lcd_rows(value: u8) -> [String; 3] {
    let text = format!("{value:>width$}", width = LCD_DIGITS);
    let cells: Vec<usize> = text
        .chars()
        .map(|c| c.to_digit(10).and_then(|d| usize::try_from(d).ok()).unwrap_or(10))
        .collect();

    let mut rows: [String; 3] = Default::default();
    for (r, row) in rows.iter_mut().enumerate() {
        for &cell in &cells {
            row.push_str(SEGMENTS[cell][r]);
        }
    }
    rows
}

pub fn lcd_lines(value: u8) -> Vec<Line<'static>> {
    let style = Style::default().fg(theme::SUCCESS_GREEN);
    lcd_rows(value)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

/// Needle glyph for `value` on a 270° sweep.
pub fn dial_needle(value: u8) -> &'static str {
    let steps = NEEDLES.len() - 1;
    let idx = (usize::from(value.min(100)) * steps + 50) / 100;
    NEEDLES[idx.min(steps)]
}

/// Three-row dial face with the needle in the middle.
pub fn dial_lines(value: u8) -> Vec<Line<'static>> {
    let face = Style::default().fg(theme::BORDER_GRAY);
    let needle = Style::default().fg(theme::CORAL);
    vec![
        Line::from(Span::styled("╭───╮", face)),
        Line::from(vec![
            Span::styled("│ ", face),
            Span::styled(dial_needle(value), needle),
            Span::styled(" │", face),
        ]),
        Line::from(Span::styled("╰───╯", face)),
    ]
}
