// ── Numeric keypad model ──
//
// A fixed grid of labelled keys with a cursor. Pressing any key goes through
// one handler that receives the key's label.

/// A key and its grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub row: usize,
    pub col: usize,
}

const fn key(label: &'static str, row: usize, col: usize) -> Key {
    Key { label, row, col }
}

/// The twelve-key panel. Row 3 only has `0` in the middle column; row 4
/// has `+` and `-` at the edges.
pub const LAYOUT: [Key; 12] = [
    key("1", 0, 0),
    key("2", 0, 1),
    key("3", 0, 2),
    key("4", 1, 0),
    key("5", 1, 1),
    key("6", 1, 2),
    key("7", 2, 0),
    key("8", 2, 1),
    key("9", 2, 2),
    key("0", 3, 1),
    key("+", 4, 0),
    key("-", 4, 2),
];

/// Cursor movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Keypad {
    keys: &'static [Key],
    cursor: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            keys: &LAYOUT,
            cursor: 0,
        }
    }

    pub fn keys(&self) -> &[Key] {
        self.keys
    }

    pub fn rows(&self) -> usize {
        self.keys.iter().map(|k| k.row + 1).max().unwrap_or(0)
    }

    pub fn cols(&self) -> usize {
        self.keys.iter().map(|k| k.col + 1).max().unwrap_or(0)
    }

    pub fn key_at(&self, row: usize, col: usize) -> Option<&Key> {
        self.keys.iter().find(|k| k.row == row && k.col == col)
    }

    pub fn find(&self, label: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.label == label)
    }

    pub fn selected(&self) -> Option<&Key> {
        self.keys.get(self.cursor)
    }

    /// Move to the nearest occupied cell in `direction`. Stays put at edges.
    ///
    /// Vertical moves prefer the same column, then the closest column on
    /// the nearest row that has any key; horizontal moves stay on the row.
    pub fn move_cursor(&mut self, direction: Direction) {
        let Some(current) = self.selected().copied() else {
            return;
        };

        let target = match direction {
            Direction::Left => self
                .keys
                .iter()
                .filter(|k| k.row == current.row && k.col < current.col)
                .max_by_key(|k| k.col),
            Direction::Right => self
                .keys
                .iter()
                .filter(|k| k.row == current.row && k.col > current.col)
                .min_by_key(|k| k.col),
            Direction::Up => self.nearest_on_row((0..current.row).rev(), current.col),
            Direction::Down => self.nearest_on_row(current.row + 1..self.rows(), current.col),
        };

        if let Some(target) = target {
            if let Some(idx) = self.keys.iter().position(|k| k == target) {
                self.cursor = idx;
            }
        }
    }

    /// Point the cursor at `label` if such a key exists.
    pub fn select(&mut self, label: &str) -> bool {
        match self.keys.iter().position(|k| k.label == label) {
            Some(idx) => {
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    /// The single press handler: returns the label that was pressed, or
    /// `None` for a label that is not on the panel.
    pub fn press(&mut self, label: &str) -> Option<&'static str> {
        if self.select(label) {
            self.selected().map(|k| k.label)
        } else {
            None
        }
    }

    /// Press whatever key the cursor is on.
    pub fn press_selected(&self) -> Option<&'static str> {
        self.selected().map(|k| k.label)
    }

    fn nearest_on_row(&self, rows: impl Iterator<Item = usize>, col: usize) -> Option<&Key> {
        for row in rows {
            let best = self
                .keys
                .iter()
                .filter(|k| k.row == row)
                .min_by_key(|k| k.col.abs_diff(col));
            if best.is_some() {
                return best;
            }
        }
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn layout_dimensions() {
        let pad = Keypad::new();
        assert_eq!(pad.keys().len(), 12);
        assert_eq!(pad.rows(), 5);
        assert_eq!(pad.cols(), 3);
        assert_eq!(pad.key_at(3, 1).unwrap().label, "0");
        assert!(pad.key_at(3, 0).is_none());
        assert_eq!(pad.find("-").unwrap().col, 2);
    }

    #[test]
    fn press_returns_label() {
        let mut pad = Keypad::new();
        assert_eq!(pad.press("7"), Some("7"));
        assert_eq!(pad.selected().unwrap().label, "7");
        assert_eq!(pad.press("+"), Some("+"));
        assert_eq!(pad.press("*"), None);
        assert_eq!(pad.selected().unwrap().label, "+");
    }

    #[test]
    fn horizontal_moves_stay_on_row() {
        let mut pad = Keypad::new();
        pad.move_cursor(Direction::Right);
        pad.move_cursor(Direction::Right);
        assert_eq!(pad.press_selected(), Some("3"));
        pad.move_cursor(Direction::Right);
        assert_eq!(pad.press_selected(), Some("3"));
        pad.move_cursor(Direction::Left);
        assert_eq!(pad.press_selected(), Some("2"));
    }

    #[test]
    fn vertical_moves_snap_to_nearest_key() {
        let mut pad = Keypad::new();
        pad.select("7");
        pad.move_cursor(Direction::Down);
        assert_eq!(pad.press_selected(), Some("0"));
        pad.move_cursor(Direction::Down);
        // "+" and "-" are equidistant; the leftmost wins.
        assert_eq!(pad.press_selected(), Some("+"));
        pad.move_cursor(Direction::Down);
        assert_eq!(pad.press_selected(), Some("+"));

        pad.select("-");
        pad.move_cursor(Direction::Up);
        assert_eq!(pad.press_selected(), Some("0"));
        pad.move_cursor(Direction::Up);
        assert_eq!(pad.press_selected(), Some("8"));
    }

    #[test]
    fn zero_row_has_no_horizontal_neighbours() {
        let mut pad = Keypad::new();
        pad.select("0");
        pad.move_cursor(Direction::Left);
        assert_eq!(pad.press_selected(), Some("0"));
        pad.move_cursor(Direction::Right);
        assert_eq!(pad.press_selected(), Some("0"));
    }
}
