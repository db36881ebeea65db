//! Page identifiers for the stacked centre area, and pane focus order.

use linewatch_core::Page;

/// Identifies each stacked page, navigable by number keys 1-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Overview, // 1
    Detail, // 2
}

impl ScreenId {
    /// All pages in tab-bar order.
    pub const ALL: [ScreenId; 2] = [Self::Overview, Self::Detail];

    /// Numeric key for this page.
    pub fn number(self) -> u8 {
        match self {
            Self::Overview => 1,
            Self::Detail => 2,
        }
    }

    /// Page from a numeric key. Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Overview),
            2 => Some(Self::Detail),
            _ => None,
        }
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Detail => "Device Detail",
        }
    }

    pub fn page(self) -> Page {
        match self {
            Self::Overview => Page::Overview,
            Self::Detail => Page::Detail,
        }
    }
}

impl From<Page> for ScreenId {
    fn from(page: Page) -> Self {
        match page {
            Page::Overview => Self::Overview,
            Page::Detail => Self::Detail,
        }
    }
}

/// The three panes that can hold keyboard focus, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    Tree,
    #[default]
    Page,
    Events,
}

impl Focus {
    pub const ALL: [Focus; 3] = [Self::Tree, Self::Page, Self::Events];

    /// Next pane (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous pane (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
