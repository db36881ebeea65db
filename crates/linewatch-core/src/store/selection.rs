// ── Selected device and visible page ──

use tracing::debug;

use crate::model::Page;

/// What a tree selection did, plus the INFO line the caller should record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    pub page: Page,
    pub notice: String,
}

/// Currently selected device path and the page being shown.
///
/// Two states, `Overview` and `Detail`. Group picks go to `Overview`,
/// device picks go to `Detail`, `set_page` jumps directly. There is no
/// terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_path: String,
    current_page: Page,
}

impl SelectionState {
    pub fn new(default_path: impl Into<String>) -> Self {
        Self {
            selected_path: default_path.into(),
            current_page: Page::Overview,
        }
    }

    /// A group node was picked. The device selection is left alone.
    pub fn select_group(&mut self, group: &str) -> SelectionEvent {
        debug!(group, "group selected");
        self.current_page = Page::Overview;
        SelectionEvent {
            page: self.current_page,
            notice: format!("click group: {group}"),
        }
    }

    /// A device node was picked: remember it and show its detail page.
    pub fn select_device(&mut self, group: &str, device: &str) -> SelectionEvent {
        debug!(group, device, "device selected");
        self.selected_path = format!("{group} / {device}");
        self.current_page = Page::Detail;
        SelectionEvent {
            page: self.current_page,
            notice: format!("select device: {group}/{device}"),
        }
    }

    /// Direct navigation. Does not touch the selected path.
    pub fn set_page(&mut self, page: Page) -> Page {
        self.current_page = page;
        page
    }

    pub fn current_selection(&self) -> (&str, Page) {
        (&self.selected_path, self.current_page)
    }

    pub fn selected_path(&self) -> &str {
        &self.selected_path
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    /// Last `/` segment of the path, trimmed: `"Line1 / DeviceA"` → `"DeviceA"`.
    pub fn device_name(&self) -> &str {
        self.selected_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview_with_default_path() {
        let state = SelectionState::new("Line1 / DeviceA");
        assert_eq!(state.current_selection(), ("Line1 / DeviceA", Page::Overview));
    }

    #[test]
    fn select_device_composes_path_and_shows_detail() {
        let mut state = SelectionState::new("Line2 / DeviceC");
        let event = state.select_device("Line1", "DeviceA");

        assert_eq!(event.page, Page::Detail);
        assert_eq!(event.notice, "select device: Line1/DeviceA");
        assert_eq!(state.selected_path(), "Line1 / DeviceA");
        assert_eq!(state.current_page(), Page::Detail);
    }

    #[test]
    fn select_group_keeps_device_and_shows_overview() {
        let mut state = SelectionState::new("Line1 / DeviceA");
        state.select_device("Line2", "DeviceB");
        let event = state.select_group("Line1");

        assert_eq!(event.page, Page::Overview);
        assert_eq!(event.notice, "click group: Line1");
        assert_eq!(state.selected_path(), "Line2 / DeviceB");
    }

    #[test]
    fn group_on_overview_is_a_self_loop() {
        let mut state = SelectionState::new("Line1 / DeviceA");
        state.select_group("Line1");
        state.select_group("Line2");
        assert_eq!(state.current_page(), Page::Overview);
    }

    #[test]
    fn set_page_is_direct_and_keeps_path() {
        let mut state = SelectionState::new("Line1 / DeviceA");
        assert_eq!(state.set_page(Page::Detail), Page::Detail);
        assert_eq!(state.current_selection(), ("Line1 / DeviceA", Page::Detail));
        assert_eq!(state.set_page(Page::Overview), Page::Overview);
        assert_eq!(state.set_page(Page::Overview), Page::Overview);
    }

    #[test]
    fn device_name_is_last_segment() {
        let mut state = SelectionState::new("Line1 / DeviceA");
        assert_eq!(state.device_name(), "DeviceA");
        state.select_device("Line2", "DeviceC");
        assert_eq!(state.device_name(), "DeviceC");

        let bare = SelectionState::new("Standalone");
        assert_eq!(bare.device_name(), "Standalone");
    }
}
