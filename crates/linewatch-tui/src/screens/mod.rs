//! Panes and stacked pages. Each is a top-level Component.

pub mod detail;
pub mod events;
pub mod overview;
pub mod tree;

use std::collections::HashMap;

use linewatch_core::Session;

use crate::component::Component;
use crate::screen::ScreenId;

/// Build both stacked pages.
pub fn create_screens(session: &Session, device_ip: &str) -> HashMap<ScreenId, Box<dyn Component>> {
    let mut screens: HashMap<ScreenId, Box<dyn Component>> = HashMap::new();
    screens.insert(ScreenId::Overview, Box::new(overview::OverviewScreen::new()));
    screens.insert(
        ScreenId::Detail,
        Box::new(detail::DetailScreen::new(session, device_ip)),
    );
    screens
}
