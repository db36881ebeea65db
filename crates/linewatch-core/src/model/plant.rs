// ── Plant topology and page identity ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which of the two stacked pages is visible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Overview,
    Detail,
}

/// A leaf node of the device tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    #[serde(default = "default_status")]
    pub status: String,
}

/// A top-level node of the device tree: a production line and its devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Device {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: default_status(),
        }
    }
}

impl Group {
    pub fn new<I, S>(name: impl Into<String>, devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            status: default_status(),
            devices: devices.into_iter().map(Device::new).collect(),
        }
    }
}

fn default_status() -> String {
    "OK".into()
}

/// Two lines with three placeholder devices each.
pub fn default_plant() -> Vec<Group> {
    ["Line1", "Line2"]
        .into_iter()
        .map(|line| Group::new(line, ["DeviceA", "DeviceB", "DeviceC"]))
        .collect()
}
