//! Shared configuration for the `linewatch` binaries: TOML file + env
//! layering, validation, and translation into a ready [`Session`].
//!
//! Precedence (last wins): built-in defaults → `config.toml` →
//! `LINEWATCH_*` environment variables (nested keys split on `__`, e.g.
//! `LINEWATCH_LOG__MAX_ITEMS=500`).

mod error;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use linewatch_core::{
    BoundedLog, Group, MAX_ITEMS, SelectionState, Session, ThresholdPolicy, ThresholdState,
    default_plant,
};
use linewatch_core::store::{ALERT_ABOVE, MAX_VALUE, WATCH_VALUES};

pub use error::ConfigError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogSettings,

    #[serde(default)]
    pub threshold: ThresholdSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub plant: PlantSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogSettings {
    /// Maximum number of lines kept in the events dock.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
        }
    }
}

fn default_max_items() -> usize {
    MAX_ITEMS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThresholdSettings {
    #[serde(default = "default_initial")]
    pub initial: i64,

    /// Values strictly above this are drawn as alerts.
    #[serde(default = "default_alert_above")]
    pub alert_above: u8,

    /// Values that log a WARN line on an exact hit.
    #[serde(default = "default_watch")]
    pub watch: Vec<u8>,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            alert_above: default_alert_above(),
            watch: default_watch(),
        }
    }
}

fn default_initial() -> i64 {
    30
}
fn default_alert_above() -> u8 {
    ALERT_ABOVE
}
fn default_watch() -> Vec<u8> {
    WATCH_VALUES.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Clock refresh period.
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,

    /// Frame period.
    #[serde(default = "default_render_interval_ms")]
    pub render_interval_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval_ms(),
            render_interval_ms: default_render_interval_ms(),
        }
    }
}

impl UiSettings {
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms)
    }
}

fn default_clock_interval_ms() -> u64 {
    1_000
}
fn default_render_interval_ms() -> u64 {
    33
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlantSettings {
    /// Path shown before the first tree pick, e.g. `"Line1 / DeviceA"`.
    #[serde(default = "default_selection")]
    pub default_selection: String,

    /// Placeholder shown in the detail page's IP field.
    #[serde(default = "default_device_ip")]
    pub device_ip: String,

    #[serde(default = "default_plant")]
    pub groups: Vec<Group>,
}

impl Default for PlantSettings {
    fn default() -> Self {
        Self {
            default_selection: default_selection(),
            device_ip: default_device_ip(),
            groups: default_plant(),
        }
    }
}

fn default_selection() -> String {
    "Line1 / DeviceA".into()
}
fn default_device_ip() -> String {
    "192.168.1.10".into()
}

// ── Validation and translation ───────────────────────────────────────

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.max_items == 0 {
            return Err(ConfigError::invalid("log.max_items", "must be at least 1"));
        }

        let max = i64::from(MAX_VALUE);
        if !(0..=max).contains(&self.threshold.initial) {
            return Err(ConfigError::invalid(
                "threshold.initial",
                format!("{} is outside 0..={max}", self.threshold.initial),
            ));
        }
        if self.threshold.alert_above > MAX_VALUE {
            return Err(ConfigError::invalid(
                "threshold.alert_above",
                format!("{} is outside 0..={max}", self.threshold.alert_above),
            ));
        }
        if let Some(bad) = self.threshold.watch.iter().find(|v| **v > MAX_VALUE) {
            return Err(ConfigError::invalid(
                "threshold.watch",
                format!("{bad} is outside 0..={max}"),
            ));
        }

        if self.ui.clock_interval_ms == 0 {
            return Err(ConfigError::invalid("ui.clock_interval_ms", "must be positive"));
        }
        if self.ui.render_interval_ms == 0 {
            return Err(ConfigError::invalid("ui.render_interval_ms", "must be positive"));
        }

        let mut seen = HashSet::new();
        for group in &self.plant.groups {
            if group.name.trim().is_empty() {
                return Err(ConfigError::invalid("plant.groups", "group name is empty"));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(ConfigError::invalid(
                    "plant.groups",
                    format!("duplicate group '{}'", group.name),
                ));
            }
            if group.devices.iter().any(|d| d.name.trim().is_empty()) {
                return Err(ConfigError::invalid(
                    "plant.groups",
                    format!("group '{}' has a device with an empty name", group.name),
                ));
            }
        }

        Ok(())
    }

    pub fn threshold_policy(&self) -> ThresholdPolicy {
        ThresholdPolicy {
            alert_above: self.threshold.alert_above,
            watch_values: self.threshold.watch.clone(),
        }
    }

    /// Fresh state holders for one monitor session.
    pub fn build_session(&self) -> Session {
        Session::new(
            BoundedLog::with_max_items(self.log.max_items),
            ThresholdState::new(self.threshold.initial, self.threshold_policy()),
            SelectionState::new(self.plant.default_selection.clone()),
        )
    }

    /// Render as TOML, the same shape `load_config_from` reads.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "linewatch", "linewatch")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("linewatch");
            p.push("config.toml");
            p
        })
}

// ── Config loading ───────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LINEWATCH_").split("__"))
}

/// Load from the default path. A missing file yields the defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path, then validate.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let config: Config = figment_for(path).extract()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use linewatch_core::Page;
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.log.max_items, 300);
        assert_eq!(config.threshold.initial, 30);
        assert_eq!(config.threshold.watch, vec![50, 80, 90]);
        assert_eq!(config.ui.clock_interval(), Duration::from_secs(1));
        assert_eq!(config.plant.groups.len(), 2);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.plant, PlantSettings::default());
        assert_eq!(config.threshold, ThresholdSettings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_config(
            r#"
            [log]
            max_items = 25

            [threshold]
            initial = 60
            watch = [10, 20]

            [plant]
            default_selection = "Press / P1"

            [[plant.groups]]
            name = "Press"
            devices = [{ name = "P1" }, { name = "P2", status = "FAULT" }]
            "#,
        );

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.log.max_items, 25);
        assert_eq!(config.threshold.initial, 60);
        assert_eq!(config.threshold.alert_above, 80);
        assert_eq!(config.threshold.watch, vec![10, 20]);
        assert_eq!(config.plant.groups.len(), 1);
        assert_eq!(config.plant.groups[0].status, "OK");
        assert_eq!(config.plant.groups[0].devices[1].status, "FAULT");
        assert_eq!(config.plant.device_ip, "192.168.1.10");
    }

    #[test]
    fn build_session_applies_settings() {
        let mut config = Config::default();
        config.log.max_items = 2;
        config.threshold.initial = 45;
        config.threshold.watch = vec![45];

        let mut session = config.build_session();
        assert_eq!(session.threshold().current_value(), 45);
        assert_eq!(
            session.selection().current_selection(),
            ("Line1 / DeviceA", Page::Overview)
        );
        assert_eq!(session.log().max_items(), 2);

        let change = session.set_threshold(45);
        assert!(change.logged.is_some());
    }

    #[test]
    fn rejects_zero_capacity() {
        let file = write_config("[log]\nmax_items = 0\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation { ref field, .. } if field == "log.max_items"
        ));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let mut config = Config::default();
        config.threshold.initial = 101;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.threshold.watch = vec![50, 120];
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for `threshold.watch`: 120 is outside 0..=100"
        );
    }

    #[test]
    fn rejects_zero_intervals() {
        let mut config = Config::default();
        config.ui.render_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_and_empty_groups() {
        let mut config = Config::default();
        config.plant.groups.push(Group::new("Line1", ["DeviceZ"]));
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.plant.groups.push(Group::new("  ", Vec::<String>::new()));
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.plant.groups.push(Group::new("Line3", [""]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_load_error() {
        let file = write_config("[log\nmax_items = ");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn toml_rendering_reads_back() {
        let config = Config::default();
        let rendered = config.to_toml_string().unwrap();
        let file = write_config(&rendered);
        assert_eq!(load_config_from(file.path()).unwrap(), config);
    }
}
