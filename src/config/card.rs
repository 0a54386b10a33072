//! Typed model of the weather card configuration
//!
//! Every field is optional: the dashboard only stores keys the user has
//! actually set, and the card substitutes display defaults for the rest.
//! Keys this editor does not know about are captured in `extra` maps and
//! written back verbatim, so editing never strips another tool's settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::common::constants;

/// Weather card configuration as persisted by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Weather entity backing the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// Card title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Directory the card loads custom condition icons from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<String>,

    // Card section toggles; unset means shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_main: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_attributes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_humidity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_pressure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_wind_direction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_wind_speed: Option<bool>,

    // Alternate sensor entities overriding the weather entity's attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humid: Option<String>,

    /// Forecast row settings, absent until first edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<ForecastConfig>,

    /// Display unit settings, absent until first edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitsConfig>,

    /// Keys the editor does not know about, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Forecast section of the card configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels_font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_wind_forecast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_icons: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Units section of the card configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CardConfig {
    /// Default location of the card configuration file
    pub fn default_path() -> PathBuf {
        #[cfg(not(test))]
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));

        // Use temp directory for tests to avoid touching the real config
        #[cfg(test)]
        let mut path = std::env::temp_dir().join("weather-card-editor-test");

        path.push(constants::config::APP_DIR);
        path.push(constants::config::FILENAME);
        path
    }

    /// Load the card configuration from `path`.
    ///
    /// Creates and saves a default (empty) configuration when the file does
    /// not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let config = CardConfig::default();
            config.save(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: CardConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON config from {:?}", path))?;

        debug!("Loaded card config from {:?}", path);
        Ok(config)
    }

    /// Save the card configuration to `path` as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;

        debug!("Saved card config to {:?}", path);
        Ok(())
    }

    // Display accessors: what the card would show for each field, with the
    // documented defaults substituted when the key is unset.

    pub fn entity(&self) -> &str {
        self.entity.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn icons(&self) -> &str {
        self.icons.as_deref().unwrap_or_default()
    }

    pub fn temp(&self) -> &str {
        self.temp.as_deref().unwrap_or_default()
    }

    pub fn press(&self) -> &str {
        self.press.as_deref().unwrap_or_default()
    }

    pub fn humid(&self) -> &str {
        self.humid.as_deref().unwrap_or_default()
    }

    pub fn show_main(&self) -> bool {
        self.show_main.unwrap_or(true)
    }

    pub fn show_attributes(&self) -> bool {
        self.show_attributes.unwrap_or(true)
    }

    pub fn show_humidity(&self) -> bool {
        self.show_humidity.unwrap_or(true)
    }

    pub fn show_pressure(&self) -> bool {
        self.show_pressure.unwrap_or(true)
    }

    pub fn show_wind_direction(&self) -> bool {
        self.show_wind_direction.unwrap_or(true)
    }

    pub fn show_wind_speed(&self) -> bool {
        self.show_wind_speed.unwrap_or(true)
    }

    /// Forecast section, or its defaults when the section is absent
    pub fn forecast(&self) -> ForecastConfig {
        self.forecast.clone().unwrap_or_default()
    }

    /// Units section, or its defaults when the section is absent
    pub fn units(&self) -> UnitsConfig {
        self.units.clone().unwrap_or_default()
    }
}

impl ForecastConfig {
    pub fn labels_font_size(&self) -> &str {
        self.labels_font_size
            .as_deref()
            .unwrap_or(constants::defaults::forecast::LABELS_FONT_SIZE)
    }

    pub fn show_wind_forecast(&self) -> bool {
        self.show_wind_forecast.unwrap_or(true)
    }

    pub fn condition_icons(&self) -> bool {
        self.condition_icons.unwrap_or(true)
    }
}

impl UnitsConfig {
    pub fn pressure(&self) -> &str {
        self.pressure
            .as_deref()
            .unwrap_or(constants::defaults::units::PRESSURE)
    }

    pub fn speed(&self) -> &str {
        self.speed
            .as_deref()
            .unwrap_or(constants::defaults::units::SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_to_empty_object() {
        let config = CardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_unset_fields_use_display_defaults() {
        let config = CardConfig::default();

        assert_eq!(config.entity(), "");
        assert_eq!(config.title(), "");
        assert!(config.show_main());
        assert!(config.show_wind_speed());
        assert_eq!(config.forecast().labels_font_size(), "11");
        assert!(config.forecast().condition_icons());
        assert_eq!(config.units().pressure(), "hPa");
        assert_eq!(config.units().speed(), "km/h");
    }

    #[test]
    fn test_explicit_false_overrides_toggle_default() {
        let config: CardConfig = serde_json::from_str(r#"{"show_main": false}"#).unwrap();

        assert!(!config.show_main());
        assert!(config.show_humidity());
    }

    #[test]
    fn test_set_values_override_text_defaults() {
        let json = r#"{
            "entity": "weather.home",
            "units": { "pressure": "mbar" },
            "forecast": { "labels_font_size": "14" }
        }"#;
        let config: CardConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.entity(), "weather.home");
        assert_eq!(config.units().pressure(), "mbar");
        assert_eq!(config.units().speed(), "km/h");
        assert_eq!(config.forecast().labels_font_size(), "14");
    }

    #[test]
    fn test_unknown_keys_roundtrip() {
        let json = r#"{
            "entity": "weather.home",
            "type": "custom:weather-card",
            "forecast": { "rows": 5 }
        }"#;
        let config: CardConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.extra.get("type"),
            Some(&Value::String("custom:weather-card".to_string()))
        );

        let value: Value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "custom:weather-card");
        assert_eq!(value["forecast"]["rows"], 5);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather-card.json");

        let config: CardConfig =
            serde_json::from_str(r#"{"entity": "weather.home", "show_pressure": false}"#).unwrap();
        config.save(&path).unwrap();

        let loaded = CardConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("weather-card.json");

        let config = CardConfig::load(&path).unwrap();

        assert_eq!(config, CardConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather-card.json");
        fs::write(&path, "not json").unwrap();

        assert!(CardConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_path_ends_with_app_dir_and_filename() {
        let path = CardConfig::default_path();
        assert!(path.ends_with("weather-card-editor/weather-card.json"));
    }
}
