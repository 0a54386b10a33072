//! The fields the editor can write
//!
//! The editor only ever touches a fixed set of dotted paths, so each one is
//! an enum variant and the value kind (text or toggle) is enforced at
//! compile time. `CardConfig::with_edit` is the single write path: it works
//! on a copy and creates the nested `forecast`/`units` sections the first
//! time one of their fields is set.

use super::card::{CardConfig, ForecastConfig, UnitsConfig};

/// Fields edited through a single-line text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Entity,
    Title,
    Icons,
    AltTemperature,
    AltPressure,
    AltHumidity,
    LabelsFontSize,
    PressureUnit,
    SpeedUnit,
}

/// Fields edited through a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleField {
    ShowMain,
    ShowAttributes,
    ShowHumidity,
    ShowPressure,
    ShowWindDirection,
    ShowWindSpeed,
    ShowWindForecast,
    ConditionIcons,
}

/// A single-field edit produced by one of the editor's controls
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Text(TextField, String),
    Toggle(ToggleField, bool),
}

impl TextField {
    /// Dotted configuration path of the field
    pub fn path(self) -> &'static str {
        match self {
            TextField::Entity => "entity",
            TextField::Title => "title",
            TextField::Icons => "icons",
            TextField::AltTemperature => "temp",
            TextField::AltPressure => "press",
            TextField::AltHumidity => "humid",
            TextField::LabelsFontSize => "forecast.labels_font_size",
            TextField::PressureUnit => "units.pressure",
            TextField::SpeedUnit => "units.speed",
        }
    }
}

impl ToggleField {
    /// Dotted configuration path of the field
    pub fn path(self) -> &'static str {
        match self {
            ToggleField::ShowMain => "show_main",
            ToggleField::ShowAttributes => "show_attributes",
            ToggleField::ShowHumidity => "show_humidity",
            ToggleField::ShowPressure => "show_pressure",
            ToggleField::ShowWindDirection => "show_wind_direction",
            ToggleField::ShowWindSpeed => "show_wind_speed",
            ToggleField::ShowWindForecast => "forecast.show_wind_forecast",
            ToggleField::ConditionIcons => "forecast.condition_icons",
        }
    }
}

impl FieldEdit {
    /// Dotted configuration path of the edited field
    pub fn path(&self) -> &'static str {
        match self {
            FieldEdit::Text(field, _) => field.path(),
            FieldEdit::Toggle(field, _) => field.path(),
        }
    }
}

impl CardConfig {
    /// Copy of this configuration with a single field updated.
    ///
    /// `self` is left untouched. Everything else in the copy, unknown keys
    /// included, carries over as-is.
    pub fn with_edit(&self, edit: &FieldEdit) -> CardConfig {
        let mut config = self.clone();

        match edit {
            FieldEdit::Text(field, value) => {
                let value = Some(value.clone());
                match field {
                    TextField::Entity => config.entity = value,
                    TextField::Title => config.title = value,
                    TextField::Icons => config.icons = value,
                    TextField::AltTemperature => config.temp = value,
                    TextField::AltPressure => config.press = value,
                    TextField::AltHumidity => config.humid = value,
                    TextField::LabelsFontSize => {
                        config
                            .forecast
                            .get_or_insert_with(ForecastConfig::default)
                            .labels_font_size = value;
                    }
                    TextField::PressureUnit => {
                        config
                            .units
                            .get_or_insert_with(UnitsConfig::default)
                            .pressure = value;
                    }
                    TextField::SpeedUnit => {
                        config.units.get_or_insert_with(UnitsConfig::default).speed = value;
                    }
                }
            }
            FieldEdit::Toggle(field, value) => {
                let value = Some(*value);
                match field {
                    ToggleField::ShowMain => config.show_main = value,
                    ToggleField::ShowAttributes => config.show_attributes = value,
                    ToggleField::ShowHumidity => config.show_humidity = value,
                    ToggleField::ShowPressure => config.show_pressure = value,
                    ToggleField::ShowWindDirection => config.show_wind_direction = value,
                    ToggleField::ShowWindSpeed => config.show_wind_speed = value,
                    ToggleField::ShowWindForecast => {
                        config
                            .forecast
                            .get_or_insert_with(ForecastConfig::default)
                            .show_wind_forecast = value;
                    }
                    ToggleField::ConditionIcons => {
                        config
                            .forecast
                            .get_or_insert_with(ForecastConfig::default)
                            .condition_icons = value;
                    }
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn config_from(json: Value) -> CardConfig {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_text_edit_writes_top_level_field() {
        let config = config_from(json!({ "entity": "weather.home" }));

        let updated = config.with_edit(&FieldEdit::Text(
            TextField::Title,
            "Outside".to_string(),
        ));

        assert_eq!(updated.title.as_deref(), Some("Outside"));
        assert_eq!(updated.entity.as_deref(), Some("weather.home"));
    }

    #[test]
    fn test_edit_does_not_mutate_input() {
        let config = config_from(json!({ "entity": "weather.home" }));

        let updated = config.with_edit(&FieldEdit::Toggle(ToggleField::ShowMain, false));

        assert_eq!(config.show_main, None);
        assert_eq!(updated.show_main, Some(false));
    }

    #[test]
    fn test_nested_edit_creates_units_section() {
        let config = config_from(json!({ "entity": "weather.home" }));
        assert!(config.units.is_none());

        let updated = config.with_edit(&FieldEdit::Text(
            TextField::PressureUnit,
            "mbar".to_string(),
        ));

        let value = serde_json::to_value(&updated).unwrap();
        assert_eq!(
            value,
            json!({ "entity": "weather.home", "units": { "pressure": "mbar" } })
        );
    }

    #[test]
    fn test_nested_edit_preserves_section_siblings() {
        let config = config_from(json!({
            "forecast": { "labels_font_size": "14", "rows": 5 }
        }));

        let updated = config.with_edit(&FieldEdit::Toggle(ToggleField::ShowWindForecast, false));

        let forecast = updated.forecast.unwrap();
        assert_eq!(forecast.labels_font_size.as_deref(), Some("14"));
        assert_eq!(forecast.show_wind_forecast, Some(false));
        assert_eq!(forecast.extra.get("rows"), Some(&json!(5)));
    }

    #[test]
    fn test_toggle_edit_on_explicit_false_baseline() {
        let config = config_from(json!({ "show_main": false }));

        let updated = config.with_edit(&FieldEdit::Toggle(ToggleField::ShowHumidity, true));

        assert_eq!(updated.show_main, Some(false));
        assert_eq!(updated.show_humidity, Some(true));
    }

    #[test]
    fn test_empty_text_is_stored_not_dropped() {
        let config = config_from(json!({ "title": "Weather" }));

        let updated = config.with_edit(&FieldEdit::Text(TextField::Title, String::new()));

        assert_eq!(updated.title.as_deref(), Some(""));
        let value = serde_json::to_value(&updated).unwrap();
        assert_eq!(value, json!({ "title": "" }));
    }

    #[test]
    fn test_unknown_keys_survive_edits() {
        let config = config_from(json!({
            "type": "custom:weather-card",
            "entity": "weather.home"
        }));

        let updated = config.with_edit(&FieldEdit::Text(
            TextField::Entity,
            "weather.cabin".to_string(),
        ));

        let value = serde_json::to_value(&updated).unwrap();
        assert_eq!(
            value,
            json!({ "type": "custom:weather-card", "entity": "weather.cabin" })
        );
    }

    #[test]
    fn test_field_paths_are_dotted() {
        assert_eq!(TextField::Entity.path(), "entity");
        assert_eq!(TextField::AltTemperature.path(), "temp");
        assert_eq!(TextField::LabelsFontSize.path(), "forecast.labels_font_size");
        assert_eq!(ToggleField::ConditionIcons.path(), "forecast.condition_icons");
        assert_eq!(
            FieldEdit::Text(TextField::SpeedUnit, "mph".to_string()).path(),
            "units.speed"
        );
    }
}
