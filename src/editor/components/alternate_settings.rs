//! Alternate entities page: sensors overriding the weather entity's attributes

use eframe::egui;

use crate::config::{CardConfig, FieldEdit, TextField};

use super::{section_heading, text_field};

/// Renders the alternate entities page, collecting any edits made this frame
pub fn ui(ui: &mut egui::Ui, config: &CardConfig, edits: &mut Vec<FieldEdit>) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        section_heading(ui, "Alternate entities");

        text_field(
            ui,
            "Temperature sensor:",
            TextField::AltTemperature,
            config.temp(),
            "sensor.outdoor_temperature",
            edits,
        );
        text_field(
            ui,
            "Pressure sensor:",
            TextField::AltPressure,
            config.press(),
            "sensor.outdoor_pressure",
            edits,
        );
        text_field(
            ui,
            "Humidity sensor:",
            TextField::AltHumidity,
            config.humid(),
            "sensor.outdoor_humidity",
            edits,
        );
    });
}
