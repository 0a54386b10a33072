//! Main page: card section toggles and the custom icon path

use eframe::egui;

use crate::common::constants::gui::ITEM_SPACING;
use crate::config::{CardConfig, FieldEdit, TextField, ToggleField};

use super::{section_heading, text_field, toggle_field};

/// Renders the card settings page, collecting any edits made this frame
pub fn ui(ui: &mut egui::Ui, config: &CardConfig, edits: &mut Vec<FieldEdit>) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        section_heading(ui, "Card settings");

        toggle_field(ui, "Show Main", ToggleField::ShowMain, config.show_main(), edits);
        toggle_field(
            ui,
            "Show Attributes",
            ToggleField::ShowAttributes,
            config.show_attributes(),
            edits,
        );
        toggle_field(
            ui,
            "Show Humidity",
            ToggleField::ShowHumidity,
            config.show_humidity(),
            edits,
        );
        toggle_field(
            ui,
            "Show Pressure",
            ToggleField::ShowPressure,
            config.show_pressure(),
            edits,
        );
        toggle_field(
            ui,
            "Show Wind Direction",
            ToggleField::ShowWindDirection,
            config.show_wind_direction(),
            edits,
        );
        toggle_field(
            ui,
            "Show Wind Speed",
            ToggleField::ShowWindSpeed,
            config.show_wind_speed(),
            edits,
        );

        ui.add_space(ITEM_SPACING);

        text_field(
            ui,
            "Custom icon path:",
            TextField::Icons,
            config.icons(),
            "/local/icons/weather/",
            edits,
        );
        ui.label(
            egui::RichText::new("Directory the card loads condition icons from")
                .small()
                .weak(),
        );
    });
}
