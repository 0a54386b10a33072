//! Forecast page: label sizing and forecast row toggles

use eframe::egui;

use crate::common::constants::gui::ITEM_SPACING;
use crate::config::{CardConfig, FieldEdit, TextField, ToggleField};

use super::{section_heading, text_field, toggle_field};

/// Renders the forecast settings page, collecting any edits made this frame
pub fn ui(ui: &mut egui::Ui, config: &CardConfig, edits: &mut Vec<FieldEdit>) {
    let forecast = config.forecast();

    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        section_heading(ui, "Forecast settings");

        text_field(
            ui,
            "Labels font size:",
            TextField::LabelsFontSize,
            forecast.labels_font_size(),
            "",
            edits,
        );

        ui.add_space(ITEM_SPACING);

        toggle_field(
            ui,
            "Show Wind Forecast",
            ToggleField::ShowWindForecast,
            forecast.show_wind_forecast(),
            edits,
        );
        toggle_field(
            ui,
            "Condition Icons",
            ToggleField::ConditionIcons,
            forecast.condition_icons(),
            edits,
        );
    });
}
