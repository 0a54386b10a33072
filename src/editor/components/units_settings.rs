//! Units page: display units for pressure and wind speed

use eframe::egui;

use crate::config::{CardConfig, FieldEdit, TextField};

use super::{section_heading, text_field};

/// Renders the units settings page, collecting any edits made this frame
pub fn ui(ui: &mut egui::Ui, config: &CardConfig, edits: &mut Vec<FieldEdit>) {
    let units = config.units();

    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        section_heading(ui, "Units settings");

        text_field(ui, "Pressure:", TextField::PressureUnit, units.pressure(), "", edits);
        text_field(ui, "Speed:", TextField::SpeedUnit, units.speed(), "", edits);

        ui.label(
            egui::RichText::new("Units are display-only, no conversion is applied")
                .small()
                .weak(),
        );
    });
}
