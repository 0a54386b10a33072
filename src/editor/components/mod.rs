//! Form building blocks shared by the editor pages

pub mod alternate_settings;
pub mod card_settings;
pub mod forecast_settings;
pub mod header;
pub mod units_settings;

use eframe::egui;

use crate::common::constants::gui::{FIELD_WIDTH, ITEM_SPACING};
use crate::config::{FieldEdit, TextField, ToggleField};

/// Labeled single-line text input bound to a config field.
///
/// `value` is what the card currently displays, so clearing the input
/// records an explicit empty string rather than removing the key.
pub fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    field: TextField,
    value: &str,
    hint: &str,
    edits: &mut Vec<FieldEdit>,
) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut buffer = value.to_owned();
        let input = egui::TextEdit::singleline(&mut buffer)
            .hint_text(hint)
            .desired_width(FIELD_WIDTH);
        if ui.add(input).changed() {
            edits.push(FieldEdit::Text(field, buffer));
        }
    });
}

/// Toggle row bound to a config switch
pub fn toggle_field(
    ui: &mut egui::Ui,
    label: &str,
    field: ToggleField,
    value: bool,
    edits: &mut Vec<FieldEdit>,
) {
    let mut checked = value;
    if ui.checkbox(&mut checked, label).changed() {
        edits.push(FieldEdit::Toggle(field, checked));
    }
}

/// Section heading used at the top of each page
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(ITEM_SPACING);
}
