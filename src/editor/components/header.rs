//! Header: card identity fields, page tabs, reload control, status line

use eframe::egui;

use crate::common::constants::gui::ITEM_SPACING;
use crate::config::{CardConfig, FieldEdit, TextField};
use crate::editor::state::{Page, StatusMessage};

use super::text_field;

/// What the user asked the header to do this frame
pub enum HeaderAction {
    None,
    SelectPage(Page),
    Reload,
}

/// Renders the header. The identity fields and page tabs only appear once a
/// configuration is loaded; the reload control is always available.
pub fn render(
    ui: &mut egui::Ui,
    config: Option<&CardConfig>,
    page: Page,
    status: Option<&StatusMessage>,
    edits: &mut Vec<FieldEdit>,
) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.add_space(ITEM_SPACING);

    if let Some(config) = config {
        text_field(ui, "Entity:", TextField::Entity, config.entity(), "weather.home", edits);
        text_field(ui, "Title:", TextField::Title, config.title(), "", edits);

        ui.add_space(ITEM_SPACING);
    }

    ui.horizontal(|ui| {
        if config.is_some() {
            for p in Page::ALL {
                if ui.add(egui::Button::new(p.label()).selected(page == p)).clicked() {
                    action = HeaderAction::SelectPage(p);
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🔄 Reload").clicked() {
                action = HeaderAction::Reload;
            }
            if let Some(message) = status {
                ui.colored_label(message.color, &message.text);
            }
        });
    });

    ui.add_space(ITEM_SPACING);

    action
}
