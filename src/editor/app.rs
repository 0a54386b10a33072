//! eframe application wrapping the editor
//!
//! Plays the host role for the embedded editor: it loads the card config
//! from disk, hands it to the editor, and persists every configuration the
//! editor announces.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use tracing::{error, info};

use crate::common::constants::gui::{
    COLOR_ERROR, COLOR_SUCCESS, SECTION_SPACING, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::common::events::EditorEvent;
use crate::config::CardConfig;
use crate::editor::components;
use crate::editor::components::header::HeaderAction;
use crate::editor::icon::load_window_icon;
use crate::editor::state::{CardEditor, Page, StatusMessage};

struct EditorApp {
    editor: CardEditor,
    events: Receiver<EditorEvent>,
    config_path: PathBuf,
    status: Option<StatusMessage>,
}

impl EditorApp {
    fn new(config_path: PathBuf, initial: CardConfig, page: Page) -> Self {
        let (tx, rx) = mpsc::channel();

        let mut editor = CardEditor::new(tx);
        editor.set_config(initial);
        editor.select_page(page);

        Self {
            editor,
            events: rx,
            config_path,
            status: None,
        }
    }

    /// Write an announced configuration back to disk
    fn persist(&mut self, config: &CardConfig) {
        match config.save(&self.config_path) {
            Ok(()) => {
                self.status = Some(StatusMessage {
                    text: "Saved".to_string(),
                    color: COLOR_SUCCESS,
                });
            }
            Err(err) => {
                error!(error = ?err, "Failed to save card config");
                self.status = Some(StatusMessage {
                    text: format!("Save failed: {err}"),
                    color: COLOR_ERROR,
                });
            }
        }
    }

    /// Re-read the config file and hand the result to the editor
    fn reload(&mut self) {
        match CardConfig::load(&self.config_path) {
            Ok(config) => {
                info!("Card config reloaded from {:?}", self.config_path);
                self.editor.set_config(config);
                self.status = Some(StatusMessage {
                    text: "Reloaded from disk".to_string(),
                    color: COLOR_SUCCESS,
                });
            }
            Err(err) => {
                error!(error = ?err, "Failed to reload card config");
                self.status = Some(StatusMessage {
                    text: format!("Reload failed: {err}"),
                    color: COLOR_ERROR,
                });
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut edits = Vec::new();
        let mut action = HeaderAction::None;

        egui::TopBottomPanel::top("editor_header").show(ctx, |ui| {
            action = components::header::render(
                ui,
                self.editor.config(),
                self.editor.page(),
                self.status.as_ref(),
                &mut edits,
            );
        });

        match action {
            HeaderAction::SelectPage(page) => self.editor.select_page(page),
            HeaderAction::Reload => self.reload(),
            HeaderAction::None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let Some(config) = self.editor.config() else {
                    ui.add_space(SECTION_SPACING);
                    ui.weak("No configuration loaded");
                    return;
                };

                match self.editor.page() {
                    Page::Main => components::card_settings::ui(ui, config, &mut edits),
                    Page::Forecast => components::forecast_settings::ui(ui, config, &mut edits),
                    Page::Units => components::units_settings::ui(ui, config, &mut edits),
                    Page::Alternate => components::alternate_settings::ui(ui, config, &mut edits),
                }
            });
        });

        for edit in edits {
            self.editor.update_field(edit);
        }

        // Persist every configuration the editor announced this frame
        while let Ok(event) = self.events.try_recv() {
            match event {
                EditorEvent::ConfigChanged(config) => self.persist(&config),
            }
        }
    }
}

/// Loads the card config and runs the editor window until it is closed
pub fn run_editor(config_path: PathBuf, page: Page) -> Result<()> {
    let initial = CardConfig::load(&config_path)
        .with_context(|| format!("Failed to load card config from {:?}", config_path))?;

    let icon = match load_window_icon() {
        Ok(icon) => Some(icon),
        Err(err) => {
            error!(error = ?err, "Failed to load window icon");
            None
        }
    };

    let title = format!("Weather Card Editor - v{}", env!("CARGO_PKG_VERSION"));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_title(title.clone());
    if let Some(icon) = icon {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(config_path, initial, page)))),
    )
    .map_err(|err| anyhow!("Failed to run editor window: {err}"))
}
