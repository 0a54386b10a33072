//! Editor state: config baseline, page selection, change notification

use std::sync::mpsc::Sender;

use eframe::egui;
use tracing::{debug, warn};

use crate::common::events::EditorEvent;
use crate::config::{CardConfig, FieldEdit};

/// Form pages of the editor, one visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Forecast,
    Units,
    Alternate,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Main, Page::Forecast, Page::Units, Page::Alternate];

    /// Tab button label
    pub fn label(self) -> &'static str {
        match self {
            Page::Main => "Main",
            Page::Forecast => "Forecast",
            Page::Units => "Units",
            Page::Alternate => "Alternate entities",
        }
    }

    /// Parse a page name as given on the command line
    pub fn from_name(name: &str) -> Option<Page> {
        match name {
            "main" => Some(Page::Main),
            "forecast" => Some(Page::Forecast),
            "units" => Some(Page::Units),
            "alternate" => Some(Page::Alternate),
            _ => None,
        }
    }
}

/// Status line content with severity color
pub struct StatusMessage {
    pub text: String,
    pub color: egui::Color32,
}

/// The weather card configuration editor.
///
/// Holds the editing baseline and the visible page. Every edit clones the
/// baseline, applies the single field write, adopts the copy as the new
/// baseline, and announces it through the event channel. Configurations
/// handed out earlier are never touched.
pub struct CardEditor {
    config: Option<CardConfig>,
    page: Page,
    events: Sender<EditorEvent>,
}

impl CardEditor {
    pub fn new(events: Sender<EditorEvent>) -> Self {
        Self {
            config: None,
            page: Page::Main,
            events,
        }
    }

    /// Configuration currently being edited, if one has been supplied
    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Replace the editing baseline. The page selection is kept.
    pub fn set_config(&mut self, config: CardConfig) {
        self.config = Some(config);
    }

    /// Switch the visible page
    pub fn select_page(&mut self, page: Page) {
        self.page = page;
    }

    /// Apply a single-field edit and announce the updated configuration.
    ///
    /// Ignored until a configuration has been supplied via `set_config`.
    pub fn update_field(&mut self, edit: FieldEdit) {
        let Some(baseline) = &self.config else {
            debug!(path = %edit.path(), "Edit ignored, no configuration loaded");
            return;
        };

        let updated = baseline.with_edit(&edit);
        debug!(path = %edit.path(), "Field updated");

        self.config = Some(updated.clone());

        if let Err(e) = self.events.send(EditorEvent::ConfigChanged(updated)) {
            warn!(error = %e, "No listener for config changes");
        }
    }
}
