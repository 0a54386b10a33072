//! Application-wide constants

/// Configuration file location
pub mod config {
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "weather-card-editor";

    /// Card configuration filename
    pub const FILENAME: &str = "weather-card.json";
}

/// GUI-related constants
pub mod gui {
    pub const WINDOW_WIDTH: f32 = 460.0;
    pub const WINDOW_HEIGHT: f32 = 560.0;

    /// Vertical spacing between form sections
    pub const SECTION_SPACING: f32 = 15.0;

    /// Vertical spacing between items within a section
    pub const ITEM_SPACING: f32 = 8.0;

    /// Width of single-line text inputs
    pub const FIELD_WIDTH: f32 = 220.0;

    pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);
    pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 100, 100);
}

/// Display defaults substituted for fields the card config leaves unset.
///
/// These mirror what the dashboard card renders with when the key is
/// absent; the editor never writes them back unless the user does.
pub mod defaults {
    pub mod forecast {
        pub const LABELS_FONT_SIZE: &str = "11";
    }

    pub mod units {
        pub const PRESSURE: &str = "hPa";
        pub const SPEED: &str = "km/h";
    }
}
