//! Editor GUI - egui-based configuration editor for the weather card

mod app;
pub mod components;
mod icon;
pub mod state;

pub use app::run_editor;
pub use state::Page;
