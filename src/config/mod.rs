//! Card configuration handling
//!
//! This module contains the typed model of the weather card's JSON
//! configuration, its load/save logic, and the closed set of fields the
//! editor can write.

pub mod card;
pub mod field;

pub use card::{CardConfig, ForecastConfig, UnitsConfig};
pub use field::{FieldEdit, TextField, ToggleField};
