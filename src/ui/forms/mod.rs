//! Form rendering for the application wizard

mod field_renderer;
mod tab_strip;
mod wizard_form;

pub use wizard_form::{draw, INTEREST_COLUMNS};
