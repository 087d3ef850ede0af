//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{button_width, render_button, BUTTON_HEIGHT};
pub use dialog::render_submitting_dialog;
pub use toast::render_toasts;
