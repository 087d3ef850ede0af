//! Application state module

mod app_state;
mod forms;
mod landing_state;
mod notifications;
mod publications;

pub use app_state::*;
pub use forms::*;
pub use landing_state::*;
pub use notifications::*;
pub use publications::*;
