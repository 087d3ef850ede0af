//! UI module for rendering the TUI

mod components;
pub mod forms;
mod landing;
mod layout;
mod publications;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header, content, status) = layout::create_layout(frame.area());

    layout::draw_header(frame, header, app);

    match app.state.current_view {
        View::Landing => landing::draw(frame, content, &app.landing),
        View::Apply => forms::draw(frame, content, &app.state.wizard),
        View::Publications => publications::draw(frame, content, &app.state.publications),
    }

    layout::draw_status_bar(frame, status, app);

    if app.state.current_view == View::Apply && app.state.wizard.is_submitting() {
        let tick = (chrono::Utc::now().timestamp_millis() / 120) as usize;
        components::render_submitting_dialog(frame, tick);
    }

    components::render_toasts(frame, content, &app.state.notifications);
}
