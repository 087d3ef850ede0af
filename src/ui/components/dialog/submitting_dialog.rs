//! Overlay shown while an application is being submitted

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Render the pending-submission overlay; `frame_index` drives the spinner
pub fn render_submitting_dialog(frame: &mut Frame, frame_index: usize) {
    let spinner = SPINNER[frame_index % SPINNER.len()];
    let message = format!("{spinner} Sending your application. This can take a few seconds.");

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to cancel"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitting",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: &message,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
