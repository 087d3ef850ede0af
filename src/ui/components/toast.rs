//! Toast stack rendered in the top-right corner

use crate::state::{Notifications, ToastLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

fn level_style(level: ToastLevel) -> (Color, &'static str) {
    match level {
        ToastLevel::Info => (Color::Blue, "i"),
        ToastLevel::Success => (Color::Green, "✓"),
        ToastLevel::Warning => (Color::Yellow, "!"),
        ToastLevel::Error => (Color::Red, "✗"),
    }
}

/// Draw visible toasts, newest at the top
pub fn render_toasts(frame: &mut Frame, area: Rect, notifications: &Notifications) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut y = area.y;

    let toasts: Vec<_> = notifications.visible().collect();
    for toast in toasts.into_iter().rev() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
        let (color, icon) = level_style(toast.level);

        let content = vec![
            Line::from(Span::styled(
                format!("{icon} {}", toast.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(toast.description.as_str())),
        ];

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(content)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            toast_area,
        );
        y += TOAST_HEIGHT;
    }
}
