//! Field rendering utilities for forms

use crate::state::{schema, FormField};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a text input occupies, including its border and error line
pub fn field_height(is_multiline: bool) -> u16 {
    if is_multiline {
        7
    } else {
        4
    }
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Field caption, with a marker on required fields
pub fn field_title(field: &FormField) -> String {
    if schema::is_required(field.id) {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    }
}

/// Split off the bottom row of `area` for an inline error message
fn split_error_row(area: Rect) -> (Rect, Rect) {
    let [input, error] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (input, error)
}

pub fn draw_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Draw a text field with its inline error line
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let (input_area, error_area) = split_error_row(area);
    draw_input(
        frame,
        input_area,
        &field_title(field),
        field.as_text(),
        is_active,
        field.is_multiline(),
        error.is_some(),
    );
    draw_error(frame, error_area, error);
}

/// Draw a bordered text input
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    has_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else if is_multiline {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a checkbox row with its inline error line
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let (row, error_area) = split_error_row(area);

    let label_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let pointer = if is_active { "› " } else { "  " };

    let line = Line::from(vec![
        Span::styled(pointer, Style::default().fg(Color::Cyan)),
        Span::styled(field.display_value(), label_style),
        Span::raw(" "),
        Span::styled(field.label(), label_style),
    ]);
    frame.render_widget(Paragraph::new(line), row);
    draw_error(frame, error_area, error);
}
