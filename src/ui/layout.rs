//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{NEXT_SECTION_SHORTCUT, PREV_SECTION_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldKind, Focus, View};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let [header, content, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    (header, content, status)
}

/// Draw the header with the program name and view navigation
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Research Apply ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for view in View::NAV {
        spans.push(Span::raw("  "));
        let style = if view == app.state.current_view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(view.label(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_view_hints(app);
    let quit_hint = " ^C:quit ";

    let [hint_area, quit_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(quit_hint.len() as u16),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {hints}"),
            Style::default().fg(Color::Gray),
        ))
        .style(Style::default().bg(Color::DarkGray)),
        hint_area,
    );
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        quit_area,
    );
}

/// Get keyboard hints for the current view and focus
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Landing if !app.landing.is_revealed() => "Press any key to skip".to_string(),
        View::Landing => "a:apply  p:publications  q:quit".to_string(),
        View::Publications => "j/k:nav  c:copy paper  s:copy slides  a:apply  Esc:back".to_string(),
        View::Apply if app.state.wizard.is_submitting() => "Esc:cancel submission".to_string(),
        View::Apply => {
            let focus_hint = match app.state.wizard.focus() {
                Focus::Actions => "←/→:choose  Enter:press",
                Focus::Field(id) => match id.kind() {
                    FieldKind::Selection => "arrows:move  Space:toggle",
                    FieldKind::List => "Enter:add  ↑/↓:select  Del:remove",
                    FieldKind::Flag => "Space:toggle",
                    FieldKind::Multiline => "Enter:newline",
                    FieldKind::Text => "type to edit",
                },
            };
            format!(
                "{focus_hint}  Tab:next field  {NEXT_SECTION_SHORTCUT}/{PREV_SECTION_SHORTCUT}:section  F1-F6:jump  {SUBMIT_SHORTCUT}:submit  Esc:back"
            )
        }
    }
}
