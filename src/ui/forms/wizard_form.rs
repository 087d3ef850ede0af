//! Application wizard rendering

use super::field_renderer::{draw_checkbox, draw_error, draw_field, draw_input, field_height};
use super::tab_strip::draw_tab_strip;
use crate::state::{
    ApplicationWizard, FieldId, FieldKind, Focus, SubmissionStatus, INTEREST_VOCABULARY,
    MAX_ACTIVITIES, MAX_INTERESTS,
};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Columns in the field-of-interest grid
pub const INTEREST_COLUMNS: usize = 3;

const FINANCIAL_AID_NOTICE: &str = "Financial aid requests need supporting documents: \
     proof of household income and a short statement of need. We will email \
     instructions after you submit.";

fn interest_rows() -> u16 {
    INTEREST_VOCABULARY.len().div_ceil(INTEREST_COLUMNS) as u16
}

/// Rows a field needs in the section body
fn body_height(wizard: &ApplicationWizard, id: FieldId) -> u16 {
    match id.kind() {
        FieldKind::Text => field_height(false),
        FieldKind::Multiline => field_height(true),
        FieldKind::Flag if wizard.shows_financial_aid_notice() => 2 + 5,
        FieldKind::Flag => 2,
        // grid + borders + error line
        FieldKind::Selection => interest_rows() + 3,
        // input + list + error line
        FieldKind::List => 3 + MAX_ACTIVITIES as u16 + 2 + 1,
    }
}

/// Draw the wizard for the active section
pub fn draw(frame: &mut Frame, area: Rect, wizard: &ApplicationWizard) {
    let section = wizard.active_section();
    let block = Block::default()
        .title(" Apply to the Research Program ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs, heading, _, body, status, actions] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .areas(inner);

    draw_tab_strip(frame, tabs, wizard);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Step {} of 6 · {}", section.index() + 1, section.heading()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        heading,
    );

    let fields = section.fields();
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|id| Constraint::Length(body_height(wizard, *id)))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::vertical(constraints).split(body);

    let focus = wizard.focus();
    for (id, row) in fields.iter().zip(rows.iter()) {
        let is_active = focus == Focus::Field(*id);
        draw_body_field(frame, *row, wizard, *id, is_active);
    }

    draw_status_line(frame, status, wizard);
    draw_actions(frame, actions, wizard);
}

fn draw_body_field(
    frame: &mut Frame,
    area: Rect,
    wizard: &ApplicationWizard,
    id: FieldId,
    is_active: bool,
) {
    let error = wizard.error(id);
    match id.kind() {
        FieldKind::Selection => draw_interests(frame, area, wizard, is_active, error),
        FieldKind::List => draw_activities(frame, area, wizard, is_active, error),
        FieldKind::Flag => {
            let [checkbox, notice] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
            if let Some(field) = wizard.field(id) {
                draw_checkbox(frame, checkbox, field, is_active, error);
            }
            if wizard.shows_financial_aid_notice() {
                draw_financial_aid_notice(frame, notice);
            }
        }
        FieldKind::Text | FieldKind::Multiline => {
            if let Some(field) = wizard.field(id) {
                draw_field(frame, area, field, is_active, error);
            }
        }
    }
}

fn draw_interests(
    frame: &mut Frame,
    area: Rect,
    wizard: &ApplicationWizard,
    is_active: bool,
    error: Option<&str>,
) {
    let [grid_area, error_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let interests = wizard.interests();
    let border = if error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(
            " Fields of Interest * ({}/{MAX_INTERESTS}) ",
            interests.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(grid_area);
    frame.render_widget(block, grid_area);

    let cell_width = (inner.width as usize / INTEREST_COLUMNS).max(1);
    let lines: Vec<Line> = INTEREST_VOCABULARY
        .chunks(INTEREST_COLUMNS)
        .enumerate()
        .map(|(row, names)| {
            let spans = names
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let index = row * INTEREST_COLUMNS + col;
                    let selected = interests.is_selected(name);
                    let mark = if selected { "[x]" } else { "[ ]" };
                    let text = format!("{mark} {name}");
                    let text = format!("{text:<cell_width$}");

                    let mut style = if selected {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    };
                    if is_active && index == interests.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(text, style)
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
    draw_error(frame, error_area, error);
}

fn draw_activities(
    frame: &mut Frame,
    area: Rect,
    wizard: &ApplicationWizard,
    is_active: bool,
    error: Option<&str>,
) {
    let [input_area, list_area, error_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let activities = wizard.activities();
    let title = if activities.is_full() {
        " Add activity (list full) ".to_string()
    } else {
        " Add activity, Enter to save ".to_string()
    };
    draw_input(
        frame,
        input_area,
        &title,
        &activities.input,
        is_active,
        false,
        false,
    );

    let lines: Vec<Line> = if activities.is_empty() {
        vec![Line::from(Span::styled(
            "No activities yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        activities
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if is_active && i == activities.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("• {entry}"), style))
            })
            .collect()
    };

    let block = Block::default()
        .title(format!(
            " Extracurriculars ({}/{MAX_ACTIVITIES}) ",
            activities.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), list_area);
    draw_error(frame, error_area, error);
}

fn draw_financial_aid_notice(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Supporting documents required ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(
        Paragraph::new(FINANCIAL_AID_NOTICE)
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn draw_status_line(frame: &mut Frame, area: Rect, wizard: &ApplicationWizard) {
    let line = match wizard.submission() {
        SubmissionStatus::Succeeded(receipt) => Line::from(Span::styled(
            format!("Application submitted. Reference {}", receipt.reference()),
            Style::default().fg(Color::Green),
        )),
        SubmissionStatus::Failed(message) => Line::from(Span::styled(
            format!("Submission failed: {message}. Press Ctrl+S to retry"),
            Style::default().fg(Color::Red),
        )),
        SubmissionStatus::Idle | SubmissionStatus::Pending => {
            match wizard.section_error_count(wizard.active_section()) {
                0 => Line::default(),
                n => Line::from(Span::styled(
                    format!("{n} field(s) need attention"),
                    Style::default().fg(Color::Red),
                )),
            }
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_actions(frame: &mut Frame, area: Rect, wizard: &ApplicationWizard) {
    let row_focused = wizard.focus() == Focus::Actions;
    let selected = wizard.selected_action();

    let mut x = area.x + area.width;
    for action in wizard.actions().iter().rev() {
        let width = button_width(action.label());
        let room = x.saturating_sub(area.x);
        if width > room {
            break;
        }
        x -= width;
        let button_area = Rect::new(x, area.y, width, area.height);
        render_button(
            frame,
            button_area,
            action.label(),
            row_focused && *action == selected,
            !wizard.is_submitting(),
        );
        if x == area.x {
            break;
        }
        // gap between buttons
        x -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{filled_wizard, wizard_on_additional, Section};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(wizard: &ApplicationWizard) -> String {
        render_at(wizard, 100)
    }

    fn render_at(wizard: &ApplicationWizard, width: u16) -> String {
        let backend = TestBackend::new(width, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), wizard))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_interest_grid_covers_vocabulary() {
        assert!(interest_rows() as usize * INTEREST_COLUMNS >= INTEREST_VOCABULARY.len());
    }

    #[test]
    fn test_financial_aid_notice_follows_flag() {
        let mut wizard = wizard_on_additional();
        assert!(!render(&wizard).contains("Supporting documents required"));

        wizard.toggle_flag(FieldId::FinancialAid);
        assert!(render(&wizard).contains("Supporting documents required"));

        wizard.toggle_flag(FieldId::FinancialAid);
        assert!(!render(&wizard).contains("Supporting documents required"));
    }

    #[test]
    fn test_narrow_terminal_drops_buttons_that_do_not_fit() {
        // Inner width exactly fits "Submit Application"
        let wizard = wizard_on_additional();
        let screen = render_at(&wizard, 24);
        assert!(screen.contains("Submit Application"));
        assert!(!screen.contains("Previous"));

        // Inner width exactly fits "Next"
        let mut wizard = filled_wizard();
        wizard.select(Section::Academic);
        let screen = render_at(&wizard, 10);
        assert!(screen.contains("Next"));
    }

    #[test]
    fn test_action_row_survives_every_narrow_width() {
        let mut middle = filled_wizard();
        middle.select(Section::Academic);
        for wizard in [wizard_on_additional(), middle] {
            for width in 4..40 {
                render_at(&wizard, width);
            }
        }
    }

    #[test]
    fn test_inline_errors_render() {
        let mut wizard = ApplicationWizard::new();
        wizard.next();
        let screen = render(&wizard);
        assert!(screen.contains("need attention"));
        assert_eq!(wizard.active_section(), Section::Personal);
    }
}
