//! Publications list and detail pane

use crate::platform::COPY_SHORTCUT;
use crate::state::{PublicationsState, PUBLICATIONS};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &PublicationsState) {
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    let items: Vec<ListItem> = PUBLICATIONS
        .iter()
        .map(|p| {
            ListItem::new(vec![
                Line::from(Span::raw(p.title)),
                Line::from(Span::styled(
                    format!("  {}", p.author),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Student Publications ({}) ", PUBLICATIONS.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let Some(publication) = state.current() else {
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let link = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED);
    let lines = vec![
        Line::from(Span::styled(
            publication.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Author        ", label), Span::raw(publication.author)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Paper         ", label),
            Span::styled(publication.paper_link, link),
        ]),
        Line::from(vec![
            Span::styled("Presentation  ", label),
            Span::styled(publication.presentation_link, link),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("{COPY_SHORTCUT}: copy paper link   s: copy presentation link"),
            label,
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        detail_area,
    );
}
