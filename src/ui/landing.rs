//! Landing page rendering: staggered headline and highlight marquee

use crate::state::{LandingState, StaggeredText};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

const TAGLINE: &str = "Mentored research projects for high-school students";

/// Headline with each word cut to its revealed prefix. Hidden characters are
/// blanked so the centered line does not shift while it reveals.
fn headline_line(headline: &StaggeredText, elapsed: Duration) -> Line<'static> {
    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (i, word) in headline.words().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let visible = headline.visible_chars(i, elapsed);
        let shown: String = word.chars().take(visible).collect();
        let hidden = word.chars().count() - visible;
        spans.push(Span::styled(shown, style));
        if hidden > 0 {
            spans.push(Span::raw(" ".repeat(hidden)));
        }
    }
    Line::from(spans)
}

fn menu_line() -> Line<'static> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("[a]", key),
        Span::raw(" Apply now    "),
        Span::styled("[p]", key),
        Span::raw(" Publications    "),
        Span::styled("[q]", key),
        Span::raw(" Quit"),
    ])
}

/// Draw the landing page
pub fn draw(frame: &mut Frame, area: Rect, landing: &LandingState) {
    let elapsed = landing.elapsed();
    let revealed = landing.is_revealed();

    let [_, headline, _, tagline, _, marquee, _, menu, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(headline_line(&landing.headline, elapsed)).alignment(Alignment::Center),
        headline,
    );

    if revealed {
        frame.render_widget(
            Paragraph::new(Span::styled(TAGLINE, Style::default().fg(Color::Gray)))
                .alignment(Alignment::Center),
            tagline,
        );
    }

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let ticker = block.inner(marquee);
    frame.render_widget(block, marquee);
    frame.render_widget(
        Paragraph::new(Span::styled(
            landing.marquee.window(ticker.width as usize, elapsed),
            Style::default().fg(Color::Yellow),
        )),
        ticker,
    );

    let bottom = if revealed {
        Paragraph::new(menu_line())
    } else {
        Paragraph::new(Span::styled(
            "Press any key to skip",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(bottom.alignment(Alignment::Center), menu);
}
