//! Horizontally scrolling strip of section tabs

use crate::state::{ApplicationWizard, Section, TAB_GAP};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Total width of every tab and the gaps between them
pub fn strip_width() -> u16 {
    let tabs: u16 = Section::ALL.iter().map(|s| s.tab_width()).sum();
    tabs + TAB_GAP * (Section::ALL.len() as u16 - 1)
}

/// Clamp the wizard's offset so the strip never scrolls past its last tab
pub fn visible_offset(offset: u16, total_width: u16, viewport: u16) -> u16 {
    offset.min(total_width.saturating_sub(viewport))
}

fn tab_style(wizard: &ApplicationWizard, section: Section) -> Style {
    let active = wizard.active_section();
    if section == active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if wizard.section_error_count(section) > 0 {
        Style::default().fg(Color::Red)
    } else if section < active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn draw_tab_strip(frame: &mut Frame, area: Rect, wizard: &ApplicationWizard) {
    let gap = " ".repeat(TAB_GAP as usize);
    let mut spans = Vec::with_capacity(Section::ALL.len() * 2);
    for section in Section::ALL {
        if !section.is_first() {
            spans.push(Span::raw(gap.clone()));
        }
        spans.push(Span::styled(
            format!("[ {} ]", section.tab_label()),
            tab_style(wizard, section),
        ));
    }

    let offset = visible_offset(wizard.tab_scroll_offset(), strip_width(), area.width);
    frame.render_widget(Paragraph::new(Line::from(spans)).scroll((0, offset)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_width_matches_last_offset() {
        let last = Section::Additional;
        assert_eq!(strip_width(), last.tab_scroll_offset() + last.tab_width());
    }

    #[test]
    fn test_rendered_tab_matches_width() {
        for section in Section::ALL {
            let rendered = format!("[ {} ]", section.tab_label());
            assert_eq!(rendered.chars().count() as u16, section.tab_width());
        }
    }

    #[test]
    fn test_visible_offset_keeps_wide_viewport_at_zero() {
        assert_eq!(visible_offset(40, 60, 200), 0);
    }

    #[test]
    fn test_visible_offset_clamps_to_end() {
        assert_eq!(visible_offset(50, 60, 20), 40);
        assert_eq!(visible_offset(15, 60, 20), 15);
    }
}
