// Algorithm picker pane

use crate::stepper::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Style of an algorithm's name; every entry stays selectable, even mid-run
pub fn name_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .bg(DEFAULT_THEME.current_line_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the algorithm list
pub fn render_algorithms_pane(frame: &mut Frame, area: Rect, selected: Option<Algorithm>) {
    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, &algorithm)| {
            let is_selected = selected == Some(algorithm);
            let marker = if is_selected { "▶ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}{} ", marker, i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(algorithm.label(), name_style(is_selected)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
