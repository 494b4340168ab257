//! Status bar rendering with keybindings and playback state

use crate::playback::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub state: PlaybackState,
    pub is_error: bool,
}

/// Badge text and colour for a playback state
pub fn state_badge(state: PlaybackState) -> (&'static str, Color) {
    match state {
        PlaybackState::Running => (" ▶ PLAYING ", DEFAULT_THEME.secondary),
        PlaybackState::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.primary),
        PlaybackState::Completed => (" ✔ DONE ", DEFAULT_THEME.success),
        PlaybackState::Idle => (" IDLE ", DEFAULT_THEME.comment),
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Left side: state badge and message
    let (badge, badge_color) = state_badge(data.state);
    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    badge_color
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings = [
        (" ⎵ ", " play/pause "),
        (" → ", " step "),
        (" 1-6 ↑↓ ", " algorithm "),
        (" r ", " reset "),
        (" g ", " new data "),
        (" q ", " quit "),
    ];

    let mut right_spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
