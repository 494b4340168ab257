//! Bar chart pane
//!
//! One bar per element. Heights come from the frame's `array` alone; the
//! highlight sets only choose colours, with the precedence
//! sorted > swapped > comparing > pivot.

use crate::snapshot::StepState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Tallest bar, in chart units
const BAR_SCALE: u64 = 100;
/// Shortest bar, so the minimum is still visible
const BAR_FLOOR: u64 = 2;

/// How a bar should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Sorted,
    Swapped,
    Comparing,
    Pivot,
    Plain,
}

impl BarRole {
    pub fn of(state: &StepState, index: usize) -> Self {
        if state.is_sorted_index(index) {
            BarRole::Sorted
        } else if state.swapped.contains(&index) {
            BarRole::Swapped
        } else if state.comparing.contains(&index) {
            BarRole::Comparing
        } else if state.pivot == Some(index) {
            BarRole::Pivot
        } else {
            BarRole::Plain
        }
    }

    pub fn color(self) -> Color {
        match self {
            BarRole::Sorted => DEFAULT_THEME.sorted,
            BarRole::Swapped => DEFAULT_THEME.swapped,
            BarRole::Comparing => DEFAULT_THEME.comparing,
            BarRole::Pivot => DEFAULT_THEME.pivot,
            BarRole::Plain => DEFAULT_THEME.bar,
        }
    }
}

/// Height of `value` relative to the frame's range, in `BAR_FLOOR..=BAR_SCALE`
pub fn bar_height(value: f64, lowest: f64, highest: f64) -> u64 {
    let span = highest - lowest;
    if span <= 0.0 {
        return BAR_SCALE;
    }
    let ratio = ((value - lowest) / span).clamp(0.0, 1.0);
    let height = (ratio * (BAR_SCALE - BAR_FLOOR) as f64).round() as u64;
    height + BAR_FLOOR
}

/// Render the chart pane
pub fn render_chart_pane(frame: &mut Frame, area: Rect, state: &StepState, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if state.is_empty() {
        let paragraph = Paragraph::new("(no data)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lowest = state.array.iter().copied().fold(f64::INFINITY, f64::min);
    let highest = state.array.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let bars: Vec<Bar> = state
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let style = Style::default().fg(BarRole::of(state, index).color());
            Bar::default()
                .value(bar_height(value, lowest, highest))
                .text_value(String::new())
                .style(style)
                .value_style(style)
        })
        .collect();

    // Use the widest bars that still fit, dropping the gap when crowded
    let inner_width = area.width.saturating_sub(2) as usize;
    let count = bars.len();
    let (bar_width, bar_gap) = if count * 2 <= inner_width {
        (((inner_width + 1) / count).saturating_sub(1).max(1) as u16, 1)
    } else {
        ((inner_width / count).max(1) as u16, 0)
    };

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(BAR_SCALE);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_precedence() {
        let mut state = StepState::idle(vec![1.0, 2.0, 3.0, 4.0]);
        state.sorted.insert(0);
        state.swapped = vec![0, 1];
        state.comparing = vec![1, 2];
        state.pivot = Some(2);

        assert_eq!(BarRole::of(&state, 0), BarRole::Sorted);
        assert_eq!(BarRole::of(&state, 1), BarRole::Swapped);
        assert_eq!(BarRole::of(&state, 2), BarRole::Comparing);
        assert_eq!(BarRole::of(&state, 3), BarRole::Plain);

        state.comparing.clear();
        assert_eq!(BarRole::of(&state, 2), BarRole::Pivot);
    }

    #[test]
    fn test_bar_heights() {
        assert_eq!(bar_height(1.0, 1.0, 100.0), BAR_FLOOR);
        assert_eq!(bar_height(100.0, 1.0, 100.0), BAR_SCALE);
        assert_eq!(bar_height(-5.0, -5.0, 5.0), BAR_FLOOR);
        assert_eq!(bar_height(0.0, -5.0, 5.0), 51);
        assert_eq!(bar_height(3.0, 3.0, 3.0), BAR_SCALE);
    }
}
