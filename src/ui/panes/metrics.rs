//! Metrics pane: running totals and elapsed time for the current run

use crate::playback::{MetricsSnapshot, PlaybackState};
use crate::stepper::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Data needed to render the metrics pane
pub struct MetricsRenderData {
    pub algorithm: Option<Algorithm>,
    pub state: PlaybackState,
    pub metrics: MetricsSnapshot,
    pub steps: u64,
    pub elements: usize,
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn row(label: &str, value: String) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
}

/// Render the metrics pane
pub fn render_metrics_pane(frame: &mut Frame, area: Rect, data: MetricsRenderData) {
    let block = Block::default()
        .title(" Metrics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let algorithm = data
        .algorithm
        .map(|a| a.label().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    let items = vec![
        ListItem::new(Span::styled(
            algorithm,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        row("State", data.state.label().to_string()),
        row("Elements", group_thousands(data.elements as u64)),
        row("Comparisons", group_thousands(data.metrics.comparisons)),
        row("Swaps", group_thousands(data.metrics.swaps)),
        row("Steps", group_thousands(data.steps)),
        row(
            "Time",
            format!("{:.2}s", data.metrics.elapsed.as_secs_f64()),
        ),
    ];

    frame.render_widget(List::new(items).block(block), area);
}
