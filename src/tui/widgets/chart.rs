// src/tui/widgets/chart.rs — Chart card: the value and a proportional bar.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::dashboard::registry::CHART_VALUE_BOUND;
use crate::dashboard::WidgetType;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, block: Block, value: u32) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(value.to_string(), Theme::chart_value())),
        bar(value, inner.width),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

/// Horizontal bar filled in proportion to `value / CHART_VALUE_BOUND`.
fn bar(value: u32, width: u16) -> Line<'static> {
    let filled = filled_cells(value, width);
    let empty = width as usize - filled;
    Line::from(vec![
        Span::styled(
            "\u{2588}".repeat(filled),
            Theme::text().fg(Theme::accent(WidgetType::Chart)),
        ),
        Span::styled("\u{2591}".repeat(empty), Theme::text_dim()),
    ])
}

fn filled_cells(value: u32, width: u16) -> usize {
    let value = value.min(CHART_VALUE_BOUND) as u64;
    (value * width as u64 / CHART_VALUE_BOUND as u64) as usize
}
