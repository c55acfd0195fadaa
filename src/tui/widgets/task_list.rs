// src/tui/widgets/task_list.rs — Task list card.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::dashboard::WidgetType;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, block: Block, items: &[String]) {
    let bullet = Theme::text().fg(Theme::accent(WidgetType::TaskList));
    let lines: Vec<Line> = items
        .iter()
        .map(|task| {
            Line::from(vec![
                Span::styled("\u{2022} ", bullet),
                Span::styled(task.as_str(), Theme::text()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
