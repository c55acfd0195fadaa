// src/tui/widgets/info_panel.rs — Info panel card: a wrapped paragraph.

use ratatui::{
    layout::Rect,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, block: Block, text: &str) {
    let p = Paragraph::new(text)
        .style(Theme::text())
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}
