// src/tui/widgets/mod.rs — Card renderers, one sub-module per widget kind.
//
// This is the render half of the widget registry: `render_card` picks the
// renderer by matching on the card's data.

pub mod chart;
pub mod controls;
pub mod info_panel;
pub mod task_list;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::dashboard::registry;
use crate::dashboard::{CardProps, WidgetData};
use crate::tui::layout;
use crate::tui::theme::Theme;

pub const EMPTY_STATE_MESSAGE: &str = "No widgets added yet";

/// Draw one card and return the screen area of its `[x]` removal control.
///
/// The card never mutates anything itself; the caller pairs the returned area
/// with `props.on_remove`.
pub fn render_card(f: &mut Frame, area: Rect, props: &CardProps<'_>, selected: bool) -> Rect {
    let kind = props.kind();
    let meta = registry::meta(kind);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if selected {
            Theme::border_focus()
        } else {
            Theme::border()
        })
        .title(Span::styled(
            format!(" {} ", meta.title),
            Theme::card_title().fg(Theme::accent(kind)),
        ))
        .title_top(Line::from(Span::styled("[x]", Theme::remove_control())).right_aligned())
        .padding(Padding::horizontal(1));

    match props.data {
        WidgetData::Chart(value) => chart::render(f, area, block, *value),
        WidgetData::TaskList(items) => task_list::render(f, area, block, items),
        WidgetData::InfoPanel(text) => info_panel::render(f, area, block, text),
    }

    layout::remove_control_area(area)
}

/// Centered placeholder shown when there are no cards.
pub fn render_empty(f: &mut Frame, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let p = Paragraph::new(Line::from(Span::styled(
        EMPTY_STATE_MESSAGE,
        Theme::empty_state(),
    )))
    .centered();
    f.render_widget(p, rows[1]);
}
