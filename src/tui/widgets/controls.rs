// src/tui/widgets/controls.rs — Control bar with one add-button per widget kind.

use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dashboard::registry;
use crate::dashboard::WidgetType;
use crate::tui::theme::Theme;

/// Columns between buttons.
const BUTTON_GAP: u16 = 1;

fn button_text(kind: WidgetType) -> String {
    format!(" {} ", registry::meta(kind).button_label)
}

/// Narrowest bar, border included, that holds every button.
pub fn bar_width() -> u16 {
    let buttons: u16 = WidgetType::ALL
        .iter()
        .map(|k| button_text(*k).chars().count() as u16)
        .sum();
    let gaps = BUTTON_GAP * (WidgetType::ALL.len() as u16 - 1);
    buttons + gaps + 2
}

/// Draw the bar and return each button's screen area in registry order.
/// Buttons that do not fit are skipped.
pub fn render(f: &mut Frame, area: Rect) -> Vec<(Rect, WidgetType)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut buttons = Vec::with_capacity(WidgetType::ALL.len());
    if inner.height == 0 {
        return buttons;
    }

    let mut x = inner.x;
    for kind in WidgetType::ALL {
        let label = button_text(kind);
        let width = label.chars().count() as u16;
        if x + width > inner.right() {
            break;
        }

        let rect = Rect::new(x, inner.y, width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(label, Theme::button(kind))),
            rect,
        );
        buttons.push((rect, kind));
        x += width + BUTTON_GAP;
    }
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_fits_all_labels() {
        // " + Chart " + " + Tasks " + " + Info ", two gaps, two borders
        assert_eq!(bar_width(), 9 + 9 + 8 + 2 + 2);
    }
}
