// src/tui/layout.rs — Grid geometry and click hit-testing.
//
// Pure functions over `Rect`s so the grid can be tested without a terminal.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::dashboard::{Action, WidgetData};

/// Columns between neighbouring cards.
const COLUMN_GAP: u16 = 1;

/// Border (2) plus horizontal padding (2).
const CARD_CHROME_WIDTH: u16 = 4;

/// Top and bottom border.
const CARD_CHROME_HEIGHT: u16 = 2;

/// Width of the `[x]` removal control.
pub const REMOVE_CONTROL_WIDTH: u16 = 3;

/// Where one card landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Position of the card in the collection.
    pub index: usize,
    pub area: Rect,
}

/// Horizontal slices for `columns` equal-width columns.
pub fn column_rects(area: Rect, columns: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let constraints = (0..columns).map(|_| Constraint::Ratio(1, columns as u32));
    Layout::horizontal(constraints)
        .spacing(COLUMN_GAP)
        .split(area)
        .to_vec()
}

/// Width available to a card body inside a card of `card_width`.
pub fn body_width(card_width: u16) -> u16 {
    card_width.saturating_sub(CARD_CHROME_WIDTH).max(1)
}

/// Preferred height of a card, including its border.
pub fn card_height(data: &WidgetData, card_width: u16) -> u16 {
    let body = match data {
        // Value line plus bar line.
        WidgetData::Chart(_) => 2,
        WidgetData::TaskList(items) => items.len().max(1) as u16,
        WidgetData::InfoPanel(text) => wrapped_line_count(text, body_width(card_width)),
    };
    body + CARD_CHROME_HEIGHT
}

/// Lines needed to word-wrap `text` at `width` columns.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines: u16 = 0;

    for paragraph in text.split('\n') {
        let mut current = 0usize;
        lines += 1;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if current == 0 {
                current = len;
            } else if current + 1 + len <= width {
                current += 1 + len;
            } else {
                lines += 1;
                current = len;
            }
            // Words longer than a line spill over.
            while current > width {
                lines += 1;
                current -= width;
            }
        }
    }
    lines.max(1)
}

fn row_heights(cards: &[&WidgetData], columns: usize, card_width: u16) -> Vec<u16> {
    cards
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|d| card_height(d, card_width))
                .max()
                .unwrap_or(CARD_CHROME_HEIGHT)
        })
        .collect()
}

/// Place cards into `area`, row-major, starting at grid row `scroll_row`.
/// Cards in rows that do not fit are omitted; a row that only partly fits is
/// clipped to the space left.
pub fn plan_grid(
    area: Rect,
    cards: &[&WidgetData],
    columns: u16,
    scroll_row: usize,
) -> Vec<GridCell> {
    let cols = column_rects(area, columns);
    let per_row = cols.len();
    let card_width = cols.first().map(|r| r.width).unwrap_or(area.width);
    let heights = row_heights(cards, per_row, card_width);

    let mut cells = Vec::new();
    let mut y = area.y;
    for (row, height) in heights.iter().enumerate().skip(scroll_row) {
        if y >= area.bottom() {
            break;
        }
        let h = (*height).min(area.bottom() - y);
        for (col, col_rect) in cols.iter().enumerate() {
            let index = row * per_row + col;
            if index >= cards.len() {
                break;
            }
            cells.push(GridCell {
                index,
                area: Rect::new(col_rect.x, y, col_rect.width, h),
            });
        }
        y += h;
    }
    cells
}

/// Adjust `scroll_row` so the row holding `selected` is fully visible.
pub fn scroll_for_selection(
    area: Rect,
    cards: &[&WidgetData],
    columns: u16,
    scroll_row: usize,
    selected: Option<usize>,
) -> usize {
    let cols = column_rects(area, columns);
    let per_row = cols.len();
    let card_width = cols.first().map(|r| r.width).unwrap_or(area.width);
    let heights = row_heights(cards, per_row, card_width);
    let last_row = heights.len().saturating_sub(1);

    let mut scroll = scroll_row.min(last_row);
    let Some(selected) = selected else {
        return scroll;
    };
    let target = (selected / per_row).min(last_row);

    if target < scroll {
        return target;
    }
    while scroll < target {
        let used: u32 = heights[scroll..=target].iter().map(|h| *h as u32).sum();
        if used <= area.height as u32 {
            break;
        }
        scroll += 1;
    }
    scroll
}

/// Screen cell range of the `[x]` control in a card's top-right corner.
pub fn remove_control_area(card: Rect) -> Rect {
    // Right-aligned title text ends one column before the corner.
    let x = card.right().saturating_sub(1 + REMOVE_CONTROL_WIDTH).max(card.x);
    Rect::new(
        x,
        card.y,
        REMOVE_CONTROL_WIDTH.min(card.width),
        card.height.min(1),
    )
}

/// What a click on a region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Action(Action),
    Select(usize),
}

/// Clickable regions recorded while drawing the last frame.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register a region. Earlier registrations win when regions overlap.
    pub fn push(&mut self, area: Rect, hit: Hit) {
        self.regions.push((area, hit));
    }

    pub fn resolve(&self, column: u16, row: u16) -> Option<&Hit> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, hit)| hit)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
