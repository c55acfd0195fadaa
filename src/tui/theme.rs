// src/tui/theme.rs — Color scheme and style definitions for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::dashboard::WidgetType;

/// Light-on-dark palette with one accent per widget kind.
pub struct Theme;

impl Theme {
    // ── Base colors ──────────────────────────────────────────────
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const GRAY: Color = Color::Rgb(120, 120, 140);
    pub const DIM: Color = Color::Rgb(80, 80, 100);
    pub const RED: Color = Color::Rgb(220, 38, 38);

    // ── Widget accents ───────────────────────────────────────────
    pub const BLUE: Color = Color::Rgb(96, 165, 250);
    pub const GREEN: Color = Color::Rgb(74, 222, 128);
    pub const PURPLE: Color = Color::Rgb(147, 51, 234);

    // ── Semantic styles ──────────────────────────────────────────

    /// Page title.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// Block border (selected card).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::WHITE)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::WHITE)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Card title.
    pub fn card_title() -> Style {
        Style::default()
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// The `[x]` removal control.
    pub fn remove_control() -> Style {
        Style::default().fg(Theme::RED)
    }

    /// Large number on a chart card.
    pub fn chart_value() -> Style {
        Style::default()
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent color for a widget kind.
    pub fn accent(kind: WidgetType) -> Color {
        match kind {
            WidgetType::Chart => Theme::BLUE,
            WidgetType::TaskList => Theme::GREEN,
            WidgetType::InfoPanel => Theme::PURPLE,
        }
    }

    /// Add-button in the control bar.
    pub fn button(kind: WidgetType) -> Style {
        Style::default()
            .bg(Theme::accent(kind))
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Empty-state message.
    pub fn empty_state() -> Style {
        Style::default()
            .fg(Theme::GRAY)
            .add_modifier(Modifier::ITALIC)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::BLUE)
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::GRAY)
    }
}
