// src/cli/snapshot.rs — `gridboard snapshot`: headless render of a dashboard.
//
// Replays --add / --remove actions on a fresh controller and prints either
// the drawn screen as plain text or the widget collection as JSON.

use serde::Serialize;
use std::str::FromStr;

use crate::dashboard::{Action, DashboardController, WidgetId, WidgetInstance, WidgetType};
use crate::infra::config::Config;
use crate::infra::errors::{GridboardError, Result};
use crate::tui::{self, App};

/// Room for the full control bar; see `controls::bar_width`.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Text,
    Json,
}

impl FromStr for SnapshotFormat {
    type Err = GridboardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(SnapshotFormat::Text),
            "json" => Ok(SnapshotFormat::Json),
            other => Err(GridboardError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub add: Vec<WidgetType>,
    pub remove: Vec<WidgetId>,
    pub format: SnapshotFormat,
    pub width: u16,
    pub height: u16,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            add: Vec::new(),
            remove: Vec::new(),
            format: SnapshotFormat::Text,
            width: 100,
            height: 30,
        }
    }
}

impl SnapshotOptions {
    /// Adds first, in order, then removals.
    pub fn actions(&self) -> Vec<Action> {
        self.add
            .iter()
            .map(|k| Action::AddWidget(*k))
            .chain(self.remove.iter().cloned().map(Action::RemoveWidget))
            .collect()
    }
}

#[derive(Serialize)]
struct SnapshotJson<'a> {
    next_id: u64,
    widgets: &'a [WidgetInstance],
}

/// Run the snapshot and return what should be printed.
pub fn run_snapshot(
    opts: &SnapshotOptions,
    mut controller: DashboardController,
    config: Config,
) -> Result<String> {
    for action in opts.actions() {
        controller.apply(&action);
    }
    tracing::info!(
        widgets = controller.len(),
        next_id = controller.next_id(),
        format = ?opts.format,
        "snapshot"
    );

    match opts.format {
        SnapshotFormat::Json => {
            let body = SnapshotJson {
                next_id: controller.next_id(),
                widgets: controller.widgets(),
            };
            let mut out = serde_json::to_string_pretty(&body)?;
            out.push('\n');
            Ok(out)
        }
        SnapshotFormat::Text => {
            if opts.width < MIN_WIDTH || opts.height < MIN_HEIGHT {
                return Err(GridboardError::ViewportTooSmall {
                    width: opts.width,
                    height: opts.height,
                    min_width: MIN_WIDTH,
                    min_height: MIN_HEIGHT,
                });
            }
            let mut app = App::new(controller, config);
            Ok(tui::render_to_text(&mut app, opts.width, opts.height)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::controls;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_parse() {
        assert_eq!(
            "text".parse::<SnapshotFormat>().unwrap(),
            SnapshotFormat::Text
        );
        assert_eq!(
            "JSON".parse::<SnapshotFormat>().unwrap(),
            SnapshotFormat::Json
        );
        assert!(matches!(
            "yaml".parse::<SnapshotFormat>(),
            Err(GridboardError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_actions_adds_before_removes() {
        let opts = SnapshotOptions {
            add: vec![WidgetType::Chart],
            remove: vec![WidgetId::from("widget-3")],
            ..Default::default()
        };
        assert_eq!(
            opts.actions(),
            vec![
                Action::AddWidget(WidgetType::Chart),
                Action::RemoveWidget(WidgetId::from("widget-3")),
            ]
        );
    }

    #[test]
    fn test_min_width_holds_control_bar() {
        assert!(controls::bar_width() <= MIN_WIDTH);
    }

    #[test]
    fn test_too_small_viewport() {
        let opts = SnapshotOptions {
            width: 10,
            ..Default::default()
        };
        let err =
            run_snapshot(&opts, DashboardController::with_seed(1), Config::default()).unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_width_below_control_bar_rejected() {
        let opts = SnapshotOptions {
            width: MIN_WIDTH - 1,
            ..Default::default()
        };
        let err =
            run_snapshot(&opts, DashboardController::with_seed(1), Config::default()).unwrap_err();
        assert!(matches!(err, GridboardError::ViewportTooSmall { .. }));
    }

    #[test]
    fn test_small_viewport_fine_for_json() {
        let opts = SnapshotOptions {
            format: SnapshotFormat::Json,
            width: 1,
            height: 1,
            ..Default::default()
        };
        let out = run_snapshot(&opts, DashboardController::with_seed(1), Config::default());
        assert!(out.is_ok());
    }
}
