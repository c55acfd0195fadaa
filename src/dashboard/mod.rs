// src/dashboard/mod.rs — Widget collection state and the widget registry.
//
// Everything here is terminal-agnostic: the controller owns the widgets and
// produces a `DashboardView`, which `tui` turns into cards on screen.

pub mod controller;
pub mod registry;
pub mod types;

pub use controller::{CardProps, DashboardController, DashboardView};
pub use types::{Action, WidgetData, WidgetId, WidgetInstance, WidgetType};
