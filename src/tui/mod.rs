// src/tui/mod.rs — Terminal dashboard.
//
// Full-screen ratatui front end over `dashboard::DashboardController`:
// title, add-buttons, a responsive card grid and key hints.

pub mod app;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use app::{render_to_text, run_dashboard, App};
