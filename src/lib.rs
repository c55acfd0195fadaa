// src/lib.rs — Library root for gridboard

pub mod cli;
pub mod dashboard;
pub mod infra;
pub mod tui;
