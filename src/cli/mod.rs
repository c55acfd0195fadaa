// src/cli/mod.rs — CLI definition (clap derive)

pub mod snapshot;

use clap::{Parser, Subcommand};

use crate::dashboard::WidgetType;
use snapshot::SnapshotFormat;

#[derive(Parser)]
#[command(name = "gridboard", about = "Terminal widget dashboard", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Seed for chart values, for reproducible dashboards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG wins if set
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard once, off-screen, and print it
    Snapshot {
        /// Widget to add (chart, task-list, info-panel); repeatable
        #[arg(long = "add", value_name = "TYPE")]
        add: Vec<WidgetType>,
        /// Widget id to remove after adding (e.g. widget-2); repeatable
        #[arg(long = "remove", value_name = "ID")]
        remove: Vec<String>,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: SnapshotFormat,
        /// Screen width in columns (text format)
        #[arg(long, default_value_t = 100)]
        width: u16,
        /// Screen height in rows (text format)
        #[arg(long, default_value_t = 30)]
        height: u16,
    },
}
