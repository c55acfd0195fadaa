// src/main.rs — gridboard entry point

use clap::Parser;
use std::path::{Path, PathBuf};

use gridboard::cli::snapshot::{self, SnapshotOptions};
use gridboard::cli::{Cli, Commands};
use gridboard::dashboard::{DashboardController, WidgetId};
use gridboard::infra::config::Config;
use gridboard::infra::{logger, paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(Path::new(path))?
    } else {
        Config::load()?
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let seed = cli.seed.or(config.dashboard.chart_seed);
    let controller = DashboardController::from_options(config.dashboard.seed_defaults, seed);

    match cli.command {
        Some(Commands::Snapshot {
            add,
            remove,
            format,
            width,
            height,
        }) => {
            logger::init_logging(&level);
            let opts = SnapshotOptions {
                add,
                remove: remove.into_iter().map(WidgetId::from).collect(),
                format,
                width,
                height,
            };
            let out = snapshot::run_snapshot(&opts, controller, config)?;
            print!("{out}");
            Ok(())
        }
        None => {
            let log_path = config
                .logging
                .file
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(paths::log_file_path);
            if let Err(e) = logger::init_file_logging(&level, &log_path) {
                eprintln!(
                    "warning: logging disabled, cannot open {}: {e}",
                    log_path.display()
                );
            }
            gridboard::tui::run_dashboard(controller, config)
        }
    }
}
