//! catalogdash TUI — interactive terminal dashboard for a streaming catalog.
//!
//! Loads the catalog once, then shows the computed aggregates across five
//! tabs, built with `ratatui` + `crossterm`.

mod app;
mod screens;
mod widgets;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use catalogdash_core::DashboardConfig;
use catalogdash_loader::LoadOptions;
use catalogdash_shared::{ReportOptions, config_dir, load_config, load_config_from};
use clap::Parser;
use color_eyre::eyre::Result;

/// Interactive catalog dashboard.
#[derive(Parser)]
#[command(name = "catalogdash-tui", version, long_about = None)]
struct Args {
    /// Catalog CSV path (overrides `[data].path`).
    #[arg(short, long, env = "CATALOGDASH_DATA")]
    data: Option<PathBuf>,

    /// Config file to use instead of ~/.catalogdash/catalogdash.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_file_tracing();

    let config = match args.config.as_deref() {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let dashboard = DashboardConfig {
        data_path: args
            .data
            .unwrap_or_else(|| PathBuf::from(&config.data.path)),
        load: LoadOptions::with_delimiter(config.data.delimiter)?,
        report: ReportOptions::from(&config),
    };

    app::run(dashboard)
}

/// Route logs to `~/.catalogdash/catalogdash-tui.log`; the alternate screen
/// owns stdout. Logging is skipped when the file cannot be opened.
fn init_file_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let Ok(dir) = config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("catalogdash-tui.log"))
    else {
        return;
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalogdash=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}
