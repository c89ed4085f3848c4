//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use catalogdash_core::{DashboardConfig, DashboardRun, ProgressReporter, run_dashboard};
use catalogdash_loader::{EXPECTED_COLUMNS, LoadOptions, load_catalog_with, missing_columns};
use catalogdash_render::{HtmlOptions, render_json, render_markdown, render_text, write_html};
use catalogdash_shared::{AppConfig, ReportOptions, init_config, load_config, load_config_from};
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// catalogdash — descriptive analytics for a streaming catalog.
#[derive(Parser)]
#[command(
    name = "catalogdash",
    version,
    about = "Compute and render dashboard aggregates for a streaming catalog CSV.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.catalogdash/catalogdash.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Output format of the `report` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ReportFormat {
    Text,
    Markdown,
    Json,
}

/// Where to read the catalog from.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct DataArgs {
    /// Catalog CSV path (overrides `[data].path`).
    #[arg(short, long, env = "CATALOGDASH_DATA")]
    pub data: Option<PathBuf>,

    /// Field delimiter (overrides `[data].delimiter`).
    #[arg(long)]
    pub delimiter: Option<char>,
}

/// Aggregation overrides shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ReportArgs {
    /// Ranking positions for the top-directors table.
    #[arg(long)]
    pub top: Option<usize>,

    /// Bucket width in years for the short-runtime trend.
    #[arg(long)]
    pub period: Option<i32>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the dashboard aggregates.
    Report {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        report: ReportArgs,

        /// Output format.
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },

    /// Write the dashboard as a static HTML page.
    Export {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        report: ReportArgs,

        /// Output HTML file.
        #[arg(short, long, default_value = "dashboard.html")]
        out: PathBuf,

        /// Page title.
        #[arg(long)]
        title: Option<String>,
    },

    /// List the columns of the catalog file.
    Columns {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so report output
/// on stdout stays machine-readable.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "catalogdash=info",
        1 => "catalogdash=debug",
        _ => "catalogdash=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Command::Report {
            data,
            report,
            format,
        } => cmd_report(&config, &data, &report, format),
        Command::Export {
            data,
            report,
            out,
            title,
        } => cmd_export(&config, &data, &report, &out, title),
        Command::Columns { data } => cmd_columns(&config, &data),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(p) => load_config_from(p)?,
        None => load_config()?,
    };
    Ok(config)
}

/// Merge config file values with CLI flags (flags win).
pub(crate) fn dashboard_config(
    config: &AppConfig,
    data: &DataArgs,
    report: &ReportArgs,
) -> Result<DashboardConfig> {
    let data_path = data
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.path));
    let load = LoadOptions::with_delimiter(data.delimiter.unwrap_or(config.data.delimiter))?;

    let mut options = ReportOptions::from(config);
    if let Some(top) = report.top {
        options.top_n = top;
    }
    if let Some(period) = report.period {
        options.trend.period_years = period;
    }

    Ok(DashboardConfig {
        data_path,
        load,
        report: options,
    })
}

fn compute(config: &AppConfig, data: &DataArgs, report: &ReportArgs) -> Result<DashboardRun> {
    let dashboard = dashboard_config(config, data, report)?;
    info!(path = %dashboard.data_path.display(), "building dashboard");

    let progress = CliProgress::new();
    let run = run_dashboard(&dashboard, &progress).wrap_err_with(|| {
        format!(
            "could not build dashboard from '{}'",
            dashboard.data_path.display()
        )
    });
    progress.finish();
    run
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner on stderr.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, run: &DashboardRun) {
        self.spinner.set_message(format!(
            "Computed {} titles in {:.2}s",
            run.catalog.len(),
            run.elapsed.as_secs_f64()
        ));
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_report(
    config: &AppConfig,
    data: &DataArgs,
    report: &ReportArgs,
    format: ReportFormat,
) -> Result<()> {
    let run = compute(config, data, report)?;

    let output = match format {
        ReportFormat::Text => render_text(&run.report),
        ReportFormat::Markdown => render_markdown(&run.report),
        ReportFormat::Json => render_json(&run.report)?,
    };
    println!("{output}");

    Ok(())
}

fn cmd_export(
    config: &AppConfig,
    data: &DataArgs,
    report: &ReportArgs,
    out: &Path,
    title: Option<String>,
) -> Result<()> {
    let run = compute(config, data, report)?;

    let mut opts = HtmlOptions::default();
    if let Some(title) = title {
        opts.title = title;
    }
    write_html(out, &run.report, &opts)?;

    println!();
    println!("  Dashboard exported!");
    println!("  Titles:  {}", run.report.registered_count);
    println!("  Source:  {}", run.report.source);
    println!("  Path:    {}", out.display());
    println!("  Time:    {:.2}s", run.elapsed.as_secs_f64());
    println!();

    Ok(())
}

fn cmd_columns(config: &AppConfig, data: &DataArgs) -> Result<()> {
    let dashboard = dashboard_config(config, data, &ReportArgs::default())?;
    let catalog = load_catalog_with(&dashboard.data_path, &dashboard.load)?;

    println!("The dataset columns are:\n");
    for column in catalog.columns() {
        let marker = if EXPECTED_COLUMNS.contains(&column.as_str()) {
            ""
        } else {
            "  (unused)"
        };
        println!("- {column};{marker}");
    }

    let missing = missing_columns(catalog.columns());
    if !missing.is_empty() {
        println!("\nMissing expected columns: {}", missing.join(", "));
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_report_flags() {
        let cli = Cli::try_parse_from([
            "catalogdash",
            "report",
            "--data",
            "titles.csv",
            "--format",
            "json",
            "--top",
            "3",
        ])
        .expect("parse");

        match cli.command {
            Command::Report {
                data,
                report,
                format,
            } => {
                assert_eq!(data.data, Some(PathBuf::from("titles.csv")));
                assert_eq!(report.top, Some(3));
                assert_eq!(format, ReportFormat::Json);
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn flags_override_config() {
        let config = AppConfig::default();
        let data = DataArgs {
            data: Some(PathBuf::from("other.tsv")),
            delimiter: Some('\t'),
        };
        let report = ReportArgs {
            top: Some(10),
            period: Some(10),
        };

        let merged = dashboard_config(&config, &data, &report).expect("merge");
        assert_eq!(merged.data_path, PathBuf::from("other.tsv"));
        assert_eq!(merged.load.delimiter, b'\t');
        assert_eq!(merged.report.top_n, 10);
        assert_eq!(merged.report.trend.period_years, 10);
        assert_eq!(merged.report.trend.start_year, 2000);
    }

    #[test]
    fn config_supplies_defaults() {
        let merged = dashboard_config(&AppConfig::default(), &DataArgs::default(), &ReportArgs::default())
            .expect("merge");
        assert_eq!(merged.data_path, PathBuf::from("data/netflix_titles.csv"));
        assert_eq!(merged.report, ReportOptions::default());
    }

    #[test]
    fn export_writes_fixture_dashboard() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("dashboard.html");
        let data = DataArgs {
            data: Some(
                PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                    .join("../../fixtures/csv/catalog.fixture.csv"),
            ),
            delimiter: None,
        };

        cmd_export(&AppConfig::default(), &data, &ReportArgs::default(), &out, None)
            .expect("export");

        let html = std::fs::read_to_string(&out).expect("read");
        assert!(html.contains("Kirsten Johnson"));
    }
}
