//! End-to-end dashboard pipeline: file → catalog → report.
//!
//! Loading and aggregation are separate steps: [`build_report`] is a pure
//! function of an already loaded [`Catalog`], and [`run_dashboard`] only adds
//! the load step and progress reporting in front of it.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use catalogdash_loader::{LoadOptions, load_catalog_with};
use catalogdash_shared::{Catalog, DashboardReport, ReportOptions, Result};

use crate::aggregates::{
    count_by_added_year_with, count_by_rating, count_by_release_year, count_by_type,
    earliest_added_with, latest_added_with, registered_count,
};
use crate::directors::{directors_who_acted, top_directors};
use crate::normalize::AddedDates;
use crate::trend::short_runtime_trend;

/// Configuration for [`run_dashboard`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Catalog file to load.
    pub data_path: PathBuf,
    /// How to read the file.
    pub load: LoadOptions,
    /// Aggregation options.
    pub report: ReportOptions,
}

/// Result of [`run_dashboard`].
#[derive(Debug, Clone)]
pub struct DashboardRun {
    /// The loaded catalog, kept so views can recompute without reloading.
    pub catalog: Catalog,
    pub report: DashboardReport,
    /// Load plus aggregation time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, run: &DashboardRun);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _run: &DashboardRun) {}
}

/// Compute every dashboard aggregate over `catalog`.
///
/// Added dates are parsed once and shared by the date-based aggregates; a
/// malformed date fails the whole report.
#[instrument(skip_all, fields(source = catalog.source(), rows = catalog.len()))]
pub fn build_report(catalog: &Catalog, opts: &ReportOptions) -> Result<DashboardReport> {
    let dates = AddedDates::parse(catalog)?;

    let report = DashboardReport {
        source: catalog.source().to_string(),
        registered_count: registered_count(catalog),
        latest_added: latest_added_with(catalog, &dates),
        earliest_added: earliest_added_with(catalog, &dates),
        by_release_year: count_by_release_year(catalog),
        by_added_year: count_by_added_year_with(catalog, &dates),
        by_type: count_by_type(catalog),
        by_rating: count_by_rating(catalog),
        top_directors: top_directors(catalog, opts.top_n),
        directors_who_acted: directors_who_acted(catalog),
        short_runtime_trend: short_runtime_trend(catalog, &opts.trend)?,
    };

    info!(
        registered = report.registered_count,
        director_groups = report.top_directors.len(),
        trend_buckets = report.short_runtime_trend.len(),
        "dashboard report built"
    );
    Ok(report)
}

/// Load the catalog named by `config` and build its report.
///
/// 1. Load the catalog file
/// 2. Compute aggregates
#[instrument(skip_all, fields(path = %config.data_path.display()))]
pub fn run_dashboard(
    config: &DashboardConfig,
    progress: &dyn ProgressReporter,
) -> Result<DashboardRun> {
    let start = Instant::now();

    progress.phase("Loading catalog");
    let catalog = load_catalog_with(&config.data_path, &config.load)?;

    progress.phase("Computing aggregates");
    let report = build_report(&catalog, &config.report)?;

    let run = DashboardRun {
        catalog,
        report,
        elapsed: start.elapsed(),
    };
    progress.done(&run);

    info!(
        elapsed_ms = run.elapsed.as_millis() as u64,
        "dashboard ready"
    );
    Ok(run)
}
