//! Aggregation pipeline for catalogdash.
//!
//! Every aggregation is a pure function over a loaded [`Catalog`]:
//! normalization of raw fields, counting aggregates, director rankings, and
//! the short-runtime trend. [`pipeline`] ties them into one report.
//!
//! [`Catalog`]: catalogdash_shared::Catalog

pub mod aggregates;
pub mod directors;
pub mod normalize;
pub mod pipeline;
pub mod trend;

pub use pipeline::{
    DashboardConfig, DashboardRun, ProgressReporter, SilentProgress, build_report, run_dashboard,
};
