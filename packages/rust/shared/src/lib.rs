//! Shared types, error model, and configuration for catalogdash.
//!
//! This crate is the foundation depended on by all other catalogdash crates.
//! It provides:
//! - [`CatalogError`] — the unified error type
//! - Domain types ([`Catalog`], [`CatalogEntry`], [`DashboardReport`] and its parts)
//! - Configuration ([`AppConfig`], [`TrendOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DataConfig, DirectorsConfig, ReportOptions, RuntimeTrendConfig, TrendOptions,
    config_dir, config_file_path, init_config, load_config, load_config_from, write_default_config,
};
pub use error::{CatalogError, Result};
pub use types::{
    AddedTitle, Catalog, CatalogEntry, DashboardReport, GroupCount, RankedDirectors, SelfDirectedWork,
    TrendPoint,
};
