//! Share of short-runtime movies per multi-year release period.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use catalogdash_shared::{Catalog, CatalogError, Result, TrendOptions, TrendPoint};

use crate::normalize::movie_runtimes;

/// Short and total feature counts for one release year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct YearTally {
    short: usize,
    total: usize,
}

/// Percentage of short movies per bucket of release years.
///
/// Only movies longer than `min_runtime_minutes` are counted; of those, the
/// ones at or below `short_runtime_max_minutes` are short. Each release year
/// yields a short/total ratio, and a bucket's value is the plain mean of its
/// yearly ratios. Years without any short movie carry no ratio.
#[instrument(skip_all, fields(period = opts.period_years, start_year = opts.start_year))]
pub fn short_runtime_trend(catalog: &Catalog, opts: &TrendOptions) -> Result<Vec<TrendPoint>> {
    if opts.period_years < 1 {
        return Err(CatalogError::validation(format!(
            "trend period must be at least one year, got {}",
            opts.period_years
        )));
    }

    let mut years: BTreeMap<i32, YearTally> = BTreeMap::new();
    for movie in movie_runtimes(catalog)? {
        let Some(year) = movie.release_year else {
            continue;
        };
        if movie.minutes <= opts.min_runtime_minutes {
            continue;
        }
        let tally = years.entry(year).or_default();
        tally.total += 1;
        if movie.minutes <= opts.short_runtime_max_minutes {
            tally.short += 1;
        }
    }

    let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for (year, tally) in &years {
        if tally.short == 0 {
            continue;
        }
        let start = bucket_start(*year, opts.period_years);
        buckets
            .entry(start)
            .or_default()
            .push(tally.short as f64 / tally.total as f64);
    }

    let mut points: Vec<TrendPoint> = buckets
        .into_iter()
        .filter(|(start, _)| *start >= i64::from(opts.start_year))
        .map(|(start, ratios)| {
            let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
            TrendPoint {
                label: format!("{start}-{}", start + i64::from(opts.period_years)),
                bucket_start: start,
                percentage: round_to_hundredths(mean * 100.0),
                years: ratios.len(),
            }
        })
        .collect();

    if let (Some(label), Some(last)) = (&opts.final_bucket_label, points.last_mut()) {
        last.label = label.clone();
    }

    debug!(
        release_years = years.len(),
        buckets = points.len(),
        "computed short-runtime trend"
    );
    Ok(points)
}

/// First year of the period containing `year` (floor division).
///
/// Widened to `i64` so buckets at the ends of the `i32` range stay exact.
pub fn bucket_start(year: i32, period: i32) -> i64 {
    let period = i64::from(period);
    i64::from(year).div_euclid(period) * period
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
