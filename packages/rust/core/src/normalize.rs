//! Per-field normalization of raw catalog text.
//!
//! Multi-valued fields (directors, cast) are exploded into one row per name,
//! `date_added` text is parsed into calendar dates, and durations are turned
//! into movie runtimes. Every function here is a pure read of the catalog.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use catalogdash_shared::{Catalog, CatalogError, Result};

/// Format of the `date_added` column, e.g. "September 25, 2021".
pub const ADDED_DATE_FORMAT: &str = "%B %d, %Y";

/// Token marking a duration as a movie runtime ("90 min").
const MINUTES_TOKEN: &str = "min";

// ---------------------------------------------------------------------------
// Multi-valued names
// ---------------------------------------------------------------------------

/// Split a comma-separated name list into trimmed, non-empty names.
pub fn split_names(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|name| !name.is_empty())
}

/// One director's attribution on one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorCredit<'a> {
    /// Row index of the credited entry.
    pub row: usize,
    pub director: &'a str,
}

/// Explode the `director` column into one credit per (entry, director).
///
/// Entries with a null director contribute nothing.
pub fn director_credits(catalog: &Catalog) -> Vec<DirectorCredit<'_>> {
    catalog
        .iter()
        .enumerate()
        .filter_map(|(row, entry)| entry.director.as_deref().map(|d| (row, d)))
        .flat_map(|(row, directors)| {
            split_names(directors).map(move |director| DirectorCredit { row, director })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Added dates
// ---------------------------------------------------------------------------

/// Parse one `date_added` value, ignoring surrounding whitespace.
pub fn parse_added_date(text: &str) -> Result<NaiveDate> {
    parse_date_text(text).map_err(CatalogError::parse)
}

fn parse_date_text(text: &str) -> std::result::Result<NaiveDate, String> {
    let trimmed = text.trim();
    let date = NaiveDate::parse_from_str(trimmed, ADDED_DATE_FORMAT).map_err(|e| {
        format!("date_added {trimmed:?} does not match \"{ADDED_DATE_FORMAT}\": {e}")
    })?;

    // chrono's %B also accepts "Aug"; only full month names are valid here.
    let month = trimmed.split_whitespace().next().unwrap_or_default();
    if !month.eq_ignore_ascii_case(&date.format("%B").to_string()) {
        return Err(format!(
            "date_added {trimmed:?} does not match \"{ADDED_DATE_FORMAT}\": abbreviated month name"
        ));
    }
    Ok(date)
}

/// Parsed `date_added` of every row, index-aligned with the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedDates(Vec<Option<NaiveDate>>);

impl AddedDates {
    /// Parse every non-null `date_added`. The first malformed value fails the
    /// whole parse; null values stay `None`.
    #[instrument(skip_all, fields(rows = catalog.len()))]
    pub fn parse(catalog: &Catalog) -> Result<Self> {
        let dates = catalog
            .iter()
            .enumerate()
            .map(|(row, entry)| {
                entry
                    .date_added
                    .as_deref()
                    .map(|text| {
                        parse_date_text(text)
                            .map_err(|msg| CatalogError::parse(format!("row {}: {msg}", row + 1)))
                    })
                    .transpose()
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            dated = dates.iter().filter(|d| d.is_some()).count(),
            "parsed added dates"
        );
        Ok(Self(dates))
    }

    /// Date of row `row`, if it had one.
    pub fn get(&self, row: usize) -> Option<NaiveDate> {
        self.0.get(row).copied().flatten()
    }

    /// Iterate `(row, date)` over rows with a date.
    pub fn iter(&self) -> impl Iterator<Item = (usize, NaiveDate)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(row, date)| date.map(|d| (row, d)))
    }
}

// ---------------------------------------------------------------------------
// Runtimes
// ---------------------------------------------------------------------------

/// Runtime in minutes for a movie duration, `None` for anything else.
///
/// "90 min" is 90; "2 Seasons" is `None`. A duration carrying the minutes
/// token without a leading integer is a parse error.
pub fn runtime_minutes(duration: &str) -> Result<Option<u32>> {
    leading_minutes(duration).map_err(CatalogError::parse)
}

fn leading_minutes(duration: &str) -> std::result::Result<Option<u32>, String> {
    if !duration.contains(MINUTES_TOKEN) {
        return Ok(None);
    }

    let leading = duration.split_whitespace().next().unwrap_or_default();
    leading
        .parse::<u32>()
        .map(Some)
        .map_err(|e| format!("duration {duration:?} has no leading minute count: {e}"))
}

/// A catalog entry that has a movie runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieRuntime {
    pub row: usize,
    pub release_year: Option<i32>,
    pub minutes: u32,
}

/// Runtimes of every entry whose duration is in minutes.
///
/// Series (season-denominated) and entries without a duration are skipped.
#[instrument(skip_all, fields(rows = catalog.len()))]
pub fn movie_runtimes(catalog: &Catalog) -> Result<Vec<MovieRuntime>> {
    let mut runtimes = Vec::new();
    for (row, entry) in catalog.iter().enumerate() {
        let Some(duration) = entry.duration.as_deref() else {
            continue;
        };
        let minutes = leading_minutes(duration)
            .map_err(|msg| CatalogError::parse(format!("row {}: {msg}", row + 1)))?;
        if let Some(minutes) = minutes {
            runtimes.push(MovieRuntime {
                row,
                release_year: entry.release_year,
                minutes,
            });
        }
    }

    debug!(movies = runtimes.len(), "extracted movie runtimes");
    Ok(runtimes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogdash_shared::CatalogEntry;

    fn with_director(director: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            show_id: Some("s".into()),
            director: director.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn split_names_trims_and_drops_empty() {
        let names: Vec<&str> = split_names(" A ,B,, C ,").collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn credits_explode_co_directors() {
        let catalog = Catalog::from_entries(vec![
            with_director(Some("A")),
            with_director(Some("A, B")),
            with_director(None),
        ]);

        let credits = director_credits(&catalog);
        assert_eq!(credits.len(), 3);
        assert_eq!(credits[1], DirectorCredit { row: 1, director: "A" });
        assert_eq!(credits[2], DirectorCredit { row: 1, director: "B" });
        assert!(credits.iter().all(|c| c.row != 2));
    }

    #[test]
    fn parses_padded_added_date() {
        let date = parse_added_date("  August 1, 2019 ").expect("parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 8, 1).expect("date"));
    }

    #[test]
    fn abbreviated_month_is_rejected() {
        let err = parse_added_date("Aug 1, 2019").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("abbreviated month name"));

        // Month names are matched without regard to case.
        let date = parse_added_date("AUGUST 1, 2019").expect("parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 8, 1).expect("date"));
    }

    #[test]
    fn malformed_added_date_fails_loudly() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry {
                date_added: Some("September 25, 2021".into()),
                ..Default::default()
            },
            CatalogEntry {
                date_added: Some("2021-09-25".into()),
                ..Default::default()
            },
        ]);

        let err = AddedDates::parse(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("row 2"));
        assert!(err.to_string().contains("2021-09-25"));
    }

    #[test]
    fn null_added_dates_stay_absent() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::default(),
            CatalogEntry {
                date_added: Some("March 5, 2020".into()),
                ..Default::default()
            },
        ]);

        let dates = AddedDates::parse(&catalog).expect("parse");
        assert_eq!(dates.get(0), None);
        assert_eq!(dates.get(1), NaiveDate::from_ymd_opt(2020, 3, 5));
        assert_eq!(dates.iter().count(), 1);
    }

    #[test]
    fn runtime_of_movie_and_series() {
        assert_eq!(runtime_minutes("90 min").expect("movie"), Some(90));
        assert_eq!(runtime_minutes("2 Seasons").expect("series"), None);
        assert_eq!(runtime_minutes("1 Season").expect("series"), None);
    }

    #[test]
    fn runtime_without_leading_number_is_error() {
        assert!(runtime_minutes("about 90 min").is_err());
    }

    #[test]
    fn movie_runtimes_skip_series_and_nulls() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry {
                duration: Some("75 min".into()),
                release_year: Some(2021),
                ..Default::default()
            },
            CatalogEntry {
                duration: Some("3 Seasons".into()),
                ..Default::default()
            },
            CatalogEntry::default(),
        ]);

        let runtimes = movie_runtimes(&catalog).expect("runtimes");
        assert_eq!(
            runtimes,
            vec![MovieRuntime {
                row: 0,
                release_year: Some(2021),
                minutes: 75,
            }]
        );
    }
}
