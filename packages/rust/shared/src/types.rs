//! Core domain types for catalogdash: the catalog row and the derived report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// One row of the source catalog.
///
/// Every column is optional: empty cells and columns absent from the header
/// row both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    /// Catalog identifier. Absence marks a placeholder row.
    pub show_id: Option<String>,
    /// Entry type, e.g. "Movie" or "TV Show".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    /// Comma-separated director names.
    pub director: Option<String>,
    /// Comma-separated cast names.
    pub cast: Option<String>,
    pub country: Option<String>,
    /// Free-text date in the form "Month DD, YYYY", possibly padded.
    pub date_added: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    /// "<N> min" for movies, "<N> Season(s)" for series.
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    pub description: Option<String>,
}

impl CatalogEntry {
    /// Whether the row carries an identifier.
    pub fn is_registered(&self) -> bool {
        self.show_id.is_some()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// An immutable, fully loaded catalog table.
///
/// Entries are only reachable through shared borrows; aggregations never
/// mutate the catalog they read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    source: String,
    columns: Vec<String>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from already parsed parts.
    pub fn new(source: impl Into<String>, columns: Vec<String>, entries: Vec<CatalogEntry>) -> Self {
        Self {
            source: source.into(),
            columns,
            entries,
        }
    }

    /// Build an in-memory catalog with no file behind it.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self::new("<memory>", Vec::new(), entries)
    }

    /// Where the catalog was read from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Header row of the source table, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Report parts
// ---------------------------------------------------------------------------

/// Number of registered entries sharing one group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount<K> {
    pub key: K,
    pub count: usize,
}

/// A group of directors tied on the same credit count, with its display rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedDirectors {
    /// Positional rank (1-based). Advances by the size of the previous group.
    pub rank: usize,
    /// Director names in this group, sorted alphabetically.
    pub directors: Vec<String>,
    /// Credits held by each director in the group.
    pub credits: usize,
}

impl RankedDirectors {
    /// Whether more than one director shares this rank.
    pub fn is_tie(&self) -> bool {
        self.directors.len() > 1
    }
}

/// A work whose director(s) also appear in its cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfDirectedWork {
    pub title: Option<String>,
    /// Directors of this row found in its cast text.
    pub directors: Vec<String>,
}

/// Title of the entry holding an extreme `date_added` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedTitle {
    pub title: Option<String>,
    pub added: NaiveDate,
}

/// Share of short-runtime movies in one multi-year bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Display label, e.g. "2005-2010".
    pub label: String,
    /// First release year of the bucket.
    pub bucket_start: i64,
    /// Mean of the yearly short-runtime ratios, as a percentage (2 decimals).
    pub percentage: f64,
    /// Number of release years averaged into this bucket.
    pub years: usize,
}

// ---------------------------------------------------------------------------
// DashboardReport
// ---------------------------------------------------------------------------

/// Every aggregate the dashboard shows, computed in one pass over a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Where the catalog was loaded from.
    pub source: String,
    pub registered_count: usize,
    pub latest_added: Option<AddedTitle>,
    pub earliest_added: Option<AddedTitle>,
    pub by_release_year: Vec<GroupCount<i32>>,
    pub by_added_year: Vec<GroupCount<i32>>,
    pub by_type: Vec<GroupCount<String>>,
    pub by_rating: Vec<GroupCount<String>>,
    pub top_directors: Vec<RankedDirectors>,
    pub directors_who_acted: Vec<String>,
    pub short_runtime_trend: Vec<TrendPoint>,
}
