//! Counting aggregates: registered entries, grouped counts, and the
//! earliest/latest added titles.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::instrument;

use catalogdash_shared::{AddedTitle, Catalog, CatalogEntry, GroupCount, Result};

use crate::normalize::AddedDates;

/// Number of entries with a non-null identifier.
pub fn registered_count(catalog: &Catalog) -> usize {
    catalog.iter().filter(|e| e.is_registered()).count()
}

/// Count registered entries per key, ascending by key.
///
/// Entries whose key is `None` are skipped.
pub fn count_registered_by<K, F>(catalog: &Catalog, key: F) -> Vec<GroupCount<K>>
where
    K: Ord,
    F: Fn(&CatalogEntry) -> Option<K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for entry in catalog.iter().filter(|e| e.is_registered()) {
        if let Some(k) = key(entry) {
            *counts.entry(k).or_default() += 1;
        }
    }
    into_group_counts(counts)
}

fn into_group_counts<K>(counts: BTreeMap<K, usize>) -> Vec<GroupCount<K>> {
    counts
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

pub fn count_by_release_year(catalog: &Catalog) -> Vec<GroupCount<i32>> {
    count_registered_by(catalog, |e| e.release_year)
}

pub fn count_by_type(catalog: &Catalog) -> Vec<GroupCount<String>> {
    count_registered_by(catalog, |e| e.kind.clone())
}

pub fn count_by_rating(catalog: &Catalog) -> Vec<GroupCount<String>> {
    count_registered_by(catalog, |e| e.rating.clone())
}

/// Registered entries per year of `date_added`. Fails on malformed dates.
pub fn count_by_added_year(catalog: &Catalog) -> Result<Vec<GroupCount<i32>>> {
    let dates = AddedDates::parse(catalog)?;
    Ok(count_by_added_year_with(catalog, &dates))
}

/// Same as [`count_by_added_year`] over already parsed dates.
pub fn count_by_added_year_with(catalog: &Catalog, dates: &AddedDates) -> Vec<GroupCount<i32>> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for (row, date) in dates.iter() {
        if catalog.entries()[row].is_registered() {
            *counts.entry(date.year()).or_default() += 1;
        }
    }
    into_group_counts(counts)
}

// ---------------------------------------------------------------------------
// Added-date extremes
// ---------------------------------------------------------------------------

/// Title of the most recently added entry. Fails on malformed dates.
pub fn latest_added(catalog: &Catalog) -> Result<Option<AddedTitle>> {
    let dates = AddedDates::parse(catalog)?;
    Ok(latest_added_with(catalog, &dates))
}

/// Title of the earliest added entry. Fails on malformed dates.
pub fn earliest_added(catalog: &Catalog) -> Result<Option<AddedTitle>> {
    let dates = AddedDates::parse(catalog)?;
    Ok(earliest_added_with(catalog, &dates))
}

/// Latest added title over already parsed dates.
///
/// When several rows share the latest date, the first in file order wins.
#[instrument(skip_all)]
pub fn latest_added_with(catalog: &Catalog, dates: &AddedDates) -> Option<AddedTitle> {
    let latest = dates.iter().map(|(_, d)| d).max()?;
    first_added_on(catalog, dates, latest)
}

/// Earliest added title over already parsed dates.
#[instrument(skip_all)]
pub fn earliest_added_with(catalog: &Catalog, dates: &AddedDates) -> Option<AddedTitle> {
    let earliest = dates.iter().map(|(_, d)| d).min()?;
    first_added_on(catalog, dates, earliest)
}

fn first_added_on(catalog: &Catalog, dates: &AddedDates, day: NaiveDate) -> Option<AddedTitle> {
    dates
        .iter()
        .find(|(_, d)| *d == day)
        .map(|(row, added)| AddedTitle {
            title: catalog.entries()[row].title.clone(),
            added,
        })
}
