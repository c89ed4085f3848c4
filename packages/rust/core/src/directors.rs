//! Director aggregates: credit ranking with tie expansion, and directors who
//! appear in the cast of their own work.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use catalogdash_shared::{Catalog, RankedDirectors, SelfDirectedWork};

use crate::normalize::{director_credits, split_names};

/// Credits per director, descending by count, then ascending by name.
pub fn credit_counts(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for credit in director_credits(catalog) {
        *counts.entry(credit.director).or_default() += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    // Stable: names stay alphabetical within a count.
    sorted.sort_by_key(|(_, count)| Reverse(*count));
    sorted
}

/// Directors with the most credits, grouped by count.
///
/// The cutoff is the `top_n`-th largest credit count (or the smallest count
/// when fewer directors exist), so every director tied at the cutoff is
/// included and the output can hold more than `top_n` names.
#[instrument(skip_all, fields(top_n = top_n))]
pub fn top_directors(catalog: &Catalog, top_n: usize) -> Vec<RankedDirectors> {
    if top_n == 0 {
        return Vec::new();
    }

    let counts = credit_counts(catalog);
    let Some(threshold) = counts
        .get(top_n - 1)
        .or_else(|| counts.last())
        .map(|(_, count)| *count)
    else {
        return Vec::new();
    };

    let groups = rank_groups(counts.into_iter().take_while(|(_, c)| *c >= threshold));
    debug!(threshold, groups = groups.len(), "ranked directors");
    groups
}

/// Group a count-descending sequence by count and assign positional ranks.
///
/// A rank advances by the size of the group before it: three directors tied
/// first push the next count to rank 4.
fn rank_groups(sorted: impl Iterator<Item = (String, usize)>) -> Vec<RankedDirectors> {
    let mut groups: Vec<RankedDirectors> = Vec::new();

    for (name, credits) in sorted {
        match groups.last_mut() {
            Some(group) if group.credits == credits => group.directors.push(name),
            previous => {
                let rank = previous.map_or(1, |g| g.rank + g.directors.len());
                groups.push(RankedDirectors {
                    rank,
                    directors: vec![name],
                    credits,
                });
            }
        }
    }

    groups
}

/// Rows whose director names occur in their own cast text.
///
/// Matching is substring containment of the trimmed director name, so a
/// short name inside a longer cast name also matches.
pub fn self_directed_works(catalog: &Catalog) -> Vec<SelfDirectedWork> {
    catalog
        .iter()
        .filter_map(|entry| {
            let directors = entry.director.as_deref()?;
            let cast = entry.cast.as_deref()?;

            let matched: Vec<String> = split_names(directors)
                .filter(|name| cast.contains(name))
                .map(str::to_string)
                .collect();

            (!matched.is_empty()).then(|| SelfDirectedWork {
                title: entry.title.clone(),
                directors: matched,
            })
        })
        .collect()
}

/// Unique directors who acted in at least one of their own works, sorted.
#[instrument(skip_all)]
pub fn directors_who_acted(catalog: &Catalog) -> Vec<String> {
    let unique: BTreeSet<String> = self_directed_works(catalog)
        .into_iter()
        .flat_map(|work| work.directors)
        .collect();

    debug!(directors = unique.len(), "found directors who acted");
    unique.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogdash_shared::CatalogEntry;

    fn directed(director: Option<&str>, cast: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            show_id: Some("s".into()),
            title: Some("t".into()),
            director: director.map(String::from),
            cast: cast.map(String::from),
            ..Default::default()
        }
    }

    fn catalog_of(directors: &[&str]) -> Catalog {
        Catalog::from_entries(directors.iter().map(|d| directed(Some(d), None)).collect())
    }

    #[test]
    fn credits_count_once_per_work() {
        let counts = credit_counts(&catalog_of(&["A", "A,B", "B", "C"]));
        assert_eq!(
            counts,
            vec![("A".to_string(), 2), ("B".to_string(), 2), ("C".to_string(), 1)]
        );
    }

    #[test]
    fn top_one_includes_boundary_ties() {
        let top = top_directors(&catalog_of(&["A", "A,B", "B", "C"]), 1);
        assert_eq!(
            top,
            vec![RankedDirectors {
                rank: 1,
                directors: vec!["A".into(), "B".into()],
                credits: 2,
            }]
        );
    }

    #[test]
    fn fewer_directors_than_requested_keeps_all() {
        let top = top_directors(&catalog_of(&["A", "A,B", "B", "C"]), 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].rank, 3);
        assert_eq!(top[1].directors, vec!["C".to_string()]);
    }

    #[test]
    fn rank_jumps_by_group_size() {
        let top = top_directors(
            &catalog_of(&["A", "A", "B", "B", "C", "C", "D", "E", "E", "E"]),
            5,
        );
        let ranks: Vec<(usize, usize)> = top.iter().map(|g| (g.rank, g.credits)).collect();
        assert_eq!(ranks, vec![(1, 3), (2, 2), (5, 1)]);
        assert_eq!(top[1].directors, vec!["A", "B", "C"]);
    }

    #[test]
    fn top_zero_and_empty_catalog() {
        assert!(top_directors(&catalog_of(&["A"]), 0).is_empty());
        assert!(top_directors(&Catalog::default(), 5).is_empty());
    }

    #[test]
    fn null_directors_have_no_credits() {
        let catalog = Catalog::from_entries(vec![directed(None, Some("X")), directed(Some("Y"), None)]);
        assert_eq!(credit_counts(&catalog), vec![("Y".to_string(), 1)]);
    }

    #[test]
    fn matches_director_in_cast() {
        let catalog = Catalog::from_entries(vec![directed(Some("X, Y"), Some("X Smith, Z Jones"))]);
        assert_eq!(directors_who_acted(&catalog), vec!["X".to_string()]);

        let works = self_directed_works(&catalog);
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].directors, vec!["X".to_string()]);
    }

    #[test]
    fn null_director_or_cast_is_excluded() {
        let catalog = Catalog::from_entries(vec![
            directed(None, Some("X Smith")),
            directed(Some("X"), None),
        ]);
        assert!(directors_who_acted(&catalog).is_empty());
    }

    #[test]
    fn acting_directors_are_deduplicated() {
        let catalog = Catalog::from_entries(vec![
            directed(Some("Jane Doe"), Some("Jane Doe, John Roe")),
            directed(Some("Jane Doe, Bob"), Some("Bob, Jane Doe")),
            directed(Some("Nobody"), Some("Someone Else")),
        ]);
        assert_eq!(directors_who_acted(&catalog), vec!["Bob", "Jane Doe"]);
        assert_eq!(self_directed_works(&catalog).len(), 2);
    }

    #[test]
    fn substring_match_also_hits_longer_names() {
        let catalog = Catalog::from_entries(vec![directed(Some("Al"), Some("Albert Finney"))]);
        assert_eq!(directors_who_acted(&catalog), vec!["Al"]);
    }
}
