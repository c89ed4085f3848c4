//! Expected header layout of a catalog file.

/// Columns the aggregations read. Others are carried through untouched.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "date_added",
    "release_year",
    "rating",
    "duration",
];

/// Expected columns absent from `header`.
///
/// Missing columns are not fatal: their values read as null for every row.
pub fn missing_columns(header: &[String]) -> Vec<&'static str> {
    EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|expected| !header.iter().any(|h| h == expected))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_header_has_nothing_missing() {
        let header: Vec<String> = EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect();
        assert!(missing_columns(&header).is_empty());
    }

    #[test]
    fn reports_missing_in_declared_order() {
        let header = vec!["title".to_string(), "cast".to_string()];
        let missing = missing_columns(&header);
        assert_eq!(missing[0], "show_id");
        assert!(missing.contains(&"duration"));
        assert!(!missing.contains(&"cast"));
    }
}
