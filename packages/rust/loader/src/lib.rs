//! Catalog loading.
//!
//! Reads a delimited catalog file with a header row into an owned, immutable
//! [`Catalog`]. Every call produces a fresh copy; nothing is cached or shared
//! between loads.

mod columns;

use std::io::Read;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use catalogdash_shared::{Catalog, CatalogEntry, CatalogError, Result};

pub use columns::{EXPECTED_COLUMNS, missing_columns};

// ---------------------------------------------------------------------------
// Load options
// ---------------------------------------------------------------------------

/// Options for reading a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Single-byte field delimiter.
    pub delimiter: u8,
}

impl LoadOptions {
    /// Build options from a configured delimiter character.
    ///
    /// Only single-byte (ASCII) delimiters are supported.
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(CatalogError::config(format!(
                "delimiter {delimiter:?} is not a single-byte character"
            )));
        }
        Ok(Self {
            delimiter: delimiter as u8,
        })
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Load a comma-separated catalog from `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    load_catalog_with(path, &LoadOptions::default())
}

/// Load a catalog from `path` with explicit options.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog_with(path: &Path, opts: &LoadOptions) -> Result<Catalog> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = load_catalog_from_reader(file, &path.display().to_string(), opts)?;

    info!(
        entries = catalog.len(),
        columns = catalog.columns().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load a catalog from any reader. `source` names the input in errors and in
/// the resulting [`Catalog`].
pub fn load_catalog_from_reader<R: Read>(
    reader: R,
    source: &str,
    opts: &LoadOptions,
) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| CatalogError::load(format!("failed to read header of {source}: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let missing = missing_columns(&columns);
    if !missing.is_empty() {
        warn!(source, ?missing, "catalog is missing expected columns");
    }

    let mut entries = Vec::new();
    for record in reader.deserialize::<CatalogEntry>() {
        let entry = record.map_err(|e| CatalogError::load(format!("failed to read {source}: {e}")))?;
        entries.push(entry);
    }

    debug!(source, rows = entries.len(), "parsed catalog rows");

    Ok(Catalog::new(source, columns, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/csv/catalog.fixture.csv")
    }

    #[test]
    fn loads_fixture() {
        let catalog = load_catalog(&fixture_path()).expect("load fixture");
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.columns().len(), 12);
        assert_eq!(catalog.columns()[0], "show_id");

        let first = &catalog.entries()[0];
        assert_eq!(first.show_id.as_deref(), Some("s1"));
        assert_eq!(first.kind.as_deref(), Some("Movie"));
        assert_eq!(first.release_year, Some(2020));
        assert_eq!(first.cast, None);
    }

    #[test]
    fn empty_cells_are_null_and_padding_is_kept() {
        let catalog = load_catalog(&fixture_path()).expect("load fixture");

        let placeholder = &catalog.entries()[7];
        assert_eq!(placeholder.show_id, None);
        assert_eq!(placeholder.title.as_deref(), Some("Placeholder"));
        assert_eq!(placeholder.release_year, None);

        let padded = &catalog.entries()[3];
        assert_eq!(padded.date_added.as_deref(), Some("  August 1, 2019"));
    }

    #[test]
    fn loading_twice_yields_independent_copies() {
        let first = load_catalog(&fixture_path()).expect("first load");
        let second = load_catalog(&fixture_path()).expect("second load");
        assert_eq!(first, second);

        let mut entries = first.entries().to_vec();
        entries[0].title = Some("changed".into());
        let modified = Catalog::new(first.source(), first.columns().to_vec(), entries);

        assert_ne!(modified, second);
        assert_eq!(second.entries()[0].title.as_deref(), Some("Dick Johnson Is Dead"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn ragged_row_is_load_error() {
        let data = "show_id,title\ns1,One\ns2,Two,extra\n";
        let err = load_catalog_from_reader(data.as_bytes(), "ragged.csv", &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Load { .. }));
        assert!(err.to_string().contains("ragged.csv"));
    }

    #[test]
    fn non_integer_release_year_is_load_error() {
        let data = "show_id,release_year\ns1,twenty\n";
        let err = load_catalog_from_reader(data.as_bytes(), "bad.csv", &LoadOptions::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("load error"));
    }

    #[test]
    fn missing_identifier_column_loads_as_null() {
        let data = "title,type\nAlpha,Movie\nBeta,TV Show\n";
        let catalog =
            load_catalog_from_reader(data.as_bytes(), "no-ids.csv", &LoadOptions::default())
                .expect("load");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.iter().all(|e| e.show_id.is_none()));
        assert_eq!(catalog.entries()[1].kind.as_deref(), Some("TV Show"));
    }

    #[test]
    fn tab_delimited_input() {
        let data = "show_id\ttitle\tduration\ns1\tOne\t90 min\n";
        let opts = LoadOptions::with_delimiter('\t').expect("tab delimiter");
        let catalog = load_catalog_from_reader(data.as_bytes(), "tabs.tsv", &opts).expect("load");
        assert_eq!(catalog.entries()[0].duration.as_deref(), Some("90 min"));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        assert!(LoadOptions::with_delimiter('§').is_err());
    }

    #[test]
    fn file_round_trip_through_tempdir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.csv");
        std::fs::write(&path, "show_id,title\ns1,Only\n").expect("write");

        let catalog = load_catalog(&path).expect("load");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.source(), path.display().to_string());
    }
}
