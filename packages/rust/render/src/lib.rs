//! Presentation layer for catalogdash.
//!
//! Renderers only read a finished [`DashboardReport`]; nothing here touches
//! the catalog or recomputes an aggregate.

mod bars;
mod html;
mod markdown;
mod text;

use std::path::Path;

use tracing::{debug, instrument};

use catalogdash_shared::{CatalogError, DashboardReport, Result};

pub use bars::{long_date, ordinal, share, titles};
pub use html::{HtmlOptions, render_html};
pub use markdown::render_markdown;
pub use text::{added_label, render_text};

/// Pretty-printed JSON of the full report.
pub fn render_json(report: &DashboardReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| CatalogError::Render(format!("JSON serialization failed: {e}")))
}

/// Render the HTML page and write it to `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_html(path: &Path, report: &DashboardReport, opts: &HtmlOptions) -> Result<()> {
    let html = render_html(report, opts);
    write_atomic(path, &html)
}

/// Write `content` to `path` through a temp file and rename, so readers never
/// see a half-written file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| CatalogError::Render(format!("{} is not a file path", path.display())))?;
    let temp = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    std::fs::write(&temp, content).map_err(|e| CatalogError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| CatalogError::io(path, e))?;

    debug!(path = %path.display(), size = content.len(), "wrote file");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::sample_report;

    #[test]
    fn json_roundtrip() {
        let report = sample_report();
        let json = render_json(&report).expect("json");
        assert!(json.contains("\"registered_count\": 9"));
        let parsed: DashboardReport = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn write_html_is_atomic() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("dashboard.html");

        write_html(&path, &sample_report(), &HtmlOptions::default()).expect("write");

        let written = std::fs::read_to_string(&path).expect("read");
        assert!(written.contains("Kirsten Johnson"));
        for entry in std::fs::read_dir(path.parent().expect("parent")).expect("read_dir") {
            let name = entry.expect("entry").file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }
    }

    #[test]
    fn write_atomic_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        write_atomic(&path, "first").expect("first write");
        write_atomic(&path, "second").expect("second write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "second");
    }
}
