//! Plain-text dashboard for terminals.

use catalogdash_shared::{AddedTitle, DashboardReport, GroupCount};

use crate::bars::{long_date, ordinal, share, text_bar, titles};

/// Width of the longest bar, in cells.
const BAR_WIDTH: usize = 40;

/// Render every panel of `report` as plain text.
pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();

    let heading = format!("Catalog dashboard — {}", report.source);
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"═".repeat(heading.chars().count()));
    out.push('\n');

    section(&mut out, "General metrics");
    out.push_str(&format!("  Registered titles   {}\n", report.registered_count));
    out.push_str(&format!(
        "  Last title added    {}\n",
        added_label(report.latest_added.as_ref())
    ));
    out.push_str(&format!(
        "  First title added   {}\n",
        added_label(report.earliest_added.as_ref())
    ));

    section(&mut out, "Titles by release year");
    year_bars(&mut out, &report.by_release_year);

    section(&mut out, "Titles by year added");
    year_bars(&mut out, &report.by_added_year);

    section(&mut out, "Titles by type");
    share_bars(&mut out, &report.by_type);

    section(&mut out, "Titles by rating");
    share_bars(&mut out, &report.by_rating);

    section(&mut out, "Top directors");
    if report.top_directors.is_empty() {
        out.push_str("  (no directors)\n");
    }
    for group in &report.top_directors {
        let names = group.directors.join(", ");
        let who = if group.is_tie() {
            format!("tied: {names}")
        } else {
            names
        };
        out.push_str(&format!(
            "  {:<5} {who} ({})\n",
            ordinal(group.rank),
            titles(group.credits)
        ));
    }

    section(&mut out, "Directors who acted in their own titles");
    if report.directors_who_acted.is_empty() {
        out.push_str("  (none)\n");
    }
    for name in &report.directors_who_acted {
        out.push_str(&format!("  - {name}\n"));
    }

    section(&mut out, "Share of short movies by release period");
    if report.short_runtime_trend.is_empty() {
        out.push_str("  (no data)\n");
    }
    for point in &report.short_runtime_trend {
        let cells = text_bar(point.percentage.round() as usize, 100, BAR_WIDTH);
        out.push_str(&format!("  {:<10} {cells} {:.2}%\n", point.label, point.percentage));
    }

    out
}

/// "Title (Month D, YYYY)" or a dash when absent.
pub fn added_label(added: Option<&AddedTitle>) -> String {
    match added {
        Some(a) => format!(
            "{} ({})",
            a.title.as_deref().unwrap_or("untitled"),
            long_date(a.added)
        ),
        None => "—".to_string(),
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{title}\n"));
    out.push_str(&"─".repeat(title.chars().count()));
    out.push('\n');
}

fn year_bars(out: &mut String, counts: &[GroupCount<i32>]) {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    if max == 0 {
        out.push_str("  (no data)\n");
        return;
    }
    for c in counts {
        out.push_str(&format!(
            "  {:>4} {} {}\n",
            c.key,
            text_bar(c.count, max, BAR_WIDTH),
            c.count
        ));
    }
}

fn share_bars(out: &mut String, counts: &[GroupCount<String>]) {
    let total: usize = counts.iter().map(|c| c.count).sum();
    let width = counts.iter().map(|c| c.key.chars().count()).max().unwrap_or(0);
    if total == 0 {
        out.push_str("  (no data)\n");
        return;
    }
    for c in counts {
        out.push_str(&format!(
            "  {:<width$} {} {} ({:.1}%)\n",
            c.key,
            text_bar(c.count, total, BAR_WIDTH),
            c.count,
            share(c.count, total),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn text_has_every_panel() {
        let text = render_text(&sample_report());
        for heading in [
            "General metrics",
            "Titles by release year",
            "Titles by year added",
            "Titles by type",
            "Titles by rating",
            "Top directors",
            "Directors who acted in their own titles",
            "Share of short movies by release period",
        ] {
            assert!(text.contains(heading), "missing panel {heading}");
        }
    }

    #[test]
    fn text_shows_metrics_and_ties() {
        let text = render_text(&sample_report());
        assert!(text.contains("Registered titles   9"));
        assert!(text.contains("Dick Johnson Is Dead (September 25, 2021)"));
        assert!(text.contains("2nd   tied: Jane Doe, Rob Reiner (2 titles)"));
        assert!(text.contains("4th   Mike Flanagan (1 title)"));
        assert!(text.contains("2020-2021"));
        assert!(text.contains("50.00%"));
    }

    #[test]
    fn empty_report_renders_placeholders() {
        let mut report = sample_report();
        report.latest_added = None;
        report.top_directors.clear();
        report.by_type.clear();
        let text = render_text(&report);
        assert!(text.contains("Last title added    —"));
        assert!(text.contains("(no directors)"));
        assert!(text.contains("(no data)"));
    }
}
