//! Markdown rendering of a dashboard report, for pasting into notes or PRs.

use catalogdash_shared::{DashboardReport, GroupCount};

use crate::bars::{long_date, ordinal, share};

/// Render `report` as a Markdown document with one table per panel.
pub fn render_markdown(report: &DashboardReport) -> String {
    let mut out = String::from("# Catalog dashboard\n\n");
    out.push_str(&format!("Source: `{}`\n\n", report.source));

    out.push_str("## General metrics\n\n");
    out.push_str("| Metric | Value |\n");
    out.push_str("|---|---|\n");
    out.push_str(&format!("| Registered titles | {} |\n", report.registered_count));
    for (label, added) in [
        ("Last title added", &report.latest_added),
        ("First title added", &report.earliest_added),
    ] {
        let value = added
            .as_ref()
            .map(|a| {
                format!(
                    "{} ({})",
                    cell(a.title.as_deref().unwrap_or("untitled")),
                    long_date(a.added)
                )
            })
            .unwrap_or_else(|| "—".to_string());
        out.push_str(&format!("| {label} | {value} |\n"));
    }

    year_table(&mut out, "Titles by release year", &report.by_release_year);
    year_table(&mut out, "Titles by year added", &report.by_added_year);
    share_table(&mut out, "Titles by type", "Type", &report.by_type);
    share_table(&mut out, "Titles by rating", "Rating", &report.by_rating);

    out.push_str("\n## Top directors\n\n");
    out.push_str("| Rank | Directors | Titles |\n");
    out.push_str("|---|---|---:|\n");
    for group in &report.top_directors {
        let names: Vec<String> = group.directors.iter().map(|d| cell(d)).collect();
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            ordinal(group.rank),
            names.join(", "),
            group.credits
        ));
    }

    out.push_str("\n## Directors who acted in their own titles\n\n");
    if report.directors_who_acted.is_empty() {
        out.push_str("_None._\n");
    }
    for name in &report.directors_who_acted {
        out.push_str(&format!("- {name}\n"));
    }

    out.push_str("\n## Share of short movies by release period\n\n");
    out.push_str("| Period | Short movies |\n");
    out.push_str("|---|---:|\n");
    for point in &report.short_runtime_trend {
        out.push_str(&format!("| {} | {:.2}% |\n", point.label, point.percentage));
    }

    out
}

fn year_table(out: &mut String, title: &str, counts: &[GroupCount<i32>]) {
    out.push_str(&format!("\n## {title}\n\n"));
    out.push_str("| Year | Titles |\n");
    out.push_str("|---|---:|\n");
    for c in counts {
        out.push_str(&format!("| {} | {} |\n", c.key, c.count));
    }
}

fn share_table(out: &mut String, title: &str, column: &str, counts: &[GroupCount<String>]) {
    let total: usize = counts.iter().map(|c| c.count).sum();
    out.push_str(&format!("\n## {title}\n\n"));
    out.push_str(&format!("| {column} | Titles | Share |\n"));
    out.push_str("|---|---:|---:|\n");
    for c in counts {
        out.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            cell(&c.key),
            c.count,
            share(c.count, total)
        ));
    }
}

/// Escape pipes so dataset text cannot break a table row.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
