//! Static HTML dashboard page.
//!
//! Produces one self-contained document (inline CSS, no scripts). Charts are
//! CSS bars sized by percentage, so the page renders without network access.
//! Markup is built with `maud`, which escapes every interpolated value.

use catalogdash_shared::{DashboardReport, GroupCount};
use maud::{DOCTYPE, Markup, html};

use crate::bars::{ordinal, share, titles};
use crate::text::added_label;

/// Options for the HTML page.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Page and header title.
    pub title: String,
    /// Bar color (any CSS color).
    pub accent: String,
    /// Divider color between panel rows.
    pub divider: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Catalog Dashboard".into(),
            accent: "#3B738F".into(),
            divider: "#73B3A6".into(),
        }
    }
}

/// Render `report` as a complete HTML document.
pub fn render_html(report: &DashboardReport, opts: &HtmlOptions) -> String {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (opts.title) }
                style { (stylesheet(opts)) }
            }
            body {
                header {
                    h1 { (opts.title) }
                    p.muted { (report.source) }
                }
                main {
                    section.row.metrics {
                        (metric("Registered titles", &report.registered_count.to_string()))
                        (metric("Last title added", &added_label(report.latest_added.as_ref())))
                        (metric("First title added", &added_label(report.earliest_added.as_ref())))
                    }
                    hr;
                    section.row {
                        (year_chart("Titles by release year", &report.by_release_year))
                        (year_chart("Titles by year added", &report.by_added_year))
                    }
                    hr;
                    section.row {
                        (share_chart("Titles by type", &report.by_type))
                        (share_chart("Titles by rating", &report.by_rating))
                    }
                    hr;
                    section.row {
                        div.panel {
                            h3 { "Top directors" }
                            ol.ranks {
                                @for group in &report.top_directors {
                                    li {
                                        span.rank { (ordinal(group.rank)) }
                                        " " (group.directors.join(", ")) " "
                                        span.muted { "(" (titles(group.credits)) ")" }
                                    }
                                }
                            }
                        }
                        div.panel {
                            h3 { "Directors who acted in their own titles" }
                            ul.names {
                                @for name in &report.directors_who_acted {
                                    li { (name) }
                                }
                            }
                        }
                    }
                    hr;
                    section.row {
                        div.panel.wide {
                            h3 { "Share of short movies by release period" }
                            @for point in &report.short_runtime_trend {
                                (bar_row(
                                    &point.label,
                                    point.percentage.clamp(0.0, 100.0),
                                    &format!("{:.2}%", point.percentage),
                                ))
                            }
                        }
                    }
                }
            }
        }
    };

    page.into_string()
}

fn stylesheet(opts: &HtmlOptions) -> String {
    format!(
        "body {{ font-family: system-ui, sans-serif; margin: 2rem; color: #1f2d33; }}\n\
         .row {{ display: flex; gap: 2rem; flex-wrap: wrap; }}\n\
         .panel, .metric {{ flex: 1 1 320px; }}\n\
         .wide {{ flex-basis: 100%; }}\n\
         .metric .value {{ font-size: 1.6rem; font-weight: 600; }}\n\
         .bar-row {{ display: flex; align-items: center; gap: .5rem; margin: 2px 0; }}\n\
         .bar-label {{ width: 7rem; text-align: right; font-size: .85rem; }}\n\
         .bar-track {{ flex: 1; background: #eef3f5; height: 1rem; }}\n\
         .bar {{ background: {accent}; height: 100%; }}\n\
         .bar-value {{ width: 6rem; font-size: .85rem; }}\n\
         .muted {{ color: #6b7c85; }}\n\
         .rank {{ font-weight: 600; }}\n\
         hr {{ border: 1px solid {divider}; margin: 1.5rem 0; }}\n",
        accent = opts.accent,
        divider = opts.divider,
    )
}

fn metric(label: &str, value: &str) -> Markup {
    html! {
        div.metric {
            h5 { (label) }
            div.value { (value) }
        }
    }
}

fn bar_row(label: &str, percent: f64, value: &str) -> Markup {
    html! {
        div.bar-row {
            span.bar-label { (label) }
            div.bar-track {
                div.bar style=(format!("width: {percent:.2}%")) {}
            }
            span.bar-value { (value) }
        }
    }
}

fn year_chart(title: &str, counts: &[GroupCount<i32>]) -> Markup {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    html! {
        div.panel {
            h3 { (title) }
            @for c in counts {
                (bar_row(&c.key.to_string(), share(c.count, max), &c.count.to_string()))
            }
        }
    }
}

fn share_chart(title: &str, counts: &[GroupCount<String>]) -> Markup {
    let total: usize = counts.iter().map(|c| c.count).sum();
    html! {
        div.panel {
            h3 { (title) }
            @for c in counts {
                @let pct = share(c.count, total);
                (bar_row(&c.key, pct, &format!("{} ({pct:.1}%)", c.count)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn html_is_complete_document() {
        let html = render_html(&sample_report(), &HtmlOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<title>Catalog Dashboard</title>"));
        assert!(html.contains("#3B738F"));
        assert!(html.contains("Registered titles"));
        assert!(html.contains("2020-2021"));
    }

    #[test]
    fn dataset_text_is_escaped() {
        let mut report = sample_report();
        report.directors_who_acted = vec!["<script>alert(1)</script>".into()];
        report.by_rating[0].key = "R&B".into();
        let html = render_html(&report, &HtmlOptions::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("R&amp;B"));
    }

    #[test]
    fn options_cannot_close_the_style_block() {
        let opts = HtmlOptions {
            title: "Q3 <draft>".into(),
            accent: "red</style><script>x()</script>".into(),
            ..HtmlOptions::default()
        };
        let html = render_html(&sample_report(), &opts);
        assert!(html.contains("<title>Q3 &lt;draft&gt;</title>"));
        assert!(!html.contains("<script>"));
        assert_eq!(html.matches("</style>").count(), 1);
    }

    #[test]
    fn bars_are_scaled_to_max() {
        let html = render_html(&sample_report(), &HtmlOptions::default());
        // The busiest added year fills the track.
        assert!(html.contains("width: 100.00%"));
    }

    #[test]
    fn ties_share_one_list_item() {
        let html = render_html(&sample_report(), &HtmlOptions::default());
        assert!(html.contains("<span class=\"rank\">2nd</span> Jane Doe, Rob Reiner "));
    }
}
