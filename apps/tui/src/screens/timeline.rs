//! "Timeline" screen — titles per release year and per year added.

use catalogdash_shared::DashboardReport;
use ratatui::prelude::*;

use crate::widgets::{BarValue, count_chart, empty_panel};

pub(crate) fn draw(f: &mut Frame, area: Rect, report: &DashboardReport, scroll: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let panels = [
        ("Titles by release year", &report.by_release_year, Color::Cyan),
        ("Titles by year added", &report.by_added_year, Color::Green),
    ];

    for ((title, rows, color), chunk) in panels.into_iter().zip(chunks.iter()) {
        if rows.is_empty() {
            f.render_widget(empty_panel(title, "No dated titles."), *chunk);
        } else {
            let chart = count_chart(title, rows, scroll, BarValue::Count, color);
            f.render_widget(chart, *chunk);
        }
    }
}
