//! "Breakdown" screen — shares by type and by rating.

use catalogdash_shared::DashboardReport;
use ratatui::prelude::*;

use crate::widgets::{BarValue, count_chart, empty_panel};

pub(crate) fn draw(f: &mut Frame, area: Rect, report: &DashboardReport, scroll: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(report.by_type.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    if report.by_type.is_empty() {
        f.render_widget(empty_panel("Titles by type", "No typed titles."), chunks[0]);
    } else {
        let by_type = count_chart(
            "Titles by type",
            &report.by_type,
            0,
            BarValue::Share,
            Color::Magenta,
        );
        f.render_widget(by_type, chunks[0]);
    }

    if report.by_rating.is_empty() {
        f.render_widget(empty_panel("Titles by rating", "No rated titles."), chunks[1]);
    } else {
        let by_rating = count_chart(
            "Titles by rating",
            &report.by_rating,
            scroll,
            BarValue::Share,
            Color::Yellow,
        );
        f.render_widget(by_rating, chunks[1]);
    }
}
