//! "Runtime" screen — share of short movies per release-year bucket.

use catalogdash_shared::DashboardReport;
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};

use crate::widgets::empty_panel;

const TITLE: &str = "Short movies per release period (%)";

pub(crate) fn draw(f: &mut Frame, area: Rect, report: &DashboardReport, scroll: usize) {
    let area = area.inner(Margin::new(1, 1));

    if report.short_runtime_trend.is_empty() {
        f.render_widget(empty_panel(TITLE, "No movies in range."), area);
        return;
    }

    // Values are hundredths of a percent so the chart keeps two decimals.
    let bars: Vec<Bar> = report
        .short_runtime_trend
        .iter()
        .skip(scroll)
        .map(|point| {
            Bar::default()
                .value((point.percentage * 100.0).round() as u64)
                .label(Line::from(point.label.clone()))
                .text_value(format!("{:.2}", point.percentage))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {TITLE} ")),
        )
        .bar_width(11)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .max(10_000)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}
