//! Reusable TUI widgets.

use std::fmt::Display;

use catalogdash_render::share;
use catalogdash_shared::GroupCount;
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

/// Bottom status bar.
pub(crate) fn status_bar(msg: &str) -> Paragraph<'_> {
    Paragraph::new(format!(" {msg}"))
        .style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White),
        )
}

/// How the value next to each bar is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BarValue {
    Count,
    /// Count followed by its share of the table total.
    Share,
}

/// Horizontal bar chart of a grouped-count table, starting at row `scroll`.
///
/// Bars are scaled against the whole table so scrolling keeps lengths stable.
pub(crate) fn count_chart<'a, K: Display>(
    title: &str,
    rows: &[GroupCount<K>],
    scroll: usize,
    value: BarValue,
    color: Color,
) -> BarChart<'a> {
    let total: usize = rows.iter().map(|row| row.count).sum();
    let max = rows.iter().map(|row| row.count).max().unwrap_or(0);

    let bars: Vec<Bar> = rows
        .iter()
        .skip(scroll)
        .map(|row| {
            let text = match value {
                BarValue::Count => row.count.to_string(),
                BarValue::Share => format!("{} ({:.1}%)", row.count, share(row.count, total)),
            };
            Bar::default()
                .value(row.count as u64)
                .label(Line::from(row.key.to_string()))
                .text_value(text)
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
        .max(max as u64)
        .data(BarGroup::default().bars(&bars))
}

/// Placeholder shown when a table has no rows.
pub(crate) fn empty_panel<'a>(title: &str, message: &'a str) -> Paragraph<'a> {
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
}
