//! "Overview" screen — general metrics.

use catalogdash_render::{added_label, titles};
use catalogdash_shared::DashboardReport;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub(crate) fn draw(f: &mut Frame, area: Rect, report: &DashboardReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(7), // Metrics
            Constraint::Min(1),    // Headline facts
        ])
        .split(area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let metrics = vec![
        Line::from(vec![
            Span::styled("  Source              ", label),
            Span::raw(report.source.as_str()),
        ]),
        Line::from(vec![
            Span::styled("  Registered titles   ", label),
            Span::styled(report.registered_count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Last title added    ", label),
            Span::raw(added_label(report.latest_added.as_ref())),
        ]),
        Line::from(vec![
            Span::styled("  First title added   ", label),
            Span::raw(added_label(report.earliest_added.as_ref())),
        ]),
    ];

    let panel = Paragraph::new(metrics).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" General metrics "),
    );
    f.render_widget(panel, chunks[0]);

    let mut facts = Vec::new();
    if let Some(top) = report.top_directors.first() {
        facts.push(Line::from(format!(
            "  Most credited director: {} ({})",
            top.directors.join(", "),
            titles(top.credits)
        )));
    }
    if let Some(kind) = report.by_type.iter().max_by_key(|row| row.count) {
        facts.push(Line::from(format!(
            "  Most common type: {} ({})",
            kind.key,
            titles(kind.count)
        )));
    }
    facts.push(Line::from(format!(
        "  Directors who acted in their own work: {}",
        report.directors_who_acted.len()
    )));
    if let Some(last) = report.short_runtime_trend.last() {
        facts.push(Line::from(format!(
            "  Short movies in {}: {:.2}%",
            last.label, last.percentage
        )));
    }

    let highlights = Paragraph::new(facts)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Highlights "));
    f.render_widget(highlights, chunks[1]);
}
