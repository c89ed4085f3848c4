//! "Directors" screen — ranked directors and directors who acted.

use catalogdash_render::{ordinal, titles};
use catalogdash_shared::DashboardReport;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Row, Table};

pub(crate) fn draw(f: &mut Frame, area: Rect, report: &DashboardReport, scroll: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    // One row per director; tied names repeat the group's rank.
    let rows: Vec<Row> = report
        .top_directors
        .iter()
        .flat_map(|group| {
            let rank = if group.is_tie() {
                format!("{} (tie)", ordinal(group.rank))
            } else {
                ordinal(group.rank)
            };
            group.directors.iter().map(move |name| {
                Row::new(vec![rank.clone(), name.clone(), titles(group.credits)])
            })
        })
        .skip(scroll)
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Rank", "Director", "Credits"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top directors "),
    );
    f.render_widget(table, chunks[0]);

    let items: Vec<ListItem> = report
        .directors_who_acted
        .iter()
        .skip(scroll)
        .map(|name| ListItem::new(format!("  {name}")))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Directors who acted ({}) ",
                report.directors_who_acted.len()
            )),
    );
    f.render_widget(list, chunks[1]);
}
