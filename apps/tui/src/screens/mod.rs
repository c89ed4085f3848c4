//! TUI screen definitions.
//!
//! Each screen is one tab of the dashboard. Screens only read the computed
//! [`DashboardReport`]; nothing here aggregates.

mod breakdown;
mod directors;
mod overview;
mod runtime;
mod timeline;

use std::fmt;

use catalogdash_shared::DashboardReport;
use ratatui::prelude::*;

/// Screen identifiers, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScreenId {
    Overview,
    Timeline,
    Breakdown,
    Directors,
    Runtime,
}

impl ScreenId {
    pub(crate) const ALL: [ScreenId; 5] = [
        Self::Overview,
        Self::Timeline,
        Self::Breakdown,
        Self::Directors,
        Self::Runtime,
    ];

    /// Number of scrollable rows this screen shows for `report`.
    pub(crate) fn rows(self, report: &DashboardReport) -> usize {
        match self {
            Self::Overview => 0,
            Self::Timeline => report.by_release_year.len().max(report.by_added_year.len()),
            Self::Breakdown => report.by_type.len().max(report.by_rating.len()),
            Self::Directors => report
                .top_directors
                .iter()
                .map(|group| group.directors.len())
                .sum::<usize>()
                .max(report.directors_who_acted.len()),
            Self::Runtime => report.short_runtime_trend.len(),
        }
    }

    pub(crate) fn draw(self, f: &mut Frame, area: Rect, report: &DashboardReport, scroll: usize) {
        match self {
            Self::Overview => overview::draw(f, area, report),
            Self::Timeline => timeline::draw(f, area, report, scroll),
            Self::Breakdown => breakdown::draw(f, area, report, scroll),
            Self::Directors => directors::draw(f, area, report, scroll),
            Self::Runtime => runtime::draw(f, area, report, scroll),
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overview => write!(f, "Overview"),
            Self::Timeline => write!(f, "Timeline"),
            Self::Breakdown => write!(f, "Breakdown"),
            Self::Directors => write!(f, "Directors"),
            Self::Runtime => write!(f, "Runtime"),
        }
    }
}
