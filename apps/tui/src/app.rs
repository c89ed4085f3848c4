//! Core TUI application state and event loop.

use std::io;
use std::time::Duration;

use catalogdash_core::{DashboardConfig, DashboardRun, SilentProgress, build_report, run_dashboard};
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use tracing::{error, info};

use crate::screens::ScreenId;
use crate::widgets::status_bar;

/// Application state.
pub(crate) struct App {
    /// Currently active screen tab.
    pub active_tab: usize,
    /// Available screens.
    pub screens: Vec<ScreenId>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Status message shown in bottom bar.
    pub status: String,
    /// Whether help overlay is visible.
    pub show_help: bool,
    /// First visible row of the active screen.
    pub scroll: usize,
    /// Where and how the catalog is loaded.
    config: DashboardConfig,
    /// Last successful computation.
    run: Option<DashboardRun>,
    /// Last load or aggregation failure.
    failure: Option<String>,
}

impl App {
    pub(crate) fn new(config: DashboardConfig) -> Self {
        Self {
            active_tab: 0,
            screens: ScreenId::ALL.to_vec(),
            should_quit: false,
            status: "Ready — press ? for help".to_string(),
            show_help: false,
            scroll: 0,
            config,
            run: None,
            failure: None,
        }
    }

    fn current_screen(&self) -> ScreenId {
        self.screens[self.active_tab]
    }

    fn select(&mut self, idx: usize) {
        self.active_tab = idx;
        self.scroll = 0;
        self.status = format!("{}", self.screens[idx]);
    }

    /// Load the catalog and compute the report.
    pub(crate) fn load(&mut self) {
        match run_dashboard(&self.config, &SilentProgress) {
            Ok(run) => {
                self.status = format!(
                    "Loaded {} titles from {} in {:.2}s — press ? for help",
                    run.catalog.len(),
                    run.report.source,
                    run.elapsed.as_secs_f64()
                );
                self.run = Some(run);
                self.failure = None;
            }
            Err(e) => {
                error!(error = %e, "dashboard load failed");
                self.status = "Load failed — press r to retry".to_string();
                self.failure = Some(e.to_string());
            }
        }
    }

    /// Recompute the report from the loaded catalog, or retry a failed load.
    fn recompute(&mut self) {
        let Some(run) = self.run.as_mut() else {
            self.load();
            return;
        };

        match build_report(&run.catalog, &self.config.report) {
            Ok(report) => {
                info!(titles = report.registered_count, "report recomputed");
                run.report = report;
                self.status = "Report recomputed.".to_string();
            }
            Err(e) => {
                error!(error = %e, "recompute failed");
                self.status = format!("Recompute failed: {e}");
            }
        }
    }

    fn scroll_limit(&self) -> usize {
        self.run
            .as_ref()
            .map(|run| self.current_screen().rows(&run.report).saturating_sub(1))
            .unwrap_or(0)
    }
}

/// Entry point — sets up terminal, runs event loop, restores terminal.
pub(crate) fn run(config: DashboardConfig) -> Result<()> {
    let mut app = App::new(config);
    app.load();

    // Setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        // Poll for events with 100ms timeout for responsive UI
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Global keybindings (always active)
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        _ => {}
    }

    // If help is showing, consume any key to dismiss
    if app.show_help {
        app.show_help = false;
        return;
    }

    match code {
        // Tab navigation with number keys
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            if idx < app.screens.len() {
                app.select(idx);
            }
        }
        KeyCode::Tab => {
            app.select((app.active_tab + 1) % app.screens.len());
        }
        KeyCode::BackTab => {
            let idx = if app.active_tab == 0 {
                app.screens.len() - 1
            } else {
                app.active_tab - 1
            };
            app.select(idx);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll = app.scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.scroll < app.scroll_limit() {
                app.scroll += 1;
            }
        }
        KeyCode::Char('r') => app.recompute(),
        _ => {}
    }
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Tab bar
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Tab bar
    let tab_titles: Vec<Line> = app
        .screens
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("{} {s}", i + 1)))
        .collect();

    let tabs = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Catalog Dashboard "),
        )
        .select(app.active_tab)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, chunks[0]);

    // Content area — delegate to screen
    match (&app.run, &app.failure) {
        (_, Some(message)) => draw_failure(f, chunks[1], message),
        (Some(run), None) => app
            .current_screen()
            .draw(f, chunks[1], &run.report, app.scroll),
        (None, None) => {
            let waiting = Paragraph::new("Loading catalog...").alignment(Alignment::Center);
            f.render_widget(waiting, chunks[1]);
        }
    }

    // Status bar
    let bar = status_bar(&app.status);
    f.render_widget(bar, chunks[2]);

    // Help overlay
    if app.show_help {
        draw_help_overlay(f);
    }
}

fn draw_failure(f: &mut Frame, area: Rect, message: &str) {
    let text = vec![
        Line::from("Could not build the dashboard.")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Fix the data file or config, then press r to retry."),
    ];

    let panel = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Error "));
    f.render_widget(panel, area.inner(Margin::new(1, 1)));
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from("Keybindings").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("  1-5          Switch to screen"),
        Line::from("  Tab/S-Tab    Next/previous screen"),
        Line::from("  ↑/↓          Scroll tables and charts"),
        Line::from("  r            Recompute (retry a failed load)"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl-C   Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help — press any key to close ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    // Clear background
    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(help, area);
}

/// Create a centered rectangle with percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
