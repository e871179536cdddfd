//! Play command implementation - interactive TUI board.

// Board geometry uses intentional casts between terminal cells and counts
#![allow(clippy::cast_possible_truncation, clippy::needless_pass_by_value)]

use super::{CliError, GameOptions, Setup};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use scramble::board::layout_rows;
use scramble::config::TeamNames;
use scramble::report::render_stats;
use scramble::{ClaimState, GameSession, ScoreReport, Team};
use std::io::stdout;
use std::time::Duration;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if setup or the TUI fails.
pub(crate) fn execute(options: &GameOptions) -> Result<(), CliError> {
    let Setup { session, names } = options.setup()?;
    if session.registry().is_empty() {
        return Err(CliError::new("No towns to play on"));
    }

    let app = App::new(session, names);
    let (app, exit) = run_tui(app)?;

    if exit == Exit::EndGame {
        let names = app.names;
        let report = app.session.on_end_game_requested()?;
        print!("{}", render_stats(&report, &names));
    }
    Ok(())
}

/// How the board was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    /// "End Game": print the final stats.
    EndGame,
    /// Quit without stats.
    Quit,
}

/// App state for the TUI.
struct App {
    session: GameSession,
    names: TeamNames,
    /// Region ids in board rows.
    rows: Vec<Vec<String>>,
    cursor: (usize, usize),
    /// Stats popup contents while open.
    stats: Option<ScoreReport>,
    /// Last error shown in the footer.
    message: Option<String>,
    /// Cell rectangles from the last draw, for mouse hit-testing.
    cells: Vec<(Rect, String)>,
}

impl App {
    fn new(session: GameSession, names: TeamNames) -> Self {
        let rows = layout_rows(session.registry())
            .iter()
            .map(|row| row.iter().map(|r| r.id().to_string()).collect())
            .collect();
        Self {
            session,
            names,
            rows,
            cursor: (0, 0),
            stats: None,
            message: None,
            cells: Vec::new(),
        }
    }

    fn selected(&self) -> Option<&str> {
        self.rows
            .get(self.cursor.0)
            .and_then(|row| row.get(self.cursor.1))
            .map(String::as_str)
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let max_row = self.rows.len().saturating_sub(1);
        let row = self.cursor.0.saturating_add_signed(d_row).min(max_row);
        let row_len = self.rows.get(row).map_or(0, Vec::len);
        let col = self
            .cursor
            .1
            .saturating_add_signed(d_col)
            .min(row_len.saturating_sub(1));
        self.cursor = (row, col);
    }

    fn click(&mut self, id: &str) {
        self.message = match self.session.on_region_clicked(id) {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
        // Keep an open popup in sync with the board.
        if self.stats.is_some() {
            self.show_stats();
        }
    }

    fn click_selected(&mut self) {
        if let Some(id) = self.selected().map(str::to_string) {
            self.click(&id);
        }
    }

    fn click_at(&mut self, column: u16, row: u16) {
        // The popup covers the board; a click only closes it.
        if self.stats.is_some() {
            self.stats = None;
            return;
        }

        let hit = self
            .cells
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, id)| id.clone());

        if let Some(id) = hit {
            if let Some(pos) = self.position_of(&id) {
                self.cursor = pos;
            }
            self.click(&id);
        }
    }

    fn position_of(&self, id: &str) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|cell| cell == id).map(|c| (r, c))
        })
    }

    fn show_stats(&mut self) {
        match self.session.on_show_stats_requested() {
            Ok(report) => self.stats = Some(report),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn toggle_stats(&mut self) {
        if self.stats.is_some() {
            self.stats = None;
        } else {
            self.show_stats();
        }
    }
}

fn run_tui(mut app: App) -> Result<(App, Exit), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map(|exit| (app, exit))
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<Exit, CliError> {
    loop {
        terminal
            .draw(|f| ui(f, app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if !event::poll(Duration::from_millis(100)).map_err(|e| CliError::new(e.to_string()))? {
            continue;
        }

        match event::read().map_err(|e| CliError::new(e.to_string()))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Exit::Quit),
                KeyCode::Char('e') => return Ok(Exit::EndGame),
                KeyCode::Char('s') => app.toggle_stats(),
                KeyCode::Enter | KeyCode::Char(' ') => app.click_selected(),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
                KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
                KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click_at(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[2], app);

    if let Some(report) = &app.stats {
        render_stats_popup(f, report, &app.names);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let a = app.session.claims().claims(Team::A).len();
    let b = app.session.claims().claims(Team::B).len();
    let title = format!(
        " Suburban Scramble | {} towns | {}: {} | {}: {} ",
        app.session.registry().len(),
        app.names.name(Team::A),
        a,
        app.names.name(Team::B),
        b,
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &mut App) {
    app.cells.clear();
    if app.rows.is_empty() {
        return;
    }

    let row_count = app.rows.len() as u32;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count); app.rows.len()])
        .split(area);
    let cols = app.rows.iter().map(Vec::len).max().unwrap_or(1).max(1);

    for (r, row) in app.rows.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(row_areas[r]);

        for (c, id) in row.iter().enumerate() {
            let cell = cell_areas[c];
            let state = app.session.state_of(id).unwrap_or_default();
            let selected = app.cursor == (r, c);
            let population = app
                .session
                .registry()
                .get(id)
                .map(scramble::Region::population)
                .unwrap_or_default();

            let (bg, fg) = claim_colors(state);
            let mut block = Block::default().borders(Borders::ALL);
            if selected {
                block = block
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::Yellow));
            }

            let text = vec![
                Line::from(id.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
                Line::from(format!("Pop: {population}")),
            ];
            let widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(bg).fg(fg))
                .block(block);

            f.render_widget(widget, cell);
            app.cells.push((cell, id.clone()));
        }
    }
}

fn claim_colors(state: ClaimState) -> (Color, Color) {
    match state {
        ClaimState::Unclaimed => (Color::White, Color::Black),
        ClaimState::ClaimedByA => (Color::Green, Color::Black),
        ClaimState::ClaimedByB => (Color::Red, Color::White),
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.message {
        Some(message) => (format!(" {message} "), Style::default().fg(Color::LightRed)),
        None => (
            " [←↑↓→] Move  [Enter/Click] Claim  [s] Team data  [e] End game  [q] Quit ".to_string(),
            Style::default().fg(Color::Gray),
        ),
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

fn render_stats_popup(f: &mut Frame, report: &ScoreReport, names: &TeamNames) {
    let text = render_stats(report, names);
    let height = text.lines().count() as u16 + 2;
    let area = centered(f.area(), 48, height);

    let popup = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Team Stats [s] ")
                .style(Style::default().fg(Color::White).bg(Color::Black)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
