// src/tui/app.rs — TUI application state, event loop, and rendering.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{CrosstermBackend, TestBackend},
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::dashboard::{
    registry, Action, DashboardController, DashboardView, WidgetData, WidgetType,
};
use crate::infra::config::Config;
use crate::infra::errors::{self, GridboardError};

use super::layout::{self, Hit, HitMap};
use super::theme::Theme;
use super::widgets;

// ── App state ────────────────────────────────────────────────────

pub struct App {
    controller: DashboardController,
    config: Config,
    /// Index of the highlighted card, if any.
    selected: Option<usize>,
    /// First grid row drawn.
    scroll_row: usize,
    /// Clickable regions from the last frame.
    hits: HitMap,
    should_quit: bool,
}

impl App {
    pub fn new(controller: DashboardController, config: Config) -> Self {
        let selected = if controller.is_empty() { None } else { Some(0) };
        Self {
            controller,
            config,
            selected,
            scroll_row: 0,
            hits: HitMap::default(),
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply an action and keep the selection pointing at a live card.
    pub fn dispatch(&mut self, action: &Action) {
        self.controller.apply(action);
        match action {
            // Follow the new card.
            Action::AddWidget(_) => self.selected = Some(self.controller.len() - 1),
            Action::RemoveWidget(_) => self.clamp_selection(),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.len();
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    fn remove_selected(&mut self) {
        let Some(i) = self.selected else { return };
        if let Some(w) = self.controller.widgets().get(i) {
            let action = Action::RemoveWidget(w.id().clone());
            self.dispatch(&action);
        }
    }

    fn columns(&self, width: u16) -> usize {
        self.config.layout.columns_for(width) as usize
    }

    /// Move the selection by whole cells in the grid. `dx`/`dy` are -1, 0 or 1.
    fn move_selection(&mut self, dx: isize, dy: isize, columns: usize) {
        let len = self.controller.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0) as isize;
        let next = current + dx + dy * columns as isize;
        if (0..len as isize).contains(&next) {
            self.selected = Some(next as usize);
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent, grid_width: u16) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('q')
            || key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return true;
        }

        let columns = self.columns(grid_width);
        match key.code {
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => self.remove_selected(),

            // Selection
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1, 0, columns),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1, 0, columns),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(0, 1, columns),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(0, -1, columns),

            // Add-button shortcuts
            KeyCode::Char(ch) => {
                if let Some(kind) = registry::kind_for_key(ch) {
                    self.dispatch(&Action::AddWidget(kind));
                }
            }
            _ => {}
        }
        false
    }

    /// Handle a left click at a screen cell, resolved against the last frame.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        match self.hits.resolve(column, row).cloned() {
            Some(Hit::Action(action)) => {
                tracing::debug!(?action, column, row, "click");
                self.dispatch(&action);
            }
            Some(Hit::Select(i)) => self.selected = Some(i),
            None => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.handle_click(mouse.column, mouse.row);
        }
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the dashboard. Blocks until the user quits (q / Esc / Ctrl-C).
pub fn run_dashboard(controller: DashboardController, config: Config) -> anyhow::Result<()> {
    let mut app = App::new(controller, config);
    let mut terminal = setup_terminal()?;

    tracing::info!(widgets = app.controller.len(), "dashboard started");
    let result = run_event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    tracing::info!(
        widgets = app.controller.len(),
        next_id = app.controller.next_id(),
        "dashboard closed"
    );
    result?;
    Ok(restored?)
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn terminal_error(step: &str, e: io::Error) -> GridboardError {
    GridboardError::Terminal(format!("{step}: {e}"))
}

/// Raw mode, alternate screen, mouse capture. On failure nothing stays enabled.
fn setup_terminal() -> errors::Result<Tui> {
    enable_raw_mode().map_err(|e| terminal_error("enable raw mode", e))?;

    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    match terminal {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
            Err(terminal_error("enter alternate screen", e))
        }
    }
}

/// Undo `setup_terminal`. Every step runs even if an earlier one fails.
fn restore_terminal(terminal: &mut Tui) -> errors::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();
    raw.and(screen)
        .and(cursor)
        .map_err(|e| terminal_error("restore terminal", e))
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let poll_interval = Duration::from_millis(app.config.layout.poll_interval_ms.max(10));

    loop {
        terminal.draw(|f| render(f, app))?;

        if !event::poll(poll_interval)? {
            continue;
        }
        let width = terminal.size()?.width;
        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key, width) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}

/// Draw one frame off-screen and return it as plain text, one line per row
/// with trailing spaces trimmed.
pub fn render_to_text(app: &mut App, width: u16, height: u16) -> anyhow::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render(f, app))?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

pub fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

// ── Rendering ────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Control bar
            Constraint::Min(0),    // Widget grid
            Constraint::Length(1), // Footer / key hints
        ])
        .split(size);

    app.hits.clear();
    render_header(f, chunks[0], app);
    render_controls(f, chunks[1], app);
    render_grid(f, chunks[2], app);
    render_footer(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(Span::styled(
        format!(" {}", app.config.dashboard.title),
        Theme::header(),
    ));
    f.render_widget(Paragraph::new(title), area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &mut App) {
    for (rect, kind) in widgets::controls::render(f, area) {
        app.hits.push(rect, Hit::Action(Action::AddWidget(kind)));
    }
}

fn render_grid(f: &mut Frame, area: Rect, app: &mut App) {
    let columns = app.config.layout.columns_for(area.width);

    let cards = match app.controller.render() {
        DashboardView::Empty => {
            app.scroll_row = 0;
            widgets::render_empty(f, area);
            return;
        }
        DashboardView::Cards(cards) => cards,
    };

    let data: Vec<&WidgetData> = cards.iter().map(|c| c.data).collect();
    let scroll = layout::scroll_for_selection(area, &data, columns, app.scroll_row, app.selected);
    let cells = layout::plan_grid(area, &data, columns, scroll);

    // Removal controls are registered before card bodies so they win the
    // hit test where they overlap.
    let mut selects = Vec::with_capacity(cells.len());
    for cell in &cells {
        let props = &cards[cell.index];
        let selected = app.selected == Some(cell.index);
        let remove_area = widgets::render_card(f, cell.area, props, selected);
        app.hits
            .push(remove_area, Hit::Action(props.on_remove.clone()));
        selects.push((cell.area, Hit::Select(cell.index)));
    }
    for (area, hit) in selects {
        app.hits.push(area, hit);
    }
    app.scroll_row = scroll;
}

fn render_footer(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for kind in WidgetType::ALL {
        let meta = registry::meta(kind);
        spans.push(Span::styled(format!(" {}", meta.key), Theme::key_hint()));
        spans.push(Span::styled(
            format!(
                " {} ",
                meta.button_label.trim_start_matches("+ ").to_lowercase()
            ),
            Theme::key_desc(),
        ));
    }
    spans.extend([
        Span::styled(" x", Theme::key_hint()),
        Span::styled(" remove  ", Theme::key_desc()),
        Span::styled("\u{2190}\u{2191}\u{2192}\u{2193}", Theme::key_hint()),
        Span::styled(" select  ", Theme::key_desc()),
        Span::styled("q", Theme::key_hint()),
        Span::styled(" quit", Theme::key_desc()),
    ]);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
