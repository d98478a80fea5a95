mod help;
mod state;

use crate::cli::Cli;
use crate::model::{AggregationStatus, AppEvent, NotificationKind};
use crate::orchestrator::{self, UiCommand};
use crate::view::Table;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table as TableWidget},
    Terminal,
};
use state::{KeyAction, Screen, UiState};
use std::{io, time::Duration, time::Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

pub async fn run(args: Cli) -> Result<()> {
    let service = crate::cli::build_service(&args)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();

    // TUI runs in a dedicated thread to keep all blocking I/O out of the Tokio runtime.
    let ui_args = args.clone();
    let ui_handle = std::thread::spawn(move || run_threaded(ui_args, event_rx, cmd_tx));

    let res = orchestrator::run_controller(service, event_tx, cmd_rx).await;

    let join_res = tokio::task::spawn_blocking(move || ui_handle.join()).await;
    if let Ok(joined) = join_res {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(anyhow::anyhow!("TUI thread panicked")),
        }
    }

    res
}

fn send(cmd_tx: &UnboundedSender<UiCommand>, cmd: Option<UiCommand>) {
    if let Some(cmd) = cmd {
        let _ = cmd_tx.send(cmd);
    }
}

/// Runs `restore` when dropped, so every exit path after raw mode is enabled
/// hands the terminal back.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}

pub fn run_threaded(
    args: Cli,
    mut event_rx: UnboundedReceiver<AppEvent>,
    cmd_tx: UnboundedSender<UiCommand>,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    // UiState is owned by the UI thread only; no cross-thread mutation.
    let mut state = UiState::new(args.page_size);
    if let Some(username) = args.username.clone() {
        state.home.input = username;
        send(&cmd_tx, state.home.begin_search().map(UiCommand::Search));
    }

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        // Drain events without blocking to keep UI responsive.
        while let Ok(ev) = event_rx.try_recv() {
            send(&cmd_tx, state.apply_event(ev));
            dirty = true;
        }

        if dirty || last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, &state)).ok();
            last_tick = Instant::now();
            dirty = false;
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                dirty = true;
                match state.handle_key(k) {
                    KeyAction::None => {}
                    KeyAction::Send(cmd) => {
                        let _ = cmd_tx.send(cmd);
                    }
                    KeyAction::Quit => {
                        let _ = cmd_tx.send(UiCommand::Quit);
                        break Ok(());
                    }
                }
            }
        }
    }
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(area);

    match state.screen {
        Screen::Home => draw_home(chunks[0], f, state),
        Screen::Results => draw_results(chunks[0], f, state),
    }
    draw_status(chunks[1], f, state);

    if state.show_help {
        help::draw_help(centered(area, 60, 20), f);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

fn draw_home(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let inner = centered(area, 70, 9);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "GitHub User Repositories and Organizations",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, chunks[0]);

    let input = Paragraph::new(state.home.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("GitHub Username"),
    );
    f.render_widget(input, chunks[1]);

    let hint = if state.home.loading {
        Line::from(Span::styled("Searching…", Style::default().fg(Color::Cyan)))
    } else {
        let style = if state.home.can_search() {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![Span::styled("Enter", style), Span::raw(" Search")])
    };
    f.render_widget(Paragraph::new(hint), chunks[2]);
}

fn table_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_results(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let results = &state.results;
    match results.status() {
        AggregationStatus::Idle => {
            let p = Paragraph::new("No username given. Press b to go back.")
                .block(Block::default().borders(Borders::ALL).title("Results"));
            f.render_widget(p, area);
            return;
        }
        AggregationStatus::Loading => {
            let p = Paragraph::new(Span::styled("Loading…", Style::default().fg(Color::Cyan)))
                .block(Block::default().borders(Borders::ALL).title("Results"));
            f.render_widget(p, area);
            return;
        }
        AggregationStatus::Ready | AggregationStatus::Failed => {}
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(60),
                Constraint::Length(1),
                Constraint::Min(4),
            ]
            .as_ref(),
        )
        .split(area);

    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let page = results.page(Table::Repositories);
    let repos = TableWidget::new(
        results.repo_rows().iter().map(|r| {
            Row::new(vec![
                Cell::from(r.name.clone()),
                Cell::from(r.description_or_placeholder().to_string()),
            ])
        }),
        [Constraint::Percentage(30), Constraint::Percentage(70)],
    )
    .header(Row::new(vec!["Name", "Description"]).style(header_style))
    .block(table_block(
        format!(
            "Repositories · rows {} · {}",
            page.page_size,
            page.range_label(results.total(Table::Repositories))
        ),
        state.focused(Table::Repositories),
    ));
    f.render_widget(repos, chunks[0]);

    let message = results.result.message.as_deref().unwrap_or("");
    f.render_widget(Paragraph::new(message), chunks[1]);

    let page = results.page(Table::Organizations);
    let orgs = TableWidget::new(
        results
            .org_rows()
            .iter()
            .map(|o| Row::new(vec![Cell::from(o.login.clone())])),
        [Constraint::Percentage(100)],
    )
    .header(Row::new(vec!["Organization"]).style(header_style))
    .block(table_block(
        format!(
            "Organizations · rows {} · {}",
            page.page_size,
            page.range_label(results.total(Table::Organizations))
        ),
        state.focused(Table::Organizations),
    ));
    f.render_widget(orgs, chunks[2]);
}

fn draw_status(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let mut spans = Vec::new();
    if let Some(n) = state.visible_toast() {
        let color = match n.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        spans.push(Span::styled(n.message.clone(), Style::default().fg(color)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        state.location.clone(),
        Style::default().fg(Color::Gray),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled("F1", Style::default().fg(Color::Magenta)));
    spans.push(Span::raw(" help"));

    let p = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("github-user-lookup"));
    f.render_widget(p, area);
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
