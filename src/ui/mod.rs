use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{App, Mode};
use crate::domain::task::Task;
use crate::store::TaskStore;

pub fn run<S: TaskStore>(mut app: App<S>, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();
    let res = loop {
        terminal.draw(|f| draw(f, &app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(&mut app, key.code)
        {
            break Ok(());
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    };

    cleanup_terminal(&mut terminal)?;
    res
}

fn handle_key<S: TaskStore>(app: &mut App<S>, code: KeyCode) -> bool {
    match app.mode {
        Mode::Normal => match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('j') | KeyCode::Down => app.select_next(),
            KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
            KeyCode::Char('a') | KeyCode::Char('n') => app.start_add(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
            KeyCode::Char('e') => app.start_rename(),
            KeyCode::Char('d') | KeyCode::Delete => app.request_remove(),
            KeyCode::Char('r') => {
                app.reload();
                app.set_status("Reloaded");
            }
            _ => {}
        },
        Mode::Adding => match code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.submit_add(),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) => app.input.push(c),
            _ => {}
        },
        Mode::Renaming(_) => match code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.submit_rename(),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) => app.input.push(c),
            _ => {}
        },
        Mode::ConfirmRemove(_) => match code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_remove(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_remove(),
            _ => {}
        },
        Mode::Alert => {
            if code == KeyCode::Enter {
                app.dismiss_alert();
            }
        }
    }

    false
}

fn draw<S: TaskStore>(f: &mut ratatui::Frame, app: &App<S>) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(size);

    let header = render_header(app);
    f.render_widget(header, chunks[0]);

    let mut list_state = ListState::default();
    if !app.tasks.is_empty() {
        list_state.select(Some(app.selected));
    }

    let list = render_list(&app.tasks, app.selected);
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    let footer = render_footer(app);
    f.render_widget(footer, chunks[2]);
}

fn render_header<S: TaskStore>(app: &App<S>) -> Paragraph<'static> {
    let total = app.tasks.len();
    let done = app.tasks.iter().filter(|t| t.done).count();
    let summary = format!("Open: {} / All: {}", total.saturating_sub(done), total);
    let line = Line::from(vec![
        Span::styled("fazer - tasks", Style::default().fg(Color::Cyan)),
        Span::raw("  |  "),
        Span::styled(summary, Style::default().fg(Color::Yellow)),
    ]);
    Paragraph::new(line)
        .block(Block::default().title("Overview").borders(Borders::ALL))
        .wrap(Wrap { trim: true })
}

fn render_list(tasks: &[Task], selected: usize) -> List<'_> {
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let symbol = if task.done { "✔" } else { "•" };
            let mut line = vec![Span::raw(format!(" {symbol} {}", task.title))];
            if task.done {
                line.push(Span::styled("  done", Style::default().fg(Color::Green)));
            }

            let style = if idx == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if task.done {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(line)).style(style)
        })
        .collect();

    List::new(items)
        .block(
            Block::default()
                .title("Tasks (j/k move ; a/n add ; Space/Enter toggle ; e rename ; d remove)")
                .borders(Borders::ALL),
        )
        .highlight_symbol("➤ ")
}

fn render_footer<S: TaskStore>(app: &App<S>) -> Paragraph<'_> {
    match app.mode {
        Mode::Normal => {
            let msg = app
                .status
                .as_deref()
                .unwrap_or("q quit ; a add ; e rename ; d remove");
            Paragraph::new(msg).block(Block::default().title("Normal").borders(Borders::ALL))
        }
        Mode::Adding => input_footer("New task: ", app, "Input (Enter to add / Esc to cancel)"),
        Mode::Renaming(_) => input_footer(
            "New title: ",
            app,
            "Rename (Enter to apply / Esc to cancel)",
        ),
        Mode::ConfirmRemove(id) => {
            let title = app
                .tasks
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.title.as_str())
                .unwrap_or("?");
            let line = Line::from(vec![
                Span::raw("Remove \""),
                Span::styled(title, Style::default().fg(Color::Yellow)),
                Span::raw("\"?"),
            ]);
            Paragraph::new(line).block(
                Block::default()
                    .title("Confirm (y remove / n keep)")
                    .borders(Borders::ALL),
            )
        }
        Mode::Alert => {
            let msg = app.alert.as_deref().unwrap_or("");
            Paragraph::new(Span::styled(msg, Style::default().fg(Color::Red))).block(
                Block::default()
                    .title("Alert (Enter to dismiss)")
                    .borders(Borders::ALL),
            )
        }
    }
}

fn input_footer<'a, S: TaskStore>(prompt: &'a str, app: &'a App<S>, title: &'a str) -> Paragraph<'a> {
    let line = Line::from(vec![
        Span::raw(prompt),
        Span::styled(&app.input, Style::default().fg(Color::Yellow)),
        Span::raw("█"),
    ]);
    Paragraph::new(line).block(Block::default().title(title).borders(Borders::ALL))
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
