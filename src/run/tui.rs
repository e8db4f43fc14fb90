use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Database;
use crate::models::current_month;
use crate::ui::actions;
use crate::ui::app::{App, Focus, InputMode, View, MONTH_FIELD};
use crate::ui::commands;
use crate::ui::form::FieldKind;

pub(crate) fn as_tui(db: &mut Database) -> Result<()> {
    let mut app = App::new();
    app.set_month(db, &current_month())?;
    app.switch_view(db, View::Plan)?;
    tracing::info!(expenses = app.expense_count, "TUI session started");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let discarded = app.planned.items().len();
    app.end_session();
    tracing::info!(discarded_plans = discarded, "TUI session ended");

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // title + status + command bars, plus the content borders
            let content_height = f.area().height.saturating_sub(5) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            app.end_session();
            continue;
        }
        if app.show_help {
            app.show_help = false;
            continue;
        }
        match (app.input_mode, app.focus) {
            (InputMode::Command, _) => handle_command_input(key, app, db)?,
            (InputMode::Normal, Focus::Sidebar) => handle_sidebar_input(key, app, db)?,
            (InputMode::Normal, Focus::Form) => handle_form_input(key, app, db)?,
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_sidebar_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => enter_command_mode(app),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => step_view(app, db, 1)?,
        KeyCode::Char('k') | KeyCode::Up => step_view(app, db, -1)?,
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(view) = View::all().get(idx).copied() {
                app.switch_view(db, view)?;
            }
        }
        KeyCode::Enter | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            app.focus = Focus::Form;
            app.status_message.clear();
        }
        KeyCode::Char('H') => commands::handle_command("prev-month", app, db)?,
        KeyCode::Char('L') => commands::handle_command("next-month", app, db)?,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    let on_text = app
        .form()
        .fields
        .get(app.form().focus)
        .is_some_and(|f| f.kind == FieldKind::Text);

    match key.code {
        KeyCode::Esc => app.focus = Focus::Sidebar,
        KeyCode::Enter => actions::submit(app, db)?,
        KeyCode::Tab | KeyCode::Down => app.form_mut().next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_mut().prev_field(),
        KeyCode::Left => {
            app.form_mut().cycle(-1);
        }
        KeyCode::Right => {
            app.form_mut().cycle(1);
        }
        KeyCode::PageDown if app.view == View::MonthlySummary => {
            let len = app.summary.as_ref().map_or(0, |s| s.expenses.len());
            let step = (app.visible_rows / 2).max(1);
            app.summary_scroll = (app.summary_scroll + step).min(len.saturating_sub(1));
        }
        KeyCode::PageUp if app.view == View::MonthlySummary => {
            let step = (app.visible_rows / 2).max(1);
            app.summary_scroll = app.summary_scroll.saturating_sub(step);
        }
        KeyCode::Char(':') if !on_text => enter_command_mode(app),
        KeyCode::Char('?') if !on_text => app.show_help = true,
        KeyCode::Backspace => {
            if app.form_mut().backspace() {
                after_edit(app, db)?;
            }
        }
        KeyCode::Char(c) => {
            if app.form_mut().input(c) {
                after_edit(app, db)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, db)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────

fn enter_command_mode(app: &mut App) {
    app.input_mode = InputMode::Command;
    app.command_input.clear();
}

fn step_view(app: &mut App, db: &Database, delta: i32) -> Result<()> {
    let views = View::all();
    let idx = views.iter().position(|v| *v == app.view).unwrap_or(0) as i32;
    let next = (idx + delta).rem_euclid(views.len() as i32) as usize;
    app.switch_view(db, views[next])
}

/// Keeps month-driven views in step with what is being typed.
fn after_edit(app: &mut App, db: &Database) -> Result<()> {
    match app.view {
        View::SetBudget if app.budget_form.focus == MONTH_FIELD => {
            app.budgets_saved = false;
            app.load_budget_form(db)
        }
        View::MonthlySummary => {
            app.summary_scroll = 0;
            app.refresh_view(db)
        }
        View::BudgetAlerts => app.refresh_view(db),
        _ => Ok(()),
    }
}
