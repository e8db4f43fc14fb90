use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::app::{App, Focus, InputMode, View};
use super::commands;
use super::theme;

const SIDEBAR_WIDTH: u16 = 24;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Sidebar + content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    render_title_bar(f, chunks[0]);
    render_sidebar(f, body[0], app);
    render_view(f, body[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ExpenseTUI ", theme::header_style()),
        Span::styled("Expense Tracker and Budget Planner", theme::dim_style()),
    ]))
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(title, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = View::all()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let style = if *v == app.view && app.focus == Focus::Sidebar {
                theme::selected_style()
            } else if *v == app.view {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}:", i + 1), theme::dim_style()),
                Span::styled(format!(" {v}"), style),
            ]))
        })
        .collect();

    let border = if app.focus == Focus::Sidebar {
        theme::ACCENT
    } else {
        theme::OVERLAY
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                " Choose an option ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_view(f: &mut Frame, area: Rect, app: &App) {
    match app.view {
        View::Plan => super::screens::plan::render(f, area, app),
        View::AddExpense => super::screens::add_expense::render(f, area, app),
        View::SetBudget => super::screens::set_budget::render(f, area, app),
        View::MonthlySummary => super::screens::summary::render(f, area, app),
        View::BudgetAlerts => super::screens::alerts::render(f, area, app),
        View::Split => super::screens::split::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    };

    let month = app.view_month().unwrap_or_default();
    let info = if month.is_empty() {
        format!(" {} | {} expenses", app.view, app.expense_count)
    } else {
        format!(" {} | {month} | {} expenses", app.view, app.expense_count)
    };

    let right = match (app.focus, app.view) {
        (Focus::Sidebar, _) => " j/k select | Enter open | ? help ",
        (Focus::Form, View::Plan | View::AddExpense) => {
            " Tab next | ←/→ category | Enter submit | Esc back "
        }
        (Focus::Form, View::MonthlySummary) => " Tab next | PgUp/PgDn scroll | Enter show | Esc back ",
        (Focus::Form, _) => " Tab next | Enter submit | Esc back ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " ExpenseTUI Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Sidebar", theme::section_style())),
        Line::from(Span::styled(
            "  j/k or Up/Down   Select view           1-6        Jump to view",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Enter/Tab/l      Edit the form         H/L        Prev/Next month",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Forms", theme::section_style())),
        Line::from(Span::styled(
            "  Tab/Down         Next field            Shift-Tab/Up  Previous field",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Left/Right       Change category       Enter      Submit",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  PgUp/PgDn        Scroll summary        Esc        Back to sidebar",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Commands", theme::section_style())),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<22} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "  Ctrl-q / Ctrl-c / :q quits and discards planned expenses",
        theme::dim_style(),
    )));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
