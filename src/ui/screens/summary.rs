use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{layout, render_form, render_hint, render_notices, titled_block};
use crate::models::{BudgetReminder, MonthlySummary};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{clamp_scroll, format_amount, progress_bar, spend_ratio, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [form_area, notice_area, rest] = layout(area, app);
    render_form(f, form_area, app);
    render_notices(f, notice_area, &app.notices);

    let Some(summary) = app.summary.as_ref() else {
        render_hint(f, rest, "Summary", &["Enter a month to see its spending"]);
        return;
    };

    let reminders = summary.shown_reminders();
    let reminder_height = if reminders.is_empty() {
        0
    } else {
        reminders.len() as u16 + 3
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(reminder_height)])
        .split(rest);

    render_expenses(f, chunks[0], summary, app.summary_scroll);
    render_reminders(f, chunks[1], reminders);
}

fn render_expenses(f: &mut Frame, area: Rect, summary: &MonthlySummary, scroll: usize) {
    if !summary.has_expenses() {
        render_hint(
            f,
            area,
            &format!("Expenses for {}", summary.month),
            &["No expenses recorded for this month."],
        );
        return;
    }

    let page = area.height.saturating_sub(4) as usize;
    let scroll = clamp_scroll(scroll, summary.expenses.len(), page);

    let header = Row::new(
        ["Date", "Category", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let mut rows: Vec<Row> = summary
        .expenses
        .iter()
        .enumerate()
        .skip(scroll)
        .take(page)
        .map(|(i, e)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(e.date.clone()),
                Cell::from(truncate(&e.category_label(), 17)),
                Cell::from(format_amount(e.amount)),
            ])
            .style(style)
        })
        .collect();
    rows.push(Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled("Total Spent", theme::section_style())),
        Cell::from(Span::styled(
            format_amount(summary.total),
            theme::section_style(),
        )),
    ]));

    let widths = [
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Length(16),
    ];
    let title = format!(
        "Expenses for {} ({}) PgUp/PgDn scroll",
        summary.month,
        summary.expenses.len()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(title));
    f.render_widget(table, area);
}

fn render_reminders(f: &mut Frame, area: Rect, reminders: &[BudgetReminder]) {
    if reminders.is_empty() || area.height == 0 {
        return;
    }

    let header = Row::new(
        ["Category", "Budget", "Spent", "Remaining", ""]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let rows: Vec<Row> = reminders
        .iter()
        .map(|r| {
            let remaining_style = if r.remaining < rust_decimal::Decimal::ZERO {
                theme::over_budget_style()
            } else {
                theme::under_budget_style()
            };
            let ratio = spend_ratio(r.spent, r.budget);
            let bar_color = if ratio >= 0.9 {
                theme::RED
            } else if ratio >= 0.7 {
                theme::YELLOW
            } else {
                theme::GREEN
            };
            Row::new(vec![
                Cell::from(r.category_label()),
                Cell::from(format_amount(r.budget)),
                Cell::from(format_amount(r.spent)),
                Cell::from(Span::styled(format_amount(r.remaining), remaining_style)),
                Cell::from(Span::styled(
                    progress_bar(ratio, 16),
                    Style::default().fg(bar_color),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Min(18),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block("Budget Reminders"));
    f.render_widget(table, area);
}
