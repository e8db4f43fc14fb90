use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{layout, render_form, render_hint, render_notices, titled_block};
use crate::ui::app::{App, MONTH_FIELD};
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [form_area, notice_area, list_area] = layout(area, app);
    render_form(f, form_area, app);
    render_notices(f, notice_area, &app.notices);

    let month = app.budget_form.value(MONTH_FIELD).trim();
    if app.existing_budgets.is_empty() {
        render_hint(
            f,
            list_area,
            "Stored Budgets",
            &["No budgets stored for this month yet"],
        );
        return;
    }

    let header = Row::new(
        ["Category", "Budget"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let rows: Vec<Row> = app
        .existing_budgets
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(b.category_label()),
                Cell::from(format_amount(b.amount)),
            ])
            .style(style)
        })
        .collect();

    let title = if app.budgets_saved {
        format!("Updated Budgets for the Month ({month})")
    } else {
        format!("Stored Budgets for {month}")
    };
    let table = Table::new(rows, [Constraint::Length(18), Constraint::Length(16)])
        .header(header)
        .block(titled_block(title));
    f.render_widget(table, list_area);
}
