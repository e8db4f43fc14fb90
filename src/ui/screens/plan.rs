use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{layout, render_form, render_hint, render_notices, titled_block};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [form_area, notice_area, list_area] = layout(area, app);
    render_form(f, form_area, app);
    render_notices(f, notice_area, &app.notices);

    if app.planned.is_empty() {
        render_hint(
            f,
            list_area,
            "Feasible Planned Expenses",
            &[
                "Nothing planned yet this session",
                "Feasible plans are listed here until you quit",
            ],
        );
        return;
    }

    let header = Row::new(
        ["Date", "Category", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let mut rows: Vec<Row> = app
        .planned
        .items()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(p.date.format("%Y-%m-%d").to_string()),
                Cell::from(p.category.as_str()),
                Cell::from(format_amount(p.amount)),
            ])
            .style(style)
        })
        .collect();
    rows.push(Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled("Total", theme::section_style())),
        Cell::from(Span::styled(
            format_amount(app.planned.total()),
            theme::section_style(),
        )),
    ]));

    let widths = [
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths).header(header).block(titled_block(format!(
        "Feasible Planned Expenses ({})",
        app.planned.items().len()
    )));
    f.render_widget(table, list_area);
}
