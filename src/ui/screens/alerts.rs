use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{layout, render_form, render_hint, render_notices, titled_block};
use crate::models::AlertStatus;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, spend_ratio};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [form_area, notice_area, list_area] = layout(area, app);
    render_form(f, form_area, app);
    render_notices(f, notice_area, &app.notices);

    let Some(alerts) = app.alerts.as_ref() else {
        render_hint(
            f,
            list_area,
            "Alerts",
            &["Press Enter in the form to check this month's budgets"],
        );
        return;
    };
    if alerts.is_empty() {
        render_hint(f, list_area, "Alerts", &["No categories near their budget"]);
        return;
    }

    let header = Row::new(
        ["Category", "Spent", "Budget", "Usage", "Status"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );
    let rows: Vec<Row> = alerts
        .iter()
        .map(|a| {
            let color = match a.status {
                AlertStatus::OverBudget => theme::RED,
                AlertStatus::AlmostOverBudget => theme::YELLOW,
            };
            Row::new(vec![
                Cell::from(a.category_label()),
                Cell::from(format_amount(a.spent)),
                Cell::from(format_amount(a.budget)),
                Cell::from(Span::styled(
                    progress_bar(spend_ratio(a.spent, a.budget), 16),
                    Style::default().fg(color),
                )),
                Cell::from(Span::styled(
                    a.status.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(20),
        Constraint::Min(18),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(format!("Alerts ({})", alerts.len())));
    f.render_widget(table, list_area);
}
