use ratatui::{layout::Rect, Frame};

use super::{layout, render_form, render_hint, render_notices};
use crate::ui::app::App;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [form_area, notice_area, rest] = layout(area, app);
    render_form(f, form_area, app);
    render_notices(f, notice_area, &app.notices);

    let recorded = format!("{} expense(s) recorded", app.expense_count);
    render_hint(
        f,
        rest,
        "Expenses",
        &[
            recorded.as_str(),
            "Amounts are rounded to cents. Use Left/Right to pick a category",
        ],
    );
}
