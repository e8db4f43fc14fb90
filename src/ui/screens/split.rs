use ratatui::{layout::Rect, Frame};

use super::{layout, render_form, render_hint, render_notices};
use crate::ui::app::App;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let [form_area, notice_area, rest] = layout(area, app);
    render_form(f, form_area, app);
    render_notices(f, notice_area, &app.notices);
    render_hint(
        f,
        rest,
        "Split",
        &["The total is divided evenly. Nothing is saved"],
    );
}
