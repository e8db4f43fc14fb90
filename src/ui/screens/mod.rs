pub(crate) mod add_expense;
pub(crate) mod alerts;
pub(crate) mod plan;
pub(crate) mod set_budget;
pub(crate) mod split;
pub(crate) mod summary;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus, Notice};
use crate::ui::form::{FieldKind, Form};
use crate::ui::theme;

const LABEL_WIDTH: usize = 36;

/// Splits a view into form, notices and whatever remains for results.
pub(crate) fn layout(area: Rect, app: &App) -> [Rect; 3] {
    let form_height = app.form().fields.len() as u16 + 4;
    let notice_height = if app.notices.is_empty() {
        0
    } else {
        app.notices.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form_height),
            Constraint::Length(notice_height),
            Constraint::Min(0),
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

pub(crate) fn titled_block(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

pub(crate) fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let active = app.focus == Focus::Form;

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = active && i == form.focus;
            let label_style = if focused {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::normal_style()
            };
            let value_style = if focused {
                theme::selected_style()
            } else {
                theme::alt_row_style()
            };
            let value = match field.kind {
                FieldKind::Choice(_) => format!("◀ {} ▶", field.display()),
                _ => format!(" {:<20}", field.display()),
            };

            Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", field.label, width = LABEL_WIDTH),
                    label_style,
                ),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    let hint = if active {
        format!("  [Enter] {}   [Esc] back", form.submit_label)
    } else {
        format!("  [Enter] edit form   {}", form.submit_label)
    };
    lines.push(Line::from(Span::styled(hint, theme::dim_style())));

    let block = titled_block(app.view.heading()).border_style(Style::default().fg(if active {
        theme::ACCENT
    } else {
        theme::OVERLAY
    }));
    f.render_widget(Paragraph::new(lines).block(block), area);

    if active {
        place_cursor(f, area, form);
    }
}

fn place_cursor(f: &mut Frame, area: Rect, form: &Form) {
    let Some(field) = form.fields.get(form.focus) else {
        return;
    };
    if matches!(field.kind, FieldKind::Choice(_)) {
        return;
    }
    let x = area.x + 1 + 2 + LABEL_WIDTH as u16 + 1 + field.value.chars().count() as u16;
    let y = area.y + 1 + form.focus as u16;
    if x < area.right() && y < area.bottom() {
        f.set_cursor_position((x, y));
    }
}

pub(crate) fn render_notices(f: &mut Frame, area: Rect, notices: &[Notice]) {
    if notices.is_empty() || area.height == 0 {
        return;
    }
    let lines: Vec<Line> = notices
        .iter()
        .map(|n| {
            Line::from(Span::styled(
                format!(" {} {}", theme::notice_icon(n.level), n.text),
                theme::notice_style(n.level),
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(titled_block("Result")), area);
}

pub(crate) fn render_hint(f: &mut Frame, area: Rect, title: &str, hints: &[&str]) {
    if area.height == 0 {
        return;
    }
    let mut lines = vec![Line::from("")];
    lines.extend(
        hints
            .iter()
            .map(|h| Line::from(Span::styled(h.to_string(), theme::dim_style()))),
    );
    f.render_widget(
        Paragraph::new(lines).centered().block(titled_block(title)),
        area,
    );
}
