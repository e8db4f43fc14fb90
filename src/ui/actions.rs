use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::app::{App, NoticeLevel, View, AMOUNT_FIELD, CATEGORY_FIELD, DATE_FIELD, MONTH_FIELD};
use super::form::Form;
use crate::db::Database;
use crate::models::*;

/// Runs the submit action of the current view's form.
pub(crate) fn submit(app: &mut App, db: &mut Database) -> Result<()> {
    app.notices.clear();
    match app.view {
        View::Plan => submit_plan(app, db),
        View::AddExpense => submit_expense(app, db),
        View::SetBudget => submit_budgets(app, db),
        View::MonthlySummary => submit_summary(app, db),
        View::BudgetAlerts => submit_alerts(app, db),
        View::Split => {
            submit_split(app);
            Ok(())
        }
    }
}

fn read_dated_amount(form: &Form) -> Result<(NaiveDate, Category, Decimal), InputError> {
    let date = parse_date(form.value(DATE_FIELD))?;
    let category = Category::all()
        .get(form.choice(CATEGORY_FIELD))
        .copied()
        .ok_or_else(|| InputError::UnknownCategory(form.choice(CATEGORY_FIELD).to_string()))?;
    let amount = parse_amount(form.value(AMOUNT_FIELD))?;
    Ok((date, category, amount))
}

fn read_month(app: &mut App, form_month: &str) -> Option<String> {
    let month = form_month.trim().to_string();
    if month.is_empty() {
        app.notify(NoticeLevel::Error, "Enter a month (YYYY-MM)");
        return None;
    }
    Some(month)
}

fn submit_plan(app: &mut App, db: &Database) -> Result<()> {
    let (date, category, amount) = match read_dated_amount(&app.plan_form) {
        Ok(v) => v,
        Err(e) => {
            app.notify(NoticeLevel::Error, e.to_string());
            return Ok(());
        }
    };

    let plan = PlannedExpense::new(date, category, amount);
    let Some(outcome) = app.recover(db.check_plan(&plan))? else {
        return Ok(());
    };
    let message = outcome.message(&plan);
    tracing::debug!(month = %plan.month(), category = %category, amount = %amount, ?outcome, "Plan checked");

    match outcome {
        PlanOutcome::Feasible { .. } => {
            app.notify(NoticeLevel::Success, message);
            app.planned.push(plan);
        }
        PlanOutcome::ExceedsBudget { .. } | PlanOutcome::NoBudget { .. } => {
            app.notify(NoticeLevel::Warning, message);
        }
    }
    Ok(())
}

fn submit_expense(app: &mut App, db: &Database) -> Result<()> {
    let (date, category, amount) = match read_dated_amount(&app.add_form) {
        Ok(v) => v,
        Err(e) => {
            app.notify(NoticeLevel::Error, e.to_string());
            return Ok(());
        }
    };

    let expense = Expense::new(date, category, amount);
    db.add_expense(&expense)?;
    app.expense_count = db.get_expense_count()?;
    app.notify(NoticeLevel::Success, "Expense added successfully!");

    let alerts = app
        .recover(db.check_budget_alerts(&expense.month()))?
        .unwrap_or_default();
    for alert in alerts {
        if alert.category == category.key() {
            app.notify(NoticeLevel::Warning, alert.message());
        }
    }
    Ok(())
}

fn submit_budgets(app: &mut App, db: &mut Database) -> Result<()> {
    let form_month = app.budget_form.value(MONTH_FIELD).to_string();
    let Some(month) = read_month(app, &form_month) else {
        return Ok(());
    };

    let mut budgets = Vec::with_capacity(Category::all().len());
    for (i, category) in Category::all().iter().enumerate() {
        match parse_amount(app.budget_form.value(i + 1)) {
            Ok(amount) => budgets.push(Budget::new(&month, *category, amount)),
            Err(e) => {
                app.notify(NoticeLevel::Error, format!("{category}: {e}"));
                return Ok(());
            }
        }
    }

    db.set_budgets(&budgets)?;
    app.refresh_budgets(db)?;
    app.budgets_saved = true;
    app.notify(
        NoticeLevel::Success,
        format!("Budgets updated for all categories in {month}."),
    );
    Ok(())
}

fn submit_summary(app: &mut App, db: &Database) -> Result<()> {
    let form_month = app.summary_form.value(MONTH_FIELD).to_string();
    if read_month(app, &form_month).is_none() {
        return Ok(());
    }
    app.summary_scroll = 0;
    app.refresh_summary(db)?;
    if app.summary.as_ref().is_some_and(|s| !s.has_expenses()) {
        app.notify(NoticeLevel::Info, "No expenses recorded for this month.");
    }
    Ok(())
}

fn submit_alerts(app: &mut App, db: &Database) -> Result<()> {
    let form_month = app.alerts_form.value(MONTH_FIELD).to_string();
    let Some(month) = read_month(app, &form_month) else {
        return Ok(());
    };

    let Some(alerts) = app.recover(db.check_budget_alerts(&month))? else {
        app.alerts = None;
        return Ok(());
    };
    if alerts.is_empty() {
        app.notify(NoticeLevel::Success, "All spending is within budget!");
    }
    for alert in &alerts {
        app.notify(NoticeLevel::Warning, alert.message());
    }
    app.alerts = Some(alerts);
    Ok(())
}

fn submit_split(app: &mut App) {
    let description = app.split_form.value(0).trim().to_string();
    let total = match parse_amount(app.split_form.value(1)) {
        Ok(t) => t,
        Err(e) => {
            app.notify(NoticeLevel::Error, e.to_string());
            return;
        }
    };
    let people = match parse_count(app.split_form.value(2)) {
        Ok(n) => n,
        Err(e) => {
            app.notify(NoticeLevel::Error, e.to_string());
            return;
        }
    };

    match split_evenly(total, people) {
        Ok(share) if description.is_empty() => {
            app.notify(
                NoticeLevel::Success,
                format!("Each person should pay: ${:.2}", share.round_dp(2)),
            );
        }
        Ok(share) => {
            app.notify(
                NoticeLevel::Success,
                format!("{description}: each person should pay ${:.2}", share.round_dp(2)),
            );
        }
        Err(e) => app.notify(NoticeLevel::Error, e.to_string()),
    }
}
