mod alert;
mod budget;
mod category;
mod expense;
mod input;
mod plan;
mod split;
mod summary;

pub use alert::{evaluate_alerts, AlertStatus, BudgetAlert, ALERT_THRESHOLD};
pub use budget::Budget;
pub use category::Category;
pub use expense::Expense;
pub use input::{parse_amount, parse_category, parse_count, parse_date, InputError, MAX_AMOUNT};
pub use plan::{PlanOutcome, PlanSession, PlannedExpense};
pub use split::{split_evenly, SplitError};
pub use summary::{checked_total, spend_by_category, AmountOverflow, BudgetReminder, MonthlySummary};

use chrono::{Datelike, Local, NaiveDate};

/// "YYYY-MM" key for the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn current_month() -> String {
    month_key(Local::now().date_naive())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests;
