use anyhow::Result;

use super::form::{Field, FieldKind, Form};
use crate::db::Database;
use crate::models::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Plan,
    AddExpense,
    SetBudget,
    MonthlySummary,
    BudgetAlerts,
    Split,
}

impl View {
    pub(crate) fn all() -> &'static [View] {
        &[
            Self::Plan,
            Self::AddExpense,
            Self::SetBudget,
            Self::MonthlySummary,
            Self::BudgetAlerts,
            Self::Split,
        ]
    }

    pub(crate) fn heading(&self) -> &'static str {
        match self {
            Self::Plan => "How much do you plan to spend today?",
            Self::AddExpense => "How much did you spend?",
            Self::SetBudget => "Set Monthly Budget",
            Self::MonthlySummary => "Monthly Spending Summary",
            Self::BudgetAlerts => "Budget Alerts",
            Self::Split => "Split an Expense Among People",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plan => write!(f, "Plan Expense"),
            Self::AddExpense => write!(f, "Add Expense"),
            Self::SetBudget => write!(f, "Set Budget"),
            Self::MonthlySummary => write!(f, "Monthly Summary"),
            Self::BudgetAlerts => write!(f, "Budget Alerts"),
            Self::Split => write!(f, "Split Expense"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Sidebar,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient message produced by the last form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) level: NoticeLevel,
    pub(crate) text: String,
}

// Field positions shared by the plan and add-expense forms
pub(crate) const DATE_FIELD: usize = 0;
pub(crate) const CATEGORY_FIELD: usize = 1;
pub(crate) const AMOUNT_FIELD: usize = 2;
pub(crate) const MONTH_FIELD: usize = 0;

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) view: View,
    pub(crate) focus: Focus,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) notices: Vec<Notice>,

    pub(crate) plan_form: Form,
    pub(crate) add_form: Form,
    pub(crate) budget_form: Form,
    pub(crate) summary_form: Form,
    pub(crate) alerts_form: Form,
    pub(crate) split_form: Form,

    // Plan Expense
    pub(crate) planned: PlanSession,

    // Set Budget
    pub(crate) existing_budgets: Vec<Budget>,
    pub(crate) budgets_saved: bool,

    // Monthly Summary
    pub(crate) summary: Option<MonthlySummary>,
    pub(crate) summary_scroll: usize,

    // Budget Alerts (None until checked)
    pub(crate) alerts: Option<Vec<BudgetAlert>>,

    pub(crate) expense_count: i64,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        let today = today().format("%Y-%m-%d").to_string();
        let month = current_month();

        let mut budget_fields = vec![Field::new("Month (YYYY-MM)", FieldKind::Text, month.clone())];
        budget_fields.extend(
            Category::all()
                .iter()
                .map(|c| Field::new(format!("Budget for {c}"), FieldKind::Amount, "")),
        );

        Self {
            running: true,
            view: View::Plan,
            focus: Focus::Sidebar,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            notices: Vec::new(),

            plan_form: Form::new(
                vec![
                    Field::new("Planned Date", FieldKind::Date, today.clone()),
                    Field::new("Category", FieldKind::Choice(Category::labels()), ""),
                    Field::new("Planned Amount", FieldKind::Amount, ""),
                ],
                "Check Feasibility",
            ),
            add_form: Form::new(
                vec![
                    Field::new("Date", FieldKind::Date, today),
                    Field::new("Category", FieldKind::Choice(Category::labels()), ""),
                    Field::new("Amount", FieldKind::Amount, ""),
                ],
                "Add",
            ),
            budget_form: Form::new(budget_fields, "Save All Budgets"),
            summary_form: Form::new(
                vec![Field::new("Enter Month (YYYY-MM)", FieldKind::Text, month.clone())],
                "Show Summary",
            ),
            alerts_form: Form::new(
                vec![Field::new("Enter Month (YYYY-MM)", FieldKind::Text, month)],
                "Check Alerts",
            ),
            split_form: Form::new(
                vec![
                    Field::new("Description of the shared expense", FieldKind::Text, ""),
                    Field::new("Total Expense Amount", FieldKind::Amount, ""),
                    Field::new("Number of People", FieldKind::Count, "1"),
                ],
                "Calculate Split",
            ),

            planned: PlanSession::new(),

            existing_budgets: Vec::new(),
            budgets_saved: false,

            summary: None,
            summary_scroll: 0,

            alerts: None,

            expense_count: 0,

            visible_rows: 20,
        }
    }

    pub(crate) fn form(&self) -> &Form {
        match self.view {
            View::Plan => &self.plan_form,
            View::AddExpense => &self.add_form,
            View::SetBudget => &self.budget_form,
            View::MonthlySummary => &self.summary_form,
            View::BudgetAlerts => &self.alerts_form,
            View::Split => &self.split_form,
        }
    }

    pub(crate) fn form_mut(&mut self) -> &mut Form {
        match self.view {
            View::Plan => &mut self.plan_form,
            View::AddExpense => &mut self.add_form,
            View::SetBudget => &mut self.budget_form,
            View::MonthlySummary => &mut self.summary_form,
            View::BudgetAlerts => &mut self.alerts_form,
            View::Split => &mut self.split_form,
        }
    }

    /// The month the current view is looking at, if it has one.
    pub(crate) fn view_month(&self) -> Option<String> {
        match self.view {
            View::SetBudget => Some(self.budget_form.value(MONTH_FIELD).trim().to_string()),
            View::MonthlySummary => Some(self.summary_form.value(MONTH_FIELD).trim().to_string()),
            View::BudgetAlerts => Some(self.alerts_form.value(MONTH_FIELD).trim().to_string()),
            View::Plan => parse_date(self.plan_form.value(DATE_FIELD))
                .ok()
                .map(month_key),
            View::AddExpense => parse_date(self.add_form.value(DATE_FIELD))
                .ok()
                .map(month_key),
            View::Split => None,
        }
    }

    pub(crate) fn switch_view(&mut self, db: &Database, view: View) -> Result<()> {
        if self.view != view {
            self.notices.clear();
        }
        self.view = view;
        match view {
            View::SetBudget => {
                self.budgets_saved = false;
                self.load_budget_form(db)?;
            }
            View::MonthlySummary => {
                self.summary_scroll = 0;
                self.refresh_summary(db)?;
            }
            View::BudgetAlerts => self.alerts = None,
            View::Plan | View::AddExpense | View::Split => {}
        }
        self.expense_count = db.get_expense_count()?;
        Ok(())
    }

    /// Re-reads whatever the current view derives from its month field.
    pub(crate) fn refresh_view(&mut self, db: &Database) -> Result<()> {
        match self.view {
            View::SetBudget => self.refresh_budgets(db)?,
            View::MonthlySummary => self.refresh_summary(db)?,
            View::BudgetAlerts => self.alerts = None,
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn refresh_budgets(&mut self, db: &Database) -> Result<()> {
        let month = self.budget_form.value(MONTH_FIELD).trim().to_string();
        self.existing_budgets = db.get_budgets(&month)?;
        Ok(())
    }

    /// Fills the per-category amount fields from what is stored for the month.
    pub(crate) fn load_budget_form(&mut self, db: &Database) -> Result<()> {
        self.refresh_budgets(db)?;
        for (i, category) in Category::all().iter().enumerate() {
            let stored = self
                .existing_budgets
                .iter()
                .find(|b| b.category.eq_ignore_ascii_case(category.key()))
                .map(|b| format!("{:.2}", b.amount))
                .unwrap_or_default();
            self.budget_form.set_value(i + 1, stored);
        }
        Ok(())
    }

    pub(crate) fn refresh_summary(&mut self, db: &Database) -> Result<()> {
        let month = self.summary_form.value(MONTH_FIELD).trim().to_string();
        self.summary = if month.is_empty() {
            None
        } else {
            let result = db.monthly_summary(&month);
            self.recover(result)?
        };
        Ok(())
    }

    /// Points every month-based view at `month` and reloads the current one.
    pub(crate) fn set_month(&mut self, db: &Database, month: &str) -> Result<()> {
        self.budget_form.set_value(MONTH_FIELD, month);
        self.summary_form.set_value(MONTH_FIELD, month);
        self.alerts_form.set_value(MONTH_FIELD, month);
        self.alerts = None;
        self.summary_scroll = 0;
        self.refresh_summary(db)?;
        self.load_budget_form(db)?;
        Ok(())
    }

    pub(crate) fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push(Notice {
            level,
            text: text.into(),
        });
    }

    /// Stored amounts too large to total become an error notice; any other
    /// failure is passed on.
    pub(crate) fn recover<T>(&mut self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is::<AmountOverflow>() => {
                tracing::warn!(error = %e, "Stored amounts overflowed");
                self.notify(NoticeLevel::Error, e.to_string());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Drops everything scoped to this interactive session.
    pub(crate) fn end_session(&mut self) {
        self.planned.clear();
        self.notices.clear();
        self.running = false;
    }
}
