use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{month_key, Category};

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Decimal,
}

impl PlannedExpense {
    pub fn new(date: NaiveDate, category: Category, amount: Decimal) -> Self {
        Self {
            date,
            category,
            amount,
        }
    }

    pub fn month(&self) -> String {
        month_key(self.date)
    }
}

/// Result of checking a planned expense against the remaining budget.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    NoBudget { month: String },
    ExceedsBudget { remaining: Decimal },
    Feasible { remaining: Decimal },
}

impl PlanOutcome {
    /// `spent` is what has already been recorded for the month and category.
    pub fn evaluate(plan: &PlannedExpense, budget: Option<Decimal>, spent: Decimal) -> Self {
        let Some(budget) = budget else {
            return Self::NoBudget {
                month: plan.month(),
            };
        };
        let remaining = budget.saturating_sub(spent);
        if plan.amount > remaining {
            Self::ExceedsBudget { remaining }
        } else {
            Self::Feasible { remaining }
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    pub fn message(&self, plan: &PlannedExpense) -> String {
        match self {
            Self::NoBudget { month } => {
                format!("No budget set for {} in {month}.", plan.category)
            }
            Self::ExceedsBudget { remaining } => format!(
                "Planned expense of ${:.2} exceeds remaining budget of ${remaining:.2} in {} category.",
                plan.amount, plan.category
            ),
            Self::Feasible { remaining } => format!(
                "Planned expense of ${:.2} is within the remaining budget of ${remaining:.2} in {} category.",
                plan.amount, plan.category
            ),
        }
    }
}

/// Feasible planned expenses accepted during one interactive session.
/// Held in memory only and dropped when the session ends.
#[derive(Debug, Default)]
pub struct PlanSession {
    items: Vec<PlannedExpense>,
}

impl PlanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, plan: PlannedExpense) {
        self.items.push(plan);
    }

    pub fn items(&self) -> &[PlannedExpense] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.amount))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
