use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;

use super::{Budget, Category, Expense};

/// One row of the "Remaining Budgets" table.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReminder {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
}

impl BudgetReminder {
    pub fn category_label(&self) -> String {
        Category::display_name(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: String,
    pub expenses: Vec<Expense>,
    pub total: Decimal,
    pub reminders: Vec<BudgetReminder>,
}

impl MonthlySummary {
    /// Builds the summary from a month's expenses and budgets. Every budgeted
    /// category gets a reminder (spend defaults to zero); spend without a
    /// budget only shows up in `expenses` and `total`.
    pub fn build(
        month: &str,
        expenses: Vec<Expense>,
        budgets: &[Budget],
    ) -> Result<Self, AmountOverflow> {
        let spent = spend_by_category(&expenses)?;
        let total = checked_total(expenses.iter().map(|e| e.amount), "this month")?;
        let reminders = budgets
            .iter()
            .map(|b| {
                let key = b.category.to_lowercase();
                let spent = spent.get(&key).copied().unwrap_or(Decimal::ZERO);
                let remaining = b
                    .amount
                    .checked_sub(spent)
                    .ok_or_else(|| AmountOverflow(Category::display_name(&key)))?;
                Ok(BudgetReminder {
                    category: key,
                    budget: b.amount,
                    spent,
                    remaining,
                })
            })
            .collect::<Result<Vec<_>, AmountOverflow>>()?;

        Ok(Self {
            month: month.to_string(),
            expenses,
            total,
            reminders,
        })
    }

    pub fn has_expenses(&self) -> bool {
        !self.expenses.is_empty()
    }

    /// Reminders are only shown alongside a month's expenses.
    pub fn shown_reminders(&self) -> &[BudgetReminder] {
        if self.has_expenses() {
            &self.reminders
        } else {
            &[]
        }
    }
}

/// Stored amounts whose sum does not fit in a `Decimal`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Amounts for {0} are too large to add up.")]
pub struct AmountOverflow(pub String);

pub fn checked_total(
    amounts: impl IntoIterator<Item = Decimal>,
    what: &str,
) -> Result<Decimal, AmountOverflow> {
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount)
            .ok_or_else(|| AmountOverflow(what.to_string()))
    })
}

/// Sum of amounts keyed by lower-cased category.
pub fn spend_by_category(
    expenses: &[Expense],
) -> Result<BTreeMap<String, Decimal>, AmountOverflow> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        let key = e.category.to_lowercase();
        let slot = totals.entry(key.clone()).or_default();
        *slot = slot
            .checked_add(e.amount)
            .ok_or_else(|| AmountOverflow(Category::display_name(&key)))?;
    }
    Ok(totals)
}
