use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::{Budget, Category};

/// Spend above this fraction of the budget raises an "almost over" alert.
pub const ALERT_THRESHOLD: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    OverBudget,
    AlmostOverBudget,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OverBudget => "Over Budget",
            Self::AlmostOverBudget => "Almost Over Budget",
        }
    }

    /// Both comparisons are strict, so a tie drops to the next lower tier.
    pub fn classify(spent: Decimal, budget: Decimal) -> Option<Self> {
        if spent > budget {
            Some(Self::OverBudget)
        } else if spent > budget * ALERT_THRESHOLD {
            Some(Self::AlmostOverBudget)
        } else {
            None
        }
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub spent: Decimal,
    pub budget: Decimal,
    pub status: AlertStatus,
}

impl BudgetAlert {
    pub fn category_label(&self) -> String {
        Category::display_name(&self.category)
    }

    pub fn message(&self) -> String {
        format!(
            "{} in {}: Spent ${:.2} / Budget ${:.2}",
            self.status,
            self.category_label(),
            self.spent,
            self.budget
        )
    }
}

/// Alerts for every category that has both recorded spend and a budget.
pub fn evaluate_alerts(spending: &BTreeMap<String, Decimal>, budgets: &[Budget]) -> Vec<BudgetAlert> {
    let limits: BTreeMap<String, Decimal> = budgets
        .iter()
        .map(|b| (b.category.to_lowercase(), b.amount))
        .collect();

    spending
        .iter()
        .filter_map(|(category, &spent)| {
            let &budget = limits.get(category)?;
            AlertStatus::classify(spent, budget).map(|status| BudgetAlert {
                category: category.clone(),
                spent,
                budget,
                status,
            })
        })
        .collect()
}
