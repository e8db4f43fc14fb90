use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{month_key, Category};

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    /// Lower-cased category key.
    pub category: String,
    pub amount: Decimal,
}

impl Expense {
    pub fn new(date: NaiveDate, category: Category, amount: Decimal) -> Self {
        Self {
            id: None,
            date: date.format("%Y-%m-%d").to_string(),
            category: category.key().to_string(),
            amount,
        }
    }

    /// The "YYYY-MM" period this expense counts against.
    pub fn month(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(d) => month_key(d),
            Err(_) => self.date.chars().take(7).collect(),
        }
    }

    pub fn category_label(&self) -> String {
        Category::display_name(&self.category)
    }
}
