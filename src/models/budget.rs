use rust_decimal::Decimal;

use super::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: Option<i64>,
    /// Format: "YYYY-MM"
    pub month: String,
    /// Lower-cased category key.
    pub category: String,
    pub amount: Decimal,
}

impl Budget {
    pub fn new(month: &str, category: Category, amount: Decimal) -> Self {
        Self {
            id: None,
            month: month.trim().to_string(),
            category: category.key().to_string(),
            amount,
        }
    }

    pub fn category_label(&self) -> String {
        Category::display_name(&self.category)
    }
}
