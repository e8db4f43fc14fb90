use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use super::Category;

/// Largest amount accepted from input. Amounts are stored as REAL, which
/// keeps about 15 significant digits.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),
    #[error("Amount is too large: {0} (maximum {max})", max = MAX_AMOUNT)]
    AmountTooLarge(String),
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Unknown category: {0}. Choose one of: {choices}", choices = Category::labels().join(", "))]
    UnknownCategory(String),
    #[error("Invalid number of people: {0}")]
    InvalidCount(String),
}

/// Parses a non-negative amount up to `MAX_AMOUNT`, rounded to cents.
/// Empty input is zero.
pub fn parse_amount(s: &str) -> Result<Decimal, InputError> {
    let trimmed = s.trim().trim_start_matches('$');
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount =
        Decimal::from_str(trimmed).map_err(|_| InputError::InvalidAmount(s.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InputError::NegativeAmount(s.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(InputError::AmountTooLarge(s.to_string()));
    }
    Ok(amount.round_dp(2))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(s.to_string()))
}

pub fn parse_category(s: &str) -> Result<Category, InputError> {
    Category::parse(s).ok_or_else(|| InputError::UnknownCategory(s.to_string()))
}

/// Parses a whole head count. Zero and negatives parse; the split itself
/// rejects them.
pub fn parse_count(s: &str) -> Result<i64, InputError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidCount(s.to_string()))
}
