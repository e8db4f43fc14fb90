use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("Please enter a valid number of people.")]
    InvalidPeople(i64),
}

/// Even share of `total` per person. The raw quotient is returned; callers
/// round for display.
pub fn split_evenly(total: Decimal, people: i64) -> Result<Decimal, SplitError> {
    if people <= 0 {
        return Err(SplitError::InvalidPeople(people));
    }
    Ok(total / Decimal::from(people))
}
