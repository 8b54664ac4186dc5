use std::ops::RangeInclusive;

pub const PRICE_RANGE: RangeInclusive<f64> = 1.0..=30.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Price must be between 1 and 30")]
    PriceOutOfRange(f64),
}

/// Checks an association price before anything is written. NaN and infinities never pass.
pub fn validate_price(price: f64) -> Result<f64, ValidationError> {
    if PRICE_RANGE.contains(&price) {
        Ok(price)
    } else {
        Err(ValidationError::PriceOutOfRange(price))
    }
}
