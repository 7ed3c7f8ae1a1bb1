// Numeric extraction from raw form values
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use shared_types::RawField;

use crate::error::{CalculationError, Result};

/// Largest accepted amount (1,000,000,000,000)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Most decimal places an amount may carry once trailing zeros are dropped
pub const MAX_SCALE: u32 = 4;

lazy_static! {
    /// Currency sign, thousands separators and whitespace pasted into amount fields
    static ref AMOUNT_NOISE: Regex = Regex::new(r"[\s$,]").unwrap();
}

/// Parses an amount such as `1500`, `$1,500.00` or ` 99.5 `.
///
/// Returns `None` for blank text, non-numeric text and values outside
/// `±MAX_AMOUNT` or finer than `MAX_SCALE` decimal places. Bounding the inputs
/// keeps every formula in the calculator clear of `Decimal` overflow.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = AMOUNT_NOISE.replace_all(raw, "");
    if cleaned.is_empty() {
        return None;
    }

    let value = Decimal::from_str(&cleaned).ok()?.normalize();
    if value.abs() > MAX_AMOUNT || value.scale() > MAX_SCALE {
        return None;
    }
    Some(value)
}

/// Amount for a field the mode cannot do without
pub fn required_amount(field: &str, raw: &RawField) -> Result<Decimal> {
    if raw.is_blank() {
        return Err(CalculationError::missing(field));
    }
    parse_amount(raw.as_str()).ok_or_else(|| CalculationError::InvalidNumericInput {
        field: field.to_string(),
        value: raw.as_str().to_string(),
    })
}

/// Amount for a summed or optional field: anything unparseable counts as zero
pub fn amount_or_zero(raw: &RawField) -> Decimal {
    parse_amount(raw.as_str()).unwrap_or(Decimal::ZERO)
}

/// `part / whole × 100`, or `None` when `whole` is zero
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    Some(part / whole * Decimal::ONE_HUNDRED)
}

/// Monetary rounding: 2 decimal places, halves away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentage and ratio rounding: 1 decimal place, halves away from zero
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
