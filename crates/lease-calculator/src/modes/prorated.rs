use rust_decimal::Decimal;
use shared_types::{ProratedInput, ProratedResult};

use crate::calendar::LeaseCalendar;
use crate::error::{CalculationError, Result};
use crate::extractors::{required_amount, round_money};

/// Rent owed for the partial move-in month.
///
/// The move-in day itself is billed.
pub fn calculate_prorated(input: &ProratedInput) -> Result<ProratedResult> {
    let monthly_rent = required_amount("monthlyRent", &input.monthly_rent)?;

    if input.move_in_date.is_blank() {
        return Err(CalculationError::missing("moveInDate"));
    }
    let move_in = LeaseCalendar::parse_date(input.move_in_date.as_str()).ok_or_else(|| {
        CalculationError::InvalidDate {
            field: "moveInDate".to_string(),
            value: input.move_in_date.as_str().to_string(),
        }
    })?;

    let days_in_month = LeaseCalendar::days_in_month(move_in);
    let remaining_days = LeaseCalendar::remaining_days(move_in);

    let days = Decimal::from(days_in_month);
    let daily_rate = monthly_rent / days;
    // Multiply before dividing so whole-month fractions stay exact
    let prorated_rent = monthly_rent * Decimal::from(remaining_days) / days;

    Ok(ProratedResult {
        days_in_month,
        remaining_days,
        daily_rate: round_money(daily_rate),
        prorated_rent: round_money(prorated_rent),
    })
}
