use rust_decimal::Decimal;
use shared_types::{UtilitiesInput, UtilitiesResult};

use crate::error::Result;
use crate::extractors::{amount_or_zero, percent_of, required_amount, round_money, round_percent};

/// Monthly utility spend on top of rent. Blank or unparseable utilities count as zero.
pub fn calculate_utilities(input: &UtilitiesInput) -> Result<UtilitiesResult> {
    let monthly_rent = required_amount("monthlyRent", &input.monthly_rent)?;

    let total: Decimal = input
        .utilities
        .entries()
        .iter()
        .map(|(_, raw)| amount_or_zero(raw))
        .sum();

    let percentage = percent_of(total, monthly_rent).unwrap_or(Decimal::ZERO);

    Ok(UtilitiesResult {
        total_utilities: round_money(total),
        rent_with_utilities: round_money(monthly_rent + total),
        utilities_percentage: round_percent(percentage),
    })
}
