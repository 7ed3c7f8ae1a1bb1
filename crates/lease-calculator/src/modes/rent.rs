use rust_decimal::Decimal;
use shared_types::{RentInput, RentResult};

use crate::error::{CalculationError, Result};
use crate::extractors::{required_amount, round_money};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Annual rent and total rent over the lease term.
///
/// The term is a whole, positive number of months.
pub fn calculate_rent(input: &RentInput) -> Result<RentResult> {
    let monthly_rent = required_amount("monthlyRent", &input.monthly_rent)?;
    let term_months = required_amount("leaseTermMonths", &input.lease_term_months)?;
    if term_months <= Decimal::ZERO || !term_months.fract().is_zero() {
        return Err(CalculationError::InvalidNumericInput {
            field: "leaseTermMonths".to_string(),
            value: input.lease_term_months.as_str().to_string(),
        });
    }

    Ok(RentResult {
        monthly_rent: round_money(monthly_rent),
        annual_rent: round_money(monthly_rent * MONTHS_PER_YEAR),
        total_lease_term: round_money(monthly_rent * term_months),
    })
}
