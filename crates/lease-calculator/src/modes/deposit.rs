use rust_decimal::Decimal;
use shared_types::{DepositAssessment, DepositInput, DepositResult};

use crate::error::Result;
use crate::extractors::{percent_of, required_amount, round_money, round_percent};

/// Deposits of one to two months' rent are the norm
const TYPICAL_MIN_PERCENT: Decimal = Decimal::ONE_HUNDRED;
const TYPICAL_MAX_PERCENT: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Security deposit relative to monthly rent.
///
/// A zero rent yields a 0% deposit rather than a division error.
pub fn calculate_deposit(input: &DepositInput) -> Result<DepositResult> {
    let monthly_rent = required_amount("monthlyRent", &input.monthly_rent)?;
    let deposit = required_amount("securityDeposit", &input.security_deposit)?;

    let percentage = percent_of(deposit, monthly_rent).unwrap_or(Decimal::ZERO);
    let months = percentage / Decimal::ONE_HUNDRED;

    Ok(DepositResult {
        deposit_percentage: round_percent(percentage),
        deposit_months: round_money(months),
        assessment: assess(percentage),
    })
}

fn assess(percentage: Decimal) -> DepositAssessment {
    if percentage < TYPICAL_MIN_PERCENT {
        DepositAssessment::BelowTypical
    } else if percentage <= TYPICAL_MAX_PERCENT {
        DepositAssessment::Typical
    } else {
        DepositAssessment::Excessive
    }
}
