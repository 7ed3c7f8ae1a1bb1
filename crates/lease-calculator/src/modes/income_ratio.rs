use rust_decimal::Decimal;
use shared_types::{IncomeRatioInput, IncomeRatioResult};

use crate::error::{CalculationError, Result};
use crate::extractors::{percent_of, required_amount, round_money, round_percent};

/// Rent at or below 30% of gross income is considered affordable
pub const AFFORDABILITY_THRESHOLD_PERCENT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Field path reported when neither income field is filled
pub const INCOME_FIELDS: &str = "monthlyIncome|annualIncome";

/// Rent-to-income affordability check.
///
/// The monthly ratio uses monthly income and the annual ratio uses annual
/// income. A missing one is derived from the other (×12 or ÷12). Income must
/// be strictly positive.
pub fn calculate_income_ratio(input: &IncomeRatioInput) -> Result<IncomeRatioResult> {
    let monthly_rent = required_amount("monthlyRent", &input.monthly_rent)?;

    let (monthly_income, annual_income) = resolve_income(input)?;

    let ratio = percent_of(monthly_rent, monthly_income)
        .ok_or_else(|| CalculationError::degenerate("monthlyIncome"))?;
    let annual_ratio = percent_of(monthly_rent * MONTHS_PER_YEAR, annual_income)
        .ok_or_else(|| CalculationError::degenerate("annualIncome"))?;

    let max_rent = monthly_income * AFFORDABILITY_THRESHOLD_PERCENT / Decimal::ONE_HUNDRED;

    Ok(IncomeRatioResult {
        rent_to_income_ratio: round_percent(ratio),
        annual_ratio: round_percent(annual_ratio),
        is_affordable: ratio <= AFFORDABILITY_THRESHOLD_PERCENT,
        recommended_max_rent: round_money(max_rent),
    })
}

/// Returns `(monthly, annual)` income, both strictly positive
fn resolve_income(input: &IncomeRatioInput) -> Result<(Decimal, Decimal)> {
    let has_monthly = !input.monthly_income.is_blank();
    let has_annual = !input.annual_income.is_blank();

    let (monthly, annual) = match (has_monthly, has_annual) {
        (false, false) => return Err(CalculationError::missing(INCOME_FIELDS)),
        (true, false) => {
            let monthly = required_amount("monthlyIncome", &input.monthly_income)?;
            (monthly, monthly * MONTHS_PER_YEAR)
        }
        (false, true) => {
            let annual = required_amount("annualIncome", &input.annual_income)?;
            (annual / MONTHS_PER_YEAR, annual)
        }
        (true, true) => (
            required_amount("monthlyIncome", &input.monthly_income)?,
            required_amount("annualIncome", &input.annual_income)?,
        ),
    };

    if monthly <= Decimal::ZERO {
        let field = if has_monthly { "monthlyIncome" } else { "annualIncome" };
        return Err(CalculationError::degenerate(field));
    }
    if annual <= Decimal::ZERO {
        return Err(CalculationError::degenerate("annualIncome"));
    }

    Ok((monthly, annual))
}
