use rust_decimal::Decimal;
use shared_types::{BreakEvenInput, BreakEvenResult};

use crate::error::Result;
use crate::extractors::{amount_or_zero, required_amount, round_money, round_percent};

/// A move that takes two years or more to pay off is not worth it
pub const WORTH_IT_MONTHS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Months of lower rent needed to recover the cost of moving.
///
/// Deposits only count by their difference: the old deposit comes back, the
/// new one goes out. Without positive savings the move never breaks even and
/// the months are reported as zero. A refund larger than the moving bill gives
/// negative months: the move is ahead from day one.
pub fn calculate_break_even(input: &BreakEvenInput) -> Result<BreakEvenResult> {
    let analysis = &input.break_even_analysis;
    let current_rent = required_amount("breakEvenAnalysis.currentRent", &analysis.current_rent)?;
    let new_rent = required_amount("breakEvenAnalysis.newRent", &analysis.new_rent)?;
    let moving_costs = amount_or_zero(&analysis.moving_costs);
    let current_deposit = amount_or_zero(&analysis.current_deposit);
    let new_deposit = amount_or_zero(&analysis.new_deposit);

    let monthly_savings = current_rent - new_rent;
    let total_moving_costs = moving_costs + (new_deposit - current_deposit);

    let saves_money = monthly_savings > Decimal::ZERO;
    let break_even_months = if saves_money {
        total_moving_costs / monthly_savings
    } else {
        Decimal::ZERO
    };

    Ok(BreakEvenResult {
        monthly_savings: round_money(monthly_savings),
        annual_savings: round_money(monthly_savings * MONTHS_PER_YEAR),
        total_moving_costs: round_money(total_moving_costs),
        break_even_months: round_percent(break_even_months),
        is_worth_it: saves_money && break_even_months < WORTH_IT_MONTHS,
    })
}
