use rust_decimal::Decimal;
use shared_types::{MoveInCostItem, MoveInInput, MoveInResult};

use crate::error::Result;
use crate::extractors::{amount_or_zero, required_amount, round_money};

/// Cash needed on move-in day.
///
/// First month's rent is required; every other cost is optional. The breakdown
/// lists non-zero items in form order.
pub fn calculate_move_in(input: &MoveInInput) -> Result<MoveInResult> {
    let costs = &input.move_in_costs;
    let first_month = required_amount("moveInCosts.firstMonthRent", &costs.first_month_rent)?;

    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for (field, raw) in costs.entries() {
        let amount = if field == "firstMonthRent" {
            first_month
        } else {
            amount_or_zero(raw)
        };

        total += amount;
        let shown = round_money(amount);
        if !shown.is_zero() {
            breakdown.push(MoveInCostItem {
                field: field.to_string(),
                label: humanize(field),
                amount: shown,
            });
        }
    }

    Ok(MoveInResult {
        total_move_in_costs: round_money(total),
        breakdown,
    })
}

/// `petDeposit` -> `Pet Deposit`
pub fn humanize(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
