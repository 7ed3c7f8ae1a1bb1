//! Builds calculator input from flat form state.
//!
//! Form widgets report values under dotted paths (`utilities.gas`,
//! `breakEvenAnalysis.newRent`) and indexed paths for repeated rows
//! (`comparisonLeases[2].rent`). Keys that do not belong to the selected mode
//! are ignored, so a form can keep the values of other tabs around.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{CalculationInput, CalculationMode, ComparisonLease, RawField};

lazy_static! {
    /// `comparisonLeases[<index>].<field>`
    static ref LEASE_FIELD_PATTERN: Regex =
        Regex::new(r"^comparisonLeases\[(\d+)\]\.([A-Za-z]+)$").unwrap();
}

/// Assemble the input record for `mode` from `(field path, value)` pairs.
///
/// Comparison rows are ordered by index; gaps in the numbering are closed.
pub fn input_from_fields<I, K, V>(mode: CalculationMode, fields: I) -> CalculationInput
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut input = CalculationInput::empty(mode);
    let mut leases: BTreeMap<usize, ComparisonLease> = BTreeMap::new();

    for (key, value) in fields {
        let key = key.as_ref().trim();

        let slot: Option<&mut RawField> = match &mut input {
            CalculationInput::Rent(rent) => match key {
                "monthlyRent" => Some(&mut rent.monthly_rent),
                "leaseTermMonths" => Some(&mut rent.lease_term_months),
                _ => None,
            },
            CalculationInput::Prorated(prorated) => match key {
                "monthlyRent" => Some(&mut prorated.monthly_rent),
                "moveInDate" => Some(&mut prorated.move_in_date),
                _ => None,
            },
            CalculationInput::Deposit(deposit) => match key {
                "monthlyRent" => Some(&mut deposit.monthly_rent),
                "securityDeposit" => Some(&mut deposit.security_deposit),
                _ => None,
            },
            CalculationInput::IncomeRatio(income) => match key {
                "monthlyRent" => Some(&mut income.monthly_rent),
                "monthlyIncome" => Some(&mut income.monthly_income),
                "annualIncome" => Some(&mut income.annual_income),
                _ => None,
            },
            CalculationInput::Utilities(utilities) => match key {
                "monthlyRent" => Some(&mut utilities.monthly_rent),
                other => other
                    .strip_prefix("utilities.")
                    .and_then(|name| utilities.utilities.field_mut(name)),
            },
            CalculationInput::MoveIn(move_in) => key
                .strip_prefix("moveInCosts.")
                .and_then(|name| move_in.move_in_costs.field_mut(name)),
            CalculationInput::Comparison(_) => match LEASE_FIELD_PATTERN.captures(key) {
                Some(caps) => match caps[1].parse::<usize>() {
                    Ok(index) => leases.entry(index).or_default().field_mut(&caps[2]),
                    Err(_) => None,
                },
                None => None,
            },
            CalculationInput::BreakEven(break_even) => key
                .strip_prefix("breakEvenAnalysis.")
                .and_then(|name| break_even.break_even_analysis.field_mut(name)),
        };

        if let Some(slot) = slot {
            *slot = RawField::new(value.as_ref());
        }
    }

    if let CalculationInput::Comparison(comparison) = &mut input {
        comparison.comparison_leases = leases.into_values().collect();
    }

    input
}
