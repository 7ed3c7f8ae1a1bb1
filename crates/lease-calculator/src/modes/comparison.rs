use rust_decimal::Decimal;
use shared_types::{ComparisonInput, ComparisonLease, ComparisonResult, LeaseComparisonRow};

use crate::error::{CalculationError, Result};
use crate::extractors::{amount_or_zero, percent_of, required_amount, round_money, round_percent};

/// Term assumed when a lease row leaves it blank
pub const DEFAULT_TERM_MONTHS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Field path reported when no lease has a rent
pub const COMPARISON_RENT_FIELD: &str = "comparisonLeases[].rent";

/// Side-by-side cost of candidate leases.
///
/// Rows without a rent are skipped. The best value is the lowest effective
/// cost per month; on a tie the earlier lease wins.
pub fn calculate_comparison(input: &ComparisonInput) -> Result<ComparisonResult> {
    let mut comparisons = Vec::with_capacity(input.comparison_leases.len());

    for (index, lease) in input.comparison_leases.iter().enumerate() {
        if lease.rent.is_blank() {
            continue;
        }
        comparisons.push(compare_lease(index, lease)?);
    }

    let best_value = best_value(&comparisons)
        .cloned()
        .ok_or_else(|| CalculationError::missing(COMPARISON_RENT_FIELD))?;

    Ok(ComparisonResult {
        comparisons,
        best_value,
    })
}

fn compare_lease(index: usize, lease: &ComparisonLease) -> Result<LeaseComparisonRow> {
    let field = |name: &str| format!("comparisonLeases[{}].{}", index, name);

    let rent = required_amount(&field("rent"), &lease.rent)?;
    let term = if lease.term.is_blank() {
        DEFAULT_TERM_MONTHS
    } else {
        required_amount(&field("term"), &lease.term)?
    };
    if term <= Decimal::ZERO {
        return Err(CalculationError::degenerate(field("term")));
    }

    let deposit = amount_or_zero(&lease.deposit);
    let utilities = amount_or_zero(&lease.utilities);

    let monthly_cost = rent + utilities;
    let total_cost = monthly_cost * term + deposit;
    let cost_per_month = total_cost / term;
    let deposit_percentage = percent_of(deposit, rent).unwrap_or(Decimal::ZERO);

    let name = match lease.name.as_str().trim() {
        "" => format!("Lease {}", index + 1),
        name => name.to_string(),
    };

    Ok(LeaseComparisonRow {
        name,
        monthly_cost: round_money(monthly_cost),
        total_cost: round_money(total_cost),
        cost_per_month: round_money(cost_per_month),
        deposit_percentage: round_percent(deposit_percentage),
    })
}

/// First row with the minimum cost per month
pub fn best_value(rows: &[LeaseComparisonRow]) -> Option<&LeaseComparisonRow> {
    rows.iter().fold(None, |best, row| match best {
        Some(current) if current.cost_per_month <= row.cost_per_month => Some(current),
        _ => Some(row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lease(
        name: &str,
        rent: &str,
        deposit: &str,
        term: &str,
        utilities: &str,
    ) -> ComparisonLease {
        ComparisonLease {
            name: name.into(),
            rent: rent.into(),
            deposit: deposit.into(),
            term: term.into(),
            utilities: utilities.into(),
        }
    }

    fn compare(leases: Vec<ComparisonLease>) -> Result<ComparisonResult> {
        calculate_comparison(&ComparisonInput {
            comparison_leases: leases,
        })
    }

    #[test]
    fn test_row_formulas() {
        let result = compare(vec![lease("Downtown", "1500", "3000", "12", "100")]).unwrap();
        assert_eq!(
            result.comparisons[0],
            LeaseComparisonRow {
                name: "Downtown".to_string(),
                monthly_cost: Decimal::new(1600, 0),
                // 1600 × 12 + 3000
                total_cost: Decimal::new(22200, 0),
                cost_per_month: Decimal::new(1850, 0),
                deposit_percentage: Decimal::new(2000, 1),
            }
        );
    }

    #[test]
    fn test_best_value_is_lowest_cost_per_month() {
        let result = compare(vec![
            lease("A", "1200", "", "12", ""),
            lease("B", "1100", "", "12", ""),
            lease("C", "1150", "", "12", ""),
        ])
        .unwrap();
        assert_eq!(result.best_value.name, "B");
        assert_eq!(result.best_value.cost_per_month, Decimal::new(1100, 0));
    }

    #[test]
    fn test_tie_goes_to_first_lease() {
        let result = compare(vec![
            lease("A", "1300", "", "12", ""),
            lease("B", "1100", "", "12", ""),
            lease("C", "1000", "1200", "12", ""),
        ])
        .unwrap();
        // B and C both cost 1100 per month
        assert_eq!(result.comparisons[2].cost_per_month, Decimal::new(1100, 0));
        assert_eq!(result.best_value.name, "B");
    }

    #[test]
    fn test_blank_rows_are_skipped_and_names_defaulted() {
        let result = compare(vec![
            lease("Empty", "", "500", "12", ""),
            lease("", "1000", "", "", ""),
        ])
        .unwrap();
        assert_eq!(result.comparisons.len(), 1);
        // Name follows the row's position in the form, blank term means 12 months
        assert_eq!(result.comparisons[0].name, "Lease 2");
        assert_eq!(result.comparisons[0].total_cost, Decimal::new(12000, 0));
    }

    #[test]
    fn test_zero_rent_deposit_percentage() {
        let result = compare(vec![lease("Free", "0", "500", "10", "")]).unwrap();
        assert_eq!(result.comparisons[0].deposit_percentage, Decimal::ZERO);
        assert_eq!(result.comparisons[0].cost_per_month, Decimal::new(50, 0));
    }

    #[test]
    fn test_requires_a_lease_with_rent() {
        assert_eq!(
            compare(vec![]),
            Err(CalculationError::missing(COMPARISON_RENT_FIELD))
        );
        assert_eq!(
            compare(vec![lease("A", " ", "", "", "")]),
            Err(CalculationError::missing(COMPARISON_RENT_FIELD))
        );
    }

    #[test]
    fn test_zero_term_is_rejected() {
        assert_eq!(
            compare(vec![
                lease("A", "1000", "", "12", ""),
                lease("B", "900", "", "0", ""),
            ]),
            Err(CalculationError::degenerate("comparisonLeases[1].term"))
        );
    }

    #[test]
    fn test_invalid_rent_names_the_row() {
        let err = compare(vec![lease("A", "cheap", "", "", "")]).unwrap_err();
        assert_eq!(err.field(), "comparisonLeases[0].rent");
    }
}
