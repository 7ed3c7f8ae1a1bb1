//! Calculator result records
//!
//! Monetary amounts carry 2 decimal places, percentages and ratios 1.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::mode::CalculationMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentResult {
    pub monthly_rent: Decimal,
    pub annual_rent: Decimal,
    pub total_lease_term: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProratedResult {
    pub days_in_month: u32,
    /// Days from the move-in date to month end, move-in day included
    pub remaining_days: u32,
    pub daily_rate: Decimal,
    pub prorated_rent: Decimal,
}

/// How a security deposit compares to the usual one-to-two months of rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepositAssessment {
    #[serde(rename = "below typical")]
    BelowTypical,
    #[serde(rename = "typical")]
    Typical,
    #[serde(rename = "excessive")]
    Excessive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositResult {
    pub deposit_percentage: Decimal,
    /// Deposit expressed in months of rent
    pub deposit_months: Decimal,
    pub assessment: DepositAssessment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRatioResult {
    pub rent_to_income_ratio: Decimal,
    pub annual_ratio: Decimal,
    pub is_affordable: bool,
    /// Highest rent that keeps the ratio at the affordability threshold
    pub recommended_max_rent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilitiesResult {
    pub total_utilities: Decimal,
    pub rent_with_utilities: Decimal,
    pub utilities_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveInCostItem {
    /// camelCase input field name, e.g. `petDeposit`
    pub field: String,
    /// Display label, e.g. `Pet Deposit`
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveInResult {
    pub total_move_in_costs: Decimal,
    pub breakdown: Vec<MoveInCostItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseComparisonRow {
    pub name: String,
    pub monthly_cost: Decimal,
    pub total_cost: Decimal,
    pub cost_per_month: Decimal,
    pub deposit_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub comparisons: Vec<LeaseComparisonRow>,
    pub best_value: LeaseComparisonRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenResult {
    pub monthly_savings: Decimal,
    pub annual_savings: Decimal,
    pub total_moving_costs: Decimal,
    pub break_even_months: Decimal,
    pub is_worth_it: bool,
}

/// Result of one calculation, tagged by the mode that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum CalculationResult {
    Rent(RentResult),
    Prorated(ProratedResult),
    Deposit(DepositResult),
    IncomeRatio(IncomeRatioResult),
    Utilities(UtilitiesResult),
    MoveIn(MoveInResult),
    Comparison(ComparisonResult),
    BreakEven(BreakEvenResult),
}

impl CalculationResult {
    pub fn mode(&self) -> CalculationMode {
        match self {
            CalculationResult::Rent(_) => CalculationMode::Rent,
            CalculationResult::Prorated(_) => CalculationMode::Prorated,
            CalculationResult::Deposit(_) => CalculationMode::Deposit,
            CalculationResult::IncomeRatio(_) => CalculationMode::IncomeRatio,
            CalculationResult::Utilities(_) => CalculationMode::Utilities,
            CalculationResult::MoveIn(_) => CalculationMode::MoveIn,
            CalculationResult::Comparison(_) => CalculationMode::Comparison,
            CalculationResult::BreakEven(_) => CalculationMode::BreakEven,
        }
    }
}
