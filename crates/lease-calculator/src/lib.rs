pub mod calendar;
pub mod error;
pub mod extractors;
pub mod form;
pub mod modes;

pub use error::{CalculationError, Result};

use shared_types::{CalculationInput, CalculationMode, CalculationResult};
use tracing::debug;

use modes::comparison::COMPARISON_RENT_FIELD;
use modes::income_ratio::INCOME_FIELDS;

/// LeaseCalculator entry point
pub struct LeaseCalculator;

impl LeaseCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult> {
        calculate(input)
    }

    /// Calculate straight from flat form state (see [`form::input_from_fields`])
    pub fn calculate_fields<I, K, V>(
        &self,
        mode: CalculationMode,
        fields: I,
    ) -> Result<CalculationResult>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        calculate(&form::input_from_fields(mode, fields))
    }

    /// Required fields the form has not filled yet; empty when the calculate
    /// button may be enabled
    pub fn missing_required_fields(&self, input: &CalculationInput) -> Vec<&'static str> {
        missing_required_fields(input)
    }

    pub fn is_ready(&self, input: &CalculationInput) -> bool {
        missing_required_fields(input).is_empty()
    }

    pub fn supported_modes(&self) -> &'static [CalculationMode] {
        &CalculationMode::ALL
    }
}

impl Default for LeaseCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the formula set selected by the input's mode
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult> {
    let mode = input.mode();

    let result = match input {
        CalculationInput::Rent(rent) => modes::calculate_rent(rent).map(CalculationResult::Rent),
        CalculationInput::Prorated(prorated) => {
            modes::calculate_prorated(prorated).map(CalculationResult::Prorated)
        }
        CalculationInput::Deposit(deposit) => {
            modes::calculate_deposit(deposit).map(CalculationResult::Deposit)
        }
        CalculationInput::IncomeRatio(income) => {
            modes::calculate_income_ratio(income).map(CalculationResult::IncomeRatio)
        }
        CalculationInput::Utilities(utilities) => {
            modes::calculate_utilities(utilities).map(CalculationResult::Utilities)
        }
        CalculationInput::MoveIn(move_in) => {
            modes::calculate_move_in(move_in).map(CalculationResult::MoveIn)
        }
        CalculationInput::Comparison(comparison) => {
            modes::calculate_comparison(comparison).map(CalculationResult::Comparison)
        }
        CalculationInput::BreakEven(break_even) => {
            modes::calculate_break_even(break_even).map(CalculationResult::BreakEven)
        }
    };

    match &result {
        Ok(_) => debug!(%mode, "calculation complete"),
        Err(err) => debug!(%mode, field = err.field(), "calculation rejected: {}", err),
    }

    result
}

/// Required fields left blank, named as in [`CalculationMode::required_fields`].
///
/// Only blankness is checked here; malformed values are reported by
/// [`calculate`].
pub fn missing_required_fields(input: &CalculationInput) -> Vec<&'static str> {
    let mut missing = Vec::new();
    let mut require = |field: &'static str, blank: bool| {
        if blank {
            missing.push(field);
        }
    };

    match input {
        CalculationInput::Rent(rent) => {
            require("monthlyRent", rent.monthly_rent.is_blank());
            require("leaseTermMonths", rent.lease_term_months.is_blank());
        }
        CalculationInput::Prorated(prorated) => {
            require("monthlyRent", prorated.monthly_rent.is_blank());
            require("moveInDate", prorated.move_in_date.is_blank());
        }
        CalculationInput::Deposit(deposit) => {
            require("monthlyRent", deposit.monthly_rent.is_blank());
            require("securityDeposit", deposit.security_deposit.is_blank());
        }
        CalculationInput::IncomeRatio(income) => {
            require("monthlyRent", income.monthly_rent.is_blank());
            require(
                INCOME_FIELDS,
                income.monthly_income.is_blank() && income.annual_income.is_blank(),
            );
        }
        CalculationInput::Utilities(utilities) => {
            require("monthlyRent", utilities.monthly_rent.is_blank());
        }
        CalculationInput::MoveIn(move_in) => {
            require(
                "moveInCosts.firstMonthRent",
                move_in.move_in_costs.first_month_rent.is_blank(),
            );
        }
        CalculationInput::Comparison(comparison) => {
            require(
                COMPARISON_RENT_FIELD,
                comparison
                    .comparison_leases
                    .iter()
                    .all(|lease| lease.rent.is_blank()),
            );
        }
        CalculationInput::BreakEven(break_even) => {
            let analysis = &break_even.break_even_analysis;
            require("breakEvenAnalysis.currentRent", analysis.current_rent.is_blank());
            require("breakEvenAnalysis.newRent", analysis.new_rent.is_blank());
        }
    }

    missing
}
