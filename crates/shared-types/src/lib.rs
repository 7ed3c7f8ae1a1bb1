pub mod input;
pub mod mode;
pub mod result;

pub use input::{
    BreakEvenAnalysis, BreakEvenInput, CalculationInput, ComparisonInput, ComparisonLease,
    DepositInput, IncomeRatioInput, MoveInCosts, MoveInInput, ProratedInput, RawField,
    RentInput, UtilitiesInput, UtilityCosts,
};
pub use mode::{CalculationMode, UnknownModeError};
pub use result::{
    BreakEvenResult, CalculationResult, ComparisonResult, DepositAssessment, DepositResult,
    IncomeRatioResult, LeaseComparisonRow, MoveInCostItem, MoveInResult, ProratedResult,
    RentResult, UtilitiesResult,
};
