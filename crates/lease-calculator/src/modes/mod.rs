//! Formula sets, one module per calculator mode
//!
//! Each module exposes a pure `calculate_*` function taking that mode's raw
//! input record and returning its rounded result record.

pub mod break_even;
pub mod comparison;
pub mod deposit;
pub mod income_ratio;
pub mod move_in;
pub mod prorated;
pub mod rent;
pub mod utilities;

pub use break_even::calculate_break_even;
pub use comparison::calculate_comparison;
pub use deposit::calculate_deposit;
pub use income_ratio::calculate_income_ratio;
pub use move_in::calculate_move_in;
pub use prorated::calculate_prorated;
pub use rent::calculate_rent;
pub use utilities::calculate_utilities;
