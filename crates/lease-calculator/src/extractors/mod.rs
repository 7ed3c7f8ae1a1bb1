pub mod numeric;

pub use numeric::{
    amount_or_zero, parse_amount, percent_of, required_amount, round_money, round_percent,
    MAX_AMOUNT, MAX_SCALE,
};
