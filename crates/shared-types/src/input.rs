//! Calculator input records
//!
//! Every field holds the raw text the user typed. Parsing, defaulting and
//! validation belong to the calculator, so these records can be rebuilt from
//! form state on every submission without losing what was entered.

use serde::{Deserialize, Deserializer, Serialize};

use crate::mode::CalculationMode;

/// A single form value as entered by the user.
///
/// Deserializes from a JSON string or number; `null` or an absent key is an
/// empty field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawField(String);

impl RawField {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RawField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Lenient {
            Text(String),
            Integer(i64),
            Number(f64),
        }

        let text = match Option::<Lenient>::deserialize(deserializer)? {
            Some(Lenient::Text(s)) => s,
            Some(Lenient::Integer(n)) => n.to_string(),
            Some(Lenient::Number(n)) => n.to_string(),
            None => String::new(),
        };
        Ok(Self(text))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentInput {
    pub monthly_rent: RawField,
    pub lease_term_months: RawField,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProratedInput {
    pub monthly_rent: RawField,
    /// `YYYY-MM-DD`, as produced by an HTML date input
    pub move_in_date: RawField,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DepositInput {
    pub monthly_rent: RawField,
    pub security_deposit: RawField,
}

/// Either income field satisfies the requirement. When both are set, each
/// feeds its own ratio; when only one is set, the other is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeRatioInput {
    pub monthly_rent: RawField,
    pub monthly_income: RawField,
    pub annual_income: RawField,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UtilitiesInput {
    pub monthly_rent: RawField,
    pub utilities: UtilityCosts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityCosts {
    pub electricity: RawField,
    pub water: RawField,
    pub gas: RawField,
    pub internet: RawField,
    pub trash: RawField,
}

impl UtilityCosts {
    /// Values paired with their field names, in display order
    pub fn entries(&self) -> [(&'static str, &RawField); 5] {
        [
            ("electricity", &self.electricity),
            ("water", &self.water),
            ("gas", &self.gas),
            ("internet", &self.internet),
            ("trash", &self.trash),
        ]
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut RawField> {
        match name {
            "electricity" => Some(&mut self.electricity),
            "water" => Some(&mut self.water),
            "gas" => Some(&mut self.gas),
            "internet" => Some(&mut self.internet),
            "trash" => Some(&mut self.trash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveInInput {
    pub move_in_costs: MoveInCosts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveInCosts {
    pub first_month_rent: RawField,
    pub last_month_rent: RawField,
    pub security_deposit: RawField,
    pub pet_deposit: RawField,
    pub application_fee: RawField,
    pub broker_fee: RawField,
    pub moving_costs: RawField,
    pub utility_deposits: RawField,
}

impl MoveInCosts {
    /// Values paired with their camelCase field names, in display order
    pub fn entries(&self) -> [(&'static str, &RawField); 8] {
        [
            ("firstMonthRent", &self.first_month_rent),
            ("lastMonthRent", &self.last_month_rent),
            ("securityDeposit", &self.security_deposit),
            ("petDeposit", &self.pet_deposit),
            ("applicationFee", &self.application_fee),
            ("brokerFee", &self.broker_fee),
            ("movingCosts", &self.moving_costs),
            ("utilityDeposits", &self.utility_deposits),
        ]
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut RawField> {
        match name {
            "firstMonthRent" => Some(&mut self.first_month_rent),
            "lastMonthRent" => Some(&mut self.last_month_rent),
            "securityDeposit" => Some(&mut self.security_deposit),
            "petDeposit" => Some(&mut self.pet_deposit),
            "applicationFee" => Some(&mut self.application_fee),
            "brokerFee" => Some(&mut self.broker_fee),
            "movingCosts" => Some(&mut self.moving_costs),
            "utilityDeposits" => Some(&mut self.utility_deposits),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonInput {
    pub comparison_leases: Vec<ComparisonLease>,
}

/// One candidate lease. `utilities` is the estimated monthly utility spend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonLease {
    pub name: RawField,
    pub rent: RawField,
    pub deposit: RawField,
    pub term: RawField,
    pub utilities: RawField,
}

impl ComparisonLease {
    pub fn field_mut(&mut self, name: &str) -> Option<&mut RawField> {
        match name {
            "name" => Some(&mut self.name),
            "rent" => Some(&mut self.rent),
            "deposit" => Some(&mut self.deposit),
            "term" => Some(&mut self.term),
            "utilities" => Some(&mut self.utilities),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakEvenInput {
    pub break_even_analysis: BreakEvenAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakEvenAnalysis {
    pub current_rent: RawField,
    pub new_rent: RawField,
    pub moving_costs: RawField,
    pub current_deposit: RawField,
    pub new_deposit: RawField,
}

impl BreakEvenAnalysis {
    pub fn field_mut(&mut self, name: &str) -> Option<&mut RawField> {
        match name {
            "currentRent" => Some(&mut self.current_rent),
            "newRent" => Some(&mut self.new_rent),
            "movingCosts" => Some(&mut self.moving_costs),
            "currentDeposit" => Some(&mut self.current_deposit),
            "newDeposit" => Some(&mut self.new_deposit),
            _ => None,
        }
    }
}

/// Input for one calculation, tagged by mode.
///
/// JSON form: `{"mode": "deposit", "monthlyRent": "1000", "securityDeposit": "2500"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum CalculationInput {
    Rent(RentInput),
    Prorated(ProratedInput),
    Deposit(DepositInput),
    IncomeRatio(IncomeRatioInput),
    Utilities(UtilitiesInput),
    MoveIn(MoveInInput),
    Comparison(ComparisonInput),
    BreakEven(BreakEvenInput),
}

impl CalculationInput {
    pub fn mode(&self) -> CalculationMode {
        match self {
            CalculationInput::Rent(_) => CalculationMode::Rent,
            CalculationInput::Prorated(_) => CalculationMode::Prorated,
            CalculationInput::Deposit(_) => CalculationMode::Deposit,
            CalculationInput::IncomeRatio(_) => CalculationMode::IncomeRatio,
            CalculationInput::Utilities(_) => CalculationMode::Utilities,
            CalculationInput::MoveIn(_) => CalculationMode::MoveIn,
            CalculationInput::Comparison(_) => CalculationMode::Comparison,
            CalculationInput::BreakEven(_) => CalculationMode::BreakEven,
        }
    }

    /// A blank form for `mode`
    pub fn empty(mode: CalculationMode) -> Self {
        match mode {
            CalculationMode::Rent => CalculationInput::Rent(RentInput::default()),
            CalculationMode::Prorated => CalculationInput::Prorated(ProratedInput::default()),
            CalculationMode::Deposit => CalculationInput::Deposit(DepositInput::default()),
            CalculationMode::IncomeRatio => {
                CalculationInput::IncomeRatio(IncomeRatioInput::default())
            }
            CalculationMode::Utilities => CalculationInput::Utilities(UtilitiesInput::default()),
            CalculationMode::MoveIn => CalculationInput::MoveIn(MoveInInput::default()),
            CalculationMode::Comparison => {
                CalculationInput::Comparison(ComparisonInput::default())
            }
            CalculationMode::BreakEven => CalculationInput::BreakEven(BreakEvenInput::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_field_accepts_strings_numbers_and_null() {
        let json = r#"{"mode":"deposit","monthlyRent":1000,"securityDeposit":"2,500"}"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            input,
            CalculationInput::Deposit(DepositInput {
                monthly_rent: "1000".into(),
                security_deposit: "2,500".into(),
            })
        );

        let json = r#"{"mode":"rent","monthlyRent":1250.5,"leaseTermMonths":null}"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        match input {
            CalculationInput::Rent(rent) => {
                assert_eq!(rent.monthly_rent.as_str(), "1250.5");
                assert!(rent.lease_term_months.is_blank());
            }
            other => panic!("expected rent input, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_default_to_blank() {
        let input: CalculationInput = serde_json::from_str(r#"{"mode":"utilities"}"#).unwrap();
        assert_eq!(input, CalculationInput::empty(CalculationMode::Utilities));
    }

    #[test]
    fn test_nested_groups_use_camel_case() {
        let json = r#"{
            "mode": "break-even",
            "breakEvenAnalysis": {"currentRent": "2000", "newRent": "1800", "newDeposit": "1800"}
        }"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        let CalculationInput::BreakEven(be) = input else {
            panic!("expected break-even input");
        };
        assert_eq!(be.break_even_analysis.current_rent.as_str(), "2000");
        assert_eq!(be.break_even_analysis.new_deposit.as_str(), "1800");
        assert!(be.break_even_analysis.moving_costs.is_blank());
    }

    #[test]
    fn test_comparison_leases_deserialize() {
        let json = r#"{
            "mode": "comparison",
            "comparisonLeases": [
                {"name": "Downtown", "rent": "1500", "term": 12},
                {"rent": 1400, "deposit": "1400", "utilities": "100"}
            ]
        }"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        let CalculationInput::Comparison(cmp) = input else {
            panic!("expected comparison input");
        };
        assert_eq!(cmp.comparison_leases.len(), 2);
        assert_eq!(cmp.comparison_leases[0].name.as_str(), "Downtown");
        assert_eq!(cmp.comparison_leases[0].term.as_str(), "12");
        assert!(cmp.comparison_leases[1].name.is_blank());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = serde_json::from_str::<CalculationInput>(r#"{"mode":"mortgage"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_matches_mode() {
        for mode in CalculationMode::ALL {
            assert_eq!(CalculationInput::empty(mode).mode(), mode);
        }
    }
}
