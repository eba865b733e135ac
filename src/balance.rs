//! The income, outcome and total computed by the transactions API.

use serde::{Deserialize, Deserializer, de};

/// A balance amount in the form the API sent it.
///
/// The API sends amounts as numeric strings (or plain JSON numbers). An
/// amount that has not been loaded yet is not a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Amount(Option<String>);

impl Amount {
    /// An amount for the numeric string `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// The amount as a number, or NaN if it has not been loaded.
    pub fn value(&self) -> f64 {
        match &self.0 {
            Some(text) => text.trim().parse().unwrap_or(f64::NAN),
            None => f64::NAN,
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAmount {
            Text(String),
            Number(f64),
        }

        let text = match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(text) => text,
            RawAmount::Number(number) => number.to_string(),
        };

        match text.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Amount(Some(text))),
            _ => Err(de::Error::custom(format!(
                "balance amount \"{text}\" is not a number"
            ))),
        }
    }
}

/// The totals across all of the user's transactions.
///
/// The totals are trusted as given, `total` is not checked against
/// `income - outcome`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Balance {
    /// The sum of all income.
    pub income: Amount,
    /// The sum of all outcome.
    pub outcome: Amount,
    /// Income minus outcome.
    pub total: Amount,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Amount, Balance};

    #[test]
    fn deserializes_numeric_strings() {
        let balance: Balance = serde_json::from_value(json!({
            "income": "1000",
            "outcome": "250.5",
            "total": "749.5"
        }))
        .unwrap();

        assert_eq!(balance.income.value(), 1000.0);
        assert_eq!(balance.outcome.value(), 250.5);
        assert_eq!(balance.total.value(), 749.5);
    }

    #[test]
    fn deserializes_numbers() {
        let balance: Balance = serde_json::from_value(json!({
            "income": 1000,
            "outcome": 0,
            "total": -12.25
        }))
        .unwrap();

        assert_eq!(balance.income, Amount::new("1000"));
        assert_eq!(balance.outcome.value(), 0.0);
        assert_eq!(balance.total.value(), -12.25);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let result = serde_json::from_value::<Balance>(json!({
            "income": "lots",
            "outcome": "0",
            "total": "0"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_amount() {
        let result = serde_json::from_value::<Balance>(json!({
            "income": "10",
            "outcome": "0"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn does_not_check_total() {
        let balance: Balance = serde_json::from_value(json!({
            "income": "10",
            "outcome": "5",
            "total": "100"
        }))
        .unwrap();

        assert_eq!(balance.total.value(), 100.0);
    }

    #[test]
    fn unloaded_balance_is_not_a_number() {
        let balance = Balance::default();

        assert!(balance.income.value().is_nan());
        assert!(balance.outcome.value().is_nan());
        assert!(balance.total.value().is_nan());
    }
}
