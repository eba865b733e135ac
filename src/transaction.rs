//! Transactions as sent by the transactions API and their display-ready form.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, de};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};
use time_tz::Tz;

use crate::{Error, currency::format_value, timezone};

/// The opaque identifier the API assigns to a transaction.
///
/// The API may send IDs as strings (e.g. UUIDs) or integers, both are kept
/// as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an ID received from the API.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as sent by the API.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Integer(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => TransactionId(id),
            RawId::Integer(id) => TransactionId(id.to_string()),
        })
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Outcome,
}

impl TransactionType {
    /// The CSS class used to style values of this type.
    pub fn css_class(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

/// The category a transaction is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// The name of the category, e.g. "Food".
    pub title: String,
}

/// When a transaction was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedAt {
    /// A point in time. Plain dates are midnight UTC.
    Instant(OffsetDateTime),
    /// A wall-clock date-time sent without an offset, read in the display
    /// timezone.
    Local(PrimitiveDateTime),
}

impl From<OffsetDateTime> for CreatedAt {
    fn from(date_time: OffsetDateTime) -> Self {
        CreatedAt::Instant(date_time)
    }
}

/// An income or outcome as returned by the transactions API.
///
/// `value` is always the magnitude of the transaction; whether it is money
/// coming in or going out is given by `transaction_type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The ID the API assigned to the transaction.
    pub id: TransactionId,
    /// A short description of what the transaction was for.
    pub title: String,
    /// The amount of money earned or spent.
    pub value: f64,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the transaction is filed under.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: CreatedAt,
}

/// A [Transaction] with its value and creation date formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTransaction {
    /// The transaction as received from the API.
    pub transaction: Transaction,
    /// The value as a currency string, e.g. "R$ 1.500,50".
    pub formatted_value: String,
    /// The creation date as "dd/mm/yyyy" in the display timezone.
    pub formatted_date: String,
}

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day padding:zero]/[month repr:numerical padding:zero]/[year]");

/// Turns transactions into [FormattedTransaction]s, showing dates in a fixed
/// timezone.
#[derive(Clone)]
pub struct TransactionFormatter {
    timezone: &'static Tz,
    timezone_name: String,
}

impl std::fmt::Debug for TransactionFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionFormatter")
            .field("timezone", &self.timezone_name)
            .finish()
    }
}

impl TransactionFormatter {
    /// Create a formatter that shows dates in `canonical_timezone`, e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if the timezone name is not recognised.
    pub fn new(canonical_timezone: &str) -> Result<Self, Error> {
        let timezone = timezone::get_timezone(canonical_timezone).ok_or_else(|| {
            tracing::error!("Invalid timezone {}", canonical_timezone);
            Error::InvalidTimezone(canonical_timezone.to_owned())
        })?;

        Ok(Self {
            timezone,
            timezone_name: canonical_timezone.to_owned(),
        })
    }

    /// Format every transaction, keeping the order they were given in.
    pub fn format_all(&self, transactions: Vec<Transaction>) -> Vec<FormattedTransaction> {
        transactions
            .into_iter()
            .map(|transaction| self.format(transaction))
            .collect()
    }

    /// Add the display strings to `transaction`.
    ///
    /// The value is formatted the same way for income and outcome, the sign is
    /// left to the view.
    pub fn format(&self, transaction: Transaction) -> FormattedTransaction {
        FormattedTransaction {
            formatted_value: format_value(transaction.value),
            formatted_date: self.format_date(transaction.created_at),
            transaction,
        }
    }

    /// Format `created_at` as "dd/mm/yyyy" in the display timezone.
    pub fn format_date(&self, created_at: CreatedAt) -> String {
        let date = match created_at {
            CreatedAt::Instant(instant) => timezone::to_local(instant, self.timezone).date(),
            // Already wall-clock time in the display timezone.
            CreatedAt::Local(local) => local.date(),
        };

        date.format(DISPLAY_DATE_FORMAT)
            .unwrap_or_else(|_| date.to_string())
    }
}

const DATE_TIME_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Parse a creation timestamp.
///
/// Accepts RFC 3339 timestamps, ISO 8601 date-times without an offset and
/// plain ISO 8601 dates. Date-times without an offset are local to the
/// display timezone, plain dates are midnight UTC.
pub fn parse_created_at(text: &str) -> Option<CreatedAt> {
    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(CreatedAt::Instant(date_time));
    }

    if let Ok(date_time) = PrimitiveDateTime::parse(text, DATE_TIME_FORMAT) {
        return Some(CreatedAt::Local(date_time));
    }

    Date::parse(text, DATE_FORMAT)
        .ok()
        .map(|date| CreatedAt::Instant(date.midnight().assume_utc()))
}

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<CreatedAt, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    parse_created_at(&text)
        .ok_or_else(|| de::Error::custom(format!("invalid created_at timestamp \"{text}\"")))
}
