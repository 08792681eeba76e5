//! Defines the exchange-rate records and the converted transaction view.

use serde::{Deserialize, Serialize};

use crate::transaction::models::TransactionId;

/// One record from the exchange-rate feed.
///
/// Dates and the rate itself arrive as text; the conversion orchestrator
/// parses them and classifies anything unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// When the feed recorded this rate, as `YYYY-MM-DD`.
    pub record_date: String,
    /// The country the rate applies to.
    pub country: String,
    /// The name of the target currency.
    pub currency: String,
    /// The exchange rate as a decimal encoded in text.
    pub exchange_rate: String,
    /// The first day the rate is effective, as `YYYY-MM-DD`.
    pub effective_date: String,
}

/// The envelope the feed wraps its records in.
///
/// Records arrive sorted newest record date first; only the first one is
/// used.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesResponse {
    /// The matching exchange-rate records.
    pub data: Vec<ExchangeRate>,
}

/// A transaction joined with an applied exchange rate.
///
/// Derived per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedTransactionDto {
    /// The ID of the transaction.
    pub transaction_id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the purchase happened, as an RFC 3339 date-time.
    pub transaction_date: String,
    /// The original purchase amount.
    pub purchase_amount: f64,
    /// The rate that was applied.
    pub exchange_rate: f64,
    /// The purchase amount in the target currency, rounded to cents.
    pub converted_purchase_amount: f64,
}

/// A country name as received from the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Country(String);

impl Country {
    /// Wrap a raw country name.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The name reduced to letters and single spaces, trimmed.
    ///
    /// The feed matches country names literally, so digits and punctuation
    /// can only produce false misses.
    pub fn normalized(&self) -> String {
        let kept: String = self
            .0
            .chars()
            .filter(|character| character.is_alphabetic() || character.is_whitespace())
            .collect();

        kept.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
