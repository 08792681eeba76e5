//! Defines the transaction domain model and its wire representations.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    dates::{format_transaction_date, parse_transaction_date},
    rounding::round_to_cents,
};

/// Alias for the type used for transaction IDs.
pub type TransactionId = i64;

/// A record of a purchase.
///
/// The ID is assigned by the durable store on insert and is immutable
/// afterwards. The `deleted` flag only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the purchase happened.
    pub transaction_date: OffsetDateTime,
    /// The amount of money spent, rounded to cents.
    pub purchase_amount: f64,
    /// Whether the transaction has been logically deleted.
    pub deleted: bool,
}

/// The JSON representation of a transaction returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    /// The ID of the transaction.
    pub transaction_id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the purchase happened, as an RFC 3339 date-time.
    pub transaction_date: String,
    /// The amount of money spent.
    pub purchase_amount: f64,
    /// Whether the transaction has been logically deleted. Omitted while
    /// false.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
}

impl TransactionDto {
    /// Build the wire representation of `transaction`.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            transaction_id: transaction.id,
            description: transaction.description.clone(),
            transaction_date: format_transaction_date(transaction.transaction_date),
            purchase_amount: transaction.purchase_amount,
            deleted: transaction.deleted,
        }
    }
}

/// The maximum length of a transaction description in characters.
const DESCRIPTION_LENGTH_LIMIT: usize = 50;

/// The JSON body accepted when creating or updating a transaction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionRequest {
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the purchase happened, as an RFC 3339 date-time.
    pub transaction_date: String,
    /// The amount of money spent.
    pub purchase_amount: f64,
}

impl TransactionRequest {
    /// Validate the request and convert it into a [Transaction].
    ///
    /// The purchase amount is rounded to cents here so that the persisted,
    /// cached and returned representations of the amount always agree.
    ///
    /// # Errors
    /// Returns an [Error::InvalidArgument] naming the offending field if the
    /// description is empty or longer than 50 characters, the date is not a
    /// valid RFC 3339 date-time, or the amount is not positive.
    pub fn into_transaction(self) -> Result<Transaction, Error> {
        if self.description.is_empty()
            || self.description.chars().count() > DESCRIPTION_LENGTH_LIMIT
        {
            return Err(Error::InvalidArgument(
                "invalid description, it must be between 1 and 50 characters".to_owned(),
            ));
        }

        if self.transaction_date.is_empty() {
            return Err(Error::InvalidArgument(
                "transaction date must not be empty".to_owned(),
            ));
        }

        let transaction_date = parse_transaction_date(&self.transaction_date).map_err(|_| {
            Error::InvalidArgument(
                "invalid transaction date, expected an RFC 3339 date-time".to_owned(),
            )
        })?;

        if self.purchase_amount <= 0.0 {
            return Err(Error::InvalidArgument(
                "invalid purchase amount, it must be greater than 0".to_owned(),
            ));
        }

        Ok(Transaction {
            id: 0,
            description: self.description,
            transaction_date,
            purchase_amount: round_to_cents(self.purchase_amount),
            deleted: false,
        })
    }
}
