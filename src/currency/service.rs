//! The currency conversion orchestrator.

use time::OffsetDateTime;

use crate::{
    Error,
    currency::{
        feed::ExchangeRateFeed,
        models::{ConvertedTransactionDto, ExchangeRate},
    },
    dates::{add_calendar_months, format_transaction_date, parse_calendar_date},
    rounding::round_to_cents,
    transaction::{models::TransactionId, store::TransactionStore},
};

/// How long an exchange rate stays applicable after its effective date.
const RATE_VALIDITY_MONTHS: u32 = 6;

const NO_DATA_MESSAGE: &str =
    "purchase cannot be converted to the target currency: no data found";
const NO_EFFECTIVE_RATE_MESSAGE: &str =
    "purchase cannot be converted to the target currency: not found effective rate to convert";

/// Derives a transaction's purchase amount in a foreign currency.
///
/// Reads the transaction straight from the durable store rather than through
/// the lifecycle manager's cache, so a conversion never compounds the
/// staleness of two independent caches.
#[derive(Debug, Clone)]
pub struct ConversionService<S, F> {
    store: S,
    feed: F,
}

impl<S, F> ConversionService<S, F>
where
    S: TransactionStore,
    F: ExchangeRateFeed,
{
    /// Create a service over the injected `store` and `feed`.
    pub fn new(store: S, feed: F) -> Self {
        Self { store, feed }
    }

    /// Convert the purchase amount of the transaction with `transaction_id`
    /// into the currency of `country`, using the most recent exchange rate
    /// whose effective date is at most six calendar months before the
    /// transaction date.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::InvalidArgument] if `transaction_id` is not positive or
    ///   `country` is empty,
    /// - [Error::FailedDependency] if the store fails,
    /// - [Error::NotFound] if the transaction is missing or deleted,
    /// - or [Error::BadGateway] if the feed fails, knows no rate for the
    ///   country, the rate is out of its eligibility window, or the rate
    ///   does not parse.
    pub async fn converted_amount(
        &self,
        transaction_id: TransactionId,
        country: &str,
    ) -> Result<ConvertedTransactionDto, Error> {
        if transaction_id <= 0 {
            return Err(Error::InvalidArgument("invalid transaction id".to_owned()));
        }

        if country.is_empty() {
            return Err(Error::InvalidArgument("invalid country name".to_owned()));
        }

        let transaction = self
            .store
            .get(transaction_id)
            .map_err(|error| Error::FailedDependency(error.to_string()))?
            .filter(|transaction| !transaction.deleted)
            .ok_or_else(|| Error::NotFound("transaction not found".to_owned()))?;

        let rates = self
            .feed
            .latest_rate(country)
            .await
            .map_err(|error| Error::BadGateway(error.to_string()))?;

        let rate_record = rates
            .first()
            .ok_or_else(|| Error::BadGateway(NO_DATA_MESSAGE.to_owned()))?;

        if !is_rate_effective(transaction.transaction_date, rate_record) {
            return Err(Error::BadGateway(NO_EFFECTIVE_RATE_MESSAGE.to_owned()));
        }

        let exchange_rate: f64 = rate_record.exchange_rate.parse().map_err(|_| {
            Error::BadGateway(format!(
                "purchase cannot be converted to the target currency: \
                 invalid exchange rate. rate={}",
                rate_record.exchange_rate
            ))
        })?;

        Ok(ConvertedTransactionDto {
            transaction_id: transaction.id,
            description: transaction.description.clone(),
            transaction_date: format_transaction_date(transaction.transaction_date),
            purchase_amount: transaction.purchase_amount,
            exchange_rate,
            converted_purchase_amount: round_to_cents(
                transaction.purchase_amount * exchange_rate,
            ),
        })
    }
}

/// Whether the rate was still current enough when the purchase happened.
///
/// The comparison is at calendar-date granularity: the window closes at the
/// end of the day six calendar months after the effective date, inclusive.
/// An unparseable effective date makes the rate ineligible.
fn is_rate_effective(transaction_date: OffsetDateTime, rate_record: &ExchangeRate) -> bool {
    let Ok(effective_date) = parse_calendar_date(&rate_record.effective_date) else {
        return false;
    };

    match add_calendar_months(effective_date, RATE_VALIDITY_MONTHS) {
        Some(window_end) => window_end >= transaction_date.date(),
        None => false,
    }
}
