//! The exchange-rate feed trait and its US Treasury client.

use async_trait::async_trait;

use crate::{
    Error,
    config::{FEED_RATES_PATH, FeedConfig},
    currency::models::{ExchangeRate, RatesResponse},
};

/// A time-series source of exchange rates keyed by country name.
#[async_trait]
pub trait ExchangeRateFeed {
    /// Fetch the most recent rate records for `country`, newest record date
    /// first.
    ///
    /// Implementations request a single record; an empty sequence means the
    /// feed knows nothing about the country.
    async fn latest_rate(&self, country: &str) -> Result<Vec<ExchangeRate>, Error>;
}

/// Fetches rates from the US Treasury Rates of Exchange dataset.
#[derive(Debug, Clone)]
pub struct TreasuryClient {
    rates_url: String,
    client: reqwest::Client,
}

impl TreasuryClient {
    /// Create a client for the feed described by `config`.
    ///
    /// The configured timeout bounds every call made through this client,
    /// connection setup included.
    ///
    /// # Errors
    /// Returns an [Error::Internal] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &FeedConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| {
                Error::Internal(format!("error building exchange rate feed client: {error}"))
            })?;

        Ok(Self {
            rates_url: format!("{}{}", config.base_url, FEED_RATES_PATH),
            client,
        })
    }
}

#[async_trait]
impl ExchangeRateFeed for TreasuryClient {
    async fn latest_rate(&self, country: &str) -> Result<Vec<ExchangeRate>, Error> {
        let filter = format!("country:eq:{country}");

        tracing::debug!(url = %self.rates_url, country, "querying the exchange rate feed");
        let response = self
            .client
            .get(&self.rates_url)
            .query(&[
                (
                    "fields",
                    "record_date,country,exchange_rate,currency,effective_date",
                ),
                ("filter", filter.as_str()),
                ("sort", "-record_date"),
                ("page[number]", "1"),
                ("page[size]", "1"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|error| Error::BadGateway(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status_code = status.as_u16(), "exchange rate feed call failed");
            return Err(Error::BadGateway(format!(
                "exchange rate feed call error [status_code:{}]",
                status.as_u16()
            )));
        }

        let rates: RatesResponse = response
            .json()
            .await
            .map_err(|error| Error::BadGateway(error.to_string()))?;

        Ok(rates.data)
    }
}
