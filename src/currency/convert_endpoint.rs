//! Defines the endpoint for converting a transaction into a foreign
//! currency.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    currency::{
        feed::ExchangeRateFeed,
        models::{ConvertedTransactionDto, Country},
    },
    state::ConversionApiState,
    transaction::{models::TransactionId, store::TransactionStore},
};

/// A route handler for fetching a transaction with its purchase amount
/// converted into the currency of the given country.
///
/// The country name is normalized before it reaches the conversion service;
/// a name that normalizes to nothing is rejected as invalid.
pub async fn convert_transaction_endpoint<S, F>(
    State(state): State<ConversionApiState<S, F>>,
    Path((transaction_id, country)): Path<(TransactionId, String)>,
) -> Result<Json<ConvertedTransactionDto>, Error>
where
    S: TransactionStore + Clone + Send + Sync,
    F: ExchangeRateFeed + Clone + Send + Sync,
{
    let country = Country::new(country).normalized();

    state
        .service
        .converted_amount(transaction_id, &country)
        .await
        .map(Json)
}
