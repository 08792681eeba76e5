//! Defines the endpoint for logically deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    state::TransactionApiState,
    transaction::{cache::TransactionCache, models::TransactionId, store::TransactionStore},
};

/// A route handler for logically deleting a transaction.
///
/// Deleting is terminal: deleting the same transaction again yields a
/// not-found response.
pub async fn delete_transaction_endpoint<S, C>(
    State(state): State<TransactionApiState<S, C>>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<StatusCode, Error>
where
    S: TransactionStore + Clone + Send + Sync,
    C: TransactionCache + Clone + Send + Sync,
{
    state.service.delete(transaction_id)?;

    Ok(StatusCode::NO_CONTENT)
}
