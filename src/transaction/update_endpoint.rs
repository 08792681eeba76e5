//! Defines the endpoint for updating an existing transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    state::TransactionApiState,
    transaction::{
        cache::TransactionCache,
        models::{TransactionDto, TransactionId, TransactionRequest},
        store::TransactionStore,
    },
};

/// A route handler for overwriting a transaction.
///
/// Updating a transaction that is missing or already deleted yields a
/// not-found response.
pub async fn update_transaction_endpoint<S, C>(
    State(state): State<TransactionApiState<S, C>>,
    Path(transaction_id): Path<TransactionId>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<TransactionDto>, Error>
where
    S: TransactionStore + Clone + Send + Sync,
    C: TransactionCache + Clone + Send + Sync,
{
    let transaction = request.into_transaction()?;

    state.service.update(transaction_id, transaction).map(Json)
}
