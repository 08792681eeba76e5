//! Defines the endpoint for fetching a transaction by its ID.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    state::TransactionApiState,
    transaction::{
        cache::TransactionCache,
        models::{TransactionDto, TransactionId},
        store::TransactionStore,
    },
};

/// A route handler for fetching a single transaction.
pub async fn get_transaction_endpoint<S, C>(
    State(state): State<TransactionApiState<S, C>>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<TransactionDto>, Error>
where
    S: TransactionStore + Clone + Send + Sync,
    C: TransactionCache + Clone + Send + Sync,
{
    state.service.get(transaction_id).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
    };

    use crate::{
        Error,
        state::TransactionApiState,
        test_utils::{FakeCache, FakeStore, sample_transaction},
        transaction::service::TransactionService,
    };

    use super::get_transaction_endpoint;

    #[tokio::test]
    async fn returns_the_transaction() {
        let state = TransactionApiState {
            service: TransactionService::new(
                FakeStore::with_transaction(sample_transaction(1)),
                FakeCache::default(),
            ),
        };

        let Json(dto) = get_transaction_endpoint(State(state), Path(1))
            .await
            .unwrap();

        assert_eq!(dto.transaction_id, 1);
        assert_eq!(dto.description, "groceries");
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let state = TransactionApiState {
            service: TransactionService::new(FakeStore::default(), FakeCache::default()),
        };

        let result = get_transaction_endpoint(State(state), Path(1)).await;

        assert_eq!(
            result.map(|Json(dto)| dto),
            Err(Error::NotFound("transaction not found".to_owned()))
        );
    }
}
