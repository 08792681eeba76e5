//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    state::TransactionApiState,
    transaction::{
        cache::TransactionCache,
        models::{TransactionDto, TransactionRequest},
        store::TransactionStore,
    },
};

/// A route handler for creating a new transaction.
///
/// The request body is validated here; the ID the store assigned comes back
/// in the response body.
pub async fn create_transaction_endpoint<S, C>(
    State(state): State<TransactionApiState<S, C>>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<TransactionDto>, Error>
where
    S: TransactionStore + Clone + Send + Sync,
    C: TransactionCache + Clone + Send + Sync,
{
    let transaction = request.into_transaction()?;

    state.service.save(transaction).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::{Json, extract::State};

    use crate::{
        Error,
        state::TransactionApiState,
        test_utils::{FakeCache, FakeStore},
        transaction::{models::TransactionRequest, service::TransactionService},
    };

    use super::create_transaction_endpoint;

    fn get_test_state() -> TransactionApiState<FakeStore, FakeCache> {
        TransactionApiState {
            service: TransactionService::new(FakeStore::default(), FakeCache::default()),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let request = TransactionRequest {
            description: "test transaction".to_owned(),
            transaction_date: "2025-01-01T00:00:00Z".to_owned(),
            purchase_amount: 12.3,
        };

        let Json(dto) = create_transaction_endpoint(State(get_test_state()), Json(request))
            .await
            .unwrap();

        assert_eq!(dto.transaction_id, 1);
        assert_eq!(dto.description, "test transaction");
        assert_eq!(dto.purchase_amount, 12.3);
        assert!(!dto.deleted);
    }

    #[tokio::test]
    async fn invalid_body_is_rejected_before_the_service() {
        let state = get_test_state();
        let request = TransactionRequest {
            description: String::new(),
            transaction_date: "2025-01-01T00:00:00Z".to_owned(),
            purchase_amount: 12.3,
        };

        let result = create_transaction_endpoint(State(state), Json(request)).await;

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
