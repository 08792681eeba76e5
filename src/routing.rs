//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    currency::{convert_transaction_endpoint, feed::ExchangeRateFeed},
    endpoints,
    state::AppState,
    transaction::{
        cache::TransactionCache, create_transaction_endpoint, delete_transaction_endpoint,
        get_transaction_endpoint, store::TransactionStore, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S, C, F>(state: AppState<S, C, F>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
    C: TransactionCache + Clone + Send + Sync + 'static,
    F: ExchangeRateFeed + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::PING, get(ping))
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction_endpoint::<S, C>),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint::<S, C>)
                .put(update_transaction_endpoint::<S, C>)
                .delete(delete_transaction_endpoint::<S, C>),
        )
        .route(
            endpoints::TRANSACTION_CURRENCY,
            get(convert_transaction_endpoint::<S, F>),
        )
        .with_state(state)
}

/// A route handler for checking that the server is up.
async fn ping() -> &'static str {
    "pong"
}
