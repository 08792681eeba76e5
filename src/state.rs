//! Implements the structs that hold the state of the REST server.

use axum::extract::FromRef;

use crate::{
    currency::{
        feed::{ExchangeRateFeed, TreasuryClient},
        service::ConversionService,
    },
    transaction::{
        cache::{MokaTransactionCache, TransactionCache},
        service::TransactionService,
        store::{SqliteTransactionStore, TransactionStore},
    },
};

/// The state of the REST server.
///
/// The collaborators are injected rather than reached through globals, so
/// tests can substitute fakes without process-wide state.
#[derive(Debug, Clone)]
pub struct AppState<S, C, F> {
    /// The cache-aside lifecycle service for transactions.
    pub transaction_service: TransactionService<S, C>,
    /// The currency conversion service.
    pub conversion_service: ConversionService<S, F>,
}

/// The state of the production server: SQLite store, moka cache, Treasury
/// feed.
pub type SqliteAppState = AppState<SqliteTransactionStore, MokaTransactionCache, TreasuryClient>;

impl<S, C, F> AppState<S, C, F>
where
    S: TransactionStore + Clone,
    C: TransactionCache,
    F: ExchangeRateFeed,
{
    /// Create a new [AppState] over the injected collaborators.
    ///
    /// The store is shared by both services; the conversion service reads it
    /// directly, bypassing the cache.
    pub fn new(store: S, cache: C, feed: F) -> Self {
        Self {
            transaction_service: TransactionService::new(store.clone(), cache),
            conversion_service: ConversionService::new(store, feed),
        }
    }
}

/// The state needed for the transaction CRUD endpoints.
#[derive(Debug, Clone)]
pub struct TransactionApiState<S, C> {
    /// The cache-aside lifecycle service for transactions.
    pub service: TransactionService<S, C>,
}

impl<S, C, F> FromRef<AppState<S, C, F>> for TransactionApiState<S, C>
where
    S: Clone,
    C: Clone,
{
    fn from_ref(state: &AppState<S, C, F>) -> Self {
        Self {
            service: state.transaction_service.clone(),
        }
    }
}

/// The state needed for the currency conversion endpoint.
#[derive(Debug, Clone)]
pub struct ConversionApiState<S, F> {
    /// The currency conversion service.
    pub service: ConversionService<S, F>,
}

impl<S, C, F> FromRef<AppState<S, C, F>> for ConversionApiState<S, F>
where
    S: Clone,
    F: Clone,
{
    fn from_ref(state: &AppState<S, C, F>) -> Self {
        Self {
            service: state.conversion_service.clone(),
        }
    }
}
