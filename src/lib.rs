//! Transactions-rs is a record-keeping service for financial transactions.
//!
//! This library provides a REST API for creating, reading, updating and
//! logically deleting purchase transactions, plus a derived view that
//! converts a transaction's purchase amount into a foreign currency using
//! the US Treasury Rates of Exchange feed.
//!
//! Reads go through a cache-aside layer: a volatile in-process cache is
//! consulted first and filled from the SQLite store on a miss. The store is
//! the source of truth; the cache is best-effort acceleration only.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod config;
mod currency;
mod dates;
mod db;
mod endpoints;
mod error;
mod rounding;
mod routing;
mod state;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use config::{CachePolicy, FeedConfig};
pub use currency::{
    ConversionService, ConvertedTransactionDto, Country, ExchangeRate, ExchangeRateFeed,
    RatesResponse, TreasuryClient,
};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use rounding::round_to_cents;
pub use routing::build_router;
pub use state::{AppState, ConversionApiState, SqliteAppState, TransactionApiState};
pub use transaction::{
    MokaTransactionCache, SqliteTransactionStore, Transaction, TransactionCache, TransactionDto,
    TransactionId, TransactionRequest, TransactionService, TransactionStore,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
