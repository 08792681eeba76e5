//! The volatile cache trait for transactions and its moka implementation.

use moka::sync::Cache;

use crate::{
    Error,
    config::CachePolicy,
    transaction::models::{Transaction, TransactionId},
};

/// A best-effort acceleration layer over the durable store.
///
/// An entry that has expired or been evicted is indistinguishable from one
/// that was never cached; absence is not an error. Implementations must be
/// safe for concurrent use from multiple request handlers.
pub trait TransactionCache {
    /// Look up the cached snapshot for `id`.
    fn get(&self, id: TransactionId) -> Option<Transaction>;

    /// Store a snapshot for `id`, replacing any existing entry.
    fn set(&self, id: TransactionId, transaction: &Transaction) -> Result<(), Error>;
}

/// Caches transaction snapshots in a moka in-process cache.
///
/// Entries are charged the uniform cost and time-to-live from the
/// [CachePolicy] they were built with; eviction beyond that is moka's
/// business.
#[derive(Clone)]
pub struct MokaTransactionCache {
    cache: Cache<TransactionId, Transaction>,
}

impl MokaTransactionCache {
    /// Create a cache that enforces `policy`.
    pub fn new(policy: CachePolicy) -> Self {
        let cache = Cache::builder()
            .max_capacity(policy.max_cost)
            .time_to_live(policy.ttl)
            .weigher(move |_id, _transaction| policy.entry_cost)
            .build();

        Self { cache }
    }
}

impl TransactionCache for MokaTransactionCache {
    fn get(&self, id: TransactionId) -> Option<Transaction> {
        self.cache.get(&id)
    }

    fn set(&self, id: TransactionId, transaction: &Transaction) -> Result<(), Error> {
        self.cache.insert(id, transaction.clone());

        Ok(())
    }
}
