//! The cache-aside lifecycle manager for transactions.

use crate::{
    Error,
    transaction::{
        cache::TransactionCache,
        models::{Transaction, TransactionDto, TransactionId},
        store::TransactionStore,
    },
};

/// Coordinates the durable store and the volatile cache for transaction
/// reads and writes.
///
/// The store is the source of truth; the cache is a best-effort
/// acceleration layer that is filled after successful store operations.
/// Writing the cache is fire-and-forget: a cache failure is logged and never
/// fails the overall operation.
#[derive(Debug, Clone)]
pub struct TransactionService<S, C> {
    store: S,
    cache: C,
}

impl<S, C> TransactionService<S, C>
where
    S: TransactionStore,
    C: TransactionCache,
{
    /// Create a service over the injected `store` and `cache`.
    pub fn new(store: S, cache: C) -> Self {
        Self { store, cache }
    }

    /// Fetch the transaction with `transaction_id`.
    ///
    /// Consults the cache first; a hit bypasses the store entirely. On a
    /// miss the store record is read and written back into the cache before
    /// returning.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::InvalidArgument] if `transaction_id` is not positive,
    /// - [Error::NotFound] if no such transaction exists,
    /// - or [Error::Internal] if the store fails.
    pub fn get(&self, transaction_id: TransactionId) -> Result<TransactionDto, Error> {
        validate_transaction_id(transaction_id)?;

        if let Some(transaction) = self.cache.get(transaction_id) {
            tracing::debug!(transaction_id, "transaction found in cache");
            return Ok(TransactionDto::from_transaction(&transaction));
        }

        tracing::debug!(transaction_id, "transaction not found in cache, searching the store");
        let transaction = self
            .store
            .get(transaction_id)
            .map_err(|error| {
                tracing::error!(transaction_id, %error, "error getting transaction");
                Error::Internal("error getting transaction".to_owned())
            })?
            .ok_or_else(|| Error::NotFound("transaction not found".to_owned()))?;

        self.fill_cache(&transaction);

        Ok(TransactionDto::from_transaction(&transaction))
    }

    /// Persist a new `transaction` and cache the stored record.
    ///
    /// # Errors
    /// This function will return an [Error::Internal] if the store rejects
    /// the insert.
    pub fn save(&self, transaction: Transaction) -> Result<TransactionDto, Error> {
        let transaction = self.store.insert(transaction).map_err(|error| {
            tracing::error!(%error, "error saving transaction");
            Error::Internal("error saving transaction".to_owned())
        })?;

        self.fill_cache(&transaction);

        tracing::debug!(transaction_id = transaction.id, "transaction saved");
        Ok(TransactionDto::from_transaction(&transaction))
    }

    /// Overwrite the transaction with `transaction_id` and refresh its cache
    /// entry.
    ///
    /// The cache entry is overwritten rather than removed, so the cache
    /// stays warm for the next read.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::InvalidArgument] if `transaction_id` is not positive,
    /// - [Error::NotFound] if the row is missing or already deleted,
    /// - or [Error::Internal] if the store fails.
    pub fn update(
        &self,
        transaction_id: TransactionId,
        transaction: Transaction,
    ) -> Result<TransactionDto, Error> {
        validate_transaction_id(transaction_id)?;

        let transaction = self
            .store
            .update(transaction_id, transaction)
            .map_err(|error| {
                tracing::error!(transaction_id, %error, "error updating transaction");
                Error::Internal("error updating transaction".to_owned())
            })?
            .ok_or_else(|| Error::NotFound("transaction not found".to_owned()))?;

        self.fill_cache(&transaction);

        tracing::debug!(transaction_id, "transaction updated");
        Ok(TransactionDto::from_transaction(&transaction))
    }

    /// Logically delete the transaction with `transaction_id`.
    ///
    /// A cached snapshot that is already deleted short-circuits to not-found
    /// without touching the store. Otherwise the store record is checked,
    /// the conditional delete is issued, and the deleted snapshot is written
    /// back into the cache so later reads observe the deletion.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::InvalidArgument] if `transaction_id` is not positive,
    /// - [Error::NotFound] if the row is missing, already deleted, or a
    ///   concurrent delete won the conditional write,
    /// - or [Error::Internal] if the store fails.
    pub fn delete(&self, transaction_id: TransactionId) -> Result<(), Error> {
        validate_transaction_id(transaction_id)?;

        if let Some(cached) = self.cache.get(transaction_id) {
            tracing::debug!(transaction_id, "transaction found in cache");
            if cached.deleted {
                return Err(Error::NotFound("transaction not found".to_owned()));
            }
        }

        let mut transaction = self
            .store
            .get(transaction_id)
            .map_err(|error| {
                tracing::error!(transaction_id, %error, "error deleting transaction");
                Error::Internal("error deleting transaction".to_owned())
            })?
            .filter(|transaction| !transaction.deleted)
            .ok_or_else(|| Error::NotFound("transaction not found".to_owned()))?;

        let deleted = self.store.logical_delete(transaction_id).map_err(|error| {
            tracing::error!(transaction_id, %error, "error deleting transaction");
            Error::Internal("error deleting transaction".to_owned())
        })?;

        // Zero rows affected here means a concurrent delete got there first.
        if !deleted {
            return Err(Error::NotFound("transaction not found".to_owned()));
        }

        transaction.deleted = true;
        self.fill_cache(&transaction);

        tracing::debug!(transaction_id, "transaction deleted");
        Ok(())
    }

    /// Best-effort cache fill. Failure is logged and swallowed.
    fn fill_cache(&self, transaction: &Transaction) {
        if let Err(error) = self.cache.set(transaction.id, transaction) {
            tracing::error!(transaction_id = transaction.id, %error, "error saving transaction cache");
        }
    }
}

fn validate_transaction_id(transaction_id: TransactionId) -> Result<(), Error> {
    if transaction_id <= 0 {
        return Err(Error::InvalidArgument(format!(
            "invalid transaction id: {transaction_id}"
        )));
    }

    Ok(())
}
