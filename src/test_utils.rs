//! Hand-rolled fakes for the store, cache and feed collaborators.
//!
//! The fakes record calls so tests can assert which collaborators an
//! operation touched, and can be switched into a failing mode to exercise
//! the error paths.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicI64, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use time::macros::datetime;

use crate::{
    Error,
    currency::feed::ExchangeRateFeed,
    currency::models::ExchangeRate,
    transaction::cache::TransactionCache,
    transaction::models::{Transaction, TransactionId},
    transaction::store::TransactionStore,
};

pub(crate) fn sample_transaction(id: TransactionId) -> Transaction {
    Transaction {
        id,
        description: "groceries".to_owned(),
        transaction_date: datetime!(2025-01-01 0:00 UTC),
        purchase_amount: 1.74,
        deleted: false,
    }
}

pub(crate) fn sample_rate(effective_date: &str, exchange_rate: &str) -> ExchangeRate {
    ExchangeRate {
        record_date: effective_date.to_owned(),
        country: "Brazil".to_owned(),
        currency: "Real".to_owned(),
        exchange_rate: exchange_rate.to_owned(),
        effective_date: effective_date.to_owned(),
    }
}

/// An in-memory [TransactionStore] that counts calls and can be forced to
/// fail.
#[derive(Clone, Default)]
pub(crate) struct FakeStore {
    pub(crate) transactions: Arc<Mutex<HashMap<TransactionId, Transaction>>>,
    next_id: Arc<AtomicI64>,
    pub(crate) fail: bool,
    pub(crate) get_calls: Arc<AtomicUsize>,
}

impl FakeStore {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_transaction(transaction: Transaction) -> Self {
        let store = Self::default();
        store.next_id.store(transaction.id, Ordering::SeqCst);
        store
            .transactions
            .lock()
            .unwrap()
            .insert(transaction.id, transaction);

        store
    }

    pub(crate) fn get_call_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), Error> {
        if self.fail {
            return Err(Error::Internal("store offline".to_owned()));
        }

        Ok(())
    }
}

impl TransactionStore for FakeStore {
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        Ok(self.transactions.lock().unwrap().get(&id).cloned())
    }

    fn insert(&self, transaction: Transaction) -> Result<Transaction, Error> {
        self.check_failure()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let transaction = Transaction {
            id,
            deleted: false,
            ..transaction
        };
        self.transactions
            .lock()
            .unwrap()
            .insert(id, transaction.clone());

        Ok(transaction)
    }

    fn update(
        &self,
        id: TransactionId,
        transaction: Transaction,
    ) -> Result<Option<Transaction>, Error> {
        self.check_failure()?;

        let mut transactions = self.transactions.lock().unwrap();
        let updatable = transactions
            .get(&id)
            .is_some_and(|existing| !existing.deleted);
        if !updatable {
            return Ok(None);
        }

        let updated = Transaction {
            id,
            deleted: false,
            ..transaction
        };
        transactions.insert(id, updated.clone());

        Ok(Some(updated))
    }

    fn logical_delete(&self, id: TransactionId) -> Result<bool, Error> {
        self.check_failure()?;

        let mut transactions = self.transactions.lock().unwrap();
        match transactions.get_mut(&id) {
            Some(existing) if !existing.deleted => {
                existing.deleted = true;

                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// An in-memory [TransactionCache] that counts sets and can be forced to
/// reject them.
#[derive(Clone, Default)]
pub(crate) struct FakeCache {
    pub(crate) entries: Arc<Mutex<HashMap<TransactionId, Transaction>>>,
    pub(crate) fail_set: bool,
    pub(crate) set_calls: Arc<AtomicUsize>,
}

impl FakeCache {
    pub(crate) fn failing() -> Self {
        Self {
            fail_set: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_entry(transaction: Transaction) -> Self {
        let cache = Self::default();
        cache
            .entries
            .lock()
            .unwrap()
            .insert(transaction.id, transaction);

        cache
    }

    pub(crate) fn entry(&self, id: TransactionId) -> Option<Transaction> {
        self.entries.lock().unwrap().get(&id).cloned()
    }

    pub(crate) fn set_call_count(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }
}

impl TransactionCache for FakeCache {
    fn get(&self, id: TransactionId) -> Option<Transaction> {
        self.entries.lock().unwrap().get(&id).cloned()
    }

    fn set(&self, id: TransactionId, transaction: &Transaction) -> Result<(), Error> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_set {
            return Err(Error::Internal(
                "error saving transaction in cache".to_owned(),
            ));
        }

        self.entries
            .lock()
            .unwrap()
            .insert(id, transaction.clone());

        Ok(())
    }
}

/// An [ExchangeRateFeed] that returns a canned response.
#[derive(Clone, Default)]
pub(crate) struct FakeFeed {
    pub(crate) rates: Vec<ExchangeRate>,
    pub(crate) error: Option<String>,
}

impl FakeFeed {
    pub(crate) fn with_rates(rates: Vec<ExchangeRate>) -> Self {
        Self { rates, error: None }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            rates: Vec::new(),
            error: Some(message.to_owned()),
        }
    }
}

#[async_trait]
impl ExchangeRateFeed for FakeFeed {
    async fn latest_rate(&self, _country: &str) -> Result<Vec<ExchangeRate>, Error> {
        match &self.error {
            Some(message) => Err(Error::BadGateway(message.clone())),
            None => Ok(self.rates.clone()),
        }
    }
}
