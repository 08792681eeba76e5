//! The durable store trait for transactions and its SQLite implementation.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    dates::{format_transaction_date, parse_transaction_date},
    transaction::models::{Transaction, TransactionId},
};

/// Handles persistence of transactions.
///
/// The store is the sole writer of durable state. Implementations must be
/// safe for concurrent use from multiple request handlers.
pub trait TransactionStore {
    /// Retrieve a transaction by its `id`, including logically deleted rows.
    ///
    /// Absence is reported as `Ok(None)`, not as an error.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error>;

    /// Insert a new transaction, returning it with its assigned ID.
    fn insert(&self, transaction: Transaction) -> Result<Transaction, Error>;

    /// Overwrite the transaction with `id`, unless it is missing or already
    /// logically deleted, in which case `Ok(None)` is returned.
    fn update(&self, id: TransactionId, transaction: Transaction)
    -> Result<Option<Transaction>, Error>;

    /// Mark the transaction with `id` as deleted, conditionally on it not
    /// being deleted yet. Returns whether a row was changed.
    fn logical_delete(&self, id: TransactionId) -> Result<bool, Error>;
}

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Map a database row to a [Transaction].
    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        let id = row.get(0)?;
        let description = row.get(1)?;
        let date_text: String = row.get(2)?;
        let purchase_amount = row.get(3)?;
        let deleted = row.get(4)?;

        let transaction_date = parse_transaction_date(&date_text).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                Box::new(error),
            )
        })?;

        Ok(Transaction {
            id,
            description,
            transaction_date,
            purchase_amount,
            deleted,
        })
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return an [Error::Internal] if there is an SQL
    /// error.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, description, transaction_date, purchase_amount, deleted
                 FROM \"transaction\" WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)
            .optional()?;

        Ok(transaction)
    }

    /// Insert a new transaction in the database.
    ///
    /// The `id` and `deleted` fields of the argument are ignored; the
    /// database assigns the ID and new rows are never deleted.
    ///
    /// # Errors
    /// This function will return an [Error::Internal] if there is an SQL
    /// error.
    fn insert(&self, transaction: Transaction) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO \"transaction\" (description, transaction_date, purchase_amount)
                 VALUES (?1, ?2, ?3)
                 RETURNING id, description, transaction_date, purchase_amount, deleted",
            )?
            .query_row(
                (
                    &transaction.description,
                    format_transaction_date(transaction.transaction_date),
                    transaction.purchase_amount,
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Overwrite the transaction with `id` if it exists and is not deleted.
    ///
    /// # Errors
    /// This function will return an [Error::Internal] if there is an SQL
    /// error.
    fn update(
        &self,
        id: TransactionId,
        transaction: Transaction,
    ) -> Result<Option<Transaction>, Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "UPDATE \"transaction\"
             SET description = ?1, transaction_date = ?2, purchase_amount = ?3
             WHERE id = ?4 AND deleted = 0",
            params![
                &transaction.description,
                format_transaction_date(transaction.transaction_date),
                transaction.purchase_amount,
                id,
            ],
        )?;

        if rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Transaction {
            id,
            deleted: false,
            ..transaction
        }))
    }

    /// Mark the transaction with `id` as deleted.
    ///
    /// Conditional on the row not being deleted yet, so a lost race with a
    /// concurrent delete reports `false` rather than succeeding twice.
    ///
    /// # Errors
    /// This function will return an [Error::Internal] if there is an SQL
    /// error.
    fn logical_delete(&self, id: TransactionId) -> Result<bool, Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "UPDATE \"transaction\" SET deleted = 1 WHERE id = ?1 AND deleted = 0",
            params![id],
        )?;

        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{db::initialize, transaction::models::Transaction};

    use super::{SqliteTransactionStore, TransactionStore};

    fn get_test_store() -> SqliteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SqliteTransactionStore::new(Arc::new(Mutex::new(connection)))
    }

    fn sample_transaction() -> Transaction {
        Transaction {
            id: 0,
            description: "groceries".to_owned(),
            transaction_date: datetime!(2025-01-01 0:00 UTC),
            purchase_amount: 1.74,
            deleted: false,
        }
    }

    #[test]
    fn insert_assigns_ids_starting_at_one() {
        let store = get_test_store();

        let first = store.insert(sample_transaction()).unwrap();
        let second = store.insert(sample_transaction()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn get_returns_the_inserted_row() {
        let store = get_test_store();
        let inserted = store.insert(sample_transaction()).unwrap();

        let got = store.get(inserted.id).unwrap();

        assert_eq!(got, Some(inserted));
    }

    #[test]
    fn get_preserves_the_date_offset() {
        let store = get_test_store();
        let transaction = Transaction {
            transaction_date: datetime!(2025-06-15 13:45:30 +02:00),
            ..sample_transaction()
        };

        let inserted = store.insert(transaction).unwrap();
        let got = store.get(inserted.id).unwrap().unwrap();

        assert_eq!(got.transaction_date, datetime!(2025-06-15 13:45:30 +02:00));
    }

    #[test]
    fn get_missing_row_is_none() {
        let store = get_test_store();

        assert_eq!(store.get(999).unwrap(), None);
    }

    #[test]
    fn update_overwrites_a_live_row() {
        let store = get_test_store();
        let inserted = store.insert(sample_transaction()).unwrap();

        let updated = store
            .update(
                inserted.id,
                Transaction {
                    description: "rent".to_owned(),
                    purchase_amount: 1200.0,
                    ..sample_transaction()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, inserted.id);
        assert_eq!(updated.description, "rent");

        let got = store.get(inserted.id).unwrap().unwrap();
        assert_eq!(got.description, "rent");
        assert_eq!(got.purchase_amount, 1200.0);
    }

    #[test]
    fn update_missing_row_is_none() {
        let store = get_test_store();

        let result = store.update(999, sample_transaction()).unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn update_deleted_row_is_none() {
        let store = get_test_store();
        let inserted = store.insert(sample_transaction()).unwrap();
        assert!(store.logical_delete(inserted.id).unwrap());

        let result = store.update(inserted.id, sample_transaction()).unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn logical_delete_keeps_the_row_readable() {
        let store = get_test_store();
        let inserted = store.insert(sample_transaction()).unwrap();

        assert!(store.logical_delete(inserted.id).unwrap());

        let got = store.get(inserted.id).unwrap().unwrap();
        assert!(got.deleted);
        assert_eq!(got.description, inserted.description);
    }

    #[test]
    fn logical_delete_twice_reports_no_change() {
        let store = get_test_store();
        let inserted = store.insert(sample_transaction()).unwrap();

        assert!(store.logical_delete(inserted.id).unwrap());
        assert!(!store.logical_delete(inserted.id).unwrap());
    }

    #[test]
    fn logical_delete_missing_row_reports_no_change() {
        let store = get_test_store();

        assert!(!store.logical_delete(999).unwrap());
    }
}
