//! Functions for initializing the application database.

use rusqlite::Connection;

/// Create the transaction table if it does not exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL
/// error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                transaction_date TEXT NOT NULL,
                purchase_amount REAL NOT NULL,
                deleted INTEGER NOT NULL DEFAULT 0
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_creates_transaction_table() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();

        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM \"transaction\"", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();
        initialize(&connection).unwrap();
    }
}
