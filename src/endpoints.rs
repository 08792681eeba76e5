//! The API endpoint URIs.

/// The liveness probe.
pub const PING: &str = "/ping";
/// The route to create a transaction.
pub const TRANSACTIONS: &str = "/v1/transaction";
/// The route to fetch, update or delete a single transaction.
pub const TRANSACTION: &str = "/v1/transaction/{transaction_id}";
/// The route to fetch a transaction converted into a foreign currency.
pub const TRANSACTION_CURRENCY: &str = "/v1/transaction/{transaction_id}/currency/{country}";
