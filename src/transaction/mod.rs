//! The transaction lifecycle: model, durable store, volatile cache, the
//! cache-aside service that coordinates them, and the CRUD endpoints.

pub mod cache;
pub mod models;
pub mod service;
pub mod store;

mod create_endpoint;
mod delete_endpoint;
mod get_endpoint;
mod update_endpoint;

pub use cache::{MokaTransactionCache, TransactionCache};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use models::{Transaction, TransactionDto, TransactionId, TransactionRequest};
pub use service::TransactionService;
pub use store::{SqliteTransactionStore, TransactionStore};
pub use update_endpoint::update_transaction_endpoint;
