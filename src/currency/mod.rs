//! Currency conversion: exchange-rate records, the Treasury feed client,
//! the conversion orchestrator and its endpoint.

pub mod feed;
pub mod models;
pub mod service;

mod convert_endpoint;

pub use convert_endpoint::convert_transaction_endpoint;
pub use feed::{ExchangeRateFeed, TreasuryClient};
pub use models::{ConvertedTransactionDto, Country, ExchangeRate, RatesResponse};
pub use service::ConversionService;
