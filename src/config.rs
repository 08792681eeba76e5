//! Named policy values for the cache and the exchange-rate feed.
//!
//! These are configuration rather than literals buried in the call sites,
//! so operators can tune them without touching the orchestration code.

use std::time::Duration;

/// How long a cached transaction stays fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// The uniform eviction cost charged per cache entry.
pub const DEFAULT_CACHE_ENTRY_COST: u32 = 1;

/// The total eviction cost the cache may hold before evicting.
pub const DEFAULT_CACHE_MAX_COST: u64 = 1 << 30;

/// How long to wait on the exchange-rate feed before giving up.
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(30);

/// The base URL of the US Treasury fiscal data service.
pub const DEFAULT_FEED_BASE_URL: &str = "https://api.fiscaldata.treasury.gov";

/// The dataset path for the Rates of Exchange feed.
pub const FEED_RATES_PATH: &str =
    "/services/api/fiscal_service/v1/accounting/od/rates_of_exchange";

/// The config that controls caching of transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachePolicy {
    /// The time-to-live applied to every entry.
    pub ttl: Duration,
    /// The eviction cost charged for every entry.
    pub entry_cost: u32,
    /// The total cost the cache is allowed to hold.
    pub max_cost: u64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
            entry_cost: DEFAULT_CACHE_ENTRY_COST,
            max_cost: DEFAULT_CACHE_MAX_COST,
        }
    }
}

/// The config for the exchange-rate feed client.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// The scheme and host of the feed.
    pub base_url: String,
    /// The request timeout applied to every feed call.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_BASE_URL.to_owned(),
            timeout: DEFAULT_FEED_TIMEOUT,
        }
    }
}
