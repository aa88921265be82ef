/// Configuration schemas - every section defined once with its defaults
use crate::config_struct;

/// Raydium v3 pool list endpoint
pub const DEFAULT_POOLS_URL: &str = "https://api-v3.raydium.io/pools/info/list";

// ============================================================================
// RAYDIUM API
// ============================================================================

config_struct! {
    /// Pools endpoint and the query parameters that never change per request
    pub struct RaydiumConfig {
        pools_url: String = DEFAULT_POOLS_URL.to_string(),
        pool_sort_field: String = "default".to_string(),
        sort_type: String = "desc".to_string(),
        /// Rows requested and rendered per command
        page_size: usize = 10,
        page: u32 = 1,
        /// 0 keeps the HTTP client default (no timeout)
        timeout_seconds: u64 = 0,
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

config_struct! {
    /// Currency formatting for table cells
    pub struct DisplayConfig {
        /// num-format locale name; "en" groups like en_US
        locale: String = "en".to_string(),
        currency_symbol: String = "$".to_string(),
        decimals: u32 = 2,
    }
}

// ============================================================================
// ROOT
// ============================================================================

config_struct! {
    pub struct Config {
        raydium: RaydiumConfig = RaydiumConfig::default(),
        display: DisplayConfig = DisplayConfig::default(),
    }
}
