//! Pool statistics pipeline: fetch a page of Raydium pools, project each one
//! into a display row, render the rows as a table.
//!
//! ```text
//! PoolTypeFilter ──► PoolSource::fetch ──► PoolRowBatch ──► render_pool_table ──► String
//! ```

mod fetcher;
mod table_display;

pub use fetcher::{project_pools, PoolFetcher};
pub use table_display::render_pool_table;

use crate::apis::raydium::PoolInfo;
use crate::errors::PoolsError;
use crate::formatters::CurrencyFormatter;
use async_trait::async_trait;
use tabled::Tabled;

/// Subset of pools requested from Raydium (`poolType` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolTypeFilter {
    All,
    Concentrated,
    Standard,
}

impl PoolTypeFilter {
    pub const VALUES: [PoolTypeFilter; 3] = [
        PoolTypeFilter::All,
        PoolTypeFilter::Concentrated,
        PoolTypeFilter::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PoolTypeFilter::All => "all",
            PoolTypeFilter::Concentrated => "concentrated",
            PoolTypeFilter::Standard => "standard",
        }
    }
}

impl std::fmt::Display for PoolTypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One table line: token pair plus four currency-formatted statistics
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct PoolRow {
    #[tabled(rename = "Token Pair")]
    pub token_pair: String,
    #[tabled(rename = "Liquidity")]
    pub liquidity: String,
    #[tabled(rename = "24h volume")]
    pub volume: String,
    #[tabled(rename = "24h fee")]
    pub fee: String,
    #[tabled(rename = "24h APR")]
    pub apr: String,
}

impl PoolRow {
    /// `fee` and `apr` come from ratio fields (`feeApr`, `apr`) yet are shown
    /// with the currency symbol like the other columns.
    pub fn from_pool_info(pool: &PoolInfo, formatter: &CurrencyFormatter) -> Self {
        Self {
            token_pair: token_pair_label(&pool.mint_a.symbol, &pool.mint_b.symbol),
            liquidity: formatter.format(pool.tvl),
            volume: formatter.format(pool.day.volume),
            fee: formatter.format(pool.day.fee_apr),
            apr: formatter.format(pool.day.apr),
        }
    }
}

pub fn token_pair_label(symbol_a: &str, symbol_b: &str) -> String {
    format!("{} - {}", symbol_a, symbol_b)
}

/// Rows in upstream ranking order, exactly one page long
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRowBatch {
    rows: Vec<PoolRow>,
}

impl PoolRowBatch {
    pub fn new(rows: Vec<PoolRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PoolRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Anything that can produce a batch of pool rows for a filter
///
/// The Telegram handlers depend on this rather than on [`PoolFetcher`].
#[async_trait]
pub trait PoolSource: Send + Sync {
    async fn fetch(&self, pool_type: PoolTypeFilter) -> Result<PoolRowBatch, PoolsError>;
}
