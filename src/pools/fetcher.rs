use super::{PoolRow, PoolRowBatch, PoolSource, PoolTypeFilter};
use crate::apis::raydium::{PoolInfo, RaydiumClient};
use crate::errors::PoolsError;
use crate::formatters::CurrencyFormatter;
use crate::logger::{self, LogTag};
use async_trait::async_trait;

/// Fetches one page of pools from Raydium and projects it into display rows
pub struct PoolFetcher {
    client: RaydiumClient,
    formatter: CurrencyFormatter,
}

impl PoolFetcher {
    pub fn new(client: RaydiumClient, formatter: CurrencyFormatter) -> Self {
        Self { client, formatter }
    }

    pub fn page_size(&self) -> usize {
        self.client.config().page_size
    }
}

#[async_trait]
impl PoolSource for PoolFetcher {
    async fn fetch(&self, pool_type: PoolTypeFilter) -> Result<PoolRowBatch, PoolsError> {
        let page = self.client.fetch_pool_list(pool_type).await?;
        let batch = project_pools(&page.data, self.page_size(), &self.formatter)?;

        logger::debug(
            LogTag::Pools,
            &format!("Projected {} {} pools", batch.len(), pool_type),
        );
        Ok(batch)
    }
}

/// Take the first `page_size` pools in upstream order
///
/// A short page is an error rather than a short batch: every table has
/// exactly `page_size` rows.
pub fn project_pools(
    pools: &[PoolInfo],
    page_size: usize,
    formatter: &CurrencyFormatter,
) -> Result<PoolRowBatch, PoolsError> {
    if pools.len() < page_size {
        return Err(PoolsError::InsufficientPools {
            expected: page_size,
            received: pools.len(),
        });
    }

    let rows = pools
        .iter()
        .take(page_size)
        .map(|pool| PoolRow::from_pool_info(pool, formatter))
        .collect();

    Ok(PoolRowBatch::new(rows))
}
