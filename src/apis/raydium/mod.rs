/// Raydium v3 API client
///
/// API Documentation: https://api-v3.raydium.io/docs/
///
/// Endpoints implemented:
/// 1. /pools/info/list - Paged pool list filtered by pool type
pub mod types;

#[cfg(test)]
mod tests;

pub use self::types::{MintInfo, PeriodStats, PoolInfo, PoolListPage, PoolListResponse};

use crate::apis::client::HttpClient;
use crate::config::RaydiumConfig;
use crate::errors::PoolsError;
use crate::logger::{self, LogTag};
use crate::pools::PoolTypeFilter;
use std::time::Instant;

pub struct RaydiumClient {
    http_client: HttpClient,
    config: RaydiumConfig,
}

impl RaydiumClient {
    pub fn new(config: RaydiumConfig) -> Result<Self, PoolsError> {
        let http_client = HttpClient::new(config.timeout_seconds).map_err(PoolsError::Network)?;
        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &RaydiumConfig {
        &self.config
    }

    /// Query string for one pool list request; only `poolType` varies
    pub fn query_params(&self, pool_type: PoolTypeFilter) -> Vec<(&'static str, String)> {
        vec![
            ("poolType", pool_type.as_str().to_string()),
            ("poolSortField", self.config.pool_sort_field.clone()),
            ("sortType", self.config.sort_type.clone()),
            ("pageSize", self.config.page_size.to_string()),
            ("page", self.config.page.to_string()),
        ]
    }

    /// Fetch one page of pools in the API's ranking order
    ///
    /// Exactly one GET per call, no retry.
    pub async fn fetch_pool_list(
        &self,
        pool_type: PoolTypeFilter,
    ) -> Result<PoolListPage, PoolsError> {
        let params = self.query_params(pool_type);

        logger::debug(
            LogTag::Api,
            &format!(
                "[RAYDIUM] GET {} poolType={} pageSize={}",
                self.config.pools_url, pool_type, self.config.page_size
            ),
        );

        logger::verbose(
            LogTag::Api,
            &format!(
                "[RAYDIUM] query: {}",
                params
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect::<Vec<_>>()
                    .join("&")
            ),
        );

        let start = Instant::now();
        let response = self
            .http_client
            .client()
            .get(&self.config.pools_url)
            .query(&params)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                logger::warning(LogTag::Api, &format!("[RAYDIUM] Request failed: {}", e));
                PoolsError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            logger::warning(
                LogTag::Api,
                &format!("[RAYDIUM] HTTP {} for poolType={}", status, pool_type),
            );
            return Err(PoolsError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: PoolListResponse = response.json().await.map_err(|e| {
            logger::warning(LogTag::Api, &format!("[RAYDIUM] Parse error: {}", e));
            PoolsError::InvalidResponse(e.to_string())
        })?;

        if body.success == Some(false) {
            logger::warning(
                LogTag::Api,
                &format!("[RAYDIUM] success=false for poolType={}", pool_type),
            );
            return Err(PoolsError::InvalidResponse(format!(
                "success=false (request id {})",
                body.id.as_deref().unwrap_or("unknown")
            )));
        }

        logger::debug(
            LogTag::Api,
            &format!(
                "[RAYDIUM] {} pools received in {}ms (count={:?}, hasNextPage={:?})",
                body.data.data.len(),
                start.elapsed().as_millis(),
                body.data.count,
                body.data.has_next_page
            ),
        );

        Ok(body.data)
    }
}
