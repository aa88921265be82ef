/// Raydium v3 `/pools/info/list` response types
///
/// Only the fields the bot displays are required; everything else the API
/// sends is ignored during deserialization.
use serde::Deserialize;

/// Top-level envelope: `{ id, success, data: { count, data: [...], hasNextPage } }`
#[derive(Debug, Clone, Deserialize)]
pub struct PoolListResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    pub data: PoolListPage,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolListPage {
    #[serde(default)]
    pub count: Option<u64>,
    pub data: Vec<PoolInfo>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    /// Pool account address
    #[serde(default)]
    pub id: Option<String>,
    /// "Concentrated" or "Standard"
    #[serde(default, rename = "type")]
    pub pool_type: Option<String>,
    pub mint_a: MintInfo,
    pub mint_b: MintInfo,
    pub tvl: f64,
    pub day: PeriodStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MintInfo {
    pub symbol: String,
}

/// Rolling-window statistics (`day`, `week`, `month` share this shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub volume: f64,
    pub fee_apr: f64,
    pub apr: f64,
}
