//! /all_pools, /concentrated_pools, /standard_pools

use super::Reply;
use crate::errors::PoolsError;
use crate::formatters::html_pre;
use crate::logger::{self, LogTag};
use crate::pools::{render_pool_table, PoolSource, PoolTypeFilter};

/// One handler for every data command; only the filter differs
pub async fn pool_table_reply(
    source: &dyn PoolSource,
    pool_type: PoolTypeFilter,
) -> Result<Reply, PoolsError> {
    let batch = source.fetch(pool_type).await?;
    let table = render_pool_table(&batch);

    logger::debug(
        LogTag::Pools,
        &format!("Rendered {} table: {} rows, {} chars", pool_type, batch.len(), table.len()),
    );

    Ok(Reply::Html(html_pre(&table)))
}
