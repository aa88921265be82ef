use super::PoolRowBatch;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table,
};

/// Render a batch as a fixed five-column table
///
/// Token pair is left-aligned, the four currency columns right-aligned.
/// The result is plain text meant for a monospace `<pre>` block.
pub fn render_pool_table(batch: &PoolRowBatch) -> String {
    let mut table = Table::new(batch.rows());
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .with(Modify::new(Columns::new(1..=4)).with(Alignment::right()));

    table.to_string()
}
