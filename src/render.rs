//! Placeholder fragment rendering.

use compact_str::CompactString;

use crate::alloc_prelude::*;
use crate::batch::Batch;
use crate::dialect::Dialect;
use crate::error::Result;

/// One rendered batch: a `VALUES` body plus the arguments it binds.
///
/// `query` slots verbatim into
/// `INSERT INTO <table> (<cols>) VALUES <query>;` and `args` binds
/// positionally: placeholder `$i` refers to `args[i - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchQuery<'a, V> {
    /// Comma-separated parenthesized placeholder groups, one per row
    pub query: String,
    /// Flattened row values in append order, `rows × arity` long
    pub args: &'a [V],
}

/// Renders one batch into its placeholder fragment.
///
/// Indices restart at 1 for every batch and advance row-major, lining up
/// with the batch's own flattened `args`. Separators are written only
/// between elements; an empty batch yields an empty fragment.
pub(crate) fn render_batch<'a, V>(
    dialect: Dialect,
    batch: &'a Batch<V>,
    arity: usize,
) -> Result<BatchQuery<'a, V>> {
    // Worst case per value is ",$NNNNN" at the supported limits, plus
    // parentheses and the group separator per row.
    let capacity = batch.param_count() * 7 + batch.rows * 3;
    let mut buf = CompactString::with_capacity(capacity);
    let mut index = 1usize;

    for row in 0..batch.rows {
        if row > 0 {
            buf.push(',');
        }
        buf.push('(');
        for col in 0..arity {
            if col > 0 {
                buf.push(',');
            }
            dialect.write_placeholder(&mut buf, index)?;
            index += 1;
        }
        buf.push(')');
    }

    Ok(BatchQuery {
        query: buf.into(),
        args: &batch.args,
    })
}
