//! Batch accumulation and the split predicate.

use crate::alloc_prelude::*;
use crate::dialect::DialectLimits;

/// One statement's worth of rows, stored as a flattened value vector.
///
/// Values are kept in append order, row-major, so the vector is
/// index-aligned with the placeholders rendered for the batch: placeholder
/// `$i` refers to `args[i - 1]`. The row counter lives on the batch so it
/// cannot drift from the values it counts.
#[derive(Debug, Clone)]
pub(crate) struct Batch<V> {
    pub(crate) args: Vec<V>,
    pub(crate) rows: usize,
}

impl<V> Batch<V> {
    pub(crate) const fn new() -> Self {
        Self {
            args: Vec::new(),
            rows: 0,
        }
    }

    pub(crate) fn param_count(&self) -> usize {
        self.args.len()
    }

    /// Whether this batch can take one more `arity`-value row without
    /// breaching either limit.
    ///
    /// `saturating_add` keeps the comparison sound when a limit is
    /// unbounded (`usize::MAX`).
    pub(crate) fn has_room(&self, arity: usize, limits: &DialectLimits) -> bool {
        self.rows < limits.max_rows
            && self.param_count().saturating_add(arity) <= limits.max_params
    }

    pub(crate) fn push_row(&mut self, row: Vec<V>) {
        self.args.extend(row);
        self.rows += 1;
    }
}
