//! Append/render facade over batch partitioning.

use smallvec::SmallVec;

use crate::alloc_prelude::*;
use crate::batch::Batch;
use crate::dialect::{Dialect, DialectLimits};
use crate::error::{BatchError, Result};
use crate::render::{self, BatchQuery};

/// Accumulates rows for one bulk `INSERT` and partitions them into
/// batches that respect the dialect's statement limits.
///
/// Rows are packed greedily in arrival order: a row goes into the current
/// batch unless adding it would exceed the parameter or row cap, in which
/// case the current batch is closed and the row opens a new one. A row is
/// never split across batches or reordered.
///
/// One builder serves one logical bulk-insert; create a fresh instance
/// per operation rather than reusing a drained one. The builder carries
/// no internal synchronization.
///
/// # Examples
///
/// ```
/// use batchsql::{Dialect, InsertBuilder};
///
/// let mut builder = InsertBuilder::new(Dialect::Postgres);
/// builder.append(["alice", "reader"])?;
/// builder.append(["bob", "editor"])?;
///
/// let batches = builder.to_sql()?;
/// assert_eq!(batches.len(), 1);
/// assert_eq!(batches[0].query, "($1,$2),($3,$4)");
/// assert_eq!(batches[0].args, ["alice", "reader", "bob", "editor"]);
/// # Ok::<(), batchsql::BatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InsertBuilder<V> {
    dialect: Dialect,
    limits: DialectLimits,
    arity: Option<usize>,
    batches: SmallVec<[Batch<V>; 1]>,
}

impl<V> InsertBuilder<V> {
    /// Creates a builder with the given dialect's documented limits.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self::with_limits(dialect, dialect.limits())
    }

    /// Creates a builder with explicit limits, for targets whose caps
    /// differ from the built-in dialect profiles.
    #[must_use]
    pub fn with_limits(dialect: Dialect, limits: DialectLimits) -> Self {
        Self {
            dialect,
            limits,
            arity: None,
            batches: SmallVec::new(),
        }
    }

    /// Creates a builder from a dialect name (see [`Dialect::parse`]).
    ///
    /// # Errors
    ///
    /// [`BatchError::InvalidDialect`] for unrecognized names; no partial
    /// builder is returned.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// The dialect this builder renders for.
    #[inline]
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Maximum number of rows per statement.
    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.limits.max_rows
    }

    /// Maximum number of bind parameters per statement.
    #[inline]
    #[must_use]
    pub const fn max_params(&self) -> usize {
        self.limits.max_params
    }

    /// Column count fixed by the first appended row, if any.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Number of batches the appended rows currently occupy.
    #[must_use]
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Total number of appended rows across all batches.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.rows).sum()
    }

    /// Whether no rows have been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Appends one row, opening a new batch first when the current one
    /// cannot take the row without breaching a limit.
    ///
    /// The length of the first row fixes the builder's arity; every later
    /// row must match it. On error the builder is left untouched.
    ///
    /// # Errors
    ///
    /// - [`BatchError::RowTooLarge`] when the row alone carries more
    ///   values than the dialect allows in one statement
    /// - [`BatchError::InconsistentArity`] when the row's length differs
    ///   from the established arity
    pub fn append<I>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        let row: Vec<V> = row.into_iter().collect();
        let arity = row.len();

        if arity > self.limits.max_params {
            return Err(BatchError::RowTooLarge {
                arity,
                max_params: self.limits.max_params,
            });
        }

        match self.arity {
            None => self.arity = Some(arity),
            Some(expected) if expected != arity => {
                return Err(BatchError::InconsistentArity {
                    expected,
                    got: arity,
                });
            }
            Some(_) => {}
        }

        let needs_new_batch = self
            .batches
            .last()
            .is_none_or(|batch| !batch.has_room(arity, &self.limits));

        if needs_new_batch {
            if !self.batches.is_empty() {
                crate::batchsql_trace_split!(
                    self.dialect,
                    self.batches.len(),
                    self.batches.last().map_or(0, |batch| batch.rows)
                );
            }
            let mut batch = Batch::new();
            batch.push_row(row);
            self.batches.push(batch);
        } else if let Some(batch) = self.batches.last_mut() {
            batch.push_row(row);
        }

        Ok(())
    }

    /// Renders every batch into a `VALUES` placeholder fragment plus the
    /// flattened argument slice it binds.
    ///
    /// Rendering is read-only and idempotent: calling it again with no
    /// intervening append yields identical output, and the builder stays
    /// open — further [`append`](Self::append) calls keep accumulating
    /// into the last batch. The returned batches borrow the builder, so
    /// the borrow checker serializes rendering and appending.
    ///
    /// # Errors
    ///
    /// [`BatchError::Render`] on a formatting failure while writing a
    /// fragment; with the in-memory buffer used here this path is
    /// defensive only.
    pub fn to_sql(&self) -> Result<Vec<BatchQuery<'_, V>>> {
        let arity = self.arity.unwrap_or(0);
        let rendered = self
            .batches
            .iter()
            .map(|batch| render::render_batch(self.dialect, batch, arity))
            .collect::<Result<Vec<_>>>()?;

        crate::batchsql_trace_render!(
            self.dialect,
            rendered.len(),
            self.batches
                .iter()
                .map(Batch::param_count)
                .sum::<usize>()
        );

        Ok(rendered)
    }
}
