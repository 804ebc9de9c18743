//! Tracing utilities for batch partitioning observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event when a new batch is opened.
///
/// ```ignore
/// batchsql_trace_split!(dialect, batch_index, closed_rows);
/// ```
#[macro_export]
macro_rules! batchsql_trace_split {
    ($dialect:expr, $batch:expr, $rows:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(dialect = %$dialect, batch = $batch, closed_rows = $rows, "batchsql.split");
    };
}

/// Emit a debug-level tracing event when the builder renders its batches.
///
/// ```ignore
/// batchsql_trace_render!(dialect, batch_count, total_params);
/// ```
#[macro_export]
macro_rules! batchsql_trace_render {
    ($dialect:expr, $batches:expr, $params:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(dialect = %$dialect, batches = $batches, params = $params, "batchsql.render");
    };
}
