//! Batched multi-row SQL `INSERT` fragment building.
//!
//! This crate partitions a stream of rows into batches that respect a SQL
//! dialect's statement limits, and renders each batch as a positional
//! placeholder fragment — `($1,$2,$3),($4,$5,$6)` — paired with the
//! flattened argument list the placeholders refer to:
//!
//! - [`Dialect`] - supported SQL targets and their row/parameter caps
//! - [`InsertBuilder`] - row accumulation, batch partitioning, rendering
//! - [`BatchQuery`] - one rendered batch: `VALUES` body plus arguments
//!
//! The rendered fragment slots verbatim into
//! `INSERT INTO <table> (<cols>) VALUES <fragment>;` — opening a
//! connection and executing the statement are the caller's concern.
//!
//! # Examples
//!
//! ```
//! use batchsql::{Dialect, InsertBuilder};
//!
//! let mut builder = InsertBuilder::new(Dialect::Postgres);
//! builder.append(["alice", "reader"])?;
//! builder.append(["bob", "editor"])?;
//!
//! let batches = builder.to_sql()?;
//! assert_eq!(batches[0].query, "($1,$2),($3,$4)");
//! assert_eq!(batches[0].args, ["alice", "reader", "bob", "editor"]);
//! # Ok::<(), batchsql::BatchError>(())
//! ```
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `tracing` - Debug events on batch splits and renders

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

mod batch;
mod builder;
mod dialect;
mod error;
mod render;
mod trace;

pub use builder::InsertBuilder;
pub use dialect::{Dialect, DialectLimits};
pub use error::{BatchError, Result};
pub use render::BatchQuery;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{BatchError, BatchQuery, Dialect, DialectLimits, InsertBuilder};
}
