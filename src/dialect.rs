//! SQL dialect identification and per-dialect statement limits.

use core::fmt::{self, Write};

use crate::alloc_prelude::*;
use crate::error::BatchError;

/// SQL dialect for batched `INSERT` generation.
///
/// Each supported target caps multi-row statements differently:
/// PostgreSQL by the number of bind parameters, SQL Server by the number
/// of row groups in the `VALUES` list. The cap that does not apply is
/// left unbounded.
///
/// # Examples
///
/// ```
/// use batchsql::Dialect;
///
/// let limits = Dialect::Postgres.limits();
/// assert_eq!(limits.max_params, 65000);
///
/// let limits = Dialect::Mssql.limits();
/// assert_eq!(limits.max_rows, 2100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// PostgreSQL - at most 65000 bind parameters per statement
    #[default]
    Postgres,

    /// Microsoft SQL Server - at most 2100 rows per statement
    Mssql,
}

/// Row and parameter caps for one SQL statement.
///
/// [`usize::MAX`] stands in for a bound the dialect does not enforce.
/// Limits are fixed for the lifetime of the builder carrying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectLimits {
    /// Maximum number of rows in one multi-row `VALUES` list
    pub max_rows: usize,
    /// Maximum number of bind parameters in one statement
    pub max_params: usize,
}

impl DialectLimits {
    /// Creates explicit limits, for targets whose caps differ from the
    /// built-in dialect profiles.
    #[must_use]
    pub const fn new(max_rows: usize, max_params: usize) -> Self {
        Self {
            max_rows,
            max_params,
        }
    }
}

const UNBOUNDED: usize = usize::MAX;

impl Dialect {
    /// Returns the statement limits for this dialect.
    #[inline]
    #[must_use]
    pub const fn limits(&self) -> DialectLimits {
        match self {
            Dialect::Postgres => DialectLimits::new(UNBOUNDED, 65000),
            Dialect::Mssql => DialectLimits::new(2100, UNBOUNDED),
        }
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports common aliases:
    /// - PostgreSQL: `"postgres"`, `"postgresql"`, `"pg"`
    /// - SQL Server: `"mssql"`, `"sqlserver"`
    ///
    /// # Examples
    ///
    /// ```
    /// use batchsql::Dialect;
    ///
    /// assert_eq!(Dialect::parse("postgres"), Some(Dialect::Postgres));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::Postgres));
    /// assert_eq!(Dialect::parse("mssql"), Some(Dialect::Mssql));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        // eq_ignore_ascii_case keeps this allocation-free for no_std
        if s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::Postgres)
        } else if s.eq_ignore_ascii_case("mssql") || s.eq_ignore_ascii_case("sqlserver") {
            Some(Dialect::Mssql)
        } else {
            None
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mssql => "mssql",
        }
    }

    /// Writes the positional placeholder for the given 1-based index.
    ///
    /// Both supported targets take `$n` numbered markers in the rendered
    /// fragment.
    #[inline]
    pub fn write_placeholder<W: Write>(&self, buf: &mut W, index: usize) -> fmt::Result {
        match self {
            Dialect::Postgres | Dialect::Mssql => write!(buf, "${index}"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or_else(|| BatchError::InvalidDialect(s.to_string()))
    }
}
