//! Pure aggregation over in-memory row collections.
//!
//! Every function here is a stateless transform from rows to summary
//! statistics or chart-ready series. Aggregates over a possibly-empty
//! collection return [`Aggregate::Empty`] instead of propagating NaN
//! into display code.

pub mod flights;
pub mod houses;
pub mod weather;

/// Per-row time-series charts are capped to the first 20 rows to keep
/// chart density bounded. Scatter charts use the full loaded row set.
pub const SERIES_PREFIX_LEN: usize = 20;

/// A scalar reduction over a row collection, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregate {
    /// No rows to reduce (or a zero divisor); callers render a placeholder.
    Empty,
    Value(f64),
}

impl Aggregate {
    pub fn value(self) -> Option<f64> {
        match self {
            Aggregate::Empty => None,
            Aggregate::Value(v) => Some(v),
        }
    }

    /// Ratio of two aggregates. Empty if either side is empty or the
    /// divisor is zero.
    pub fn per(self, divisor: Aggregate) -> Aggregate {
        match (self, divisor) {
            (Aggregate::Value(a), Aggregate::Value(b)) if b != 0.0 => Aggregate::Value(a / b),
            _ => Aggregate::Empty,
        }
    }
}

/// Arithmetic mean of a numeric field over all rows.
pub fn mean<T>(rows: &[T], field: impl Fn(&T) -> f64) -> Aggregate {
    if rows.is_empty() {
        return Aggregate::Empty;
    }
    let sum: f64 = rows.iter().map(field).sum();
    Aggregate::Value(sum / rows.len() as f64)
}

/// Percentage of rows satisfying a predicate (0-100).
pub fn rate<T>(rows: &[T], predicate: impl Fn(&T) -> bool) -> Aggregate {
    if rows.is_empty() {
        return Aggregate::Empty;
    }
    let matching = rows.iter().filter(|row| predicate(row)).count();
    Aggregate::Value(matching as f64 / rows.len() as f64 * 100.0)
}

/// One point of a scatter projection: `{x, y, z, label}` per source row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub label: String,
}

/// A named count, used for pie-style distributions and tallies.
#[derive(Debug, Clone, PartialEq)]
pub struct CountBucket {
    pub name: String,
    pub count: usize,
}
