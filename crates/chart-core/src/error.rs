// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible entry points (parsing and construction).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("unknown curve type '{0}' (expected linear, monotone, step, stepBefore or stepAfter)")]
    UnknownCurve(String),

    #[error("brush needs at least one datum")]
    EmptyData,
}
