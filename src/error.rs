//! Error types.

use thiserror::Error;

/// Errors raised while loading geometry for bulk insertion.
///
/// Indexing itself never fails; only the input boundary does.
#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    #[error("Invalid WKT: {0}")]
    Wkt(String),

    #[error("Geometry {0} has no coordinates")]
    EmptyGeometry(usize),
}
