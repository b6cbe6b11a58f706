//! Errors raised while collecting input. The estimator itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("invalid numeric pattern")]
    Pattern(#[from] regex::Error),

    #[error("failed to read input file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse input file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
