//! Error types for Finlens

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid signal {signal}: {value} is not a finite number")]
    InvalidSignal { signal: &'static str, value: f64 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject NaN and infinities before they reach min/max comparisons
pub(crate) fn ensure_finite(signal: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidSignal { signal, value })
    }
}
