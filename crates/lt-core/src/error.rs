//! Framework error type.
//!
//! Sub-crates define their own error enums (`BehaviorError`, `SimError`) and
//! either wrap `LtError` as one variant or stay separate.

use thiserror::Error;

/// The top-level error type for `lt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LtError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lt-*` crates.
pub type LtResult<T> = Result<T, LtError>;
