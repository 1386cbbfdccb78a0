//! Error types raised while configuring scoring strategies.

use thiserror::Error;

/// Errors raised when a strategy or registry is misconfigured.
#[derive(Debug, Error, PartialEq)]
pub enum StrategyError {
    /// The strategy name was empty or whitespace.
    #[error("strategy name must not be blank")]
    BlankName,
    /// A weight was NaN or infinite.
    #[error("strategy `{strategy}` has non-finite {weight}: {value}")]
    NonFiniteWeight {
        /// Name of the offending strategy.
        strategy: String,
        /// Name of the offending weight.
        weight: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The requested default strategy is not registered.
    #[error("unknown default strategy `{name}`")]
    UnknownDefault {
        /// Requested name.
        name: String,
    },
}
