//! Error types
//!
//! `PoolsError` covers everything that can go wrong between issuing the pools
//! request and holding a complete row batch. `ConfigError` covers startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Raydium API returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Expected {expected} pools from Raydium, received {received}")]
    InsufficientPools { expected: usize, received: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config file '{path}': {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("{0} is not set")]
    MissingToken(&'static str),
}
