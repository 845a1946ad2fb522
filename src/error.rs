//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// All variants are ordinary outcomes of cache usage and carry the key
/// that produced them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key has no entry in the cache
    #[error("key not found: {0}")]
    NotFound(String),

    /// Key already holds a live value
    #[error("key already exists: {0}")]
    Exists(String),

    /// Key's entry was found past its expiration and has been removed
    #[error("key expired: {0}")]
    Expired(String),
}

impl CacheError {
    /// Returns the key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            CacheError::NotFound(key) | CacheError::Exists(key) | CacheError::Expired(key) => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
