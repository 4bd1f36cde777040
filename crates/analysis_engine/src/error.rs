//! Error types for the analysis engine
//!
//! Provides custom error types for position parsing, search failures and
//! configuration loading.

use thiserror::Error;

/// Errors that can occur while analyzing a position
#[derive(Error, Debug)]
pub enum EngineError {
    /// The FEN string could not be parsed into a legal position
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A book or PV move could not be resolved against the position
    #[error("Illegal move {uci} in position {fen}")]
    IllegalMove { uci: String, fen: String },

    /// Recursion went deeper than the killer table can track
    #[error("Search exceeded the ply limit of {limit} (ply {ply})")]
    PlyLimit { ply: usize, limit: usize },

    /// Configuration file I/O error
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration deserialization error
    #[error("Config serialization error: {0}")]
    ConfigSerialization(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
