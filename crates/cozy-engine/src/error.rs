//! Error types for the spin engine

use thiserror::Error;

/// Engine error type
///
/// Configuration errors are fatal at construction time; a validated engine
/// has no runtime error paths (every weighted draw result is valid by
/// construction).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("reel {reel} has zero total weight")]
    ZeroReelWeight { reel: usize },

    #[error("expected {expected} reels, got {found}")]
    ReelCountMismatch { expected: usize, found: usize },

    #[error("reel {reel} references unknown symbol id {id}")]
    UnknownSymbol { reel: usize, id: u32 },

    #[error("payline {line}: row {row} on reel {reel} is out of range")]
    RowOutOfRange { line: u8, reel: usize, row: u8 },

    #[error("symbol set must contain exactly one wild and one scatter")]
    MissingSpecialSymbol,

    #[error("duplicate symbol id {0}")]
    DuplicateSymbolId(u32),

    #[error("bet ladder is empty")]
    EmptyBetLadder,

    #[error("jackpot hit probability {0} is not in [0, 1]")]
    InvalidProbability(f64),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type EngineResult<T> = Result<T, EngineError>;
