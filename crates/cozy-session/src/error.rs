//! Session error types

use thiserror::Error;

/// Session error type
///
/// `SpinInProgress` is the concurrent-spin rejection: the session is left
/// untouched and callers that drive a UI are expected to ignore it, since the
/// control should already be disabled while spinning.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("insufficient funds: balance {balance} is below bet {bet}")]
    InsufficientFunds { balance: f64, bet: f64 },

    #[error("spin already in progress")]
    SpinInProgress,

    #[error("no spin in progress to settle")]
    NotSpinning,

    #[error("bet {0} is not on the bet ladder")]
    InvalidBet(f64),
}

/// Result type alias
pub type SessionResult<T> = Result<T, SessionError>;
