//! # cozy-session — Round Session State for Cozy Slots
//!
//! Owns everything a single player's session mutates: balance, bet selection,
//! jackpot pool, free-spin and autoplay counters. The spin transaction is a
//! two-phase state machine mirroring how a presentation layer drives it:
//!
//! ```text
//! Idle ──begin_spin()──> Spinning ──settle()──> Idle
//!         debit / free-spin consume              credit win, award free
//!         jackpot contribution + draw            spins, report follow-up
//!         grid build + evaluation
//! ```
//!
//! The session never owns a timer: `settle` reports whether another spin
//! should be auto-initiated (autoplay vs. free spin) and the caller owns the
//! pacing. Headless callers use the one-shot [`SlotSession::spin`].

pub mod error;
pub mod session;
pub mod shared;
pub mod stats;

pub use error::*;
pub use session::*;
pub use shared::*;
pub use stats::*;
