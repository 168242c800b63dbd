//! # cozy-engine — Spin Outcome Engine for Cozy Slots
//!
//! Computes the full outcome of a single slot round: weighted per-reel symbol
//! draws, 5×3 grid construction, payline evaluation with wild substitution and
//! scatter interruption, grid-wide scatter pays, and free-spin trigger
//! detection. Pure math: no rendering, no timers, no I/O.
//!
//! ## Architecture
//!
//! ```text
//! ReelSet (per-reel weight tables)
//!     │  build_grid(rng)
//!     v
//! Grid (5×3 symbol ids)
//!     │  Paytable::evaluate(grid, bet, line multiplier)
//!     v
//! SpinOutcome { total_win, free_spins_triggered, scatter_win, line_wins }
//! ```
//!
//! Session bookkeeping (balance, jackpot pool, free-spin counters) lives in
//! the `cozy-session` crate; this crate is deterministic given an RNG.

pub mod config;
pub mod error;
pub mod evaluate;
pub mod paylines;
pub mod reels;
pub mod symbols;

pub use config::*;
pub use error::*;
pub use evaluate::*;
pub use paylines::*;
pub use reels::*;
pub use symbols::*;
