//! Shared session handle and UI snapshot

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::SessionResult;
use crate::session::{RoundResolution, RoundStart, SlotSession};

/// The values a UI collaborator reads between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub balance: f64,
    pub bet: f64,
    pub last_win: f64,
    pub jackpot: f64,
    pub free_spins_remaining: u32,
    pub autoplay_remaining: u32,
    pub is_spinning: bool,
}

impl SessionSnapshot {
    pub fn of(session: &SlotSession) -> Self {
        Self {
            balance: session.balance(),
            bet: session.bet(),
            last_win: session.last_win(),
            jackpot: session.jackpot(),
            free_spins_remaining: session.free_spins_remaining(),
            autoplay_remaining: session.autoplay_remaining(),
            is_spinning: session.is_spinning(),
        }
    }
}

/// Cloneable handle serializing access to one player's session.
///
/// The spin transaction is not safe for concurrent invocation on the same
/// state; the mutex guarantees one mutation at a time per player. Each player
/// gets their own handle, and sessions are never shared across players.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<SlotSession>>,
}

impl SharedSession {
    pub fn new(session: SlotSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run a complete round.
    pub fn spin(&self) -> SessionResult<RoundResolution> {
        self.inner.lock().spin()
    }

    /// Begin a spin (for animation-driven callers).
    pub fn begin_spin(&self) -> SessionResult<RoundStart> {
        self.inner.lock().begin_spin()
    }

    /// Settle the pending spin.
    pub fn settle(&self) -> SessionResult<RoundResolution> {
        self.inner.lock().settle()
    }

    /// Read the UI-facing values.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::of(&self.inner.lock())
    }

    /// Run arbitrary session operations under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut SlotSession) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
