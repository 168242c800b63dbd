//! Payline and scatter win evaluation

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::paylines::{Payline, standard_20_paylines};
use crate::reels::{Grid, REELS, ROWS};
use crate::symbols::SymbolSet;

/// Minimum leading run length for a line pay
pub const MIN_MATCH_COUNT: u8 = 3;

/// Grid-wide scatter count that triggers free spins
pub const SCATTER_TRIGGER_COUNT: u8 = 3;

/// Raw result of scanning a single payline.
///
/// `win` is zero when the run is shorter than [`MIN_MATCH_COUNT`];
/// `match_count` still reports the run length for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineEval {
    /// The symbol the run pays as (wild when the whole run is wild)
    pub symbol_id: u32,
    /// Length of the leading contiguous matching run
    pub match_count: u8,
    /// Bet-scaled win amount, before any free-spin multiplier
    pub win: f64,
}

/// A winning payline, as recorded in a [`SpinOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineWin {
    /// Payline index, for downstream highlighting
    pub line_index: u8,
    /// Winning symbol id
    pub symbol_id: u32,
    /// Number of matched positions from the left
    pub match_count: u8,
    /// Win amount, free-spin multiplier already applied
    pub win: f64,
}

/// Scatter win: position-independent, paid on grid-wide count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterWin {
    /// Number of scatters anywhere in the grid
    pub count: u8,
    /// Win amount (never multiplied by the free-spin multiplier)
    pub win: f64,
}

/// Complete derived outcome of one spin. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Total win, floored to an integer amount
    pub total_win: f64,
    /// True when the scatter count reached the trigger threshold
    pub free_spins_triggered: bool,
    /// Scatter win, if any
    pub scatter_win: Option<ScatterWin>,
    /// Every payline with win > 0, in payline order
    pub line_wins: Vec<LineWin>,
}

impl SpinOutcome {
    pub fn is_win(&self) -> bool {
        self.total_win > 0.0
    }
}

/// Symbol catalog plus payline list; evaluates grids into outcomes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paytable {
    symbols: SymbolSet,
    paylines: Vec<Payline>,
}

impl Paytable {
    /// Build a paytable, validating every payline row against the grid.
    pub fn new(symbols: SymbolSet, paylines: Vec<Payline>) -> EngineResult<Self> {
        for line in &paylines {
            for (reel, &row) in line.rows.iter().enumerate() {
                if row as usize >= ROWS {
                    return Err(EngineError::RowOutOfRange {
                        line: line.index,
                        reel,
                        row,
                    });
                }
            }
        }
        Ok(Self { symbols, paylines })
    }

    /// Standard catalog with the 20 fixed paylines
    pub fn standard() -> Self {
        Self::new(SymbolSet::standard(), standard_20_paylines())
            .expect("standard paylines are well-formed")
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn paylines(&self) -> &[Payline] {
        &self.paylines
    }

    /// Scan one payline sequence left to right.
    ///
    /// Reel 0 always participates. A scatter terminates the scan wherever it
    /// appears and is never part of a match. Wilds substitute for any paying
    /// symbol; the target is the first non-wild, non-scatter symbol, and a run
    /// that stays wild throughout pays with the wild table.
    pub fn evaluate_line(&self, sequence: &[u32; REELS], bet: f64) -> LineEval {
        let mut target: Option<u32> = None;
        let mut count: u8 = 0;

        for &id in sequence {
            if self.symbols.is_scatter(id) {
                break;
            }
            if self.symbols.is_wild(id) {
                count += 1;
                continue;
            }
            match target {
                None => {
                    if self.symbols.get(id).is_none() {
                        break;
                    }
                    target = Some(id);
                    count += 1;
                }
                Some(t) if t == id => count += 1,
                Some(_) => break,
            }
        }

        let symbol_id = target.unwrap_or_else(|| self.symbols.wild_id());
        let win = if count < MIN_MATCH_COUNT {
            0.0
        } else {
            self.symbols
                .get(symbol_id)
                .map(|s| bet * s.pay(count))
                .unwrap_or(0.0)
        };

        LineEval {
            symbol_id,
            match_count: count,
            win,
        }
    }

    /// Evaluate a full grid at the given bet.
    ///
    /// `line_multiplier` is 1.0 on a paid spin and the free-spin multiplier
    /// during a free-spin round; it applies to line wins only, never to the
    /// scatter pay. The total is floored to an integer amount.
    pub fn evaluate(&self, grid: &Grid, bet: f64, line_multiplier: f64) -> SpinOutcome {
        let mut total = 0.0;

        let scatter_count = grid.count_symbol(self.symbols.scatter_id());
        let mut scatter_win = None;
        let mut free_spins_triggered = false;
        if scatter_count >= SCATTER_TRIGGER_COUNT {
            let pay = self
                .symbols
                .get(self.symbols.scatter_id())
                .map(|s| s.pay(scatter_count.min(5)))
                .unwrap_or(0.0);
            let win = bet * pay;
            total += win;
            scatter_win = Some(ScatterWin {
                count: scatter_count,
                win,
            });
            free_spins_triggered = true;
        }

        let mut line_wins = Vec::new();
        for line in &self.paylines {
            let mut sequence = [0u32; REELS];
            for (reel, &row) in line.rows.iter().enumerate() {
                sequence[reel] = grid.at(reel, row as usize);
            }

            let eval = self.evaluate_line(&sequence, bet);
            if eval.win > 0.0 {
                let win = eval.win * line_multiplier;
                total += win;
                line_wins.push(LineWin {
                    line_index: line.index,
                    symbol_id: eval.symbol_id,
                    match_count: eval.match_count,
                    win,
                });
            }
        }

        log::debug!(
            "evaluated grid: total={}, lines={}, scatters={}",
            total.floor(),
            line_wins.len(),
            scatter_count
        );

        SpinOutcome {
            total_win: total.floor(),
            free_spins_triggered,
            scatter_win,
            line_wins,
        }
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::standard()
    }
}
