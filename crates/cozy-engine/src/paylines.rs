//! Payline definitions

use serde::{Deserialize, Serialize};

use crate::reels::REELS;

/// A payline: one row index per reel (0 = top, 1 = middle, 2 = bottom).
///
/// Order of the line list matters only for paint order downstream, never for
/// payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payline {
    /// Payline index (0-based)
    pub index: u8,
    /// Row position for each reel
    pub rows: [u8; REELS],
}

impl Payline {
    pub fn new(index: u8, rows: [u8; REELS]) -> Self {
        Self { index, rows }
    }
}

/// The 20 fixed Cozy Slots paylines
pub fn standard_20_paylines() -> Vec<Payline> {
    let patterns: [[u8; REELS]; 20] = [
        [1, 1, 1, 1, 1],
        [0, 0, 0, 0, 0],
        [2, 2, 2, 2, 2],
        [0, 1, 2, 1, 0],
        [2, 1, 0, 1, 2],
        [0, 0, 1, 0, 0],
        [2, 2, 1, 2, 2],
        [1, 0, 0, 0, 1],
        [1, 2, 2, 2, 1],
        [0, 1, 1, 1, 0],
        [2, 1, 1, 1, 2],
        [1, 0, 1, 2, 1],
        [1, 2, 1, 0, 1],
        [0, 2, 0, 2, 0],
        [2, 0, 2, 0, 2],
        [0, 1, 0, 1, 0],
        [2, 1, 2, 1, 2],
        [1, 1, 0, 1, 1],
        [1, 1, 2, 1, 1],
        [0, 2, 1, 2, 0],
    ];

    patterns
        .into_iter()
        .enumerate()
        .map(|(i, rows)| Payline::new(i as u8, rows))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reels::ROWS;

    #[test]
    fn twenty_lines_center_top_bottom_first() {
        let lines = standard_20_paylines();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0].rows, [1, 1, 1, 1, 1]);
        assert_eq!(lines[1].rows, [0, 0, 0, 0, 0]);
        assert_eq!(lines[2].rows, [2, 2, 2, 2, 2]);
    }

    #[test]
    fn all_rows_in_range() {
        for line in standard_20_paylines() {
            for &row in &line.rows {
                assert!((row as usize) < ROWS);
            }
        }
    }

    #[test]
    fn indices_match_positions() {
        for (i, line) in standard_20_paylines().iter().enumerate() {
            assert_eq!(line.index as usize, i);
        }
    }
}
