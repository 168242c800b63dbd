//! Weighted reel sampling and grid construction

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::symbols::SymbolSet;

/// Number of reels (columns)
pub const REELS: usize = 5;
/// Number of visible rows per reel
pub const ROWS: usize = 3;

/// Weight table for one reel: ordered (symbol id, weight) pairs.
///
/// Weight 0 means the symbol is never drawn on this reel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelWeights {
    entries: Vec<(u32, u32)>,
    total: u32,
}

impl ReelWeights {
    fn new(entries: Vec<(u32, u32)>) -> Self {
        let total = entries.iter().map(|&(_, w)| w).sum();
        Self { entries, total }
    }

    /// Sum of all weights on this reel
    pub fn total_weight(&self) -> u32 {
        self.total
    }

    /// Weighted entries in table order
    pub fn entries(&self) -> &[(u32, u32)] {
        &self.entries
    }

    /// Draw one symbol id with probability proportional to its weight.
    ///
    /// Walks the entries subtracting a uniform draw over `[0, total)`;
    /// equivalent to cumulative-distribution inversion.
    pub fn draw(&self, rng: &mut impl Rng) -> u32 {
        let mut remaining = rng.random_range(0..self.total);
        for &(id, weight) in &self.entries {
            if remaining < weight {
                return id;
            }
            remaining -= weight;
        }
        // Unreachable for a validated reel; mirror the table head as fallback.
        self.entries[0].0
    }
}

/// The full visible grid: 5 reels × 3 rows of symbol ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u32; ROWS]; REELS],
}

impl Grid {
    /// Build a grid from reel-major cells (`cells[reel][row]`)
    pub fn from_cells(cells: [[u32; ROWS]; REELS]) -> Self {
        Self { cells }
    }

    /// Symbol id at (reel, row)
    pub fn at(&self, reel: usize, row: usize) -> u32 {
        self.cells[reel][row]
    }

    /// One reel's visible column
    pub fn column(&self, reel: usize) -> &[u32; ROWS] {
        &self.cells[reel]
    }

    /// Count occurrences of a symbol anywhere in the grid
    pub fn count_symbol(&self, id: u32) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == id)
            .count() as u8
    }
}

/// One weight table per reel, validated at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelSet {
    reels: Vec<ReelWeights>,
}

impl ReelSet {
    /// Build a reel set from per-reel weight tables.
    ///
    /// Every reel must have positive total weight and reference only symbols
    /// present in the catalog; anything else is a configuration error.
    pub fn new(tables: Vec<Vec<(u32, u32)>>, symbols: &SymbolSet) -> EngineResult<Self> {
        if tables.len() != REELS {
            return Err(EngineError::ReelCountMismatch {
                expected: REELS,
                found: tables.len(),
            });
        }

        let mut reels = Vec::with_capacity(REELS);
        for (reel, entries) in tables.into_iter().enumerate() {
            for &(id, _) in &entries {
                if symbols.get(id).is_none() {
                    return Err(EngineError::UnknownSymbol { reel, id });
                }
            }
            let weights = ReelWeights::new(entries);
            if weights.total_weight() == 0 {
                return Err(EngineError::ZeroReelWeight { reel });
            }
            reels.push(weights);
        }

        Ok(Self { reels })
    }

    /// The standard Cozy Slots reel weights. Scatter is absent from reels 1
    /// and 3 to thin out free-spin triggers; wild is doubled there instead.
    pub fn standard(symbols: &SymbolSet) -> Self {
        let outer = vec![
            (0, 20),
            (1, 20),
            (2, 15),
            (3, 15),
            (4, 10),
            (5, 10),
            (6, 5),
            (7, 5),
        ];
        let inner = vec![
            (0, 20),
            (1, 20),
            (2, 15),
            (3, 15),
            (4, 10),
            (5, 10),
            (6, 10),
            (7, 0),
        ];
        Self::new(
            vec![
                outer.clone(),
                inner.clone(),
                outer.clone(),
                inner,
                outer,
            ],
            symbols,
        )
        .expect("standard reel weights are well-formed")
    }

    /// Weight table of one reel
    pub fn reel(&self, reel: usize) -> &ReelWeights {
        &self.reels[reel]
    }

    /// Draw one symbol for the given reel
    pub fn draw(&self, reel: usize, rng: &mut impl Rng) -> u32 {
        self.reels[reel].draw(rng)
    }

    /// Build a full visible grid: three independent draws per reel, no
    /// correlation between rows.
    pub fn build_grid(&self, rng: &mut impl Rng) -> Grid {
        let mut cells = [[0u32; ROWS]; REELS];
        for (reel, column) in cells.iter_mut().enumerate() {
            for cell in column.iter_mut() {
                *cell = self.reels[reel].draw(rng);
            }
        }
        Grid::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn draw_converges_to_configured_weights() {
        let symbols = SymbolSet::standard();
        let reels = ReelSet::standard(&symbols);
        let mut rng = StdRng::seed_from_u64(7);

        const DRAWS: usize = 100_000;
        let mut counts = [0usize; 8];
        for _ in 0..DRAWS {
            counts[reels.draw(0, &mut rng) as usize] += 1;
        }

        let total = reels.reel(0).total_weight() as f64;
        for &(id, weight) in reels.reel(0).entries() {
            let expected = weight as f64 / total;
            let observed = counts[id as usize] as f64 / DRAWS as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "symbol {id}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn zero_weight_symbol_never_drawn() {
        let symbols = SymbolSet::standard();
        let reels = ReelSet::standard(&symbols);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20_000 {
            // Scatter (7) has weight 0 on reels 1 and 3
            assert_ne!(reels.draw(1, &mut rng), 7);
            assert_ne!(reels.draw(3, &mut rng), 7);
        }
    }

    #[test]
    fn zero_total_weight_is_a_config_error() {
        let symbols = SymbolSet::standard();
        let mut tables: Vec<Vec<(u32, u32)>> =
            (0..REELS).map(|_| vec![(0, 1), (6, 1), (7, 1)]).collect();
        tables[2] = vec![(0, 0), (1, 0)];
        let err = ReelSet::new(tables, &symbols);
        assert!(matches!(err, Err(EngineError::ZeroReelWeight { reel: 2 })));
    }

    #[test]
    fn unknown_symbol_is_a_config_error() {
        let symbols = SymbolSet::standard();
        let tables: Vec<Vec<(u32, u32)>> = (0..REELS).map(|_| vec![(99, 1)]).collect();
        let err = ReelSet::new(tables, &symbols);
        assert!(matches!(
            err,
            Err(EngineError::UnknownSymbol { reel: 0, id: 99 })
        ));
    }

    #[test]
    fn wrong_reel_count_is_a_config_error() {
        let symbols = SymbolSet::standard();
        let err = ReelSet::new(vec![vec![(0, 1)]; 3], &symbols);
        assert!(matches!(
            err,
            Err(EngineError::ReelCountMismatch {
                expected: REELS,
                found: 3
            })
        ));
    }

    #[test]
    fn grid_builder_fills_all_cells_from_catalog() {
        let symbols = SymbolSet::standard();
        let reels = ReelSet::standard(&symbols);
        let mut rng = StdRng::seed_from_u64(3);

        let grid = reels.build_grid(&mut rng);
        for reel in 0..REELS {
            for row in 0..ROWS {
                assert!(symbols.get(grid.at(reel, row)).is_some());
            }
        }
    }

    #[test]
    fn grid_build_is_reproducible_per_seed() {
        let symbols = SymbolSet::standard();
        let reels = ReelSet::standard(&symbols);

        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(reels.build_grid(&mut a), reels.build_grid(&mut b));
    }

    #[test]
    fn count_symbol_scans_whole_grid() {
        let grid = Grid::from_cells([
            [7, 0, 1],
            [2, 7, 3],
            [4, 5, 7],
            [0, 1, 2],
            [3, 4, 5],
        ]);
        assert_eq!(grid.count_symbol(7), 3);
        assert_eq!(grid.count_symbol(0), 2);
        assert_eq!(grid.count_symbol(6), 0);
    }
}
