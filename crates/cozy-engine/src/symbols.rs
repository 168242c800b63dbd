//! Symbol catalog and pay tables

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Pay table length: entries are indexed by match count, 0..=5.
/// Entries 0..=2 are always zero (no pay below 3 of a kind).
pub const PAY_TABLE_LEN: usize = 6;

/// Symbol classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Regular paying symbol
    Regular,
    /// Wild - substitutes for any paying symbol in a line match
    Wild,
    /// Scatter - pays on grid-wide count and terminates line matching
    Scatter,
}

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Display name (e.g., "Beast", "Wild")
    pub name: String,
    /// Symbol classification
    pub kind: SymbolKind,
    /// Bet-multiplier pays indexed by match count (entries 0..=2 unused)
    pub pays: [f64; PAY_TABLE_LEN],
}

impl Symbol {
    fn with_pays(id: u32, name: &str, kind: SymbolKind, three: f64, four: f64, five: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            pays: [0.0, 0.0, 0.0, three, four, five],
        }
    }

    /// Create a regular symbol paying `three`/`four`/`five` of a kind
    pub fn regular(id: u32, name: &str, three: f64, four: f64, five: f64) -> Self {
        Self::with_pays(id, name, SymbolKind::Regular, three, four, five)
    }

    /// Create a wild symbol with its own pay table
    pub fn wild(id: u32, name: &str, three: f64, four: f64, five: f64) -> Self {
        Self::with_pays(id, name, SymbolKind::Wild, three, four, five)
    }

    /// Create a scatter symbol (pays total-bet multipliers on grid count)
    pub fn scatter(id: u32, name: &str, three: f64, four: f64, five: f64) -> Self {
        Self::with_pays(id, name, SymbolKind::Scatter, three, four, five)
    }

    /// Get the bet-multiplier pay for a match count
    pub fn pay(&self, match_count: u8) -> f64 {
        self.pays
            .get(match_count as usize)
            .copied()
            .unwrap_or(0.0)
    }
}

/// The symbol catalog for one game: all symbols plus resolved wild/scatter ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
    wild_id: u32,
    scatter_id: u32,
}

impl SymbolSet {
    /// Build a catalog from symbol definitions.
    ///
    /// Requires unique ids and exactly one wild and one scatter.
    pub fn new(symbols: Vec<Symbol>) -> EngineResult<Self> {
        for (i, sym) in symbols.iter().enumerate() {
            if symbols[..i].iter().any(|s| s.id == sym.id) {
                return Err(EngineError::DuplicateSymbolId(sym.id));
            }
        }

        let mut wilds = symbols.iter().filter(|s| s.kind == SymbolKind::Wild);
        let mut scatters = symbols.iter().filter(|s| s.kind == SymbolKind::Scatter);
        let (wild, scatter) = match (wilds.next(), scatters.next()) {
            (Some(w), Some(s)) => (w.id, s.id),
            _ => return Err(EngineError::MissingSpecialSymbol),
        };
        if wilds.next().is_some() || scatters.next().is_some() {
            return Err(EngineError::MissingSpecialSymbol);
        }

        Ok(Self {
            symbols,
            wild_id: wild,
            scatter_id: scatter,
        })
    }

    /// The standard Cozy Slots catalog: six creature classes plus wild and
    /// scatter. Pays are per-symbol bet multipliers for 3/4/5 of a kind.
    pub fn standard() -> Self {
        Self::new(vec![
            Symbol::regular(0, "Beast", 5.0, 25.0, 100.0),
            Symbol::regular(1, "Plant", 5.0, 25.0, 100.0),
            Symbol::regular(2, "Aquatic", 10.0, 50.0, 200.0),
            Symbol::regular(3, "Bird", 10.0, 50.0, 200.0),
            Symbol::regular(4, "Reptile", 15.0, 75.0, 300.0),
            Symbol::regular(5, "Bug", 15.0, 75.0, 300.0),
            Symbol::wild(6, "Wild", 25.0, 125.0, 500.0),
            Symbol::scatter(7, "Scatter", 2.0, 10.0, 50.0),
        ])
        .expect("standard catalog is well-formed")
    }

    /// Get symbol by ID
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// All symbols in the catalog
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The wild symbol id
    pub fn wild_id(&self) -> u32 {
        self.wild_id
    }

    /// The scatter symbol id
    pub fn scatter_id(&self) -> u32 {
        self.scatter_id
    }

    pub fn is_wild(&self, id: u32) -> bool {
        id == self.wild_id
    }

    pub fn is_scatter(&self, id: u32) -> bool {
        id == self.scatter_id
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_lookup_by_match_count() {
        let beast = Symbol::regular(0, "Beast", 5.0, 25.0, 100.0);
        assert_eq!(beast.pay(2), 0.0);
        assert_eq!(beast.pay(3), 5.0);
        assert_eq!(beast.pay(4), 25.0);
        assert_eq!(beast.pay(5), 100.0);
        assert_eq!(beast.pay(6), 0.0);
    }

    #[test]
    fn standard_catalog() {
        let set = SymbolSet::standard();
        assert_eq!(set.symbols().len(), 8);
        assert_eq!(set.wild_id(), 6);
        assert_eq!(set.scatter_id(), 7);
        assert_eq!(set.get(4).unwrap().name, "Reptile");
        assert_eq!(set.get(7).unwrap().pay(5), 50.0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = SymbolSet::new(vec![
            Symbol::regular(0, "A", 1.0, 2.0, 3.0),
            Symbol::regular(0, "B", 1.0, 2.0, 3.0),
            Symbol::wild(1, "Wild", 1.0, 2.0, 3.0),
            Symbol::scatter(2, "Scatter", 1.0, 2.0, 3.0),
        ]);
        assert!(matches!(err, Err(EngineError::DuplicateSymbolId(0))));
    }

    #[test]
    fn rejects_missing_wild_or_scatter() {
        let err = SymbolSet::new(vec![Symbol::regular(0, "A", 1.0, 2.0, 3.0)]);
        assert!(matches!(err, Err(EngineError::MissingSpecialSymbol)));
    }
}
