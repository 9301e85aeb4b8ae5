use ahash::HashMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::Mass;

/// An immutable mapping from element symbol to relative atomic mass (Ar). Lookups are
/// case-sensitive and exact — "na" is not "Na"
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AtomicDatabase {
    pub(crate) elements: HashMap<String, Mass>,
}

/// The bundled table: periods 1–4 (minus a few trace elements) plus a handful of heavier
/// elements that turn up in school-level chemistry
const AR_TABLE: &[(&str, Decimal)] = &[
    ("H", dec!(1.008)),
    ("He", dec!(4.003)),
    ("Li", dec!(6.941)),
    ("Be", dec!(9.012)),
    ("B", dec!(10.81)),
    ("C", dec!(12.01)),
    ("N", dec!(14.01)),
    ("O", dec!(16.00)),
    ("F", dec!(19.00)),
    ("Ne", dec!(20.18)),
    ("Na", dec!(22.99)),
    ("Mg", dec!(24.31)),
    ("Al", dec!(26.98)),
    ("Si", dec!(28.09)),
    ("P", dec!(30.97)),
    ("S", dec!(32.07)),
    ("Cl", dec!(35.45)),
    ("Ar", dec!(39.95)),
    ("K", dec!(39.10)),
    ("Ca", dec!(40.08)),
    ("Sc", dec!(44.96)),
    ("Ti", dec!(47.87)),
    ("V", dec!(50.94)),
    ("Cr", dec!(52.00)),
    ("Mn", dec!(54.94)),
    ("Fe", dec!(55.85)),
    ("Ni", dec!(58.69)),
    ("Cu", dec!(63.55)),
    ("Zn", dec!(65.38)),
    ("As", dec!(74.92)),
    ("Br", dec!(79.90)),
    ("Kr", dec!(83.80)),
    ("Ag", dec!(107.87)),
    ("Sn", dec!(118.71)),
    ("I", dec!(126.90)),
    ("Ba", dec!(137.33)),
    ("Au", dec!(196.97)),
    ("Hg", dec!(200.59)),
    ("Pb", dec!(207.2)),
];

impl AtomicDatabase {
    /// Builds a database from arbitrary `(symbol, Ar)` entries — extending the bundled
    /// table is a configuration change, not a logic change
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, Decimal)>) -> Self {
        let elements = entries
            .into_iter()
            .map(|(symbol, relative_mass)| (symbol.into(), Mass::from(relative_mass)))
            .collect();
        Self { elements }
    }

    pub fn relative_mass(&self, symbol: &str) -> Option<Mass> {
        self.elements.get(symbol).copied()
    }
}

impl Default for AtomicDatabase {
    fn default() -> Self {
        Self::new(AR_TABLE.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table() {
        let db = AtomicDatabase::default();
        assert_eq!(db.elements.len(), 39);
        // Spot-check the lightest, heaviest, and a two-letter entry
        assert_eq!(db.relative_mass("H"), Some(Mass::from(dec!(1.008))));
        assert_eq!(db.relative_mass("Pb"), Some(Mass::from(dec!(207.2))));
        assert_eq!(db.relative_mass("Na"), Some(Mass::from(dec!(22.99))));
        // Lookups are case-sensitive and exact
        assert_eq!(db.relative_mass("na"), None);
        assert_eq!(db.relative_mass("NA"), None);
        assert_eq!(db.relative_mass("Xx"), None);
    }

    #[test]
    fn custom_table() {
        let db = AtomicDatabase::new([("Uuo", dec!(294.0))]);
        assert_eq!(db.relative_mass("Uuo"), Some(Mass::from(dec!(294.0))));
        assert_eq!(db.relative_mass("H"), None);
    }
}
