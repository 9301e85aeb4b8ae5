use std::fmt::{self, Display, Formatter};

// External Crate Imports
use nom::combinator::all_consuming;

// Local Crate Imports
use crate::{
    parsers::formula::formula_tokens, AtomicDatabase, ChemicalFormula, Count, Element, Mass,
    MassContribution, Massive, MolCalcError, MolarMassResult, Result,
};

// Public API ==========================================================================================================

impl<'a> ChemicalFormula<'a> {
    /// Parses a formula string into its `(Element, Count)` components, validating every
    /// symbol against the supplied atomic database. An unknown symbol aborts the whole
    /// parse — no partial component list is ever returned
    pub fn new(db: &'a AtomicDatabase, formula: impl AsRef<str>) -> Result<Self> {
        let cleaned: String = formula
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        // SAFETY: the call to `.unwrap()` is safe here since `formula_tokens` skips any
        // character it can't use, so it always succeeds in consuming the whole input
        let (_, tokens) = all_consuming(formula_tokens)(&cleaned).unwrap();

        let components = tokens
            .into_iter()
            .map(|(symbol, count)| Element::new(db, symbol).map(|element| (element, count)))
            .collect::<Result<_, _>>()
            .map_err(|e| Box::new(e.into()))?;

        Ok(Self { components })
    }

    pub fn components(&self) -> &[(Element<'a>, Count)] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Computes the total molar mass and the per-component contribution breakdown. One
    /// breakdown line is emitted per component, not per unique element, in parse order
    pub fn molar_mass(&self) -> Result<MolarMassResult> {
        if self.components.is_empty() {
            return Err(Box::new(MolCalcError::EmptyFormula));
        }

        let mut total = Mass::default();
        let mut breakdown = Vec::with_capacity(self.components.len());
        for &(element, count) in &self.components {
            let atomic_mass = element.relative_mass();
            let contribution = count * atomic_mass;
            total = total + contribution;
            breakdown.push(MassContribution {
                element: element.symbol().to_owned(),
                count,
                atomic_mass,
                contribution,
            });
        }

        Ok(MolarMassResult { breakdown, total })
    }
}

impl MolarMassResult {
    pub fn breakdown(&self) -> &[MassContribution] {
        &self.breakdown
    }

    pub fn total(&self) -> Mass {
        self.total
    }
}

// Massive Trait Implementations =======================================================================================

impl Massive for ChemicalFormula<'_> {
    fn relative_mass(&self) -> Mass {
        self.components
            .iter()
            .map(|&(element, count)| count * element.relative_mass())
            .sum()
    }
}

// Display Trait Implementations =======================================================================================

impl Display for ChemicalFormula<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &(element, count) in &self.components {
            write!(f, "{element}{count}")?;
        }
        Ok(())
    }
}

impl Display for MolarMassResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in &self.breakdown {
            writeln!(
                f,
                "{} ({}) x Ar {} ({}) = {}",
                line.element,
                line.count.get(),
                line.element,
                line.atomic_mass.display_rounded(3),
                line.contribution.display_rounded(3),
            )?;
        }
        write!(f, "Massa Molar (Mr): {} g/mol", self.total.display_rounded(3))
    }
}

// Module Tests ========================================================================================================
