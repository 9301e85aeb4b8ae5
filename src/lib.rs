//! A calculator core for molar masses and mole / mass / molar-mass conversions

pub mod atoms;
pub mod errors;
pub mod parsers;
pub mod solver;

use rust_decimal::Decimal;
use serde::Serialize;

pub use atoms::atomic_database::AtomicDatabase;
pub use errors::{MolCalcError, Result};
pub use solver::{Quantity, Solution, TripleInput};

// NOTE: For the types in this module, 'a lifetimes indicate references to the AtomicDatabase

/// An ordered sequence of `(Element, Count)` pairs parsed from a chemical formula string.
/// Repeated symbols in separate tokens stay separate — "CH3COOH" keeps all six components
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ChemicalFormula<'a> {
    components: Vec<(Element<'a>, Count)>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Element<'a> {
    symbol: &'a str,
    relative_mass: Mass,
}

/// How many atoms of an element one formula token contributes. Defaults to 1 when the
/// token carries no digits; a literal "0" is kept as a zero count
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct Count(u32);

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Serialize,
    derive_more::Add,
    derive_more::Sum,
    derive_more::From,
    derive_more::Into,
    derive_more::Display,
)]
pub struct Mass(Decimal);

// ---------------------------------------------------------------------------------------------------------------------

/// The per-element breakdown and total produced by [`ChemicalFormula::molar_mass`]. The
/// breakdown preserves parse order, and `total` is exactly the sum of the contributions
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct MolarMassResult {
    breakdown: Vec<MassContribution>,
    total: Mass,
}

#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct MassContribution {
    pub element: String,
    pub count: Count,
    pub atomic_mass: Mass,
    pub contribution: Mass,
}

// =====================================================================================================================

pub trait Massive {
    fn relative_mass(&self) -> Mass;
}

// Blanket impls

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive> Massive for $ref_type {
                fn relative_mass(&self) -> Mass {
                    (**self).relative_mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, &mut T, Box<T>);
