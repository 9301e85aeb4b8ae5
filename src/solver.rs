//! Solves the n = mass / Mr relationship given exactly two of the three quantities

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use miette::Diagnostic;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

use crate::Result;

// Public API ==========================================================================================================

/// The three quantities of the mole relationship, each independently optional. Exactly
/// one must be left out (or be unusable) for [`solve`] to proceed
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct TripleInput {
    pub moles: Option<Decimal>,
    pub mass: Option<Decimal>,
    pub molar_mass: Option<Decimal>,
}

impl TripleInput {
    /// Builds an input from three raw strings, as a form-style collaborator supplies
    /// them: comma decimal separators are normalized to dots, and anything empty or
    /// unparseable is treated as absent (not as zero, and not as an error)
    pub fn from_raw(
        moles: impl AsRef<str>,
        mass: impl AsRef<str>,
        molar_mass: impl AsRef<str>,
    ) -> Self {
        Self {
            moles: parse_quantity(moles.as_ref()),
            mass: parse_quantity(mass.as_ref()),
            molar_mass: parse_quantity(molar_mass.as_ref()),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum Quantity {
    Moles,
    Mass,
    MolarMass,
}

impl Quantity {
    pub const fn formula_label(self) -> &'static str {
        match self {
            Self::Moles => "n = Massa / Mr",
            Self::Mass => "Massa = n × Mr",
            Self::MolarMass => "Mr = Massa / n",
        }
    }

    /// Moles are reported to 4 decimal places, masses and molar masses to 3
    pub const fn display_scale(self) -> u32 {
        match self {
            Self::Moles => 4,
            Self::Mass | Self::MolarMass => 3,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Moles => "Mol (n)",
            Self::Mass => "Massa",
            Self::MolarMass => "Massa Molar (Mr)",
        }
    }

    const fn unit(self) -> &'static str {
        match self {
            Self::Moles => "mol",
            Self::Mass => "gram",
            Self::MolarMass => "g/mol",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
pub struct Solution {
    pub quantity: Quantity,
    pub value: Decimal,
}

impl Solution {
    pub fn formula_label(&self) -> &'static str {
        self.quantity.formula_label()
    }

    pub fn display_value(&self) -> String {
        display_fixed(self.value, self.quantity.display_scale())
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rumus: {}", self.formula_label())?;
        write!(
            f,
            "{}: {} {}",
            self.quantity.name(),
            self.display_value(),
            self.quantity.unit()
        )
    }
}

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum SolverError {
    #[diagnostic(help(
        "leave the quantity you want computed blank — negative values don't count as supplied"
    ))]
    #[error("exactly two of moles, mass, and molar mass must be supplied, but {0} were")]
    InputCount(usize),

    #[error("molar mass must be > 0")]
    NonPositiveMolarMass,

    #[error("moles must be > 0 when computing molar mass")]
    NonPositiveMoles,
}

/// Determines which quantity is missing and computes it from the other two. A supplied
/// value only counts if it's non-negative, so a negative entry makes its field the
/// computation target rather than failing outright
pub fn solve(input: &TripleInput) -> Result<Solution> {
    let usable = |value: Option<Decimal>| value.filter(|&v| v >= Decimal::ZERO);
    let moles = usable(input.moles);
    let mass = usable(input.mass);
    let molar_mass = usable(input.molar_mass);

    let supplied = [moles, mass, molar_mass].iter().flatten().count();
    if supplied != 2 {
        return Err(Box::new(SolverError::InputCount(supplied).into()));
    }

    let solution = match (moles, mass, molar_mass) {
        (None, Some(mass), Some(molar_mass)) => {
            if molar_mass <= Decimal::ZERO {
                return Err(Box::new(SolverError::NonPositiveMolarMass.into()));
            }
            Solution {
                quantity: Quantity::Moles,
                value: mass / molar_mass,
            }
        }
        (Some(moles), None, Some(molar_mass)) => Solution {
            quantity: Quantity::Mass,
            value: moles * molar_mass,
        },
        (Some(moles), Some(mass), None) => {
            if moles <= Decimal::ZERO {
                return Err(Box::new(SolverError::NonPositiveMoles.into()));
            }
            Solution {
                quantity: Quantity::MolarMass,
                value: mass / moles,
            }
        }
        // Exactly two of the three are present, so one of the arms above matched
        _ => unreachable!(),
    };

    Ok(solution)
}

// Private Helpers =====================================================================================================

fn parse_quantity(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        None
    } else {
        Decimal::from_str(&cleaned).ok()
    }
}

fn display_fixed(value: Decimal, scale: u32) -> String {
    let rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", scale as usize, rounded)
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::MolCalcError;

    use super::*;

    fn triple(
        moles: Option<Decimal>,
        mass: Option<Decimal>,
        molar_mass: Option<Decimal>,
    ) -> TripleInput {
        TripleInput {
            moles,
            mass,
            molar_mass,
        }
    }

    fn assert_solver_err(result: Result<Solution>, expected: &SolverError) {
        match *result.unwrap_err() {
            MolCalcError::Solver { ref error } => assert_eq!(error, expected),
            ref other => panic!("expected a solver error, got {other:?}"),
        }
    }

    #[test]
    fn solve_for_moles() {
        let solution = solve(&triple(None, Some(dec!(10)), Some(dec!(2)))).unwrap();
        assert_eq!(solution.quantity, Quantity::Moles);
        assert_eq!(solution.value, dec!(5));
        assert_eq!(solution.display_value(), "5.0000");
        assert_eq!(solution.formula_label(), "n = Massa / Mr");
    }

    #[test]
    fn solve_for_mass() {
        let solution = solve(&triple(Some(dec!(5)), None, Some(dec!(2)))).unwrap();
        assert_eq!(solution.quantity, Quantity::Mass);
        assert_eq!(solution.value, dec!(10));
        assert_eq!(solution.display_value(), "10.000");
        // Zero moles legitimately yield zero mass
        let nothing = solve(&triple(Some(dec!(0)), None, Some(dec!(18.016)))).unwrap();
        assert_eq!(nothing.value, dec!(0));
    }

    #[test]
    fn solve_for_molar_mass() {
        let solution = solve(&triple(Some(dec!(5)), Some(dec!(10)), None)).unwrap();
        assert_eq!(solution.quantity, Quantity::MolarMass);
        assert_eq!(solution.value, dec!(2));
        assert_eq!(solution.display_value(), "2.000");
        assert_eq!(solution.formula_label(), "Mr = Massa / n");
    }

    #[test]
    fn solve_input_count() {
        // Too few
        assert_solver_err(
            solve(&triple(None, Some(dec!(10)), None)),
            &SolverError::InputCount(1),
        );
        assert_solver_err(solve(&TripleInput::default()), &SolverError::InputCount(0));
        // Too many
        assert_solver_err(
            solve(&triple(Some(dec!(1)), Some(dec!(2)), Some(dec!(3)))),
            &SolverError::InputCount(3),
        );
    }

    #[test]
    fn solve_zero_guards() {
        assert_solver_err(
            solve(&triple(None, Some(dec!(10)), Some(dec!(0)))),
            &SolverError::NonPositiveMolarMass,
        );
        assert_solver_err(
            solve(&triple(Some(dec!(0)), Some(dec!(10)), None)),
            &SolverError::NonPositiveMoles,
        );
    }

    #[test]
    fn negative_input_becomes_the_target() {
        // A negative entry doesn't count as supplied, so its field is recomputed
        let solution = solve(&triple(Some(dec!(-1)), Some(dec!(10)), Some(dec!(2)))).unwrap();
        assert_eq!(solution.quantity, Quantity::Moles);
        assert_eq!(solution.value, dec!(5));
        // ...but a negative entry still leaves only one usable value here
        assert_solver_err(
            solve(&triple(Some(dec!(-1)), Some(dec!(10)), None)),
            &SolverError::InputCount(1),
        );
    }

    #[test]
    fn from_raw_parsing() {
        // Dot and comma decimal separators both work
        assert_eq!(
            TripleInput::from_raw("2.5", "10,5", ""),
            triple(Some(dec!(2.5)), Some(dec!(10.5)), None)
        );
        // Blank, whitespace-only, and unparseable fields are absent — not zero
        assert_eq!(
            TripleInput::from_raw("  ", "abc", "18.016"),
            triple(None, None, Some(dec!(18.016)))
        );
        // Negative values still parse; they're only discounted at solve time
        assert_eq!(
            TripleInput::from_raw("-1", "", "").moles,
            Some(dec!(-1))
        );
    }

    #[test]
    fn end_to_end_from_raw() {
        let solution = solve(&TripleInput::from_raw("", "10", "2")).unwrap();
        assert_eq!(solution.display_value(), "5.0000");
        let solution = solve(&TripleInput::from_raw("3", "", "18,016")).unwrap();
        assert_eq!(solution.display_value(), "54.048");
    }

    #[test]
    fn solution_display() {
        let solution = solve(&triple(None, Some(dec!(10)), Some(dec!(2)))).unwrap();
        assert_eq!(solution.to_string(), "Rumus: n = Massa / Mr\nMol (n): 5.0000 mol");
    }
}
