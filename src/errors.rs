use miette::Diagnostic;
use thiserror::Error;

use crate::{atoms::errors::AtomicLookupError, solver::SolverError};

pub type Result<T, E = Box<MolCalcError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum MolCalcError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    AtomicLookup {
        #[from]
        error: AtomicLookupError,
    },

    #[diagnostic(help("formulas need at least one element symbol, like H2O or NaCl"))]
    #[error("the formula contained no recognisable element tokens")]
    EmptyFormula,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Solver {
        #[from]
        error: SolverError,
    },
}
