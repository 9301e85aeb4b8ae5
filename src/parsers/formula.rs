// External Crate Imports
use nom::{
    branch::alt,
    character::complete::satisfy,
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::pair,
};

// Local Crate Imports
use super::{
    primitives::{count, lowercase, uppercase},
    ParseResult,
};
use crate::Count;

// Public API ==========================================================================================================

/// Formula = { Formula Token | junk } ;
///
/// The scanner is total: anything that cannot start a token (parentheses, charges,
/// hydrate dots, stray digits, lowercase runs) is consumed one character at a time and
/// dropped, so the only tokens produced are maximal capital-letter-initiated runs
pub fn formula_tokens(i: &str) -> ParseResult<Vec<(&str, Count)>> {
    let token = map(formula_token, Some);
    let junk = value(None, satisfy(|c| !c.is_ascii_uppercase()));
    map(many0(alt((token, junk))), |tokens| {
        tokens.into_iter().flatten().collect()
    })(i)
}

// Private Sub-Parsers =================================================================================================

/// Formula Token = Element Symbol , [ Count ] ;
fn formula_token(i: &str) -> ParseResult<(&str, Count)> {
    let optional_count = map(opt(count), Option::unwrap_or_default);
    pair(element_symbol, optional_count)(i)
}

/// Element Symbol = uppercase , { lowercase } ;
fn element_symbol(i: &str) -> ParseResult<&str> {
    recognize(pair(uppercase, many0(lowercase)))(i)
}

// Module Tests ========================================================================================================
