pub mod formula;
pub mod primitives;

use nom::IResult;

pub type ParseResult<'a, O> = IResult<&'a str, O>;
