use std::fmt::{self, Display, Formatter};

use crate::{Element, Mass, Massive, Result};

use super::{atomic_database::AtomicDatabase, errors::AtomicLookupError};

impl<'a> Element<'a> {
    pub(crate) fn new(
        db: &'a AtomicDatabase,
        symbol: impl AsRef<str>,
    ) -> Result<Self, AtomicLookupError> {
        let symbol = symbol.as_ref();
        let (symbol, &relative_mass) = db
            .elements
            .get_key_value(symbol)
            .ok_or_else(|| AtomicLookupError::element(symbol))?;

        Ok(Self {
            symbol,
            relative_mass,
        })
    }

    pub fn symbol(&self) -> &'a str {
        self.symbol
    }
}

impl Display for Element<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl Massive for Element<'_> {
    fn relative_mass(&self) -> Mass {
        self.relative_mass
    }
}
