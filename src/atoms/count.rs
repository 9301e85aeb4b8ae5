use std::{
    fmt::{self, Display, Formatter},
    ops::Mul,
};

use rust_decimal::Decimal;

use crate::{Count, Mass};

impl Count {
    pub fn new(n: u32) -> Self {
        Self(n)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Mul<Mass> for Count {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Self::Output {
        Mass::from(Decimal::from(self.0) * Decimal::from(rhs))
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Implicit single counts are written without digits, as in the source formula
        if self.0 != 1 {
            write!(f, "{}", self.0)?;
        }
        Ok(())
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(1)
    }
}
