use rust_decimal::{Decimal, RoundingStrategy};

use crate::Mass;

impl Mass {
    pub fn rounded(self, decimal_points: u32) -> Decimal {
        // Half-way cases round away from zero, matching the behaviour callers of the old
        // `toFixed`-style display already depend on
        Decimal::from(self).round_dp_with_strategy(decimal_points, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formats to exactly `decimal_points` decimal places, padding with trailing zeros.
    /// Rounding is a presentation concern — the stored value keeps full precision
    pub fn display_rounded(self, decimal_points: u32) -> String {
        format!(
            "{:.*}",
            decimal_points as usize,
            self.rounded(decimal_points)
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn display_rounded_pads_and_rounds() {
        assert_eq!(Mass::from(dec!(18.016)).display_rounded(3), "18.016");
        assert_eq!(Mass::from(dec!(58.44)).display_rounded(3), "58.440");
        assert_eq!(Mass::from(dec!(16)).display_rounded(3), "16.000");
        assert_eq!(Mass::from(dec!(2.0165)).display_rounded(3), "2.017");
        assert_eq!(Mass::from(dec!(0)).display_rounded(3), "0.000");
    }

    #[test]
    fn mass_arithmetic() {
        let total: Mass = [Mass::from(dec!(2.016)), Mass::from(dec!(16.00))]
            .into_iter()
            .sum();
        assert_eq!(total, Mass::from(dec!(18.016)));
        assert_eq!(
            Mass::from(dec!(22.99)) + Mass::from(dec!(35.45)),
            Mass::from(dec!(58.44))
        );
    }
}
