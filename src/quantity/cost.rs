use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::quantity::Quantity;

pub type Cost = Quantity<0, 1>;

impl Cost {
    /// Round to whole cents, half away from zero.
    pub fn round_to_cents(self) -> Self {
        Self(OrderedFloat((self.0.0 * 100.0).round() / 100.0))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_abs_diff_eq!(Cost::from(1.239).round_to_cents().0.0, 1.24);
        assert_abs_diff_eq!(Cost::from(1.231).round_to_cents().0.0, 1.23);
        assert_abs_diff_eq!(Cost::from(-1.239).round_to_cents().0.0, -1.24);
    }
}
