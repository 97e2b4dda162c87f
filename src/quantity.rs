pub mod cost;
pub mod energy;
pub mod rate;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Dimensioned scalar: `VOLUME` counts meter-volume units (kilowatt-hours),
/// `COST` counts currency units.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const VOLUME: isize, const COST: isize>(pub OrderedFloat<f64>);

impl<const VOLUME: isize, const COST: isize> Quantity<VOLUME, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_ordering() {
        assert_eq!(Bare::from(1).min(Bare::from(2)), Bare::from(1));
        assert_eq!(Bare::from(1).max(Bare::from(2)), Bare::from(2));
    }

    #[test]
    fn test_is_finite() {
        assert!(Bare::from(42.0).is_finite());
        assert!(!Bare::from(f64::NAN).is_finite());
        assert!(!Bare::from(f64::INFINITY).is_finite());
    }
}
