use serde::{Serialize, Serializer};
use std::fmt;

/// An exact half-integer quantum number, stored as twice its value.
///
/// Spins, isospins and their projections are either integers or odd halves
/// depending on the parity of the particle number, so the doubled value is
/// always an exact integer. Ordering and equality follow the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HalfInt {
    twice: i64,
}

impl HalfInt {
    pub const ZERO: Self = Self { twice: 0 };

    /// Builds a half-integer from twice its value, e.g. `from_twice(3)` is 3/2.
    pub const fn from_twice(twice: i64) -> Self {
        Self { twice }
    }

    /// Builds a whole-integer value.
    pub const fn from_int(value: i64) -> Self {
        Self { twice: value * 2 }
    }

    pub const fn twice(self) -> i64 {
        self.twice
    }

    pub const fn is_integer(self) -> bool {
        self.twice % 2 == 0
    }

    pub fn to_f64(self) -> f64 {
        self.twice as f64 / 2.0
    }

    /// The SU(2) degeneracy 2j + 1 of an angular momentum j.
    ///
    /// Only meaningful for non-negative values.
    pub const fn degeneracy(self) -> i64 {
        self.twice + 1
    }
}

impl fmt::Display for HalfInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.twice % 2 == 0 {
            write!(f, "{}", self.twice / 2)
        } else {
            write!(f, "{}/2", self.twice)
        }
    }
}

impl Serialize for HalfInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_values_display_without_denominator() {
        assert_eq!(HalfInt::from_int(3).to_string(), "3");
        assert_eq!(HalfInt::ZERO.to_string(), "0");
        assert_eq!(HalfInt::from_twice(-4).to_string(), "-2");
    }

    #[test]
    fn odd_halves_display_as_fractions() {
        assert_eq!(HalfInt::from_twice(1).to_string(), "1/2");
        assert_eq!(HalfInt::from_twice(5).to_string(), "5/2");
        assert_eq!(HalfInt::from_twice(-1).to_string(), "-1/2");
    }

    #[test]
    fn ordering_follows_numeric_value() {
        assert!(HalfInt::from_twice(1) < HalfInt::from_int(1));
        assert!(HalfInt::from_twice(3) > HalfInt::from_twice(2));
    }

    #[test]
    fn degeneracy_is_two_j_plus_one() {
        assert_eq!(HalfInt::from_int(1).degeneracy(), 3);
        assert_eq!(HalfInt::from_twice(1).degeneracy(), 2);
        assert_eq!(HalfInt::ZERO.degeneracy(), 1);
    }

    #[test]
    fn parity_classification() {
        assert!(HalfInt::from_int(2).is_integer());
        assert!(!HalfInt::from_twice(3).is_integer());
    }
}
