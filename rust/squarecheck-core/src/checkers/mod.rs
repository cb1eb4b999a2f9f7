//! Negative-square membership checks.
//!
//! Both checkers answer the same question: does every negative element of
//! the slice have its square present as a literal element of the same
//! slice? They differ only in cost.

mod indexed;
mod naive;

pub use indexed::negatives_squared_indexed;
pub use naive::negatives_squared_naive;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Square of `v`, or `None` when it does not fit in an `i64`.
///
/// An unrepresentable square can never equal an element of the slice, so
/// callers treat `None` as "absent".
#[inline]
pub(crate) fn square(v: i64) -> Option<i64> {
    v.checked_mul(v)
}

/// Selects one of the two checker implementations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Rescan the whole slice for every negative element. O(n^2).
    Naive,
    /// Index the positive elements in a hash set first. O(n) average.
    Indexed,
}

impl Strategy {
    /// Run the selected checker.
    pub fn check(self, values: &[i64]) -> bool {
        match self {
            Strategy::Naive => negatives_squared_naive(values),
            Strategy::Indexed => negatives_squared_indexed(values),
        }
    }

    /// Name as printed in reports.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_square_overflow_is_none() {
        assert_eq!(square(-3), Some(9));
        assert_eq!(square(-3_037_000_499), Some(9_223_372_030_926_249_001));
        assert_eq!(square(-3_037_000_500), None);
        assert_eq!(square(i64::MIN), None);
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::iter() {
            assert_eq!(Strategy::from_str(strategy.name()), Ok(strategy));
        }
        assert_eq!(Strategy::Naive.to_string(), "naive");
        assert_eq!(Strategy::Indexed.to_string(), "indexed");
        assert!(Strategy::from_str("quadratic").is_err());
    }

    #[test]
    fn test_strategy_dispatch() {
        for strategy in Strategy::iter() {
            assert!(strategy.check(&[-2, 4, -3, 9]));
            assert!(!strategy.check(&[-3, 1, 2]));
        }
    }
}
