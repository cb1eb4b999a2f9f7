use super::square;

/// Quadratic check: every negative element triggers a full rescan.
///
/// The inner scan always visits the whole slice, and a miss does not stop
/// the outer loop; the result is the AND over every negative element.
pub fn negatives_squared_naive(values: &[i64]) -> bool {
    let mut all_found = true;
    for &v in values {
        if v < 0 {
            let target = square(v);
            let mut found = false;
            for &candidate in values {
                found = found || target == Some(candidate);
            }
            all_found = all_found && found;
        }
    }
    all_found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_vacuously_true() {
        assert!(negatives_squared_naive(&[]));
    }

    #[test]
    fn test_no_negatives() {
        assert!(negatives_squared_naive(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_missing_square() {
        assert!(!negatives_squared_naive(&[-3, 1, 2]));
    }

    #[test]
    fn test_all_squares_present() {
        assert!(negatives_squared_naive(&[-2, 4, -3, 9]));
    }

    #[test]
    fn test_miss_before_hit_still_false() {
        assert!(!negatives_squared_naive(&[-5, -2, 4]));
    }

    #[test]
    fn test_square_may_appear_before_negative() {
        assert!(negatives_squared_naive(&[49, 1, -7]));
    }

    #[test]
    fn test_overflowing_square_is_absent() {
        assert!(!negatives_squared_naive(&[i64::MIN]));
        assert!(!negatives_squared_naive(&[-4_000_000_000, i64::MAX]));
    }
}
