use super::square;
use std::collections::HashSet;

/// Linear check: index the strictly positive elements, then probe the set
/// with each negative element's square. Returns on the first miss.
///
/// Zero is never indexed. It cannot be the square of a negative integer,
/// so leaving it out does not change any answer.
pub fn negatives_squared_indexed(values: &[i64]) -> bool {
    let positives: HashSet<i64> = values.iter().copied().filter(|&v| v > 0).collect();

    for &v in values {
        if v < 0 && !square(v).is_some_and(|sq| positives.contains(&sq)) {
            return false;
        }
    }
    true
}
