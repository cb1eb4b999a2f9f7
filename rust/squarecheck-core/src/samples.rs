//! Input lists fed to the checkers.

/// Small hand-written list where every negative has its square present.
pub fn small_sample() -> Vec<i64> {
    vec![-1, -6, -9, 0, 148, 1, 36, 81, 148]
}

/// `0, -1, ..., -(n-1)` followed by the square of each, in the same order.
///
/// Every negative is satisfied, so neither checker can finish early. The
/// result has `2n` elements.
pub fn mirrored_sample(n: usize) -> Vec<i64> {
    let negatives: Vec<i64> = (0..n as i64).map(|v| -v).collect();
    let squares = negatives.iter().map(|v| v * v);
    let mut out = Vec::with_capacity(2 * n);
    out.extend_from_slice(&negatives);
    out.extend(squares);
    out
}
