//! Wall-clock timing harness.

use crate::error::SquareCheckError;
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Call `func(input)` `reps` times and return the mean seconds per call.
///
/// The clock wraps the whole loop, not each call, so per-call overhead of
/// reading the clock is excluded. Results go through [`black_box`] so the
/// calls cannot be optimized away.
///
/// ```
/// use squarecheck_core::{negatives_squared_indexed, time_call};
///
/// let avg = time_call(&[-2_i64, 4][..], negatives_squared_indexed, 10).unwrap();
/// assert!(avg >= 0.0);
/// ```
pub fn time_call<T, R, F>(input: &T, mut func: F, reps: u32) -> Result<f64, SquareCheckError>
where
    T: ?Sized,
    F: FnMut(&T) -> R,
{
    if reps == 0 {
        return Err(SquareCheckError::ZeroRepetitions);
    }

    let start = Instant::now();
    for _ in 0..reps {
        black_box(func(black_box(input)));
    }
    let total = start.elapsed();

    let avg = total.as_secs_f64() / f64::from(reps);
    debug!(reps, total_secs = total.as_secs_f64(), avg_secs = avg, "timed call");
    Ok(avg)
}
