//! Collection-growth workloads: appending to one growable list versus
//! rebuilding an immutable sequence on every step.

/// Push `0..n` onto a single `Vec`. Amortized O(1) per push.
pub fn append_to_list(n: usize) -> usize {
    let mut list = Vec::new();
    for i in 0..n {
        list.push(i);
    }
    list.len()
}

/// Grow an immutable boxed slice one element at a time.
///
/// Each step allocates a fresh slice and copies every existing element
/// into it, so the whole run is O(n^2).
pub fn concat_tuple(n: usize) -> usize {
    let mut tuple: Box<[usize]> = Box::new([]);
    for i in 0..n {
        tuple = tuple.iter().copied().chain(std::iter::once(i)).collect();
    }
    tuple.len()
}
