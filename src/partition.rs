//! Partition geometry for [`HeapArray`](crate::HeapArray).
//!
//! The backing array is cut into partitions of odd size: partition `p` holds `2p + 1`
//! slots and starts at `p²`, so the first `k` partitions cover exactly `k²` slots.
//!
//! ```text
//! index:      0 | 1 2 3 | 4 5 6 7 8 | 9 ...
//! partition:  0 |   1   |     2     | 3 ...
//! ```
//!
//! Every function here is closed-form integer arithmetic with no failure modes.

/// Integer square root, rounded down.
pub fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    // Float estimate, then exact correction in both directions.
    let mut r = (n as f64).sqrt() as usize;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// Integer square root, rounded up.
pub fn ceil_sqrt(n: usize) -> usize {
    let r = isqrt(n);
    if r * r == n { r } else { r + 1 }
}

/// Smallest perfect square that is `>= n`.
#[inline]
pub fn round_up_to_square(n: usize) -> usize {
    let r = ceil_sqrt(n);
    r * r
}

/// Number of slots in partition `p`.
#[inline]
pub fn partition_size(p: usize) -> usize {
    2 * p + 1
}

/// Array index of the first slot of partition `p`.
#[inline]
pub fn partition_start(p: usize) -> usize {
    p * p
}

/// Array index of the last slot of partition `p` (inclusive).
#[inline]
pub fn partition_end(p: usize) -> usize {
    p * p + 2 * p
}

/// Index of the partition holding the last of `count` elements.
#[inline]
pub fn final_partition(count: usize) -> usize {
    if count > 0 { ceil_sqrt(count) - 1 } else { 0 }
}

/// Number of live elements in partition `p` when the container holds `count`.
///
/// Partitions before the final one are always full.
pub fn count_in_partition(p: usize, count: usize) -> usize {
    if p >= final_partition(count) {
        count.saturating_sub(partition_start(p))
    } else {
        partition_size(p)
    }
}

/// Partition that array index `i` falls in.
#[inline]
pub fn index_to_partition(i: usize) -> usize {
    isqrt(i)
}
