//! An ordered container made of square-root-sized min-max heaps in one array.
//!
//! [`HeapArray`] slices its buffer into partitions of 1, 3, 5, 7, … slots (see
//! [`partition`](crate::partition)). Every partition is an independent min-max heap and
//! the partitions are block-sorted: each value in partition `p` is `<=` each value in
//! partition `p + 1`. Only the final partition may be partly filled.
//!
//! Consequences:
//! * the global minimum is slot 0 and the global maximum is the max of the final
//!   partition, both O(1);
//! * a binary search over partition ranges finds the one partition a value can live in,
//!   and a linear scan of that partition (O(√N)) finishes the lookup;
//! * insert and remove touch at most one heap operation per partition, O(√N log N)
//!   worst case.

use core::mem;
use core::ops::Index;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::error::HeapArrayError;
use crate::heaps::minmax::{max_index, HeapSegment, Ripple};
use crate::heaps::DoubleEndedHeap;
use crate::partition::{
    count_in_partition, final_partition, partition_size, partition_start, round_up_to_square,
};

/// First allocation made by a growable container that started empty.
pub const MIN_ALLOCATION: usize = 4;

/// An array of min-max heap partitions with O(1) min/max and O(√N) search.
///
/// # Storage
/// `buf` is one contiguous allocation whose length is the *physical capacity*; slots
/// `[0, len)` hold data and the rest hold `T::default()`. Capacity is always a perfect
/// square unless the container is fixed-size, so partition boundaries line up with
/// the end of the buffer.
///
/// # Pseudo-code Implementation
/// ```text
/// // 1. Insert
/// if full: grow (double, round up to a square) or fail if fixed
/// p = binary search for the partition whose block should hold value
/// loop:
///     match partition[p].ripple_add(value):
///         Absorbed           => break
///         Displaced(largest) => value = largest; p += 1
/// len += 1
///
/// // 2. Remove
/// (p, offset) = find(value) or return false
/// if p is final: partition[p].remove_at(offset)
/// else:
///     carry = partition[final].remove_min()
///     for q in (p+1 .. final).rev(): carry = partition[q].replace_at(0, carry)
///     partition[p].replace_at(offset, carry)
/// len -= 1
/// ```
#[derive(Clone)]
pub struct HeapArray<T> {
    buf: Vec<T>,
    len: usize,
    fixed: bool,
}

/// Where a value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    /// Absolute array index.
    index: usize,
    partition: usize,
    /// Offset inside the partition.
    offset: usize,
}

impl<T: Ord + Default> HeapArray<T> {
    /// Creates an empty, growable container. No allocation happens until the first
    /// insert.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            len: 0,
            fixed: false,
        }
    }

    /// Creates an empty, growable container with at least `capacity` slots (rounded up
    /// to a perfect square).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reallocate(capacity, true);
        array
    }

    /// Creates an empty container with exactly `capacity` slots that never resizes.
    pub fn fixed(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, T::default);
        Self {
            buf,
            len: 0,
            fixed: true,
        }
    }

    /// Builds a container from `values`: sort, then heapify every partition.
    ///
    /// With `allow_resize` the capacity is rounded up to a perfect square; without it
    /// the container is fixed at exactly `values.len()` slots.
    pub fn from_vec(values: Vec<T>, allow_resize: bool) -> Self {
        Self::from_vec_with_capacity(values, 0, allow_resize)
    }

    /// Like [`from_vec`](Self::from_vec), reserving at least `capacity` slots.
    pub fn from_vec_with_capacity(
        mut values: Vec<T>,
        capacity: usize,
        allow_resize: bool,
    ) -> Self {
        let len = values.len();
        let mut physical = capacity.max(len);
        if allow_resize && physical > 0 {
            physical = round_up_to_square(physical);
        }
        values.sort_unstable();
        values.resize_with(physical, T::default);

        let mut array = Self {
            buf: values,
            len,
            fixed: !allow_resize,
        };
        // Partition 0 holds one element and is trivially a heap.
        for p in 1..array.partition_count() {
            array.segment(p).build();
        }
        array
    }

    // --- Inspection ---

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the container was built fixed-size.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// The smallest element.
    pub fn min(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The largest element: the max of the final partition.
    pub fn max(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let last = self.partition(final_partition(self.len));
        max_index(last).map(|m| &last[m])
    }

    /// Element at physical index `index`.
    pub fn get(&self, index: usize) -> Result<&T, HeapArrayError> {
        self.as_slice()
            .get(index)
            .ok_or(HeapArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Absolute index of one occurrence of `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.locate(value).map(|loc| loc.index)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// Live elements in physical order.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Iterates in physical order: block-sorted across partitions, heap order within.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// One slice per partition, first to final.
    pub fn partitions(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.partition_count()).map(move |p| self.partition(p))
    }

    // --- Modification ---

    /// Inserts `value`, growing the buffer when full.
    ///
    /// Fails with [`HeapArrayError::CapacityExceeded`] on a full fixed-size container;
    /// nothing is modified in that case.
    pub fn insert(&mut self, value: T) -> Result<(), HeapArrayError> {
        if self.len == self.capacity() {
            if self.fixed {
                return Err(HeapArrayError::CapacityExceeded {
                    capacity: self.capacity(),
                });
            }
            self.grow();
        }
        let mut p = self.search_partition(&value, true).unwrap_or(0);
        let mut value = value;
        loop {
            match self.segment(p).ripple_add(value) {
                Ripple::Absorbed => break,
                Ripple::Displaced(largest) => {
                    value = largest;
                    p += 1;
                }
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Removes one occurrence of `value`. Returns `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.locate(value) {
            Some(loc) => self.remove_location(loc).is_ok(),
            None => false,
        }
    }

    /// Removes and returns the smallest element.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let root = Location {
            index: 0,
            partition: 0,
            offset: 0,
        };
        self.remove_location(root).ok()
    }

    /// Removes and returns the largest element. Never ripples: the maximum always
    /// lives in the final partition.
    pub fn pop_max(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = final_partition(self.len);
        let offset = max_index(self.partition(last))?;
        let loc = Location {
            index: partition_start(last) + offset,
            partition: last,
            offset,
        };
        self.remove_location(loc).ok()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        for slot in &mut self.buf[..self.len] {
            *slot = T::default();
        }
        self.len = 0;
    }

    /// Reallocates to `new_capacity` slots, rounded up to a perfect square.
    ///
    /// Shrinking below `len` keeps the first `new_capacity` rounded elements, which is
    /// still a valid structure. Zero releases the buffer.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), HeapArrayError> {
        if self.fixed {
            return Err(HeapArrayError::ResizeDisabled);
        }
        self.reallocate(new_capacity, true);
        Ok(())
    }

    /// Moves the contents out, leaving `self` empty and growable.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    // --- Consumption ---

    /// Consumes the container and returns its elements in physical order.
    pub fn into_vec(self) -> Vec<T> {
        let mut buf = self.buf;
        buf.truncate(self.len);
        buf
    }

    /// Consumes the container and returns its elements sorted ascending.
    ///
    /// Block order means sorting each partition on its own is enough.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let parts = self.partition_count();
        let len = self.len;
        let mut vec = self.into_vec();
        for p in 1..parts {
            let start = partition_start(p);
            let end = (start + partition_size(p)).min(len);
            vec[start..end].sort_unstable();
        }
        vec
    }

    // --- Internals ---

    fn partition_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            final_partition(self.len) + 1
        }
    }

    /// Live elements of partition `p`.
    fn partition(&self, p: usize) -> &[T] {
        let start = partition_start(p);
        &self.buf[start..start + count_in_partition(p, self.len)]
    }

    /// Heap view over partition `p`, clipped to the physical buffer.
    fn segment(&mut self, p: usize) -> HeapSegment<'_, T> {
        let start = partition_start(p);
        let end = (start + partition_size(p)).min(self.buf.len());
        let count = count_in_partition(p, self.len);
        HeapSegment::new(&mut self.buf[start..end], count)
    }

    /// `(min, max)` of a non-empty partition.
    fn range_in_partition(&self, p: usize) -> (&T, &T) {
        let part = self.partition(p);
        let m = max_index(part).unwrap_or(0);
        (&part[0], &part[m])
    }

    /// Binary search for the partition whose range holds `value`.
    ///
    /// In insert mode a partition also accepts values that fall in the gap just below
    /// its range, values below the first partition, and values above the final one, so
    /// every value has a home. Comparisons are inclusive on both ends.
    fn search_partition(&self, value: &T, for_insert: bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let last = final_partition(self.len);
        let (mut left, mut right) = (0, last);
        while left <= right {
            let mid = left + (right - left) / 2;
            let (min, max) = self.range_in_partition(mid);
            let inside = min <= value && value <= max;
            let accepts = inside
                || (for_insert
                    && ((mid == 0 && value <= max)
                        || (mid == last && value >= min)
                        || (mid > 0
                            && value <= max
                            && self.range_in_partition(mid - 1).1 <= value)));
            if accepts {
                return Some(mid);
            }
            if max < value {
                left = mid + 1;
            } else if mid == 0 {
                break;
            } else {
                right = mid - 1;
            }
        }
        None
    }

    fn locate(&self, value: &T) -> Option<Location> {
        let partition = self.search_partition(value, false)?;
        let offset = self.partition(partition).iter().position(|v| v == value)?;
        Some(Location {
            index: partition_start(partition) + offset,
            partition,
            offset,
        })
    }

    /// Removes the element at `loc`, pulling a replacement back from the final
    /// partition through every partition in between.
    fn remove_location(&mut self, loc: Location) -> Result<T, HeapArrayError> {
        let last = final_partition(self.len);
        let removed = if loc.partition == last {
            self.segment(last).remove_at(loc.offset)?
        } else {
            let mut carry = self.segment(last).remove_min()?;
            for p in (loc.partition + 1..last).rev() {
                carry = self.segment(p).replace_at(0, carry)?;
            }
            self.segment(loc.partition).replace_at(loc.offset, carry)?
        };
        self.len -= 1;
        Ok(removed)
    }

    /// Doubles the capacity (at least [`MIN_ALLOCATION`]), rounded up to a square.
    fn grow(&mut self) {
        let next = match self.capacity() {
            0 => MIN_ALLOCATION,
            n => n * 2,
        };
        self.reallocate(next, true);
    }

    fn reallocate(&mut self, new_size: usize, round_up: bool) {
        if new_size == 0 {
            self.buf = Vec::new();
            self.len = 0;
            return;
        }
        let new_size = if round_up {
            round_up_to_square(new_size)
        } else {
            new_size
        };
        let keep = self.len.min(new_size);
        let mut buf = Vec::with_capacity(new_size);
        buf.extend(self.buf.drain(..keep));
        buf.resize_with(new_size, T::default);
        self.buf = buf;
        self.len = keep;
    }
}

// --- Trait Implementations ---

impl<T: Ord + Default> Default for HeapArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Default> Index<usize> for HeapArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Ord + Default + Debug> Debug for HeapArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.partitions()).finish()
    }
}

impl<T: Ord + Default> DoubleEndedHeap<T> for HeapArray<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn peek_min(&self) -> Option<&T> {
        self.min()
    }
    fn peek_max(&self) -> Option<&T> {
        self.max()
    }
    fn pop_min(&mut self) -> Option<T> {
        self.pop_min()
    }
    fn pop_max(&mut self) -> Option<T> {
        self.pop_max()
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T: Ord + Default> Extend<T> for HeapArray<T> {
    /// # Panics
    /// Panics if the container is fixed-size and runs out of slots.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if !self.fixed && self.len + lower > self.capacity() {
            self.reallocate(self.len + lower, true);
        }
        for item in iter {
            if let Err(err) = self.insert(item) {
                panic!("{}", err);
            }
        }
    }
}

impl<T: Ord + Default> FromIterator<T> for HeapArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), true)
    }
}

impl<T: Ord + Default> From<Vec<T>> for HeapArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values, true)
    }
}

impl<'a, T: Ord + Default> IntoIterator for &'a HeapArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heaps::minmax::is_min_max_heap;
    use crate::partition::isqrt;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    /// Checks every structural invariant and the O(1) extremes against a scan.
    fn check_invariants<T: Ord + Default + Debug>(array: &HeapArray<T>) {
        assert!(array.len() <= array.capacity());
        if !array.is_fixed() {
            let root = isqrt(array.capacity());
            assert_eq!(root * root, array.capacity(), "capacity not a square");
        }

        let parts: Vec<&[T]> = array.partitions().collect();
        let count = parts.len();
        for (p, part) in parts.iter().enumerate() {
            assert!(is_min_max_heap(part), "partition {} not a heap: {:?}", p, part);
            if p + 1 < count {
                assert_eq!(part.len(), partition_size(p), "partition {} not full", p);
            }
        }
        for pair in parts.windows(2) {
            let max = pair[0].iter().max().unwrap();
            let min = pair[1].iter().min().unwrap();
            assert!(max <= min, "block order broken: {:?}", array);
        }

        assert_eq!(array.min(), array.iter().min());
        assert_eq!(array.max(), array.iter().max());
    }

    #[test]
    fn test_heap_array_insert_scenario() {
        let mut array = HeapArray::new();
        for v in [5, 3, 8, 1, 9, 2] {
            array.insert(v).unwrap();
            check_invariants(&array);
        }
        assert_eq!(array.len(), 6);
        assert_eq!(array.min(), Some(&1));
        assert_eq!(array.max(), Some(&9));
        assert!(array.contains(&8));
    }

    #[test]
    fn test_heap_array_remove_scenario() {
        let mut array: HeapArray<i32> = HeapArray::new();
        for v in [5, 3, 8, 1, 9, 2] {
            array.insert(v).unwrap();
        }
        assert!(array.remove(&3));
        assert_eq!(array.len(), 5);
        assert!(!array.contains(&3));
        check_invariants(&array);

        assert!(!array.remove(&3));
        assert_eq!(array.len(), 5);
    }

    #[test]
    fn test_heap_array_fixed_from_vec_scenario() {
        let mut array = HeapArray::from_vec(vec![4, 4, 2, 7], false);
        assert!(array.is_fixed());
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.min(), Some(&2));
        assert_eq!(array.max(), Some(&7));
        assert!(array.contains(&4));
        check_invariants(&array);

        assert_eq!(
            array.insert(5),
            Err(HeapArrayError::CapacityExceeded { capacity: 4 })
        );
        assert_eq!(array.len(), 4);
        check_invariants(&array);
    }

    #[test]
    fn test_heap_array_random_insert_remove_all() {
        let mut rng = StdRng::seed_from_u64(8283);
        let values: Vec<i32> = (0..100).map(|_| rng.gen_range(0..100)).collect();

        let mut array = HeapArray::new();
        for &v in &values {
            array.insert(v).unwrap();
        }
        check_invariants(&array);
        for &v in &values {
            assert!(array.contains(&v), "missing {}", v);
        }

        let mut order = values.clone();
        order.shuffle(&mut rng);
        for v in &order {
            assert!(array.remove(v), "failed to remove {}", v);
            check_invariants(&array);
        }
        assert_eq!(array.len(), 0);
        for v in &values {
            assert!(!array.contains(v));
        }
    }

    #[test]
    fn test_heap_array_ascending_inserts_keep_max() {
        // Each insert lands past the max of a full final partition.
        let mut array = HeapArray::new();
        for v in 1..=30 {
            array.insert(v).unwrap();
            assert_eq!(array.max(), Some(&v));
            check_invariants(&array);
        }
    }

    #[test]
    fn test_heap_array_descending_inserts() {
        let mut array = HeapArray::new();
        for v in (1..=30).rev() {
            array.insert(v).unwrap();
            assert_eq!(array.min(), Some(&v));
            assert_eq!(array.max(), Some(&30));
            check_invariants(&array);
        }
    }

    #[test]
    fn test_heap_array_growth_squares() {
        let mut array = HeapArray::new();
        assert_eq!(array.capacity(), 0);
        let mut seen = vec![];
        for v in 0..30 {
            array.insert(v).unwrap();
            if seen.last() != Some(&array.capacity()) {
                seen.push(array.capacity());
            }
        }
        // 0 -> 4 -> 8 (9) -> 18 (25) -> 50 (64)
        assert_eq!(seen, vec![4, 9, 25, 64]);
    }

    #[test]
    fn test_heap_array_with_capacity_rounds_up() {
        let array: HeapArray<i32> = HeapArray::with_capacity(10);
        assert_eq!(array.capacity(), 16);
        assert!(array.is_empty());
        assert!(!array.is_fixed());
    }

    #[test]
    fn test_heap_array_fixed_odd_capacity() {
        let mut array = HeapArray::fixed(6);
        for v in [10, 4, 7, 1, 8, 3] {
            array.insert(v).unwrap();
            check_invariants(&array);
        }
        assert_eq!(array.capacity(), 6);
        assert_eq!(
            array.insert(0),
            Err(HeapArrayError::CapacityExceeded { capacity: 6 })
        );
        assert!(array.remove(&7));
        array.insert(0).unwrap();
        assert_eq!(array.min(), Some(&0));
        check_invariants(&array);
    }

    #[test]
    fn test_heap_array_fixed_zero_capacity() {
        let mut array: HeapArray<i32> = HeapArray::fixed(0);
        assert_eq!(
            array.insert(1),
            Err(HeapArrayError::CapacityExceeded { capacity: 0 })
        );
        assert_eq!(array.resize(4), Err(HeapArrayError::ResizeDisabled));
    }

    #[test]
    fn test_heap_array_empty_queries() {
        let mut array: HeapArray<i32> = HeapArray::new();
        assert_eq!(array.min(), None);
        assert_eq!(array.max(), None);
        assert_eq!(array.find(&1), None);
        assert!(!array.contains(&1));
        assert!(!array.remove(&1));
        assert_eq!(array.pop_min(), None);
        assert_eq!(array.pop_max(), None);
        assert_eq!(
            array.get(0),
            Err(HeapArrayError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_heap_array_find_returns_index() {
        let array = HeapArray::from_vec((0..20).collect(), true);
        for v in 0..20 {
            let index = array.find(&v).unwrap();
            assert_eq!(array[index], v);
            assert_eq!(array.get(index), Ok(&v));
        }
        assert_eq!(array.find(&20), None);
        assert_eq!(array.find(&-1), None);
    }

    #[test]
    fn test_heap_array_absent_value_inside_range() {
        let mut array = HeapArray::from_vec(vec![0, 10, 20, 30, 40, 50], true);
        // 25 sits inside partition 1's range but was never inserted.
        assert!(!array.contains(&25));
        assert!(!array.remove(&25));
        assert_eq!(array.len(), 6);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_heap_array_index_panics_past_len() {
        let array = HeapArray::from_vec(vec![1, 2, 3], true);
        let _ = array[3];
    }

    #[test]
    fn test_heap_array_get_past_len() {
        let array = HeapArray::from_vec(vec![1, 2, 3], true);
        assert_eq!(array.capacity(), 4);
        assert_eq!(
            array.get(3),
            Err(HeapArrayError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_heap_array_duplicates() {
        let mut array = HeapArray::new();
        for _ in 0..12 {
            array.insert(3).unwrap();
        }
        for v in [3, 1, 3, 5, 3] {
            array.insert(v).unwrap();
            check_invariants(&array);
        }
        assert_eq!(array.len(), 17);
        let mut threes = array.iter().filter(|&&v| v == 3).count();
        assert_eq!(threes, 15);
        while array.remove(&3) {
            threes -= 1;
            check_invariants(&array);
        }
        assert_eq!(threes, 0);
        assert_eq!(array.into_sorted_vec(), vec![1, 5]);
    }

    #[test]
    fn test_heap_array_pop_both_ends() {
        let mut array: HeapArray<i32> = (0..25).rev().collect();
        assert_eq!(array.pop_min(), Some(0));
        check_invariants(&array);
        assert_eq!(array.pop_max(), Some(24));
        check_invariants(&array);

        let mut lows = vec![];
        while let Some(v) = array.pop_min() {
            lows.push(v);
            check_invariants(&array);
        }
        assert_eq!(lows, (1..24).collect::<Vec<_>>());
    }

    #[test]
    fn test_heap_array_into_sorted_vec() {
        let values = vec![9, -2, 7, 7, 0, 13, 5, 1, 1, 8, 4];
        let array = HeapArray::from(values.clone());
        let mut expected = values;
        expected.sort();
        assert_eq!(array.into_sorted_vec(), expected);
    }

    #[test]
    fn test_heap_array_from_vec_with_capacity() {
        let array = HeapArray::from_vec_with_capacity(vec![3, 1, 2], 10, true);
        assert_eq!(array.capacity(), 16);
        assert_eq!(array.len(), 3);

        let fixed = HeapArray::from_vec_with_capacity(vec![3, 1, 2], 10, false);
        assert_eq!(fixed.capacity(), 10);
        assert!(fixed.is_fixed());
        check_invariants(&fixed);
    }

    #[test]
    fn test_heap_array_from_empty_vec() {
        let mut array: HeapArray<i32> = HeapArray::from_vec(vec![], true);
        assert_eq!(array.capacity(), 0);
        array.insert(1).unwrap();
        assert_eq!(array.capacity(), MIN_ALLOCATION);
    }

    #[test]
    fn test_heap_array_resize() {
        let mut array: HeapArray<i32> = (0..10).collect();
        array.resize(30).unwrap();
        assert_eq!(array.capacity(), 36);
        assert_eq!(array.len(), 10);
        check_invariants(&array);

        // Shrinking keeps a valid prefix.
        array.resize(5).unwrap();
        assert_eq!(array.capacity(), 9);
        assert_eq!(array.len(), 9);
        check_invariants(&array);

        array.resize(0).unwrap();
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
        array.insert(7).unwrap();
        assert_eq!(array.max(), Some(&7));
    }

    #[test]
    fn test_heap_array_resize_disabled_when_fixed() {
        let mut array = HeapArray::from_vec(vec![1, 2], false);
        assert_eq!(array.resize(10), Err(HeapArrayError::ResizeDisabled));
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    fn test_heap_array_clone_is_independent() {
        let mut original: HeapArray<i32> = (0..10).collect();
        let copy = original.clone();
        original.insert(100).unwrap();
        assert!(original.remove(&3));

        assert_eq!(copy.len(), 10);
        assert!(copy.contains(&3));
        assert!(!copy.contains(&100));
        assert_eq!(copy.capacity(), 16);
    }

    #[test]
    fn test_heap_array_take_resets_source() {
        let mut source = HeapArray::from_vec(vec![5, 1, 4], false);
        let moved = source.take();

        assert_eq!(moved.len(), 3);
        assert!(moved.is_fixed());
        assert_eq!(moved.min(), Some(&1));

        assert!(source.is_empty());
        assert_eq!(source.capacity(), 0);
        assert!(!source.is_fixed());
        source.insert(2).unwrap();
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_heap_array_clear() {
        let mut array: HeapArray<String> =
            ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        let capacity = array.capacity();
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), capacity);
        array.insert("z".to_string()).unwrap();
        assert_eq!(array.min().map(String::as_str), Some("z"));
    }

    #[test]
    fn test_heap_array_strings() {
        let words = ["kiwi", "apple", "fig", "banana", "cherry", "date", "elder", "grape"];
        let mut array = HeapArray::new();
        for w in words {
            array.insert(w.to_string()).unwrap();
            check_invariants(&array);
        }
        assert_eq!(array.min().map(String::as_str), Some("apple"));
        assert_eq!(array.max().map(String::as_str), Some("kiwi"));
        assert!(array.remove(&"cherry".to_string()));
        assert!(!array.contains(&"cherry".to_string()));
        check_invariants(&array);
    }

    #[test]
    fn test_heap_array_debug_shows_partitions() {
        let array = HeapArray::from_vec(vec![1, 2, 3, 4], true);
        assert_eq!(format!("{:?}", array), "[[1], [2, 3, 4]]");
    }

    #[test]
    fn test_heap_array_extend_and_iter() {
        let mut array = HeapArray::new();
        array.extend(vec![4, 8, 15, 16, 23, 42]);
        check_invariants(&array);
        assert_eq!(array.iter().count(), 6);
        assert_eq!((&array).into_iter().sum::<i32>(), 108);
    }

    #[test]
    #[should_panic(expected = "exceeded")]
    fn test_heap_array_extend_fixed_overflow_panics() {
        let mut array = HeapArray::fixed(2);
        array.extend([1, 2, 3]);
    }

    #[test]
    fn test_heap_array_double_ended_trait() {
        fn extremes<H: DoubleEndedHeap<i32>>(heap: &H) -> Option<(i32, i32)> {
            Some((*heap.peek_min()?, *heap.peek_max()?))
        }
        let mut array: HeapArray<i32> = vec![6, 2, 9, 4].into();
        assert_eq!(extremes(&array), Some((2, 9)));
        assert_eq!(DoubleEndedHeap::pop_max(&mut array), Some(9));
        DoubleEndedHeap::clear(&mut array);
        assert!(DoubleEndedHeap::is_empty(&array));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i16),
        Remove(i16),
        PopMin,
        PopMax,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (-40i16..40).prop_map(Op::Insert),
            2 => (-40i16..40).prop_map(Op::Remove),
            1 => Just(Op::PopMin),
            1 => Just(Op::PopMax),
        ]
    }

    proptest! {
        #[test]
        fn prop_heap_array_matches_sorted_model(ops in prop::collection::vec(op_strategy(), 0..250)) {
            let mut array = HeapArray::new();
            let mut model: Vec<i16> = Vec::new();
            for op in ops {
                match op {
                    Op::Insert(v) => {
                        array.insert(v).unwrap();
                        let at = model.partition_point(|&x| x < v);
                        model.insert(at, v);
                        prop_assert!(array.contains(&v));
                    }
                    Op::Remove(v) => {
                        let expected = match model.iter().position(|&x| x == v) {
                            Some(at) => {
                                model.remove(at);
                                true
                            }
                            None => false,
                        };
                        prop_assert_eq!(array.remove(&v), expected);
                        prop_assert_eq!(array.contains(&v), model.contains(&v));
                    }
                    Op::PopMin => {
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(array.pop_min(), expected);
                    }
                    Op::PopMax => prop_assert_eq!(array.pop_max(), model.pop()),
                }
                check_invariants(&array);
                prop_assert_eq!(array.len(), model.len());
                prop_assert_eq!(array.min(), model.first());
                prop_assert_eq!(array.max(), model.last());
            }
            prop_assert_eq!(array.into_sorted_vec(), model);
        }

        #[test]
        fn prop_heap_array_bulk_load(values in prop::collection::vec(any::<i32>(), 0..300), fixed in any::<bool>()) {
            let array = HeapArray::from_vec(values.clone(), !fixed);
            check_invariants(&array);
            prop_assert_eq!(array.len(), values.len());
            for v in &values {
                prop_assert!(array.contains(v));
            }
        }

        #[test]
        fn prop_heap_array_insert_remove_round_trip(
            values in prop::collection::vec(-20i32..20, 1..120),
            extra in -30i32..30,
        ) {
            let mut array = HeapArray::from_vec(values.clone(), true);
            let before = array.clone().into_sorted_vec();
            array.insert(extra).unwrap();
            prop_assert!(array.contains(&extra));
            prop_assert!(array.remove(&extra));
            check_invariants(&array);
            prop_assert_eq!(array.into_sorted_vec(), before);
        }
    }
}
