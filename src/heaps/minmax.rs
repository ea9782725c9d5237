//! Min-max heap primitives.
//!
//! A min-max heap is an implicit binary tree whose levels alternate between a
//! min-property (even depth, root included) and a max-property (odd depth). The root is
//! the minimum and the larger of the root's children is the maximum, so both extremes
//! are O(1). Algorithms follow Atkinson, Sack, Santoro and Strothotte, *Min-max heaps and
//! generalized priority queues* (CACM 29(10), 1986).
//!
//! The free functions work on a slice that is exactly the live heap. [`HeapSegment`]
//! adds a logical length on top of a fixed run of slots, which is how
//! [`HeapArray`](crate::HeapArray) drives each of its partitions.

use core::mem;

use crate::error::HeapArrayError;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn grandparent(i: usize) -> usize {
    parent(parent(i))
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// `true` when `a` should sit above `b` on a level of the given kind.
#[inline]
fn beats<T: Ord>(a: &T, b: &T, min_level: bool) -> bool {
    if min_level { a < b } else { a > b }
}

/// Returns `true` if index `i` is on a min level (even depth).
#[inline]
pub fn is_min_level(i: usize) -> bool {
    (i + 1).ilog2() % 2 == 0
}

/// Index of the extreme value among the children and grandchildren of `i`, or `None`
/// when `i` is a leaf.
fn extreme_descendant<T: Ord>(heap: &[T], i: usize, min_level: bool) -> Option<usize> {
    let first = left(i);
    if first >= heap.len() {
        return None;
    }
    let mut best = first;
    // Children and grandchildren occupy increasing indices.
    for j in [first + 1, 4 * i + 3, 4 * i + 4, 4 * i + 5, 4 * i + 6] {
        if j >= heap.len() {
            break;
        }
        if beats(&heap[j], &heap[best], min_level) {
            best = j;
        }
    }
    Some(best)
}

/// Moves the value at `i` down until heap order holds below it.
pub fn sift_down<T: Ord>(heap: &mut [T], i: usize) {
    sift_down_on(heap, i, is_min_level(i));
}

fn sift_down_on<T: Ord>(heap: &mut [T], mut i: usize, min_level: bool) {
    while let Some(m) = extreme_descendant(heap, i, min_level) {
        if !beats(&heap[m], &heap[i], min_level) {
            break;
        }
        heap.swap(m, i);
        if m <= right(i) {
            // A child has no same-level descendants to compete with.
            break;
        }
        let p = parent(m);
        if beats(&heap[p], &heap[m], min_level) {
            heap.swap(m, p);
        }
        i = m;
    }
}

/// Moves the value at `i` up until heap order holds above it.
pub fn bubble_up<T: Ord>(heap: &mut [T], i: usize) {
    let min_level = is_min_level(i);
    if i > 0 {
        let p = parent(i);
        if beats(&heap[i], &heap[p], !min_level) {
            heap.swap(i, p);
            bubble_up_on(heap, p, !min_level);
            return;
        }
    }
    bubble_up_on(heap, i, min_level);
}

fn bubble_up_on<T: Ord>(heap: &mut [T], mut i: usize, min_level: bool) {
    while i > 2 {
        let g = grandparent(i);
        if !beats(&heap[i], &heap[g], min_level) {
            break;
        }
        heap.swap(i, g);
        i = g;
    }
}

/// Turns an arbitrary slice into a min-max heap in linear time (Floyd's method).
pub fn build_heap<T: Ord>(heap: &mut [T]) {
    if heap.len() < 2 {
        return;
    }
    for i in (0..=parent(heap.len() - 1)).rev() {
        sift_down(heap, i);
    }
}

/// Index of the maximum: the larger child of the root, or the root itself when it
/// has no children.
pub fn max_index<T: Ord>(heap: &[T]) -> Option<usize> {
    match heap.len() {
        0 => None,
        1 => Some(0),
        2 => Some(1),
        _ => Some(if heap[2] > heap[1] { 2 } else { 1 }),
    }
}

/// Restores heap order after the value at `index` was overwritten; `old` is the value
/// that used to be there.
///
/// A value that moved towards its level's extreme can only travel up. Otherwise it may
/// break order against its parent once (the parent sits on the opposite level), after
/// which the slot is sifted down.
pub fn repair<T: Ord>(heap: &mut [T], index: usize, old: &T) {
    let min_level = is_min_level(index);
    if beats(&heap[index], old, min_level) {
        bubble_up_on(heap, index, min_level);
        return;
    }
    if index > 0 {
        let p = parent(index);
        if beats(&heap[index], &heap[p], !min_level) {
            heap.swap(index, p);
            bubble_up_on(heap, p, !min_level);
        }
    }
    sift_down_on(heap, index, min_level);
}

/// Outcome of [`HeapSegment::ripple_add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ripple<T> {
    /// The value took a free slot; nothing left the segment.
    Absorbed,
    /// The segment was full and this value, the largest of the old contents plus the
    /// new value, was pushed out.
    Displaced(T),
}

/// A min-max heap over a fixed run of slots with a separate logical length.
///
/// Slots `[0, len)` hold the heap; slots `[len, capacity)` are spare and their contents
/// are ignored.
pub struct HeapSegment<'a, T> {
    slots: &'a mut [T],
    len: usize,
}

impl<'a, T: Ord> HeapSegment<'a, T> {
    /// Wraps `slots`, treating the first `len` of them as a valid heap.
    ///
    /// # Panics
    /// Panics if `len` exceeds `slots.len()`.
    pub fn new(slots: &'a mut [T], len: usize) -> Self {
        assert!(
            len <= slots.len(),
            "segment length {} exceeds {} slots",
            len,
            slots.len()
        );
        Self { slots, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The live heap in array order.
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    #[inline]
    fn live(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Heapifies the live slots in place.
    pub fn build(&mut self) {
        build_heap(self.live());
    }

    /// The smallest value (the root).
    pub fn min(&self) -> Result<&T, HeapArrayError> {
        self.as_slice().first().ok_or(HeapArrayError::EmptyContainer)
    }

    /// The largest value.
    pub fn max(&self) -> Result<&T, HeapArrayError> {
        let heap = self.as_slice();
        max_index(heap)
            .map(|m| &heap[m])
            .ok_or(HeapArrayError::EmptyContainer)
    }

    /// Appends `value` and bubbles it into place.
    pub fn add(&mut self, value: T) -> Result<(), HeapArrayError> {
        if self.is_full() {
            return Err(HeapArrayError::HeapFull {
                capacity: self.capacity(),
            });
        }
        let at = self.len;
        self.slots[at] = value;
        self.len += 1;
        bubble_up(self.live(), at);
        Ok(())
    }

    /// Adds `value`, pushing the maximum out instead of failing when full.
    ///
    /// If the new value is itself at least as large as the current maximum it is the
    /// one displaced and the segment is left untouched.
    pub fn ripple_add(&mut self, value: T) -> Ripple<T> {
        if !self.is_full() {
            let at = self.len;
            self.slots[at] = value;
            self.len += 1;
            bubble_up(self.live(), at);
            return Ripple::Absorbed;
        }
        let m = match max_index(self.as_slice()) {
            Some(m) => m,
            None => return Ripple::Displaced(value),
        };
        if value >= self.slots[m] {
            return Ripple::Displaced(value);
        }
        let displaced = mem::replace(&mut self.slots[m], value);
        if m != 0 {
            if self.slots[m] < self.slots[0] {
                self.slots.swap(0, m);
            }
            sift_down(self.live(), m);
        }
        Ripple::Displaced(displaced)
    }

    /// Overwrites the value at `index` and restores heap order. Returns the old value.
    pub fn replace_at(&mut self, index: usize, value: T) -> Result<T, HeapArrayError> {
        self.check_index(index)?;
        let old = mem::replace(&mut self.slots[index], value);
        repair(self.live(), index, &old);
        Ok(old)
    }

    fn check_index(&self, index: usize) -> Result<(), HeapArrayError> {
        if self.len == 0 {
            return Err(HeapArrayError::EmptyContainer);
        }
        if index >= self.len {
            return Err(HeapArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<'a, T: Ord + Default> HeapSegment<'a, T> {
    /// Removes and returns the value at `index`; the last element fills the hole.
    pub fn remove_at(&mut self, index: usize) -> Result<T, HeapArrayError> {
        self.check_index(index)?;
        let last = self.len - 1;
        self.slots.swap(index, last);
        self.len = last;
        let removed = mem::take(&mut self.slots[last]);
        if index < last {
            repair(self.live(), index, &removed);
        }
        Ok(removed)
    }

    /// Removes and returns the smallest value.
    pub fn remove_min(&mut self) -> Result<T, HeapArrayError> {
        self.remove_at(0)
    }

    /// Removes and returns the largest value.
    pub fn remove_max(&mut self) -> Result<T, HeapArrayError> {
        let m = max_index(self.as_slice()).ok_or(HeapArrayError::EmptyContainer)?;
        self.remove_at(m)
    }
}

/// Checks the min-max property of every node against its children and grandchildren.
#[cfg(test)]
pub(crate) fn is_min_max_heap<T: Ord>(heap: &[T]) -> bool {
    (0..heap.len()).all(|i| {
        let min_level = is_min_level(i);
        [left(i), right(i), 4 * i + 3, 4 * i + 4, 4 * i + 5, 4 * i + 6]
            .into_iter()
            .filter(|&j| j < heap.len())
            .all(|j| !beats(&heap[j], &heap[i], min_level))
    })
}
