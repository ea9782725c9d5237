#![cfg(feature = "mmheap")]
//! A growable, standalone min-max heap.
//!
//! [`MinMaxHeap`] is the double-ended counterpart of `std::collections::BinaryHeap`:
//! both the smallest and the largest element can be peeked in O(1) and popped in
//! O(log n). It shares its algorithms with the partitions of
//! [`HeapArray`](crate::HeapArray) through [`minmax`](super::minmax).

use std::fmt::{Debug, Formatter, Result};

use super::minmax::{self, bubble_up, build_heap, max_index, sift_down};
use super::DoubleEndedHeap;

/// A double-ended priority queue stored as an implicit min-max heap in a `Vec`.
///
/// # Behavior
/// * **Peek:** `peek_min` and `peek_max` are O(1).
/// * **Push / Pop:** O(log n) for `push`, `pop_min` and `pop_max`.
/// * **Build:** `from_vec` heapifies in O(n).
#[derive(Clone)]
pub struct MinMaxHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates a new empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Heapifies `data` in place.
    pub fn from_vec(mut data: Vec<T>) -> Self {
        build_heap(&mut data);
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the smallest item.
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the greatest item.
    pub fn peek_max(&self) -> Option<&T> {
        max_index(&self.data).map(|m| &self.data[m])
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        bubble_up(&mut self.data, last);
    }

    /// Removes and returns the smallest item.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let item = self.data.swap_remove(0);
        if !self.data.is_empty() {
            sift_down(&mut self.data, 0);
        }
        Some(item)
    }

    /// Removes and returns the greatest item.
    pub fn pop_max(&mut self) -> Option<T> {
        let m = max_index(&self.data)?;
        let item = self.data.swap_remove(m);
        if m < self.data.len() {
            minmax::repair(&mut self.data, m, &item);
        }
        Some(item)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates in arbitrary (heap) order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns the underlying vector in arbitrary (heap) order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns a vector sorted from lowest to greatest.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(item) = self.pop_min() {
            vec.push(item);
        }
        vec
    }
}

impl<T: Ord> DoubleEndedHeap<T> for MinMaxHeap<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn peek_min(&self) -> Option<&T> {
        self.peek_min()
    }
    fn peek_max(&self) -> Option<&T> {
        self.peek_max()
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

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Debug> Debug for MinMaxHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.data.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
