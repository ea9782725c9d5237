//! Min-max heap building blocks.

pub mod minmax;
#[cfg(feature = "mmheap")]
pub mod mmheap;

/// A trait for abstraction over double-ended priority queues (standalone heap or
/// partitioned array).
pub trait DoubleEndedHeap<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn peek_min(&self) -> Option<&T>;
    fn peek_max(&self) -> Option<&T>;
    fn pop_min(&mut self) -> Option<T>;
    fn pop_max(&mut self) -> Option<T>;
    fn clear(&mut self);
}
