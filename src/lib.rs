//! # Heap Array
//!
//! An ordered container that keeps min and max in O(1) and searches, inserts and removes
//! in O(√N)-ish time, all inside one contiguous array with no node pointers.
//!
//! The array is sliced into partitions of 1, 3, 5, 7, … slots. Every partition is its
//! own min-max heap, and the partitions are block-sorted so that partition `p` never
//! holds a value larger than anything in partition `p + 1`.
//!
//! ## Key Features
//!
//! * **O(1) extremes:** `min()` is slot 0 and `max()` is read from the root children of
//!   the final partition.
//! * **Sub-linear search:** binary search over partition ranges, then a scan of a single
//!   partition of at most `2√N` slots.
//! * **One allocation:** growth doubles the buffer and rounds it up to a perfect square.
//! * **Fixed mode:** `HeapArray::fixed(n)` never reallocates and reports
//!   [`HeapArrayError::CapacityExceeded`] when full.
//!
//! ## Feature flags
//!
//! * `mmheap` (default): the standalone [`MinMaxHeap`].
//!
//! ## Examples
//!
//! ### HeapArray
//!
//! ```rust
//! use heap_array::HeapArray;
//!
//! let mut array = HeapArray::new();
//! for v in [5, 3, 8, 1, 9, 2] {
//!     array.insert(v).unwrap();
//! }
//!
//! assert_eq!(array.len(), 6);
//! assert_eq!(array.min(), Some(&1));
//! assert_eq!(array.max(), Some(&9));
//!
//! assert!(array.remove(&3));
//! assert!(!array.contains(&3));
//! ```
//!
//! ### Fixed-size
//!
//! ```rust
//! use heap_array::{HeapArray, HeapArrayError};
//!
//! let mut array = HeapArray::from_vec(vec![4, 4, 2, 7], false);
//! assert_eq!(array.max(), Some(&7));
//! assert_eq!(
//!     array.insert(1),
//!     Err(HeapArrayError::CapacityExceeded { capacity: 4 })
//! );
//! ```
//!
//! ### MinMaxHeap
//!
//! ```rust
//! use heap_array::MinMaxHeap;
//!
//! let mut heap: MinMaxHeap<i32> = vec![3, 9, 1, 4].into();
//! assert_eq!(heap.pop_max(), Some(9));
//! assert_eq!(heap.pop_min(), Some(1));
//! ```

// --- Module Declarations ---

pub mod error;
pub mod heap_array;
pub mod heaps;
pub mod partition;

// --- Re-exports ---

pub use error::HeapArrayError;
pub use heap_array::{HeapArray, MIN_ALLOCATION};
pub use heaps::minmax::{HeapSegment, Ripple};
#[cfg(feature = "mmheap")]
pub use heaps::mmheap::MinMaxHeap;
pub use heaps::DoubleEndedHeap;
