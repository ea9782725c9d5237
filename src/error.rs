//! Error type shared by the heap primitives and [`HeapArray`](crate::HeapArray).
//!
//! Every variant is a contract violation reported before any state changes, so a
//! caller that receives one can keep using the container as it was.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Errors returned by heap segments and the partitioned container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapArrayError {
    /// Min, max or removal was requested from a heap with no elements.
    EmptyContainer,

    /// An index was at or beyond the logical length.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Logical length at the time of the request.
        len: usize,
    },

    /// Insert into a fixed-size container that is already full.
    CapacityExceeded {
        /// The fixed physical capacity.
        capacity: usize,
    },

    /// Explicit resize of a fixed-size container.
    ResizeDisabled,

    /// Plain `add` into a heap segment with no free slot.
    HeapFull {
        /// Slot count of the segment.
        capacity: usize,
    },
}

impl Display for HeapArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyContainer => write!(f, "operation requires a non-empty container"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            Self::CapacityExceeded { capacity } => write!(
                f,
                "maximum size {} exceeded for fixed-size container",
                capacity
            ),
            Self::ResizeDisabled => write!(f, "resize disabled for fixed-size container"),
            Self::HeapFull { capacity } => {
                write!(f, "cannot add to heap: all {} slots are in use", capacity)
            }
        }
    }
}

impl Error for HeapArrayError {}
