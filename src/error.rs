//! Error types for `ArrayList`.
//!
//! Every fallible operation validates its arguments before touching the list,
//! so receiving one of these errors means the list is exactly as it was.

use core::error::Error as CoreError;
use core::fmt;

/// Errors returned by operations on [`ArrayList`](crate::ArrayList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A negative initial capacity was requested.
    InvalidCapacity {
        /// The rejected capacity.
        requested: isize,
    },
    /// An index passed to `insert`, `get`, `get_mut` or `set` was outside
    /// the range accepted by that operation.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// `remove` was asked for an index that holds no element.
    IndexNotFound {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// `pop_front` or `pop_back` was called on an empty list.
    EmptyContainer,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(f, "illegal capacity: {requested}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for list of length {len}")
            }
            Self::IndexNotFound { index, len } => {
                write!(f, "there is no element at index {index} (length {len})")
            }
            Self::EmptyContainer => f.write_str("there are no elements to remove"),
        }
    }
}

impl CoreError for Error {}
