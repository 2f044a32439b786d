#![no_std]

//! `Sequence`: a growable contiguous sequence of `f64` values.
//!
//! The sequence owns a single heap buffer and tracks its length separately
//! from its capacity. When an insertion needs more room, the capacity is
//! multiplied by a configurable growth factor until it fits, so appending is
//! amortized constant time.
//!
//! ```
//! # use dynseq::Sequence;
//! let mut sequence = Sequence::new(Some(&[1.0, 2.0, 3.0]), 2.0);
//!
//! sequence.push_back(4.0).unwrap();
//! sequence.insert(9.0, 1).unwrap();
//! assert_eq!(sequence.as_slice(), &[1.0, 9.0, 2.0, 3.0, 4.0]);
//!
//! sequence.erase(1, 1).unwrap();
//! sequence.pop_front().unwrap();
//! assert_eq!(sequence.as_slice(), &[2.0, 3.0, 4.0]);
//! ```
//!
//! # Growth
//!
//! A sequence without a buffer starts at `floor(factor)` slots. After that,
//! each growth step multiplies the capacity by the factor and truncates. If
//! a step does not enlarge the capacity, it adds one slot instead. Factors
//! `<= 1` are therefore accepted and mean linear growth.
//!
//! ```
//! # use dynseq::Sequence;
//! let mut sequence = Sequence::with_growth_factor(1.5);
//!
//! sequence.push_back(1.0).unwrap();
//! assert_eq!(sequence.capacity(), 1);
//!
//! sequence.push_back(2.0).unwrap();
//! assert_eq!(sequence.capacity(), 2);
//! ```
//!
//! `reserve()` and `shrink_to_fit()` set the capacity directly, bypassing the factor.
//! Erasing never shrinks the buffer.
//!
//! # Wrap-around access
//!
//! Indexing never fails on a non-empty sequence: the index is taken modulo
//! the length. Only an empty sequence rejects access.
//!
//! ```
//! # use dynseq::{Sequence, SequenceError};
//! let sequence = Sequence::new(Some(&[2.0, 3.0, 4.0]), 2.0);
//! assert_eq!(*sequence.get(5).unwrap(), 4.0);
//! assert_eq!(sequence[7], 3.0);
//!
//! let empty = Sequence::default();
//! assert!(matches!(empty.get(0), Err(SequenceError::EmptySequence { .. })));
//! ```
//!
//! # Cursors and iteration
//!
//! `begin()` and `end()` return cursors that can be stepped and compared by
//! address. They borrow the sequence, so it cannot reallocate under them.
//! `iter()` walks the same begin/end pair as a standard iterator.
//!
//! ```
//! # use dynseq::Sequence;
//! let sequence = Sequence::new(Some(&[1.0, 2.0]), 2.0);
//!
//! let mut cursor = sequence.begin();
//! let mut total = 0.0;
//! while cursor != sequence.end() {
//!     total += cursor.post_increment().get().unwrap();
//! }
//! assert_eq!(total, 3.0);
//!
//! let doubled: Vec<f64> = sequence.iter().map(|v| v * 2.0).collect();
//! assert_eq!(doubled, vec![2.0, 4.0]);
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`SequenceError`]. All variants except
//! `CapacityOverflow` and `AllocationFailed` are of kind
//! [`ErrorKind::InvalidArgument`]: they report a caller mistake such as an
//! out-of-range position. Buffers are allocated fallibly, so a growth the
//! allocator cannot satisfy returns `AllocationFailed` instead of aborting.
//! `find()` reports a missing value as `-1`, not as an error.
//!
//! # Logging
//!
//! Reallocations are logged at `trace` level and linear growth fallbacks at
//! `debug` level through the `log` facade.
//!
//! ## `no_std` Compatibility
//!
//! The crate needs only `core` and `alloc`. Enable the `std` feature to get
//! `std::error::Error` through `thiserror/std`, and the `serde` feature to
//! serialize a sequence as a list of numbers.

extern crate alloc;

mod core;
mod error;
mod growth;
mod iter;

/// Element type stored in a [`Sequence`].
pub type Value = f64;

// Re-export public types
pub use crate::core::Sequence;
pub use error::{ErrorKind, SequenceError};
pub use growth::{GrowthPolicy, DEFAULT_GROWTH_FACTOR, MAX_CAPACITY};
pub use iter::{Cursor, CursorMut, SequenceIter};
