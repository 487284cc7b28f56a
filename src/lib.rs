#![no_std]
#![forbid(unsafe_code)]

//! A `DynamicArray` is a contiguous, resizable sequence with indexed insertion, removal and
//! lookup. It appends in amortized `O(1)` time, and its resize policy is explicit: a full array
//! doubles, and an array whose length falls to exactly a quarter of its capacity halves.
//!
//! ## Example
//!
//! ```rust
//! # use dynarray::DynamicArray;
//! let mut array = DynamicArray::new_default();
//!
//! for i in 0..10 {
//!     array.insert(0, i)?;
//! }
//!
//! assert_eq!(
//!     array.to_string(),
//!     "the size is: 10, the capacity is: 10\n[9 8 7 6 5 4 3 2 1 0 ]"
//! );
//!
//! array.insert(0, 20)?;
//!
//! assert_eq!(array.capacity(), 20);
//! assert_eq!(array[0], 20);
//!
//! assert_eq!(array.remove(0)?, 20);
//! assert_eq!(array.len(), 10);
//! # Ok::<(), dynarray::Error>(())
//! ```
//!
//! ## Features
//!
//! - Amortized `O(1)` append, `O(n)` insertion and removal elsewhere
//! - Out of range indices are reported as errors and never modify the array
//! - Removed values are released immediately
//! - No `unsafe` code

extern crate alloc;

pub mod collection;
pub mod error;
pub mod iter;
mod slot;

pub use collection::DynamicArray;
pub use error::{Error, ErrorKind, Result};
