//! Contains the [`Error`] type returned by fallible [`DynamicArray`](crate::collection::DynamicArray) operations.

use core::fmt;

/// The broad category of an [`Error`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ErrorKind {
	/// A mutation or constructor was given an argument outside of its valid range.
	InvalidArgument,
	/// A read was given an index that does not refer to a present element.
	IndexOutOfBounds,
}

/// Errors that can occur while operating on an array. The array is
/// always left untouched when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
	/// An `insert`, `set` or `remove` index fell outside of its valid range.
	InvalidArgument {
		/// The rejected index.
		index: usize,
		/// The length of the array at the time of the call.
		len: usize,
	},
	/// An array was requested with no capacity at all.
	ZeroCapacity,
	/// A read or `swap` index did not refer to a present element.
	IndexOutOfBounds {
		/// The rejected index.
		index: usize,
		/// The length of the array at the time of the call.
		len: usize,
	},
}

impl Error {
	/// Returns the category this error belongs to.
	#[inline]
	#[must_use]
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidArgument { .. } | Self::ZeroCapacity => ErrorKind::InvalidArgument,
			Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidArgument { index, len } => {
				write!(f, "invalid index: {index} is out of range for length {len}")
			}
			Self::ZeroCapacity => f.write_str("invalid capacity: must be at least 1"),
			Self::IndexOutOfBounds { index, len } => {
				write!(f, "index out of bounds: the len is {len} but the index is {index}")
			}
		}
	}
}

impl core::error::Error for Error {}

/// A [`Result`](core::result::Result) defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod test {
	use alloc::string::ToString;

	use super::{Error, ErrorKind};

	#[test]
	fn kinds() {
		let invalid = Error::InvalidArgument { index: 3, len: 2 };
		let bounds = Error::IndexOutOfBounds { index: 3, len: 2 };

		assert_eq!(invalid.kind(), ErrorKind::InvalidArgument);
		assert_eq!(Error::ZeroCapacity.kind(), ErrorKind::InvalidArgument);
		assert_eq!(bounds.kind(), ErrorKind::IndexOutOfBounds);
	}

	#[test]
	fn messages() {
		let bounds = Error::IndexOutOfBounds { index: 4, len: 1 };

		assert_eq!(
			bounds.to_string(),
			"index out of bounds: the len is 1 but the index is 4"
		);
		assert_eq!(
			Error::ZeroCapacity.to_string(),
			"invalid capacity: must be at least 1"
		);
	}
}
