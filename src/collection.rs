//! Contains the [`DynamicArray`] type, which is the main type of this crate.

use alloc::vec::Vec;
use core::{
	fmt::{self, Debug, Display, Formatter},
	mem,
	ops::{Index, IndexMut},
};

use log::debug;

use crate::{
	error::{Error, Result},
	slot::{vacant_list, List, Slot},
};

/// The capacity of an array made by [`DynamicArray::new_default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A full array multiplies its capacity by this much before inserting.
pub const GROWTH_FACTOR: usize = 2;

/// An array shrinks when its length becomes exactly `capacity / SHRINK_TRIGGER`.
pub const SHRINK_TRIGGER: usize = 4;

/// A shrinking array divides its capacity by this much.
pub const SHRINK_FACTOR: usize = 2;

/// A [`DynamicArray`] is a contiguous, growable sequence of values.
///
/// Unlike [`Vec`], its resize policy is fixed and observable: a full array
/// doubles before inserting, and an array whose length drops to exactly a
/// quarter of its capacity halves. The capacity never goes below 1.
pub struct DynamicArray<T> {
	pub(crate) buf: List<T>,
	pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
	/// Creates a new, empty [`DynamicArray`] with exactly `capacity` slots.
	///
	/// # Errors
	///
	/// Returns [`Error::ZeroCapacity`] if `capacity` is 0.
	#[inline]
	pub fn new(capacity: usize) -> Result<Self> {
		if capacity == 0 {
			return Err(Error::ZeroCapacity);
		}

		Ok(Self {
			buf: vacant_list(capacity),
			len: 0,
		})
	}

	/// Creates a new, empty [`DynamicArray`] with [`DEFAULT_CAPACITY`] slots.
	#[inline]
	#[must_use]
	pub fn new_default() -> Self {
		Self {
			buf: vacant_list(DEFAULT_CAPACITY),
			len: 0,
		}
	}

	/// Creates a [`DynamicArray`] holding a copy of `items`, with the
	/// capacity sized exactly to fit them.
	#[inline]
	#[must_use]
	pub fn from_slice(items: &[T]) -> Self
	where
		T: Clone,
	{
		Self::from(items.to_vec())
	}

	/// Returns the number of elements in the [`DynamicArray`].
	#[inline]
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the [`DynamicArray`] contains no elements.
	#[inline]
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of slots currently allocated.
	#[inline]
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	/// Returns a reference to the element at `index`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfBounds`] unless `index < len`.
	#[inline]
	pub fn get(&self, index: usize) -> Result<&T> {
		let len = self.len;

		self.buf[..len]
			.get(index)
			.and_then(Slot::as_ref)
			.ok_or(Error::IndexOutOfBounds { index, len })
	}

	/// Returns a mutable reference to the element at `index`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfBounds`] unless `index < len`.
	#[inline]
	pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
		let len = self.len;

		self.buf[..len]
			.get_mut(index)
			.and_then(Slot::as_mut)
			.ok_or(Error::IndexOutOfBounds { index, len })
	}

	/// Returns a reference to the first element.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfBounds`] if the array is empty.
	#[inline]
	pub fn first(&self) -> Result<&T> {
		self.get(0)
	}

	/// Returns a reference to the last element.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfBounds`] if the array is empty.
	#[inline]
	pub fn last(&self) -> Result<&T> {
		let index = self
			.len
			.checked_sub(1)
			.ok_or(Error::IndexOutOfBounds { index: 0, len: 0 })?;

		self.get(index)
	}

	// Moves the live elements into a fresh buffer of `capacity` slots.
	fn resize(&mut self, capacity: usize) {
		debug!(
			"resizing array from {} to {capacity} slots, moving {} elements",
			self.capacity(),
			self.len
		);

		let mut buf = vacant_list(capacity);

		for (new, old) in buf.iter_mut().zip(&mut self.buf[..self.len]) {
			mem::swap(new, old);
		}

		self.buf = buf;
	}

	fn shrink_if_sparse(&mut self) {
		let capacity = self.capacity();

		if self.len != capacity / SHRINK_TRIGGER {
			return;
		}

		let target = (capacity / SHRINK_FACTOR).max(1);

		if target != capacity {
			self.resize(target);
		}
	}

	fn insert_unchecked(&mut self, index: usize, value: T) {
		if self.len == self.capacity() {
			let capacity = self.capacity().saturating_mul(GROWTH_FACTOR).max(1);

			self.resize(capacity);
		}

		self.buf[self.len].set(value);
		self.buf[index..=self.len].rotate_right(1);
		self.len += 1;
	}

	/// Inserts `value` at `index`, shifting every element after it one place
	/// to the right. The array doubles its capacity first if it is full.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] unless `index <= len`.
	pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
		if index > self.len {
			return Err(Error::InvalidArgument {
				index,
				len: self.len,
			});
		}

		self.insert_unchecked(index, value);

		Ok(())
	}

	/// Appends `value` to the back of the array.
	#[inline]
	pub fn append(&mut self, value: T) {
		self.insert_unchecked(self.len, value);
	}

	/// Replaces the element at `index`, returning the old one.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] unless `index < len`.
	pub fn set(&mut self, index: usize, value: T) -> Result<T> {
		let len = self.len;

		self.buf[..len]
			.get_mut(index)
			.and_then(|slot| slot.set(value))
			.ok_or(Error::InvalidArgument { index, len })
	}

	/// Removes and returns the element at `index`, shifting every element
	/// after it one place to the left. The array halves its capacity if its
	/// length lands on exactly a quarter of it.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] unless `index < len`.
	pub fn remove(&mut self, index: usize) -> Result<T> {
		if index >= self.len {
			return Err(Error::InvalidArgument {
				index,
				len: self.len,
			});
		}

		self.buf[index..self.len].rotate_left(1);
		self.len -= 1;

		let Some(value) = self.buf[self.len].take() else {
			unreachable!("live slot {} was vacant", self.len)
		};

		self.shrink_if_sparse();

		Ok(value)
	}

	/// Removes and returns the first element.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if the array is empty.
	#[inline]
	pub fn remove_first(&mut self) -> Result<T> {
		self.remove(0)
	}

	/// Removes and returns the last element.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if the array is empty.
	#[inline]
	pub fn remove_last(&mut self) -> Result<T> {
		let index = self
			.len
			.checked_sub(1)
			.ok_or(Error::InvalidArgument { index: 0, len: 0 })?;

		self.remove(index)
	}

	/// Exchanges the elements at `a` and `b`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfBounds`] unless both indices are `< len`.
	pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
		let len = self.len;

		if let Some(index) = [a, b].into_iter().find(|&index| index >= len) {
			return Err(Error::IndexOutOfBounds { index, len });
		}

		self.buf.swap(a, b);

		Ok(())
	}

	/// Removes every element, keeping the current capacity.
	pub fn clear(&mut self) {
		self.buf[..self.len].iter_mut().for_each(|slot| drop(slot.take()));
		self.len = 0;
	}
}

impl<T> Default for DynamicArray<T> {
	#[inline]
	fn default() -> Self {
		Self::new_default()
	}
}

impl<T: Clone> Clone for DynamicArray<T> {
	fn clone(&self) -> Self {
		Self {
			buf: self.buf.clone(),
			len: self.len,
		}
	}
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
	fn eq(&self, other: &Self) -> bool {
		self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Debug> Debug for DynamicArray<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: Display> Display for DynamicArray<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"the size is: {}, the capacity is: {}",
			self.len,
			self.capacity()
		)?;

		f.write_str("[")?;

		for value in self {
			write!(f, "{value} ")?;
		}

		f.write_str("]")
	}
}

impl<T> From<Vec<T>> for DynamicArray<T> {
	fn from(items: Vec<T>) -> Self {
		let len = items.len();
		let mut buf: Vec<_> = items.into_iter().map(Slot::Occupied).collect();

		if buf.is_empty() {
			buf.push(Slot::Vacant);
		}

		Self {
			buf: buf.into_boxed_slice(),
			len,
		}
	}
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
	#[inline]
	fn from(items: [T; N]) -> Self {
		Self::from(Vec::from(items))
	}
}

impl<T> FromIterator<T> for DynamicArray<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		iter.into_iter().collect::<Vec<_>>().into()
	}
}

impl<T> Extend<T> for DynamicArray<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		iter.into_iter().for_each(|value| self.append(value));
	}
}

impl<T> Index<usize> for DynamicArray<T> {
	type Output = T;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		self.get(index).unwrap_or_else(|error| panic!("{error}"))
	}
}

impl<T> IndexMut<usize> for DynamicArray<T> {
	#[inline]
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		self.get_mut(index).unwrap_or_else(|error| panic!("{error}"))
	}
}
