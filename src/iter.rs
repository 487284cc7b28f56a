//! Contains the array iterator types.

use alloc::vec;
use core::{iter::FusedIterator, slice};

use crate::{collection::DynamicArray, slot::Slot};

macro_rules! impl_iterator {
	($name:ident, $value:ty, $ref:ident) => {
		/// An iterator over the elements of the array, front to back.
		pub struct $name<'a, T> {
			pub(crate) buf: slice::$name<'a, Slot<T>>,
		}

		impl<'a, T> Iterator for $name<'a, T> {
			type Item = $value;

			#[inline]
			fn next(&mut self) -> Option<Self::Item> {
				self.buf.next().and_then(Slot::$ref)
			}

			#[inline]
			fn size_hint(&self) -> (usize, Option<usize>) {
				self.buf.size_hint()
			}

			#[inline]
			fn count(self) -> usize {
				self.buf.len()
			}
		}

		impl<'a, T> DoubleEndedIterator for $name<'a, T> {
			#[inline]
			fn next_back(&mut self) -> Option<Self::Item> {
				self.buf.next_back().and_then(Slot::$ref)
			}
		}

		impl<T> ExactSizeIterator for $name<'_, T> {}

		impl<T> FusedIterator for $name<'_, T> {}
	};
}

impl_iterator!(Iter, &'a T, as_ref);
impl_iterator!(IterMut, &'a mut T, as_mut);

/// An owning iterator over the elements of the array, front to back.
pub struct IntoIter<T> {
	buf: vec::IntoIter<Slot<T>>,
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.buf.next().and_then(Slot::into_inner)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.buf.size_hint()
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.buf.next_back().and_then(Slot::into_inner)
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> DynamicArray<T> {
	/// Returns an iterator over the array elements.
	#[must_use]
	pub fn iter(&self) -> Iter<'_, T> {
		let buf = self.buf[..self.len].iter();

		Iter { buf }
	}

	/// Returns a mutable iterator over the array elements.
	#[must_use]
	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		let buf = self.buf[..self.len].iter_mut();

		IterMut { buf }
	}
}

impl<T> IntoIterator for DynamicArray<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		let mut buf = self.buf.into_vec();

		buf.truncate(self.len);

		IntoIter {
			buf: buf.into_iter(),
		}
	}
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use crate::collection::DynamicArray;

	#[test]
	fn iterate_all() {
		const COUNT: usize = 100;

		let mut array = DynamicArray::new_default();

		for i in 0..COUNT {
			array.append(COUNT - i);
		}

		let mut count = 0;

		for (index, value) in array.iter().enumerate() {
			assert_eq!(*value, COUNT - index);

			count += 1;
		}

		assert_eq!(count, COUNT);
		assert_eq!(array.iter().len(), COUNT);
	}

	#[test]
	fn skips_vacant_tail() {
		let mut array = DynamicArray::new(8).unwrap();

		array.extend([1, 2, 3]);

		assert_eq!(array.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
		assert_eq!(array.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
	}

	#[test]
	fn mutate_in_place() {
		let mut array = DynamicArray::from([1, 2, 3]);

		for value in &mut array {
			*value *= 10;
		}

		assert_eq!(array.iter().sum::<i32>(), 60);
	}
}
