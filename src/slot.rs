use core::mem;

/// A single physical storage slot of a [`DynamicArray`](crate::collection::DynamicArray).
#[derive(Clone, Debug)]
pub(crate) enum Slot<T> {
	Occupied(T),
	Vacant,
}

impl<T> Slot<T> {
	#[inline]
	pub const fn as_ref(&self) -> Option<&T> {
		if let Self::Occupied(value) = self {
			Some(value)
		} else {
			None
		}
	}

	#[inline]
	pub fn as_mut(&mut self) -> Option<&mut T> {
		if let Self::Occupied(value) = self {
			Some(value)
		} else {
			None
		}
	}

	#[inline]
	pub fn into_inner(self) -> Option<T> {
		if let Self::Occupied(value) = self {
			Some(value)
		} else {
			None
		}
	}

	/// Stores `value`, returning whatever the slot held before.
	#[inline]
	pub fn set(&mut self, value: T) -> Option<T> {
		mem::replace(self, Self::Occupied(value)).into_inner()
	}

	/// Vacates the slot, handing back ownership of its value.
	#[inline]
	pub fn take(&mut self) -> Option<T> {
		mem::take(self).into_inner()
	}
}

impl<T> Default for Slot<T> {
	#[inline]
	fn default() -> Self {
		Self::Vacant
	}
}

pub(crate) type List<T> = alloc::boxed::Box<[Slot<T>]>;

/// Allocates `capacity` vacant slots.
pub(crate) fn vacant_list<T>(capacity: usize) -> List<T> {
	core::iter::repeat_with(|| Slot::Vacant)
		.take(capacity)
		.collect()
}
