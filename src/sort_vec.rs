//! The instrumented ordered container shared by all sorting algorithms.

use crate::event::{ListenerId, ListenerSet, SwapEvent, SwapListener};
use core::{fmt, ops, slice};
use thiserror::Error;

/// Error returned by [`SortVec::copy_into`] when the caller's buffer does not
/// match the container length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer length {actual} does not match container length {expected}")]
pub struct LengthMismatch {
	/// Length of the container.
	pub expected: usize,
	/// Length of the buffer handed in.
	pub actual: usize,
}

/// An ordered, index-addressable sequence of `T` with an attached registry of
/// [`SwapListener`]s.
///
/// The container exposes a single mutating primitive to sorting algorithms,
/// [`exchange`](Self::exchange), which swaps two positions and then
/// synchronously notifies every registered listener. Routing every exchange
/// through that one primitive is what keeps the algorithms decoupled from any
/// concrete display or test mechanism.
///
/// Despite offering set-like operations (`remove_all`, `retain_all`, ...),
/// this is a sequence: duplicates are permitted and insertion order is kept.
///
/// # Example
///
/// ```
/// use sort_trace::{bubble_sort, SortVec};
///
/// let mut v = SortVec::from(vec![3, 1, 2]);
/// let id = v.observe(|event| {
/// 	// The event reflects the post-swap state.
/// 	assert!(event.index0() < event.as_slice().len());
/// 	assert!(event.index1() < event.as_slice().len());
/// });
/// bubble_sort(&mut v);
/// assert_eq!(v.to_vec(), vec![1, 2, 3]);
/// assert!(v.unregister_listener(id));
/// ```
pub struct SortVec<T> {
	data: Vec<T>,
	listeners: ListenerSet<T>,
}

impl<T> SortVec<T> {
	/// Creates an empty container.
	#[must_use]
	pub fn new() -> Self {
		Self {
			data: Vec::new(),
			listeners: ListenerSet::new(),
		}
	}

	/// Creates an empty container with room for `capacity` elements.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			listeners: ListenerSet::new(),
		}
	}

	/// Number of elements.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the container holds no elements.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Appends an element. Always succeeds; duplicates are permitted.
	pub fn add(&mut self, value: T) -> bool {
		self.data.push(value);
		true
	}

	/// Appends every element of `items`, returning whether anything was added.
	pub fn add_all<I>(&mut self, items: I) -> bool
	where
		I: IntoIterator<Item = T>,
	{
		let before = self.data.len();
		self.data.extend(items);
		self.data.len() != before
	}

	/// Removes every element.
	pub fn clear(&mut self) {
		self.data.clear();
	}

	/// Shared access to the element at `index`.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&T> {
		self.data.get(index)
	}

	/// The elements as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	/// Iterates over the elements in order.
	pub fn iter(&self) -> slice::Iter<'_, T> {
		self.data.iter()
	}

	/// Swaps the elements at `index0` and `index1`, then synchronously
	/// notifies every registered listener with a fresh [`SwapEvent`], even
	/// when `index0 == index1`.
	///
	/// # Panics
	///
	/// Panics if either index is out of bounds, or propagates whatever a
	/// listener panics with; the exchange itself is committed either way.
	pub fn exchange(&mut self, index0: usize, index1: usize) {
		self.data.swap(index0, index1);
		let Self { data, listeners } = self;
		listeners.notify(&SwapEvent::new(data.as_slice(), index0, index1));
	}

	/// Registers a listener, returning the token that unregisters it.
	///
	/// Listeners are notified in registration order; registering the same
	/// logic twice notifies it twice.
	pub fn register_listener(&mut self, listener: Box<dyn SwapListener<T>>) -> ListenerId {
		self.listeners.register(listener)
	}

	/// Registers a closure listener. Convenience over
	/// [`register_listener`](Self::register_listener).
	pub fn observe<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&SwapEvent<'_, T>) + 'static,
	{
		self.listeners.register(Box::new(listener))
	}

	/// Unregisters the listener registered under `id`, returning whether it
	/// was still present.
	pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
		self.listeners.unregister(id)
	}

	/// Number of registered listeners.
	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	/// Splits the container into its element buffer and listener registry so
	/// an algorithm can mutate one while notifying through the other.
	pub(crate) fn parts_mut(&mut self) -> (&mut [T], &mut ListenerSet<T>) {
		let Self { data, listeners } = self;
		(data.as_mut_slice(), listeners)
	}
}

impl<T: PartialEq> SortVec<T> {
	/// Whether some element equals `value`.
	#[must_use]
	pub fn contains(&self, value: &T) -> bool {
		self.data.contains(value)
	}

	/// Whether every value in `items` has an equal element in the container.
	#[must_use]
	pub fn contains_all(&self, items: &[T]) -> bool {
		items.iter().all(|item| self.data.contains(item))
	}

	/// Removes the first element equal to `value`, returning whether one was
	/// found.
	pub fn remove(&mut self, value: &T) -> bool {
		match self.data.iter().position(|element| element == value) {
			Some(index) => {
				self.data.remove(index);
				true
			}
			None => false,
		}
	}

	/// Removes every element equal to any value in `items`, returning whether
	/// the container changed.
	pub fn remove_all(&mut self, items: &[T]) -> bool {
		let before = self.data.len();
		self.data.retain(|element| !items.contains(element));
		self.data.len() != before
	}

	/// Keeps only elements equal to some value in `items`, returning whether
	/// the container changed.
	pub fn retain_all(&mut self, items: &[T]) -> bool {
		let before = self.data.len();
		self.data.retain(|element| items.contains(element));
		self.data.len() != before
	}
}

impl<T: Clone> SortVec<T> {
	/// Copies the elements into a fresh `Vec`.
	#[must_use]
	pub fn to_vec(&self) -> Vec<T> {
		self.data.clone()
	}

	/// Copies the elements into `buffer`, which must have exactly the
	/// container's length.
	pub fn copy_into(&self, buffer: &mut [T]) -> Result<(), LengthMismatch> {
		if buffer.len() != self.data.len() {
			return Err(LengthMismatch {
				expected: self.data.len(),
				actual: buffer.len(),
			});
		}
		buffer.clone_from_slice(&self.data);
		Ok(())
	}
}

impl<T> Default for SortVec<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> From<Vec<T>> for SortVec<T> {
	fn from(data: Vec<T>) -> Self {
		Self {
			data,
			listeners: ListenerSet::new(),
		}
	}
}

impl<T: Clone> From<&[T]> for SortVec<T> {
	fn from(data: &[T]) -> Self {
		Self::from(data.to_vec())
	}
}

impl<T> FromIterator<T> for SortVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from(Vec::from_iter(iter))
	}
}

impl<T> ops::Index<usize> for SortVec<T> {
	type Output = T;

	fn index(&self, index: usize) -> &T {
		&self.data[index]
	}
}

impl<'a, T> IntoIterator for &'a SortVec<T> {
	type Item = &'a T;
	type IntoIter = slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.iter()
	}
}

impl<T: fmt::Debug> fmt::Debug for SortVec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SortVec")
			.field("data", &self.data)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}
