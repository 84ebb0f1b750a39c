//! Heap sort over a [`SortVec`], plus a container wrapper that keeps the heap
//! invariant alive across mutation.

use crate::{
	info::{Complexity, SortInfo},
	ListenerId, SortVec, SwapEvent, SwapListener,
};
use log::{debug, trace};

/// Descriptor for [`heap_sort`].
pub const INFO: SortInfo = SortInfo {
	name: "heap sort",
	strategy: "Transformation",
	best: Some(Complexity::Linearithmic),
	average: Some(Complexity::Linearithmic),
	worst: Some(Complexity::Linearithmic),
	memory: Complexity::Constant,
	stable: false,
};

/// Restores the max-heap invariant below `start`, considering only the live
/// range `[0, size)`.
///
/// Descends while the left child index is in bounds, exchanging the node with
/// its larger child (the right child wins ties only by strictly exceeding the
/// left) and stopping at the first node that already dominates both children.
pub fn sift_down<T: Ord>(v: &mut SortVec<T>, start: usize, size: usize) {
	let mut root = start;
	while root * 2 + 1 < size {
		let mut child = root * 2 + 1;
		if child < size - 1 && v[child] < v[child + 1] {
			child += 1;
		}
		if v[root] < v[child] {
			v.exchange(root, child);
			root = child;
		} else {
			return;
		}
	}
}

/// Restores the max-heap invariant above `start`, exchanging a node with its
/// parent while the parent is smaller.
pub fn sift_up<T: Ord>(v: &mut SortVec<T>, start: usize) {
	let mut child = start;
	while child > 0 {
		let root = (child - 1) / 2;
		if v[root] < v[child] {
			v.exchange(root, child);
			child = root;
		} else {
			return;
		}
	}
}

/// Rebuilds the max-heap from scratch: a reverse scan from the last index to
/// the root, sifting down at every position.
pub fn heapify<T: Ord>(v: &mut SortVec<T>) {
	debug!("heapify over {} elements", v.len());
	for i in (0..v.len()).rev() {
		sift_down(v, i, v.len());
	}
}

/// Sorts `v` in ascending order using heap sort: *O*(*n* log *n*) in every
/// case, *O*(1) auxiliary memory, unstable.
///
/// Builds the max-heap by sifting up over every position from index 1 upward
/// (a no-op scan when `v` already is a heap), then repeatedly exchanges the
/// root with the last live position and sifts the new root down over the
/// shrinking live range.
pub fn heap_sort<T: Ord>(v: &mut SortVec<T>) {
	trace!("heap sort over {} elements", v.len());
	for start in 1..v.len() {
		sift_up(v, start);
	}
	for end in (1..v.len()).rev() {
		v.exchange(0, end);
		sift_down(v, 0, end);
	}
}

/// A [`SortVec`] that is always a valid max-heap (root at 0, children of `i`
/// at `2i + 1` and `2i + 2`).
///
/// A single [`add`](Self::add) repairs the invariant with one sift-up from
/// the new tail; every bulk mutation ([`add_all`](Self::add_all),
/// [`remove`](Self::remove), [`remove_all`](Self::remove_all),
/// [`retain_all`](Self::retain_all)) triggers a full *O*(*n*) [`heapify`]
/// rather than an incremental repair, trading efficiency for simplicity.
/// Repairs go through the inner container's exchange primitive, so listeners
/// see heap maintenance the same way they see sorting.
///
/// Sorting consumes the wrapper ([`into_sorted`](Self::into_sorted)): an
/// ascending sequence is not a heap, so a live `Heap` never exposes one.
///
/// # Example
///
/// ```
/// use sort_trace::Heap;
///
/// let mut heap: Heap<_> = [2, 9, 4].into_iter().collect();
/// heap.add(7);
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.into_sorted().to_vec(), vec![2, 4, 7, 9]);
/// ```
#[derive(Debug)]
pub struct Heap<T> {
	inner: SortVec<T>,
}

impl<T: Ord> Heap<T> {
	/// Creates an empty heap.
	#[must_use]
	pub fn new() -> Self {
		Self {
			inner: SortVec::new(),
		}
	}

	/// Creates an empty heap with room for `capacity` elements.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: SortVec::with_capacity(capacity),
		}
	}

	/// Number of elements.
	#[must_use]
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Whether the heap holds no elements.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// The greatest element, at the root.
	#[must_use]
	pub fn peek(&self) -> Option<&T> {
		self.inner.get(0)
	}

	/// Shared access to the heap's index space.
	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	/// Adds one element and sifts it up from the tail.
	pub fn add(&mut self, value: T) -> bool {
		let result = self.inner.add(value);
		let tail = self.inner.len() - 1;
		sift_up(&mut self.inner, tail);
		result
	}

	/// Adds every element of `items`, then rebuilds the heap.
	pub fn add_all<I>(&mut self, items: I) -> bool
	where
		I: IntoIterator<Item = T>,
	{
		let result = self.inner.add_all(items);
		heapify(&mut self.inner);
		result
	}

	/// Removes the first element equal to `value`, then rebuilds the heap.
	pub fn remove(&mut self, value: &T) -> bool {
		let result = self.inner.remove(value);
		heapify(&mut self.inner);
		result
	}

	/// Removes every element equal to any value in `items`, then rebuilds the
	/// heap.
	pub fn remove_all(&mut self, items: &[T]) -> bool {
		let result = self.inner.remove_all(items);
		heapify(&mut self.inner);
		result
	}

	/// Keeps only elements equal to some value in `items`, then rebuilds the
	/// heap.
	pub fn retain_all(&mut self, items: &[T]) -> bool {
		let result = self.inner.retain_all(items);
		heapify(&mut self.inner);
		result
	}

	/// Removes every element.
	pub fn clear(&mut self) {
		self.inner.clear();
	}

	/// Registers a listener on the inner container.
	pub fn register_listener(&mut self, listener: Box<dyn SwapListener<T>>) -> ListenerId {
		self.inner.register_listener(listener)
	}

	/// Registers a closure listener on the inner container.
	pub fn observe<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&SwapEvent<'_, T>) + 'static,
	{
		self.inner.observe(listener)
	}

	/// Unregisters the listener registered under `id`.
	pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
		self.inner.unregister_listener(id)
	}

	/// Consumes the heap and returns the inner container sorted ascending.
	#[must_use]
	pub fn into_sorted(mut self) -> SortVec<T> {
		heap_sort(&mut self.inner);
		self.inner
	}

	/// Consumes the heap and returns the inner container as-is, in heap
	/// order.
	#[must_use]
	pub fn into_inner(self) -> SortVec<T> {
		self.inner
	}
}

impl<T: Ord> Default for Heap<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Ord> From<SortVec<T>> for Heap<T> {
	fn from(mut inner: SortVec<T>) -> Self {
		heapify(&mut inner);
		Self { inner }
	}
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
	fn from(data: Vec<T>) -> Self {
		Self::from(SortVec::from(data))
	}
}

impl<T: Ord> FromIterator<T> for Heap<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from(SortVec::from_iter(iter))
	}
}
