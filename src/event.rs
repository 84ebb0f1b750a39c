//! Swap notification protocol shared by every sorting algorithm.

use core::fmt;

/// Immutable record of a single element exchange.
///
/// The event borrows the buffer the exchange landed in, so a listener always
/// observes the committed post-swap state. During a merge pass the borrowed
/// buffer is whichever of the two merge buffers served as the destination.
#[derive(Clone, Copy)]
pub struct SwapEvent<'a, T> {
	data: &'a [T],
	index0: usize,
	index1: usize,
}

impl<'a, T> SwapEvent<'a, T> {
	pub(crate) fn new(data: &'a [T], index0: usize, index1: usize) -> Self {
		Self {
			data,
			index0,
			index1,
		}
	}

	/// The contents of the exchanged buffer at the moment of the exchange.
	#[must_use]
	pub fn as_slice(&self) -> &'a [T] {
		self.data
	}

	/// First position of the exchange.
	///
	/// May equal [`index1`](Self::index1): selection sort and the quicksort
	/// partition deliberately report self-swaps.
	#[must_use]
	pub fn index0(&self) -> usize {
		self.index0
	}

	/// Second position of the exchange.
	#[must_use]
	pub fn index1(&self) -> usize {
		self.index1
	}
}

impl<T: fmt::Debug> fmt::Debug for SwapEvent<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SwapEvent")
			.field("index0", &self.index0)
			.field("index1", &self.index1)
			.field("len", &self.data.len())
			.finish()
	}
}

/// Observer of element exchanges, notified synchronously from within
/// [`SortVec::exchange`](crate::SortVec::exchange).
///
/// The event only hands out a shared view of the buffer, so a listener cannot
/// call back into the container's mutating operations while a sort is running.
/// A panicking listener aborts the sort, leaving the container in whatever
/// partially swapped state existed at that point.
pub trait SwapListener<T> {
	/// Called once per exchange, after the exchange has been committed.
	fn swap_performed(&mut self, event: &SwapEvent<'_, T>);
}

impl<T, F> SwapListener<T> for F
where
	F: FnMut(&SwapEvent<'_, T>),
{
	fn swap_performed(&mut self, event: &SwapEvent<'_, T>) {
		self(event)
	}
}

/// Token returned by listener registration, used to unregister.
///
/// Boxed listeners have no identity of their own to compare by, so removal
/// goes through the token handed out at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Ordered listener registry. Listeners are invoked in registration order;
/// duplicates are permitted.
pub(crate) struct ListenerSet<T> {
	entries: Vec<(ListenerId, Box<dyn SwapListener<T>>)>,
	next: usize,
}

impl<T> ListenerSet<T> {
	pub(crate) fn new() -> Self {
		Self {
			entries: Vec::new(),
			next: 0,
		}
	}

	pub(crate) fn register(&mut self, listener: Box<dyn SwapListener<T>>) -> ListenerId {
		let id = ListenerId(self.next);
		self.next += 1;
		self.entries.push((id, listener));
		id
	}

	pub(crate) fn unregister(&mut self, id: ListenerId) -> bool {
		match self.entries.iter().position(|(entry, _)| *entry == id) {
			Some(index) => {
				self.entries.remove(index);
				true
			}
			None => false,
		}
	}

	pub(crate) fn notify(&mut self, event: &SwapEvent<'_, T>) {
		for (_, listener) in &mut self.entries {
			listener.swap_performed(event);
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}
}
