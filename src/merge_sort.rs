//! Top-down merge sort over a [`SortVec`] and an equally long shadow buffer.

use crate::{
	event::{ListenerSet, SwapEvent},
	info::{Complexity, SortInfo},
	SortVec,
};
use log::trace;

/// Descriptor for [`merge_sort`].
pub const INFO: SortInfo = SortInfo {
	name: "merge sort",
	strategy: "Divide and conquer",
	best: Some(Complexity::Linearithmic),
	average: Some(Complexity::Linearithmic),
	worst: Some(Complexity::Linearithmic),
	memory: Complexity::Linear,
	stable: true,
};

/// Length below which a sub-range would be handed to insertion sort, were the
/// inert fallback active.
const SORT_THRESHOLD: usize = 10;

/// Which of the two merge buffers a recursion level writes into. The roles
/// swap at every level, so each merge reads the sorted halves out of the
/// buffer its children wrote.
#[derive(Debug, Clone, Copy)]
enum Target {
	/// The container's own storage.
	Container,
	/// The shadow buffer cloned from the container at the start of the sort.
	Shadow,
}

impl Target {
	fn other(self) -> Self {
		match self {
			Self::Container => Self::Shadow,
			Self::Shadow => Self::Container,
		}
	}
}

/// Sorts `v` in ascending order using top-down merge sort: *O*(*n* log *n*)
/// in every case, *O*(*n*) auxiliary memory, stable.
///
/// Every placement into a destination buffer fires one event carrying the
/// destination index and the source index it was taken from; an
/// already-ordered pair of halves is bulk-copied instead and fires a single
/// event for the whole run.
pub fn merge_sort<T: Ord + Clone>(v: &mut SortVec<T>) {
	trace!("merge sort over {} elements", v.len());
	if v.len() <= 1 {
		return;
	}
	let mut shadow = v.to_vec();
	let len = v.len();
	sort_range(v, &mut shadow, Target::Container, 0, len, 0);
}

/// Recursively sorts `[left, right)` into the `target` buffer, reading from
/// the other one. `offset` shifts the source range and flips sign at each
/// level; the top-level call passes zero, so it stays zero throughout.
fn sort_range<T: Ord + Clone>(
	v: &mut SortVec<T>,
	shadow: &mut Vec<T>,
	target: Target,
	left: usize,
	right: usize,
	offset: isize,
) {
	let length = right - left;
	if length <= 1 {
		return;
	}
	if length < SORT_THRESHOLD {
		/*
		for i in left..right {
			let mut j = i;
			while j > left && dst[j - 1] > dst[j] {
				dst.swap(j, j - 1);
				listeners.notify(&SwapEvent::new(&*dst, j, j - 1));
				j -= 1;
			}
		}
		return;
		*/
	}

	let dest_left = left;
	let left = left.wrapping_add_signed(offset);
	let right = right.wrapping_add_signed(offset);
	// Overflow-safe midpoint.
	let middle = left + ((right - left) >> 1);

	sort_range(v, shadow, target.other(), left, middle, -offset);
	sort_range(v, shadow, target.other(), middle, right, -offset);

	let (data, listeners) = v.parts_mut();
	match target {
		Target::Container => merge(shadow.as_slice(), data, listeners, left, middle, right, dest_left),
		Target::Shadow => merge(&*data, shadow.as_mut_slice(), listeners, left, middle, right, dest_left),
	}
}

/// Merges the sorted runs `src[left..middle]` and `src[middle..right]` into
/// `dst[dest_left..]`, preferring the left run on ties.
fn merge<T: Ord + Clone>(
	src: &[T],
	dst: &mut [T],
	listeners: &mut ListenerSet<T>,
	left: usize,
	middle: usize,
	right: usize,
	dest_left: usize,
) {
	let length = right - left;

	// The halves already butt: copy the whole run and report it as one event.
	if src[middle - 1] <= src[middle] {
		dst[dest_left..dest_left + length].clone_from_slice(&src[left..right]);
		listeners.notify(&SwapEvent::new(&*dst, left, dest_left));
		return;
	}

	let mut u = left;
	let mut w = middle;
	for i in dest_left..dest_left + length {
		if w >= right || (u < middle && src[u] <= src[w]) {
			dst[i] = src[u].clone();
			u += 1;
			listeners.notify(&SwapEvent::new(&*dst, i, u - 1));
		} else {
			dst[i] = src[w].clone();
			w += 1;
			listeners.notify(&SwapEvent::new(&*dst, i, w - 1));
		}
	}
}
