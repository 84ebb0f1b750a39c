//! Insertion sort over a [`SortVec`].

use crate::{
	info::{Complexity, SortInfo},
	SortVec,
};
use log::trace;

/// Descriptor for [`insertion_sort`].
pub const INFO: SortInfo = SortInfo {
	name: "insertion sort",
	strategy: "Brute Force",
	best: Some(Complexity::Linear),
	average: Some(Complexity::Quadratic),
	worst: Some(Complexity::Quadratic),
	memory: Complexity::Constant,
	stable: true,
};

/// Sorts `v` in ascending order using insertion sort. Stable, and adaptive:
/// nearly-sorted input approaches *O*(*n*).
pub fn insertion_sort<T: Ord>(v: &mut SortVec<T>) {
	trace!("insertion sort over {} elements", v.len());
	sort_range(v, 0, v.len());
}

/// Walks each element of `[left, right)` down through its greater
/// predecessors, one exchange per step.
fn sort_range<T: Ord>(v: &mut SortVec<T>, left: usize, right: usize) {
	for i in left..right {
		let mut j = i;
		while j > left && v[j - 1] > v[j] {
			v.exchange(j - 1, j);
			j -= 1;
		}
	}
}
