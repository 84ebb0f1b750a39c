//! Bubble sort over a [`SortVec`].

use crate::{
	info::{Complexity, SortInfo},
	SortVec,
};
use log::trace;

/// Descriptor for [`bubble_sort`].
pub const INFO: SortInfo = SortInfo {
	name: "bubble sort",
	strategy: "Brute Force",
	best: Some(Complexity::Linear),
	average: None,
	worst: Some(Complexity::Quadratic),
	memory: Complexity::Constant,
	stable: true,
};

/// Sorts `v` in ascending order using bubble sort. Stable.
///
/// Already-sorted input incurs the full comparison scan but performs (and
/// reports) zero exchanges.
pub fn bubble_sort<T: Ord>(v: &mut SortVec<T>) {
	trace!("bubble sort over {} elements", v.len());
	sort_range(v, 0, v.len());
}

/// Bubbles the smallest remaining element of `[left, right)` down to `i` on
/// every outer pass.
fn sort_range<T: Ord>(v: &mut SortVec<T>, left: usize, right: usize) {
	for i in left..right {
		for j in (i + 1..right).rev() {
			if v[j] < v[j - 1] {
				v.exchange(j - 1, j);
			}
		}
	}
}
