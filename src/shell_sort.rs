//! Shell sort over a [`SortVec`].

use crate::{
	info::{Complexity, SortInfo},
	SortVec,
};
use log::trace;

/// Descriptor for [`shell_sort`].
pub const INFO: SortInfo = SortInfo {
	name: "shell sort",
	strategy: "Brute Force",
	best: None,
	average: None,
	worst: Some(Complexity::SubQuadratic),
	memory: Complexity::Constant,
	stable: false,
};

/// Sorts `v` in ascending order using shell sort. Unstable.
///
/// The gap sequence starts at half the range and shrinks by a factor of 2.2
/// per pass, flooring a gap of 2 to 1 so the final pass is a plain insertion
/// sort.
pub fn shell_sort<T: Ord>(v: &mut SortVec<T>) {
	trace!("shell sort over {} elements", v.len());
	sort_range(v, 0, v.len());
}

fn sort_range<T: Ord>(v: &mut SortVec<T>, left: usize, right: usize) {
	let mut gap = (right - left) / 2;
	while gap > 0 {
		// Gapped insertion sort with the current gap.
		for i in left + gap..right {
			let mut j = i;
			while j >= left + gap && v[j - gap] > v[j] {
				v.exchange(j - gap, j);
				j -= gap;
			}
		}
		gap = if gap == 2 { 1 } else { (gap as f64 / 2.2).round() as usize };
	}
}
