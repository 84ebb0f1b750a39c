//! Selection sort over a [`SortVec`].

use crate::{
	info::{Complexity, SortInfo},
	SortVec,
};
use log::trace;

/// Descriptor for [`selection_sort`].
pub const INFO: SortInfo = SortInfo {
	name: "selection sort",
	strategy: "Brute Force",
	best: Some(Complexity::Quadratic),
	average: Some(Complexity::Quadratic),
	worst: Some(Complexity::Quadratic),
	memory: Complexity::Constant,
	stable: false,
};

/// Sorts `v` in ascending order using selection sort. Unstable, and always
/// *O*(*n*^2) comparisons regardless of input order.
///
/// Every outer pass ends in an unconditional exchange of the pass index with
/// the minimum position, so an input of length *n* fires exactly *n* - 1
/// events even when already sorted, self-swaps included.
pub fn selection_sort<T: Ord>(v: &mut SortVec<T>) {
	trace!("selection sort over {} elements", v.len());
	sort_range(v, 0, v.len());
}

fn sort_range<T: Ord>(v: &mut SortVec<T>, left: usize, right: usize) {
	for i in left..right.saturating_sub(1) {
		let mut min = i;
		for j in i + 1..right {
			if v[j] < v[min] {
				min = j;
			}
		}
		v.exchange(i, min);
	}
}

#[cfg(test)]
mod test {
	use super::selection_sort;
	use crate::SortVec;
	use quickcheck_macros::quickcheck;
	use std::{cell::RefCell, rc::Rc};

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut v = SortVec::from(xs);
		selection_sort(&mut v);
		for i in 1..v.len() {
			assert!(v[i - 1] <= v[i]);
		}
	}

	#[test]
	fn sorted_input_fires_one_self_swap_per_pass() {
		let mut v: SortVec<_> = (0..16).collect();
		let events = Rc::new(RefCell::new(Vec::new()));
		let inner = events.clone();
		v.observe(move |event| inner.borrow_mut().push((event.index0(), event.index1())));
		selection_sort(&mut v);
		let events = events.borrow();
		assert_eq!(events.len(), 15);
		for (i, &(index0, index1)) in events.iter().enumerate() {
			assert_eq!((index0, index1), (i, i));
		}
	}

	#[test]
	fn empty_and_singleton_fire_nothing() {
		for len in 0..2 {
			let mut v: SortVec<i32> = (0..len).collect();
			let events = Rc::new(RefCell::new(Vec::new()));
			let inner = events.clone();
			v.observe(move |event| inner.borrow_mut().push(event.index0()));
			selection_sort(&mut v);
			assert!(events.borrow().is_empty());
		}
	}
}
