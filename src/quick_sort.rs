//! Three-way quicksort over a [`SortVec`] in the style of Bentley–McIlroy.

use crate::{
	info::{Complexity, SortInfo},
	SortVec,
};
use core::cmp::{self, Ordering};
use log::trace;

/// Descriptor for [`quick_sort`].
pub const INFO: SortInfo = SortInfo {
	name: "quicksort",
	strategy: "Divide and conquer",
	best: Some(Complexity::Linearithmic),
	average: Some(Complexity::Linearithmic),
	worst: Some(Complexity::Quadratic),
	memory: Complexity::Constant,
	stable: false,
};

/// Length below which a sub-range would be handed to insertion sort, were the
/// inert fallback active. Above it, pivots are chosen by median-of-3 instead
/// of the plain midpoint.
const SORT_THRESHOLD: usize = 10;

/// Length above which pivot selection upgrades to the pseudo-median of 9.
const LARGE_SORT_THRESHOLD: usize = 40;

/// Sorts `v` in ascending order using three-way quicksort: equal-to-pivot
/// elements are collected into a middle zone that is excluded from recursion.
/// Average *O*(*n* log *n*), unstable; degrades toward *O*(*n*^2) only on
/// inputs adversarial to the median sampling.
pub fn quick_sort<T: Ord + Clone>(v: &mut SortVec<T>) {
	trace!("quicksort over {} elements", v.len());
	if v.len() > 1 {
		sort_range(v, 0, v.len());
	}
}

/// Recursively sorts `[left, left + length)`, `length >= 2`.
fn sort_range<T: Ord + Clone>(v: &mut SortVec<T>, left: usize, length: usize) {
	if length < SORT_THRESHOLD {
		/*
		for i in left..left + length {
			let mut j = i;
			while j > left && v[j - 1] > v[j] {
				v.exchange(j, j - 1);
				j -= 1;
			}
		}
		return;
		*/
	}

	let (mid_left, mid_right) = partition(v, left, length);
	let span = mid_left - left;
	if span > 1 {
		sort_range(v, left, span);
	}
	let span = left + length - mid_right;
	if span > 1 {
		sort_range(v, mid_right, span);
	}
}

/// Partitions `[left, left + length)` three ways around a sampled pivot and
/// returns the equal-to-pivot middle zone `[mid_left, mid_right)`, which is
/// never empty (the pivot itself lands in it) and is in final position.
///
/// Cursors `a <= b` and `c <= d` bound the equal zones collected at the front
/// and back of the range while `b` and `c` scan toward each other; `c` may
/// legitimately finish one position left of `left`, so the cursor arithmetic
/// is signed.
fn partition<T: Ord + Clone>(v: &mut SortVec<T>, left: usize, length: usize) -> (usize, usize) {
	let mut middle = left + (length >> 1);
	if length > SORT_THRESHOLD {
		let mut lo = left;
		let mut hi = left + length - 1;
		if length > LARGE_SORT_THRESHOLD {
			let s = length / 8;
			lo = median_of_3(v, lo, lo + s, lo + 2 * s);
			middle = median_of_3(v, middle - s, middle, middle + s);
			hi = median_of_3(v, hi - 2 * s, hi - s, hi);
		}
		middle = median_of_3(v, lo, middle, hi);
	}
	let pivot = v[middle].clone();

	let mut a = left as isize;
	let mut b = a;
	let mut d = (left + length - 1) as isize;
	let mut c = d;
	loop {
		while b <= c {
			match v[b as usize].cmp(&pivot) {
				Ordering::Greater => break,
				Ordering::Equal => {
					v.exchange(a as usize, b as usize);
					a += 1;
				}
				Ordering::Less => {}
			}
			b += 1;
		}
		while c >= b {
			match v[c as usize].cmp(&pivot) {
				Ordering::Less => break,
				Ordering::Equal => {
					v.exchange(c as usize, d as usize);
					d -= 1;
				}
				Ordering::Greater => {}
			}
			c -= 1;
		}
		if b > c {
			break;
		}
		v.exchange(b as usize, c as usize);
		b += 1;
		c -= 1;
	}

	// Rotate the collected equal zones into the middle.
	let end = (left + length) as isize;
	let left = left as isize;
	let s = cmp::min(a - left, b - a);
	vector_swap(v, left as usize, (b - s) as usize, s as usize);
	let s = cmp::min(d - c, end - d - 1);
	vector_swap(v, b as usize, (end - s) as usize, s as usize);

	(((left + b) - a) as usize, ((end - d) + c) as usize)
}

/// Exchanges the `length`-element blocks starting at `a` and `b`, one event
/// per element pair.
fn vector_swap<T: Ord>(v: &mut SortVec<T>, mut a: usize, mut b: usize, length: usize) {
	for _ in 0..length {
		v.exchange(a, b);
		a += 1;
		b += 1;
	}
}

/// Index of the median of the elements at `a`, `b` and `c`.
fn median_of_3<T: Ord>(v: &SortVec<T>, a: usize, b: usize, c: usize) -> usize {
	if v[a] < v[b] {
		if v[b] < v[c] {
			b
		} else if v[a] < v[c] {
			c
		} else {
			a
		}
	} else if v[b] > v[c] {
		b
	} else if v[a] > v[c] {
		c
	} else {
		a
	}
}

#[cfg(test)]
mod test {
	use super::{partition, quick_sort};
	use crate::SortVec;
	use quickcheck_macros::quickcheck;
	use rand::{rngs::StdRng, Rng, SeedableRng};
	use std::{cell::RefCell, rc::Rc};

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut v = SortVec::from(xs);
		quick_sort(&mut v);
		assert_eq!(v.to_vec(), sorted);
	}

	#[quickcheck]
	fn many_duplicates(xs: Vec<u8>) {
		let mut sorted: Vec<_> = xs.iter().map(|x| x % 4).collect();
		sorted.sort_unstable();
		let mut v: SortVec<_> = xs.into_iter().map(|x| x % 4).collect();
		quick_sort(&mut v);
		assert_eq!(v.to_vec(), sorted);
	}

	#[test]
	fn partition_zones_straddle_the_pivot() {
		let mut rng = StdRng::seed_from_u64(9);
		// Lengths exercising the midpoint, median-of-3 and pseudo-median-of-9
		// pivot tiers.
		for length in [2, 5, 9, 11, 40, 41, 100, 500] {
			let mut v: SortVec<_> = (0..length).map(|_| rng.random_range(0..32u8)).collect();
			let (mid_left, mid_right) = partition(&mut v, 0, length);
			assert!(mid_left < mid_right, "equal zone holds at least the pivot");
			let pivot = v[mid_left].clone();
			assert!(v.iter().take(mid_left).all(|x| *x <= pivot));
			assert!(v.iter().skip(mid_left).take(mid_right - mid_left).all(|x| *x == pivot));
			assert!(v.iter().skip(mid_right).all(|x| *x >= pivot));
		}
	}

	#[test]
	fn equal_zone_collection_reports_self_swaps() {
		// All-equal input: the back-zone collection starts with c == d.
		let mut v = SortVec::from(vec![7, 7, 7]);
		let events = Rc::new(RefCell::new(Vec::new()));
		let inner = events.clone();
		v.observe(move |event| inner.borrow_mut().push((event.index0(), event.index1())));
		quick_sort(&mut v);
		assert_eq!(v.to_vec(), vec![7, 7, 7]);
		assert!(
			events.borrow().iter().any(|(i, j)| i == j),
			"collecting an equal element already in place must still fire"
		);
	}

	#[test]
	fn events_are_true_exchanges() {
		let mut rng = StdRng::seed_from_u64(17);
		let input: Vec<i32> = (0..200).map(|_| rng.random()).collect();
		let mut v = SortVec::from(input.clone());
		let events = Rc::new(RefCell::new(Vec::new()));
		let inner = events.clone();
		v.observe(move |event| inner.borrow_mut().push((event.index0(), event.index1())));
		quick_sort(&mut v);
		// Replaying the event stream as plain swaps reproduces the sort.
		let mut replay = input;
		for &(i, j) in events.borrow().iter() {
			replay.swap(i, j);
		}
		assert_eq!(replay, v.to_vec());
	}
}
