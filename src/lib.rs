//! Instrumented in-place sorting: a mutable ordered container over comparable
//! elements, sortable by any of seven interchangeable algorithms, each of
//! which reports every element exchange it performs to registered observers
//! in the exact order the exchanges occur.
//!
//! A caller builds a [`SortVec`], optionally attaches [`SwapListener`]s,
//! invokes one of the `*_sort` entry points (or dispatches through
//! [`Algorithm`]), and reads the sorted sequence back out. Algorithms mutate
//! the container only through its [`exchange`](SortVec::exchange) primitive,
//! which performs the swap and then synchronously notifies every listener
//! before returning, so a visualizer, metrics collector or test harness can
//! follow a sort's progress without altering its behavior.
//!
//! # Example
//!
//! ```
//! use sort_trace::{quick_sort, SortVec};
//! use std::{cell::Cell, rc::Rc};
//!
//! let mut v = SortVec::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! let swaps = Rc::new(Cell::new(0));
//! let counter = swaps.clone();
//! v.observe(move |_| counter.set(counter.get() + 1));
//!
//! quick_sort(&mut v);
//!
//! assert_eq!(v.to_vec(), vec![1, 1, 2, 3, 4, 5, 6, 9]);
//! assert!(swaps.get() > 0);
//! ```
//!
//! # Algorithms
//!
//! | Algorithm   | Best             | Average          | Worst            | Memory   | Stable |
//! |-------------|------------------|------------------|------------------|----------|--------|
//! | [`bubble_sort`]    | *O*(*n*)     | ---              | *O*(*n*^2)       | *O*(1)   | yes    |
//! | [`insertion_sort`] | *O*(*n*)     | *O*(*n*^2)       | *O*(*n*^2)       | *O*(1)   | yes    |
//! | [`selection_sort`] | *O*(*n*^2)   | *O*(*n*^2)       | *O*(*n*^2)       | *O*(1)   | no     |
//! | [`shell_sort`]     | ---          | ---              | *O*(*n*^1.5)     | *O*(1)   | no     |
//! | [`heap_sort`]      | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(1) | no |
//! | [`merge_sort`]     | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*) | yes |
//! | [`quick_sort`]     | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*^2)   | *O*(1)   | no     |
//!
//! Each algorithm module also carries this description as a machine-readable
//! [`SortInfo`] constant for display surfaces.
//!
//! Sorting runs to completion on the calling thread; listener notifications
//! are in-line calls with no queuing or asynchronous dispatch, and the event
//! hands listeners a shared view only, so observing never mutates.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]

pub mod bubble_sort;
mod event;
pub mod heap_sort;
pub mod info;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;
pub mod shell_sort;
mod sort_vec;

pub use crate::{
	bubble_sort::bubble_sort,
	event::{ListenerId, SwapEvent, SwapListener},
	heap_sort::{heap_sort, Heap},
	info::{Complexity, SortInfo},
	insertion_sort::insertion_sort,
	merge_sort::merge_sort,
	quick_sort::quick_sort,
	selection_sort::selection_sort,
	shell_sort::shell_sort,
	sort_vec::{LengthMismatch, SortVec},
};

use core::fmt;

/// Selector over the seven algorithm variants, for callers that pick one at
/// runtime.
///
/// # Example
///
/// ```
/// use sort_trace::{Algorithm, SortVec};
///
/// for algorithm in Algorithm::ALL {
/// 	let mut v = SortVec::from(vec![2, 3, 1]);
/// 	algorithm.sort(&mut v);
/// 	assert_eq!(v.to_vec(), vec![1, 2, 3], "{algorithm}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// [`bubble_sort`].
	Bubble,
	/// [`insertion_sort`].
	Insertion,
	/// [`selection_sort`].
	Selection,
	/// [`shell_sort`].
	Shell,
	/// [`heap_sort`].
	Heap,
	/// [`merge_sort`].
	Merge,
	/// [`quick_sort`].
	Quick,
}

impl Algorithm {
	/// Every variant, in the order they appear above.
	pub const ALL: [Self; 7] = [
		Self::Bubble,
		Self::Insertion,
		Self::Selection,
		Self::Shell,
		Self::Heap,
		Self::Merge,
		Self::Quick,
	];

	/// Sorts `v` with this variant.
	///
	/// `T: Clone` is required because the merge and quicksort variants copy
	/// elements; the dedicated entry points of the other five ask for `Ord`
	/// only.
	pub fn sort<T: Ord + Clone>(self, v: &mut SortVec<T>) {
		match self {
			Self::Bubble => bubble_sort(v),
			Self::Insertion => insertion_sort(v),
			Self::Selection => selection_sort(v),
			Self::Shell => shell_sort(v),
			Self::Heap => heap_sort(v),
			Self::Merge => merge_sort(v),
			Self::Quick => quick_sort(v),
		}
	}

	/// This variant's descriptor.
	#[must_use]
	pub fn info(self) -> SortInfo {
		match self {
			Self::Bubble => bubble_sort::INFO,
			Self::Insertion => insertion_sort::INFO,
			Self::Selection => selection_sort::INFO,
			Self::Shell => shell_sort::INFO,
			Self::Heap => heap_sort::INFO,
			Self::Merge => merge_sort::INFO,
			Self::Quick => quick_sort::INFO,
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.info().name)
	}
}

#[cfg(test)]
mod test {
	use super::{merge_sort, quick_sort, Algorithm, SortVec};
	use core::cmp::Ordering;
	use quickcheck_macros::quickcheck;
	use rand::{rngs::StdRng, Rng, SeedableRng};
	use std::{cell::RefCell, rc::Rc};

	const SCRAMBLED: [i32; 21] = [
		20, 16, 7, 2, 12, 4, 15, 19, 6, 11, 3, 14, 8, 5, 18, 1, 13, 9, 10, 17, 0,
	];

	/// Value equal and ordered by `key` alone; `tag` records input position.
	#[derive(Debug, Clone, Copy)]
	struct Tagged {
		key: u8,
		tag: usize,
	}

	impl PartialEq for Tagged {
		fn eq(&self, other: &Self) -> bool {
			self.key == other.key
		}
	}

	impl Eq for Tagged {}

	impl PartialOrd for Tagged {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl Ord for Tagged {
		fn cmp(&self, other: &Self) -> Ordering {
			self.key.cmp(&other.key)
		}
	}

	fn tagged(keys: &[u8]) -> SortVec<Tagged> {
		keys.iter()
			.enumerate()
			.map(|(tag, &key)| Tagged { key, tag })
			.collect()
	}

	#[test]
	fn every_algorithm_sorts_the_scrambled_scenario() {
		for algorithm in Algorithm::ALL {
			let mut v = SortVec::from(SCRAMBLED.to_vec());
			algorithm.sort(&mut v);
			assert_eq!(v.to_vec(), (0..21).collect::<Vec<_>>(), "{algorithm}");
		}
	}

	#[test]
	fn quicksort_agrees_with_merge_sort_on_random_input() {
		let mut rng = StdRng::seed_from_u64(0x5eed);
		let input: Vec<i32> = (0..1000).map(|_| rng.random()).collect();
		let mut by_quick = SortVec::from(input.clone());
		let mut by_merge = SortVec::from(input);
		quick_sort(&mut by_quick);
		merge_sort(&mut by_merge);
		assert_eq!(by_quick.to_vec(), by_merge.to_vec());
	}

	#[quickcheck]
	fn every_algorithm_produces_a_sorted_permutation(xs: Vec<i16>) {
		let mut expected = xs.clone();
		expected.sort_unstable();
		for algorithm in Algorithm::ALL {
			let mut v = SortVec::from(xs.clone());
			algorithm.sort(&mut v);
			assert_eq!(v.to_vec(), expected, "{algorithm}");
		}
	}

	#[quickcheck]
	fn every_algorithm_is_idempotent(xs: Vec<i16>) {
		for algorithm in Algorithm::ALL {
			let mut v = SortVec::from(xs.clone());
			algorithm.sort(&mut v);
			let once = v.to_vec();
			algorithm.sort(&mut v);
			assert_eq!(v.to_vec(), once, "{algorithm}");
		}
	}

	#[quickcheck]
	fn stable_algorithms_preserve_equal_element_order(keys: Vec<u8>) {
		for algorithm in [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge] {
			let mut v = tagged(&keys);
			algorithm.sort(&mut v);
			for i in 1..v.len() {
				assert!(v[i - 1].key <= v[i].key, "{algorithm}");
				if v[i - 1].key == v[i].key {
					assert!(v[i - 1].tag < v[i].tag, "{algorithm} must be stable");
				}
			}
		}
	}

	#[quickcheck]
	fn event_indices_are_always_in_bounds(xs: Vec<u8>) {
		for algorithm in Algorithm::ALL {
			let mut v = SortVec::from(xs.clone());
			v.observe(|event| {
				assert!(event.index0() < event.as_slice().len());
				assert!(event.index1() < event.as_slice().len());
			});
			algorithm.sort(&mut v);
		}
	}

	#[quickcheck]
	fn exchange_events_replay_into_the_sorted_result(xs: Vec<u8>) {
		// Merge reports placements rather than exchanges; every other
		// algorithm's event stream is a faithful swap script.
		for algorithm in [
			Algorithm::Bubble,
			Algorithm::Insertion,
			Algorithm::Selection,
			Algorithm::Shell,
			Algorithm::Heap,
			Algorithm::Quick,
		] {
			let mut v = SortVec::from(xs.clone());
			let events = Rc::new(RefCell::new(Vec::new()));
			let inner = events.clone();
			v.observe(move |event| inner.borrow_mut().push((event.index0(), event.index1())));
			algorithm.sort(&mut v);
			let mut replay = xs.clone();
			for &(i, j) in events.borrow().iter() {
				replay.swap(i, j);
			}
			assert_eq!(replay, v.to_vec(), "{algorithm}");
		}
	}

	#[test]
	fn descriptors_match_the_stability_contract() {
		for algorithm in Algorithm::ALL {
			let stable = matches!(
				algorithm,
				Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge
			);
			assert_eq!(algorithm.info().stable, stable, "{algorithm}");
		}
	}
}
