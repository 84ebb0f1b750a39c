//! Descriptive per-algorithm metadata, consumed by external display code.

use core::fmt;

/// Asymptotic cost class of a sorting phase or of its auxiliary memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
	/// *O*(1).
	Constant,
	/// *O*(*n*).
	Linear,
	/// *O*(*n* log *n*).
	Linearithmic,
	/// *O*(*n*^1.5), shell sort's worst case under the gap schedule used here.
	SubQuadratic,
	/// *O*(*n*^2).
	Quadratic,
}

impl fmt::Display for Complexity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Constant => "O(1)",
			Self::Linear => "O(n)",
			Self::Linearithmic => "O(n log n)",
			Self::SubQuadratic => "O(n^1.5)",
			Self::Quadratic => "O(n^2)",
		})
	}
}

/// Static description of a sorting algorithm, independent of any live
/// container: strategy family, asymptotic cost per case, auxiliary memory
/// class and stability.
///
/// Cases the algorithm has no established bound for (shell sort's best and
/// average case under the `/2.2` gap schedule) are `None` and render as `---`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortInfo {
	/// Human-readable algorithm name.
	pub name: &'static str,
	/// Strategy family, e.g. `"Divide and conquer"`.
	pub strategy: &'static str,
	/// Best-case running time.
	pub best: Option<Complexity>,
	/// Average-case running time.
	pub average: Option<Complexity>,
	/// Worst-case running time.
	pub worst: Option<Complexity>,
	/// Auxiliary memory beyond the container itself.
	pub memory: Complexity,
	/// Whether equal elements keep their relative order.
	pub stable: bool,
}

impl fmt::Display for SortInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fn case(f: &mut fmt::Formatter<'_>, label: &str, complexity: Option<Complexity>) -> fmt::Result {
			match complexity {
				Some(complexity) => writeln!(f, "{label}: {complexity}"),
				None => writeln!(f, "{label}: ---"),
			}
		}
		writeln!(f, "{}", self.strategy)?;
		case(f, "Best Case", self.best)?;
		case(f, "Average Case", self.average)?;
		case(f, "Worst Case", self.worst)?;
		writeln!(f, "Memory Usage: {}", self.memory)?;
		f.write_str(if self.stable { "Stable" } else { "Unstable" })
	}
}

#[cfg(test)]
mod test {
	use super::{Complexity, SortInfo};

	#[test]
	fn renders_like_a_description_panel() {
		let info = SortInfo {
			name: "bubble sort",
			strategy: "Brute Force",
			best: Some(Complexity::Linear),
			average: None,
			worst: Some(Complexity::Quadratic),
			memory: Complexity::Constant,
			stable: true,
		};
		assert_eq!(
			info.to_string(),
			"Brute Force\nBest Case: O(n)\nAverage Case: ---\nWorst Case: O(n^2)\nMemory Usage: O(1)\nStable"
		);
	}
}
