//! Goal rank and progress

use crate::core::Embedding;
use crate::storage::WordStore;

/// 1-based position of `goal` among the `search_width` nearest neighbors of
/// `sum`. `None` only means the goal is outside the searched window.
pub fn goal_rank(store: &WordStore, sum: &Embedding, goal: &str, search_width: usize) -> Option<usize> {
	store
		.query_neighbors(sum, search_width)
		.iter()
		.position(|n| n.id == goal)
		.map(|idx| idx + 1)
}

/// `1 - (rank / size)^exponent`, clamped to [0, 1]. An unknown rank counts as
/// the full store size.
pub fn progress(goal_rank: Option<usize>, store_size: usize, exponent: f64) -> f64 {
	if store_size == 0 {
		return 0.0;
	}
	let rank = goal_rank.unwrap_or(store_size).min(store_size) as f64;
	let value = 1.0 - (rank / store_size as f64).powf(exponent);
	value.clamp(0.0, 1.0)
}

/// The goal is the nearest neighbor of the sum
pub fn is_solved(goal_rank: Option<usize>) -> bool {
	goal_rank == Some(1)
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st ...
pub fn ordinal(n: usize) -> String {
	let suffix = match (n % 10, n % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th",
	};
	format!("{}{}", n, suffix)
}
