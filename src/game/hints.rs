//! Words pointing from the current sum towards the goal

use anyhow::Result;

use super::Session;
use crate::core::token::opposite;
use crate::core::Embedding;
use crate::storage::{Neighbor, WordStore};

/// Nearest neighbors of `goal - sum`, skipping words the session would reject
/// as already present or as the goal
pub fn hints(session: &Session, store: &WordStore, sum: &Embedding, top: usize) -> Result<Vec<Neighbor>> {
	let goal = store.get_embedding(session.goal())?;
	let direction = &goal - sum;

	let goal_opposite = opposite(session.goal());
	// Over-fetch so filtering still leaves `top` results.
	let window = session
		.words()
		.len()
		.saturating_mul(2)
		.saturating_add(2)
		.saturating_add(top);

	Ok(store
		.query_neighbors(&direction, window)
		.into_iter()
		.filter(|n| {
			!session.contains(&n.id)
				&& !session.contains(&opposite(&n.id))
				&& n.id != session.goal()
				&& n.id != goal_opposite
		})
		.take(top)
		.collect())
}
