//! Neighbors command - closest words to a single word

use anyhow::{bail, Result};

use crate::config::Settings;
use crate::core::token::normalize;
use crate::storage::WordStore;
use crate::ui::{self, render};

pub fn run(settings: &Settings, word: &str, limit: usize) -> Result<()> {
	let store = WordStore::open(&settings.store)?;

	let token = normalize(word);
	if !store.is_valid_word(&token) {
		bail!("'{}' is not in the database", token);
	}

	let embedding = store.get_embedding(&token)?;
	// The word itself is always its own nearest neighbor
	let neighbors: Vec<_> = store
		.query_neighbors(&embedding, limit.saturating_add(1))
		.into_iter()
		.filter(|n| n.id != token)
		.take(limit)
		.collect();

	ui::header(&format!("Closest to {}", render::colored_word(&token)));
	render::print_neighbors(&neighbors);
	println!();
	Ok(())
}
