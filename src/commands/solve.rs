//! Solve command - evaluate a fixed list of guesses

use anyhow::Result;

use super::{report, seed_session};
use crate::config::Settings;
use crate::storage::WordStore;
use crate::ui;

pub fn run(settings: &Settings, guesses: &[String], limit: usize) -> Result<()> {
	let store = WordStore::open(&settings.store)?;

	let mut settings = settings.clone();
	settings.guesses = guesses.to_vec();

	let session = seed_session(&settings, &store)?;
	ui::debug(&format!("Accepted {} of {} guesses", session.guessed_words().len(), guesses.len()));

	report::show(&session, &store, &settings, limit)?;
	println!();
	Ok(())
}
