//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod neighbors;
pub mod play;
pub mod report;
pub mod setup;
pub mod solve;

use anyhow::{bail, Result};

use crate::config::Settings;
use crate::game::{accept_guess, Session};
use crate::storage::WordStore;
use crate::ui;

/// Session at the configured start and goal, with the configured guesses
/// applied one by one. Rejected guesses are reported and skipped.
pub fn seed_session(settings: &Settings, store: &WordStore) -> Result<Session> {
	for (role, word) in [("start", &settings.start), ("goal", &settings.goal)] {
		if !store.is_valid_word(word) {
			bail!("{} word '{}' is not in the database", role, word);
		}
	}

	let mut session = Session::new(&settings.start, &settings.goal);
	for guess in &settings.guesses {
		if let Err(rejection) = accept_guess(&mut session, store, guess) {
			ui::warn(&rejection.to_string());
		}
	}
	Ok(session)
}
