//! Guess evaluation and the running vector sum

use anyhow::{Context, Result};
use std::fmt;

use super::{rank, Session};
use crate::config::Settings;
use crate::core::token::{base_form, is_negated, normalize, opposite};
use crate::core::Embedding;
use crate::storage::{Neighbor, WordStore};

/// Accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
	/// Empty input, nothing happened
	Ignored,
	Added(String),
	/// The opposite of an earlier guess was removed instead of stacking both
	Cancelled(String),
}

/// Rejected guess, session left unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
	NotAWord(String),
	AlreadyAdded(String),
	StartWord(String),
	GoalWord(String),
}

impl fmt::Display for Rejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rejection::NotAWord(t) => write!(f, "{} is not a valid word", t),
			Rejection::AlreadyAdded(t) => write!(f, "{} is already added", t),
			Rejection::StartWord(s) => write!(f, "You cannot remove starting word '{}'", s),
			Rejection::GoalWord(g) => write!(f, "You cannot add or remove the goal word '{}'", g),
		}
	}
}

impl std::error::Error for Rejection {}

/// Apply one raw input to the session. Rules are checked in order and the
/// first match wins.
pub fn accept_guess(session: &mut Session, store: &WordStore, raw: &str) -> Result<Guess, Rejection> {
	if raw.is_empty() {
		return Ok(Guess::Ignored);
	}

	let token = normalize(raw);
	let opposite_form = opposite(&token);

	if !store.is_valid_word(base_form(&token)) {
		return Err(Rejection::NotAWord(token));
	}
	if session.contains(&token) {
		return Err(Rejection::AlreadyAdded(token));
	}
	if session.contains(&opposite_form) && opposite_form != session.start() {
		session.remove(&opposite_form);
		return Ok(Guess::Cancelled(opposite_form));
	}
	if opposite_form == session.start() {
		return Err(Rejection::StartWord(session.start().to_string()));
	}
	if token == session.goal() || opposite_form == session.goal() {
		return Err(Rejection::GoalWord(session.goal().to_string()));
	}

	session.add_word(&token);
	Ok(Guess::Added(token))
}

/// Signed vector of every session word
pub fn signed_embeddings(session: &Session, store: &WordStore) -> Result<Vec<Embedding>> {
	let bases: Vec<&str> = session.words().iter().map(|w| base_form(w)).collect();
	let embeddings = store.get_embeddings(&bases)?;

	Ok(session
		.words()
		.iter()
		.zip(embeddings)
		.map(|(word, emb)| if is_negated(word) { -emb } else { emb })
		.collect())
}

/// Sum of the signed vectors of every session word
pub fn vector_sum(session: &Session, store: &WordStore) -> Result<Embedding> {
	let embeddings = signed_embeddings(session, store)?;
	Embedding::sum(&embeddings).context("Session has no words")
}

/// Outcome of one evaluation pass over a session
#[derive(Debug, Clone)]
pub struct Evaluation {
	pub sum: Embedding,
	/// Nearest neighbors of the sum, truncated for display
	pub nearest: Vec<Neighbor>,
	pub rank: Option<usize>,
	pub progress: f64,
}

impl Evaluation {
	pub fn is_solved(&self) -> bool {
		rank::is_solved(self.rank)
	}
}

/// Sum, neighbors, goal rank and progress with a single neighbor query
pub fn evaluate(session: &Session, store: &WordStore, settings: &Settings, display: usize) -> Result<Evaluation> {
	let sum = vector_sum(session, store)?;
	let mut nearest = store.query_neighbors(&sum, settings.search_width.max(display));

	let rank = nearest
		.iter()
		.take(settings.search_width)
		.position(|n| n.id == session.goal())
		.map(|idx| idx + 1);
	let progress = rank::progress(rank, store.size(), settings.progress_exponent);

	nearest.truncate(display);
	Ok(Evaluation {
		sum,
		nearest,
		rank,
		progress,
	})
}
