//! Word embedding store
//!
//! Wraps the persisted `Words` collection. Every word is stored twice: as
//! itself and negated (`-word`) with the exact additive inverse vector.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::time::Instant;

use super::collection::{Client, Collection, Metric, Neighbor};
use super::source::{self, BatchReader};
use crate::config::StoreSettings;
use crate::core::Embedding;
use crate::ui;

/// What [`WordStore::validate_or_rebuild`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
	Consistent { size: usize },
	Rebuilt { previous: usize, size: usize, batches: usize },
}

pub struct WordStore {
	settings: StoreSettings,
	client: Client,
	collection: Collection,
}

impl WordStore {
	/// Open the collection and make sure it matches the source file
	pub fn open(settings: &StoreSettings) -> Result<Self> {
		let (store, _) = Self::open_reconciled(settings)?;
		Ok(store)
	}

	pub fn open_reconciled(settings: &StoreSettings) -> Result<(Self, Reconcile)> {
		let client = Client::open(&settings.db_dir)?;
		let collection = client.get_or_create_collection(&settings.collection, Metric::Cosine)?;
		let mut store = Self {
			settings: settings.clone(),
			client,
			collection,
		};
		let outcome = store.validate_or_rebuild()?;
		Ok((store, outcome))
	}

	/// Compare the collection size with the source file and rebuild the whole
	/// collection on any mismatch
	pub fn validate_or_rebuild(&mut self) -> Result<Reconcile> {
		let ideal = source::ideal_size(&self.settings)?;
		let current = self.collection.count();

		if current == ideal {
			ui::debug(&format!(
				"Word count checks out with '{}' collection of size {}",
				self.settings.collection, ideal
			));
			return Ok(Reconcile::Consistent { size: current });
		}

		ui::warn(&format!(
			"Resetting inconsistent store: {} words stored but there should be {}",
			current, ideal
		));
		self.client.delete_collection(&self.settings.collection)?;
		self.collection = self
			.client
			.create_collection(&self.settings.collection, Metric::Cosine)?;
		let batches = self.load(ideal)?;

		Ok(Reconcile::Rebuilt {
			previous: current,
			size: self.collection.count(),
			batches,
		})
	}

	/// Stream the source file and insert each batch with a single `add`.
	/// Returns the number of inserted batches; batches with only skipped
	/// lines are not inserted.
	fn load(&mut self, expected: usize) -> Result<usize> {
		let start = Instant::now();
		let mut reader = BatchReader::open(&self.settings)?;
		let mut batches = 0;

		while let Some(batch) = reader.next_batch()? {
			let mut ids = Vec::with_capacity(batch.len() * 2);
			let mut embeddings = Vec::with_capacity(batch.len() * 2);
			for entry in batch {
				let (words, vectors) = entry.with_negation();
				ids.extend(words);
				embeddings.extend(vectors);
			}
			if ids.is_empty() {
				continue;
			}

			let inserted = ids.len();
			self.collection.add(ids, embeddings)?;
			batches += 1;
			ui::info(&format!(
				"Inserted {} words. Currently at: {} / {}",
				inserted,
				self.collection.count(),
				expected
			));
		}

		ui::success(&format!(
			"Loading done: {} words in {} batches ({:.1}s)",
			self.collection.count(),
			batches,
			start.elapsed().as_secs_f32()
		));
		Ok(batches)
	}

	/// Exact key lookup, no normalization
	pub fn is_valid_word(&self, word: &str) -> bool {
		self.collection.contains(word)
	}

	/// Vectors for `words`, in the same order. Any unknown word is an error.
	pub fn get_embeddings(&self, words: &[&str]) -> Result<Vec<Embedding>> {
		let res = self.collection.get(words);
		let mapping: HashMap<&str, &Embedding> = res
			.ids
			.iter()
			.map(String::as_str)
			.zip(res.embeddings.iter())
			.collect();

		words
			.iter()
			.map(|w| match mapping.get(w) {
				Some(emb) => Ok((*emb).clone()),
				None => bail!("No embedding stored for '{}'", w),
			})
			.collect()
	}

	pub fn get_embedding(&self, word: &str) -> Result<Embedding> {
		let mut found = self.get_embeddings(&[word])?;
		Ok(found.remove(0))
	}

	/// Up to `top_k` words nearest to `vector` by cosine distance
	pub fn query_neighbors(&self, vector: &Embedding, top_k: usize) -> Vec<Neighbor> {
		self.collection.query(vector, top_k)
	}

	pub fn size(&self) -> usize {
		self.collection.count()
	}

	pub fn dim(&self) -> Option<usize> {
		self.collection.dim()
	}

	pub fn collection(&self) -> &Collection {
		&self.collection
	}
}
