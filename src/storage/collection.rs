//! Persisted vector collection
//!
//! Each collection lives in a single MessagePack file under the client
//! directory. Every write replaces the file atomically.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::COLLECTION_EXT;
use crate::core::embedding::cosine_similarity;
use crate::core::Embedding;
use crate::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
	Cosine,
}

/// Query hit, nearest first
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
	pub id: String,
	pub distance: f32,
}

/// Result of [`Collection::get`]
#[derive(Debug, Default)]
pub struct GetResult {
	pub ids: Vec<String>,
	pub embeddings: Vec<Embedding>,
}

// Field order is the on-disk layout; keep both structs in sync.
#[derive(Debug, Deserialize)]
struct CollectionFile {
	version: String,
	name: String,
	metric: Metric,
	created: DateTime<Utc>,
	dim: Option<usize>,
	ids: Vec<String>,
	vectors: Vec<Embedding>,
}

#[derive(Serialize)]
struct CollectionFileRef<'a> {
	version: &'a str,
	name: &'a str,
	metric: Metric,
	created: DateTime<Utc>,
	dim: Option<usize>,
	ids: &'a [String],
	vectors: &'a [Embedding],
}

/// Handle on a directory of collections
#[derive(Debug, Clone)]
pub struct Client {
	root: PathBuf,
}

impl Client {
	pub fn open(root: &Path) -> Result<Self> {
		fs::create_dir_all(root)
			.with_context(|| format!("Failed to create database directory {}", root.display()))?;
		Ok(Self { root: root.to_path_buf() })
	}

	fn path_for(&self, name: &str) -> PathBuf {
		self.root.join(format!("{}.{}", name, COLLECTION_EXT))
	}

	pub fn get_or_create_collection(&self, name: &str, metric: Metric) -> Result<Collection> {
		let path = self.path_for(name);
		if !path.exists() {
			return self.create_collection(name, metric);
		}

		match Collection::load(&path) {
			Ok(collection) => Ok(collection),
			Err(e) => {
				ui::warn(&format!("Collection '{}' is unreadable, starting empty: {:#}", name, e));
				self.create_collection(name, metric)
			}
		}
	}

	pub fn create_collection(&self, name: &str, metric: Metric) -> Result<Collection> {
		let collection = Collection {
			path: self.path_for(name),
			name: name.to_string(),
			metric,
			created: Utc::now(),
			dim: None,
			ids: Vec::new(),
			vectors: Vec::new(),
			index: HashMap::new(),
		};
		collection.save()?;
		ui::debug(&format!("Created collection '{}'", name));
		Ok(collection)
	}

	/// Deleting a collection that does not exist is not an error
	pub fn delete_collection(&self, name: &str) -> Result<()> {
		let path = self.path_for(name);
		if path.exists() {
			fs::remove_file(&path)
				.with_context(|| format!("Failed to delete collection {}", path.display()))?;
			ui::debug(&format!("Deleted collection '{}'", name));
		}
		Ok(())
	}
}

#[derive(Debug)]
pub struct Collection {
	path: PathBuf,
	name: String,
	metric: Metric,
	created: DateTime<Utc>,
	dim: Option<usize>,
	ids: Vec<String>,
	vectors: Vec<Embedding>,
	index: HashMap<String, usize>,
}

impl Collection {
	fn load(path: &Path) -> Result<Self> {
		let bytes = fs::read(path).context("Failed to read collection")?;
		let file: CollectionFile =
			rmp_serde::from_slice(&bytes).context("Failed to deserialize collection")?;

		if file.ids.len() != file.vectors.len() {
			bail!("{} ids but {} vectors", file.ids.len(), file.vectors.len());
		}
		if file.version != VERSION {
			ui::debug(&format!("Collection written by v{}, running v{}", file.version, VERSION));
		}

		let index = file
			.ids
			.iter()
			.enumerate()
			.map(|(i, id)| (id.clone(), i))
			.collect();

		Ok(Self {
			path: path.to_path_buf(),
			name: file.name,
			metric: file.metric,
			created: file.created,
			dim: file.dim,
			ids: file.ids,
			vectors: file.vectors,
			index,
		})
	}

	fn save(&self) -> Result<()> {
		let file = CollectionFileRef {
			version: VERSION,
			name: &self.name,
			metric: self.metric,
			created: self.created,
			dim: self.dim,
			ids: &self.ids,
			vectors: &self.vectors,
		};

		let bytes = rmp_serde::to_vec(&file).context("Failed to serialize collection")?;
		let tmp = self.path.with_extension(format!("{}.tmp", COLLECTION_EXT));
		fs::write(&tmp, bytes).context("Failed to write collection")?;
		fs::rename(&tmp, &self.path).context("Failed to replace collection")?;
		Ok(())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn metric(&self) -> Metric {
		self.metric
	}

	pub fn created(&self) -> DateTime<Utc> {
		self.created
	}

	pub fn dim(&self) -> Option<usize> {
		self.dim
	}

	pub fn count(&self) -> usize {
		self.ids.len()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Bulk insert, persisted in a single write. Nothing is inserted if any
	/// id is a duplicate or any vector has the wrong dimensionality.
	pub fn add(&mut self, ids: Vec<String>, embeddings: Vec<Embedding>) -> Result<()> {
		if ids.len() != embeddings.len() {
			bail!("add: {} ids but {} embeddings", ids.len(), embeddings.len());
		}
		if ids.is_empty() {
			return Ok(());
		}

		let dim = self.dim.unwrap_or(embeddings[0].dim());
		let mut seen = HashSet::with_capacity(ids.len());
		for (id, emb) in ids.iter().zip(embeddings.iter()) {
			if self.index.contains_key(id) || !seen.insert(id.as_str()) {
				bail!("add: duplicate id '{}' in collection '{}'", id, self.name);
			}
			if emb.dim() != dim {
				bail!("add: '{}' has dimension {}, collection uses {}", id, emb.dim(), dim);
			}
		}

		let start = self.ids.len();
		for (offset, id) in ids.iter().enumerate() {
			self.index.insert(id.clone(), start + offset);
		}
		self.ids.extend(ids);
		self.vectors.extend(embeddings);
		self.dim = Some(dim);

		if let Err(e) = self.save() {
			self.rollback(start);
			return Err(e);
		}
		Ok(())
	}

	fn rollback(&mut self, len: usize) {
		for id in self.ids.drain(len..) {
			self.index.remove(&id);
		}
		self.vectors.truncate(len);
		if self.ids.is_empty() {
			self.dim = None;
		}
	}

	/// Exact-key fetch. Unknown ids are left out; order follows storage order.
	pub fn get(&self, ids: &[&str]) -> GetResult {
		let mut positions: Vec<usize> = ids
			.iter()
			.filter_map(|id| self.index.get(*id).copied())
			.collect::<HashSet<_>>()
			.into_iter()
			.collect();
		positions.sort_unstable();

		GetResult {
			ids: positions.iter().map(|&i| self.ids[i].clone()).collect(),
			embeddings: positions.iter().map(|&i| self.vectors[i].clone()).collect(),
		}
	}

	/// Up to `top_k` entries nearest to `query`, nearest first
	pub fn query(&self, query: &Embedding, top_k: usize) -> Vec<Neighbor> {
		if top_k == 0 || self.ids.is_empty() {
			return Vec::new();
		}

		let q = query.as_slice();
		let mut scored: Vec<(usize, f32)> = self
			.vectors
			.par_iter()
			.enumerate()
			.map(|(i, v)| (i, 1.0 - cosine_similarity(q, v.as_slice())))
			.collect();

		let by_distance = |a: &(usize, f32), b: &(usize, f32)| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0));

		if top_k < scored.len() {
			scored.select_nth_unstable_by(top_k - 1, by_distance);
			scored.truncate(top_k);
		}
		scored.sort_by(by_distance);

		scored
			.into_iter()
			.map(|(i, distance)| Neighbor {
				id: self.ids[i].clone(),
				distance,
			})
			.collect()
	}
}
