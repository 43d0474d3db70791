// Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use wordmaze::config::StoreSettings;
use wordmaze::storage::WordStore;

pub const VOCAB: &str = "\
dog 1.0 0.0 0.0 0.0
cat 0.0 1.0 0.0 0.0
huge 0.0 0.0 1.0 0.0
whale 1.0 0.0 1.0 0.0
tiny 0.0 0.0 -1.0 0.1
fish 0.2 0.1 0.3 1.0
king 0.5 0.5 0.0 0.5
queen 0.5 0.5 0.5 0.5
";

/// Fresh temporary directory, removed when the fixture drops
pub struct Fixture {
	tmp: TempDir,
}

impl Fixture {
	pub fn new(name: &str) -> Self {
		let tmp = tempfile::Builder::new()
			.prefix(&format!("wordmaze-{}-", name))
			.tempdir()
			.expect("create fixture dir");
		Self { tmp }
	}

	pub fn dir(&self) -> &Path {
		self.tmp.path()
	}

	pub fn write_embeddings(&self, contents: &str) -> PathBuf {
		let path = self.dir().join("embeddings.txt");
		fs::write(&path, contents).expect("write embeddings");
		path
	}

	pub fn settings(&self, contents: &str, batch_size: usize, load_batches: usize) -> StoreSettings {
		StoreSettings {
			embedding_file: self.write_embeddings(contents),
			db_dir: self.dir().join("db"),
			collection: "Words".to_string(),
			batch_size,
			load_batches,
		}
	}

	pub fn store(&self) -> WordStore {
		WordStore::open(&self.settings(VOCAB, 4, 4)).expect("open store")
	}
}

pub fn approx_eq(a: &[f32], b: &[f32]) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
}
