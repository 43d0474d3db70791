//! Application configuration and constants

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

// === Source File ===
pub const EMBEDDING_FILE: &str = "glove.6B.50d.txt";
pub const BATCH_SIZE: usize = 8192;
pub const LOAD_N_BATCHES: usize = 2;

// === Storage ===
pub const DB_DIR: &str = "./db";
pub const WORD_COLLECTION: &str = "Words";
pub const COLLECTION_EXT: &str = "msgpack";

// === Scoring ===
pub const SEARCH_WIDTH: usize = 5000;
pub const PROGRESS_EXPONENT: f64 = 1.0 / 3.0;

// === Display ===
pub const NEIGHBOR_DISPLAY: usize = 5;
pub const HINT_COUNT: usize = 10;

// === Environment ===
pub const ENV_EMBEDDINGS: &str = "WORDMAZE_EMBEDDINGS";
pub const ENV_DB_DIR: &str = "WORDMAZE_DB_DIR";

/// Starting position of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
	pub name: &'static str,
	pub start: &'static str,
	pub goal: &'static str,
	pub guesses: &'static [&'static str],
}

pub const PRESETS: &[Preset] = &[
	Preset {
		name: "whale",
		start: "dog",
		goal: "whale",
		guesses: &["-cat", "huge", "dolphin"],
	},
	Preset {
		name: "royal",
		start: "king",
		goal: "queen",
		guesses: &[],
	},
];

pub const DEFAULT_PRESET: &str = "whale";

pub fn preset(name: &str) -> Option<&'static Preset> {
	PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Store loading parameters
#[derive(Debug, Clone)]
pub struct StoreSettings {
	pub embedding_file: PathBuf,
	pub db_dir: PathBuf,
	pub collection: String,
	pub batch_size: usize,
	pub load_batches: usize,
}

impl Default for StoreSettings {
	fn default() -> Self {
		Self {
			embedding_file: PathBuf::from(EMBEDDING_FILE),
			db_dir: PathBuf::from(DB_DIR),
			collection: WORD_COLLECTION.to_string(),
			batch_size: BATCH_SIZE,
			load_batches: LOAD_N_BATCHES,
		}
	}
}

impl StoreSettings {
	/// Maximum number of source lines ever read
	pub fn line_cap(&self) -> usize {
		self.batch_size.saturating_mul(self.load_batches)
	}
}

/// Fully resolved settings
#[derive(Debug, Clone)]
pub struct Settings {
	pub store: StoreSettings,
	pub search_width: usize,
	pub progress_exponent: f64,
	pub start: String,
	pub goal: String,
	pub guesses: Vec<String>,
}

impl Default for Settings {
	fn default() -> Self {
		let mut settings = Self {
			store: StoreSettings::default(),
			search_width: SEARCH_WIDTH,
			progress_exponent: PROGRESS_EXPONENT,
			start: String::new(),
			goal: String::new(),
			guesses: Vec::new(),
		};
		if let Some(p) = preset(DEFAULT_PRESET) {
			settings.apply_preset(p);
		}
		settings
	}
}

/// Optional JSON config file; every field may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
	pub embedding_file: Option<PathBuf>,
	pub db_dir: Option<PathBuf>,
	pub collection: Option<String>,
	pub batch_size: Option<usize>,
	pub load_batches: Option<usize>,
	pub search_width: Option<usize>,
	pub progress_exponent: Option<f64>,
	pub preset: Option<String>,
	pub start: Option<String>,
	pub goal: Option<String>,
	pub guesses: Option<Vec<String>>,
}

impl FileConfig {
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path)
			.with_context(|| format!("Failed to read config {}", path.display()))?;
		serde_json::from_str(&text)
			.with_context(|| format!("Failed to parse config {}", path.display()))
	}
}

/// Command line overrides, highest priority
#[derive(Debug, Default, Clone)]
pub struct Overrides {
	pub config: Option<PathBuf>,
	pub embedding_file: Option<PathBuf>,
	pub db_dir: Option<PathBuf>,
	pub preset: Option<String>,
	pub start: Option<String>,
	pub goal: Option<String>,
}

impl Settings {
	/// Defaults, then config file, then environment, then command line
	pub fn resolve(overrides: &Overrides) -> Result<Self> {
		let mut settings = Self::default();

		if let Some(path) = &overrides.config {
			crate::ui::debug(&format!("Using config: {}", path.display()));
			settings.apply_file(FileConfig::load(path)?)?;
		}

		if let Ok(path) = std::env::var(ENV_EMBEDDINGS) {
			crate::ui::debug(&format!("Using {}: {}", ENV_EMBEDDINGS, path));
			settings.store.embedding_file = PathBuf::from(path);
		}
		if let Ok(path) = std::env::var(ENV_DB_DIR) {
			crate::ui::debug(&format!("Using {}: {}", ENV_DB_DIR, path));
			settings.store.db_dir = PathBuf::from(path);
		}

		if let Some(name) = &overrides.preset {
			settings.apply_preset(lookup_preset(name)?);
		}
		if let Some(path) = &overrides.embedding_file {
			settings.store.embedding_file = path.clone();
		}
		if let Some(path) = &overrides.db_dir {
			settings.store.db_dir = path.clone();
		}
		if let Some(start) = &overrides.start {
			settings.start = start.to_lowercase();
			settings.guesses.clear();
		}
		if let Some(goal) = &overrides.goal {
			settings.goal = goal.to_lowercase();
			settings.guesses.clear();
		}

		settings.validate()?;
		Ok(settings)
	}

	pub fn apply_preset(&mut self, preset: &Preset) {
		self.start = preset.start.to_string();
		self.goal = preset.goal.to_string();
		self.guesses = preset.guesses.iter().map(|g| g.to_string()).collect();
	}

	pub fn apply_file(&mut self, file: FileConfig) -> Result<()> {
		if let Some(name) = &file.preset {
			self.apply_preset(lookup_preset(name)?);
		}
		if let Some(v) = file.embedding_file {
			self.store.embedding_file = v;
		}
		if let Some(v) = file.db_dir {
			self.store.db_dir = v;
		}
		if let Some(v) = file.collection {
			self.store.collection = v;
		}
		if let Some(v) = file.batch_size {
			self.store.batch_size = v;
		}
		if let Some(v) = file.load_batches {
			self.store.load_batches = v;
		}
		if let Some(v) = file.search_width {
			self.search_width = v;
		}
		if let Some(v) = file.progress_exponent {
			self.progress_exponent = v;
		}
		if let Some(v) = file.start {
			self.start = v.to_lowercase();
		}
		if let Some(v) = file.goal {
			self.goal = v.to_lowercase();
		}
		if let Some(v) = file.guesses {
			self.guesses = v;
		}
		Ok(())
	}

	fn validate(&self) -> Result<()> {
		if self.store.batch_size == 0 {
			bail!("batch_size must be at least 1");
		}
		if self.search_width == 0 {
			bail!("search_width must be at least 1");
		}
		if !(self.progress_exponent > 0.0 && self.progress_exponent.is_finite()) {
			bail!("progress_exponent must be a positive number, got {}", self.progress_exponent);
		}
		if self.start.is_empty() || self.goal.is_empty() {
			bail!("start and goal words must not be empty");
		}
		Ok(())
	}
}

fn lookup_preset(name: &str) -> Result<&'static Preset> {
	match preset(name) {
		Some(p) => Ok(p),
		None => {
			let known: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
			bail!("Unknown preset '{}' (available: {})", name, known.join(", "))
		}
	}
}
