//! Source embedding file reader
//!
//! Plain text, one `<word> <float> ... <float>` entry per line. Only the first
//! `batch_size * load_batches` lines are ever consumed.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::StoreSettings;
use crate::core::token::{self, is_alphanumeric};
use crate::core::Embedding;

/// Parsed source line with its 1-based line number
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEntry {
	pub line: usize,
	pub word: String,
	pub embedding: Embedding,
}

impl SourceEntry {
	/// The entry and its negation, as `(ids, vectors)`
	pub fn with_negation(self) -> ([String; 2], [Embedding; 2]) {
		let negated = -&self.embedding;
		let neg_word = token::negate(&self.word);
		([self.word, neg_word], [self.embedding, negated])
	}
}

fn open(path: &Path) -> Result<BufReader<File>> {
	let file = File::open(path).with_context(|| {
		format!(
			"Embedding file not found at {} (set --embeddings or {})",
			path.display(),
			crate::config::ENV_EMBEDDINGS
		)
	})?;
	Ok(BufReader::new(file))
}

/// Words kept from the first `line_cap` lines
fn first_words(path: &Path, line_cap: usize) -> Result<usize> {
	let reader = open(path)?;
	let mut kept = 0;
	for (idx, line) in reader.lines().take(line_cap).enumerate() {
		let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
		if line.split_whitespace().next().is_some_and(is_alphanumeric) {
			kept += 1;
		}
	}
	Ok(kept)
}

/// Expected store cardinality: every kept word plus its negation
pub fn ideal_size(settings: &StoreSettings) -> Result<usize> {
	Ok(first_words(&settings.embedding_file, settings.line_cap())? * 2)
}

/// Parse one line. `Ok(None)` for lines that are skipped.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<SourceEntry>> {
	let mut parts = line.split_whitespace();
	let Some(word) = parts.next() else {
		return Ok(None);
	};
	if !is_alphanumeric(word) {
		return Ok(None);
	}

	let values = parts
		.map(|p| p.parse::<f32>())
		.collect::<std::result::Result<Vec<f32>, _>>()
		.with_context(|| format!("Line {}: invalid vector component for '{}'", line_no, word))?;

	if values.is_empty() {
		bail!("Line {}: '{}' has no vector components", line_no, word);
	}
	if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
		bail!("Line {}: '{}' has non-finite vector component {}", line_no, word, bad);
	}

	Ok(Some(SourceEntry {
		line: line_no,
		word: word.to_string(),
		embedding: Embedding::new(values),
	}))
}

/// Streams parsed entries grouped by batches of source lines
pub struct BatchReader {
	lines: std::iter::Take<std::io::Lines<BufReader<File>>>,
	batch_size: usize,
	line_no: usize,
	dim: Option<usize>,
}

impl BatchReader {
	pub fn open(settings: &StoreSettings) -> Result<Self> {
		let reader = open(&settings.embedding_file)?;
		Ok(Self {
			lines: reader.lines().take(settings.line_cap()),
			batch_size: settings.batch_size.max(1),
			line_no: 0,
			dim: None,
		})
	}

	/// Next batch of up to `batch_size` lines, already filtered.
	/// `Ok(None)` once the line cap or the end of file is reached.
	pub fn next_batch(&mut self) -> Result<Option<Vec<SourceEntry>>> {
		let mut entries = Vec::new();
		let mut consumed = 0;

		while consumed < self.batch_size {
			let Some(line) = self.lines.next() else {
				break;
			};
			consumed += 1;
			self.line_no += 1;

			let line = line.with_context(|| format!("Failed to read line {}", self.line_no))?;
			let Some(entry) = parse_line(&line, self.line_no)? else {
				continue;
			};

			match self.dim {
				None => self.dim = Some(entry.embedding.dim()),
				Some(dim) if dim != entry.embedding.dim() => bail!(
					"Line {}: '{}' has {} components, expected {}",
					entry.line,
					entry.word,
					entry.embedding.dim(),
					dim
				),
				Some(_) => {}
			}
			entries.push(entry);
		}

		if consumed == 0 {
			Ok(None)
		} else {
			Ok(Some(entries))
		}
	}
}
