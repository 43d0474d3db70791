//! Setup command - validate or rebuild the word store

use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::config::Settings;
use crate::storage::{Reconcile, WordStore};
use crate::ui;

pub fn run(settings: &Settings) -> Result<()> {
	let start = Instant::now();
	ui::info(&format!("Embeddings: {}", settings.store.embedding_file.display()));
	ui::info(&format!("Database: {}", settings.store.db_dir.display()));

	let (store, outcome) = WordStore::open_reconciled(&settings.store)?;

	match outcome {
		Reconcile::Consistent { size } => {
			ui::success(&format!("Store is consistent ({} words)", size));
		}
		Reconcile::Rebuilt { previous, size, batches } => {
			ui::success(&format!(
				"Rebuilt store: {} → {} words in {} batches",
				previous, size, batches
			));
		}
	}

	ui::header("Store");
	println!("  {} {}", "Collection:".bright_blue(), store.collection().name());
	println!("  {} {}", "Words:".bright_blue(), store.size());
	if let Some(dim) = store.dim() {
		println!("  {} {}", "Dimensions:".bright_blue(), dim);
	}
	println!(
		"  {} {}",
		"Created:".bright_blue(),
		store.collection().created().format("%Y-%m-%d %H:%M:%S UTC")
	);
	println!("  {} {:.2}s", "Duration:".bright_blue(), start.elapsed().as_secs_f32());
	println!();

	Ok(())
}
