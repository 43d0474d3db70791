//! Session report shared by `play` and `solve`

use anyhow::Result;
use colored::Colorize;

use crate::config::Settings;
use crate::game::{evaluate, Evaluation, Session};
use crate::storage::WordStore;
use crate::ui::{self, render};

/// Evaluate the session and print words, equation, neighbors, rank and progress
pub fn show(session: &Session, store: &WordStore, settings: &Settings, display: usize) -> Result<Evaluation> {
	let eval = evaluate(session, store, settings, display)?;

	ui::header("Session");
	println!("  {} {}", "Start:".bright_blue(), session.start().bright_cyan().bold());
	println!("  {} {}", "Goal:".bright_blue(), session.goal().bright_cyan().bold());
	render::print_words(session);
	println!("  {} {}", "Equation:".bright_blue(), render::equation(session));

	ui::header("Current neighbours");
	render::print_neighbors(&eval.nearest);
	println!();
	println!(
		"  {}",
		render::rank_line(session.goal(), eval.rank, settings.search_width).magenta()
	);
	println!("  {}", render::progress_bar(eval.progress));
	println!("  {}", render::win_condition(session.goal()).dimmed());

	if eval.is_solved() {
		println!();
		ui::success("Success!");
	}

	Ok(eval)
}
