//! Session rendering: word lists, equations, progress bars

use colored::*;

use crate::core::token::{base_form, is_negated};
use crate::game::{ordinal, Session};
use crate::storage::Neighbor;

const BAR_WIDTH: usize = 30;

/// Negated words red, positive words green
pub fn colored_word(token: &str) -> ColoredString {
	if is_negated(token) {
		token.bright_red().bold()
	} else {
		token.bright_green().bold()
	}
}

/// `goal = start +a -b ...`
pub fn equation(session: &Session) -> String {
	let mut out = format!("{} = {}", session.goal(), session.start());
	for word in session.guessed_words() {
		if is_negated(word) {
			out.push_str(&format!(" {}", format!("-{}", base_form(word)).red()));
		} else {
			out.push_str(&format!(" {}", format!("+{}", word).green()));
		}
	}
	out
}

/// Plain progress bar, e.g. `[#######-------]  48.3%`
pub fn progress_bar(progress: f64) -> String {
	let progress = progress.clamp(0.0, 1.0);
	let filled = (progress * BAR_WIDTH as f64).round() as usize;
	format!(
		"[{}{}] {:>5.1}%",
		"█".repeat(filled),
		"░".repeat(BAR_WIDTH - filled),
		progress * 100.0
	)
}

pub fn print_words(session: &Session) {
	let words: Vec<String> = session
		.words()
		.iter()
		.map(|w| colored_word(w).to_string())
		.collect();
	println!("  {} {}", "Words:".bright_blue(), words.join(" "));
}

pub fn print_neighbors(neighbors: &[Neighbor]) {
	for (i, n) in neighbors.iter().enumerate() {
		println!(
			"  {} {} {}",
			format!("{:2}.", i + 1).bright_blue().bold(),
			colored_word(&n.id),
			format!("{:.3}", n.distance).dimmed()
		);
	}
}

pub fn rank_line(goal: &str, rank: Option<usize>, search_width: usize) -> String {
	match rank {
		Some(r) => format!(
			"'{}' is currently the {} closest embedding to your combined guess",
			goal,
			ordinal(r)
		),
		None => format!("{} is not among the closest {} embeddings", goal, search_width),
	}
}

/// Shown under the progress bar: the bar stays just short of full at rank 1
pub fn win_condition(goal: &str) -> String {
	format!("You win when '{}' is the 1st closest embedding", goal)
}
