//! Play command - interactive session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use super::{report, seed_session};
use crate::config::{Settings, HINT_COUNT, NEIGHBOR_DISPLAY};
use crate::game::{accept_guess, hints, signed_embeddings, vector_sum, Guess, Session};
use crate::processing::project;
use crate::storage::WordStore;
use crate::ui::{self, render};

const CURRENT_POSITION: &str = "Current Position";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	Empty,
	Guess(String),
	Start(String),
	Goal(String),
	Reset,
	Undo,
	Hints(usize),
	Plot,
	Help,
	Quit,
	Unknown(String),
}

impl Input {
	pub fn parse(line: &str) -> Self {
		let line = line.trim();
		let Some(command) = line.strip_prefix(':') else {
			return if line.is_empty() {
				Input::Empty
			} else {
				Input::Guess(line.to_string())
			};
		};

		let mut parts = command.split_whitespace();
		let name = parts.next().unwrap_or("").to_lowercase();
		let arg = parts.next().unwrap_or("").to_string();

		match name.as_str() {
			"start" => Input::Start(arg),
			"goal" => Input::Goal(arg),
			"reset" => Input::Reset,
			"undo" => Input::Undo,
			"hints" | "hint" => match arg.parse() {
				Ok(n) => Input::Hints(n),
				Err(_) => Input::Hints(HINT_COUNT),
			},
			"plot" => Input::Plot,
			"help" | "h" => Input::Help,
			"quit" | "exit" | "q" => Input::Quit,
			_ => Input::Unknown(line.to_string()),
		}
	}
}

pub fn run(settings: &Settings) -> Result<()> {
	ui::print_logo();
	println!();

	let store = WordStore::open(&settings.store)?;
	let mut session = seed_session(settings, &store)?;

	ui::info(&format!("Loaded {} words", store.size()));
	ui::info("Type a word to add it, '-word' to subtract it, ':help' for commands");

	report::show(&session, &store, settings, NEIGHBOR_DISPLAY)?;

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		println!();
		print!("{} ", "wordmaze>".bright_blue().bold());
		io::stdout().flush()?;

		let Some(line) = lines.next() else {
			break;
		};
		let input = Input::parse(&line?);

		match input {
			Input::Empty => continue,
			Input::Quit => {
				ui::info("Goodbye!");
				break;
			}
			Input::Help => {
				show_help();
				continue;
			}
			Input::Unknown(cmd) => {
				ui::error(&format!("Unknown command: {}", cmd));
				continue;
			}
			Input::Hints(n) => {
				if let Err(e) = show_hints(&session, &store, n) {
					ui::error(&format!("Hints failed: {}", e));
				}
				continue;
			}
			Input::Plot => {
				if let Err(e) = show_projection(&session, &store) {
					ui::error(&format!("Projection failed: {}", e));
				}
				continue;
			}
			Input::Start(word) => {
				let word = word.to_lowercase();
				match check_anchor(&store, "start", &word) {
					Some(msg) => ui::error(&msg),
					None => session.set_start(&word),
				}
			}
			Input::Goal(word) => {
				let word = word.to_lowercase();
				match check_anchor(&store, "goal", &word) {
					Some(msg) => ui::error(&msg),
					None => session.set_goal(&word),
				}
			}
			Input::Reset => session.clear(),
			Input::Undo => {
				if let Some(word) = session.undo() {
					ui::debug(&format!("Removed {}", word));
				}
			}
			Input::Guess(raw) => match accept_guess(&mut session, &store, &raw) {
				Ok(Guess::Cancelled(word)) => ui::info(&format!("Cancelled {}", render::colored_word(&word))),
				Ok(_) => {}
				Err(rejection) => {
					ui::error(&rejection.to_string());
					continue;
				}
			},
		}

		if let Err(e) = report::show(&session, &store, settings, NEIGHBOR_DISPLAY) {
			ui::error(&format!("Evaluation failed: {}", e));
		}
	}

	Ok(())
}

/// Error message if `word` cannot become the start or goal word
fn check_anchor(store: &WordStore, role: &str, word: &str) -> Option<String> {
	if word.is_empty() {
		Some(format!("Cannot set empty text for {}", role))
	} else if !store.is_valid_word(word) {
		Some(format!("{} is not in the database", word))
	} else {
		None
	}
}

fn show_hints(session: &Session, store: &WordStore, top: usize) -> Result<()> {
	let sum = vector_sum(session, store)?;
	let found = hints(session, store, &sum, top)?;

	ui::header(&format!("Towards {}", session.goal()));
	if found.is_empty() {
		ui::warn("No hints available");
	} else {
		render::print_neighbors(&found);
	}
	Ok(())
}

fn show_projection(session: &Session, store: &WordStore) -> Result<()> {
	let mut labels: Vec<String> = session.words().to_vec();
	let mut vectors = signed_embeddings(session, store)?;

	labels.push(session.goal().to_string());
	vectors.push(store.get_embedding(session.goal())?);

	labels.push(CURRENT_POSITION.to_string());
	vectors.push(vector_sum(session, store)?);

	let points = project(&labels, &vectors)?;

	ui::header("Embeddings projected to 2D");
	for p in points {
		let label = if p.label == session.goal() {
			p.label.bright_cyan().bold()
		} else if p.label == CURRENT_POSITION {
			p.label.magenta().bold()
		} else {
			render::colored_word(&p.label)
		};
		println!("  {:>9.3} {:>9.3}  {}", p.x, p.y, label);
	}
	Ok(())
}

fn show_help() {
	println!("{}", "Commands:".bright_blue().bold());
	println!("  {}          Add a word", "<word>".dimmed());
	println!("  {}         Subtract a word (cancels <word> if already added)", "-<word>".dimmed());
	println!("  {}    Change the start word", ":start <word>".dimmed());
	println!("  {}     Change the goal word", ":goal <word>".dimmed());
	println!("  {}          Back to the start word", ":reset".dimmed());
	println!("  {}           Remove the last guess", ":undo".dimmed());
	println!("  {}      Words pointing towards the goal", ":hints [n]".dimmed());
	println!("  {}           Project the session to 2D", ":plot".dimmed());
	println!("  {}           Exit", ":quit".dimmed());
}
