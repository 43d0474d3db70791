use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Overrides, NEIGHBOR_DISPLAY};

fn styled(color: AnsiColor) -> Style {
	Style::new().fg_color(Some(Color::Ansi(color)))
}

fn styles() -> Styles {
	Styles::styled()
		.header(styled(AnsiColor::Blue).bold())
		.usage(styled(AnsiColor::Blue).bold())
		.literal(styled(AnsiColor::Blue))
		.placeholder(styled(AnsiColor::Yellow))
		.valid(styled(AnsiColor::Blue))
		.invalid(styled(AnsiColor::Red))
}

#[derive(Parser, Debug)]
#[command(
	name = "wordmaze",
	author,
	version,
	about = "Steer a sum of word vectors towards a goal word",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {wm} {setup}                          {setup_desc}
  {wm} {play}   {play_args}   {play_desc}
  {wm} {solve}  {solve_args}     {solve_desc}
  {wm} {neighbors} {neighbors_args}             {neighbors_desc}
  {wm} {help}   {help_args}                    {help_desc}",
		title = "Examples:".bright_blue().bold(),
		wm = "wordmaze".bright_blue(),
		setup = "setup".yellow(),
		setup_desc = "Load embeddings into the store".dimmed(),
		play = "play".yellow(),
		play_args = "--start dog --goal whale",
		play_desc = "Interactive session".dimmed(),
		solve = "solve".yellow(),
		solve_args = "king queen -- -man woman",
		solve_desc = "Evaluate guesses once".dimmed(),
		neighbors = "neighbors".yellow(),
		neighbors_args = "frog -n 10",
		neighbors_desc = "Closest words".dimmed(),
		help = "help".yellow(),
		help_args = "play",
		help_desc = "Show help for play".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// JSON config file
	#[arg(short = 'c', long = "config", global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Source embedding file (GloVe text format)
	#[arg(short = 'e', long = "embeddings", global = true, value_name = "PATH")]
	pub embeddings: Option<PathBuf>,

	/// Directory holding the vector collection
	#[arg(long = "db", global = true, value_name = "DIR")]
	pub db: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
	/// Named starting position (whale, royal)
	#[arg(short = 'p', long = "preset")]
	pub preset: Option<String>,

	/// Start word (resets initial guesses)
	#[arg(short = 's', long = "start")]
	pub start: Option<String>,

	/// Goal word (resets initial guesses)
	#[arg(short = 'g', long = "goal")]
	pub goal: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Validate the word store, rebuilding it from the embedding file if needed
	Setup,

	/// Interactive session
	Play {
		#[command(flatten)]
		game: GameArgs,
	},

	/// Evaluate a list of guesses from a start word towards a goal word
	Solve {
		/// Start word
		start: String,

		/// Goal word
		goal: String,

		/// Signed words, e.g. -man woman (use -- before negated words)
		#[arg(value_name = "GUESS", allow_hyphen_values = true)]
		guesses: Vec<String>,

		/// Number of neighbors to show
		#[arg(short = 'n', long = "limit", default_value_t = NEIGHBOR_DISPLAY)]
		limit: usize,
	},

	/// Show the nearest neighbors of a single word
	Neighbors {
		/// Word, optionally negated
		#[arg(allow_hyphen_values = true)]
		word: String,

		/// Number of neighbors
		#[arg(short = 'n', long = "limit", default_value_t = 10)]
		limit: usize,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}

impl Cli {
	/// Settings overrides carried by the global flags and the subcommand
	pub fn overrides(&self) -> Overrides {
		let mut overrides = Overrides {
			config: self.config.clone(),
			embedding_file: self.embeddings.clone(),
			db_dir: self.db.clone(),
			..Default::default()
		};

		match &self.command {
			Command::Play { game } => {
				overrides.preset = game.preset.clone();
				overrides.start = game.start.clone();
				overrides.goal = game.goal.clone();
			}
			Command::Solve { start, goal, .. } => {
				overrides.start = Some(start.clone());
				overrides.goal = Some(goal.clone());
			}
			_ => {}
		}

		overrides
	}
}
