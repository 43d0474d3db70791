//! WordMaze - word embedding arithmetic in the terminal
//!
//! Start from one word, add and subtract others, and try to land next to the
//! goal word's embedding.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use wordmaze::cli::{Cli, Command};
use wordmaze::commands;
use wordmaze::config::Settings;
use wordmaze::ui::{self, Log};

fn main() {
	let cli = Cli::parse();
	Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	if let Command::Help { subcommand } = &cli.command {
		let mut cmd = Cli::command();
		if let Some(sub) = subcommand {
			if let Some(sub_cmd) = cmd.find_subcommand_mut(sub) {
				sub_cmd.print_help()?;
			} else {
				eprintln!("Unknown subcommand: {}", sub);
				cmd.print_help()?;
			}
		} else {
			cmd.print_help()?;
		}
		return Ok(());
	}

	let settings = Settings::resolve(&cli.overrides())?;

	match cli.command {
		Command::Setup => commands::setup::run(&settings),
		Command::Play { .. } => commands::play::run(&settings),
		Command::Solve { guesses, limit, .. } => commands::solve::run(&settings, &guesses, limit),
		Command::Neighbors { word, limit } => commands::neighbors::run(&settings, &word, limit),
		Command::Help { .. } => Ok(()),
	}
}
