//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
 _       __               ____  ___
| |     / /___  _________/ /  |/  /___ _____  ___
| | /| / / __ \/ ___/ __  / /|_/ / __ `/_  / / _ \
| |/ |/ / /_/ / /  / /_/ / /  / / /_/ / / /_/  __/
|__/|__/\____/_/   \__,_/_/  /_/\__,_/ /___/\___/ "#;

const SLOGANS: &[&str] = &[
	"King - Man + Woman = ?",
	"Vector arithmetic, but make it a game",
	"Lost in 50 dimensions",
	"Every word has an opposite. Some of them even make sense",
	"Cosine distance is a state of mind",
	"dog + huge - cat = whale? Let's find out",
	"Now with twice the words (half of them negative)",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}
