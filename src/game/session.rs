//! Session state: start word, goal word and the signed words entered so far

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
	start: String,
	goal: String,
	words: Vec<String>,
}

impl Session {
	pub fn new(start: &str, goal: &str) -> Self {
		Self {
			start: start.to_string(),
			goal: goal.to_string(),
			words: vec![start.to_string()],
		}
	}

	pub fn start(&self) -> &str {
		&self.start
	}

	pub fn goal(&self) -> &str {
		&self.goal
	}

	/// All words, start word first
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Words after the start word
	pub fn guessed_words(&self) -> &[String] {
		&self.words[1..]
	}

	pub fn contains(&self, token: &str) -> bool {
		self.words.iter().any(|w| w == token)
	}

	pub fn add_word(&mut self, token: &str) {
		self.words.push(token.to_string());
	}

	/// Remove a guessed word. The start word is never removed.
	pub fn remove(&mut self, token: &str) -> bool {
		match self.words.iter().skip(1).position(|w| w == token) {
			Some(pos) => {
				self.words.remove(pos + 1);
				true
			}
			None => false,
		}
	}

	/// Drop the last guess, if any
	pub fn undo(&mut self) -> Option<String> {
		if self.words.len() > 1 {
			self.words.pop()
		} else {
			None
		}
	}

	pub fn clear(&mut self) {
		self.words.truncate(1);
	}

	pub fn set_start(&mut self, start: &str) {
		self.start = start.to_string();
		self.words = vec![self.start.clone()];
	}

	pub fn set_goal(&mut self, goal: &str) {
		self.goal = goal.to_string();
		self.clear();
	}
}
