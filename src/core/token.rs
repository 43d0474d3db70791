//! Signed word tokens
//!
//! A token is a word, optionally prefixed with [`NEGATION_MARKER`] to denote
//! the additive inverse of the word's vector.

pub const NEGATION_MARKER: char = '-';
pub const POSITIVE_MARKER: char = '+';

/// Lowercase raw input and drop an explicit leading `+`
pub fn normalize(raw: &str) -> String {
	let lowered = raw.to_lowercase();
	match lowered.strip_prefix(POSITIVE_MARKER) {
		Some(rest) => rest.to_string(),
		None => lowered,
	}
}

pub fn is_negated(token: &str) -> bool {
	token.starts_with(NEGATION_MARKER)
}

/// Word without its negation marker
pub fn base_form(token: &str) -> &str {
	token.strip_prefix(NEGATION_MARKER).unwrap_or(token)
}

/// Negated form of a word
pub fn negate(word: &str) -> String {
	format!("{}{}", NEGATION_MARKER, word)
}

/// Flips the sign of a token. Applying it twice gives back the input.
pub fn opposite(token: &str) -> String {
	if is_negated(token) {
		base_form(token).to_string()
	} else {
		negate(token)
	}
}

/// Whether a source word may enter the store
pub fn is_alphanumeric(word: &str) -> bool {
	!word.is_empty() && word.chars().all(char::is_alphanumeric)
}
