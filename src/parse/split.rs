use tracing::{instrument, warn};

use crate::error::ParseError;

/// Arguments cut at the first separator token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
	/// Text before the separator, untrimmed
	pub head: &'a str,
	/// Trimmed text after the separator, empty when there was none
	pub tail: &'a str,
}

impl Split<'_> {
	pub fn tokens(&self) -> Vec<String> { tokens(self.tail) }
}

/// Splits `raw` at the first `separator`.
///
/// With `min_parts` of 2 the separator is required and the text after it must
/// not be blank.
#[instrument(level = "debug")]
pub fn split<'a>(raw: &'a str, separator: &str, min_parts: usize) -> Result<Split<'a>, ParseError> {
	let (head, tail) = match raw.split_once(separator) {
		Some((head, tail)) => (head, Some(tail.trim())),
		None => (raw, None),
	};

	let parts = if tail.is_some() { 2 } else { 1 };
	if parts < min_parts {
		warn!("User did not provide {}", separator);
		return Err(ParseError::MissingSeparator(separator.to_string()));
	}

	match tail {
		// A separator with nothing after it counts as present but empty, so
		// `tag 1 /tag` is EmptyInput rather than MissingSeparator
		Some("") => {
			warn!("User supplied nothing after {}", separator);
			Err(ParseError::EmptyInput)
		}
		tail => Ok(Split { head, tail: tail.unwrap_or_default() }),
	}
}

/// Whitespace-separated words, in order, duplicates kept
pub fn tokens(raw: &str) -> Vec<String> { raw.split_whitespace().map(str::to_string).collect() }
