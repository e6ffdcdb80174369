//! Line parsing: keyword lookup, argument validation, command construction.
//!
//! Both interpreter modes go through the same [`Dispatcher`]. A mode is just a
//! keyword table over the collection its indices resolve against: the deck
//! list in normal mode ([`normal::normal_parser`]), the open deck's cards in
//! deck mode ([`deck::deck_parser`]).

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use crate::{command::Command, error::ParseError, ui::Ui};

pub mod deck;
pub mod index;
pub mod normal;
pub mod split;

/// Builds a command from the text after the keyword
pub type Prepare<T, C> = fn(&str, &T, &mut dyn Ui) -> Result<C, ParseError>;

pub struct Dispatcher<T, C> {
	mode:     &'static str,
	grammars: HashMap<&'static str, Prepare<T, C>>,
}

impl<T, C: Command> Dispatcher<T, C> {
	pub fn new(mode: &'static str) -> Self { Self { mode, grammars: HashMap::new() } }

	pub fn with(mut self, keyword: &'static str, prepare: Prepare<T, C>) -> Self {
		self.grammars.insert(keyword, prepare);
		self
	}

	/// Runs the grammar for `keyword`. `Ok(None)` means the keyword is unknown.
	pub fn parse_command(
		&self,
		keyword: &str,
		arguments: &str,
		target: &T,
		ui: &mut dyn Ui,
	) -> Result<Option<C>, ParseError> {
		match self.grammars.get(keyword) {
			Some(prepare) => prepare(arguments, target, ui).map(Some),
			None => Ok(None),
		}
	}

	/// Parses one input line. Never fails: unknown keywords and rejected
	/// arguments both come back as a void command.
	#[instrument(skip(self, target, ui), fields(mode = self.mode))]
	pub fn parse(&self, line: &str, target: &T, ui: &mut dyn Ui) -> C {
		let (keyword, arguments) = split_keyword(line);
		debug!("Parsed keyword {:?} with arguments {:?}", keyword, arguments);

		match self.parse_command(keyword, arguments, target, ui) {
			Ok(Some(command)) => {
				info!("User issued '{}'", keyword);
				command
			}
			Ok(None) => {
				info!("User issued an invalid command");
				C::void(None)
			}
			Err(e) => {
				warn!("Parsed void or invalid command: {}", e);
				C::void(Some(e.to_string()))
			}
		}
	}
}

/// Separates the keyword from everything after the first whitespace character
pub fn split_keyword(line: &str) -> (&str, &str) {
	let line = line.trim_start();
	line.split_once(char::is_whitespace).unwrap_or((line, ""))
}
