use std::{fmt, path::PathBuf};

use thiserror::Error;

/// The ordered collection a user-supplied index was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
	Deck,
	Card,
}

impl fmt::Display for Collection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Collection::Deck => write!(f, "deck"),
			Collection::Card => write!(f, "card"),
		}
	}
}

/// Everything that can go wrong while turning a line into a command.
///
/// None of these are fatal: the dispatcher folds each one into a void command
/// whose message is the `Display` text below.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("Index must be a whole number, e.g. 1")]
	Format,

	#[error("{}", range_message(.collection, .size))]
	Range { collection: Collection, size: usize },

	#[error("Missing '{0}' in the command")]
	MissingSeparator(String),

	#[error("Input cannot be empty")]
	EmptyInput,

	#[error("Unexpected argument '{0}'")]
	UnexpectedArgument(String),
}

fn range_message(collection: &Collection, size: &usize) -> String {
	match size {
		0 => format!("There is no {} to choose from", collection),
		1 => format!("The only valid {} index is 1", collection),
		n => format!("The {} index must be between 1 and {}", collection, n),
	}
}

#[derive(Debug, Error)]
pub enum AppError {
	#[error("Config file '{0}' not found")]
	ConfigNotFound(PathBuf),

	#[error("Invalid config: {0}")]
	Config(#[from] toml::de::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Line editor error: {0}")]
	Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, AppError>;
