use std::path::PathBuf;

use colored::Colorize;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, error, info, instrument, warn};

use crate::{command::{Message, MessageLevel, Outcome, Transition}, error::Result, session::Session, types::{card::{Card, CardEdit}, config::Config, deck::Deck}, ui::Ui};

/// What one prompt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	Line(String),
	/// Ctrl-C
	Interrupted,
	/// Ctrl-D or end of piped input
	Closed,
}

/// The line source and message sink a study session talks to
pub trait Terminal {
	fn read(&mut self, prompt: &str) -> Result<Input>;

	fn show(&mut self, message: &Message);
}

const REVEAL_PROMPT: &str = "(press Enter to see the answer) ";

/// Only an explicit y or yes confirms
pub fn is_yes(reply: &str) -> bool { matches!(reply.trim().to_lowercase().as_str(), "y" | "yes") }

/// Walks the deck in order, revealing each answer after the user presses
/// Enter. Ctrl-C or closed input ends the walk early.
#[instrument(skip(deck, terminal), fields(deck = %deck.name()))]
pub fn study(deck: &Deck, terminal: &mut dyn Terminal) -> Result<()> {
	if deck.is_empty() {
		terminal.show(&Message::info(format!("'{}' has no cards to study", deck.name())));
		return Ok(());
	}

	for (i, card) in deck.cards().iter().enumerate() {
		terminal.show(&Message::info(format!("Question {}/{}: {}", i + 1, deck.len(), card.question())));
		if let Input::Interrupted | Input::Closed = terminal.read(REVEAL_PROMPT)? {
			info!("Study stopped before answer {}", i + 1);
			terminal.show(&Message::warning(format!(
				"Stopped studying '{}' after {} of {} cards",
				deck.name(),
				i,
				deck.len()
			)));
			return Ok(());
		}
		terminal.show(&Message::info(format!("Answer: {}", card.answer())));
	}

	terminal.show(&Message::success(format!("Finished studying '{}'", deck.name())));
	Ok(())
}

/// Terminal front-end: reads lines with `rustyline`, prints outcomes, and
/// answers the interpreter's questions.
pub struct Console {
	editor:       DefaultEditor,
	history_file: Option<PathBuf>,
}

impl Console {
	#[instrument]
	pub fn new(keep_history: bool) -> Result<Self> {
		let mut editor = DefaultEditor::new()?;

		let history_file = if keep_history { Config::history_path() } else { None };
		if let Some(path) = &history_file {
			if let Some(parent) = path.parent() {
				fs_err::create_dir_all(parent)?;
			}
			if path.exists() {
				// A corrupt history file should not stop the program
				if let Err(e) = editor.load_history(path) {
					warn!("Could not load history from {:?}: {}", path, e);
				}
			}
		}

		Ok(Self { editor, history_file })
	}

	/// Reads one line. Only command lines are `remember`ed in the history,
	/// never replies to questions.
	pub fn read_input(&mut self, prompt: &str, remember: bool) -> Result<Input> {
		match self.editor.readline(prompt) {
			Ok(line) => {
				if remember && !line.trim().is_empty() {
					self.editor.add_history_entry(line.as_str())?;
				}
				Ok(Input::Line(line))
			}
			Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
			Err(ReadlineError::Eof) => Ok(Input::Closed),
			Err(e) => Err(e.into()),
		}
	}

	pub fn run(&mut self, session: &mut Session) -> Result<()> {
		info!("Starting interactive session");
		println!("Welcome to flashdeck. Type 'help' to see the commands.");

		while !session.is_finished() {
			let line = match self.read_input(&session.prompt(), true)? {
				Input::Line(line) => line,
				Input::Interrupted => continue,
				Input::Closed => {
					debug!("Input closed");
					break;
				}
			};

			let outcome = session.handle_line(&line, self);
			print_outcome(&outcome);

			if let Some(Transition::StudyDeck(index)) = outcome.transition {
				if let Some(deck) = session.decks().get(index) {
					study(deck, self)?;
				}
			}
		}

		self.save_history();
		Ok(())
	}

	fn save_history(&mut self) {
		if let Some(path) = &self.history_file {
			if let Err(e) = self.editor.save_history(path) {
				warn!("Could not save history to {:?}: {}", path, e);
			}
		}
	}

	fn ask(&mut self, prompt: &str) -> String {
		match self.read_input(prompt, false) {
			Ok(Input::Line(line)) => line,
			Ok(Input::Interrupted | Input::Closed) => String::new(),
			Err(e) => {
				error!("Failed to read reply: {}", e);
				String::new()
			}
		}
	}

	fn confirm(&mut self, question: &str) -> bool {
		let reply = self.ask(&format!("{} [y/n] ", question));
		is_yes(&reply)
	}
}

impl Terminal for Console {
	fn read(&mut self, prompt: &str) -> Result<Input> { self.read_input(prompt, false) }

	fn show(&mut self, message: &Message) { print_message(message); }
}

impl Ui for Console {
	fn confirm_deck_deletion(&mut self, deck_name: &str) -> bool {
		self.confirm(&format!("Delete deck '{}'?", deck_name))
	}

	fn confirm_card_deletion(&mut self, question: &str) -> bool {
		self.confirm(&format!("Delete card '{}'?", question))
	}

	fn confirm_export(&mut self, deck_name: &str) -> bool {
		self.confirm(&format!("Export '{}' as slides?", deck_name))
	}

	fn read_card(&mut self) -> (String, String) {
		let question = self.ask("Question: ");
		let answer = self.ask("Answer: ");
		(question, answer)
	}

	fn read_card_update(&mut self, card: &Card) -> CardEdit {
		println!("Current question: {}", card.question());
		let question = self.ask("New question (blank to keep): ");
		println!("Current answer: {}", card.answer());
		let answer = self.ask("New answer (blank to keep): ");
		CardEdit { question: Some(question), answer: Some(answer) }
	}
}

pub fn print_outcome(outcome: &Outcome) {
	for message in &outcome.messages {
		print_message(message);
	}
}

fn print_message(message: &Message) {
	match message.level {
		MessageLevel::Info => println!("{}", message.content),
		MessageLevel::Success => println!("{}", message.content.green()),
		MessageLevel::Warning => println!("{}", message.content.yellow()),
		MessageLevel::Error => println!("{}", message.content.red()),
	}
}
