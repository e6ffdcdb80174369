use tracing::{debug, info, instrument, warn};

use crate::{command::{Command, DeckCommand, Message, NormalCommand, Outcome, Transition}, parse::{Dispatcher, deck::deck_parser, normal::normal_parser}, types::{config::Config, deck::Deck, deck_list::DeckList}, ui::Ui};

/// Which grammar the next line is read with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Normal,
	/// Editing the cards of the deck at this position
	Deck(usize),
}

/// Owns the decks and feeds each line to the parser of the current mode
pub struct Session {
	decks:       DeckList,
	mode:        Mode,
	finished:    bool,
	config:      Config,
	normal:      Dispatcher<DeckList, NormalCommand>,
	deck_parser: Dispatcher<Deck, DeckCommand>,
}

impl Session {
	pub fn new(config: Config) -> Self {
		Self {
			decks: DeckList::new(),
			mode: Mode::Normal,
			finished: false,
			config,
			normal: normal_parser(),
			deck_parser: deck_parser(),
		}
	}

	pub fn with_decks(mut self, decks: DeckList) -> Self {
		self.decks = decks;
		self
	}

	pub fn decks(&self) -> &DeckList { &self.decks }

	pub fn mode(&self) -> Mode { self.mode }

	pub fn is_finished(&self) -> bool { self.finished }

	/// The open deck in deck mode
	pub fn open_deck(&self) -> Option<&Deck> {
		match self.mode {
			Mode::Normal => None,
			Mode::Deck(index) => self.decks.get(index),
		}
	}

	pub fn prompt(&self) -> String {
		match self.open_deck() {
			Some(deck) => format!("{} > ", deck.name()),
			None => self.config.prompt.clone(),
		}
	}

	/// Parses and executes one line, then applies any transition it asked for
	#[instrument(skip(self, ui), fields(mode = ?self.mode))]
	pub fn handle_line(&mut self, line: &str, ui: &mut dyn Ui) -> Outcome {
		let outcome = match self.mode {
			Mode::Normal => {
				let command = self.normal.parse(line, &self.decks, ui);
				if command.is_void() {
					debug!("Void command in normal mode");
				}
				command.execute(&mut self.decks)
			}
			Mode::Deck(index) => {
				let Some(deck) = self.decks.get_mut(index) else {
					warn!("Open deck {} no longer exists", index);
					self.mode = Mode::Normal;
					return Outcome::message(Message::error("The deck being edited no longer exists"));
				};
				let command = self.deck_parser.parse(line, deck, ui);
				command.execute(deck, &self.config)
			}
		};

		if let Some(transition) = outcome.transition {
			self.apply(transition);
		}
		outcome
	}

	fn apply(&mut self, transition: Transition) {
		match transition {
			Transition::Exit => self.finished = true,
			Transition::EditDeck(index) => self.mode = Mode::Deck(index),
			Transition::LeaveDeck => self.mode = Mode::Normal,
			// Studying is driven by the console and leaves the mode alone
			Transition::StudyDeck(_) => {}
		}
		info!("Session now in {:?} mode", self.mode);
	}
}
