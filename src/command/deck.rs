use tracing::{error, instrument, warn};

use crate::{command::{Command, Message, Outcome, Transition, version_outcome, void_outcome}, export, types::{card::{Card, CardEdit}, config::Config, deck::Deck}};

pub const HELP: &str = "\
Deck mode commands:
  add <question> /ans <answer>  add a card (just 'add' to be prompted)
  list [/ans]                   list the cards, optionally with answers
  update <index>                change a card's question or answer
  delete <index>                delete a card
  export [-y]                   write the deck as a slide outline
  done                          go back to the deck list
  help                          show this message
  version                       show the program version
  exit                          quit";

/// Commands understood while a single deck is open for editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckCommand {
	Exit,
	Help,
	Version,
	Done,
	Add { card: Card },
	List { with_answers: bool },
	Update { index: usize, edit: CardEdit },
	Delete { index: usize, confirmed: bool },
	Export { confirmed: bool },
	Void { reason: Option<String> },
}

impl Command for DeckCommand {
	fn void(reason: Option<String>) -> Self { Self::Void { reason } }

	fn is_void(&self) -> bool { matches!(self, Self::Void { .. }) }
}

impl DeckCommand {
	#[instrument(skip(deck, config), fields(deck = %deck.name()))]
	pub fn execute(self, deck: &mut Deck, config: &Config) -> Outcome {
		match self {
			Self::Exit => Outcome::transition(Transition::Exit).with_message(Message::info("Bye!")),
			Self::Help => Outcome::message(Message::info(HELP)),
			Self::Version => version_outcome(),
			Self::Done => Outcome::transition(Transition::LeaveDeck)
				.with_message(Message::info(format!("Finished editing '{}'", deck.name()))),
			Self::Add { card } => {
				let position = deck.add_card(card);
				Outcome::message(Message::success(format!("Added card {}", position + 1)))
			}
			Self::List { with_answers } => list_cards(deck, with_answers),
			Self::Update { index, edit } => match deck.update_card(index, edit) {
				Some(true) => Outcome::message(Message::success(format!("Updated card {}", index + 1))),
				Some(false) => Outcome::message(Message::info(format!("Card {} unchanged", index + 1))),
				None => missing_card(index),
			},
			Self::Delete { index, confirmed } => delete(deck, index, confirmed),
			Self::Export { confirmed } => export_deck(deck, config, confirmed),
			Self::Void { reason } => void_outcome(reason),
		}
	}
}

fn missing_card(index: usize) -> Outcome {
	warn!("Card {} vanished before execution", index);
	Outcome::message(Message::error(format!("There is no card at position {}", index + 1)))
}

fn list_cards(deck: &Deck, with_answers: bool) -> Outcome {
	if deck.is_empty() {
		return Outcome::message(Message::info(format!("'{}' has no cards yet", deck.name())));
	}

	let mut lines = Vec::with_capacity(deck.len() * 2);
	for (i, card) in deck.cards().iter().enumerate() {
		lines.push(format!("{}. Q: {}", i + 1, card.question()));
		if with_answers {
			lines.push(format!("   A: {}", card.answer()));
		}
	}
	Outcome::message(Message::info(lines.join("\n")))
}

fn delete(deck: &mut Deck, index: usize, confirmed: bool) -> Outcome {
	if !confirmed {
		return Outcome::message(Message::info("Card was not deleted."));
	}

	match deck.remove_card(index) {
		Some(card) => Outcome::message(Message::success(format!("Deleted card '{}'", card.question()))),
		None => missing_card(index),
	}
}

fn export_deck(deck: &Deck, config: &Config, confirmed: bool) -> Outcome {
	if !confirmed {
		return Outcome::message(Message::info("Export cancelled."));
	}

	match export::write_slides(deck, &config.export_dir) {
		Ok(path) => Outcome::message(Message::success(format!("Exported to {}", path.display()))),
		Err(e) => {
			error!("Export failed: {}", e);
			Outcome::message(Message::error(format!("Export failed: {}", e)))
		}
	}
}
