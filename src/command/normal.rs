use tracing::{info, instrument, warn};

use crate::{command::{Command, Message, Outcome, Transition, version_outcome, void_outcome}, types::{deck::Deck, deck_list::DeckList}};

pub const HELP: &str = "\
Normal mode commands:
  create <name> [/tag <tags>]   create a deck, optionally tagged
  decks                         list all decks
  edit <index>                  edit the cards of a deck
  start <index>                 study a deck
  delete <index>                delete a deck
  tag <index> /tag <tags>       add tags to a deck
  untag <index> /tag <tags>     remove tags from a deck
  search <tags>                 find decks carrying any of the tags
  help                          show this message
  version                       show the program version
  exit                          quit";

/// Commands understood while looking at the whole deck list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalCommand {
	Exit,
	Help,
	Version,
	ListDecks,
	Edit { index: usize },
	Start { index: usize },
	Create { deck: Deck },
	Delete { index: usize, confirmed: bool },
	Tag { index: usize, tags: Vec<String> },
	Untag { index: usize, tags: Vec<String> },
	Search { terms: Vec<String> },
	Void { reason: Option<String> },
}

impl Command for NormalCommand {
	fn void(reason: Option<String>) -> Self { Self::Void { reason } }

	fn is_void(&self) -> bool { matches!(self, Self::Void { .. }) }
}

impl NormalCommand {
	#[instrument(skip(decks))]
	pub fn execute(self, decks: &mut DeckList) -> Outcome {
		match self {
			Self::Exit => Outcome::transition(Transition::Exit).with_message(Message::info("Bye!")),
			Self::Help => Outcome::message(Message::info(HELP)),
			Self::Version => version_outcome(),
			Self::ListDecks => list_decks(decks),
			Self::Edit { index } => enter(decks, index, Transition::EditDeck(index)),
			Self::Start { index } => enter(decks, index, Transition::StudyDeck(index)),
			Self::Create { deck } => create(decks, deck),
			Self::Delete { index, confirmed } => delete(decks, index, confirmed),
			Self::Tag { index, tags } => retag(decks, index, |deck| {
				deck.add_tags(&tags);
			}),
			Self::Untag { index, tags } => retag(decks, index, |deck| {
				deck.remove_tags(&tags);
			}),
			Self::Search { terms } => search(decks, &terms),
			Self::Void { reason } => void_outcome(reason),
		}
	}
}

fn missing_deck(index: usize) -> Outcome {
	warn!("Deck {} vanished before execution", index);
	Outcome::message(Message::error(format!("There is no deck at position {}", index + 1)))
}

fn list_decks(decks: &DeckList) -> Outcome {
	if decks.is_empty() {
		return Outcome::message(Message::info("There are no decks yet. Try 'create <name>'."));
	}
	Outcome::message(Message::info(decks.to_string()))
}

fn enter(decks: &DeckList, index: usize, transition: Transition) -> Outcome {
	let Some(deck) = decks.get(index) else {
		return missing_deck(index);
	};

	let text = match transition {
		Transition::StudyDeck(_) => format!("Starting a study session on '{}'", deck.name()),
		_ => format!("Editing '{}'. Type 'help' for deck commands, 'done' to go back.", deck.name()),
	};
	Outcome::transition(transition).with_message(Message::info(text))
}

fn create(decks: &mut DeckList, deck: Deck) -> Outcome {
	let name = deck.name().to_string();
	let tags = deck.tags().join(", ");
	let position = decks.add(deck);
	info!("Created deck '{}'", name);

	let mut outcome =
		Outcome::message(Message::success(format!("Created deck {}. {}", position + 1, name)));
	if !tags.is_empty() {
		outcome.add_message(Message::info(format!("Tags: {}", tags)));
	}
	outcome
}

fn delete(decks: &mut DeckList, index: usize, confirmed: bool) -> Outcome {
	if !confirmed {
		return Outcome::message(Message::info("Deck was not deleted."));
	}

	match decks.remove(index) {
		Some(deck) => Outcome::message(Message::success(format!("Deleted deck '{}'", deck.name()))),
		None => missing_deck(index),
	}
}

fn retag(decks: &mut DeckList, index: usize, change: impl FnOnce(&mut Deck)) -> Outcome {
	let Some(deck) = decks.get_mut(index) else {
		return missing_deck(index);
	};

	change(deck);
	Outcome::message(Message::success(tag_summary(deck)))
}

fn tag_summary(deck: &Deck) -> String {
	if deck.tags().is_empty() {
		format!("'{}' has no tags", deck.name())
	} else {
		format!("Tags of '{}': {}", deck.name(), deck.tags().join(", "))
	}
}

fn search(decks: &DeckList, terms: &[String]) -> Outcome {
	let found = decks.search(terms);
	if found.is_empty() {
		return Outcome::message(Message::info(format!("No decks tagged with {}", terms.join(" or "))));
	}

	let lines: Vec<String> = found
		.iter()
		.map(|(i, deck)| format!("{}. {} [{}]", i + 1, deck.name(), deck.tags().join(", ")))
		.collect();
	Outcome::message(Message::info(format!("Matching decks:\n{}", lines.join("\n"))))
}
