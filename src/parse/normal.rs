use tracing::{info, instrument, warn};

use crate::{command::NormalCommand, error::ParseError, parse::{Dispatcher, index::select, split::{split, tokens}}, types::{deck::Deck, deck_list::DeckList}, ui::Ui};

pub const TAG_SEPARATOR: &str = "/tag";

/// Keyword table for the deck list
pub fn normal_parser() -> Dispatcher<DeckList, NormalCommand> {
	Dispatcher::new("normal")
		.with("exit", |_, _, _| Ok(NormalCommand::Exit))
		.with("help", |_, _, _| Ok(NormalCommand::Help))
		.with("version", |_, _, _| Ok(NormalCommand::Version))
		.with("decks", |_, _, _| Ok(NormalCommand::ListDecks))
		.with("edit", prepare_edit)
		.with("start", prepare_start)
		.with("create", prepare_create)
		.with("delete", prepare_delete)
		.with("tag", prepare_tag)
		.with("untag", prepare_untag)
		.with("search", prepare_search)
}

#[instrument(skip(decks, _ui))]
fn prepare_edit(arguments: &str, decks: &DeckList, _ui: &mut dyn Ui) -> Result<NormalCommand, ParseError> {
	let (index, deck) = select(arguments, decks)?;
	info!("User issued command to edit deck {}", deck.name());
	Ok(NormalCommand::Edit { index })
}

#[instrument(skip(decks, _ui))]
fn prepare_start(arguments: &str, decks: &DeckList, _ui: &mut dyn Ui) -> Result<NormalCommand, ParseError> {
	let (index, deck) = select(arguments, decks)?;
	info!("User issued command to start deck {}", deck.name());
	Ok(NormalCommand::Start { index })
}

/// `<name>` or `<name> /tag <tags>`
#[instrument(skip(_decks, _ui))]
fn prepare_create(arguments: &str, _decks: &DeckList, _ui: &mut dyn Ui) -> Result<NormalCommand, ParseError> {
	let (name, tags) = match arguments.split_once(TAG_SEPARATOR) {
		Some((name, tags)) => (name, tokens(tags)),
		None => (arguments, Vec::new()),
	};

	let deck = Deck::with_tags(name, tags).inspect_err(|_| warn!("User did not supply a deck name"))?;

	info!("User issued command to create deck {}", deck.name());
	Ok(NormalCommand::Create { deck })
}

/// Resolves the deck, then asks before anything is removed. The answer rides
/// along with the command either way.
#[instrument(skip(decks, ui))]
fn prepare_delete(arguments: &str, decks: &DeckList, ui: &mut dyn Ui) -> Result<NormalCommand, ParseError> {
	let (index, deck) = select(arguments, decks)?;
	info!("User issued command to delete deck at index {}", index);
	let confirmed = ui.confirm_deck_deletion(deck.name());
	Ok(NormalCommand::Delete { index, confirmed })
}

fn index_and_tags(arguments: &str, decks: &DeckList) -> Result<(usize, Vec<String>), ParseError> {
	let parts = split(arguments, TAG_SEPARATOR, 2)?;
	let (index, _) = select(parts.head, decks)?;
	Ok((index, parts.tokens()))
}

#[instrument(skip(decks, _ui))]
fn prepare_tag(arguments: &str, decks: &DeckList, _ui: &mut dyn Ui) -> Result<NormalCommand, ParseError> {
	let (index, tags) = index_and_tags(arguments, decks)?;
	info!("User issued command to tag a deck");
	Ok(NormalCommand::Tag { index, tags })
}

#[instrument(skip(decks, _ui))]
fn prepare_untag(arguments: &str, decks: &DeckList, _ui: &mut dyn Ui) -> Result<NormalCommand, ParseError> {
	let (index, tags) = index_and_tags(arguments, decks)?;
	info!("User issued command to untag a deck");
	Ok(NormalCommand::Untag { index, tags })
}

#[instrument(skip(_decks, _ui))]
fn prepare_search(arguments: &str, _decks: &DeckList, _ui: &mut dyn Ui) -> Result<NormalCommand, ParseError> {
	let terms = tokens(arguments);
	if terms.is_empty() {
		warn!("User did not supply tags when searching for decks");
		return Err(ParseError::EmptyInput);
	}
	Ok(NormalCommand::Search { terms })
}
