use tracing::{info, instrument, warn};

use crate::{command::DeckCommand, error::ParseError, parse::{Dispatcher, index::select, split::split}, types::{card::Card, deck::Deck}, ui::Ui};

pub const ANSWER_SEPARATOR: &str = "/ans";
pub const FORCE_FLAG: &str = "-y";

/// Keyword table for the cards of the open deck
pub fn deck_parser() -> Dispatcher<Deck, DeckCommand> {
	Dispatcher::new("deck")
		.with("exit", |_, _, _| Ok(DeckCommand::Exit))
		.with("help", |_, _, _| Ok(DeckCommand::Help))
		.with("version", |_, _, _| Ok(DeckCommand::Version))
		.with("done", |_, _, _| Ok(DeckCommand::Done))
		.with("add", prepare_add)
		.with("list", prepare_list)
		.with("update", prepare_update)
		.with("delete", prepare_delete)
		.with("export", prepare_export)
}

/// `<question> /ans <answer>` on one line, or prompted when bare
#[instrument(skip(_deck, ui))]
fn prepare_add(arguments: &str, _deck: &Deck, ui: &mut dyn Ui) -> Result<DeckCommand, ParseError> {
	let card = if arguments.trim().is_empty() {
		let (question, answer) = ui.read_card();
		Card::new(question, answer)
	} else {
		let parts = split(arguments, ANSWER_SEPARATOR, 2)?;
		Card::new(parts.head, parts.tail)
	};

	let card = card.inspect_err(|_| warn!("User left the question or answer blank"))?;
	info!("User issued command to add a card");
	Ok(DeckCommand::Add { card })
}

#[instrument(skip(_deck, _ui))]
fn prepare_list(arguments: &str, _deck: &Deck, _ui: &mut dyn Ui) -> Result<DeckCommand, ParseError> {
	match arguments.trim() {
		"" => Ok(DeckCommand::List { with_answers: false }),
		ANSWER_SEPARATOR => Ok(DeckCommand::List { with_answers: true }),
		other => {
			warn!("Unexpected list argument");
			Err(ParseError::UnexpectedArgument(other.to_string()))
		}
	}
}

#[instrument(skip(deck, ui))]
fn prepare_update(arguments: &str, deck: &Deck, ui: &mut dyn Ui) -> Result<DeckCommand, ParseError> {
	let (index, card) = select(arguments, deck)?;
	info!("User issued command to update card {}", index);
	let edit = ui.read_card_update(card);
	Ok(DeckCommand::Update { index, edit })
}

#[instrument(skip(deck, ui))]
fn prepare_delete(arguments: &str, deck: &Deck, ui: &mut dyn Ui) -> Result<DeckCommand, ParseError> {
	let (index, card) = select(arguments, deck)?;
	info!("User issued command to delete card {}", index);
	let confirmed = ui.confirm_card_deletion(card.question());
	Ok(DeckCommand::Delete { index, confirmed })
}

/// Bare `export` asks first, `export -y` does not
#[instrument(skip(deck, ui))]
fn prepare_export(arguments: &str, deck: &Deck, ui: &mut dyn Ui) -> Result<DeckCommand, ParseError> {
	let confirmed = match arguments.trim() {
		"" => ui.confirm_export(deck.name()),
		FORCE_FLAG => true,
		other => {
			warn!("Unexpected export argument");
			return Err(ParseError::UnexpectedArgument(other.to_string()));
		}
	};
	Ok(DeckCommand::Export { confirmed })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{command::Command, error::Collection, test_utils::{ScriptedUi, deck_with_cards}, types::card::CardEdit};

	fn parse(line: &str, deck: &Deck) -> DeckCommand {
		deck_parser().parse(line, deck, &mut ScriptedUi::default())
	}

	fn void(err: ParseError) -> DeckCommand { DeckCommand::void(Some(err.to_string())) }

	#[test]
	fn fixed_commands() {
		let deck = deck_with_cards(2);
		assert_eq!(parse("exit", &deck), DeckCommand::Exit);
		assert_eq!(parse("done", &deck), DeckCommand::Done);
		assert_eq!(parse("help", &deck), DeckCommand::Help);
		assert_eq!(parse("version", &deck), DeckCommand::Version);
	}

	#[test]
	fn one_line_add() {
		let parsed = parse("add qn /ans ans", &deck_with_cards(2));
		assert_eq!(parsed, DeckCommand::Add { card: Card::new("qn", "ans").unwrap() });
	}

	#[test]
	fn add_answer_may_contain_spaces() {
		let parsed = parse("add What is GDP? /ans Total output of an economy", &deck_with_cards(0));
		let card = Card::new("What is GDP?", "Total output of an economy").unwrap();
		assert_eq!(parsed, DeckCommand::Add { card });
	}

	#[test]
	fn add_without_answer_separator() {
		assert_eq!(
			parse("add what is this", &deck_with_cards(0)),
			void(ParseError::MissingSeparator("/ans".into()))
		);
	}

	#[test]
	fn add_with_blank_side() {
		assert_eq!(parse("add /ans answer", &deck_with_cards(0)), void(ParseError::EmptyInput));
		assert_eq!(parse("add question /ans  ", &deck_with_cards(0)), void(ParseError::EmptyInput));
	}

	#[test]
	fn bare_add_prompts_for_card() {
		let deck = deck_with_cards(0);
		let mut ui = ScriptedUi::answering_card("q", "a");

		let parsed = deck_parser().parse("add", &deck, &mut ui);

		assert_eq!(parsed, DeckCommand::Add { card: Card::new("q", "a").unwrap() });
		assert_eq!(ui.asked, vec!["new card".to_string()]);
	}

	#[test]
	fn bare_add_with_blank_reply_is_void() {
		let mut ui = ScriptedUi::answering_card("q", "  ");
		let parsed = deck_parser().parse("add", &deck_with_cards(0), &mut ui);
		assert_eq!(parsed, void(ParseError::EmptyInput));
	}

	#[test]
	fn list_variants() {
		let deck = deck_with_cards(1);
		assert_eq!(parse("list", &deck), DeckCommand::List { with_answers: false });
		assert_eq!(parse("list /ans", &deck), DeckCommand::List { with_answers: true });
		assert_eq!(parse("list 1", &deck), void(ParseError::UnexpectedArgument("1".into())));
	}

	#[test]
	fn delete_and_update_check_card_range() {
		let deck = deck_with_cards(2);
		let range = void(ParseError::Range { collection: Collection::Card, size: 2 });

		assert_eq!(parse("delete", &deck), void(ParseError::Format));
		assert_eq!(parse("delete 3", &deck), range);
		assert_eq!(parse("update", &deck), void(ParseError::Format));
		assert_eq!(parse("update 3", &deck), range);
	}

	#[test]
	fn delete_asks_with_question() {
		let deck = deck_with_cards(2);
		let mut ui = ScriptedUi::default();

		let parsed = deck_parser().parse("delete 2", &deck, &mut ui);

		assert_eq!(parsed, DeckCommand::Delete { index: 1, confirmed: true });
		assert_eq!(ui.asked, vec!["delete card: q 2".to_string()]);
	}

	#[test]
	fn update_carries_prompted_edit() {
		let deck = deck_with_cards(2);
		let edit = CardEdit { question: None, answer: Some("new".into()) };
		let mut ui = ScriptedUi::editing(edit.clone());

		let parsed = deck_parser().parse("update 1", &deck, &mut ui);

		assert_eq!(parsed, DeckCommand::Update { index: 0, edit });
		assert_eq!(ui.asked, vec!["update card: q 1".to_string()]);
	}

	#[test]
	fn export_force_skips_prompt() {
		let deck = deck_with_cards(1);
		let mut ui = ScriptedUi::refusing();

		assert_eq!(deck_parser().parse("export -y", &deck, &mut ui), DeckCommand::Export {
			confirmed: true,
		});
		assert!(ui.asked.is_empty());

		assert_eq!(deck_parser().parse("export", &deck, &mut ui), DeckCommand::Export {
			confirmed: false,
		});
		assert_eq!(ui.asked, vec!["export: Pokemon".to_string()]);
	}

	#[test]
	fn export_rejects_extra_arguments() {
		let deck = deck_with_cards(1);
		for line in ["export 1", "export 1 -y", "export -y 1"] {
			let expected = ParseError::UnexpectedArgument(split_keyword_rest(line));
			assert_eq!(parse(line, &deck), void(expected), "{:?}", line);
		}
	}

	fn split_keyword_rest(line: &str) -> String { crate::parse::split_keyword(line).1.trim().to_string() }
}
