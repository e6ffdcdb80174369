use crate::types::card::{Card, CardEdit};

/// The interactive side of the interpreter.
///
/// A few grammars need the user's say before a command can be built (a delete
/// confirmation, the text of a new card). Those calls block until the user
/// answers. Display goes the other way, through the `Outcome` a command
/// returns.
pub trait Ui {
	fn confirm_deck_deletion(&mut self, deck_name: &str) -> bool;

	fn confirm_card_deletion(&mut self, question: &str) -> bool;

	fn confirm_export(&mut self, deck_name: &str) -> bool;

	/// Asks for the question and answer of a new card
	fn read_card(&mut self) -> (String, String);

	/// Asks for replacement text; blank replies keep the current side
	fn read_card_update(&mut self, card: &Card) -> CardEdit;
}
