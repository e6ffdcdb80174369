use std::collections::VecDeque;

use crate::{command::Message, console::{Input, Terminal}, error::Result, types::{card::{Card, CardEdit}, deck::Deck, deck_list::DeckList}, ui::Ui};

/// A `Ui` that answers from a script and records every question asked
pub struct ScriptedUi {
	pub confirm: bool,
	pub card:    (String, String),
	pub edit:    CardEdit,
	pub asked:   Vec<String>,
}

impl Default for ScriptedUi {
	fn default() -> Self {
		Self { confirm: true, card: (String::new(), String::new()), edit: CardEdit::default(), asked: Vec::new() }
	}
}

impl ScriptedUi {
	pub fn refusing() -> Self { Self { confirm: false, ..Self::default() } }

	pub fn answering_card(question: &str, answer: &str) -> Self {
		Self { card: (question.to_string(), answer.to_string()), ..Self::default() }
	}

	pub fn editing(edit: CardEdit) -> Self { Self { edit, ..Self::default() } }
}

impl Ui for ScriptedUi {
	fn confirm_deck_deletion(&mut self, deck_name: &str) -> bool {
		self.asked.push(format!("delete deck: {}", deck_name));
		self.confirm
	}

	fn confirm_card_deletion(&mut self, question: &str) -> bool {
		self.asked.push(format!("delete card: {}", question));
		self.confirm
	}

	fn confirm_export(&mut self, deck_name: &str) -> bool {
		self.asked.push(format!("export: {}", deck_name));
		self.confirm
	}

	fn read_card(&mut self) -> (String, String) {
		self.asked.push("new card".to_string());
		self.card.clone()
	}

	fn read_card_update(&mut self, card: &Card) -> CardEdit {
		self.asked.push(format!("update card: {}", card.question()));
		self.edit.clone()
	}
}

/// A `Terminal` that replays canned input and keeps what was shown. Once the
/// script runs out, input reads as closed.
#[derive(Default)]
pub struct ScriptedTerminal {
	pub replies: VecDeque<Input>,
	pub prompts: Vec<String>,
	pub shown:   Vec<Message>,
}

impl ScriptedTerminal {
	pub fn replying(replies: impl IntoIterator<Item = Input>) -> Self {
		Self { replies: replies.into_iter().collect(), prompts: Vec::new(), shown: Vec::new() }
	}
}

impl Terminal for ScriptedTerminal {
	fn read(&mut self, prompt: &str) -> Result<Input> {
		self.prompts.push(prompt.to_string());
		Ok(self.replies.pop_front().unwrap_or(Input::Closed))
	}

	fn show(&mut self, message: &Message) { self.shown.push(message.clone()); }
}

/// `size` decks named "deck 1", "deck 2", ...
pub fn deck_list(size: usize) -> DeckList { (1..=size).map(|i| Deck::new(format!("deck {}", i))).collect() }

/// A deck named "Pokemon" holding cards "q 1"/"a 1" up to `size`
pub fn deck_with_cards(size: usize) -> Deck {
	let mut deck = Deck::new("Pokemon");
	for i in 1..=size {
		if let Ok(card) = Card::new(format!("q {}", i), format!("a {}", i)) {
			deck.add_card(card);
		}
	}
	deck
}
