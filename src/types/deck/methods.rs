use tracing::{debug, info, instrument, warn};

use crate::{error::ParseError, types::card::{Card, CardEdit}};

impl super::Deck {
	/// Builds a deck from a name the caller has already checked is not blank.
	/// User input goes through [`Deck::named`] instead.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), tags: Vec::new(), cards: Vec::new() }
	}

	/// A deck with the trimmed `name`, or `EmptyInput` when it is blank
	#[instrument]
	pub fn named(name: &str) -> Result<Self, ParseError> {
		let name = name.trim();
		if name.is_empty() {
			warn!("Refusing a blank deck name");
			return Err(ParseError::EmptyInput);
		}
		Ok(Self::new(name))
	}

	#[instrument(skip(tags))]
	pub fn with_tags(name: &str, tags: Vec<String>) -> Result<Self, ParseError> {
		let mut deck = Self::named(name)?;
		deck.add_tags(&tags);
		Ok(deck)
	}

	pub fn name(&self) -> &str { &self.name }

	pub fn tags(&self) -> &[String] { &self.tags }

	pub fn cards(&self) -> &[Card] { &self.cards }

	pub fn card(&self, index: usize) -> Option<&Card> { self.cards.get(index) }

	pub fn len(&self) -> usize { self.cards.len() }

	pub fn is_empty(&self) -> bool { self.cards.is_empty() }

	#[instrument(skip(self), fields(deck = %self.name))]
	pub fn rename(&mut self, name: &str) -> Result<(), ParseError> {
		let name = name.trim();
		if name.is_empty() {
			warn!("Refusing a blank deck name");
			return Err(ParseError::EmptyInput);
		}
		self.name = name.to_string();
		info!("Deck renamed");
		Ok(())
	}

	#[instrument(skip(self, card), fields(deck = %self.name))]
	pub fn add_card(&mut self, card: Card) -> usize {
		self.cards.push(card);
		debug!("Deck now holds {} cards", self.cards.len());
		self.cards.len() - 1
	}

	#[instrument(skip(self), fields(deck = %self.name))]
	pub fn remove_card(&mut self, index: usize) -> Option<Card> {
		if index >= self.cards.len() {
			warn!("No card at index {}", index);
			return None;
		}
		Some(self.cards.remove(index))
	}

	#[instrument(skip(self, edit), fields(deck = %self.name))]
	pub fn update_card(&mut self, index: usize, edit: CardEdit) -> Option<bool> {
		let card = self.cards.get_mut(index)?;
		Some(card.apply(edit))
	}

	/// Adds tags not already present, returning the ones that were new
	#[instrument(skip(self), fields(deck = %self.name))]
	pub fn add_tags(&mut self, tags: &[String]) -> Vec<String> {
		let mut added = Vec::new();
		for tag in tags {
			if !self.tags.contains(tag) {
				self.tags.push(tag.clone());
				added.push(tag.clone());
			}
		}
		debug!("Added {} of {} tags", added.len(), tags.len());
		added
	}

	/// Removes the given tags, returning the ones that were actually present
	#[instrument(skip(self), fields(deck = %self.name))]
	pub fn remove_tags(&mut self, tags: &[String]) -> Vec<String> {
		let removed: Vec<String> = self.tags.iter().filter(|t| tags.contains(t)).cloned().collect();
		self.tags.retain(|t| !tags.contains(t));
		debug!("Removed {} of {} tags", removed.len(), tags.len());
		removed
	}

	pub fn has_any_tag(&self, terms: &[String]) -> bool {
		self.tags.iter().any(|tag| terms.contains(tag))
	}
}

#[cfg(test)]
mod tests {
	use crate::{error::ParseError, types::{card::{Card, CardEdit}, deck::Deck}};

	fn tags(list: &[&str]) -> Vec<String> { list.iter().map(|t| t.to_string()).collect() }

	#[test]
	fn tags_are_deduplicated_in_first_seen_order() {
		let deck = Deck::with_tags("Macro", tags(&["econ", "exam", "econ"])).unwrap();
		assert_eq!(deck.tags(), tags(&["econ", "exam"]).as_slice());
	}

	#[test]
	fn add_tags_reports_only_new_tags() {
		let mut deck = Deck::with_tags("Macro", tags(&["econ"])).unwrap();
		let added = deck.add_tags(&tags(&["econ", "urgent"]));

		assert_eq!(added, tags(&["urgent"]));
		assert_eq!(deck.tags(), tags(&["econ", "urgent"]).as_slice());
	}

	#[test]
	fn remove_tags_ignores_missing() {
		let mut deck = Deck::with_tags("Macro", tags(&["econ", "exam"])).unwrap();
		let removed = deck.remove_tags(&tags(&["exam", "nope"]));

		assert_eq!(removed, tags(&["exam"]));
		assert_eq!(deck.tags(), tags(&["econ"]).as_slice());
	}

	#[test]
	fn card_removal_shifts_later_cards() {
		let mut deck = Deck::new("Micro");
		deck.add_card(Card::new("q1", "a1").unwrap());
		deck.add_card(Card::new("q2", "a2").unwrap());

		let removed = deck.remove_card(0).unwrap();
		assert_eq!(removed.question(), "q1");
		assert_eq!(deck.card(0).map(Card::question), Some("q2"));
		assert!(deck.remove_card(5).is_none());
	}

	#[test]
	fn update_card_out_of_range_is_none() {
		let mut deck = Deck::new("Micro");
		assert_eq!(deck.update_card(0, CardEdit::default()), None);
	}

	#[test]
	fn rename_keeps_contents() {
		let mut deck = Deck::with_tags("Old", tags(&["t"])).unwrap();
		deck.rename(" New ").unwrap();
		assert_eq!(deck.name(), "New");
		assert_eq!(deck.tags(), tags(&["t"]).as_slice());
	}

	#[test]
	fn blank_rename_keeps_old_name() {
		let mut deck = Deck::new("Old");
		assert_eq!(deck.rename("  "), Err(ParseError::EmptyInput));
		assert_eq!(deck.rename(""), Err(ParseError::EmptyInput));
		assert_eq!(deck.name(), "Old");
	}

	#[test]
	fn named_trims_and_rejects_blank() {
		assert_eq!(Deck::named("  Macro ").unwrap(), Deck::new("Macro"));
		assert_eq!(Deck::named(""), Err(ParseError::EmptyInput));
		assert_eq!(Deck::named(" \t "), Err(ParseError::EmptyInput));
	}
}
