use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::types::deck::Deck;

/// The session's decks, in display order. Positions are always `0..len`.
#[derive(Debug, Default, Clone)]
pub struct DeckList {
	decks: Vec<Deck>,
}

impl DeckList {
	pub fn new() -> Self { Self::default() }

	pub fn len(&self) -> usize { self.decks.len() }

	pub fn is_empty(&self) -> bool { self.decks.is_empty() }

	pub fn decks(&self) -> &[Deck] { &self.decks }

	pub fn get(&self, index: usize) -> Option<&Deck> { self.decks.get(index) }

	pub fn get_mut(&mut self, index: usize) -> Option<&mut Deck> { self.decks.get_mut(index) }

	/// Appends a deck and returns its position
	#[instrument(skip(self, deck), fields(deck = %deck.name()))]
	pub fn add(&mut self, deck: Deck) -> usize {
		self.decks.push(deck);
		info!("Deck list now holds {} decks", self.decks.len());
		self.decks.len() - 1
	}

	#[instrument(skip(self))]
	pub fn remove(&mut self, index: usize) -> Option<Deck> {
		if index >= self.decks.len() {
			warn!("No deck at index {}", index);
			return None;
		}
		Some(self.decks.remove(index))
	}

	/// Decks carrying any of the given tags, with their positions
	#[instrument(skip(self))]
	pub fn search(&self, terms: &[String]) -> Vec<(usize, &Deck)> {
		let found: Vec<_> =
			self.decks.iter().enumerate().filter(|(_, deck)| deck.has_any_tag(terms)).collect();
		debug!("{} decks matched", found.len());
		found
	}
}

impl fmt::Display for DeckList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Decks:")?;
		for (i, deck) in self.decks.iter().enumerate() {
			write!(f, "\n{}. {}", i + 1, deck.name())?;
		}
		Ok(())
	}
}

impl FromIterator<Deck> for DeckList {
	fn from_iter<I: IntoIterator<Item = Deck>>(iter: I) -> Self {
		Self { decks: iter.into_iter().collect() }
	}
}
