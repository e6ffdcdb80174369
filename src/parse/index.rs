use tracing::{debug, instrument, warn};

use crate::{error::{Collection, ParseError}, types::{card::Card, deck::Deck, deck_list::DeckList}};

/// An ordered collection the user can address with 1-based indices
pub trait Indexed {
	type Item;

	const COLLECTION: Collection;

	fn items(&self) -> &[Self::Item];
}

impl Indexed for DeckList {
	type Item = Deck;

	const COLLECTION: Collection = Collection::Deck;

	fn items(&self) -> &[Deck] { self.decks() }
}

impl Indexed for Deck {
	type Item = Card;

	const COLLECTION: Collection = Collection::Card;

	fn items(&self) -> &[Card] { self.cards() }
}

/// Turns 1-based user text into a 0-based position below `size`.
///
/// Non-numeric text is a `Format` error even when the collection is empty;
/// only well-formed numerals are range checked.
#[instrument(level = "debug")]
pub fn resolve_index(raw: &str, size: usize, collection: Collection) -> Result<usize, ParseError> {
	let digits = raw.trim();

	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		warn!("User did not enter a valid integer index");
		return Err(ParseError::Format);
	}

	// A numeral too long for usize is still a number, just out of range
	let index = digits.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).filter(|&i| i < size);

	match index {
		Some(index) => {
			debug!("Resolved {} index {}", collection, index);
			Ok(index)
		}
		None => {
			warn!("User did not enter an index in the valid range");
			Err(ParseError::Range { collection, size })
		}
	}
}

pub fn resolve<T: Indexed>(raw: &str, target: &T) -> Result<usize, ParseError> {
	resolve_index(raw, target.items().len(), T::COLLECTION)
}

/// Resolves an index and hands back the addressed item with it
pub fn select<'t, T: Indexed>(raw: &str, target: &'t T) -> Result<(usize, &'t T::Item), ParseError> {
	let index = resolve(raw, target)?;
	let size = target.items().len();
	target
		.items()
		.get(index)
		.map(|item| (index, item))
		.ok_or(ParseError::Range { collection: T::COLLECTION, size })
}

#[cfg(test)]
mod tests {
	use super::*;

	const DECKS: Collection = Collection::Deck;

	#[test]
	fn valid_index_is_shifted_to_zero_based() {
		assert_eq!(resolve_index("1", 2, DECKS), Ok(0));
		assert_eq!(resolve_index("2", 2, DECKS), Ok(1));
	}

	#[test]
	fn surrounding_whitespace_is_ignored() {
		for raw in [" 1", "\t1", "1\t", "     1 "] {
			assert_eq!(resolve_index(raw, 2, DECKS), Ok(0), "{:?}", raw);
		}
		assert_eq!(resolve_index("2\t", 2, DECKS), Ok(1));
	}

	#[test]
	fn out_of_range_numerals_are_range_errors() {
		let range = Err(ParseError::Range { collection: DECKS, size: 2 });
		assert_eq!(resolve_index("3", 2, DECKS), range);
		assert_eq!(resolve_index("0", 2, DECKS), range);
		assert_eq!(resolve_index("99999999999999999999999", 2, DECKS), range);
	}

	#[test]
	fn non_numeric_text_is_a_format_error() {
		for raw in ["", "   ", "something", " something", "-1", "+1", "1.0", "1 2"] {
			assert_eq!(resolve_index(raw, 2, DECKS), Err(ParseError::Format), "{:?}", raw);
		}
	}

	#[test]
	fn format_is_checked_before_range() {
		assert_eq!(resolve_index("x", 0, DECKS), Err(ParseError::Format));
		assert_eq!(
			resolve_index("1", 0, DECKS),
			Err(ParseError::Range { collection: DECKS, size: 0 })
		);
	}

	#[test]
	fn success_iff_within_one_to_n() {
		for size in 0..5usize {
			for k in 0..8usize {
				let result = resolve_index(&k.to_string(), size, DECKS);
				if (1..=size).contains(&k) {
					assert_eq!(result, Ok(k - 1));
				} else {
					assert_eq!(result, Err(ParseError::Range { collection: DECKS, size }));
				}
			}
		}
	}

	#[test]
	fn select_returns_the_addressed_card() {
		let mut deck = Deck::new("Pokemon");
		deck.add_card(Card::new("q 1", "a 1").unwrap());
		deck.add_card(Card::new("q 2", "a 2").unwrap());

		let (index, card) = select(" 2", &deck).unwrap();
		assert_eq!(index, 1);
		assert_eq!(card.question(), "q 2");
		assert_eq!(
			select("3", &deck).unwrap_err(),
			ParseError::Range { collection: Collection::Card, size: 2 }
		);
	}
}
