use crate::types::card::Card;

mod methods;

/// A named, tagged, ordered set of cards.
///
/// Tags behave as a set (no duplicates) but keep the order in which they were
/// first added so listings are stable. Card order is study order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
	name:  String,
	tags:  Vec<String>,
	cards: Vec<Card>,
}
