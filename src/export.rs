//! Renders a deck as a Markdown slide outline: a title slide, then a
//! question slide and an answer slide per card, separated by `---`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{error::Result, types::deck::Deck};

const SLIDE_BREAK: &str = "\n\n---\n\n";

pub fn render_slides(deck: &Deck) -> String {
	let mut slides = Vec::with_capacity(deck.len() * 2 + 1);

	let mut title = format!("# {}", deck.name());
	if !deck.tags().is_empty() {
		title.push_str(&format!("\n\n_{}_", deck.tags().join(", ")));
	}
	slides.push(title);

	for (i, card) in deck.cards().iter().enumerate() {
		slides.push(format!("## Question {}\n\n{}", i + 1, card.question()));
		slides.push(format!("## Answer {}\n\n{}", i + 1, card.answer()));
	}

	let mut outline = slides.join(SLIDE_BREAK);
	outline.push('\n');
	outline
}

/// File name for a deck's outline; anything but letters, digits, `-` and `_`
/// becomes `_`
pub fn file_name(deck: &Deck) -> String {
	let stem: String = deck
		.name()
		.chars()
		.map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
		.collect();
	format!("{}.md", stem)
}

#[instrument(skip(deck), fields(deck = %deck.name()))]
pub fn write_slides(deck: &Deck, dir: &Path) -> Result<PathBuf> {
	fs_err::create_dir_all(dir)?;

	let path = dir.join(file_name(deck));
	debug!("Writing {} slides", deck.len() * 2 + 1);
	fs_err::write(&path, render_slides(deck))?;

	info!("Exported deck to {:?}", path);
	Ok(path)
}
