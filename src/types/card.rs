use crate::error::ParseError;

/// A single question/answer pair. Both sides are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
	question: String,
	answer:   String,
}

/// Replacement text for a card; `None` keeps the current side
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardEdit {
	pub question: Option<String>,
	pub answer:   Option<String>,
}

impl Card {
	pub fn new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Result<Self, ParseError> {
		let question = question.as_ref().trim();
		let answer = answer.as_ref().trim();

		if question.is_empty() || answer.is_empty() {
			return Err(ParseError::EmptyInput);
		}

		Ok(Self { question: question.to_string(), answer: answer.to_string() })
	}

	pub fn question(&self) -> &str { &self.question }

	pub fn answer(&self) -> &str { &self.answer }

	/// Applies the non-blank parts of an edit, returning whether anything changed
	pub fn apply(&mut self, edit: CardEdit) -> bool {
		let mut changed = false;

		if let Some(question) = non_blank(edit.question) {
			changed |= question != self.question;
			self.question = question;
		}
		if let Some(answer) = non_blank(edit.answer) {
			changed |= answer != self.answer;
			self.answer = answer;
		}

		changed
	}
}

fn non_blank(text: Option<String>) -> Option<String> {
	text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
