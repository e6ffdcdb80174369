//! Executable commands and what they report back.
//!
//! A command is a plain value built by the dispatcher from already validated
//! input. Executing it mutates the decks it is handed and returns an
//! [`Outcome`]: leveled messages for the console plus an optional
//! [`Transition`] the session applies afterwards.

pub mod deck;
pub mod normal;

pub use deck::DeckCommand;
pub use normal::NormalCommand;

/// What every mode's command type must offer the dispatcher
pub trait Command: Sized {
	/// The command produced for unknown keywords (`None`) or rejected input
	fn void(reason: Option<String>) -> Self;

	fn is_void(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
	Info,
	Success,
	Warning,
	Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
	pub level:   MessageLevel,
	pub content: String,
}

impl Message {
	pub fn info(content: impl Into<String>) -> Self {
		Self { level: MessageLevel::Info, content: content.into() }
	}

	pub fn success(content: impl Into<String>) -> Self {
		Self { level: MessageLevel::Success, content: content.into() }
	}

	pub fn warning(content: impl Into<String>) -> Self {
		Self { level: MessageLevel::Warning, content: content.into() }
	}

	pub fn error(content: impl Into<String>) -> Self {
		Self { level: MessageLevel::Error, content: content.into() }
	}
}

/// A change of interpreter state requested by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
	Exit,
	EditDeck(usize),
	StudyDeck(usize),
	LeaveDeck,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub messages:   Vec<Message>,
	pub transition: Option<Transition>,
}

impl Outcome {
	pub fn message(message: Message) -> Self { Self::default().with_message(message) }

	pub fn transition(transition: Transition) -> Self {
		Self { messages: Vec::new(), transition: Some(transition) }
	}

	pub fn add_message(&mut self, message: Message) { self.messages.push(message); }

	pub fn with_message(mut self, message: Message) -> Self {
		self.messages.push(message);
		self
	}

	pub fn is_empty(&self) -> bool { self.messages.is_empty() && self.transition.is_none() }
}

/// Shared rendering for void commands of either mode
pub(crate) fn void_outcome(reason: Option<String>) -> Outcome {
	reason.map(|r| Outcome::message(Message::error(r))).unwrap_or_default()
}

pub(crate) fn version_outcome() -> Outcome {
	Outcome::message(Message::info(format!("flashdeck v{}", env!("CARGO_PKG_VERSION"))))
}
