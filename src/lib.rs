//! An interactive interpreter for flashcard decks.
//!
//! Each input line is parsed by the grammar of the current mode into a
//! command value, which is then executed against the session's decks.
//!
//! - [`parse`]: keyword dispatch, index resolution and argument splitting
//! - [`command`]: the commands of both modes and their outcomes
//! - [`session`]: mode switching and the owned deck list
//! - [`types`]: decks, cards and configuration
//! - [`console`]: the terminal front-end

pub mod command;
pub mod console;
pub mod error;
pub mod export;
pub mod parse;
pub mod session;
pub mod types;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
