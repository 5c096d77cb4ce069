//! Password generator form.
//!
//! Pick a length between 4 and 16 and any mix of lowercase, uppercase, digit
//! and symbol characters; get one random password back. The core is
//! [`pass::validate`], [`pass::generate`] and the [`Session`] state machine
//! that sequences them. The [`tui`] form and the [`cli`] mode are thin front
//! ends over that core.

pub mod cli;
pub mod clipboard;
mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod session;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use pass::{
    CharacterClass, CharacterClassSelection, GeneratedPassword, GenerationError, ValidatedLength,
    ValidationError, generate, validate,
};
pub use rand::{IndexSource, Rand, Sequence};
pub use session::{SelectionError, Session, SessionError, SessionState, Status};
pub use settings::Settings;
