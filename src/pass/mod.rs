//! Password validation and generation.

pub mod charset;
mod generate;
pub mod length;
pub mod strength;

pub use charset::{CharacterClass, CharacterClassSelection};
pub use generate::{GeneratedPassword, GenerationError, generate};
pub use length::{MAX_LENGTH, MIN_LENGTH, ValidatedLength, ValidationError, validate};
pub use strength::{Strength, entropy_bits};
