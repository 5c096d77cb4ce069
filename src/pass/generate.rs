//! Password generation.

use std::fmt;

use zeroize::Zeroize;

use super::charset::{self, CharacterClassSelection};
use super::length::ValidatedLength;
use crate::rand::IndexSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("at least one character class must be enabled")]
    EmptyAlphabet,
}

/// A generated password. Zeroed on drop; `Debug` shows only its length.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters. The alphabet is ASCII, so this is also the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.0.len())
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a single password: every position is an independent, uniform
/// draw over the selection's alphabet.
pub fn generate<R>(
    selection: &CharacterClassSelection,
    length: ValidatedLength,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerationError>
where
    R: IndexSource + ?Sized,
{
    let mut chars = charset::build(selection);
    if chars.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }

    let password: String = (0..length.get())
        .map(|_| chars[rng.next_index(chars.len())])
        .collect();
    chars.zeroize();

    Ok(GeneratedPassword(password))
}
