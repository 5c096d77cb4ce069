//! Character classes and alphabet building for password generation.

use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Form display order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// Alphabet concatenation order.
    const CANONICAL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase",
            CharacterClass::Uppercase => "Include Uppercase",
            CharacterClass::Digits => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which character classes feed the alphabet. Any combination is a valid
/// value, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassSelection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClassSelection {
    pub const NONE: Self = Self {
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    pub const ALL: Self = Self {
        lowercase: true,
        uppercase: true,
        digits: true,
        symbols: true,
    };

    pub fn only(class: CharacterClass) -> Self {
        Self::NONE.with(class, true)
    }

    #[must_use]
    pub fn with(mut self, class: CharacterClass, enabled: bool) -> Self {
        self.set(class, enabled);
        self
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Digits => self.digits = enabled,
            CharacterClass::Symbols => self.symbols = enabled,
        }
    }

    pub fn enabled_count(&self) -> usize {
        CharacterClass::ALL
            .iter()
            .filter(|&&c| self.is_enabled(c))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled_count() == 0
    }
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self::only(CharacterClass::Lowercase)
    }
}

/// Build the alphabet for a selection, classes in canonical order.
pub fn build(selection: &CharacterClassSelection) -> Vec<char> {
    CharacterClass::CANONICAL
        .iter()
        .filter(|&&class| selection.is_enabled(class))
        .flat_map(|class| class.chars().chars())
        .collect()
}

/// Alphabet size without building it (for entropy calculation).
pub fn size(selection: &CharacterClassSelection) -> usize {
    CharacterClass::ALL
        .iter()
        .filter(|&&class| selection.is_enabled(class))
        .map(|class| class.chars().len())
        .sum()
}
