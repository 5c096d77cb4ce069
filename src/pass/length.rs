//! Password length validation.

use std::fmt;
use std::num::IntErrorKind;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `empty` distinguishes a blank field from garbage text for display.
    #[error("{}", not_a_number_message(.empty))]
    NotANumber { empty: bool },
    #[error("Min of 4 characters required!")]
    TooShort,
    #[error("Max 16 characters allowed!")]
    TooLong,
}

fn not_a_number_message(empty: &bool) -> &'static str {
    if *empty {
        "Length is required!"
    } else {
        "Length must be a number!"
    }
}

/// A length within `MIN_LENGTH..=MAX_LENGTH`. Only [`validate`] builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValidatedLength(usize);

impl ValidatedLength {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ValidatedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse and bounds-check the text of the length field.
pub fn validate(length_text: &str) -> Result<ValidatedLength, ValidationError> {
    let text = length_text.trim();
    if text.is_empty() {
        return Err(ValidationError::NotANumber { empty: true });
    }

    let n: i64 = match text.parse() {
        Ok(n) => n,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::TooLong,
                IntErrorKind::NegOverflow => ValidationError::TooShort,
                _ => ValidationError::NotANumber { empty: false },
            });
        }
    };

    if n < MIN_LENGTH as i64 {
        Err(ValidationError::TooShort)
    } else if n > MAX_LENGTH as i64 {
        Err(ValidationError::TooLong)
    } else {
        Ok(ValidatedLength(n as usize))
    }
}
