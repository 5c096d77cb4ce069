//! Entropy estimate for a generated password.

use std::fmt;

/// Password entropy in bits for independent uniform draws.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}
