//! The free-group alphabet on two generators.
//!
//! Every symbol decomposes uniquely into a base letter (`a` or `b`) and an
//! orientation (forward or inverse). The canonical text forms are `a`,
//! `a_inv`, `b`, `b_inv`; these are used by the CLI and by word parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The base letter of a generator, with orientation stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Base {
    A,
    B,
}

/// One of the four atomic symbols of the free group on {a, b}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    A,
    AInv,
    B,
    BInv,
}

impl Generator {
    /// Canonical enumeration order for the alphabet.
    ///
    /// Any fixed order works for correctness; this one is pinned so that
    /// enumeration output is byte-for-byte reproducible across runs.
    pub const ALL: [Generator; 4] = [
        Generator::A,
        Generator::AInv,
        Generator::B,
        Generator::BInv,
    ];

    pub fn base(self) -> Base {
        match self {
            Generator::A | Generator::AInv => Base::A,
            Generator::B | Generator::BInv => Base::B,
        }
    }

    pub fn is_inverse(self) -> bool {
        matches!(self, Generator::AInv | Generator::BInv)
    }

    /// Orientation as a signed factor: +1 forward, −1 inverse.
    pub fn sign(self) -> f64 {
        if self.is_inverse() {
            -1.0
        } else {
            1.0
        }
    }

    /// The exact algebraic inverse of this symbol.
    pub fn inverse(self) -> Generator {
        match self {
            Generator::A => Generator::AInv,
            Generator::AInv => Generator::A,
            Generator::B => Generator::BInv,
            Generator::BInv => Generator::B,
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Generator::A => "a",
            Generator::AInv => "a_inv",
            Generator::B => "b",
            Generator::BInv => "b_inv",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown generator `{0}` (expected a|a_inv|b|b_inv)")]
pub struct ParseGeneratorError(pub String);

impl FromStr for Generator {
    type Err = ParseGeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" => Ok(Generator::A),
            "a_inv" => Ok(Generator::AInv),
            "b" => Ok(Generator::B),
            "b_inv" => Ok(Generator::BInv),
            other => Err(ParseGeneratorError(other.to_string())),
        }
    }
}

/// A braid word: an ordered, finite sequence of generator symbols.
///
/// Words are produced immutably by enumeration and never mutated afterwards.
pub type Word = Vec<Generator>;

/// Parse a word from whitespace-separated generator tokens.
///
/// The empty string parses to the empty word.
pub fn parse_word(text: &str) -> Result<Word, ParseGeneratorError> {
    text.split_whitespace().map(Generator::from_str).collect()
}
