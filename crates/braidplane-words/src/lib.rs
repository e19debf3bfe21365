//! Braid words over the free group on two generators.
//!
//! This crate is the algorithmic core of braidplane:
//! - [`generator`]: the 4-symbol alphabet {a, a⁻¹, b, b⁻¹} with its
//!   base/orientation decomposition and a canonical enumeration order,
//! - [`enumerate`]: recursive generation of all words up to a maximum order,
//!   with optional pruning of immediately-backtracking symbols,
//! - [`components`]: the 3-strand permutation invariant (component count),
//! - [`embed`]: the contracting geometric embedding of a word into the plane.
//!
//! Everything here is a pure function over finite data; rendering and console
//! reporting live in the CLI crate.

pub mod components;
pub mod embed;
pub mod enumerate;
pub mod generator;

pub use components::{component_count, InvariantError};
pub use embed::embed;
pub use enumerate::{enumerate_up_to, words_of_order, EnumerateError, MAX_ORDER_LIMIT};
pub use generator::{parse_word, Base, Generator, ParseGeneratorError, Word};
