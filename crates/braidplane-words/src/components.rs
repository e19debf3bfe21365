//! The 3-strand permutation invariant.
//!
//! A word acts on three strands: base `a` swaps strands 0↔1, base `b` swaps
//! strands 1↔2. Orientation is irrelevant here because transpositions are
//! self-inverse. The component count is derived from how many strands the
//! final permutation moves:
//!
//! | moved strands | components |
//! |---------------|------------|
//! | 0             | 3          |
//! | 2             | 2          |
//! | 3             | 1          |
//!
//! A permutation of three elements can never move exactly one strand, so a
//! mismatch count of 1 is an internal-consistency violation and fails loudly.

use crate::generator::{Base, Generator};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("3-strand permutation ended with mismatch count 1, which no permutation of three elements can produce")]
    ImpossibleMismatchCount,
}

/// Number of connected components of the closed 3-strand braid, in {1, 2, 3}.
///
/// Depends only on the sequence of base letters in the word; replacing any
/// symbol with its opposite-orientation counterpart never changes the result.
pub fn component_count(word: &[Generator]) -> Result<u8, InvariantError> {
    let mut perm: [usize; 3] = [0, 1, 2];
    for g in word {
        match g.base() {
            Base::A => perm.swap(0, 1),
            Base::B => perm.swap(1, 2),
        }
    }

    let mismatches = (0..3).filter(|&i| perm[i] != i).count();
    match mismatches {
        0 => Ok(3),
        2 => Ok(2),
        3 => Ok(1),
        _ => Err(InvariantError::ImpossibleMismatchCount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::parse_word;

    fn count(text: &str) -> u8 {
        component_count(&parse_word(text).unwrap()).unwrap()
    }

    #[test]
    fn empty_word_is_the_identity() {
        assert_eq!(count(""), 3);
    }

    #[test]
    fn single_transposition_leaves_two_components() {
        assert_eq!(count("a"), 2);
        assert_eq!(count("b"), 2);
    }

    #[test]
    fn a_twice_is_the_identity_again() {
        assert_eq!(count("a a"), 3);
    }

    #[test]
    fn a_then_b_is_a_three_cycle() {
        // a: [1,0,2]; then b swaps slots 1 and 2: [1,2,0] — all three move.
        assert_eq!(count("a b"), 1);
    }

    #[test]
    fn orientation_never_matters() {
        assert_eq!(count("a_inv"), count("a"));
        assert_eq!(count("a b_inv"), count("a b"));
        assert_eq!(count("a_inv b_inv a_inv"), count("a b a"));
    }
}
