//! Geometric embedding of words into the plane.
//!
//! The symbol at (0-based) index `i` contributes sign · (1/2)^i to the x axis
//! (base `a`) or the y axis (base `b`), sign −1 for inverse symbols. The first
//! symbol therefore contributes magnitude 1, the second 0.5, and so on. The
//! series converges, so every embedded point satisfies |x| < 2 and |y| < 2
//! strictly, which bounds the plotting viewport regardless of word length.
//!
//! No normalization, rounding, or collision handling: distinct words may map
//! to distinct but arbitrarily close points.

use crate::generator::{Base, Generator};

/// Positional embedding of a word in the free-group Cayley graph.
pub fn embed(word: &[Generator]) -> (f64, f64) {
    let (mut x, mut y) = (0.0, 0.0);
    for (i, g) in word.iter().enumerate() {
        let step = g.sign() * 0.5f64.powi(i as i32);
        match g.base() {
            Base::A => x += step,
            Base::B => y += step,
        }
    }
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::parse_word;
    use approx::assert_relative_eq;

    fn embed_text(text: &str) -> (f64, f64) {
        embed(&parse_word(text).unwrap())
    }

    #[test]
    fn empty_word_sits_at_the_origin() {
        assert_eq!(embed(&[]), (0.0, 0.0));
    }

    #[test]
    fn first_symbol_has_unit_magnitude() {
        let (x, y) = embed_text("a");
        assert_relative_eq!(x, 1.0);
        assert_relative_eq!(y, 0.0);

        let (x, y) = embed_text("b_inv");
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, -1.0);
    }

    #[test]
    fn magnitudes_halve_per_index() {
        // a then a_inv: 1 − 0.5 on x.
        let (x, y) = embed_text("a a_inv");
        assert_relative_eq!(x, 0.5);
        assert_relative_eq!(y, 0.0);

        // a, b, a: x = 1 + 0.25, y = 0.5.
        let (x, y) = embed_text("a b a");
        assert_relative_eq!(x, 1.25);
        assert_relative_eq!(y, 0.5);
    }

    #[test]
    fn all_same_symbol_approaches_but_never_reaches_two() {
        let word = vec![Generator::A; 40];
        let (x, y) = embed(&word);
        assert!(x < 2.0);
        assert!(x > 1.999);
        assert_relative_eq!(y, 0.0);
    }
}
