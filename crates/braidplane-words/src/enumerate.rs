//! Recursive enumeration of braid words.
//!
//! Words are built by appending one symbol at a time to a growing prefix and
//! finalizing the prefix once it reaches the target length. With pruning
//! enabled, the one symbol that would immediately cancel the prefix's last
//! symbol is excluded at each step.
//!
//! Pruning is deliberately *adjacent-only*: cancellations separated by other
//! symbols (`a b a_inv`) are not detected, and neither are cancellations that
//! only appear after full reduction. This matches the intended enumeration
//! semantics rather than full reduced-word semantics.

use crate::generator::{Generator, Word};
use thiserror::Error;

/// Hard upper bound on the accepted max order.
///
/// The generated word count grows as 4^n (3^n with pruning), so this is a
/// memory guard: orders above the limit are rejected before any generation
/// happens.
pub const MAX_ORDER_LIMIT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerateError {
    #[error("max order {0} exceeds the supported limit {MAX_ORDER_LIMIT} (word count grows as 4^n)")]
    OrderTooLarge(usize),
}

/// All words of exactly `order` symbols, in canonical symbol order.
///
/// `order == 0` yields the single empty word; `order == 1` yields the four
/// singleton words.
pub fn words_of_order(order: usize, prune_backtrack: bool) -> Vec<Word> {
    let mut out = Vec::new();
    extend(&mut out, Vec::new(), order, prune_backtrack);
    out
}

fn extend(out: &mut Vec<Word>, prefix: Word, order: usize, prune_backtrack: bool) {
    if prefix.len() == order {
        out.push(prefix);
        return;
    }

    let redundant = if prune_backtrack {
        prefix.last().map(|g| g.inverse())
    } else {
        None
    };

    for g in Generator::ALL {
        if Some(g) == redundant {
            continue;
        }
        let mut next = prefix.clone();
        next.push(g);
        extend(out, next, order, prune_backtrack);
    }
}

/// All words of every order in `0..max_order`, in increasing order length.
///
/// `max_order == 0` yields an empty collection. Orders above
/// [`MAX_ORDER_LIMIT`] are rejected up front.
pub fn enumerate_up_to(
    max_order: usize,
    prune_backtrack: bool,
) -> Result<Vec<Word>, EnumerateError> {
    if max_order > MAX_ORDER_LIMIT {
        return Err(EnumerateError::OrderTooLarge(max_order));
    }

    let mut all = Vec::new();
    for order in 0..max_order {
        all.extend(words_of_order(order, prune_backtrack));
    }
    Ok(all)
}
