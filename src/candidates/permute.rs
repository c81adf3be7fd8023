//! Insert-at-every-position permutation
//!
//! Each source letter in turn is inserted at every index of a shared working
//! buffer. Terminal buffers that satisfy the mask are added to the output set;
//! set semantics fold together arrangements that differ only in which copy of
//! a repeated letter went where.

use crate::core::{Mask, matches_position_mask};
use rustc_hash::FxHashSet;

/// Add every distinct arrangement of `letters` that satisfies `mask` to `output`
///
/// An empty mask accepts every arrangement of non-empty input.
pub fn permute_into(letters: &[char], mask: &Mask, output: &mut FxHashSet<String>) {
    let mut working = Vec::with_capacity(letters.len());
    insert_each(letters, mask, &mut working, output);
}

fn insert_each(
    letters: &[char],
    mask: &Mask,
    working: &mut Vec<char>,
    output: &mut FxHashSet<String>,
) {
    let Some((&letter, rest)) = letters.split_first() else {
        if matches_position_mask(mask.slots(), mask.wildcard().as_char(), working) {
            output.insert(working.iter().collect());
        }
        return;
    };

    for index in 0..=working.len() {
        working.insert(index, letter);
        insert_each(rest, mask, working, output);
        working.remove(index);
    }
}
