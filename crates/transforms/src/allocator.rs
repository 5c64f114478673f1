//! Collision-free allocation of replacement names.

use crate::sentence::SentenceGenerator;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Pulls candidates of `length` characters from `supply` until one, after `shape` is
/// applied, is not in `forbidden`.
///
/// Returns `None` once the supply is exhausted. Every rejected candidate is still
/// consumed from the supply, which never hands it out again.
///
/// # Arguments
/// * `length` - Exact character length of the replacement
/// * `forbidden` - Names the replacement must not collide with
/// * `supply` - Source of unique candidates
/// * `shape` - Final spelling of a candidate, e.g. capitalization for class names
pub fn allocate<F>(
    length: usize,
    forbidden: &HashSet<String>,
    supply: &mut dyn SentenceGenerator,
    shape: F,
) -> Option<String>
where
    F: Fn(&str) -> String,
{
    allocate_where(length, supply, shape, |candidate| !forbidden.contains(candidate))
}

/// Like [`allocate`], but with an arbitrary acceptance test on the shaped candidate.
pub fn allocate_where<F, A>(
    length: usize,
    supply: &mut dyn SentenceGenerator,
    shape: F,
    accept: A,
) -> Option<String>
where
    F: Fn(&str) -> String,
    A: Fn(&str) -> bool,
{
    while let Some(candidate) = supply.unique_sentence(length) {
        let candidate = shape(&candidate);
        if candidate.chars().count() != length {
            warn!(
                "Name supply returned '{}' for length {}; discarding",
                candidate, length
            );
            continue;
        }
        if !accept(&candidate) {
            trace!("Candidate '{}' collides with a reserved name", candidate);
            continue;
        }
        return Some(candidate);
    }
    debug!("Name supply exhausted for length {}", length);
    None
}
