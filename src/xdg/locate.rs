//! Preference-ordered lookup of a relative path in a set of base directories.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::fs::{PathExt, Predicate, apply_filters, is_absolute, is_existing, is_list};

/// Candidates must be absolute, then exist.
const CANDIDATE_FILTERS: [Predicate; 2] = [is_absolute, is_existing];

/// Join `relative` onto every directory of `dirs`, in order.
///
/// A directory value containing the path-list separator is split first, and its segments are
/// joined left to right.
pub fn candidates<I>(dirs: I, relative: &Path) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut result = Vec::with_capacity(4);
    for dir in dirs {
        if dir.satisfies(is_list) {
            result.extend(dir.split_list().map(|segment| segment.join_clean(relative)));
        } else {
            result.push(dir.join_clean(relative));
        }
    }
    result
}

/// First of `candidates` which is absolute and exists.
pub fn first_existing<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let candidates = candidates.into_iter().inspect(|candidate| {
        trace!(?candidate, "checking candidate");
    });
    apply_filters(candidates, &CANDIDATE_FILTERS).next()
}
