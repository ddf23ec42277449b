//! Boolean checks over paths, and filtering of candidate lists by them.

use std::{
    io,
    path::{Path, PathBuf},
};

/// A check over a single path.
pub type Predicate = fn(&Path) -> bool;

#[cfg(unix)]
const LIST_SEPARATOR: u8 = b':';
#[cfg(not(unix))]
const LIST_SEPARATOR: u8 = b';';

/// Returns `true` if `path` is absolute. An empty path is never absolute.
///
/// Base directory variables must hold absolute paths; a relative value is treated as invalid.
pub fn is_absolute(path: &Path) -> bool {
    path.is_absolute()
}

/// Returns `true` if something exists at `path` right now.
///
/// Symlinks are followed, so a dangling link does not exist. Failures other than "not found"
/// and "not a directory" (for instance, permission denied on the entry) still count as
/// existing. The answer may be stale by the time the caller uses the path.
pub fn is_existing(path: &Path) -> bool {
    match path.try_exists() {
        Ok(exists) => exists,
        Err(err) => !matches!(
            err.kind(),
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
        ),
    }
}

/// Returns `true` if `path` contains the platform's path-list separator (`:` on Unix).
pub fn is_list(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .contains(&LIST_SEPARATOR)
}

/// Keep the `paths` satisfying every predicate of `filters`, in order.
///
/// Predicates are evaluated left to right and stop at the first failure. With no filters every
/// path is kept.
pub fn apply_filters<'a, I>(
    paths: I,
    filters: &'a [Predicate],
) -> impl Iterator<Item = PathBuf> + 'a
where
    I: IntoIterator<Item = PathBuf>,
    I::IntoIter: 'a,
{
    paths
        .into_iter()
        .filter(move |path| filters.iter().all(|filter| filter(path.as_path())))
}
