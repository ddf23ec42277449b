use std::{
    env::{SplitPaths, split_paths},
    path::{Component, Path, PathBuf},
};

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with the operations the base-directory lookup is built from.
///
/// ```rust
/// # use xdgdirs::fs::*;
/// # use std::path::{Path, PathBuf};
/// let dirs = Path::new("/usr/local/share/:/usr/share/");
/// assert!(dirs.satisfies(is_list));
///
/// let candidates: Vec<PathBuf> = dirs
///     .split_list()
///     .map(|dir| dir.join_clean("fonts"))
///     .collect();
/// assert_eq!(
///     candidates,
///     [PathBuf::from("/usr/local/share/fonts"), PathBuf::from("/usr/share/fonts")]
/// );
/// ```
pub trait PathExt: sealed::Sealed {
    /// Append `segment` to `self` and lexically clean the result.
    ///
    /// Unlike [`Path::join`], an absolute `segment` does not replace `self`: its root is dropped
    /// and its components are appended. The joined path is then cleaned, i.e. repeated and
    /// trailing separators and `.` components are removed, and `..` removes the preceding normal
    /// component (`..` directly under the root stays at the root).
    ///
    /// Joining an empty path with an empty segment gives an empty path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use xdgdirs::fs::PathExt;
    /// # use std::path::{Path, PathBuf};
    /// assert_eq!(Path::new("/usr/share/").join_clean(""), PathBuf::from("/usr/share"));
    /// assert_eq!(Path::new("/etc//xdg").join_clean("/app/./rc"), PathBuf::from("/etc/xdg/app/rc"));
    /// assert_eq!(Path::new("/opt/a").join_clean("../b"), PathBuf::from("/opt/b"));
    /// ```
    fn join_clean(&self, segment: impl AsRef<Path>) -> PathBuf;

    /// Split `self` on the platform's path-list separator (`:` on Unix).
    ///
    /// Order is preserved and empty segments are yielded as empty paths, so a value with `k`
    /// separators always produces `k + 1` paths. Each call returns a fresh iterator.
    fn split_list(&self) -> SplitPaths<'_>;

    /// Apply `predicate` to `self`.
    fn satisfies(&self, predicate: impl Fn(&Path) -> bool) -> bool;
}

impl PathExt for Path {
    fn join_clean(&self, segment: impl AsRef<Path>) -> PathBuf {
        let appended = segment
            .as_ref()
            .components()
            .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)));

        let mut joined = PathBuf::new();
        for component in self.components().chain(appended) {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match joined.components().next_back() {
                    Some(Component::Normal(_)) => {
                        joined.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    Some(Component::ParentDir | Component::CurDir) | None => joined.push(".."),
                },
                other => joined.push(other),
            }
        }
        joined
    }

    fn split_list(&self) -> SplitPaths<'_> {
        split_paths(self.as_os_str())
    }

    fn satisfies(&self, predicate: impl Fn(&Path) -> bool) -> bool {
        predicate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::filter::{is_absolute, is_existing, is_list};
    use std::env::join_paths;
    use std::ffi::OsString;

    fn split(value: &str) -> Vec<PathBuf> {
        Path::new(value).split_list().collect()
    }

    #[test]
    fn join_appends_segment() {
        let joined = Path::new("/usr/local/share").join_clean("prog/file");
        assert_eq!(joined, PathBuf::from("/usr/local/share/prog/file"));
    }

    #[test]
    fn join_removes_redundant_separators() {
        assert_eq!(
            Path::new("/usr//share/").join_clean("app//data/"),
            PathBuf::from("/usr/share/app/data")
        );
        assert_eq!(Path::new("/usr/share/").join_clean(""), PathBuf::from("/usr/share"));
    }

    #[test]
    fn join_keeps_base_for_absolute_segment() {
        assert_eq!(Path::new("/usr").join_clean("/etc"), PathBuf::from("/usr/etc"));
    }

    #[test]
    fn join_resolves_parent_components_lexically() {
        assert_eq!(Path::new("/a/b").join_clean("../c"), PathBuf::from("/a/c"));
        assert_eq!(Path::new("/").join_clean("../x"), PathBuf::from("/x"));
        assert_eq!(Path::new("..").join_clean("../x"), PathBuf::from("../../x"));
        assert_eq!(Path::new("a").join_clean(".."), PathBuf::new());
    }

    #[test]
    fn join_on_empty_base_stays_relative() {
        let joined = Path::new("").join_clean(".local/share");
        assert_eq!(joined, PathBuf::from(".local/share"));
        assert!(!is_absolute(&joined));
        assert_eq!(Path::new("").join_clean(""), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn split_on_list_separator() {
        assert_eq!(
            split("/usr/local/share/:/usr/share/"),
            [PathBuf::from("/usr/local/share/"), PathBuf::from("/usr/share/")]
        );
        assert_eq!(
            split("/bin:/usr/bin:/usr/local/bin"),
            [
                PathBuf::from("/bin"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/usr/local/bin")
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn split_ignores_other_delimiters() {
        assert_eq!(
            split("/usr/local/share/,/usr/share/"),
            [PathBuf::from("/usr/local/share/,/usr/share/")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn split_preserves_empty_segments() {
        assert_eq!(split(""), [PathBuf::new()]);
        assert_eq!(
            split(":/a::"),
            [
                PathBuf::new(),
                PathBuf::from("/a"),
                PathBuf::new(),
                PathBuf::new()
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn split_then_join_reconstructs_value() {
        for value in ["/a", "/a:/b", "/usr/local/share/:/usr/share/", ":/x:", ""] {
            let segments = split(value);
            assert_eq!(segments.len(), value.matches(':').count() + 1);
            let rejoined = join_paths(&segments).expect("segments contain no separator");
            assert_eq!(rejoined, OsString::from(value));
        }
    }

    #[test]
    fn split_is_restartable() {
        let dirs = Path::new("/a:/b");
        assert_eq!(dirs.split_list().count(), dirs.split_list().count());
    }

    #[test]
    fn satisfies_applies_predicate() {
        assert!(Path::new("/etc").satisfies(is_absolute));
        assert!(Path::new("/").satisfies(is_absolute));
        assert!(!Path::new("../").satisfies(is_absolute));
        assert!(Path::new("/").satisfies(is_existing));
        assert!(Path::new("/bin:/usr/bin").satisfies(is_list));
        assert!(Path::new("x").satisfies(|path: &Path| path == Path::new("x")));
    }
}
