use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use thiserror::Error;

/// Snapshot of environmental variables, taken from [`std::env::vars_os`] or supplied by the
/// caller.
///
/// Every lookup done by this crate goes through an [`Env`], so tests (and callers wanting
/// deterministic results) can resolve directories against a fixed set of variables instead of
/// the process-wide environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    keys: HashMap<OsString, OsString>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),
}

impl Env {
    /// Create new [`Env`] from the current process environment.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `env` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self { keys: env }
    }

    /// Reload environmental variables from `env`.
    pub fn reload_from(&mut self, env: HashMap<OsString, OsString>) {
        self.keys = env;
    }

    /// Reload environmental variables from [`std::env::vars_os`].
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates missing key, `Some`: existing key.
    ///
    /// # Examples
    /// ```rust
    /// use std::ffi::OsStr;
    /// use xdgdirs::os::env::Env;
    ///
    /// let env: Env = [("XDG_CONFIG_HOME", "/etc/alt")].into_iter().collect();
    /// assert_eq!(env.get_os("XDG_CONFIG_HOME"), Some(OsStr::new("/etc/alt")));
    /// assert_eq!(env.get_os("XDG_CACHE_HOME"), None);
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.keys.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Result<&str, EnvStrError>`. `Ok` variant indicates existing UTF-8 variable, `Err`
    /// indicates some kind of error. See [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust
    /// use xdgdirs::os::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _path = env.get("PATH")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }

    /// Non-empty value of `key`, if any.
    fn non_empty(&self, key: &str) -> Option<&OsStr> {
        self.get_os(key).filter(|value| !value.is_empty())
    }

    /// User's home directory, as given by `$HOME`.
    ///
    /// An unset or empty `$HOME` yields [`None`]; there is no password-database fallback, so
    /// the answer depends only on `self`.
    pub fn home(&self) -> Option<PathBuf> {
        self.non_empty("HOME").map(PathBuf::from)
    }

    /// Directory for temporary files: `$TMPDIR` if non-empty, `/tmp` otherwise.
    #[cfg(unix)]
    pub fn temp_dir(&self) -> PathBuf {
        self.non_empty("TMPDIR")
            .map_or_else(|| PathBuf::from("/tmp"), PathBuf::from)
    }

    /// Directory for temporary files, as reported by [`std::env::temp_dir`].
    #[cfg(not(unix))]
    pub fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
