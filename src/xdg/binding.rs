//! Environment variables of the XDG Base Directory specification and their defaults.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::fs::{PathExt, is_absolute};
use crate::os::env::Env;

/// One resolvable XDG quantity, bound to its environment variable and default value.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Var {
    /// `$XDG_DATA_HOME`, default `$HOME/.local/share`.
    DataHome,
    /// `$XDG_CONFIG_HOME`, default `$HOME/.config`.
    ConfigHome,
    /// `$XDG_STATE_HOME`, default `$HOME/.local/state`.
    StateHome,
    /// `$XDG_DATA_DIRS`, default `/usr/local/share/:/usr/share/`.
    DataDirs,
    /// `$XDG_CONFIG_DIRS`, default `/etc/xdg`.
    ConfigDirs,
    /// `$XDG_CACHE_HOME`, default `$HOME/.cache`.
    CacheHome,
    /// `$XDG_RUNTIME_DIR`, default is the temporary directory.
    RuntimeDir,
}

/// How the default of a [`Var`] is computed.
#[derive(Debug, Clone, Copy)]
enum Fallback {
    /// Relative to the home directory.
    Home(&'static str),
    /// Used as is.
    Literal(&'static str),
    /// See [`Env::temp_dir`].
    TempDir,
}

impl Var {
    /// Every variable, in declaration order.
    pub const ALL: [Var; 7] = [
        Var::DataHome,
        Var::ConfigHome,
        Var::StateHome,
        Var::DataDirs,
        Var::ConfigDirs,
        Var::CacheHome,
        Var::RuntimeDir,
    ];

    /// Name of the environment variable.
    pub const fn name(self) -> &'static str {
        match self {
            Var::DataHome => "XDG_DATA_HOME",
            Var::ConfigHome => "XDG_CONFIG_HOME",
            Var::StateHome => "XDG_STATE_HOME",
            Var::DataDirs => "XDG_DATA_DIRS",
            Var::ConfigDirs => "XDG_CONFIG_DIRS",
            Var::CacheHome => "XDG_CACHE_HOME",
            Var::RuntimeDir => "XDG_RUNTIME_DIR",
        }
    }

    /// Whether the value is a preference-ordered list of directories rather than a single one.
    pub const fn is_list(self) -> bool {
        matches!(self, Var::DataDirs | Var::ConfigDirs)
    }

    const fn fallback(self) -> Fallback {
        match self {
            Var::DataHome => Fallback::Home(".local/share"),
            Var::ConfigHome => Fallback::Home(".config"),
            Var::StateHome => Fallback::Home(".local/state"),
            Var::DataDirs => Fallback::Literal("/usr/local/share/:/usr/share/"),
            Var::ConfigDirs => Fallback::Literal("/etc/xdg"),
            Var::CacheHome => Fallback::Home(".cache"),
            Var::RuntimeDir => Fallback::TempDir,
        }
    }

    /// Default value of `self`, computed against `env`.
    ///
    /// Home-relative defaults are joined onto `$HOME`. Without a home directory they are joined
    /// onto an empty base and end up relative, so lookups skip them.
    pub fn default_value(self, env: &Env) -> PathBuf {
        match self.fallback() {
            Fallback::Home(suffix) => join_home(env, suffix),
            Fallback::Literal(value) => PathBuf::from(value),
            Fallback::TempDir => env.temp_dir(),
        }
    }
}

fn join_home(env: &Env, suffix: &str) -> PathBuf {
    let home = env.home().unwrap_or_else(|| {
        warn!(suffix, "home directory is unknown, default base directory will be relative");
        PathBuf::new()
    });
    home.join_clean(suffix)
}

/// Value of `var` in `env`, or its [default](Var::default_value).
pub fn resolve(env: &Env, var: Var) -> PathBuf {
    resolve_or(env, var.name(), || var.default_value(env))
}

/// Value of the environment variable `key`, or `fallback()`.
///
/// The value is returned verbatim if it is an absolute path. An unset, empty or relative value
/// is ignored and `fallback()` is returned as is, without any validation.
pub fn resolve_or(env: &Env, key: &str, fallback: impl FnOnce() -> PathBuf) -> PathBuf {
    match env.get_os(key) {
        Some(value) if is_absolute(Path::new(value)) => PathBuf::from(value),
        Some(value) => {
            debug!(key, ?value, "ignoring value which is not an absolute path");
            fallback()
        }
        None => fallback(),
    }
}

impl AsRef<OsStr> for Var {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Env {
        pairs.iter().copied().collect()
    }

    #[test]
    fn names_are_xdg_variables() {
        let names: Vec<_> = Var::ALL.iter().map(|var| var.name()).collect();
        assert_eq!(
            names,
            [
                "XDG_DATA_HOME",
                "XDG_CONFIG_HOME",
                "XDG_STATE_HOME",
                "XDG_DATA_DIRS",
                "XDG_CONFIG_DIRS",
                "XDG_CACHE_HOME",
                "XDG_RUNTIME_DIR",
            ]
        );
    }

    #[test]
    fn defaults_join_home() {
        let env = env(&[("HOME", "/home/user")]);
        let cases = [
            (Var::DataHome, "/home/user/.local/share"),
            (Var::ConfigHome, "/home/user/.config"),
            (Var::StateHome, "/home/user/.local/state"),
            (Var::CacheHome, "/home/user/.cache"),
        ];
        for (var, expected) in cases {
            assert_eq!(var.default_value(&env), PathBuf::from(expected), "{var:?}");
        }
    }

    #[test]
    fn home_with_trailing_separator_is_cleaned() {
        let env = env(&[("HOME", "/home/user/")]);
        assert_eq!(
            Var::ConfigHome.default_value(&env),
            PathBuf::from("/home/user/.config")
        );
    }

    #[test]
    fn literal_defaults() {
        let env = env(&[]);
        assert_eq!(
            Var::DataDirs.default_value(&env),
            PathBuf::from("/usr/local/share/:/usr/share/")
        );
        assert_eq!(Var::ConfigDirs.default_value(&env), PathBuf::from("/etc/xdg"));
    }

    #[cfg(unix)]
    #[test]
    fn runtime_default_is_temp_dir() {
        assert_eq!(Var::RuntimeDir.default_value(&env(&[])), PathBuf::from("/tmp"));
        assert_eq!(
            Var::RuntimeDir.default_value(&env(&[("TMPDIR", "/var/tmp")])),
            PathBuf::from("/var/tmp")
        );
    }

    #[test]
    fn missing_home_gives_relative_default() {
        let default = Var::StateHome.default_value(&env(&[]));
        assert_eq!(default, PathBuf::from(".local/state"));
        assert!(!is_absolute(&default));
    }

    #[test]
    fn absolute_value_is_returned_verbatim() {
        for var in Var::ALL {
            let value = "/some//odd/./value/";
            let env = env(&[(var.name(), value), ("HOME", "/home/user")]);
            assert_eq!(resolve(&env, var).as_os_str(), value, "{var:?}");
        }
    }

    #[test]
    fn list_value_is_returned_verbatim() {
        let env = env(&[("XDG_DATA_DIRS", "/some/data/:/data/dirs/")]);
        assert_eq!(
            resolve(&env, Var::DataDirs).as_os_str(),
            "/some/data/:/data/dirs/"
        );
    }

    #[test]
    fn invalid_values_fall_back_to_default() {
        for var in Var::ALL {
            for value in [None, Some(""), Some("rel/path"), Some("./x"), Some("../x")] {
                let mut pairs = vec![("HOME", "/home/user"), ("TMPDIR", "/var/tmp")];
                pairs.extend(value.map(|value| (var.name(), value)));
                let env = env(&pairs);
                assert_eq!(
                    resolve(&env, var),
                    var.default_value(&env),
                    "{var:?} = {value:?}"
                );
            }
        }
    }

    #[test]
    fn fallback_is_not_validated() {
        let env = env(&[("XDG_CACHE_HOME", "relative")]);
        let resolved = resolve_or(&env, "XDG_CACHE_HOME", || PathBuf::from("also/relative"));
        assert_eq!(resolved, PathBuf::from("also/relative"));
    }

    #[test]
    fn fallback_is_lazy() {
        let env = env(&[("XDG_CACHE_HOME", "/cache")]);
        let resolved = resolve_or(&env, "XDG_CACHE_HOME", || unreachable!("value is valid"));
        assert_eq!(resolved, PathBuf::from("/cache"));
    }

    #[test]
    fn var_is_usable_as_key() {
        let env = env(&[("XDG_CONFIG_DIRS", "/a:/b")]);
        assert_eq!(env.get_os(Var::ConfigDirs), Some(OsStr::new("/a:/b")));
    }

    #[test]
    fn list_vars() {
        let lists: Vec<_> = Var::ALL.into_iter().filter(|var| var.is_list()).collect();
        assert_eq!(lists, [Var::DataDirs, Var::ConfigDirs]);
    }
}
