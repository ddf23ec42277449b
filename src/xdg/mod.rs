//! XDG Base Directory Specification support.
//!
//! Resolves the base directories from `$XDG_*` variables, falling back to the documented
//! defaults, and searches them for a relative path in preference order. Nothing is cached and no
//! directory is ever created: every call reads the environment and the filesystem anew.
//!
//! ```rust,no_run
//! # use xdgdirs::xdg::{self, Kind};
//! if let Some(path) = xdg::find(Kind::Data, "program/file.data") {
//!     println!("found data file at {}", path.display());
//! }
//! println!("config goes to {}", xdg::config_home_dir().display());
//! ```

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::os::env::Env;

pub mod binding;
pub mod locate;

pub use binding::Var;

/// Kind of base directory a file belongs to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Kind {
    /// Data files: `$XDG_DATA_HOME`, then `$XDG_DATA_DIRS`.
    Data,
    /// Configuration files: `$XDG_CONFIG_HOME`, then `$XDG_CONFIG_DIRS`.
    Config,
    /// State data: `$XDG_STATE_HOME`.
    State,
    /// Non-essential cached data: `$XDG_CACHE_HOME`.
    Cache,
    /// Runtime files and other file objects: `$XDG_RUNTIME_DIR`.
    Runtime,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 5] = [
        Kind::Data,
        Kind::Config,
        Kind::State,
        Kind::Cache,
        Kind::Runtime,
    ];

    /// Variables searched for `self`, most preferred first.
    pub const fn vars(self) -> &'static [Var] {
        match self {
            Kind::Data => &[Var::DataHome, Var::DataDirs],
            Kind::Config => &[Var::ConfigHome, Var::ConfigDirs],
            Kind::State => &[Var::StateHome],
            Kind::Cache => &[Var::CacheHome],
            Kind::Runtime => &[Var::RuntimeDir],
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Kind::Data => "data",
            Kind::Config => "config",
            Kind::State => "state",
            Kind::Cache => "cache",
            Kind::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base directories resolved against one [`Env`].
///
/// The free functions of this module build a [`BaseDirs`] from the process environment on
/// every call. Build one yourself to resolve against a fixed set of variables:
///
/// ```rust
/// # use xdgdirs::os::env::Env;
/// # use xdgdirs::xdg::BaseDirs;
/// # use std::path::PathBuf;
/// let env: Env = [("HOME", "/home/user"), ("XDG_CACHE_HOME", "relative")]
///     .into_iter()
///     .collect();
/// let dirs = BaseDirs::with_env(env);
///
/// assert_eq!(dirs.cache_home(), PathBuf::from("/home/user/.cache"));
/// assert_eq!(dirs.config_dirs(), "/etc/xdg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    env: Env,
}

macro_rules! impl_single_dirs {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $var:ident
        ),*$(,)?
    ) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> PathBuf {
                self.resolve(Var::$var)
            }
        )*
    };
}

macro_rules! impl_dir_lists {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $var:ident
        ),*$(,)?
    ) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> OsString {
                self.resolve(Var::$var).into_os_string()
            }
        )*
    };
}

impl BaseDirs {
    /// Resolve against a snapshot of the process environment.
    pub fn new() -> Self {
        Self::with_env(Env::new())
    }

    /// Resolve against `env`.
    pub fn with_env(env: Env) -> Self {
        Self { env }
    }

    /// Environment `self` resolves against.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The user's home directory.
    ///
    /// Unlike the home-relative defaults, which silently become relative paths, this reports a
    /// missing `$HOME` as [`Error::NoHomeDir`].
    pub fn home(&self) -> Result<PathBuf> {
        self.env.home().ok_or(Error::NoHomeDir)
    }

    /// Value of `var`, or its default if the variable is unset, empty or not absolute.
    pub fn resolve(&self, var: Var) -> PathBuf {
        binding::resolve(&self.env, var)
    }

    impl_single_dirs!(
        /// Directory for user-specific data files. Default: `$HOME/.local/share`.
        data_home = DataHome,
        /// Directory for user-specific configuration files. Default: `$HOME/.config`.
        config_home = ConfigHome,
        /// Directory for user-specific state data. Default: `$HOME/.local/state`.
        state_home = StateHome,
        /// Directory for user-specific non-essential (cached) data. Default: `$HOME/.cache`.
        cache_home = CacheHome,
        /// Directory for user-specific runtime files and other file objects. Default: `$TMPDIR`
        /// if non-empty, `/tmp` otherwise.
        runtime_dir = RuntimeDir,
    );

    impl_dir_lists!(
        /// Preference-ordered directories to search for data files, separated by `:`.
        /// Default: `/usr/local/share/:/usr/share/`.
        data_dirs = DataDirs,
        /// Preference-ordered directories to search for configuration files, separated by `:`.
        /// Default: `/etc/xdg`.
        config_dirs = ConfigDirs,
    );

    /// Resolved values searched for `kind`, most preferred first. List values are not split.
    pub fn search_dirs(&self, kind: Kind) -> Vec<PathBuf> {
        kind.vars().iter().map(|var| self.resolve(*var)).collect()
    }

    /// Every path [`find`](BaseDirs::find) considers for `relative`, most preferred first,
    /// before filtering out relative and missing ones.
    pub fn candidates(&self, kind: Kind, relative: impl AsRef<Path>) -> Vec<PathBuf> {
        locate::candidates(self.search_dirs(kind), relative.as_ref())
    }

    /// Search the `kind` directories for `relative`.
    ///
    /// # Returns
    ///
    /// The first joined path, in preference order, which is absolute and exists. [`None`] if
    /// there is no such path.
    pub fn find(&self, kind: Kind, relative: impl AsRef<Path>) -> Option<PathBuf> {
        self.try_find(kind, relative).ok()
    }

    /// Same as [`find`](BaseDirs::find), but a failed search is an [`Error::NotFound`].
    pub fn try_find(&self, kind: Kind, relative: impl AsRef<Path>) -> Result<PathBuf> {
        let relative = relative.as_ref();
        match locate::first_existing(self.candidates(kind, relative)) {
            Some(found) => {
                debug!(%kind, ?relative, ?found, "found");
                Ok(found)
            }
            None => {
                debug!(%kind, ?relative, "not found");
                Err(Error::NotFound {
                    kind,
                    relative: relative.to_path_buf(),
                })
            }
        }
    }
}

impl Default for BaseDirs {
    fn default() -> Self {
        Self::new()
    }
}

/// See [`BaseDirs::data_home`].
pub fn data_home_dir() -> PathBuf {
    BaseDirs::new().data_home()
}

/// See [`BaseDirs::config_home`].
pub fn config_home_dir() -> PathBuf {
    BaseDirs::new().config_home()
}

/// See [`BaseDirs::state_home`].
pub fn state_home_dir() -> PathBuf {
    BaseDirs::new().state_home()
}

/// See [`BaseDirs::data_dirs`].
pub fn data_dirs() -> OsString {
    BaseDirs::new().data_dirs()
}

/// See [`BaseDirs::config_dirs`].
pub fn config_dirs() -> OsString {
    BaseDirs::new().config_dirs()
}

/// See [`BaseDirs::cache_home`].
pub fn cache_home_dir() -> PathBuf {
    BaseDirs::new().cache_home()
}

/// See [`BaseDirs::runtime_dir`].
pub fn runtime_dir() -> PathBuf {
    BaseDirs::new().runtime_dir()
}

/// Search the `kind` directories of the process environment for `relative`.
///
/// See [`BaseDirs::find`].
pub fn find(kind: Kind, relative: impl AsRef<Path>) -> Option<PathBuf> {
    BaseDirs::new().find(kind, relative)
}
