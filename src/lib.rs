//! Xdgdirs - XDG Base Directory resolution and lookup.
//!
//! Resolves the user's data, configuration, state, cache and runtime directories from the
//! `$XDG_*` environment variables (ignoring values that are not absolute paths), and finds a
//! relative path in the preference-ordered directories of a given [`Kind`].
//!
//! ```rust,no_run
//! use xdgdirs::{Kind, find};
//!
//! match find(Kind::Config, "program/config.toml") {
//!     Some(path) => println!("loading {}", path.display()),
//!     None => println!("no configuration, using defaults"),
//! }
//! ```

pub mod error;
pub mod fs;
pub mod os;
pub mod xdg;

pub use error::{Error, Result};
pub use xdg::{
    BaseDirs, Kind, Var, cache_home_dir, config_dirs, config_home_dir, data_dirs, data_home_dir,
    find, runtime_dir, state_home_dir,
};
