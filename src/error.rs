use std::path::PathBuf;

use thiserror::Error;

use crate::xdg::Kind;

/// Errors reported by the fallible lookups ([`BaseDirs::home`](crate::xdg::BaseDirs::home),
/// [`BaseDirs::try_find`](crate::xdg::BaseDirs::try_find)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `$HOME` is unset or empty.
    #[error("home directory could not be determined: `$HOME` is unset or empty")]
    NoHomeDir,

    /// No existing absolute candidate was found for `relative`.
    #[error("`{}` was not found in any {kind} directory", .relative.display())]
    NotFound { kind: Kind, relative: PathBuf },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
