//! Path utilities.
//!
//! Provides the [`PathExt`](path_ext::PathExt) extension trait for [`Path`](std::path::Path) and
//! the [predicates](filter) candidate paths are filtered with.

pub mod filter;
pub mod path_ext;

pub use filter::{Predicate, apply_filters, is_absolute, is_existing, is_list};
pub use path_ext::PathExt;
