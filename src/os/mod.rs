//! OS-level inputs.
//!
//! Provides [`Env`](env::Env), the environment snapshot every resolution reads from.

pub mod env;
