//! Shared foundation for the repdist immune-repertoire distance crates.
//!
//! `repdist-core` provides the error type and `Result` alias that the
//! alignment and metric crates build on.

pub mod error;

pub use error::{RepdistError, Result};
