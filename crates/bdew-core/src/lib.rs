//! # bdew-core
//!
//! Error definitions shared across the bdew-datetimes workspace.
//!
//! This crate holds the single error enum every other crate returns, the
//! matching `Result` alias, and the `ensure!` precondition macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
