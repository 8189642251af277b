//! Shared test utilities for the GraphQL workbench crates.
//!
//! - [`extract_cursor`] / [`extract_cursors`]: editor positions marked in
//!   fixture text with `*` or `$1`..`$9`
//! - [`extract_range`]: a byte range marked with `<<` and `>>`
//! - [`assertions`]: formatting helpers for snapshot tests

pub mod assertions;
mod cursor;

pub use cursor::{extract_cursor, extract_cursors, extract_range};
