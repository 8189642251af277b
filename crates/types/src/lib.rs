//! Foundation types for the GraphQL workbench.
//!
//! This crate provides the coordinate types shared by the parser, the
//! definition locator and the workbench glue. It has zero external
//! dependencies, making it suitable as a foundation layer.
//!
//! # Coordinate systems
//!
//! - [`OffsetRange`]: half-open byte interval into a document's UTF-8 text.
//!   Definition spans and click intervals are both expressed this way.
//! - [`Position`] / [`Range`]: editor coordinates (line and UTF-16 column),
//!   as reported by the host editor for mouse events.

mod position;

pub use position::{OffsetRange, Position, Range};
