//! **waypath-core** — tile-grid geometry shared by the *waypath* crates.
//!
//! Provides integer [`Point`]s and half-open [`Range`]s, plus the four-way
//! [`Direction`] type with its relation and tie-break tables.

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::{Point, Range, RangeIter};
