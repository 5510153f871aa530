//! Bounded pathfinding over static tile grids.
//!
//! A [`Pathfinder`] owns one map's [`GridModel`] (bounds, permanent walls,
//! blocking reactors) and answers three per-tick questions, each under a
//! per-call [`SearchOptions`] carrying dynamic obstacles and override flags:
//!
//! - **Full path** ([`Pathfinder::find_path`]): best-first search confined to
//!   a radius around the start, degrading to a single step when no route is
//!   found.
//! - **Random direction** ([`Pathfinder::find_random_direction`]): a uniform
//!   pick among walkable exits, for idle wandering.
//! - **Simple direction** ([`Pathfinder::find_simple_direction`]): one greedy
//!   step toward a target, no search.
//!
//! No query ever fails: "no way" is an empty path or
//! [`Direction::Invalid`](waypath_core::Direction::Invalid).
//!
//! # Neighbor order
//!
//! Ties are broken by [`Direction::candidates`](waypath_core::Direction::candidates):
//! the direction toward the target on the dominant axis (vertical on a perfect
//! diagonal), then the other axis toward the target, then their reverses.

mod distance;
mod grid;
mod neighbors;
mod options;
mod pathfinder;
mod search;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use grid::{FLOOR_GLYPH, GridModel, LayoutError, REACTOR_GLYPH, WALL_GLYPH};
pub use neighbors::Neighbors;
pub use options::{DEFAULT_LIMIT_RADIUS, SearchOptions};
pub use pathfinder::Pathfinder;
pub use traits::{GridView, Pather};
