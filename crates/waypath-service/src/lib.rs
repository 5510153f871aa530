//! Per-map registry of shared [`Pathfinder`](waypath_paths::Pathfinder)s.
//!
//! Hosts register one [`GridModel`](waypath_paths::GridModel) per map when the
//! map loads, then route every per-tick query through
//! [`PathfindingService`] by map key.

mod error;
mod service;

pub use error::PathfindingError;
pub use service::{MapKey, PathfindingService};
