use thiserror::Error;

/// Failures reported by [`PathfindingService`](crate::PathfindingService).
///
/// Failing to find a way is not an error; it comes back as an empty path or
/// [`Direction::Invalid`](waypath_core::Direction::Invalid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathfindingError {
    /// No grid was ever registered under this key.
    #[error("no pathfinding grid registered for map \u{201c}{key}\u{201d}")]
    NotFound { key: String },
}
