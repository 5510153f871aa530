use std::collections::HashSet;

use waypath_core::Point;

/// Default number of grid layers a full-path search may explore.
pub const DEFAULT_LIMIT_RADIUS: i32 = 12;

/// Per-call search configuration.
///
/// `blocked_points` are never walkable, whatever the ignore flags say; they
/// usually hold tiles occupied by other creatures this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Chebyshev radius around the start tile that a full search may visit.
    /// Zero or less skips the full search.
    pub limit_radius: i32,
    pub blocked_points: HashSet<Point>,
    pub ignore_walls: bool,
    pub ignore_blocking_reactors: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit_radius: DEFAULT_LIMIT_RADIUS,
            blocked_points: HashSet::new(),
            ignore_walls: false,
            ignore_blocking_reactors: false,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit_radius(mut self, radius: i32) -> Self {
        self.limit_radius = radius;
        self
    }

    pub fn with_blocked_points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.blocked_points.extend(points);
        self
    }

    pub fn with_ignore_walls(mut self, ignore: bool) -> Self {
        self.ignore_walls = ignore;
        self
    }

    pub fn with_ignore_blocking_reactors(mut self, ignore: bool) -> Self {
        self.ignore_blocking_reactors = ignore;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = SearchOptions::default();
        assert_eq!(o.limit_radius, 12);
        assert!(o.blocked_points.is_empty());
        assert!(!o.ignore_walls);
        assert!(!o.ignore_blocking_reactors);
    }

    #[test]
    fn builder_accumulates_blocked_points() {
        let o = SearchOptions::new()
            .with_blocked_points([Point::new(1, 1)])
            .with_blocked_points([Point::new(2, 2), Point::new(1, 1)])
            .with_limit_radius(3)
            .with_ignore_walls(true);
        assert_eq!(o.blocked_points.len(), 2);
        assert_eq!(o.limit_radius, 3);
        assert!(o.ignore_walls);
        assert!(!o.ignore_blocking_reactors);
    }
}
