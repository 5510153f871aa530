//! Static per-map walkability: bounds, permanent walls and blocking reactors.

use std::collections::HashSet;

use thiserror::Error;
use waypath_core::{Point, Range};

/// Glyph for a permanent wall in [`GridModel::from_layout`].
pub const WALL_GLYPH: char = '#';
/// Glyph for a blocking reactor in [`GridModel::from_layout`].
pub const REACTOR_GLYPH: char = 'R';
/// Glyph for an open tile in [`GridModel::from_layout`].
pub const FLOOR_GLYPH: char = '.';

/// Immutable walkability description of one map.
///
/// Tiles outside `[0, width) x [0, height)` are never walkable. A tile may be
/// both a wall and a blocking reactor; each set is governed by its own
/// ignore flag in [`SearchOptions`](crate::SearchOptions).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    width: i32,
    height: i32,
    walls: HashSet<Point>,
    blocking_reactors: HashSet<Point>,
}

impl GridModel {
    /// Create a grid. Non-positive dimensions produce a grid with no
    /// walkable tiles.
    pub fn new(
        width: i32,
        height: i32,
        walls: impl IntoIterator<Item = Point>,
        blocking_reactors: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            walls: walls.into_iter().collect(),
            blocking_reactors: blocking_reactors.into_iter().collect(),
        }
    }

    /// A grid with no walls and no reactors.
    pub fn open(width: i32, height: i32) -> Self {
        Self::new(width, height, [], [])
    }

    /// Build a grid from an ASCII layout.
    ///
    /// `#` is a wall, `R` a blocking reactor and `.` an open tile. Leading and
    /// trailing whitespace of the whole text is trimmed, then every line must
    /// have the same width. The first line is `y = 0`.
    pub fn from_layout(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut walls = HashSet::new();
        let mut reactors = HashSet::new();
        let mut width: Option<i32> = None;
        let mut height = 0;

        if s.is_empty() {
            return Ok(Self::default());
        }

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    WALL_GLYPH => {
                        walls.insert(p);
                    }
                    REACTOR_GLYPH => {
                        reactors.insert(p);
                    }
                    FLOOR_GLYPH => {}
                    _ => return Err(LayoutError::InvalidGlyph { ch, pos: p }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height = y + 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            walls,
            blocking_reactors: reactors,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The searchable rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.walls.contains(&p)
    }

    #[inline]
    pub fn is_blocking_reactor(&self, p: Point) -> bool {
        self.blocking_reactors.contains(&p)
    }

    pub fn walls(&self) -> &HashSet<Point> {
        &self.walls
    }

    pub fn blocking_reactors(&self) -> &HashSet<Point> {
        &self.blocking_reactors
    }
}

/// Errors raised while parsing a layout with [`GridModel::from_layout`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A line's width differs from the first line's.
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A character other than `#`, `R` or `.` was found.
    #[error("layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Point },
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = GridModel::from_layout("#.R\n...").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: GridModel = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
