//! Cardinal movement directions and the relation tables used to order them.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal directions, or `Invalid` when no direction
/// applies (no legal move, or two equal points).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    #[default]
    Invalid,
}

impl Direction {
    /// The four real directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
            Direction::Invalid => Point::ZERO,
        }
    }

    /// Inverse of [`offset`](Self::offset). Anything other than a unit
    /// cardinal offset maps to `Invalid`.
    pub const fn from_offset(p: Point) -> Direction {
        match (p.x, p.y) {
            (0, -1) => Direction::North,
            (1, 0) => Direction::East,
            (0, 1) => Direction::South,
            (-1, 0) => Direction::West,
            _ => Direction::Invalid,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Invalid => Direction::Invalid,
        }
    }

    /// The next direction clockwise.
    #[inline]
    pub const fn turn_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::Invalid => Direction::Invalid,
        }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Direction::Invalid)
    }

    /// All four directions ordered by how well they lead from `from` to `to`.
    ///
    /// | slot | direction |
    /// |---|---|
    /// | 0 | `from.direction_to(to)` (primary) |
    /// | 1 | toward `to` on the other axis, or primary turned clockwise when that axis is already aligned (secondary) |
    /// | 2 | secondary reversed |
    /// | 3 | primary reversed |
    ///
    /// "Rotating through all four" means this pairwise order: each axis is
    /// tried toward the target before its reverse, not a strict clockwise
    /// sweep (on an axis toward east it yields east, south, north, west).
    ///
    /// When `from == to` the fixed order [`ALL`](Self::ALL) is returned.
    pub fn candidates(from: Point, to: Point) -> [Direction; 4] {
        let primary = from.direction_to(to);
        if !primary.is_valid() {
            return Self::ALL;
        }
        let secondary = Self::secondary(from, to, primary).unwrap_or(primary.turn_clockwise());
        [primary, secondary, secondary.reverse(), primary.reverse()]
    }

    /// The directions that strictly reduce the Manhattan distance from
    /// `from` to `to`, best first. At most two, empty when the points are
    /// equal.
    pub fn preferred(from: Point, to: Point) -> Vec<Direction> {
        let primary = from.direction_to(to);
        if !primary.is_valid() {
            return Vec::new();
        }
        match Self::secondary(from, to, primary) {
            Some(secondary) => vec![primary, secondary],
            None => vec![primary],
        }
    }

    fn secondary(from: Point, to: Point, primary: Direction) -> Option<Direction> {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        match primary {
            Direction::North | Direction::South if dx != 0 => {
                Some(if dx > 0 { Direction::East } else { Direction::West })
            }
            Direction::East | Direction::West if dy != 0 => {
                Some(if dy > 0 { Direction::South } else { Direction::North })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Invalid => "invalid",
        };
        f.write_str(s)
    }
}
