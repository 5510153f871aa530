use log::trace;
use rand::{Rng, RngExt};
use waypath_core::{Direction, Point, Range};

use crate::distance::chebyshev;
use crate::grid::GridModel;
use crate::options::SearchOptions;
use crate::search::bounded_search;
use crate::traits::{GridView, Pather};

/// Pathfinding over one map.
///
/// Owns the map's [`GridModel`] and keeps no state between calls: every
/// query builds its own working set, so a `Pathfinder` can be shared across
/// threads and searched concurrently.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    grid: GridModel,
}

impl Pathfinder {
    pub fn new(grid: GridModel) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Steps leading from `start` to `end`, nearest first, `start` excluded.
    ///
    /// - `start == end`: one step away onto any walkable neighbor (north, east,
    ///   south, west in that order), or nothing.
    /// - Otherwise a best-first search confined to tiles within
    ///   `options.limit_radius` of `start`. If it cannot reach `end` (radius
    ///   too small, target enclosed, radius zero or less) the result is a
    ///   single fallback step: the first walkable neighbor in
    ///   [`Direction::candidates`] order toward `end`, or nothing.
    ///
    /// An empty result is a normal answer, not an error.
    pub fn find_path(&self, start: Point, end: Point, options: &SearchOptions) -> Vec<Point> {
        let view = GridView::new(&self.grid, options);

        if start == end {
            return fallback_step(&view, start, end);
        }

        let radius = options.limit_radius;
        if radius <= 0 || chebyshev(start, end) > radius as u32 {
            trace!("target {end} outside search radius {radius} of {start}, taking a single step");
            return fallback_step(&view, start, end);
        }

        let window = Range::around(start, radius).intersect(self.grid.bounds());
        match bounded_search(&view, window, start, end) {
            Some(path) => path,
            None => {
                trace!("no path from {start} to {end} within radius {radius}, taking a single step");
                fallback_step(&view, start, end)
            }
        }
    }

    /// A uniformly random walkable direction out of `point`, or
    /// [`Direction::Invalid`] when every neighbor is blocked.
    pub fn find_random_direction(&self, point: Point, options: &SearchOptions) -> Direction {
        self.find_random_direction_with(&mut rand::rng(), point, options)
    }

    /// [`find_random_direction`](Self::find_random_direction) drawing from a
    /// caller-supplied generator.
    pub fn find_random_direction_with<R: Rng>(
        &self,
        rng: &mut R,
        point: Point,
        options: &SearchOptions,
    ) -> Direction {
        let view = GridView::new(&self.grid, options);
        let mut open = [Direction::Invalid; 4];
        let mut n = 0;
        for d in Direction::ALL {
            if view.walkable(point.step(d)) {
                open[n] = d;
                n += 1;
            }
        }
        match n {
            0 => Direction::Invalid,
            1 => open[0],
            _ => open[rng.random_range(0..n)],
        }
    }

    /// The first direction that both reduces the distance to `end` and leads
    /// to a walkable tile, or [`Direction::Invalid`].
    ///
    /// Only the one or two directions of [`Direction::preferred`] are tried;
    /// use [`find_path`](Self::find_path) when the way may need a detour.
    pub fn find_simple_direction(
        &self,
        start: Point,
        end: Point,
        options: &SearchOptions,
    ) -> Direction {
        let view = GridView::new(&self.grid, options);
        Direction::preferred(start, end)
            .into_iter()
            .find(|&d| view.walkable(start.step(d)))
            .unwrap_or(Direction::Invalid)
    }
}

fn fallback_step(view: &GridView<'_>, start: Point, end: Point) -> Vec<Point> {
    Direction::candidates(start, end)
        .into_iter()
        .map(|d| start.step(d))
        .find(|&p| view.walkable(p))
        .into_iter()
        .collect()
}
