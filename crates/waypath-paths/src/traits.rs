use waypath_core::Point;

use crate::grid::GridModel;
use crate::options::SearchOptions;

/// Minimal pathfinding interface — answers whether a tile can be entered.
pub trait Pather {
    fn walkable(&self, p: Point) -> bool;
}

/// A grid seen through one call's [`SearchOptions`].
///
/// Borrowed for the duration of a single search; nothing is cached, so
/// dynamic obstacles are always read fresh.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a GridModel,
    options: &'a SearchOptions,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a GridModel, options: &'a SearchOptions) -> Self {
        Self { grid, options }
    }
}

impl Pather for GridView<'_> {
    fn walkable(&self, p: Point) -> bool {
        self.grid.contains(p)
            && (self.options.ignore_walls || !self.grid.is_wall(p))
            && (self.options.ignore_blocking_reactors || !self.grid.is_blocking_reactor(p))
            && !self.options.blocked_points.contains(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridModel {
        GridModel::from_layout("#R.\n...").unwrap()
    }

    #[test]
    fn bounds_are_never_walkable() {
        let g = GridModel::open(2, 2);
        let o = SearchOptions::default().with_ignore_walls(true);
        let v = GridView::new(&g, &o);
        assert!(v.walkable(Point::new(1, 1)));
        assert!(!v.walkable(Point::new(2, 0)));
        assert!(!v.walkable(Point::new(-1, 0)));
    }

    #[test]
    fn ignore_flags_are_independent() {
        let g = grid();
        let wall = Point::new(0, 0);
        let reactor = Point::new(1, 0);

        let o = SearchOptions::default();
        let v = GridView::new(&g, &o);
        assert!(!v.walkable(wall));
        assert!(!v.walkable(reactor));

        let o = SearchOptions::default().with_ignore_walls(true);
        let v = GridView::new(&g, &o);
        assert!(v.walkable(wall));
        assert!(!v.walkable(reactor));

        let o = SearchOptions::default().with_ignore_blocking_reactors(true);
        let v = GridView::new(&g, &o);
        assert!(!v.walkable(wall));
        assert!(v.walkable(reactor));
    }

    #[test]
    fn blocked_points_override_ignore_flags() {
        let g = GridModel::open(3, 3);
        let p = Point::new(1, 1);
        let o = SearchOptions::default()
            .with_ignore_walls(true)
            .with_ignore_blocking_reactors(true)
            .with_blocked_points([p]);
        let v = GridView::new(&g, &o);
        assert!(!v.walkable(p));
        assert!(v.walkable(Point::new(1, 0)));
    }
}
