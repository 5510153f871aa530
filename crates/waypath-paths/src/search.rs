//! Radius-bounded best-first search.
//!
//! Every call allocates its own node arena covering the search window (the
//! square of tiles within `limit_radius` of the start, clipped to the grid
//! bounds). Parents are arena indices, so nothing outlives the call and
//! concurrent searches over the same grid share no mutable state.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use waypath_core::{Point, Range};

use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::traits::Pather;

const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeState {
    Unvisited,
    Open,
    Closed,
}

#[derive(Clone, Copy, Debug)]
struct Node {
    aggregate: u32,
    parent: usize,
    state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            aggregate: 0,
            parent: NO_PARENT,
            state: NodeState::Unvisited,
        }
    }
}

/// Open-set entry ordered by ascending aggregate, then by insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    aggregate: u32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest aggregate first, and
        // the earliest inserted among equals.
        other
            .aggregate
            .cmp(&self.aggregate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Node storage for one search, indexed by offset inside `window`.
struct Arena {
    window: Range,
    width: usize,
    nodes: Vec<Node>,
}

impl Arena {
    fn new(window: Range) -> Self {
        Self {
            window,
            width: window.width().max(0) as usize,
            nodes: vec![Node::default(); window.len()],
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.window.contains(p) {
            return None;
        }
        let x = (p.x - self.window.min.x) as usize;
        let y = (p.y - self.window.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.window.min.x;
        let y = (idx / self.width) as i32 + self.window.min.y;
        Point::new(x, y)
    }
}

/// Search from `start` to `end` without leaving `window`.
///
/// Open nodes are ranked by `manhattan(start, n) + manhattan(n, end)`;
/// neighbors are opened in [`Direction::candidates`](waypath_core::Direction::candidates)
/// order toward `end`, and each node is opened at most once. Returns the
/// steps from the first move to `end` inclusive, or `None` when the open set
/// runs dry. `start` itself is never tested for walkability.
pub(crate) fn bounded_search<P: Pather>(
    pather: &P,
    window: Range,
    start: Point,
    end: Point,
) -> Option<Vec<Point>> {
    let mut arena = Arena::new(window);
    let start_idx = arena.idx(start)?;
    let goal_idx = arena.idx(end)?;

    {
        let node = &mut arena.nodes[start_idx];
        node.aggregate = manhattan(start, end);
        node.state = NodeState::Open;
    }

    let mut seq: u64 = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        aggregate: arena.nodes[start_idx].aggregate,
        seq,
    });

    let mut neighbors = Neighbors::new();

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let ci = current.idx;
        arena.nodes[ci].state = NodeState::Closed;

        if ci == goal_idx {
            break 'search true;
        }

        let cp = arena.point(ci);
        for &np in neighbors.toward(cp, end, |n| pather.walkable(n)) {
            let Some(ni) = arena.idx(np) else {
                continue;
            };
            let n = &mut arena.nodes[ni];
            if n.state != NodeState::Unvisited {
                continue;
            }
            n.aggregate = manhattan(start, np).saturating_add(manhattan(np, end));
            n.parent = ci;
            n.state = NodeState::Open;

            seq += 1;
            open.push(NodeRef {
                idx: ni,
                aggregate: n.aggregate,
                seq,
            });
        }
    };

    if !found {
        return None;
    }

    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != start_idx && ci != NO_PARENT {
        path.push(arena.point(ci));
        ci = arena.nodes[ci].parent;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridModel;
    use crate::options::SearchOptions;
    use crate::traits::GridView;

    fn search(layout: &str, start: Point, end: Point, radius: i32) -> Option<Vec<Point>> {
        let grid = GridModel::from_layout(layout).unwrap();
        let opts = SearchOptions::default();
        let view = GridView::new(&grid, &opts);
        let window = Range::around(start, radius).intersect(grid.bounds());
        bounded_search(&view, window, start, end)
    }

    #[test]
    fn straight_corridor() {
        let path = search(".....", Point::new(0, 0), Point::new(4, 0), 12).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
            ]
        );
    }

    #[test]
    fn detours_around_wall() {
        let layout = "
.....
.###.
.....";
        let path = search(layout, Point::new(0, 1), Point::new(4, 1), 12).unwrap();
        assert_eq!(path.last(), Some(&Point::new(4, 1)));
        assert!(Point::new(0, 1).is_adjacent(path[0]));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
        assert!(path.iter().all(|p| p.y != 1 || p.x == 0 || p.x == 4));
    }

    #[test]
    fn diagonal_tie_goes_vertical_first() {
        let path = search("...\n...\n...", Point::new(0, 0), Point::new(2, 2), 12).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], Point::new(0, 1));
        assert_eq!(path[3], Point::new(2, 2));
    }

    #[test]
    fn enclosed_target_exhausts() {
        let layout = "
.....
..#..
.#.#.
..#..";
        assert_eq!(search(layout, Point::new(0, 0), Point::new(2, 2), 12), None);
    }

    #[test]
    fn target_outside_window() {
        assert_eq!(search("......", Point::new(0, 0), Point::new(5, 0), 2), None);
    }

    #[test]
    fn window_limits_detour() {
        // The only way around the wall is row 3, three layers below the start.
        let layout = "
..#..
..#..
..#..
.....";
        let start = Point::new(1, 0);
        let end = Point::new(3, 0);
        assert_eq!(search(layout, start, end, 2), None);
        let path = search(layout, start, end, 3).unwrap();
        assert_eq!(path.last(), Some(&end));
        assert!(path.contains(&Point::new(2, 3)));
    }
}
