use waypath_core::{Direction, Point};

/// Reusable neighbor enumeration buffer.
///
/// Neighbors are produced in [`Direction::candidates`] order so that searches
/// expanding them break ties the same way on every call.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Cardinal neighbors of `p`, best aligned toward `target` first, keeping
    /// only those for which `keep` returns `true`.
    pub fn toward(&mut self, p: Point, target: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in Direction::candidates(p, target) {
            let n = p.step(d);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_toward_target() {
        let mut nb = Neighbors::new();
        let p = Point::new(2, 2);
        let got = nb.toward(p, Point::new(2, 9), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(2, 3),
                Point::new(1, 2),
                Point::new(3, 2),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn filtered() {
        let mut nb = Neighbors::new();
        let p = Point::new(0, 0);
        let got = nb.toward(p, Point::new(5, 0), |n| n.x >= 0 && n.y >= 0);
        assert_eq!(got, &[Point::new(1, 0), Point::new(0, 1)]);
    }
}
