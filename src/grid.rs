//! Obstacle grid with connected-component bookkeeping.
//!
//! [`SearchGrid`] is the board every engine runs on: a rectangular field of
//! free and blocked cells using screen coordinates (`x` grows right, `y` grows
//! down). On top of the raw cells it maintains a union-find partition of the
//! free cells into 4-connected components, which lets callers answer
//! "is the goal reachable at all?" without running a search.

use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::error::SearchConfigError;

/// The four cardinal steps in expansion order: up, right, down, left.
///
/// Every engine generates successors in exactly this order, so traversal
/// traces are comparable across algorithms. With `y` growing downward,
/// "up" is `(0, -1)`.
pub const STEP_ORDER: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// A rectangular obstacle grid, `true` meaning blocked.
///
/// The component partition is recomputed by [`SearchGrid::generate_components`]
/// and kept current through [`Grid::set`] / [`SearchGrid::update`]; engines
/// borrow the grid immutably and never mutate it mid-search.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl SearchGrid {
    /// Whether `point` lies on the board at all, blocked or not.
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && self.grid.index_in_bounds(point.x as usize, point.y as usize)
    }

    /// Whether `point` is on the board and not an obstacle.
    pub fn is_free(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.grid.get_point(point)
    }

    /// Number of free cells on the whole board.
    pub fn count_free(&self) -> usize {
        let mut free = 0;
        for x in 0..self.grid.width {
            for y in 0..self.grid.height {
                if !self.grid.get(x, y) {
                    free += 1;
                }
            }
        }
        free
    }

    /// The free cardinal neighbours of `point`, in [`STEP_ORDER`].
    pub fn successors(&self, point: Point) -> Vec<Point> {
        STEP_ORDER
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&neighbour| self.is_free(neighbour))
            .collect()
    }

    fn cell_index(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }

    /// Representative of the component `point` belongs to.
    pub fn component_id(&self, point: &Point) -> usize {
        self.components.find(self.cell_index(point))
    }

    /// Whether no 4-connected corridor of free cells joins `start` to `goal`.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            !self
                .components
                .equiv(self.cell_index(start), self.cell_index(goal))
        } else {
            true
        }
    }

    /// Whether some 4-connected corridor of free cells joins `start` to `goal`.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Number of free cells in the component of `from`, itself included.
    ///
    /// This is exactly the number of expansions an exhaustive search seeded at
    /// `from` performs before giving up.
    pub fn reachable_count(&self, from: Point) -> usize {
        if !self.is_free(from) {
            return 0;
        }
        let from_ix = self.cell_index(&from);
        let mut count = 0;
        for x in 0..self.grid.width {
            for y in 0..self.grid.height {
                if !self.grid.get(x, y) && self.components.equiv(from_ix, self.grid.get_ix(x, y)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Rebuilds the union-find partition of free cells from scratch.
    ///
    /// Unioning each free cell with its free right and down neighbours covers
    /// every 4-edge exactly once.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if self.grid.get(x, y) {
                    continue;
                }
                let ix = self.grid.get_ix(x, y);
                if x + 1 < w && !self.grid.get(x + 1, y) {
                    self.components.union(ix, self.grid.get_ix(x + 1, y));
                }
                if y + 1 < h && !self.grid.get(x, y + 1) {
                    self.components.union(ix, self.grid.get_ix(x, y + 1));
                }
            }
        }
    }

    /// Regenerates components if a blocking edit left them stale.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("components are dirty: regenerating");
            self.generate_components();
        }
    }

    /// Parses a fixture map: one row per line, `.` free and `#` blocked.
    ///
    /// Lines are trimmed and blank lines skipped, so indented raw string
    /// literals read naturally in tests.
    pub fn from_ascii(map: &str) -> Result<SearchGrid, SearchConfigError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 || height == 0 {
            return Err(SearchConfigError::ZeroDimension { width, height });
        }
        let mut grid = SearchGrid::new(width, height, false);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(SearchConfigError::MalformedFixture(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, cell) in row.chars().enumerate() {
                match cell {
                    '.' => {}
                    '#' => grid.set(x, y, true),
                    other => {
                        return Err(SearchConfigError::MalformedFixture(format!(
                            "unexpected character `{other}` at ({x}, {y})"
                        )));
                    }
                }
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}

impl Grid<bool> for SearchGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut grid = SearchGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }

    /// Updates a cell and keeps the component partition usable.
    ///
    /// Freeing a cell unions it with its free neighbours on the spot; blocking
    /// one only marks the partition dirty, since union-find cannot split.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        if blocked && !self.grid.get(x, y) {
            self.components_dirty = true;
        }
        if !blocked {
            let ix = self.grid.get_ix(x, y);
            let point = Point::new(x as i32, y as i32);
            self.grid.set(x, y, false);
            for neighbour in self.successors(point) {
                self.components.union(ix, self.cell_index(&neighbour));
            }
        } else {
            self.grid.set(x, y, true);
        }
    }

    fn width(&self) -> usize {
        self.grid.width
    }

    fn height(&self) -> usize {
        self.grid.height
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let c = if self.grid.get(x, y) { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_order_is_up_right_down_left() {
        let grid = SearchGrid::new(3, 3, false);
        assert_eq!(
            grid.successors(Point::new(1, 1)),
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn successors_skip_walls_and_edges() {
        let mut grid = SearchGrid::new(3, 3, false);
        grid.set(1, 0, true);
        grid.update();
        // Top-left corner: up and left are off-board, right is blocked.
        assert_eq!(grid.successors(Point::new(0, 0)), vec![Point::new(0, 1)]);
    }

    #[test]
    fn wall_splits_components() {
        let mut grid = SearchGrid::new(3, 3, false);
        for y in 0..3 {
            grid.set(1, y, true);
        }
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 1), &Point::new(2, 1)));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 2)));
        assert_eq!(grid.reachable_count(Point::new(0, 0)), 3);
        assert_eq!(grid.count_free(), 6);
    }

    #[test]
    fn diagonal_touch_does_not_connect() {
        let mut grid = SearchGrid::new(2, 2, false);
        grid.set(1, 0, true);
        grid.set(0, 1, true);
        grid.update();
        // (0,0) and (1,1) only share a corner; cardinal moves cannot join them.
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn blocked_center_leaves_ring_connected() {
        let mut grid = SearchGrid::new(3, 3, false);
        grid.set(1, 1, true);
        grid.update();
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 2)));
        assert_eq!(grid.reachable_count(Point::new(0, 0)), 8);
    }

    #[test]
    fn unblocking_reconnects_without_full_rebuild() {
        let mut grid = SearchGrid::new(3, 1, false);
        grid.set(1, 0, true);
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        grid.set(1, 0, false);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn ascii_fixture_round_trips() {
        let grid = SearchGrid::from_ascii(
            "
            .#.
            .#.
            ...
            ",
        )
        .unwrap();
        assert_eq!(grid.grid.width, 3);
        assert_eq!(grid.grid.height, 3);
        assert!(!grid.is_free(Point::new(1, 0)));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert_eq!(grid.to_string(), ".#.\n.#.\n...\n");
    }

    #[test]
    fn ascii_fixture_rejects_garbage() {
        assert!(matches!(
            SearchGrid::from_ascii("..\n.x"),
            Err(SearchConfigError::MalformedFixture(_))
        ));
        assert!(matches!(
            SearchGrid::from_ascii("..\n..."),
            Err(SearchConfigError::MalformedFixture(_))
        ));
        assert!(matches!(
            SearchGrid::from_ascii(""),
            Err(SearchConfigError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn bounds_checks_handle_negative_coordinates() {
        let grid = SearchGrid::new(2, 2, false);
        assert!(!grid.in_bounds(Point::new(-1, 0)));
        assert!(!grid.in_bounds(Point::new(0, 2)));
        assert!(!grid.is_free(Point::new(-1, -1)));
        assert!(grid.is_free(Point::new(1, 1)));
    }
}
