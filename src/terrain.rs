//! Weighted terrain layered over the obstacle grid.
//!
//! Terrain changes how much a step *into* a cell costs; it never changes which
//! cells are passable. Obstacles stay binary in [`SearchGrid`] and are
//! mirrored here as [`IMPASSABLE`] so a terrain lookup on a blocked cell can
//! never produce a finite cost.

use core::fmt;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

use crate::error::SearchConfigError;
use crate::grid::SearchGrid;

/// Sentinel cost mirrored onto obstacle cells.
///
/// Engines filter obstacles out before costs are ever read, so this value is
/// a tripwire, not a movement cost.
pub const IMPASSABLE: i32 = i32::MAX;

/// The terrain flavours a free cell can take, with the cost of stepping onto
/// them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TerrainKind {
    Road,
    Grass,
    Sand,
    Water,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 4] = [
        TerrainKind::Road,
        TerrainKind::Grass,
        TerrainKind::Sand,
        TerrainKind::Water,
    ];

    /// Cost of moving onto a cell of this kind.
    pub fn cost(self) -> i32 {
        match self {
            TerrainKind::Road => 1,
            TerrainKind::Grass => 2,
            TerrainKind::Sand => 3,
            TerrainKind::Water => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TerrainKind::Road => "road",
            TerrainKind::Grass => "grass",
            TerrainKind::Sand => "sand",
            TerrainKind::Water => "water",
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-cell move costs for one board, same dimensions as the grid it was
/// built from.
///
/// Free cells default to [`TerrainKind::Road`]; obstacle cells carry
/// [`IMPASSABLE`].
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    costs: SimpleGrid<i32>,
    kinds: Vec<TerrainKind>,
}

impl TerrainGrid {
    /// Builds a cost field for `grid`, applying `defs` on top of the road
    /// default. Later definitions win on overlap.
    ///
    /// Fails fast when a definition falls off the board or lands on an
    /// obstacle.
    pub fn from_defs(
        grid: &SearchGrid,
        defs: &[(Point, TerrainKind)],
    ) -> Result<TerrainGrid, SearchConfigError> {
        let width = grid.grid.width;
        let height = grid.grid.height;
        let mut costs = SimpleGrid::new(width, height, TerrainKind::Road.cost());
        let mut kinds = vec![TerrainKind::Road; width * height];
        for x in 0..width {
            for y in 0..height {
                if grid.grid.get(x, y) {
                    costs.set(x, y, IMPASSABLE);
                }
            }
        }
        for &(at, kind) in defs {
            if !grid.in_bounds(at) {
                return Err(SearchConfigError::OutOfBounds {
                    what: "terrain definition",
                    at,
                    width,
                    height,
                });
            }
            if !grid.is_free(at) {
                return Err(SearchConfigError::TerrainOnObstacle { at });
            }
            costs.set_point(at, kind.cost());
            kinds[at.y as usize * width + at.x as usize] = kind;
        }
        Ok(TerrainGrid { costs, kinds })
    }

    /// Cost of stepping onto `point`. Callers only ask about in-bounds cells.
    #[inline]
    pub fn cost_at(&self, point: Point) -> i32 {
        self.costs.get_point(point)
    }

    /// Terrain flavour at `point`. Obstacle cells report road, which display
    /// layers never consult.
    pub fn kind_at(&self, point: Point) -> TerrainKind {
        self.kinds[point.y as usize * self.costs.width + point.x as usize]
    }
}

/// How a step is priced during a search: flat or terrain-weighted.
///
/// Engines are written against this, so the uniform case pays no lookups.
#[derive(Clone, Copy, Debug)]
pub enum CostModel<'a> {
    Uniform,
    Weighted(&'a TerrainGrid),
}

impl<'a> CostModel<'a> {
    /// Cost of stepping onto `point` under this model.
    #[inline]
    pub fn cost_of(&self, point: Point) -> i32 {
        match self {
            CostModel::Uniform => 1,
            CostModel::Weighted(terrain) => terrain.cost_at(point),
        }
    }

    /// Whether path quality should be judged by cost rather than length.
    pub fn is_weighted(&self) -> bool {
        matches!(self, CostModel::Weighted(_))
    }
}

impl<'a> From<Option<&'a TerrainGrid>> for CostModel<'a> {
    fn from(terrain: Option<&'a TerrainGrid>) -> Self {
        match terrain {
            Some(terrain) => CostModel::Weighted(terrain),
            None => CostModel::Uniform,
        }
    }
}
