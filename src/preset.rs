//! Declarative scenario descriptions and their validating builder.

use grid_util::grid::Grid;
use grid_util::point::Point;
use log::info;

use crate::error::SearchConfigError;
use crate::grid::SearchGrid;
use crate::metrics::OptimalReference;
use crate::terrain::{TerrainGrid, TerrainKind};

/// One comparison scenario as handed over by a preset provider: board shape,
/// endpoints, obstacles, optional terrain, and the known optimum for scoring.
///
/// [`GridPreset::build`] is the chokepoint where every configuration mistake
/// surfaces; the grids it returns uphold the invariants the engines assume,
/// so the engines themselves never validate.
#[derive(Clone, Debug)]
pub struct GridPreset {
    pub rows: usize,
    pub cols: usize,
    pub start: Point,
    pub goal: Point,
    pub obstacles: Vec<Point>,
    pub terrain_defs: Vec<(Point, TerrainKind)>,
    pub optimal: OptimalReference,
}

impl GridPreset {
    /// Materializes the preset into a component-annotated board and, when
    /// terrain definitions are present, its cost field.
    ///
    /// Fails fast on the first malformed piece: zero dimensions, anything off
    /// the board, endpoints on obstacles, terrain on obstacles.
    pub fn build(&self) -> Result<(SearchGrid, Option<TerrainGrid>), SearchConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SearchConfigError::ZeroDimension {
                width: self.cols,
                height: self.rows,
            });
        }
        let mut grid = SearchGrid::new(self.cols, self.rows, false);
        for &obstacle in &self.obstacles {
            if !grid.in_bounds(obstacle) {
                return Err(SearchConfigError::OutOfBounds {
                    what: "obstacle",
                    at: obstacle,
                    width: self.cols,
                    height: self.rows,
                });
            }
            grid.set(obstacle.x as usize, obstacle.y as usize, true);
        }
        for (what, endpoint) in [("start", self.start), ("goal", self.goal)] {
            if !grid.in_bounds(endpoint) {
                return Err(SearchConfigError::OutOfBounds {
                    what,
                    at: endpoint,
                    width: self.cols,
                    height: self.rows,
                });
            }
            if !grid.is_free(endpoint) {
                return Err(SearchConfigError::BlockedEndpoint { what, at: endpoint });
            }
        }
        grid.generate_components();
        let terrain = if self.terrain_defs.is_empty() {
            None
        } else {
            Some(TerrainGrid::from_defs(&grid, &self.terrain_defs)?)
        };
        info!(
            "built {}x{} preset board, {} obstacles, {} terrain definitions, {} -> {}",
            self.cols,
            self.rows,
            self.obstacles.len(),
            self.terrain_defs.len(),
            self.start,
            self.goal
        );
        Ok((grid, terrain))
    }
}
