//! Visibility classification.
//!
//! A cell is visible when it passes every enabled clipping mode: its id lies
//! in the cell range, and each of its points lies in the point range and in
//! the bounding box. With no clipping mode enabled every cell is visible and
//! no point is ever scanned.
//!
//! Ghost levels are not part of visibility. A ghost neighbor still hides the
//! face it shares with an owned cell; ghost cells are only kept from emitting
//! geometry themselves.

use rayon::prelude::*;
use unstructured_grid::{CellId, UnstructuredGrid};

use crate::options::FilterConfig;

/// Per-execution visibility tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// No clipping: every cell is visible.
    All,
    /// One tag per cell, computed once up front.
    Tagged(Vec<bool>),
}

impl Visibility {
    /// Tags every cell of `grid` under `config`.
    ///
    /// Tagging runs on the rayon pool once the grid has more than
    /// `config.parallel_threshold` cells; the result does not depend on it.
    pub fn classify(grid: &UnstructuredGrid, config: &FilterConfig) -> Self {
        if !config.is_clipping() {
            return Visibility::All;
        }
        let num_cells = grid.num_cells();
        let tags = if num_cells > config.parallel_threshold {
            (0..num_cells)
                .into_par_iter()
                .map(|cell| cell_is_visible(grid, config, cell))
                .collect()
        } else {
            (0..num_cells)
                .map(|cell| cell_is_visible(grid, config, cell))
                .collect()
        };
        Visibility::Tagged(tags)
    }

    /// Whether `cell` is visible.
    #[inline]
    pub fn is_visible(&self, cell: CellId) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Tagged(tags) => tags[cell],
        }
    }

    /// Number of visible cells out of `num_cells`.
    pub fn count_visible(&self, num_cells: usize) -> usize {
        match self {
            Visibility::All => num_cells,
            Visibility::Tagged(tags) => tags.iter().filter(|&&visible| visible).count(),
        }
    }
}

fn cell_is_visible(grid: &UnstructuredGrid, config: &FilterConfig, cell: CellId) -> bool {
    if !config.keeps_cell(cell) {
        return false;
    }
    if config.point_id_range.is_none() && config.bounding_box.is_none() {
        return true;
    }
    grid.cell_points(cell)
        .iter()
        .all(|&point| config.keeps_point(point, grid.point(point)))
}
