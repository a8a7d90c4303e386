//! Filter options.
//!
//! [`FilterConfig`] is an immutable value handed to each execution. It can be
//! built in code with the `with_*` methods or deserialized by a host.
//! Malformed clipping ranges never fail an execution: [`FilterConfig::normalized`]
//! turns them into "clipping disabled" and logs a warning.

use config::constants::{DEFAULT_GHOST_UPDATE_LEVEL, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Deserialize, Serialize};
use tracing::warn;
use unstructured_grid::{CellId, PointId, Vec3};

/// Inclusive identifier range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    /// Smallest identifier kept.
    pub min: usize,
    /// Largest identifier kept.
    pub max: usize,
}

impl IdRange {
    /// Creates a range; `min > max` is accepted here and disabled on
    /// normalization.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `id` lies inside the range.
    pub fn contains(&self, id: usize) -> bool {
        self.min <= id && id <= self.max
    }

    /// Whether the range is non-empty.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Axis-aligned clipping box, bounds inclusive.
///
/// # Examples
/// ```
/// use skin_filter::Extent;
/// let extent = Extent::from_bounds([0.0, 1.0, 0.0, 2.0, -1.0, 1.0]);
/// assert!(extent.contains([0.5, 2.0, 0.0].into()));
/// assert!(!extent.contains([1.5, 0.0, 0.0].into()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Lower corner.
    pub min: Vec3,
    /// Upper corner.
    pub max: Vec3,
}

impl Extent {
    /// Creates a box from two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box from `[xmin, xmax, ymin, ymax, zmin, zmax]`.
    pub fn from_bounds(bounds: [f64; 6]) -> Self {
        Self {
            min: Vec3::new(bounds[0], bounds[2], bounds[4]),
            max: Vec3::new(bounds[1], bounds[3], bounds[5]),
        }
    }

    /// Whether `point` lies inside or on the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Whether every bound is a number and `min <= max` on each axis.
    pub fn is_valid(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan() && self.min.cmple(self.max).all()
    }
}

/// Immutable configuration of one skin extraction.
///
/// # Examples
/// ```
/// use skin_filter::{FilterConfig, IdRange};
/// let config = FilterConfig::default()
///     .with_cell_id_range(IdRange::new(0, 99))
///     .with_show_interior_faces(true);
/// assert!(config.is_clipping());
/// assert!(config.show_interior_faces);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Keep only cells whose id lies in the range.
    pub cell_id_range: Option<IdRange>,
    /// Keep only cells whose points all lie in the id range.
    pub point_id_range: Option<IdRange>,
    /// Keep only cells whose points all lie in the box.
    pub bounding_box: Option<Extent>,
    /// Emit every face of every visible 3D cell, ignoring adjacency.
    pub show_interior_faces: bool,
    /// Cells with a ghost level above this are never extracted.
    pub ghost_update_level: u8,
    /// Cell count above which visibility tagging runs in parallel.
    pub parallel_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            cell_id_range: None,
            point_id_range: None,
            bounding_box: None,
            show_interior_faces: false,
            ghost_update_level: DEFAULT_GHOST_UPDATE_LEVEL,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl FilterConfig {
    /// Enables cell id clipping.
    #[must_use]
    pub fn with_cell_id_range(mut self, range: IdRange) -> Self {
        self.cell_id_range = Some(range);
        self
    }

    /// Enables point id clipping.
    #[must_use]
    pub fn with_point_id_range(mut self, range: IdRange) -> Self {
        self.point_id_range = Some(range);
        self
    }

    /// Enables bounding box clipping.
    #[must_use]
    pub fn with_bounding_box(mut self, extent: Extent) -> Self {
        self.bounding_box = Some(extent);
        self
    }

    /// Sets whether interior faces are emitted.
    #[must_use]
    pub fn with_show_interior_faces(mut self, show: bool) -> Self {
        self.show_interior_faces = show;
        self
    }

    /// Sets the ghost update level.
    #[must_use]
    pub fn with_ghost_update_level(mut self, level: u8) -> Self {
        self.ghost_update_level = level;
        self
    }

    /// Sets the parallel visibility threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    /// Whether any clipping mode is enabled.
    pub fn is_clipping(&self) -> bool {
        self.cell_id_range.is_some() || self.point_id_range.is_some() || self.bounding_box.is_some()
    }

    /// Copy with malformed clipping modes disabled.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        if let Some(range) = out.cell_id_range.filter(|r| !r.is_valid()) {
            warn!(min = range.min, max = range.max, "cell id range is empty, clipping disabled");
            out.cell_id_range = None;
        }
        if let Some(range) = out.point_id_range.filter(|r| !r.is_valid()) {
            warn!(min = range.min, max = range.max, "point id range is empty, clipping disabled");
            out.point_id_range = None;
        }
        if let Some(extent) = out.bounding_box.filter(|e| !e.is_valid()) {
            warn!(?extent, "bounding box is malformed, clipping disabled");
            out.bounding_box = None;
        }
        if out.parallel_threshold == 0 {
            out.parallel_threshold = 1;
        }
        out
    }

    /// Whether cell `id` passes the cell id range.
    pub(crate) fn keeps_cell(&self, id: CellId) -> bool {
        self.cell_id_range.map_or(true, |range| range.contains(id))
    }

    /// Whether point `id` at `position` passes the point range and box.
    pub(crate) fn keeps_point(&self, id: PointId, position: Vec3) -> bool {
        self.point_id_range.map_or(true, |range| range.contains(id))
            && self.bounding_box.map_or(true, |extent| extent.contains(position))
    }
}
