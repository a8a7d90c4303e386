//! # Unstructured Grid
//!
//! The validated, immutable mesh consumed by the extraction engine.
//!
//! Every invariant that downstream code relies on for indexing is checked
//! once at construction:
//!
//! - every connectivity entry is a valid point id
//! - fixed-size cell types carry exactly their point count
//! - attribute tables carry one tuple per point / cell
//! - coordinates are finite

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeArray, AttributeTable};
use crate::cell_type::CellType;
use crate::cells::CellArray;
use crate::error::{GridError, GridResult};
use crate::{CellId, PointId, Vec3};

#[cfg(test)]
mod tests;

// =============================================================================
// GRID
// =============================================================================

/// Immutable mixed-topology mesh.
///
/// ## Example
///
/// ```rust
/// use unstructured_grid::{CellType, GridBuilder};
///
/// let mut builder = GridBuilder::new();
/// for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]] {
///     builder.add_point(p);
/// }
/// builder.add_cell(CellType::Triangle, &[0, 1, 2]);
/// let grid = builder.build().unwrap();
///
/// assert_eq!(grid.num_points(), 3);
/// assert_eq!(grid.cell_points(0), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct UnstructuredGrid {
    points: Vec<Vec3>,
    types: Vec<CellType>,
    cells: CellArray,
    point_data: AttributeTable,
    cell_data: AttributeTable,
}

impl UnstructuredGrid {
    /// Assembles a grid from its parts, validating every invariant.
    pub fn from_parts(
        points: Vec<Vec3>,
        types: Vec<CellType>,
        cells: CellArray,
        point_data: AttributeTable,
        cell_data: AttributeTable,
    ) -> GridResult<Self> {
        if types.len() != cells.len() {
            return Err(GridError::CellCountMismatch {
                types: types.len(),
                cells: cells.len(),
            });
        }
        if let Some(point) = points.iter().position(|p| !p.is_finite()) {
            return Err(GridError::NonFiniteCoordinate { point });
        }
        for (cell, (&cell_type, ids)) in types.iter().zip(cells.iter()).enumerate() {
            validate_cell(cell, cell_type, ids, points.len())?;
        }
        point_data.validate_tuples(points.len())?;
        cell_data.validate_tuples(cells.len())?;

        Ok(Self {
            points,
            types,
            cells,
            point_data,
            cell_data,
        })
    }

    // =========================================================================
    // POINTS
    // =========================================================================

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Coordinates of point `id`.
    pub fn point(&self, id: PointId) -> Vec3 {
        self.points[id]
    }

    /// All point coordinates, indexed by point id.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Per-point attributes.
    pub fn point_data(&self) -> &AttributeTable {
        &self.point_data
    }

    // =========================================================================
    // CELLS
    // =========================================================================

    /// Number of cells.
    pub fn num_cells(&self) -> usize {
        self.types.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Type tag of cell `id`.
    pub fn cell_type(&self, id: CellId) -> CellType {
        self.types[id]
    }

    /// Connectivity of cell `id`.
    pub fn cell_points(&self, id: CellId) -> &[PointId] {
        self.cells.cell(id)
    }

    /// Compact connectivity buffer of all cells.
    pub fn cells(&self) -> &CellArray {
        &self.cells
    }

    /// Iterates `(cell id, type, connectivity)` in increasing cell id order.
    pub fn iter_cells(&self) -> impl ExactSizeIterator<Item = (CellId, CellType, &[PointId])> + '_ {
        self.types
            .iter()
            .zip(self.cells.iter())
            .enumerate()
            .map(|(id, (&cell_type, ids))| (id, cell_type, ids))
    }

    /// Per-cell attributes.
    pub fn cell_data(&self) -> &AttributeTable {
        &self.cell_data
    }

    /// Per-cell ghost levels, when the reserved array is present and
    /// well-formed.
    pub fn ghost_levels(&self) -> Option<&[u8]> {
        self.cell_data.ghost_levels()
    }
}

/// Unvalidated serialized form; deserialization goes through
/// [`UnstructuredGrid::from_parts`].
#[derive(Deserialize)]
struct GridParts {
    points: Vec<Vec3>,
    types: Vec<CellType>,
    cells: CellArray,
    point_data: AttributeTable,
    cell_data: AttributeTable,
}

impl TryFrom<GridParts> for UnstructuredGrid {
    type Error = GridError;

    fn try_from(parts: GridParts) -> GridResult<Self> {
        Self::from_parts(
            parts.points,
            parts.types,
            parts.cells,
            parts.point_data,
            parts.cell_data,
        )
    }
}

fn validate_cell(
    cell: CellId,
    cell_type: CellType,
    ids: &[PointId],
    num_points: usize,
) -> GridResult<()> {
    match cell_type.point_count() {
        Some(expected) if expected != ids.len() => {
            return Err(GridError::PointCountMismatch {
                cell,
                cell_type,
                expected,
                actual: ids.len(),
            });
        }
        None if ids.len() < cell_type.min_point_count() => {
            return Err(GridError::TooFewPoints {
                cell,
                cell_type,
                minimum: cell_type.min_point_count(),
                actual: ids.len(),
            });
        }
        _ => {}
    }
    if let Some(&point) = ids.iter().find(|&&p| p >= num_points) {
        return Err(GridError::DanglingPoint {
            cell,
            point,
            num_points,
        });
    }
    Ok(())
}

// =============================================================================
// BUILDER
// =============================================================================

/// Incremental construction of an [`UnstructuredGrid`].
///
/// Validation is deferred to [`GridBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    points: Vec<Vec3>,
    types: Vec<CellType>,
    cells: CellArray,
    point_data: AttributeTable,
    cell_data: AttributeTable,
    pending_error: Option<GridError>,
}

impl GridBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with reserved capacity.
    #[must_use]
    pub fn with_capacity(points: usize, cells: usize, connectivity: usize) -> Self {
        Self {
            points: Vec::with_capacity(points),
            types: Vec::with_capacity(cells),
            cells: CellArray::with_capacity(cells, connectivity),
            ..Self::default()
        }
    }

    /// Appends a point and returns its id.
    pub fn add_point(&mut self, position: impl Into<Vec3>) -> PointId {
        self.points.push(position.into());
        self.points.len() - 1
    }

    /// Appends a cell and returns its id.
    pub fn add_cell(&mut self, cell_type: CellType, points: &[PointId]) -> CellId {
        self.types.push(cell_type);
        self.cells.push(points)
    }

    /// Attaches a per-point attribute array.
    pub fn add_point_array(&mut self, array: AttributeArray) -> &mut Self {
        self.record(|builder| builder.point_data.add(array));
        self
    }

    /// Attaches a per-cell attribute array.
    pub fn add_cell_array(&mut self, array: AttributeArray) -> &mut Self {
        self.record(|builder| builder.cell_data.add(array));
        self
    }

    fn record(&mut self, op: impl FnOnce(&mut Self) -> GridResult<()>) {
        if let Err(err) = op(self) {
            self.pending_error.get_or_insert(err);
        }
    }

    /// Validates and freezes the grid.
    pub fn build(self) -> GridResult<UnstructuredGrid> {
        if let Some(err) = self.pending_error {
            return Err(err);
        }
        UnstructuredGrid::from_parts(
            self.points,
            self.types,
            self.cells,
            self.point_data,
            self.cell_data,
        )
    }
}
