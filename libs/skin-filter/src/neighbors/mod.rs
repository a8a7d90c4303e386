//! # Neighbor Query
//!
//! Point → incident-cell index and the face adjacency test built on it.
//!
//! ## Memory Layout
//!
//! ```text
//! offsets: [0, 2, 5, 6, ...]           (num_points + 1 entries)
//! cells:   [c0 c3 | c0 c1 c3 | c1 | ...]
//!            p0       p1        p2
//! ```
//!
//! Each point's cell list is sorted and free of duplicates, so a face query
//! starts from the cells of its first point and filters them with a binary
//! search per remaining point: O(cells per point) instead of a scan over the
//! whole mesh.

use unstructured_grid::{CellId, PointId, UnstructuredGrid};

use crate::visibility::Visibility;

#[cfg(test)]
mod tests;

// =============================================================================
// POINT → CELL INDEX
// =============================================================================

/// Compact multimap from point id to the ids of the cells using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointCellIndex {
    offsets: Vec<usize>,
    cells: Vec<CellId>,
}

impl PointCellIndex {
    /// Builds the index in two passes over the connectivity (count, fill).
    ///
    /// A cell listing the same point twice is recorded once for that point.
    pub fn build(grid: &UnstructuredGrid) -> Self {
        let num_points = grid.num_points();
        let mut last_seen = vec![usize::MAX; num_points];
        let mut counts = vec![0usize; num_points + 1];

        for (cell, _, points) in grid.iter_cells() {
            for &point in points {
                if last_seen[point] != cell {
                    last_seen[point] = cell;
                    counts[point + 1] += 1;
                }
            }
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }
        let offsets = counts;

        let mut cursor = offsets[..num_points].to_vec();
        let mut cells = vec![0; offsets[num_points]];
        last_seen.fill(usize::MAX);
        for (cell, _, points) in grid.iter_cells() {
            for &point in points {
                if last_seen[point] != cell {
                    last_seen[point] = cell;
                    cells[cursor[point]] = cell;
                    cursor[point] += 1;
                }
            }
        }

        Self { offsets, cells }
    }

    /// Cells using `point`, in increasing id order.
    #[inline]
    pub fn cells_of(&self, point: PointId) -> &[CellId] {
        &self.cells[self.offsets[point]..self.offsets[point + 1]]
    }

    /// Number of points indexed.
    pub fn num_points(&self) -> usize {
        self.offsets.len() - 1
    }
}

// =============================================================================
// FACE QUERY
// =============================================================================

/// Finds the cells sharing a face with a given owner cell.
///
/// Holds a scratch buffer so repeated queries do not allocate.
#[derive(Debug)]
pub struct NeighborQuery<'a> {
    index: &'a PointCellIndex,
    scratch: Vec<CellId>,
}

impl<'a> NeighborQuery<'a> {
    /// Creates a query over `index`.
    pub fn new(index: &'a PointCellIndex) -> Self {
        Self {
            index,
            scratch: Vec::new(),
        }
    }

    /// Cells other than `owner` that use every point of `face`, in
    /// increasing id order.
    pub fn neighbors(&mut self, owner: CellId, face: &[PointId]) -> &[CellId] {
        self.scratch.clear();
        let Some((&first, rest)) = face.split_first() else {
            return &self.scratch;
        };
        self.scratch.extend(
            self.index
                .cells_of(first)
                .iter()
                .copied()
                .filter(|&cell| cell != owner),
        );
        for &point in rest {
            if self.scratch.is_empty() {
                break;
            }
            let incident = self.index.cells_of(point);
            self.scratch.retain(|cell| incident.binary_search(cell).is_ok());
        }
        &self.scratch
    }
}

/// Decides whether a face of a visible 3D cell belongs to the skin.
#[derive(Debug)]
pub struct FaceClassifier<'a> {
    query: NeighborQuery<'a>,
    visibility: &'a Visibility,
    show_interior_faces: bool,
}

impl<'a> FaceClassifier<'a> {
    /// Creates a classifier over a prebuilt index and visibility tags.
    pub fn new(index: &'a PointCellIndex, visibility: &'a Visibility, show_interior_faces: bool) -> Self {
        Self {
            query: NeighborQuery::new(index),
            visibility,
            show_interior_faces,
        }
    }

    /// Whether `face` of `owner` is a boundary face.
    ///
    /// True when interior faces are requested, or when no visible cell other
    /// than `owner` shares all of the face's points. With non-manifold input
    /// (several cells sharing the face) a single visible sharer is enough to
    /// suppress the face.
    pub fn is_boundary_face(&mut self, owner: CellId, face: &[PointId]) -> bool {
        if self.show_interior_faces {
            return true;
        }
        let visibility = self.visibility;
        !self
            .query
            .neighbors(owner, face)
            .iter()
            .any(|&cell| visibility.is_visible(cell))
    }
}
