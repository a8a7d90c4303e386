//! # Output Assembler
//!
//! Accumulates emitted primitives into four typed buckets and records, for
//! every primitive, the input cell it came from.
//!
//! Output cell ids follow the poly-data convention: all vertex cells first,
//! then lines, polygons and strips. Within a bucket, primitives keep their
//! emission order. `origin_cell_ids` and the output cell attribute table are
//! laid out the same way.
//!
//! The input point set is borrowed unless tessellation created new points,
//! in which case the coordinates and point attributes are copied once and
//! the synthesized points appended.

use std::borrow::Cow;

use config::constants::BUCKET_CAPACITY_DIVISOR;
use serde::Serialize;
use unstructured_grid::{AttributeTable, CellArray, CellId, PointId, UnstructuredGrid, Vec3};

use crate::tessellate::SynthesizedPoint;

#[cfg(test)]
mod tests;

// =============================================================================
// BUCKETS
// =============================================================================

/// Typed output bucket, in output id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BucketKind {
    /// Vertex and poly-vertex cells.
    Verts,
    /// Line and poly-line cells.
    Lines,
    /// Polygons: 2D cells and the boundary faces of 3D cells.
    Polys,
    /// Triangle strips.
    Strips,
}

impl BucketKind {
    /// All kinds, in output id order.
    pub const ALL: [BucketKind; 4] = [
        BucketKind::Verts,
        BucketKind::Lines,
        BucketKind::Polys,
        BucketKind::Strips,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
struct PrimitiveBucket {
    cells: CellArray,
    sources: Vec<CellId>,
}

impl PrimitiveBucket {
    fn with_capacity(cells: usize) -> Self {
        Self {
            cells: CellArray::with_capacity(cells, cells * 4),
            sources: Vec::with_capacity(cells),
        }
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Counters collected over one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Cells the loop reached before finishing or aborting.
    pub cells_visited: usize,
    /// Visited cells handed to the dispatcher.
    pub cells_extracted: usize,
    /// Cells skipped by cell id, point id or bounding box clipping.
    pub cells_clipped: usize,
    /// Cells skipped for their ghost level.
    pub ghost_cells: usize,
    /// Cells of the empty type.
    pub empty_cells: usize,
    /// Cells of a type the dispatcher does not recognize.
    pub unknown_cells: usize,
    /// Quadratic cells linearized by the tessellator.
    pub cells_tessellated: usize,
    /// Faces of 3D cells emitted as boundary faces.
    pub faces_emitted: usize,
    /// Faces of 3D cells hidden by a visible neighbor.
    pub faces_suppressed: usize,
    /// Points created by tessellation.
    pub points_synthesized: usize,
}

// =============================================================================
// ASSEMBLER
// =============================================================================

/// Collects primitives during one extraction.
#[derive(Debug, Clone)]
pub struct OutputAssembler {
    buckets: [PrimitiveBucket; 4],
    first_new_point: PointId,
    new_points: Vec<Vec3>,
    stencils: Vec<[(PointId, f64); 8]>,
}

impl OutputAssembler {
    /// Creates an assembler for a mesh of `num_points` points and
    /// `num_cells` cells.
    pub fn new(num_points: usize, num_cells: usize) -> Self {
        let capacity = num_cells / BUCKET_CAPACITY_DIVISOR + 1;
        Self {
            buckets: std::array::from_fn(|_| PrimitiveBucket::with_capacity(capacity)),
            first_new_point: num_points,
            new_points: Vec::new(),
            stencils: Vec::new(),
        }
    }

    /// Appends a primitive originating from input cell `source`.
    pub fn emit(&mut self, kind: BucketKind, source: CellId, points: &[PointId]) {
        let bucket = &mut self.buckets[kind.index()];
        bucket.cells.push(points);
        bucket.sources.push(source);
    }

    /// Appends a primitive given as an iterator of point ids.
    pub fn emit_iter<I>(&mut self, kind: BucketKind, source: CellId, points: I)
    where
        I: IntoIterator<Item = PointId>,
    {
        let bucket = &mut self.buckets[kind.index()];
        bucket.cells.push_iter(points);
        bucket.sources.push(source);
    }

    /// Appends a synthesized point and returns its output id.
    pub fn add_point(&mut self, point: SynthesizedPoint) -> PointId {
        self.new_points.push(point.position);
        self.stencils.push(point.stencil);
        self.first_new_point + self.new_points.len() - 1
    }

    /// Number of primitives emitted so far.
    pub fn num_cells(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.sources.len()).sum()
    }

    /// Number of points synthesized so far.
    pub fn num_new_points(&self) -> usize {
        self.new_points.len()
    }

    /// Compacts the buckets and attaches attributes.
    pub fn finish(
        self,
        grid: &UnstructuredGrid,
        stats: ExtractionStats,
        aborted: bool,
    ) -> SkinOutput<'_> {
        let origin_cell_ids: Vec<CellId> = self
            .buckets
            .iter()
            .flat_map(|bucket| bucket.sources.iter().copied())
            .collect();
        let mut cell_data = grid.cell_data().gather(&origin_cell_ids);
        cell_data.squeeze();

        let (points, point_data) = if self.new_points.is_empty() {
            (Cow::Borrowed(grid.points()), Cow::Borrowed(grid.point_data()))
        } else {
            let mut points = Vec::with_capacity(grid.num_points() + self.new_points.len());
            points.extend_from_slice(grid.points());
            points.extend_from_slice(&self.new_points);
            let point_data = grid.point_data().extended_with(&self.stencils);
            (Cow::Owned(points), Cow::Owned(point_data))
        };

        let [mut verts, mut lines, mut polys, mut strips] = self.buckets.map(|bucket| bucket.cells);
        for cells in [&mut verts, &mut lines, &mut polys, &mut strips] {
            cells.squeeze();
        }

        SkinOutput {
            points,
            point_data,
            verts,
            lines,
            polys,
            strips,
            cell_data,
            origin_cell_ids,
            stats,
            aborted,
        }
    }
}

// =============================================================================
// OUTPUT SURFACE
// =============================================================================

/// Extracted surface.
///
/// Borrows the input points and point attributes when no points were
/// synthesized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkinOutput<'g> {
    points: Cow<'g, [Vec3]>,
    point_data: Cow<'g, AttributeTable>,
    verts: CellArray,
    lines: CellArray,
    polys: CellArray,
    strips: CellArray,
    cell_data: AttributeTable,
    origin_cell_ids: Vec<CellId>,
    stats: ExtractionStats,
    aborted: bool,
}

impl<'g> SkinOutput<'g> {
    /// Output for a mesh with nothing to extract.
    pub fn empty() -> Self {
        Self {
            points: Cow::Owned(Vec::new()),
            point_data: Cow::Owned(AttributeTable::new()),
            verts: CellArray::new(),
            lines: CellArray::new(),
            polys: CellArray::new(),
            strips: CellArray::new(),
            cell_data: AttributeTable::new(),
            origin_cell_ids: Vec::new(),
            stats: ExtractionStats::default(),
            aborted: false,
        }
    }

    /// Output point coordinates: the input points, then synthesized ones.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of output points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Output point attributes.
    #[inline]
    pub fn point_data(&self) -> &AttributeTable {
        &self.point_data
    }

    /// Whether the point set is borrowed from the input mesh.
    pub fn borrows_points(&self) -> bool {
        matches!(self.points, Cow::Borrowed(_))
    }

    /// Cells of one bucket.
    pub fn bucket(&self, kind: BucketKind) -> &CellArray {
        match kind {
            BucketKind::Verts => &self.verts,
            BucketKind::Lines => &self.lines,
            BucketKind::Polys => &self.polys,
            BucketKind::Strips => &self.strips,
        }
    }

    /// Vertex cells.
    #[inline]
    pub fn verts(&self) -> &CellArray {
        &self.verts
    }

    /// Line cells.
    #[inline]
    pub fn lines(&self) -> &CellArray {
        &self.lines
    }

    /// Polygon cells.
    #[inline]
    pub fn polys(&self) -> &CellArray {
        &self.polys
    }

    /// Triangle strip cells.
    #[inline]
    pub fn strips(&self) -> &CellArray {
        &self.strips
    }

    /// Total number of output cells over all buckets.
    pub fn num_cells(&self) -> usize {
        self.origin_cell_ids.len()
    }

    /// Looks up output cell `id` in the concatenated id space.
    pub fn cell(&self, id: usize) -> Option<(BucketKind, &[PointId])> {
        let mut first = 0;
        for kind in BucketKind::ALL {
            let cells = self.bucket(kind);
            if id < first + cells.len() {
                return Some((kind, cells.cell(id - first)));
            }
            first += cells.len();
        }
        None
    }

    /// Output cell attributes, one tuple per output cell.
    #[inline]
    pub fn cell_data(&self) -> &AttributeTable {
        &self.cell_data
    }

    /// Input cell of every output cell.
    #[inline]
    pub fn origin_cell_ids(&self) -> &[CellId] {
        &self.origin_cell_ids
    }

    /// Counters of the extraction.
    #[inline]
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Whether the extraction stopped early on request.
    #[inline]
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Detaches the output from the input mesh.
    pub fn into_owned(self) -> SkinOutput<'static> {
        SkinOutput {
            points: Cow::Owned(self.points.into_owned()),
            point_data: Cow::Owned(self.point_data.into_owned()),
            verts: self.verts,
            lines: self.lines,
            polys: self.polys,
            strips: self.strips,
            cell_data: self.cell_data,
            origin_cell_ids: self.origin_cell_ids,
            stats: self.stats,
            aborted: self.aborted,
        }
    }
}
