//! Cell-type dispatch.
//!
//! Routes every cell type to one extraction strategy. The match is
//! exhaustive over [`CellType`], so a new cell type does not compile until
//! it is routed somewhere.

use unstructured_grid::CellType;

use crate::faces::FaceTable;
use crate::output::BucketKind;

/// How one cell contributes to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Nothing to emit (the empty cell type).
    Skip,
    /// Copy the connectivity into a bucket unchanged.
    Direct(BucketKind),
    /// Four points in lexicographic order, emitted as a cyclic polygon.
    Pixel,
    /// Emit the boundary faces of a linear 3D cell.
    LinearSolid(FaceTable),
    /// Split a quadratic edge into lines.
    QuadraticEdge,
    /// Split a quadratic triangle into triangles.
    QuadraticTriangle,
    /// Split a quadratic quad around a synthesized centre point.
    QuadraticQuad,
    /// Split the boundary faces of a quadratic 3D cell.
    QuadraticSolid(FaceTable),
    /// Unrecognized type tag: skipped and counted.
    Unknown,
}

/// Strategy for `cell_type`.
///
/// # Examples
/// ```
/// use skin_filter::dispatch::{strategy_for, Strategy};
/// use skin_filter::output::BucketKind;
/// use unstructured_grid::CellType;
///
/// assert_eq!(strategy_for(CellType::PolyLine), Strategy::Direct(BucketKind::Lines));
/// assert_eq!(strategy_for(CellType::Unknown(99)), Strategy::Unknown);
/// ```
pub fn strategy_for(cell_type: CellType) -> Strategy {
    match cell_type {
        CellType::Empty => Strategy::Skip,
        CellType::Vertex | CellType::PolyVertex => Strategy::Direct(BucketKind::Verts),
        CellType::Line | CellType::PolyLine => Strategy::Direct(BucketKind::Lines),
        CellType::Triangle | CellType::Quad | CellType::Polygon => {
            Strategy::Direct(BucketKind::Polys)
        }
        CellType::TriangleStrip => Strategy::Direct(BucketKind::Strips),
        CellType::Pixel => Strategy::Pixel,
        CellType::Tetra
        | CellType::Voxel
        | CellType::Hexahedron
        | CellType::Wedge
        | CellType::Pyramid => solid(cell_type, Strategy::LinearSolid),
        CellType::QuadraticEdge => Strategy::QuadraticEdge,
        CellType::QuadraticTriangle => Strategy::QuadraticTriangle,
        CellType::QuadraticQuad => Strategy::QuadraticQuad,
        CellType::QuadraticTetra | CellType::QuadraticHexahedron => {
            solid(cell_type, Strategy::QuadraticSolid)
        }
        CellType::Unknown(_) => Strategy::Unknown,
    }
}

fn solid(cell_type: CellType, strategy: fn(FaceTable) -> Strategy) -> Strategy {
    FaceTable::for_type(cell_type).map_or(Strategy::Unknown, strategy)
}
