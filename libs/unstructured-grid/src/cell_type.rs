//! Cell type tags.
//!
//! The numeric codes follow the classic VTK cell type numbering so meshes
//! coming from existing pipelines keep their tags. Codes outside the
//! supported set are preserved as [`CellType::Unknown`] instead of being
//! rejected, which keeps readers forward compatible with newer cell types.

use serde::{Deserialize, Serialize};

/// Topological type of a cell.
///
/// # Examples
/// ```
/// use unstructured_grid::CellType;
/// assert_eq!(CellType::from_code(12), CellType::Hexahedron);
/// assert_eq!(CellType::from_code(99), CellType::Unknown(99));
/// assert_eq!(CellType::Hexahedron.code(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    /// Placeholder cell with no points.
    Empty,
    /// Single point.
    Vertex,
    /// Set of unconnected points.
    PolyVertex,
    /// Two-point segment.
    Line,
    /// Connected chain of segments.
    PolyLine,
    /// Three-point triangle.
    Triangle,
    /// Strip of triangles sharing edges.
    TriangleStrip,
    /// Planar polygon with any number of points.
    Polygon,
    /// Axis-aligned quad stored in lexicographic (non-cyclic) point order.
    Pixel,
    /// Four-point quadrilateral.
    Quad,
    /// Four-point tetrahedron.
    Tetra,
    /// Axis-aligned hexahedron stored in lexicographic point order.
    Voxel,
    /// Eight-point hexahedron.
    Hexahedron,
    /// Six-point triangular prism.
    Wedge,
    /// Five-point pyramid with a quadrilateral base.
    Pyramid,
    /// Three-point curved edge, midside point last.
    QuadraticEdge,
    /// Six-point curved triangle, midside points after corners.
    QuadraticTriangle,
    /// Eight-point curved quadrilateral, midside points after corners.
    QuadraticQuad,
    /// Ten-point curved tetrahedron.
    QuadraticTetra,
    /// Twenty-point curved hexahedron.
    QuadraticHexahedron,
    /// Any tag this crate does not know how to interpret.
    Unknown(u8),
}

impl CellType {
    /// Maps a numeric type code to a cell type.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => CellType::Empty,
            1 => CellType::Vertex,
            2 => CellType::PolyVertex,
            3 => CellType::Line,
            4 => CellType::PolyLine,
            5 => CellType::Triangle,
            6 => CellType::TriangleStrip,
            7 => CellType::Polygon,
            8 => CellType::Pixel,
            9 => CellType::Quad,
            10 => CellType::Tetra,
            11 => CellType::Voxel,
            12 => CellType::Hexahedron,
            13 => CellType::Wedge,
            14 => CellType::Pyramid,
            21 => CellType::QuadraticEdge,
            22 => CellType::QuadraticTriangle,
            23 => CellType::QuadraticQuad,
            24 => CellType::QuadraticTetra,
            25 => CellType::QuadraticHexahedron,
            other => CellType::Unknown(other),
        }
    }

    /// Numeric type code, the inverse of [`CellType::from_code`].
    pub fn code(self) -> u8 {
        match self {
            CellType::Empty => 0,
            CellType::Vertex => 1,
            CellType::PolyVertex => 2,
            CellType::Line => 3,
            CellType::PolyLine => 4,
            CellType::Triangle => 5,
            CellType::TriangleStrip => 6,
            CellType::Polygon => 7,
            CellType::Pixel => 8,
            CellType::Quad => 9,
            CellType::Tetra => 10,
            CellType::Voxel => 11,
            CellType::Hexahedron => 12,
            CellType::Wedge => 13,
            CellType::Pyramid => 14,
            CellType::QuadraticEdge => 21,
            CellType::QuadraticTriangle => 22,
            CellType::QuadraticQuad => 23,
            CellType::QuadraticTetra => 24,
            CellType::QuadraticHexahedron => 25,
            CellType::Unknown(code) => code,
        }
    }

    /// Whether the cell has midside points and needs tessellation.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            CellType::QuadraticEdge
                | CellType::QuadraticTriangle
                | CellType::QuadraticQuad
                | CellType::QuadraticTetra
                | CellType::QuadraticHexahedron
        )
    }

    /// Exact point count for fixed-size types, `None` for variable-size and
    /// unknown types.
    pub fn point_count(self) -> Option<usize> {
        match self {
            CellType::Empty => Some(0),
            CellType::Vertex => Some(1),
            CellType::Line => Some(2),
            CellType::Triangle => Some(3),
            CellType::Pixel | CellType::Quad | CellType::Tetra => Some(4),
            CellType::Pyramid => Some(5),
            CellType::Wedge => Some(6),
            CellType::Voxel | CellType::Hexahedron => Some(8),
            CellType::QuadraticEdge => Some(3),
            CellType::QuadraticTriangle => Some(6),
            CellType::QuadraticQuad => Some(8),
            CellType::QuadraticTetra => Some(10),
            CellType::QuadraticHexahedron => Some(20),
            CellType::PolyVertex
            | CellType::PolyLine
            | CellType::Polygon
            | CellType::TriangleStrip
            | CellType::Unknown(_) => None,
        }
    }

    /// Minimum point count for variable-size types.
    pub fn min_point_count(self) -> usize {
        match self {
            CellType::PolyVertex => 1,
            CellType::PolyLine => 2,
            CellType::Polygon | CellType::TriangleStrip => 3,
            other => other.point_count().unwrap_or(0),
        }
    }
}
