//! # Tessellator
//!
//! Fixed, non-adaptive linearization of quadratic cells and faces.
//!
//! | Input | Output | New points |
//! |---|---|---|
//! | quadratic edge (3) | 2 lines | 0 |
//! | quadratic triangle (6) | 4 triangles | 0 |
//! | quadratic quad (8) | 8 triangles | 1 (centre) |
//!
//! Local numbering follows the cell types: corners first, then midside
//! points in edge order. Sub-triangles keep the winding of the parent.
//!
//! ```text
//!  3 ---- 6 ---- 2
//!  |  \   |   /  |
//!  7 ---- 8 ---- 5      quadratic quad, 8 = synthesized centre
//!  |  /   |   \  |
//!  0 ---- 4 ---- 1
//! ```

use unstructured_grid::{PointId, UnstructuredGrid, Vec3};


const EDGE_SEGMENTS: [[usize; 2]; 2] = [[0, 2], [2, 1]];

const TRIANGLE_SPLIT: [[usize; 3]; 4] = [[0, 3, 5], [3, 1, 4], [5, 4, 2], [3, 4, 5]];

/// Local index standing for the synthesized centre of a quadratic quad.
const QUAD_CENTRE: usize = 8;

const QUAD_SPLIT: [[usize; 3]; 8] = [
    [0, 4, QUAD_CENTRE],
    [0, QUAD_CENTRE, 7],
    [4, 1, 5],
    [4, 5, QUAD_CENTRE],
    [QUAD_CENTRE, 5, 2],
    [QUAD_CENTRE, 2, 6],
    [7, QUAD_CENTRE, 6],
    [7, 6, 3],
];

/// Serendipity shape function weights at the parametric centre.
const CORNER_WEIGHT: f64 = -0.25;
const MIDSIDE_WEIGHT: f64 = 0.5;

/// A point created by tessellation, with the input points and weights it
/// interpolates.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedPoint {
    /// Interpolated coordinates.
    pub position: Vec3,
    /// `(input point, weight)` pairs; weights sum to one.
    pub stencil: [(PointId, f64); 8],
}

/// Splits a quadratic edge `[end, end, mid]` into two line segments.
pub fn quadratic_edge(points: &[PointId]) -> impl Iterator<Item = [PointId; 2]> + '_ {
    EDGE_SEGMENTS.iter().map(move |&[a, b]| [points[a], points[b]])
}

/// Splits a quadratic triangle into four triangles on its own six points.
pub fn quadratic_triangle(points: &[PointId]) -> impl Iterator<Item = [PointId; 3]> + '_ {
    TRIANGLE_SPLIT
        .iter()
        .map(move |&[a, b, c]| [points[a], points[b], points[c]])
}

/// Interpolates the centre of a quadratic quad.
///
/// ```
/// use skin_filter::tessellate::quad_centre;
/// use unstructured_grid::{CellType, GridBuilder, Vec3};
///
/// let mut builder = GridBuilder::new();
/// for p in [[0., 0., 0.], [2., 0., 0.], [2., 2., 0.], [0., 2., 0.],
///           [1., 0., 0.], [2., 1., 0.], [1., 2., 0.], [0., 1., 0.]] {
///     builder.add_point(p);
/// }
/// builder.add_cell(CellType::QuadraticQuad, &[0, 1, 2, 3, 4, 5, 6, 7]);
/// let grid = builder.build().unwrap();
///
/// let centre = quad_centre(&grid, grid.cell_points(0));
/// assert_eq!(centre.position, Vec3::new(1.0, 1.0, 0.0));
/// ```
pub fn quad_centre(grid: &UnstructuredGrid, points: &[PointId]) -> SynthesizedPoint {
    let stencil: [(PointId, f64); 8] = std::array::from_fn(|i| {
        let weight = if i < 4 { CORNER_WEIGHT } else { MIDSIDE_WEIGHT };
        (points[i], weight)
    });
    let position = stencil
        .iter()
        .fold(Vec3::ZERO, |acc, &(point, weight)| acc + grid.point(point) * weight);
    SynthesizedPoint { position, stencil }
}

/// Splits a quadratic quad into eight triangles fanned around `centre`.
pub fn quadratic_quad(
    points: &[PointId],
    centre: PointId,
) -> impl Iterator<Item = [PointId; 3]> + '_ {
    let resolve = move |local: usize| {
        if local == QUAD_CENTRE {
            centre
        } else {
            points[local]
        }
    };
    QUAD_SPLIT
        .iter()
        .map(move |&[a, b, c]| [resolve(a), resolve(b), resolve(c)])
}
