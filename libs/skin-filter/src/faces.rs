//! Face tables of the 3D cell types.
//!
//! Each face lists local point indices in an order that winds outward.
//! Triangular faces of wedges and pyramids are simply three entries long
//! where a fixed-width table would carry an unused fourth slot.
//!
//! Quadratic faces list the corner points first, then the midside points in
//! edge order (corner 0 → 1, 1 → 2, ...).

use unstructured_grid::CellType;

/// Pixel / voxel-face reorder making a lexicographic quad cyclic.
pub const PIXEL_ORDER: [usize; 4] = [0, 1, 3, 2];

const TETRA_FACES: [&[usize]; 4] = [&[0, 1, 3], &[1, 2, 3], &[2, 0, 3], &[0, 2, 1]];

// Lexicographic (pixel) order; wound outward only after `PIXEL_ORDER`.
const VOXEL_FACES: [&[usize]; 6] = [
    &[0, 4, 2, 6],
    &[1, 3, 5, 7],
    &[0, 1, 4, 5],
    &[2, 6, 3, 7],
    &[0, 2, 1, 3],
    &[4, 5, 6, 7],
];

const HEXAHEDRON_FACES: [&[usize]; 6] = [
    &[0, 4, 7, 3],
    &[1, 2, 6, 5],
    &[0, 1, 5, 4],
    &[3, 7, 6, 2],
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
];

const WEDGE_FACES: [&[usize]; 5] = [
    &[0, 1, 2],
    &[3, 5, 4],
    &[0, 3, 4, 1],
    &[1, 4, 5, 2],
    &[2, 5, 3, 0],
];

const PYRAMID_FACES: [&[usize]; 5] = [
    &[0, 3, 2, 1],
    &[0, 1, 4],
    &[1, 2, 4],
    &[2, 3, 4],
    &[3, 0, 4],
];

const QUADRATIC_TETRA_FACES: [&[usize]; 4] = [
    &[0, 1, 3, 4, 8, 7],
    &[1, 2, 3, 5, 9, 8],
    &[2, 0, 3, 6, 7, 9],
    &[0, 2, 1, 6, 5, 4],
];

const QUADRATIC_HEXAHEDRON_FACES: [&[usize]; 6] = [
    &[0, 4, 7, 3, 16, 15, 19, 11],
    &[1, 2, 6, 5, 9, 18, 13, 17],
    &[0, 1, 5, 4, 8, 17, 12, 16],
    &[3, 7, 6, 2, 19, 14, 18, 10],
    &[0, 3, 2, 1, 11, 10, 9, 8],
    &[4, 5, 6, 7, 12, 13, 14, 15],
];

/// Topological faces of one 3D cell type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTable {
    faces: &'static [&'static [usize]],
    emit_order: Option<[usize; 4]>,
}

impl FaceTable {
    /// Face table for `cell_type`, `None` for anything that is not a 3D cell.
    ///
    /// # Examples
    /// ```
    /// use skin_filter::faces::FaceTable;
    /// use unstructured_grid::CellType;
    /// let table = FaceTable::for_type(CellType::Wedge).unwrap();
    /// assert_eq!(table.len(), 5);
    /// assert_eq!(table.face(0), &[0, 1, 2]);
    /// assert!(FaceTable::for_type(CellType::Quad).is_none());
    /// ```
    pub fn for_type(cell_type: CellType) -> Option<Self> {
        let faces: &'static [&'static [usize]] = match cell_type {
            CellType::Tetra => &TETRA_FACES,
            CellType::Voxel => &VOXEL_FACES,
            CellType::Hexahedron => &HEXAHEDRON_FACES,
            CellType::Wedge => &WEDGE_FACES,
            CellType::Pyramid => &PYRAMID_FACES,
            CellType::QuadraticTetra => &QUADRATIC_TETRA_FACES,
            CellType::QuadraticHexahedron => &QUADRATIC_HEXAHEDRON_FACES,
            _ => return None,
        };
        let emit_order = (cell_type == CellType::Voxel).then_some(PIXEL_ORDER);
        Some(Self { faces, emit_order })
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the table is empty (never true for a supported type).
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Local point indices of face `index`, in query order.
    pub fn face(&self, index: usize) -> &'static [usize] {
        self.faces[index]
    }

    /// Iterates over the faces in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static [usize]> {
        self.faces.iter().copied()
    }

    /// Local point indices of `face` in emission order.
    ///
    /// Voxel faces come out of the table in lexicographic order and are
    /// passed through [`PIXEL_ORDER`]; every other face is emitted as listed.
    pub fn emission_order(&self, face: &'static [usize]) -> impl Iterator<Item = usize> + 'static {
        let order = self.emit_order;
        (0..face.len()).map(move |i| match order {
            Some(order) => face[order[i]],
            None => face[i],
        })
    }
}
