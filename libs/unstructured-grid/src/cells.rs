//! # Cell Array
//!
//! Compact storage for a sequence of cells: one flat connectivity buffer of
//! point ids and an offsets array delimiting each cell.
//!
//! ## Memory Layout
//!
//! ```text
//! offsets:      [0, 4, 7, 15]          (num_cells + 1 entries)
//! connectivity: [p0 p1 p2 p3 | p4 p5 p6 | p7 ... p14]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::PointId;

/// Flat offsets + connectivity storage for cells.
///
/// ## Example
///
/// ```rust
/// use unstructured_grid::CellArray;
///
/// let mut cells = CellArray::new();
/// cells.push(&[0, 1, 2]);
/// cells.push(&[2, 3]);
/// assert_eq!(cells.len(), 2);
/// assert_eq!(cells.cell(1), &[2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCellArray")]
pub struct CellArray {
    offsets: Vec<usize>,
    connectivity: Vec<PointId>,
}

#[derive(Deserialize)]
struct RawCellArray {
    offsets: Vec<usize>,
    connectivity: Vec<PointId>,
}

impl TryFrom<RawCellArray> for CellArray {
    type Error = GridError;

    fn try_from(raw: RawCellArray) -> GridResult<Self> {
        Self::from_raw(raw.offsets, raw.connectivity)
    }
}

impl Default for CellArray {
    fn default() -> Self {
        Self::new()
    }
}

impl CellArray {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates an empty cell array.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            connectivity: Vec::new(),
        }
    }

    /// Creates an empty cell array with reserved capacity.
    ///
    /// ## Parameters
    ///
    /// - `cells`: Expected number of cells
    /// - `connectivity`: Expected total number of point ids
    #[must_use]
    pub fn with_capacity(cells: usize, connectivity: usize) -> Self {
        let mut offsets = Vec::with_capacity(cells + 1);
        offsets.push(0);
        Self {
            offsets,
            connectivity: Vec::with_capacity(connectivity),
        }
    }

    /// Builds a cell array from raw offsets and connectivity.
    ///
    /// Offsets must start at 0, be non-decreasing, and end at
    /// `connectivity.len()`.
    pub fn from_raw(offsets: Vec<usize>, connectivity: Vec<PointId>) -> GridResult<Self> {
        match offsets.first() {
            Some(0) => {}
            Some(first) => {
                return Err(GridError::MalformedOffsets(format!(
                    "first offset is {first}, expected 0"
                )))
            }
            None => return Err(GridError::MalformedOffsets("offsets are empty".into())),
        }
        if let Some(i) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(GridError::MalformedOffsets(format!(
                "offset {} decreases from {} to {}",
                i + 1,
                offsets[i],
                offsets[i + 1]
            )));
        }
        let last = offsets[offsets.len() - 1];
        if last != connectivity.len() {
            return Err(GridError::MalformedOffsets(format!(
                "last offset {last} does not match connectivity length {}",
                connectivity.len()
            )));
        }
        Ok(Self {
            offsets,
            connectivity,
        })
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends a cell and returns its index within this array.
    pub fn push(&mut self, points: &[PointId]) -> usize {
        self.connectivity.extend_from_slice(points);
        self.close_cell()
    }

    /// Appends a cell from an iterator of point ids.
    pub fn push_iter<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = PointId>,
    {
        self.connectivity.extend(points);
        self.close_cell()
    }

    fn close_cell(&mut self) -> usize {
        self.offsets.push(self.connectivity.len());
        self.offsets.len() - 2
    }

    /// Drops reserved but unused capacity.
    pub fn squeeze(&mut self) {
        self.offsets.shrink_to_fit();
        self.connectivity.shrink_to_fit();
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether the array holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point ids of cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn cell(&self, index: usize) -> &[PointId] {
        &self.connectivity[self.offsets[index]..self.offsets[index + 1]]
    }

    /// Iterates over all cells in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[PointId]> + '_ {
        self.offsets
            .windows(2)
            .map(move |w| &self.connectivity[w[0]..w[1]])
    }

    /// Total number of point ids stored.
    pub fn connectivity_len(&self) -> usize {
        self.connectivity.len()
    }

    /// Raw offsets array (`len() + 1` entries).
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Raw connectivity buffer.
    pub fn connectivity(&self) -> &[PointId] {
        &self.connectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_sequential_indices() {
        let mut cells = CellArray::with_capacity(2, 8);
        assert_eq!(cells.push(&[0, 1, 2, 3]), 0);
        assert_eq!(cells.push_iter([4, 5]), 1);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells.connectivity_len(), 6);
        assert_eq!(cells.iter().collect::<Vec<_>>(), vec![&[0, 1, 2, 3][..], &[4, 5][..]]);
    }

    #[test]
    fn from_raw_rejects_bad_offsets() {
        assert!(CellArray::from_raw(vec![], vec![]).is_err());
        assert!(CellArray::from_raw(vec![1, 2], vec![0, 1]).is_err());
        assert!(CellArray::from_raw(vec![0, 3, 2], vec![0, 1, 2]).is_err());
        assert!(CellArray::from_raw(vec![0, 2], vec![0, 1, 2]).is_err());
        let cells = CellArray::from_raw(vec![0, 0, 3], vec![0, 1, 2]).unwrap();
        assert_eq!(cells.cell(0), &[] as &[PointId]);
        assert_eq!(cells.cell(1), &[0, 1, 2]);
    }

    #[test]
    fn squeeze_keeps_contents() {
        let mut cells = CellArray::with_capacity(100, 1000);
        cells.push(&[7, 8, 9]);
        cells.squeeze();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells.cell(0), &[7, 8, 9]);
    }
}
