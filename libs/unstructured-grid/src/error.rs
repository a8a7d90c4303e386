//! # Error Types
//!
//! Precondition violations detected while assembling an [`UnstructuredGrid`].
//! Once a grid exists it is immutable and every accessor is infallible.
//!
//! [`UnstructuredGrid`]: crate::UnstructuredGrid

use thiserror::Error;

use crate::{CellId, CellType, PointId};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised when a mesh does not satisfy the grid invariants.
///
/// ## Example
///
/// ```rust
/// use unstructured_grid::{CellType, GridBuilder, GridError};
///
/// let mut builder = GridBuilder::new();
/// builder.add_point([0.0, 0.0, 0.0]);
/// builder.add_cell(CellType::Line, &[0, 7]);
///
/// match builder.build() {
///     Err(GridError::DanglingPoint { cell, point, .. }) => {
///         assert_eq!((cell, point), (0, 7));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A cell references a point id outside the point set.
    #[error("cell {cell} references point {point}, but the grid has {num_points} points")]
    DanglingPoint {
        /// Offending cell
        cell: CellId,
        /// Out-of-range point id
        point: PointId,
        /// Size of the point set
        num_points: usize,
    },

    /// A fixed-size cell type was given the wrong number of points.
    #[error("cell {cell} of type {cell_type:?} expects {expected} points, got {actual}")]
    PointCountMismatch {
        /// Offending cell
        cell: CellId,
        /// Declared cell type
        cell_type: CellType,
        /// Points required by the type
        expected: usize,
        /// Points supplied
        actual: usize,
    },

    /// A variable-size cell type was given too few points.
    #[error("cell {cell} of type {cell_type:?} needs at least {minimum} points, got {actual}")]
    TooFewPoints {
        /// Offending cell
        cell: CellId,
        /// Declared cell type
        cell_type: CellType,
        /// Minimum point count for the type
        minimum: usize,
        /// Points supplied
        actual: usize,
    },

    /// The type array and the connectivity buffer disagree on the cell count.
    #[error("{types} cell types for {cells} cells")]
    CellCountMismatch {
        /// Length of the type array
        types: usize,
        /// Number of cells in the connectivity buffer
        cells: usize,
    },

    /// Connectivity offsets are not a non-decreasing sequence ending at the
    /// buffer length.
    #[error("malformed connectivity offsets: {0}")]
    MalformedOffsets(String),

    /// A point coordinate is NaN or infinite.
    #[error("point {point} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Offending point
        point: PointId,
    },

    /// An attribute array does not have one tuple per point/cell.
    #[error("attribute '{name}' has {actual} tuples, expected {expected}")]
    AttributeLength {
        /// Array name
        name: String,
        /// Number of points or cells
        expected: usize,
        /// Tuples present
        actual: usize,
    },

    /// An attribute array's value count is not a multiple of its component
    /// count, or the component count is zero.
    #[error("attribute '{name}' has {values} values for {components} components")]
    AttributeShape {
        /// Array name
        name: String,
        /// Declared component count
        components: usize,
        /// Number of scalar values
        values: usize,
    },

    /// Two attribute arrays in the same table share a name.
    #[error("duplicate attribute name '{0}'")]
    DuplicateAttribute(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for grid construction.
pub type GridResult<T> = Result<T, GridError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages carry the offending ids.
    #[test]
    fn test_error_display() {
        let err = GridError::DanglingPoint {
            cell: 3,
            point: 42,
            num_points: 10,
        };
        let text = err.to_string();
        assert!(text.contains("cell 3"));
        assert!(text.contains("point 42"));

        let err = GridError::PointCountMismatch {
            cell: 1,
            cell_type: CellType::Hexahedron,
            expected: 8,
            actual: 7,
        };
        assert!(err.to_string().contains("Hexahedron"));
    }

    /// Test error types are Send + Sync so hosts can move them across threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridError>();
    }
}
