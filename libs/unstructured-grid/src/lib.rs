//! # Unstructured Grid
//!
//! Read-only model of a mixed-topology volumetric mesh: an ordered point set,
//! cells of heterogeneous type stored in a compact connectivity buffer, and
//! per-point / per-cell attribute tables.
//!
//! ## Structure
//!
//! - [`CellType`] - closed set of supported cell types plus `Unknown(code)`
//! - [`CellArray`] - offsets + point ids, shared by inputs and outputs
//! - [`AttributeTable`] - named, typed attribute arrays
//! - [`UnstructuredGrid`] / [`GridBuilder`] - the validated mesh
//!
//! ## Example
//!
//! ```rust
//! use unstructured_grid::{CellType, GridBuilder};
//!
//! let mut builder = GridBuilder::new();
//! builder.add_point([0.0, 0.0, 0.0]);
//! builder.add_point([1.0, 0.0, 0.0]);
//! builder.add_point([0.0, 1.0, 0.0]);
//! builder.add_point([0.0, 0.0, 1.0]);
//! builder.add_cell(CellType::Tetra, &[0, 1, 2, 3]);
//!
//! let grid = builder.build().unwrap();
//! assert_eq!(grid.num_cells(), 1);
//! assert_eq!(grid.cell_type(0), CellType::Tetra);
//! ```

pub mod attributes;
pub mod cell_type;
pub mod cells;
pub mod error;
pub mod grid;

pub use attributes::{AttributeArray, AttributeData, AttributeTable};
pub use cell_type::CellType;
pub use cells::CellArray;
pub use error::{GridError, GridResult};
pub use grid::{GridBuilder, UnstructuredGrid};

/// Position type used for all point coordinates.
pub use glam::DVec3 as Vec3;

/// Identifier of a point: its index in the grid's point set.
pub type PointId = usize;

/// Identifier of a cell: its index in the grid's cell array.
pub type CellId = usize;
