//! # Skin Filter
//!
//! Boundary surface extraction for mixed-topology volumetric meshes.
//!
//! Given an [`UnstructuredGrid`](unstructured_grid::UnstructuredGrid), the
//! filter produces the faces bounding its visible 3D cells, passes vertices,
//! lines and polygons through, and linearizes quadratic cells.
//!
//! ## Modules
//!
//! - [`options`] - immutable per-execution configuration
//! - [`visibility`] - cell id / point id / bounding box clipping
//! - [`faces`] - face tables of the 3D cell types
//! - [`neighbors`] - point → cell index and boundary face test
//! - [`dispatch`] - cell type → extraction strategy
//! - [`tessellate`] - fixed subdivision of quadratic cells
//! - [`output`] - typed buckets, attribute propagation
//! - [`progress`] - progress observers and cooperative abort
//! - [`filter`] - the engine tying it together
//!
//! ## Example
//!
//! ```rust
//! use skin_filter::{extract_skin, FilterConfig};
//! use unstructured_grid::{CellType, GridBuilder};
//!
//! let mut builder = GridBuilder::new();
//! for z in 0..2 {
//!     for (x, y) in [(0, 0), (1, 0), (1, 1), (0, 1)] {
//!         builder.add_point([x as f64, y as f64, z as f64]);
//!     }
//! }
//! builder.add_cell(CellType::Hexahedron, &[0, 1, 2, 3, 4, 5, 6, 7]);
//! let grid = builder.build().unwrap();
//!
//! let skin = extract_skin(&grid, &FilterConfig::default());
//! assert_eq!(skin.polys().len(), 6);
//! assert_eq!(skin.origin_cell_ids(), &[0; 6]);
//! ```

pub mod dispatch;
pub mod faces;
pub mod filter;
pub mod neighbors;
pub mod options;
pub mod output;
pub mod progress;
pub mod tessellate;
pub mod visibility;

pub use filter::{extract_skin, SkinFilter};
pub use options::{Extent, FilterConfig, IdRange};
pub use output::{BucketKind, ExtractionStats, SkinOutput};
pub use progress::{AbortFlag, Progress, ProgressObserver};
