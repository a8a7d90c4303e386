//! # Config Crate
//!
//! Centralized configuration constants for the skin extraction pipeline.
//! All magic numbers and tunable parameters are defined here so the mesh
//! model and the extraction engine agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MAX_FACES_PER_CELL, PROGRESS_DIVISIONS};
//!
//! // Progress is reported roughly every 5% of the cells.
//! let num_cells = 1000;
//! let interval = num_cells / PROGRESS_DIVISIONS + 1;
//! assert_eq!(interval, 51);
//!
//! // A single 3D cell never contributes more than six polygons.
//! assert_eq!(MAX_FACES_PER_CELL, 6);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Immutable**: Configuration is a value, never process-wide mutable state
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
