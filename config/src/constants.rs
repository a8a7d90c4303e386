//! # Configuration Constants
//!
//! Centralized constants for the skin extraction pipeline. Cadences, table
//! limits and reserved attribute names are defined here.
//!
//! ## Categories
//!
//! - **Progress**: Reporting and abort polling cadence
//! - **Topology**: Upper bounds derived from the supported cell types
//! - **Attributes**: Reserved attribute array names
//! - **Execution**: Allocation and parallelism tuning

use std::fmt;

// =============================================================================
// PROGRESS CONSTANTS
// =============================================================================

/// Number of progress reports emitted over one pass of the cell array.
///
/// The extraction loop reports progress (and polls for abort) every
/// `num_cells / PROGRESS_DIVISIONS + 1` cells, i.e. roughly every 5%.
///
/// # Example
///
/// ```rust
/// use config::constants::PROGRESS_DIVISIONS;
///
/// let interval = 0 / PROGRESS_DIVISIONS + 1;
/// assert_eq!(interval, 1);
/// ```
pub const PROGRESS_DIVISIONS: usize = 20;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Maximum number of topological faces of any supported 3D cell type.
///
/// Hexahedra and voxels have six faces; tetrahedra four; wedges and
/// pyramids five. Bounds the output cell count per visible input cell.
pub const MAX_FACES_PER_CELL: usize = 6;

/// Maximum number of points on a single face of a supported 3D cell.
///
/// A quadratic hexahedron face is an eight-point quadratic quad.
pub const MAX_FACE_POINTS: usize = 8;

// =============================================================================
// ATTRIBUTE CONSTANTS
// =============================================================================

/// Name of the reserved per-cell ghost level array.
///
/// The array is honoured only when it stores unsigned 8-bit values with a
/// single component.
///
/// # Example
///
/// ```rust
/// use config::constants::GHOST_LEVELS_ARRAY;
///
/// assert_eq!(GHOST_LEVELS_ARRAY, "vtkGhostLevels");
/// ```
pub const GHOST_LEVELS_ARRAY: &str = "vtkGhostLevels";

/// Default ghost update level. Cells with a higher ghost level are skipped.
pub const DEFAULT_GHOST_UPDATE_LEVEL: u8 = 0;

// =============================================================================
// EXECUTION CONSTANTS
// =============================================================================

/// Cell count above which visibility tagging runs on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

/// Initial output bucket capacity is `num_cells / BUCKET_CAPACITY_DIVISOR + 1`.
///
/// Buckets are compacted after extraction, so this only tunes reallocation.
pub const BUCKET_CAPACITY_DIVISOR: usize = 4;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of execution tuning shared between crates.
///
/// Fields are private so every value goes through [`GlobalConfig::new`] or
/// [`Default`], which keeps the progress interval free of a zero divisor.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.progress_divisions() > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    progress_divisions: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// cadence.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(10).expect("valid config");
    /// assert_eq!(cfg.progress_divisions(), 10);
    /// ```
    pub fn new(progress_divisions: usize) -> Result<Self, ConfigError> {
        if progress_divisions == 0 {
            return Err(ConfigError::InvalidProgressDivisions(progress_divisions));
        }
        Ok(Self { progress_divisions })
    }

    /// Number of progress reports over one pass of the cell array.
    pub fn progress_divisions(&self) -> usize {
        self.progress_divisions
    }

    /// Number of cells between two progress reports for a mesh of
    /// `num_cells` cells. Always at least one.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::default();
    /// assert_eq!(cfg.progress_interval(100), 6);
    /// ```
    pub fn progress_interval(&self, num_cells: usize) -> usize {
        num_cells / self.progress_divisions + 1
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            progress_divisions: PROGRESS_DIVISIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the progress cadence would divide by zero.
    InvalidProgressDivisions(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProgressDivisions(value) => {
                write!(f, "progress_divisions must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
