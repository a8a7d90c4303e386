//! # Skin Filter
//!
//! The extraction engine: one serial pass over the cells, in increasing id
//! order, after the visibility tags and the point → cell index are built.
//!
//! ## Pipeline
//!
//! ```text
//! normalized FilterConfig
//!       ↓
//! Visibility::classify      (rayon above the threshold)
//! PointCellIndex::build
//!       ↓
//! for each cell: progress / abort tick → ghost → visibility → dispatch
//!       ↓
//! OutputAssembler::finish   (compact, gather cell data)
//! ```

use std::sync::Arc;

use config::constants::{GlobalConfig, MAX_FACE_POINTS};
use tracing::{debug, info, info_span, trace, warn};
use unstructured_grid::{CellId, CellType, PointId, UnstructuredGrid};

use crate::dispatch::{strategy_for, Strategy};
use crate::faces::{FaceTable, PIXEL_ORDER};
use crate::neighbors::{FaceClassifier, PointCellIndex};
use crate::options::FilterConfig;
use crate::output::{BucketKind, ExtractionStats, OutputAssembler, SkinOutput};
use crate::progress::{AbortFlag, Progress, ProgressObserver};
use crate::tessellate::{quad_centre, quadratic_edge, quadratic_quad, quadratic_triangle};
use crate::visibility::Visibility;


/// Boundary surface extraction over an [`UnstructuredGrid`].
///
/// A filter holds only its configuration and the hooks a host attaches to
/// it; every derived structure lives for one [`SkinFilter::execute`] call.
///
/// # Example
///
/// ```rust
/// use skin_filter::{FilterConfig, SkinFilter};
/// use unstructured_grid::{CellType, GridBuilder};
///
/// let mut builder = GridBuilder::new();
/// for p in [[0., 0., 0.], [1., 0., 0.], [0., 1., 0.], [0., 0., 1.]] {
///     builder.add_point(p);
/// }
/// builder.add_cell(CellType::Tetra, &[0, 1, 2, 3]);
/// let grid = builder.build().unwrap();
///
/// let output = SkinFilter::new(FilterConfig::default()).execute(&grid);
/// assert_eq!(output.polys().len(), 4);
/// ```
#[derive(Clone)]
pub struct SkinFilter {
    config: FilterConfig,
    global: GlobalConfig,
    observer: Option<Arc<dyn ProgressObserver>>,
    abort: AbortFlag,
}

impl std::fmt::Debug for SkinFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkinFilter")
            .field("config", &self.config)
            .field("global", &self.global)
            .field("observer", &self.observer.is_some())
            .field("abort", &self.abort)
            .finish()
    }
}

impl SkinFilter {
    /// Creates a filter; malformed clipping settings are disabled here.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config: config.normalized(),
            global: GlobalConfig::default(),
            observer: None,
            abort: AbortFlag::new(),
        }
    }

    /// Replaces the execution tuning (progress cadence).
    #[must_use]
    pub fn with_global(mut self, global: GlobalConfig) -> Self {
        self.global = global;
        self
    }

    /// Attaches a progress observer.
    #[must_use]
    pub fn with_progress(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Shares an existing abort flag instead of the filter's own.
    #[must_use]
    pub fn with_abort_flag(mut self, flag: AbortFlag) -> Self {
        self.abort = flag;
        self
    }

    /// Handle that aborts this filter's executions.
    pub fn abort_flag(&self) -> AbortFlag {
        self.abort.clone()
    }

    /// The normalized configuration in effect.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Extracts the skin of `grid`.
    ///
    /// Never fails: an empty grid yields an empty output, and an abort
    /// request yields the primitives emitted so far with
    /// [`SkinOutput::aborted`] set.
    pub fn execute<'g>(&self, grid: &'g UnstructuredGrid) -> SkinOutput<'g> {
        let num_cells = grid.num_cells();
        let span = info_span!("skin_extract", cells = num_cells, points = grid.num_points());
        let _enter = span.enter();

        if grid.is_empty() {
            debug!("No cells to extract");
            return SkinOutput::empty();
        }

        // 1. Per-execution derived state
        let ghost_levels = grid.ghost_levels();
        if ghost_levels.is_none() {
            debug!("No usable ghost level array, every cell is owned");
        }
        let visibility = Visibility::classify(grid, &self.config);
        debug!(
            "{} of {} cells pass clipping",
            visibility.count_visible(num_cells),
            num_cells
        );
        let index = PointCellIndex::build(grid);
        debug!("Indexed cells of {} points", index.num_points());
        let mut extractor = CellExtractor {
            grid,
            faces: FaceClassifier::new(&index, &visibility, self.config.show_interior_faces),
            assembler: OutputAssembler::new(grid.num_points(), num_cells),
            stats: ExtractionStats::default(),
        };

        // 2. Single pass in cell id order
        let interval = self.global.progress_interval(num_cells);
        let mut aborted = false;
        for (cell, cell_type, points) in grid.iter_cells() {
            if cell % interval == 0 {
                let progress = Progress::new(cell, num_cells);
                trace!("Progress {:.0}%", progress.fraction() * 100.0);
                if let Some(observer) = &self.observer {
                    observer.on_progress(&progress);
                }
                if self.abort.is_aborted() {
                    warn!(
                        "Extraction aborted at cell {} of {}, keeping {} primitives",
                        cell,
                        num_cells,
                        extractor.assembler.num_cells()
                    );
                    aborted = true;
                    break;
                }
            }

            extractor.stats.cells_visited += 1;
            if ghost_levels.is_some_and(|levels| levels[cell] > self.config.ghost_update_level) {
                extractor.stats.ghost_cells += 1;
                continue;
            }
            if !visibility.is_visible(cell) {
                extractor.stats.cells_clipped += 1;
                continue;
            }
            extractor.stats.cells_extracted += 1;
            if cell_type.is_quadratic() {
                extractor.stats.cells_tessellated += 1;
            }
            extractor.extract(cell, cell_type, points);
        }

        // 3. Compact and attach attributes
        let output = extractor.finish(aborted);
        if output.stats().unknown_cells > 0 {
            debug!("Skipped {} cells of unknown type", output.stats().unknown_cells);
        }
        info!(
            "Extracted {} points, {} cells",
            output.num_points(),
            output.num_cells()
        );
        output
    }
}

/// Convenience wrapper: extracts the skin of `grid` under `config`.
pub fn extract_skin<'g>(grid: &'g UnstructuredGrid, config: &FilterConfig) -> SkinOutput<'g> {
    SkinFilter::new(config.clone()).execute(grid)
}

// =============================================================================
// PER-CELL EXTRACTION
// =============================================================================

struct CellExtractor<'g, 'i> {
    grid: &'g UnstructuredGrid,
    faces: FaceClassifier<'i>,
    assembler: OutputAssembler,
    stats: ExtractionStats,
}

impl<'g> CellExtractor<'g, '_> {
    fn extract(&mut self, cell: CellId, cell_type: CellType, points: &[PointId]) {
        match strategy_for(cell_type) {
            Strategy::Skip => self.stats.empty_cells += 1,
            Strategy::Unknown => self.stats.unknown_cells += 1,
            Strategy::Direct(kind) => self.assembler.emit(kind, cell, points),
            Strategy::Pixel => self.assembler.emit_iter(
                BucketKind::Polys,
                cell,
                PIXEL_ORDER.iter().map(|&i| points[i]),
            ),
            Strategy::LinearSolid(table) => self.extract_linear_solid(cell, points, table),
            Strategy::QuadraticEdge => {
                for line in quadratic_edge(points) {
                    self.assembler.emit(BucketKind::Lines, cell, &line);
                }
            }
            Strategy::QuadraticTriangle => self.emit_quadratic_triangle(cell, points),
            Strategy::QuadraticQuad => self.emit_quadratic_quad(cell, points),
            Strategy::QuadraticSolid(table) => self.extract_quadratic_solid(cell, points, table),
        }
    }

    fn extract_linear_solid(&mut self, cell: CellId, points: &[PointId], table: FaceTable) {
        for face in table.iter() {
            let mut buffer = [0; MAX_FACE_POINTS];
            if self.is_boundary(cell, points, face, &mut buffer) {
                self.assembler.emit_iter(
                    BucketKind::Polys,
                    cell,
                    table.emission_order(face).map(|i| points[i]),
                );
            }
        }
    }

    fn extract_quadratic_solid(&mut self, cell: CellId, points: &[PointId], table: FaceTable) {
        for face in table.iter() {
            let mut buffer = [0; MAX_FACE_POINTS];
            if !self.is_boundary(cell, points, face, &mut buffer) {
                continue;
            }
            let face_points = &buffer[..face.len()];
            match face.len() {
                6 => self.emit_quadratic_triangle(cell, face_points),
                8 => self.emit_quadratic_quad(cell, face_points),
                _ => {}
            }
        }
    }

    /// Resolves `face` to point ids in `buffer` and decides whether it is
    /// part of the skin.
    fn is_boundary(
        &mut self,
        cell: CellId,
        points: &[PointId],
        face: &[usize],
        buffer: &mut [PointId; MAX_FACE_POINTS],
    ) -> bool {
        for (slot, &local) in buffer.iter_mut().zip(face) {
            *slot = points[local];
        }
        let boundary = self.faces.is_boundary_face(cell, &buffer[..face.len()]);
        if boundary {
            self.stats.faces_emitted += 1;
        } else {
            self.stats.faces_suppressed += 1;
        }
        boundary
    }

    fn emit_quadratic_triangle(&mut self, cell: CellId, points: &[PointId]) {
        for triangle in quadratic_triangle(points) {
            self.assembler.emit(BucketKind::Polys, cell, &triangle);
        }
    }

    fn emit_quadratic_quad(&mut self, cell: CellId, points: &[PointId]) {
        let centre = self.assembler.add_point(quad_centre(self.grid, points));
        for triangle in quadratic_quad(points, centre) {
            self.assembler.emit(BucketKind::Polys, cell, &triangle);
        }
    }

    fn finish(mut self, aborted: bool) -> SkinOutput<'g> {
        self.stats.points_synthesized = self.assembler.num_new_points();
        self.assembler.finish(self.grid, self.stats, aborted)
    }
}
