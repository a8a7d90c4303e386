//! Progress reporting and cooperative abort.
//!
//! The engine reports at a fixed cadence (see
//! [`GlobalConfig::progress_interval`](config::constants::GlobalConfig::progress_interval))
//! and polls the [`AbortFlag`] at the same ticks. Abort is advisory: the
//! output assembled so far is finalized and returned with
//! [`SkinOutput::aborted`](crate::SkinOutput::aborted) set.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use skin_filter::{AbortFlag, Progress, ProgressObserver};
//!
//! let flag = AbortFlag::new();
//! let observer: Arc<dyn ProgressObserver> = Arc::new(|progress: &Progress| {
//!     assert!(progress.fraction() <= 1.0);
//! });
//! observer.on_progress(&Progress::new(5, 10));
//! assert!(!flag.is_aborted());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use unstructured_grid::CellId;

/// Progress information passed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Cell about to be processed.
    pub cell: CellId,
    /// Total number of cells.
    pub num_cells: usize,
}

impl Progress {
    /// Creates a progress report.
    pub fn new(cell: CellId, num_cells: usize) -> Self {
        Self { cell, num_cells }
    }

    /// Progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn fraction(&self) -> f64 {
        if self.num_cells == 0 {
            0.0
        } else {
            self.cell as f64 / self.num_cells as f64
        }
    }
}

/// Receives progress ticks during an extraction.
pub trait ProgressObserver: Send + Sync {
    /// Called at every progress tick.
    fn on_progress(&self, progress: &Progress);
}

impl<F> ProgressObserver for F
where
    F: Fn(&Progress) + Send + Sync,
{
    fn on_progress(&self, progress: &Progress) {
        self(progress)
    }
}

/// Shared cancellation request.
///
/// Clones share the same flag, so a host keeps one and hands another to the
/// filter.
#[derive(Debug, Clone, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    /// Creates a cleared flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the running extraction stop at its next tick.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether an abort was requested.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clears the request.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn fraction_handles_empty_meshes() {
        assert_eq!(Progress::new(0, 0).fraction(), 0.0);
        assert_eq!(Progress::new(5, 20).fraction(), 0.25);
    }

    #[test]
    fn clones_share_the_flag() {
        let flag = AbortFlag::new();
        let handle = flag.clone();
        handle.abort();
        assert!(flag.is_aborted());
        flag.reset();
        assert!(!handle.is_aborted());
    }

    #[test]
    fn closures_are_observers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let observer = move |progress: &Progress| sink.lock().unwrap().push(progress.cell);
        observer.on_progress(&Progress::new(3, 9));
        observer.on_progress(&Progress::new(6, 9));
        assert_eq!(*seen.lock().unwrap(), vec![3, 6]);
    }
}
