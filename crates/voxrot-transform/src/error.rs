//! Error types for the rotation engine.

use thiserror::Error;
use voxrot_core::CoreError;

/// Errors raised while configuring or executing a sample-frame rotation.
///
/// Configuration errors surface before the operation mutates anything;
/// `TupleCopyFailed` is the one data error that can abort a running task.
#[derive(Error, Debug)]
pub enum RotateError {
    /// The axis-angle rotation axis has zero length, so its direction is
    /// undefined.
    #[error("rotation axis {axis:?} has zero length")]
    DegenerateRotationAxis { axis: [f32; 3] },

    /// The explicit rotation matrix is not exactly 4 rows by 4 columns.
    #[error("rotation matrix must be exactly 4x4, got {rows}x{cols}")]
    MalformedRotationMatrix { rows: usize, cols: usize },

    /// The cell data does not describe the selected grid.
    #[error("array '{array}' has {actual} tuples but the grid has {expected} cells")]
    UnsupportedGeometry {
        array: String,
        expected: u64,
        actual: usize,
    },

    /// A tuple copy between schema-identical arrays failed mid-resample.
    #[error("tuple copy failed for array '{array}'")]
    TupleCopyFailed { array: String },

    /// The worker pool could not be built.
    #[error("worker pool error: {0}")]
    WorkerPool(String),

    /// A storage-layer error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
