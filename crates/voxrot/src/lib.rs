//! voxrot: sample-reference-frame rotation and resampling for regular voxel
//! grids.
//!
//! A [`Dataset`] pairs an [`ImageGrid`] (dimensions, spacing, origin) with an
//! [`AttributeContainer`] of named per-voxel arrays. Applying a rigid 3D
//! rotation to the sampling frame computes the bounding grid of the rotated
//! volume and resamples every array into it by nearest-cell lookup.
//!
//! # Quick Start
//!
//! ```
//! use voxrot::*;
//!
//! fn main() -> Result<(), RotateError> {
//!     let grid = ImageGrid::new(U64Vec3::splat(4), Vec3::ONE, Vec3::ZERO);
//!     let mut dataset = Dataset::new(grid);
//!     dataset
//!         .add_cell_array(Box::new(TypedArray::<f32>::new("density", 1, 64)))
//!         .expect("array shape matches the grid");
//!
//!     let outcome = dataset.rotate_sample_frame(
//!         RotationRepresentation::axis_angle([0.0, 0.0, 1.0], 90.0),
//!         RotateOptions::default(),
//!     )?;
//!     assert_eq!(outcome.arrays_resampled, 1);
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! [`RotationMatrix::build`] canonicalizes an axis-angle pair or explicit
//! 4x4 matrix; [`plan`] derives the target grid (bounding box, nearest-axis
//! spacing heuristic, rounded dimensions); [`RotateSampleFrame::execute`]
//! re-points the live grid and dispatches one [`resample_array`] task per
//! array across a bounded worker pool, truncating each source array as its
//! task completes to cap peak memory.

mod dataset;

pub use dataset::Dataset;

// Re-export core types
pub use voxrot_core::{
    AttributeContainer, Axis, BoundingBox, CancelToken, CellIndexError, CoreError, DataArray,
    ImageGrid, LogSink, ProgressCtx, Scalar, ScalarType, StatusSink, TypedArray,
};

// Re-export the rotation engine
pub use voxrot_transform::{
    build_index_map, plan, resample_array, ResampleOutcome, RotateArgs, RotateError,
    RotateOptions, RotateOutcome, RotateSampleFrame, RotationMatrix, RotationRepresentation,
};

// Re-export commonly used math types
pub use glam::{Mat3, Mat4, U64Vec3, Vec3, Vec4};
