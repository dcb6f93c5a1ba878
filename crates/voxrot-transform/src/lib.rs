//! Sample-reference-frame rotation and resampling.
//!
//! Given an [`ImageGrid`](voxrot_core::ImageGrid) carrying named per-voxel
//! arrays, this crate applies a rigid 3D rotation to the sampling frame:
//! it computes the bounding grid of the rotated volume, re-points the live
//! grid descriptor, and resamples every array into the new grid by
//! nearest-cell (zeroth-order) lookup.
//!
//! The pipeline is: [`RotationMatrix::build`] → [`plan`] →
//! [`RotateSampleFrame::execute`], which dispatches one
//! [`resample_array`] task per array across a bounded worker pool.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod driver;
pub mod error;
pub mod index_map;
pub mod plan;
pub mod resample;
pub mod rotation;

pub use driver::{RotateOptions, RotateOutcome, RotateSampleFrame};
pub use error::RotateError;
pub use index_map::build_index_map;
pub use plan::{plan, RotateArgs};
pub use resample::{resample_array, ResampleOutcome};
pub use rotation::{RotationMatrix, RotationRepresentation};
