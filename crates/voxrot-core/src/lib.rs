//! Core abstractions for voxrot-rs.
//!
//! This crate provides the storage and geometry layer used by the rotation
//! engine:
//! - [`ImageGrid`] describes a regular 3D voxel grid (dimensions, spacing, origin)
//! - [`DataArray`] is the type-erased per-voxel tuple array trait
//! - [`AttributeContainer`] holds the named arrays attached to a grid
//! - [`ProgressCtx`] carries status reporting and cooperative cancellation

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod array;
pub mod attribute;
pub mod error;
pub mod geometry;
pub mod progress;

pub use array::{DataArray, Scalar, ScalarType, TypedArray};
pub use attribute::AttributeContainer;
pub use error::{CoreError, Result};
pub use geometry::{Axis, BoundingBox, CellIndexError, ImageGrid};
pub use progress::{CancelToken, LogSink, ProgressCtx, StatusSink};

// Re-export commonly used math types
pub use glam::{Mat3, Mat4, U64Vec3, Vec3, Vec4};
