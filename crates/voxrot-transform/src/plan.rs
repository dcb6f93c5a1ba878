//! Rotation argument planning.
//!
//! Computes the bounding grid that contains the rotated volume: transformed
//! bounding box, per-axis spacing via the nearest-axis heuristic, and the new
//! grid dimensions and origin.

use glam::{Mat3, U64Vec3, Vec3};
use voxrot_core::{Axis, ImageGrid};

use crate::rotation::RotationMatrix;

/// The read-only plan for one rotation operation.
///
/// Holds a snapshot of the source grid and the descriptor of the target
/// grid. Created by [`plan`], shared by every resampler task, and discarded
/// when the operation ends.
#[derive(Debug, Clone)]
pub struct RotateArgs {
    src: ImageGrid,
    dst: ImageGrid,
}

impl RotateArgs {
    /// Returns the source (pre-rotation) grid snapshot.
    #[must_use]
    pub fn src(&self) -> &ImageGrid {
        &self.src
    }

    /// Returns the target (post-rotation) grid descriptor.
    ///
    /// Its origin is the componentwise minimum of the rotated bounding box.
    #[must_use]
    pub fn dst(&self) -> &ImageGrid {
        &self.dst
    }
}

/// Cosine of the angle between two vectors; 1.0 when either is zero-length.
fn cos_between(a: Vec3, b: Vec3) -> f32 {
    let norm_a = a.length();
    let norm_b = b.length();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Picks the new spacing for one rotated canonical axis.
///
/// The rotated axis inherits the spacing of whichever original axis it is
/// most closely aligned with (largest `|cos|`), ties broken by the first
/// maximum in X, Y, Z order. Exact for 90-degree-multiple rotations,
/// approximate otherwise.
fn determine_spacing(spacing: Vec3, rotated_axis: Vec3) -> f32 {
    let mut best = Axis::X;
    let mut best_cos = f32::MIN;
    for axis in Axis::ALL {
        let c = cos_between(axis.unit(), rotated_axis).abs();
        if c > best_cos {
            best_cos = c;
            best = axis;
        }
    }
    spacing[best.index()]
}

/// Plans a rotation: new bounding box, spacing, dimensions, and origin.
///
/// New dimensions use round-half-to-even (`nearbyint` semantics), which
/// decides voxel-count parity at exact .5 extents. Pure arithmetic; a
/// degenerate all-zero rotation block simply yields a zero-size grid.
#[must_use]
pub fn plan(old_grid: &ImageGrid, rotation: &RotationMatrix) -> RotateArgs {
    let forward = rotation.forward();

    let mut min = Vec3::MAX;
    let mut max = -Vec3::MAX;
    for corner in old_grid.corners() {
        let moved = forward.transform_point3(corner);
        min = min.min(moved);
        max = max.max(moved);
    }

    let rot3 = Mat3::from_mat4(forward);
    let spacing = old_grid.spacing();
    let new_spacing = Vec3::new(
        determine_spacing(spacing, rot3 * Vec3::X),
        determine_spacing(spacing, rot3 * Vec3::Y),
        determine_spacing(spacing, rot3 * Vec3::Z),
    );

    let extent = max - min;
    let dims = U64Vec3::new(
        (extent.x / new_spacing.x).round_ties_even() as u64,
        (extent.y / new_spacing.y).round_ties_even() as u64,
        (extent.z / new_spacing.z).round_ties_even() as u64,
    );

    RotateArgs {
        src: old_grid.clone(),
        dst: ImageGrid::new(dims, new_spacing, min),
    }
}
