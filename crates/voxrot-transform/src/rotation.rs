//! Rotation specification and canonical matrix construction.

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::RotateError;

/// How the user expressed the rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "representation", rename_all = "snake_case")]
pub enum RotationRepresentation {
    /// A rotation axis (need not be normalized) and an angle in degrees.
    AxisAngle { axis: [f32; 3], angle_degrees: f32 },
    /// An explicit 4x4 homogeneous matrix, row-major.
    Matrix { rows: Vec<Vec<f64>> },
}

impl RotationRepresentation {
    /// Convenience constructor for the axis-angle form.
    #[must_use]
    pub fn axis_angle(axis: [f32; 3], angle_degrees: f32) -> Self {
        Self::AxisAngle {
            axis,
            angle_degrees,
        }
    }

    /// Convenience constructor for the explicit-matrix form.
    #[must_use]
    pub fn matrix(rows: Vec<Vec<f64>>) -> Self {
        Self::Matrix { rows }
    }
}

/// The canonical homogeneous rotation built from a
/// [`RotationRepresentation`], with its precomputed inverses.
///
/// Built once per operation and immutable thereafter. `inverse` is the full
/// 4x4 affine inverse used by the voxel resampler (translation honored);
/// `inverse3` is the transposed 3x3 block used by the pure-rotation fast
/// path of the legacy index mapper.
#[derive(Debug, Clone, Copy)]
pub struct RotationMatrix {
    forward: Mat4,
    inverse: Mat4,
    inverse3: Mat3,
}

impl RotationMatrix {
    /// Builds the canonical matrix from a user-supplied representation.
    ///
    /// The axis-angle path normalizes the axis and applies Rodrigues'
    /// closed-form rotation; a zero-length axis is rejected. The explicit
    /// path accepts any 4x4 values without an orthonormality check: a
    /// non-orthonormal matrix produces a skewed (non-rigid) resampling,
    /// which is accepted behavior.
    pub fn build(representation: &RotationRepresentation) -> Result<Self, RotateError> {
        let forward = match representation {
            RotationRepresentation::AxisAngle {
                axis,
                angle_degrees,
            } => {
                let axis_vec = Vec3::from_array(*axis);
                if axis_vec.length_squared() == 0.0 {
                    return Err(RotateError::DegenerateRotationAxis { axis: *axis });
                }
                let rot3 = Mat3::from_axis_angle(axis_vec.normalize(), angle_degrees.to_radians());
                Mat4::from_mat3(rot3)
            }
            RotationRepresentation::Matrix { rows } => {
                if rows.len() != 4 || rows.iter().any(|r| r.len() != 4) {
                    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
                    return Err(RotateError::MalformedRotationMatrix {
                        rows: rows.len(),
                        cols,
                    });
                }
                let mut flat = [0.0_f32; 16];
                for (r, row) in rows.iter().enumerate() {
                    for (c, value) in row.iter().enumerate() {
                        flat[r * 4 + c] = *value as f32;
                    }
                }
                // The flat array is row-major; glam constructs column-major.
                Mat4::from_cols_array(&flat).transpose()
            }
        };

        Ok(Self {
            forward,
            inverse: forward.inverse(),
            inverse3: Mat3::from_mat4(forward).transpose(),
        })
    }

    /// Returns the forward homogeneous transform.
    #[must_use]
    pub fn forward(&self) -> Mat4 {
        self.forward
    }

    /// Returns the full 4x4 inverse transform.
    #[must_use]
    pub fn inverse(&self) -> Mat4 {
        self.inverse
    }

    /// Returns the transposed 3x3 rotation block.
    #[must_use]
    pub fn inverse3(&self) -> Mat3 {
        self.inverse3
    }
}
