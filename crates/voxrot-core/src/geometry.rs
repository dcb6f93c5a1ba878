//! Regular 3D grid geometry.
//!
//! An [`ImageGrid`] describes a regular axis-aligned voxel grid by its cell
//! dimensions, per-axis spacing, and world-space origin. Cell values live at
//! cell centers; the grid's bounding box spans `origin` to
//! `origin + dims * spacing`.

use glam::{U64Vec3, Vec3};
use thiserror::Error;

/// One of the three canonical grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index of this axis (0, 1, or 2).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Why a world coordinate has no containing cell.
///
/// This is a normal lookup outcome during resampling (points near the rotated
/// volume's corners fall outside the source grid), not a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellIndexError {
    /// The coordinate lies below the grid's minimum along the given axis.
    #[error("coordinate below grid minimum along {0:?}")]
    BelowMin(Axis),

    /// The coordinate lies at or beyond the grid's maximum along the given axis.
    #[error("coordinate beyond grid maximum along {0:?}")]
    AboveMax(Axis),
}

/// Axis-aligned world-space extent of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

/// A regular 3D grid of voxels.
///
/// Invariant: all spacing components are positive. Dimensions may be zero
/// (an empty grid has no cells).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGrid {
    dims: U64Vec3,
    spacing: Vec3,
    origin: Vec3,
}

impl ImageGrid {
    /// Creates a new grid descriptor.
    ///
    /// # Panics
    ///
    /// Panics if any spacing component is not positive.
    #[must_use]
    pub fn new(dims: U64Vec3, spacing: Vec3, origin: Vec3) -> Self {
        assert!(
            spacing.cmpgt(Vec3::ZERO).all(),
            "grid spacing must be positive, got {spacing:?}"
        );
        Self {
            dims,
            spacing,
            origin,
        }
    }

    /// Returns the cell dimensions (nx, ny, nz).
    #[must_use]
    pub fn dims(&self) -> U64Vec3 {
        self.dims
    }

    /// Returns the per-axis spacing.
    #[must_use]
    pub fn spacing(&self) -> Vec3 {
        self.spacing
    }

    /// Returns the world-space origin (minimum corner).
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Sets the cell dimensions.
    pub fn set_dims(&mut self, dims: U64Vec3) {
        self.dims = dims;
    }

    /// Sets the per-axis spacing.
    pub fn set_spacing(&mut self, spacing: Vec3) {
        assert!(
            spacing.cmpgt(Vec3::ZERO).all(),
            "grid spacing must be positive, got {spacing:?}"
        );
        self.spacing = spacing;
    }

    /// Sets the world-space origin.
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Re-points this descriptor to another grid's parameters in place.
    pub fn copy_descriptor_from(&mut self, other: &ImageGrid) {
        self.dims = other.dims;
        self.spacing = other.spacing;
        self.origin = other.origin;
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn num_cells(&self) -> u64 {
        self.dims.x * self.dims.y * self.dims.z
    }

    /// Returns the axis-aligned bounding box of the full cell extent.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min: self.origin,
            max: self.origin + self.dims.as_vec3() * self.spacing,
        }
    }

    /// Returns the 8 corners of the bounding box.
    ///
    /// Order: the bottom face counterclockwise from the minimum corner, then
    /// the top face in the same winding.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let BoundingBox { min, max } = self.bounding_box();
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ]
    }

    /// Maps a world coordinate to the (i, j, k) index of its containing cell.
    ///
    /// A point exactly on the maximum face is treated as outside; every other
    /// in-bounds point maps to exactly one cell.
    pub fn compute_cell_index(&self, point: Vec3) -> Result<[u64; 3], CellIndexError> {
        let mut index = [0_u64; 3];
        let bbox = self.bounding_box();
        for axis in Axis::ALL {
            let a = axis.index();
            let coord = point[a];
            if coord < bbox.min[a] {
                return Err(CellIndexError::BelowMin(axis));
            }
            if coord > bbox.max[a] {
                return Err(CellIndexError::AboveMax(axis));
            }
            let cell = ((coord - self.origin[a]) / self.spacing[a]) as u64;
            if cell >= self.dims[a] {
                return Err(CellIndexError::AboveMax(axis));
            }
            index[a] = cell;
        }
        Ok(index)
    }

    /// Flattens an (i, j, k) cell index to a linear index, x fastest.
    #[must_use]
    pub fn flatten(&self, index: [u64; 3]) -> u64 {
        (self.dims.x * self.dims.y * index[2]) + (self.dims.x * index[1]) + index[0]
    }

    /// Returns the world position of the center of cell (i, j, k).
    #[must_use]
    pub fn position_of_cell_center(&self, i: u64, j: u64, k: u64) -> Vec3 {
        self.origin + (U64Vec3::new(i, j, k).as_vec3() + 0.5) * self.spacing
    }
}
