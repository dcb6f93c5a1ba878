//! A grid plus its attached cell data.

use voxrot_core::{AttributeContainer, CoreError, DataArray, ImageGrid, ProgressCtx};
use voxrot_transform::{
    RotateError, RotateOptions, RotateOutcome, RotateSampleFrame, RotationRepresentation,
};

/// A regular voxel grid and the named per-voxel arrays attached to it.
pub struct Dataset {
    grid: ImageGrid,
    cell_data: AttributeContainer,
}

impl Dataset {
    /// Creates a dataset with no cell arrays.
    #[must_use]
    pub fn new(grid: ImageGrid) -> Self {
        Self {
            grid,
            cell_data: AttributeContainer::new(),
        }
    }

    /// Returns the live grid descriptor.
    #[must_use]
    pub fn grid(&self) -> &ImageGrid {
        &self.grid
    }

    /// Returns the cell-data container.
    #[must_use]
    pub fn cell_data(&self) -> &AttributeContainer {
        &self.cell_data
    }

    /// Attaches a cell array, replacing any same-named array.
    ///
    /// The array's tuple count must equal the grid's cell count.
    pub fn add_cell_array(&mut self, array: Box<dyn DataArray>) -> Result<(), CoreError> {
        if array.tuple_count() as u64 != self.grid.num_cells() {
            return Err(CoreError::SizeMismatch {
                expected: self.grid.num_cells() as usize,
                actual: array.tuple_count(),
            });
        }
        self.cell_data.insert_or_replace(array);
        Ok(())
    }

    /// Rotates the sampling frame, resampling every cell array.
    ///
    /// Uses a context that logs status messages and owns a fresh cancellation
    /// token; use [`rotate_sample_frame_with_ctx`](Self::rotate_sample_frame_with_ctx)
    /// to supply your own sink or token.
    pub fn rotate_sample_frame(
        &mut self,
        representation: RotationRepresentation,
        options: RotateOptions,
    ) -> Result<RotateOutcome, RotateError> {
        let ctx = ProgressCtx::with_log_sink();
        self.rotate_sample_frame_with_ctx(representation, options, &ctx)
    }

    /// Rotates the sampling frame with an explicit progress context.
    pub fn rotate_sample_frame_with_ctx(
        &mut self,
        representation: RotationRepresentation,
        options: RotateOptions,
        ctx: &ProgressCtx,
    ) -> Result<RotateOutcome, RotateError> {
        RotateSampleFrame::new(representation)
            .with_options(options)
            .execute(&mut self.grid, &mut self.cell_data, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{U64Vec3, Vec3};
    use voxrot_core::TypedArray;

    #[test]
    fn test_add_cell_array_validates_shape() {
        let grid = ImageGrid::new(U64Vec3::splat(2), Vec3::ONE, Vec3::ZERO);
        let mut dataset = Dataset::new(grid);
        assert!(dataset
            .add_cell_array(Box::new(TypedArray::<f32>::new("ok", 1, 8)))
            .is_ok());
        assert!(dataset
            .add_cell_array(Box::new(TypedArray::<f32>::new("bad", 1, 9)))
            .is_err());
    }
}
