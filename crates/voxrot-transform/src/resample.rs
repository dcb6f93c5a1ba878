//! Nearest-cell voxel resampling of one data array.

use glam::Vec4;
use voxrot_core::{DataArray, ProgressCtx};

use crate::error::RotateError;
use crate::plan::RotateArgs;
use crate::rotation::RotationMatrix;

/// How a resampling task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleOutcome {
    /// Every target voxel was visited; the source array was truncated.
    Completed,
    /// Cancellation was observed; the target is partially populated and the
    /// source is left intact.
    Cancelled,
}

/// Resamples one array from the source grid into the target grid.
///
/// For every target voxel the world-space cell center is inverse-transformed
/// into the source frame; the containing source cell's whole tuple is copied,
/// or the target tuple is zeroed when the point falls outside the source grid
/// (which happens near the rotated volume's corners). Zeroth-order lookup
/// only - no interpolation, by design, since interpolating changes numerical
/// results.
///
/// Runs single-threaded; the driver parallelizes across arrays. Cancellation
/// is polled once per z-slice, and a tuple copy is atomic, so an aborted call
/// leaves the target well-defined with the unfinished region zeroed.
///
/// On completion the source array is truncated to zero tuples, capping peak
/// memory at one source plus one target per task.
pub fn resample_array(
    source: &mut dyn DataArray,
    target: &mut dyn DataArray,
    args: &RotateArgs,
    rotation: &RotationMatrix,
    ctx: &ProgressCtx,
) -> Result<ResampleOutcome, RotateError> {
    let name = source.name().to_string();
    let src_grid = args.src();
    let dst_grid = args.dst();
    let dims = dst_grid.dims();
    let spacing = dst_grid.spacing();
    let origin = dst_grid.origin();
    let inverse = rotation.inverse();

    ctx.status_throttled(&format!("{name}: transform starting"));

    for k in 0..dims.z {
        if ctx.is_cancelled() {
            return Ok(ResampleOutcome::Cancelled);
        }
        ctx.status_throttled(&format!("{name}: copying values for slice {k}/{}", dims.z));
        let ktot = dims.x * dims.y * k;
        for j in 0..dims.y {
            let jtot = dims.x * j;
            for i in 0..dims.x {
                let new_index = (ktot + jtot + i) as usize;
                let center = Vec4::new(
                    (i as f32 + 0.5) * spacing.x + origin.x,
                    (j as f32 + 0.5) * spacing.y + origin.y,
                    (k as f32 + 0.5) * spacing.z + origin.z,
                    1.0,
                );
                let old_point = (inverse * center).truncate();

                match src_grid.compute_cell_index(old_point) {
                    Ok(cell) => {
                        let old_index = src_grid.flatten(cell) as usize;
                        if !target.copy_tuple_from(new_index, &*source, old_index) {
                            return Err(RotateError::TupleCopyFailed { array: name });
                        }
                    }
                    Err(_) => target.zero_tuple(new_index),
                }
            }
        }
    }

    source.truncate();
    ctx.status_throttled(&format!("{name}: transform complete"));

    Ok(ResampleOutcome::Completed)
}
