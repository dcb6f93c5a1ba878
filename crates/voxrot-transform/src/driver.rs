//! Orchestration of a full sample-frame rotation.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Instant;

use voxrot_core::{AttributeContainer, DataArray, ImageGrid, ProgressCtx};

use crate::error::RotateError;
use crate::plan::{plan, RotateArgs};
use crate::resample::resample_array;
use crate::rotation::{RotationMatrix, RotationRepresentation};

/// Execution knobs for [`RotateSampleFrame`].
#[derive(Debug, Clone, Default)]
pub struct RotateOptions {
    /// Worker pool size; defaults to the available hardware threads.
    pub num_threads: Option<usize>,
    /// Run tasks strictly sequentially on the caller thread. Results are
    /// identical to the parallel path.
    pub sequential: bool,
}

/// Summary of a completed (or cancelled) rotation.
#[derive(Debug)]
pub struct RotateOutcome {
    /// Number of arrays dispatched for resampling.
    pub arrays_resampled: usize,
    /// True when cancellation was observed; arrays may be partially filled.
    pub cancelled: bool,
    /// The plan that was executed.
    pub args: RotateArgs,
}

/// The sample-reference-frame rotation operation.
///
/// Validates configuration, plans the target grid, re-points the live grid
/// descriptor, and resamples every array in the cell-data container across a
/// bounded worker pool (one task per array).
#[derive(Debug, Clone)]
pub struct RotateSampleFrame {
    representation: RotationRepresentation,
    options: RotateOptions,
}

impl RotateSampleFrame {
    /// Creates the operation with default options.
    #[must_use]
    pub fn new(representation: RotationRepresentation) -> Self {
        Self {
            representation,
            options: RotateOptions::default(),
        }
    }

    /// Overrides the execution options.
    #[must_use]
    pub fn with_options(mut self, options: RotateOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the rotation against a grid and its cell data.
    ///
    /// All configuration errors surface before anything is mutated. Once
    /// planning succeeds the live grid descriptor is re-pointed to the new
    /// shape *before* resampling starts, so observers polling mid-operation
    /// see the target grid. Each source array is truncated as soon as its
    /// task completes, capping peak memory at one old plus one new array
    /// per in-flight task.
    ///
    /// Cancellation is not an error: the outcome reports `cancelled` and
    /// partially filled arrays are kept. The first task error encountered is
    /// returned; no retry is attempted since resampling is deterministic.
    pub fn execute(
        &self,
        grid: &mut ImageGrid,
        cell_data: &mut AttributeContainer,
        ctx: &ProgressCtx,
    ) -> Result<RotateOutcome, RotateError> {
        let started = Instant::now();

        // Configuration checks, in order: rotation first, then geometry.
        let rotation = RotationMatrix::build(&self.representation)?;
        let expected = grid.num_cells();
        for array in cell_data.iter() {
            if array.tuple_count() as u64 != expected {
                return Err(RotateError::UnsupportedGeometry {
                    array: array.name().to_string(),
                    expected,
                    actual: array.tuple_count(),
                });
            }
        }

        let args = plan(grid, &rotation);
        grid.copy_descriptor_from(args.dst());

        let new_cells = args.dst().num_cells() as usize;
        let mut sources = cell_data.take_all();
        let mut targets: Vec<Box<dyn DataArray>> = sources
            .iter()
            .map(|source| {
                let mut target = source.clone_empty();
                // Two-step resize: clone_empty starts at zero tuples, and a
                // same-size resize is a no-op per the DataArray contract, so
                // going through 1 tuple guarantees a real allocation even
                // when old and new voxel counts coincide.
                target.resize_tuples(1);
                target.resize_tuples(new_cells);
                target
            })
            .collect();

        let arrays_resampled = sources.len();
        log::info!(
            "rotating {} arrays into {:?} cells",
            arrays_resampled,
            args.dst().dims()
        );

        let first_error: Mutex<Option<RotateError>> = Mutex::new(None);
        let record_error = |err: RotateError| {
            if let Ok(mut slot) = first_error.lock() {
                if slot.is_none() {
                    *slot = Some(err);
                    // Remaining tasks wind down at their next poll.
                    ctx.cancel_token().cancel();
                }
            }
        };

        let tasks = sources.iter_mut().zip(targets.iter_mut());
        if self.options.sequential {
            for (source, target) in tasks {
                if let Err(err) =
                    resample_array(source.as_mut(), target.as_mut(), &args, &rotation, ctx)
                {
                    record_error(err);
                    break;
                }
            }
        } else {
            let threads = self.options.num_threads.unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(NonZeroUsize::get)
                    .unwrap_or(1)
            });
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| RotateError::WorkerPool(e.to_string()))?;

            pool.scope(|scope| {
                for (source, target) in tasks {
                    let args = &args;
                    let rotation = &rotation;
                    let record_error = &record_error;
                    scope.spawn(move |_| {
                        if let Err(err) =
                            resample_array(source.as_mut(), target.as_mut(), args, rotation, ctx)
                        {
                            record_error(err);
                        }
                    });
                }
            });
        }

        if let Some(err) = first_error.into_inner().ok().flatten() {
            return Err(err);
        }

        for target in targets {
            cell_data.insert_or_replace(target);
        }

        let cancelled = ctx.is_cancelled();
        log::info!(
            "rotation {} in {:.2?}",
            if cancelled { "cancelled" } else { "complete" },
            started.elapsed()
        );

        Ok(RotateOutcome {
            arrays_resampled,
            cancelled,
            args,
        })
    }
}
