//! Legacy corner-based voxel index mapping.
//!
//! Predates the tuple-copying resampler and survives for mask/remap
//! workflows: instead of copying data it produces, for every new voxel, the
//! flat index of the old voxel whose corner coordinate it lands on, or -1
//! when it lands outside the old grid. Uses the pure-rotation fast path (the
//! transposed 3x3 block) and corner coordinates without the half-cell
//! offset, so its mapping intentionally differs from [`resample_array`].
//!
//! [`resample_array`]: crate::resample::resample_array

use glam::Vec3;

use crate::plan::RotateArgs;
use crate::rotation::RotationMatrix;

/// Builds the new-to-old flat index map for the planned rotation.
///
/// `slice_by_slice` pins each new voxel's source z-plane to its own k,
/// treating the volume as a stack of independent 2D slices.
#[must_use]
pub fn build_index_map(
    args: &RotateArgs,
    rotation: &RotationMatrix,
    slice_by_slice: bool,
) -> Vec<i64> {
    let src = args.src();
    let dst = args.dst();
    let src_dims = src.dims().as_i64vec3();
    let dst_dims = dst.dims();
    let src_spacing = src.spacing();
    let dst_spacing = dst.spacing();
    let mins = dst.origin();
    let inverse3 = rotation.inverse3();

    let mut map = vec![-1_i64; dst.num_cells() as usize];

    for k in 0..dst_dims.z {
        let ktot = dst_dims.x * dst_dims.y * k;
        for j in 0..dst_dims.y {
            let jtot = dst_dims.x * j;
            for i in 0..dst_dims.x {
                let new_index = (ktot + jtot + i) as usize;
                let coords = Vec3::new(
                    i as f32 * dst_spacing.x + mins.x,
                    j as f32 * dst_spacing.y + mins.y,
                    k as f32 * dst_spacing.z + mins.z,
                );
                let old = inverse3 * coords;

                let col = (old.x / src_spacing.x).round_ties_even() as i64;
                let row = (old.y / src_spacing.y).round_ties_even() as i64;
                let plane = if slice_by_slice {
                    k as i64
                } else {
                    (old.z / src_spacing.z).round_ties_even() as i64
                };

                if col >= 0
                    && col < src_dims.x
                    && row >= 0
                    && row < src_dims.y
                    && plane >= 0
                    && plane < src_dims.z
                {
                    map[new_index] = src_dims.x * src_dims.y * plane + src_dims.x * row + col;
                }
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan;
    use crate::rotation::RotationRepresentation;
    use glam::U64Vec3;
    use voxrot_core::ImageGrid;

    fn rot(axis: [f32; 3], angle: f32) -> RotationMatrix {
        RotationMatrix::build(&RotationRepresentation::axis_angle(axis, angle)).unwrap()
    }

    #[test]
    fn test_identity_maps_each_voxel_to_itself() {
        let grid = ImageGrid::new(U64Vec3::new(3, 2, 2), Vec3::ONE, Vec3::ZERO);
        let rotation = rot([0.0, 0.0, 1.0], 0.0);
        let args = plan(&grid, &rotation);
        let map = build_index_map(&args, &rotation, false);
        let expected: Vec<i64> = (0..12).collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn test_90_about_z_matches_hand_computed_map() {
        // 2x2x1 unit grid rotated +90 about Z. New mins are (-2, 0, 0); the
        // corner coordinate of new voxel (i,j) back-rotates to (j, 2-i), so
        // the i=0 column lands on the old grid's outer edge and is unmapped.
        let grid = ImageGrid::new(U64Vec3::new(2, 2, 1), Vec3::ONE, Vec3::ZERO);
        let rotation = rot([0.0, 0.0, 1.0], 90.0);
        let args = plan(&grid, &rotation);
        let map = build_index_map(&args, &rotation, false);
        assert_eq!(map, vec![-1, 2, -1, 3]);
    }

    #[test]
    fn test_entries_are_valid_or_sentinel() {
        let grid = ImageGrid::new(U64Vec3::new(5, 4, 3), Vec3::new(0.5, 1.0, 1.5), Vec3::ZERO);
        let rotation = rot([1.0, 1.0, 0.0], 60.0);
        let args = plan(&grid, &rotation);
        let map = build_index_map(&args, &rotation, false);
        assert_eq!(map.len(), args.dst().num_cells() as usize);
        let cells = grid.num_cells() as i64;
        assert!(map.iter().all(|&idx| idx == -1 || (0..cells).contains(&idx)));
        assert!(map.iter().any(|&idx| idx >= 0));
    }

    #[test]
    fn test_slice_by_slice_pins_source_plane() {
        let grid = ImageGrid::new(U64Vec3::new(4, 4, 4), Vec3::ONE, Vec3::ZERO);
        let rotation = rot([1.0, 0.0, 0.0], 90.0);
        let args = plan(&grid, &rotation);
        let map = build_index_map(&args, &rotation, true);

        let dst_dims = args.dst().dims();
        let src_dims = grid.dims();
        let per_plane = (src_dims.x * src_dims.y) as i64;
        for k in 0..dst_dims.z {
            let base = (dst_dims.x * dst_dims.y * k) as usize;
            for offset in 0..(dst_dims.x * dst_dims.y) as usize {
                let idx = map[base + offset];
                if idx >= 0 {
                    assert_eq!(idx / per_plane, k as i64);
                }
            }
        }
    }
}
