#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
//! Demo rotating a voxel dataset's sampling frame.
//!
//! Builds a 64x64x16 grid with a scalar field and a 3-component vector
//! field, rotates the frame 30 degrees about the Z axis, and prints the
//! resulting grid shape.

use voxrot::{
    Dataset, ImageGrid, RotateOptions, RotationRepresentation, TypedArray, U64Vec3, Vec3,
};

fn main() {
    env_logger::init();

    let dims = U64Vec3::new(64, 64, 16);
    let grid = ImageGrid::new(dims, Vec3::new(0.25, 0.25, 1.0), Vec3::ZERO);
    let cells = grid.num_cells() as usize;
    let mut dataset = Dataset::new(grid);

    // Scalar field: distance from the volume center
    let mut density = Vec::with_capacity(cells);
    for k in 0..dims.z {
        for j in 0..dims.y {
            for i in 0..dims.x {
                let p = Vec3::new(i as f32, j as f32, k as f32) - dims.as_vec3() * 0.5;
                density.push(p.length());
            }
        }
    }
    dataset
        .add_cell_array(Box::new(
            TypedArray::from_vec("density", 1, density).expect("whole tuples"),
        ))
        .expect("array matches grid");

    dataset
        .add_cell_array(Box::new(TypedArray::<f32>::new("orientation", 3, cells)))
        .expect("array matches grid");

    let outcome = dataset
        .rotate_sample_frame(
            RotationRepresentation::axis_angle([0.0, 0.0, 1.0], 30.0),
            RotateOptions::default(),
        )
        .expect("rotation succeeds");

    println!(
        "resampled {} arrays; new grid {:?} at origin {:?} with spacing {:?}",
        outcome.arrays_resampled,
        dataset.grid().dims(),
        dataset.grid().origin(),
        dataset.grid().spacing(),
    );
}
