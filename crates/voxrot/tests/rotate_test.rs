//! End-to-end tests for the sample-reference-frame rotation pipeline.

use voxrot::*;

fn index_valued_dataset(n: u64) -> Dataset {
    let grid = ImageGrid::new(U64Vec3::splat(n), Vec3::ONE, Vec3::ZERO);
    let cells = (n * n * n) as usize;
    let mut dataset = Dataset::new(grid);
    dataset
        .add_cell_array(Box::new(
            TypedArray::<i32>::from_vec("ids", 1, (0..cells as i32).collect()).unwrap(),
        ))
        .unwrap();
    dataset
}

fn scalar_data<'a>(dataset: &'a Dataset, name: &str) -> &'a [i32] {
    dataset
        .cell_data()
        .get(name)
        .unwrap()
        .as_any()
        .downcast_ref::<TypedArray<i32>>()
        .unwrap()
        .data()
}

#[test]
fn test_identity_matrix_round_trip() {
    let mut dataset = index_valued_dataset(4);
    let identity = RotationRepresentation::matrix(vec![
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0, 1.0],
    ]);
    let outcome = dataset
        .rotate_sample_frame(identity, RotateOptions::default())
        .unwrap();

    assert_eq!(outcome.arrays_resampled, 1);
    assert_eq!(dataset.grid().dims(), U64Vec3::splat(4));
    assert_eq!(dataset.grid().spacing(), Vec3::ONE);
    assert!(dataset.grid().origin().length() < 1e-5);
    let expected: Vec<i32> = (0..64).collect();
    assert_eq!(scalar_data(&dataset, "ids"), expected.as_slice());
}

#[test]
fn test_concrete_90_degree_scenario() {
    // 4x4x4 unit grid, scalar array valued by flat index, rotated +90 about
    // Z. The expectation is derived by hand from the inverse transform: the
    // new grid spans x in [-4,0], so new voxel (i,j,k) has center
    // (i+0.5-4, j+0.5, k+0.5); rotating that by -90 about Z gives the source
    // point (j+0.5, 3.5-i, k+0.5), whose containing cell is (j, 3-i, k).
    let mut dataset = index_valued_dataset(4);
    let outcome = dataset
        .rotate_sample_frame(
            RotationRepresentation::axis_angle([0.0, 0.0, 1.0], 90.0),
            RotateOptions::default(),
        )
        .unwrap();

    assert_eq!(dataset.grid().dims(), U64Vec3::splat(4));
    assert_eq!(dataset.grid().spacing(), Vec3::ONE);
    assert!(!outcome.cancelled);

    let data = scalar_data(&dataset, "ids");
    for k in 0..4_i32 {
        for j in 0..4_i32 {
            for i in 0..4_i32 {
                let new_index = (16 * k + 4 * j + i) as usize;
                let old_index = 16 * k + 4 * (3 - i) + j;
                assert_eq!(data[new_index], old_index, "voxel ({i},{j},{k})");
            }
        }
    }
}

#[test]
fn test_oblique_rotation_zero_fills_and_preserves_components() {
    let grid = ImageGrid::new(U64Vec3::splat(8), Vec3::ONE, Vec3::ZERO);
    let mut dataset = Dataset::new(grid);
    for (name, components) in [("scalar", 1_usize), ("euler", 3), ("strain", 6)] {
        let data = vec![1.5_f32; 512 * components];
        dataset
            .add_cell_array(Box::new(
                TypedArray::from_vec(name, components, data).unwrap(),
            ))
            .unwrap();
    }

    dataset
        .rotate_sample_frame(
            RotationRepresentation::axis_angle([0.0, 0.0, 1.0], 45.0),
            RotateOptions::default(),
        )
        .unwrap();

    for (name, components) in [("scalar", 1_usize), ("euler", 3), ("strain", 6)] {
        let array = dataset.cell_data().get(name).unwrap();
        assert_eq!(array.component_count(), components);
        assert_eq!(array.tuple_count() as u64, dataset.grid().num_cells());
        let typed = array.as_any().downcast_ref::<TypedArray<f32>>().unwrap();
        // The new grid's first voxel sits at the rotated box's corner,
        // outside the source volume: all components zero-filled.
        assert!(typed.tuple(0).iter().all(|&v| v == 0.0));
        assert!(typed.data().iter().any(|&v| v == 1.5));
    }
}

#[test]
fn test_180_rotation_preserves_dims_and_spacing() {
    let grid = ImageGrid::new(
        U64Vec3::new(6, 4, 2),
        Vec3::new(0.5, 1.0, 2.0),
        Vec3::new(1.0, 2.0, 3.0),
    );
    let mut dataset = Dataset::new(grid);
    dataset
        .add_cell_array(Box::new(TypedArray::<u8>::new("mask", 1, 48)))
        .unwrap();

    dataset
        .rotate_sample_frame(
            RotationRepresentation::axis_angle([0.0, 0.0, 1.0], 180.0),
            RotateOptions::default(),
        )
        .unwrap();

    assert_eq!(dataset.grid().dims(), U64Vec3::new(6, 4, 2));
    assert_eq!(dataset.grid().spacing(), Vec3::new(0.5, 1.0, 2.0));
}

#[test]
fn test_configuration_errors_are_reported_with_values() {
    let mut dataset = index_valued_dataset(2);

    let err = dataset
        .rotate_sample_frame(
            RotationRepresentation::axis_angle([0.0, 0.0, 0.0], 30.0),
            RotateOptions::default(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("zero length"));

    let err = dataset
        .rotate_sample_frame(
            RotationRepresentation::matrix(vec![vec![1.0, 0.0, 0.0]; 3]),
            RotateOptions::default(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("3x3"));

    // The dataset is untouched after configuration errors.
    assert_eq!(dataset.grid().dims(), U64Vec3::splat(2));
    let expected: Vec<i32> = (0..8).collect();
    assert_eq!(scalar_data(&dataset, "ids"), expected.as_slice());
}

#[test]
fn test_rotation_parameters_round_trip_through_json() {
    let rep = RotationRepresentation::axis_angle([0.0, 1.0, 0.0], 90.0);
    let json = serde_json::to_string(&rep).unwrap();
    let restored: RotationRepresentation = serde_json::from_str(&json).unwrap();

    let mut from_original = index_valued_dataset(3);
    let mut from_json = index_valued_dataset(3);
    from_original
        .rotate_sample_frame(rep, RotateOptions::default())
        .unwrap();
    from_json
        .rotate_sample_frame(restored, RotateOptions::default())
        .unwrap();

    assert_eq!(from_original.grid(), from_json.grid());
    assert_eq!(
        scalar_data(&from_original, "ids"),
        scalar_data(&from_json, "ids")
    );
}

#[test]
fn test_unknown_representation_rejected_at_parse() {
    let err = serde_json::from_str::<RotationRepresentation>(
        r#"{"representation":"quaternion","values":[0,0,0,1]}"#,
    );
    assert!(err.is_err());
}

#[test]
fn test_cancellation_keeps_partial_state() {
    let mut dataset = index_valued_dataset(4);
    let token = CancelToken::new();
    token.cancel();
    let ctx = ProgressCtx::new(Box::new(LogSink), token);

    let outcome = dataset
        .rotate_sample_frame_with_ctx(
            RotationRepresentation::axis_angle([0.0, 0.0, 1.0], 90.0),
            RotateOptions::default(),
            &ctx,
        )
        .unwrap();

    assert!(outcome.cancelled);
    // The grid descriptor swap happens before resampling, so the new shape
    // is visible even though the data is incomplete.
    assert_eq!(dataset.grid().dims(), outcome.args.dst().dims());
}
