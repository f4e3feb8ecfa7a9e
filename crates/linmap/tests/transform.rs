//! Integration tests for the transform primitives and the staggered iteration.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;

use linmap::iteration::iterate;
use linmap::math::{Matrix, Vector};
use linmap::transform::{
    apply_affine, compose, random_points, rectangle, rotation, scale, AffineMap,
};
use linmap::DimensionMismatch;

const TOTAL_STEPS: usize = 8;
const FIXED_POINT: [f64; 2] = [68.51347837188396, 46.50021529631321];

fn reference_map() -> AffineMap {
    let m = compose(&scale(0.5, 0.8), &rotation(9.0 * PI / 16.0)).unwrap();
    AffineMap::new(m, Vector::from([98.0, 0.0])).unwrap()
}

fn assert_close(a: &Vector, b: &Vector, tol: f64) {
    assert_eq!(a.size(), b.size());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() <= tol, "{} != {} (tolerance {})", a, b, tol);
    }
}

fn assert_matrix_close(a: &Matrix, b: &Matrix, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for (ca, cb) in a.columns().iter().zip(b.columns()) {
        assert_close(ca, cb, tol);
    }
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

#[test]
fn rotation_layout_is_column_major() {
    let theta = 0.3f64;
    let r = rotation(theta);
    assert_close(r.column(0), &Vector::from([theta.cos(), theta.sin()]), 1e-15);
    assert_close(r.column(1), &Vector::from([-theta.sin(), theta.cos()]), 1e-15);
}

#[test]
fn rotation_is_orthogonal() {
    for theta in [0.0, 0.4, 9.0 * PI / 16.0, -2.5, PI] {
        let product = rotation(theta).mul_matrix(&rotation(-theta)).unwrap();
        assert_matrix_close(&product, &Matrix::identity(2), 1e-12);
    }
}

#[test]
fn quarter_turn_is_counter_clockwise() {
    let v = rotation(PI / 2.0).mul_vector(&Vector::from([1.0, 0.0])).unwrap();
    assert_close(&v, &Vector::from([0.0, 1.0]), 1e-12);
}

#[test]
fn compose_is_scale_times_rotation() {
    let s = scale(0.5, 0.8);
    let r = rotation(9.0 * PI / 16.0);
    let m = compose(&s, &r).unwrap();
    assert_eq!(m, s.mul_matrix(&r).unwrap());
    assert_ne!(m, r.mul_matrix(&s).unwrap());
}

#[test]
fn apply_affine_golden_value() {
    let map = reference_map();
    let v = Vector::from([245.0, 245.0]);
    let d = Vector::from([98.0, 0.0]);

    let expected = map.matrix().mul_vector(&v).unwrap().add(&d).unwrap();
    let got = apply_affine(&v, map.matrix(), &d).unwrap();
    assert_eq!(got, expected);
    assert_eq!(map.apply(&v).unwrap(), expected);

    assert_close(
        &got,
        &Vector::from([-46.04476129637143, 153.99621184387206]),
        1e-9,
    );
}

#[test]
fn apply_affine_rejects_mismatched_translation() {
    let m = Matrix::identity(2);
    let v = Vector::from([1.0, 2.0]);
    let d = Vector::from([1.0, 2.0, 3.0]);
    assert_eq!(
        apply_affine(&v, &m, &d).unwrap_err(),
        DimensionMismatch::Length { left: 2, right: 3 }
    );
    assert!(AffineMap::new(m, d).is_err());
}

#[test]
fn affine_map_requires_square_matrix() {
    let m = Matrix::from_column_arrays([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert!(AffineMap::new(m, Vector::from([0.0, 0.0, 0.0])).is_err());
}

#[test]
fn reference_fixed_point_is_fixed() {
    let map = reference_map();
    let p = Vector::from(FIXED_POINT);
    assert_close(&map.apply(&p).unwrap(), &p, 1e-9);

    let solved = map.fixed_point().unwrap();
    assert_close(&solved, &p, 1e-9);
}

#[test]
fn singular_map_has_no_fixed_point() {
    let map = AffineMap::new(Matrix::identity(2), Vector::from([1.0, 0.0])).unwrap();
    assert!(map.fixed_point().is_none());
}

#[test]
fn rectangle_is_centred() {
    let figure = rectangle(490, 490);
    assert_eq!(
        figure,
        vec![
            Vector::from([245.0, 245.0]),
            Vector::from([-245.0, 245.0]),
            Vector::from([-245.0, -245.0]),
            Vector::from([245.0, -245.0]),
        ]
    );
    // odd sizes use integer halves
    assert_eq!(rectangle(5, 3)[0], Vector::from([2.0, 1.0]));
}

#[test]
fn random_points_are_integral_and_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = random_points(&mut rng, 200, 490, 100);
    assert_eq!(points.len(), 200);
    for p in &points {
        assert_eq!(p.size(), 2);
        assert_eq!(p.x().fract(), 0.0);
        assert!(p.x().abs() <= 245.0);
        assert!(p.y().abs() <= 50.0);
    }
}

#[test]
fn random_points_are_reproducible_with_seed() {
    let a = random_points(&mut StdRng::seed_from_u64(7), 7, 490, 490);
    let b = random_points(&mut StdRng::seed_from_u64(7), 7, 490, 490);
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

#[test]
fn figure_matches_closed_form_after_seven_steps() {
    let map = reference_map();
    let start = rectangle(490, 490);
    let run = iterate(&map, start.clone(), vec![], TOTAL_STEPS).unwrap();

    assert_eq!(run.frames().len(), TOTAL_STEPS);
    assert_eq!(run.applications(), 7);
    assert_eq!(run.frames()[0], start);

    for (v0, v7) in start.iter().zip(run.final_figure()) {
        let expected = map.iterate_closed_form(v0, 7).unwrap();
        assert_close(v7, &expected, 1e-9);
    }
}

#[test]
fn first_frame_after_start_is_one_application() {
    let map = reference_map();
    let start = rectangle(490, 490);
    let run = iterate(&map, start.clone(), vec![], 2).unwrap();
    let expected: Vec<Vector> = start.iter().map(|v| map.apply(v).unwrap()).collect();
    assert_eq!(run.frames()[1], expected);
}

#[test]
fn staggered_points_have_expected_trajectory_lengths() {
    let map = reference_map();
    let points: Vec<Vector> = (0..TOTAL_STEPS)
        .map(|i| Vector::from([i as f64 * 10.0, -(i as f64)]))
        .collect();
    let run = iterate(&map, rectangle(490, 490), points.clone(), TOTAL_STEPS).unwrap();

    assert_eq!(run.trajectories().len(), TOTAL_STEPS);
    for (i, trajectory) in run.trajectories().iter().enumerate() {
        assert_eq!(trajectory.transforms(), i);
        assert_eq!(trajectory.len(), i + 1);
        assert_eq!(trajectory.positions()[0], points[i]);
        let expected = map.iterate_closed_form(&points[i], i as u32).unwrap();
        assert_close(trajectory.last(), &expected, 1e-9);
    }
    // the first point never moves, the last one moves on every step
    assert_eq!(run.final_points()[0], points[0]);
    assert_eq!(run.trajectories()[TOTAL_STEPS - 1].transforms(), run.applications());
}

#[test]
fn each_step_moves_only_the_remaining_suffix() {
    let map = reference_map();
    let points: Vec<Vector> = (0..4).map(|i| Vector::from([i as f64, 1.0])).collect();
    let run = iterate(&map, vec![], points.clone(), 2).unwrap();

    // one application: every point but the first moves once
    assert_eq!(run.trajectories()[0].positions(), &points[..1]);
    for (i, trajectory) in run.trajectories().iter().enumerate().skip(1) {
        assert_eq!(trajectory.positions(), &[points[i].clone(), map.apply(&points[i]).unwrap()][..]);
    }
}

#[test]
fn more_points_than_steps_caps_at_total_applications() {
    let map = reference_map();
    let points: Vec<Vector> = (0..5).map(|i| Vector::from([i as f64, 0.0])).collect();
    let run = iterate(&map, vec![], points, 3).unwrap();
    let lengths: Vec<usize> = run.trajectories().iter().map(|t| t.len()).collect();
    assert_eq!(lengths, vec![1, 2, 3, 3, 3]);
}

#[test]
fn fixed_point_stays_put_through_iteration() {
    let map = reference_map();
    let points = vec![Vector::from([1.0, 1.0]), Vector::from(FIXED_POINT)];
    let run = iterate(&map, vec![], points, TOTAL_STEPS).unwrap();
    assert_eq!(run.trajectories()[1].transforms(), 1);
    assert_close(&run.final_points()[1], &Vector::from(FIXED_POINT), 1e-9);

    let trailing: Vec<Vector> = (0..TOTAL_STEPS)
        .map(|i| if i + 1 == TOTAL_STEPS { Vector::from(FIXED_POINT) } else { Vector::zeros(2) })
        .collect();
    let run = iterate(&map, vec![], trailing, TOTAL_STEPS).unwrap();
    let last = &run.trajectories()[TOTAL_STEPS - 1];
    assert_eq!(last.transforms(), TOTAL_STEPS - 1);
    assert_close(last.last(), &Vector::from(FIXED_POINT), 1e-8);
}

#[test]
fn single_step_run_has_only_the_start_frame() {
    let map = reference_map();
    let run = iterate(&map, rectangle(10, 10), vec![Vector::from([1.0, 1.0])], 1).unwrap();
    assert_eq!(run.frames().len(), 1);
    assert_eq!(run.trajectories()[0].len(), 1);
}

#[test]
fn dimension_mismatch_aborts_the_run() {
    let map = reference_map();
    let figure = vec![Vector::from([1.0, 1.0]), Vector::from([1.0, 1.0, 1.0])];
    let err = iterate(&map, figure, vec![], TOTAL_STEPS).unwrap_err();
    assert_eq!(
        err,
        DimensionMismatch::Product {
            left_cols: 2,
            right_rows: 3
        }
    );
}
