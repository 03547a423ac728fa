//! Property tests: equidistance and rigid-motion invariance on random batches.

use super::*;
use nalgebra::{Point2, Rotation2, Vector2};
use ndarray::Array2;
use proptest::prelude::*;

type Tri = [f64; 6];

/// Twice the area over the longest squared edge; small means nearly collinear.
fn shape_quality(t: &Tri) -> f64 {
    let [ax, ay, bx, by, cx, cy] = *t;
    let area2 = ((bx - ax) * (cy - ay) - (by - ay) * (cx - ax)).abs();
    let e = [
        (bx - ax).powi(2) + (by - ay).powi(2),
        (cx - bx).powi(2) + (cy - by).powi(2),
        (ax - cx).powi(2) + (ay - cy).powi(2),
    ];
    let longest = e.iter().cloned().fold(0.0, f64::max);
    if longest == 0.0 {
        0.0
    } else {
        area2 / longest
    }
}

fn well_shaped() -> impl Strategy<Value = Tri> {
    prop::array::uniform6(-10.0f64..10.0).prop_filter("well-shaped triangle", |t| shape_quality(t) > 0.05)
}

fn batches(tris: &[Tri]) -> [Array2<f64>; 3] {
    let vertex = |k: usize| Array2::from_shape_fn((tris.len(), 2), |(i, j)| tris[i][2 * k + j]);
    [vertex(0), vertex(1), vertex(2)]
}

fn map_tris(tris: &[Tri], f: impl Fn(Point2<f64>) -> Point2<f64>) -> Vec<Tri> {
    tris.iter()
        .map(|t| {
            let mut out = [0.0; 6];
            for k in 0..3 {
                let q = f(Point2::new(t[2 * k], t[2 * k + 1]));
                out[2 * k] = q.x;
                out[2 * k + 1] = q.y;
            }
            out
        })
        .collect()
}

proptest! {
    #[test]
    fn equidistant_from_all_vertices(tris in prop::collection::vec(well_shaped(), 0..24)) {
        let [p0, p1, p2] = batches(&tris);
        let circles = circumcircle(&p0, &p1, &p2).unwrap();
        prop_assert_eq!(circles.len(), tris.len());
        for (i, t) in tris.iter().enumerate() {
            let c = circles.get(i).unwrap();
            let tol = 1e-8 * c.radius.max(1.0);
            for k in 0..3 {
                let v = Point2::new(t[2 * k], t[2 * k + 1]);
                prop_assert!(((c.center - v).norm() - c.radius).abs() < tol);
            }
        }
    }

    #[test]
    fn separate_and_stacked_forms_agree(tris in prop::collection::vec(well_shaped(), 0..24)) {
        let [p0, p1, p2] = batches(&tris);
        let t = stack_triangles(&p0, &p1, &p2).unwrap();
        prop_assert_eq!(circumcenter(&p0, &p1, &p2).unwrap(), circumcenter_stacked(&t).unwrap());
        prop_assert_eq!(circumradius(&p0, &p1, &p2).unwrap(), circumradius_stacked(&t).unwrap());
    }

    #[test]
    fn translation_shifts_center_keeps_radius(
        tris in prop::collection::vec(well_shaped(), 1..16),
        dx in -50.0f64..50.0,
        dy in -50.0f64..50.0,
    ) {
        let shift = Vector2::new(dx, dy);
        let moved = map_tris(&tris, |p| p + shift);
        let [a0, a1, a2] = batches(&tris);
        let [b0, b1, b2] = batches(&moved);
        let before = circumcircle(&a0, &a1, &a2).unwrap();
        let after = circumcircle(&b0, &b1, &b2).unwrap();
        for i in 0..tris.len() {
            let (x, y) = (before.get(i).unwrap(), after.get(i).unwrap());
            let tol = 1e-7 * x.radius.max(1.0);
            prop_assert!(((x.center + shift) - y.center).norm() < tol);
            prop_assert!((x.radius - y.radius).abs() < tol);
        }
    }

    #[test]
    fn rotation_rotates_center_keeps_radius(
        tris in prop::collection::vec(well_shaped(), 1..16),
        theta in -std::f64::consts::PI..std::f64::consts::PI,
    ) {
        let rot = Rotation2::new(theta);
        let turned = map_tris(&tris, |p| rot * p);
        let [a0, a1, a2] = batches(&tris);
        let [b0, b1, b2] = batches(&turned);
        let before = circumcircle(&a0, &a1, &a2).unwrap();
        let after = circumcircle(&b0, &b1, &b2).unwrap();
        for i in 0..tris.len() {
            let (x, y) = (before.get(i).unwrap(), after.get(i).unwrap());
            let tol = 1e-7 * x.radius.max(1.0);
            prop_assert!((rot * x.center - y.center).norm() < tol);
            prop_assert!((x.radius - y.radius).abs() < tol);
        }
    }

    #[test]
    fn vertex_order_does_not_matter(tris in prop::collection::vec(well_shaped(), 1..16)) {
        let [p0, p1, p2] = batches(&tris);
        let base = circumcircle(&p0, &p1, &p2).unwrap();
        let cycled = circumcircle(&p1, &p2, &p0).unwrap();
        let swapped = circumcircle(&p0, &p2, &p1).unwrap();
        for i in 0..tris.len() {
            let x = base.get(i).unwrap();
            let tol = 1e-7 * x.radius.max(1.0);
            for other in [&cycled, &swapped] {
                let y = other.get(i).unwrap();
                prop_assert!((x.center - y.center).norm() < tol);
                prop_assert!((x.radius - y.radius).abs() < tol);
            }
        }
    }
}
