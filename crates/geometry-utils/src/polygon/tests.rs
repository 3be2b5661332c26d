use super::*;
use crate::coords::{points_from_pairs, Point};
use crate::error::GeomError;
use crate::segment::cross;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn close(ring: &[Point]) -> Vec<Point> {
    let mut out = ring.to_vec();
    out.push(ring[0]);
    out
}

fn rotate(ring: &[Point], k: usize) -> Vec<Point> {
    let mut out = ring.to_vec();
    out.rotate_left(k % ring.len());
    out
}

fn reversed(ring: &[Point]) -> Vec<Point> {
    ring.iter().rev().copied().collect()
}

fn assert_close(a: Point, b: Point, rel: f64) {
    let scale = b.norm().max(1.0);
    assert!((a - b).norm() <= rel * scale, "{a:?} vs {b:?}");
}

/// Counter-clockwise concave ring with a notch.
fn notched() -> Vec<Point> {
    points_from_pairs(&[
        (-5.0, -2.0),
        (3.0, -1.0),
        (5.0, -1.0),
        (5.0, 4.0),
        (3.0, 0.0),
        (0.0, 0.0),
        (-2.0, 2.0),
        (-5.0, 2.0),
    ])
}

#[test]
fn rotation_of_a_concave_ring_and_its_reverse() {
    let ccw = notched();
    assert!(!polygon_rotation_is_clockwise(&ccw).unwrap());
    assert!(polygon_rotation_is_clockwise(&reversed(&ccw)).unwrap());
}

#[test]
fn square_reversal_flips_rotation() {
    let cw = points_from_pairs(&[(5.0, 5.0), (5.0, 15.0), (15.0, 15.0), (15.0, 5.0)]);
    assert!(polygon_rotation_is_clockwise(&cw).unwrap());
    assert!(!polygon_rotation_is_clockwise(&reversed(&cw)).unwrap());
}

#[test]
fn centroids_match_known_values_open_and_closed() {
    let cases: [(&[(f64, f64)], Point); 5] = [
        (&[(5.0, 5.0), (5.0, 15.0), (15.0, 15.0), (15.0, 5.0)], vector![10.0, 10.0]),
        (&[(2.0, 7.0), (6.0, 3.0), (2.0, 4.0)], vector![3.33333333, 4.66666667]),
        (&[(-2.0, -7.0), (-6.0, -3.0), (-2.0, -4.0)], vector![-3.33333333, -4.66666667]),
        (&[(-100.0, 0.0), (0.0, -100.0), (100.0, 0.0), (0.0, 100.0)], vector![0.0, 0.0]),
        // Concave: the centroid lies outside the ring.
        (
            &[
                (-700.0, 1000.0),
                (800.0, 1010.0),
                (1200.0, 200.0),
                (500.0, 900.0),
                (-600.0, 890.0),
                (-1300.0, -20.0),
            ],
            vector![126.43211, 781.0239],
        ),
    ];
    for (pairs, expected) in cases {
        let ring = points_from_pairs(pairs);
        assert_close(polygon_centroid(&ring).unwrap(), expected, 1e-5);
        assert_close(polygon_centroid(&close(&ring)).unwrap(), expected, 1e-5);
    }
    let concave = points_from_pairs(cases[4].0);
    let c = polygon_centroid(&concave).unwrap();
    assert!(!polygon_inside(&concave, c).unwrap());
}

#[test]
fn polygon_container_forwards_to_ring_routines() {
    let p = Polygon::from_points(&notched());
    assert_eq!(p.area().unwrap(), polygon_area(p.points()).unwrap());
    assert!(!p.is_clockwise().unwrap());
    assert!(p.is_simple().unwrap());
    assert!(p.contains_point(vector![-4.0, 0.0]).unwrap());
    assert!(!p.contains_point(vector![2.0, 1.0]).unwrap());
    assert_eq!(
        p.contains_points(&[vector![-4.0, 0.0], vector![2.0, 1.0]]).unwrap(),
        vec![true, false]
    );
    let c = p.centroid().unwrap();
    assert_eq!(c, polygon_centroid(p.points()).unwrap());
    assert!(p.signed_area().unwrap() > 0.0);
    assert!(!p.is_closed());
}

#[test]
fn thinning_keeps_metadata_and_geometry_routines_accept_result() {
    let mut ring = Vec::new();
    for k in 0..40 {
        let t = k as f64 / 40.0 * std::f64::consts::TAU;
        ring.push(vector![10.0 * t.cos(), 10.0 * t.sin()]);
    }
    ring.push(ring[0]);
    let mut p = Polygon::from_points(&ring);
    p.metadata_mut().insert("id".into(), serde_json::json!(7));
    let thin = p.thin(vector![0.2, 0.2]);
    assert!(thin.len() < p.len());
    assert!(thin.is_closed());
    assert_eq!(thin.metadata(), p.metadata());
    assert!(thin.is_simple().unwrap());
    let lost = (p.area().unwrap() - thin.area().unwrap()) / p.area().unwrap();
    assert!(lost >= 0.0 && lost < 0.5, "lost {lost}");

    let dot = p.thin(vector![0.01, 0.01]);
    assert!(dot.is_empty());
    assert_eq!(dot.metadata(), p.metadata());
}

#[test]
fn shape_errors_are_uniform() {
    let two = points_from_pairs(&[(0.0, 0.0), (1.0, 1.0)]);
    for r in [
        polygon_area(&two).err(),
        polygon_signed_area(&two).err(),
        polygon_centroid(&two).err(),
        polygon_is_simple(&two).err(),
        polygon_inside(&two, vector![0.0, 0.0]).err(),
    ] {
        assert!(matches!(r, Some(GeomError::Shape { .. })));
    }
    assert!(polygon_rotation_is_clockwise(&two).is_err());
}

#[test]
fn convex_inside_matches_half_plane_oracle() {
    // Clockwise convex quad: inside iff every edge sees the point on its right.
    let quad = points_from_pairs(&[(3.0, 3.0), (5.0, 8.0), (10.0, 5.0), (7.0, 1.0)]);
    let mut rng = StdRng::seed_from_u64(42);
    let pts: Vec<Point> = (0..500)
        .map(|_| Vector2::new(rng.gen_range(2.0..11.0), rng.gen_range(0.0..9.0)))
        .collect();
    let got = polygon_inside_many(&quad, &pts).unwrap();
    for (p, inside) in pts.iter().zip(got) {
        let sides: Vec<f64> = (0..4).map(|i| cross(quad[i], quad[(i + 1) % 4], *p)).collect();
        if sides.iter().any(|s| *s == 0.0) {
            continue;
        }
        assert_eq!(inside, sides.iter().all(|s| *s < 0.0), "{p:?}");
    }
}

/// Star-shaped ring around the origin: strictly increasing angles with every
/// gap below π, so the ring is simple and counter-clockwise.
fn arb_star() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.6f64..1.0, 1.0f64..10.0), 3..12).prop_map(|steps| {
        let total: f64 = steps.iter().map(|(d, _)| d).sum();
        let mut acc = 0.0;
        steps
            .iter()
            .map(|(d, r)| {
                let t = acc / total * std::f64::consts::TAU * 0.999;
                acc += d;
                vector![r * t.cos(), r * t.sin()]
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn area_invariances(ring in arb_star(), k in 0usize..12) {
        let a = polygon_area(&ring).unwrap();
        prop_assert!(a > 0.0);
        let tol = 1e-9 * a.max(1.0);
        prop_assert!((polygon_area(&close(&ring)).unwrap() - a).abs() <= tol);
        prop_assert!((polygon_area(&rotate(&ring, k)).unwrap() - a).abs() <= tol);
        prop_assert!((polygon_area(&reversed(&ring)).unwrap() - a).abs() <= tol);
        let s = polygon_signed_area(&ring).unwrap();
        let s_rev = polygon_signed_area(&reversed(&ring)).unwrap();
        prop_assert!((s + s_rev).abs() <= tol);
    }

    #[test]
    fn rotation_flips_on_reversal(ring in arb_star()) {
        prop_assert!(!polygon_rotation_is_clockwise(&ring).unwrap());
        prop_assert!(polygon_rotation_is_clockwise(&reversed(&ring)).unwrap());
    }

    #[test]
    fn centroid_invariances(ring in arb_star(), k in 0usize..12) {
        let c = polygon_centroid(&ring).unwrap();
        let tol = 1e-9;
        prop_assert!((polygon_centroid(&close(&ring)).unwrap() - c).norm() <= tol * c.norm().max(10.0));
        prop_assert!((polygon_centroid(&rotate(&ring, k)).unwrap() - c).norm() <= tol * c.norm().max(10.0));
        prop_assert!((polygon_centroid(&reversed(&ring)).unwrap() - c).norm() <= tol * c.norm().max(10.0));
    }

    #[test]
    fn star_rings_are_simple(ring in arb_star()) {
        prop_assert!(polygon_is_simple(&ring).unwrap());
        prop_assert!(polygon_is_simple(&close(&ring)).unwrap());
    }

    #[test]
    fn batched_inside_equals_single(
        ring in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 3..10),
        queries in prop::collection::vec((-12.0f64..12.0, -12.0f64..12.0), 0..40),
    ) {
        let ring: Vec<Point> = ring.into_iter().map(|(x, y)| vector![x, y]).collect();
        let queries: Vec<Point> = queries.into_iter().map(|(x, y)| vector![x, y]).collect();
        let batch = polygon_inside_many(&ring, &queries).unwrap();
        for (q, b) in queries.iter().zip(&batch) {
            prop_assert_eq!(polygon_inside(&ring, *q).unwrap(), *b);
        }
    }

    #[test]
    fn axis_aligned_rectangles_are_simple(
        x in -50.0f64..50.0, y in -50.0f64..50.0, w in 0.1f64..20.0, h in 0.1f64..20.0,
    ) {
        let rect = points_from_pairs(&[(x, y), (x, y + h), (x + w, y + h), (x + w, y)]);
        prop_assert!(polygon_is_simple(&rect).unwrap());
        prop_assert!((polygon_area(&rect).unwrap() - w * h).abs() <= 1e-9 * (w * h).max(1.0) * 100.0);
    }
}
