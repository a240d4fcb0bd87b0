use curves_core::{BSplineJoins, CurveConfig};
use curves_geometry::curve::de_casteljau;
use curves_geometry::{compose, CurveType};
use curves_math::{DVec3, Point3};

fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
    DVec3::new(x, y, z)
}

fn square() -> Vec<Point3> {
    vec![
        dvec3(0.0, 0.0, 0.0),
        dvec3(10.0, 0.0, 0.0),
        dvec3(10.0, 10.0, 0.0),
        dvec3(0.0, 10.0, 0.0),
    ]
}

fn helix(n: usize) -> Vec<Point3> {
    (0..n)
        .map(|i| {
            let a = i as f64 * 0.7;
            dvec3(a.cos() * 5.0, a.sin() * 5.0, i as f64)
        })
        .collect()
}

#[test]
fn test_bezier_square_example() {
    let points = compose(&square(), CurveType::Bezier, &CurveConfig::new(4));
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], dvec3(0.0, 0.0, 0.0));
    assert_eq!(points[4], dvec3(0.0, 10.0, 0.0));
}

#[test]
fn test_bspline_square_example() {
    let pts = square();
    let points = compose(&pts, CurveType::BSpline, &CurveConfig::new(4));
    assert_eq!(points.len(), 5);
    for p in &points {
        assert!(!pts.contains(p), "B-spline sample {:?} hit a control point", p);
    }
}

#[test]
fn test_output_lengths() {
    let r = 7;
    let config = CurveConfig::new(r);
    for n in 2..=8 {
        let pts = helix(n);
        assert_eq!(compose(&pts, CurveType::Bezier, &config).len(), r + 1);
        assert_eq!(
            compose(&pts, CurveType::HermiteCatmullRom, &config).len(),
            1 + (n - 1) * r,
            "Catmull-Rom length for n={}",
            n
        );
        if n >= 4 {
            assert_eq!(compose(&pts, CurveType::BSpline, &config).len(), (n - 3) * (r + 1));
        }
    }
}

#[test]
fn test_catmull_rom_lengths_by_construction() {
    let r = 4;
    let config = CurveConfig::new(r);
    // n = 2: one segment, r + 1 samples
    assert_eq!(compose(&helix(2), CurveType::HermiteCatmullRom, &config).len(), 5);
    // n = 3: two segments, second drops its leading sample
    assert_eq!(compose(&helix(3), CurveType::HermiteCatmullRom, &config).len(), 9);
    // n = 4: three segments
    assert_eq!(compose(&helix(4), CurveType::HermiteCatmullRom, &config).len(), 13);
}

#[test]
fn test_interpolating_families_hit_endpoints() {
    let config = CurveConfig::new(16);
    for n in 2..=6 {
        let pts = helix(n);
        for curve_type in [CurveType::Bezier, CurveType::HermiteCatmullRom] {
            let points = compose(&pts, curve_type, &config);
            assert!(points[0].abs_diff_eq(pts[0], 1e-9));
            assert!(points[points.len() - 1].abs_diff_eq(pts[n - 1], 1e-9));
        }
    }
}

#[test]
fn test_catmull_rom_passes_through_every_point() {
    let r = 10;
    let pts = helix(6);
    let points = compose(&pts, CurveType::HermiteCatmullRom, &CurveConfig::new(r));
    for (i, p) in pts.iter().enumerate() {
        assert!(points[i * r].abs_diff_eq(*p, 1e-9), "point {} not interpolated", i);
    }
}

#[test]
fn test_catmull_rom_has_no_repeated_joints() {
    let points = compose(&helix(5), CurveType::HermiteCatmullRom, &CurveConfig::new(6));
    for pair in points.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_de_casteljau_single_point_every_t() {
    let p = dvec3(-4.0, 2.5, 9.0);
    for i in 0..=100 {
        assert_eq!(de_casteljau(&[p], i as f64 / 100.0), p);
    }
}

#[test]
fn test_below_minimum_passthrough() {
    let config = CurveConfig::default();
    let one = vec![dvec3(1.0, 2.0, 3.0)];
    assert_eq!(compose(&one, CurveType::Bezier, &config), one);
    assert_eq!(compose(&one, CurveType::HermiteCatmullRom, &config), one);
    for n in 0..4 {
        let pts = helix(n);
        assert_eq!(compose(&pts, CurveType::BSpline, &config), pts);
    }
    for curve_type in CurveType::ALL {
        assert!(compose(&[], curve_type, &config).is_empty());
    }
}

#[test]
fn test_compose_is_idempotent() {
    let pts = helix(7);
    let config = CurveConfig::default();
    for curve_type in CurveType::ALL {
        assert_eq!(
            compose(&pts, curve_type, &config),
            compose(&pts, curve_type, &config)
        );
    }
}

#[test]
fn test_bspline_joint_policy() {
    let pts = helix(6);
    let r = 8;
    let overlapping = compose(&pts, CurveType::BSpline, &CurveConfig::new(r));
    let deduplicated = compose(
        &pts,
        CurveType::BSpline,
        &CurveConfig::new(r).with_bspline_joins(BSplineJoins::Deduplicated),
    );
    assert_eq!(overlapping.len(), 3 * (r + 1));
    assert_eq!(deduplicated.len(), 3 * r + 1);
    assert!(overlapping[r].abs_diff_eq(overlapping[r + 1], 1e-12));
    assert_eq!(overlapping.first(), deduplicated.first());
    assert_eq!(overlapping.last(), deduplicated.last());
}

#[test]
fn test_duplicate_control_points_allowed() {
    let p = dvec3(1.0, 1.0, 1.0);
    let pts = vec![p, p, dvec3(2.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0)];
    let config = CurveConfig::new(5);
    for curve_type in CurveType::ALL {
        let points = compose(&pts, curve_type, &config);
        assert!(points.iter().all(|q| q.is_finite()));
    }
}
