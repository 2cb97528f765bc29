//! Property tests for the measurement contract.
//!
//! Each property is stated over the public API only: constructors,
//! `Shape::from_parameters` and `measure_with_id`.

use std::f64::consts::PI;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shapes::planar::{Circle, Rectangle, Rhombus, Sector, Square, Triangle};
use shapes::solid::Torus;
use shapes::{measure_with_id, Parameters, Shape, ShapeError, ShapeErrorKind, ShapeKind};

fn rel_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs()
}

/// A valid parameter set for every kind
fn baseline(kind: ShapeKind) -> Parameters {
    let pairs: &[(&str, f64)] = match kind {
        ShapeKind::Circle => &[("radius", 2.0)],
        ShapeKind::Ellipse => &[("radiusX", 3.0), ("radiusY", 2.0)],
        ShapeKind::Rectangle => &[("length", 3.0), ("width", 2.0)],
        ShapeKind::Square => &[("side", 2.0)],
        ShapeKind::Triangle => &[("sideA", 3.0), ("sideB", 4.0), ("sideC", 5.0)],
        ShapeKind::RegularPolygon => &[("sides", 5.0), ("sideLength", 2.0)],
        ShapeKind::Trapezoid => &[
            ("topWidth", 4.0),
            ("bottomWidth", 10.0),
            ("height", 4.0),
            ("leftSide", 5.0),
            ("rightSide", 5.0),
        ],
        ShapeKind::Rhombus => &[("side", 5.0), ("diagonal1", 6.0), ("diagonal2", 8.0)],
        ShapeKind::Parallelogram => &[("base", 6.0), ("side", 5.0), ("height", 4.0)],
        ShapeKind::Sector => &[("radius", 2.0), ("angle", 120.0)],
        ShapeKind::Sphere => &[("radius", 2.0)],
        ShapeKind::Cube => &[("side", 2.0)],
        ShapeKind::Cylinder => &[("radius", 2.0), ("height", 3.0)],
        ShapeKind::Cone => &[("radius", 3.0), ("height", 4.0)],
        ShapeKind::Pyramid => &[("baseLength", 6.0), ("height", 4.0)],
        ShapeKind::Torus => &[("majorRadius", 5.0), ("minorRadius", 3.0)],
        ShapeKind::Ellipsoid => &[("radiusX", 1.0), ("radiusY", 2.0), ("radiusZ", 3.0)],
        ShapeKind::Prism => &[("baseArea", 12.0), ("basePerimeter", 14.0), ("height", 2.0)],
    };
    pairs.iter().copied().collect()
}

#[test]
fn test_every_parameter_requires_positivity() {
    for kind in ShapeKind::ALL {
        for name in kind.parameter_names() {
            for bad in [0.0, -1.0] {
                let mut params = baseline(kind);
                params.insert(*name, bad);
                let err = Shape::from_parameters(kind, &params).unwrap_err();
                assert_eq!(err.kind(), ShapeErrorKind::Validation, "{kind}.{name}={bad}");
            }
        }
    }
}

#[test]
fn test_solid_fields_present_exactly_for_solids() {
    for kind in ShapeKind::ALL {
        let shape = Shape::from_parameters(kind, &baseline(kind)).unwrap();
        let result = measure_with_id(&shape, kind.ident());
        assert!(result.is_ok(), "{kind}: {:?}", result.error);
        assert_eq!(result.volume.is_some(), kind.is_solid(), "{kind}");
        assert_eq!(result.surface_area.is_some(), kind.is_solid(), "{kind}");
        if kind.is_solid() {
            assert_eq!(Some(result.area), result.surface_area, "{kind}");
        }
    }
}

#[test]
fn test_result_parameters_match_shape_parameters() {
    for kind in ShapeKind::ALL {
        let shape = Shape::from_parameters(kind, &baseline(kind)).unwrap();
        let result = measure_with_id(&shape, "p");
        assert_eq!(result.kind, kind);
        assert_eq!(result.parameters, shape.parameters());
    }
}

#[test]
fn test_degenerate_triangle_rejected() {
    let err = Triangle::new(1.0, 1.0, 2.0).unwrap_err();
    assert!(matches!(err, ShapeError::Validation(_)));
}

#[test]
fn test_rhombus_examples() {
    assert!(Rhombus::new(5.0, 6.0, 8.0).is_ok());
    assert!(matches!(Rhombus::new(5.0, 1.0, 1.0), Err(ShapeError::Validation(_))));
}

#[test]
fn test_torus_examples() {
    assert!(matches!(Torus::new(5.0, 6.0), Err(ShapeError::Validation(_))));
    let torus = Torus::new(5.0, 3.0).unwrap();
    assert!(rel_eq(torus.volume(), 2.0 * PI * PI * 5.0 * 9.0));
}

#[test]
fn test_sector_examples() {
    assert!(Sector::new(2.0, 0.0).is_err());
    assert!(Sector::new(2.0, 361.0).is_err());
    let sector = Sector::new(2.0, 360.0).unwrap();
    assert!(rel_eq(sector.area(), PI * 4.0));
}

#[test]
fn test_polygon_side_count_past_u32_is_measured_as_given() {
    let params: Parameters = [("sides", 1e10), ("sideLength", 1.0)].into_iter().collect();
    let shape = Shape::from_parameters(ShapeKind::RegularPolygon, &params).unwrap();
    let result = measure_with_id(&shape, "many-sided");
    assert_eq!(result.parameters.get("sides"), Some(1e10));
    assert_eq!(result.perimeter, 1e10);
}

#[test]
fn test_trapezoid_supplied_legs_are_not_cross_checked() {
    // Known gap: legs that cannot span the given height and widths are
    // accepted as long as they are positive.
    let params = baseline(ShapeKind::Trapezoid)
        .with("leftSide", 0.1)
        .with("rightSide", 100.0);
    let shape = Shape::from_parameters(ShapeKind::Trapezoid, &params).unwrap();
    let result = measure_with_id(&shape, "gap");
    assert!(result.is_ok());
    assert_eq!(result.perimeter, 4.0 + 10.0 + 0.1 + 100.0);
}

proptest! {
    #[test]
    fn prop_circle_formulas(r in 1e-3f64..1e6) {
        let circle = Circle::new(r).unwrap();
        prop_assert!(rel_eq(circle.perimeter(), 2.0 * PI * r));
        prop_assert!(rel_eq(circle.area(), PI * r * r));
    }

    #[test]
    fn prop_square_equals_rectangle(s in 1e-3f64..1e6) {
        let square: Shape = Square::new(s).unwrap().into();
        let rect: Shape = Rectangle::new(s, s).unwrap().into();
        let (a, b) = (measure_with_id(&square, "x"), measure_with_id(&rect, "x"));
        prop_assert_eq!(a.area, b.area);
        prop_assert_eq!(a.perimeter, b.perimeter);
    }

    #[test]
    fn prop_valid_triangles_measure_heron(
        a in 0.1f64..1e3,
        b in 0.1f64..1e3,
        t in 0.01f64..0.99,
    ) {
        let low = (a - b).abs();
        let c = low + t * ((a + b) - low);
        let triangle = Triangle::new(a, b, c).unwrap();
        let area = triangle.area().unwrap();
        let s = (a + b + c) / 2.0;
        let heron = (s * (s - a) * (s - b) * (s - c)).sqrt();
        prop_assert!(!area.is_nan());
        prop_assert_eq!(area, heron);
    }

    #[test]
    fn prop_measure_is_idempotent(kind_index in 0usize..18, scale in 0.1f64..100.0) {
        let kind = ShapeKind::ALL[kind_index];
        let params: Parameters = baseline(kind)
            .iter()
            .map(|(name, v)| match name {
                // Counts and angles don't scale with size
                "sides" | "angle" => (name.to_string(), v),
                _ => (name.to_string(), v * scale),
            })
            .collect();
        let shape = Shape::from_parameters(kind, &params).unwrap();
        let first = measure_with_id(&shape, "same");
        let second = measure_with_id(&shape, "same");
        prop_assert_eq!(first.area.to_bits(), second.area.to_bits());
        prop_assert_eq!(first.perimeter.to_bits(), second.perimeter.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_positive_radius_rejected(r in -1e6f64..=0.0) {
        prop_assert!(Circle::new(r).is_err());
        prop_assert!(Shape::from_parameters(ShapeKind::Sphere, &Parameters::new().with("radius", r)).is_err());
    }
}
