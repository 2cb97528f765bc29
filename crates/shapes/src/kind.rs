//! Catalogue of supported figures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Kind tag of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    // ── Planar ──
    Circle,
    Ellipse,
    Rectangle,
    Square,
    Triangle,
    RegularPolygon,
    Trapezoid,
    Rhombus,
    Parallelogram,
    Sector,

    // ── Solid ──
    Sphere,
    Cube,
    Cylinder,
    Cone,
    Pyramid,
    Torus,
    Ellipsoid,
    Prism,
}

impl ShapeKind {
    /// All kinds, planar first, in catalogue order
    pub const ALL: [ShapeKind; 18] = [
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::RegularPolygon,
        ShapeKind::Trapezoid,
        ShapeKind::Rhombus,
        ShapeKind::Parallelogram,
        ShapeKind::Sector,
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
        ShapeKind::Torus,
        ShapeKind::Ellipsoid,
        ShapeKind::Prism,
    ];

    /// Display name, e.g. `RegularPolygon`
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::RegularPolygon => "RegularPolygon",
            ShapeKind::Trapezoid => "Trapezoid",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::Parallelogram => "Parallelogram",
            ShapeKind::Sector => "Sector",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cube => "Cube",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Pyramid => "Pyramid",
            ShapeKind::Torus => "Torus",
            ShapeKind::Ellipsoid => "Ellipsoid",
            ShapeKind::Prism => "Prism",
        }
    }

    /// snake_case identifier, matching the serde representation
    pub fn ident(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::RegularPolygon => "regular_polygon",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Sector => "sector",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Torus => "torus",
            ShapeKind::Ellipsoid => "ellipsoid",
            ShapeKind::Prism => "prism",
        }
    }

    /// Solids report volume and surface area in addition to area/perimeter
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            ShapeKind::Sphere
                | ShapeKind::Cube
                | ShapeKind::Cylinder
                | ShapeKind::Cone
                | ShapeKind::Pyramid
                | ShapeKind::Torus
                | ShapeKind::Ellipsoid
                | ShapeKind::Prism
        )
    }

    /// Parameter names in declaration order.
    ///
    /// Trapezoid's `leftSide` and `rightSide` are optional on input but are
    /// always reported back, derived or not.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Circle => &["radius"],
            ShapeKind::Ellipse => &["radiusX", "radiusY"],
            ShapeKind::Rectangle => &["length", "width"],
            ShapeKind::Square => &["side"],
            ShapeKind::Triangle => &["sideA", "sideB", "sideC"],
            ShapeKind::RegularPolygon => &["sides", "sideLength"],
            ShapeKind::Trapezoid => &["topWidth", "bottomWidth", "height", "leftSide", "rightSide"],
            ShapeKind::Rhombus => &["side", "diagonal1", "diagonal2"],
            ShapeKind::Parallelogram => &["base", "side", "height"],
            ShapeKind::Sector => &["radius", "angle"],
            ShapeKind::Sphere => &["radius"],
            ShapeKind::Cube => &["side"],
            ShapeKind::Cylinder => &["radius", "height"],
            ShapeKind::Cone => &["radius", "height"],
            ShapeKind::Pyramid => &["baseLength", "height"],
            ShapeKind::Torus => &["majorRadius", "minorRadius"],
            ShapeKind::Ellipsoid => &["radiusX", "radiusY", "radiusZ"],
            ShapeKind::Prism => &["baseArea", "basePerimeter", "height"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Accepts either the display name (`RegularPolygon`) or the snake_case ident.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s || kind.ident() == s)
            .ok_or_else(|| ShapeError::validation(format!("Unknown shape kind: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_planar_eight_solid() {
        let solids = ShapeKind::ALL.iter().filter(|k| k.is_solid()).count();
        assert_eq!(solids, 8);
        assert_eq!(ShapeKind::ALL.len() - solids, 10);
    }

    #[test]
    fn test_ident_matches_serde() {
        for kind in ShapeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.ident()));
        }
    }

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!("RegularPolygon".parse::<ShapeKind>(), Ok(ShapeKind::RegularPolygon));
        assert_eq!("regular_polygon".parse::<ShapeKind>(), Ok(ShapeKind::RegularPolygon));
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }
}
