//! The polymorphic shape value and its construction from raw parameters.

use crate::error::ShapeOutcome;
use crate::kind::ShapeKind;
use crate::params::Parameters;
use crate::planar::{
    Circle, Ellipse, Parallelogram, PlanarShape, Rectangle, RegularPolygon, Rhombus, Sector, Square,
    Trapezoid, TrapezoidLegs, Triangle,
};
use crate::solid::{Cone, Cube, Cylinder, Ellipsoid, Prism, Pyramid, SolidShape, Sphere, Torus};

/// A validated figure. The outer variant is the planar/solid capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Planar(PlanarShape),
    Solid(SolidShape),
}

impl Shape {
    /// Build a shape of `kind` from named raw numbers.
    ///
    /// Names are those listed by [`ShapeKind::parameter_names`]; unknown names
    /// are ignored. Trapezoid legs are optional and each missing leg is derived
    /// with the isosceles rule.
    pub fn from_parameters(kind: ShapeKind, params: &Parameters) -> ShapeOutcome<Self> {
        let p = |name: &str| params.require(name);

        let shape: Shape = match kind {
            ShapeKind::Circle => Circle::new(p("radius")?)?.into(),
            ShapeKind::Ellipse => Ellipse::new(p("radiusX")?, p("radiusY")?)?.into(),
            ShapeKind::Rectangle => Rectangle::new(p("length")?, p("width")?)?.into(),
            ShapeKind::Square => Square::new(p("side")?)?.into(),
            ShapeKind::Triangle => Triangle::new(p("sideA")?, p("sideB")?, p("sideC")?)?.into(),
            ShapeKind::RegularPolygon => {
                RegularPolygon::from_side_count(p("sides")?, p("sideLength")?)?.into()
            }
            ShapeKind::Trapezoid => trapezoid_from_parameters(params)?.into(),
            ShapeKind::Rhombus => Rhombus::new(p("side")?, p("diagonal1")?, p("diagonal2")?)?.into(),
            ShapeKind::Parallelogram => Parallelogram::new(p("base")?, p("side")?, p("height")?)?.into(),
            ShapeKind::Sector => Sector::new(p("radius")?, p("angle")?)?.into(),
            ShapeKind::Sphere => Sphere::new(p("radius")?)?.into(),
            ShapeKind::Cube => Cube::new(p("side")?)?.into(),
            ShapeKind::Cylinder => Cylinder::new(p("radius")?, p("height")?)?.into(),
            ShapeKind::Cone => Cone::new(p("radius")?, p("height")?)?.into(),
            ShapeKind::Pyramid => Pyramid::new(p("baseLength")?, p("height")?)?.into(),
            ShapeKind::Torus => Torus::new(p("majorRadius")?, p("minorRadius")?)?.into(),
            ShapeKind::Ellipsoid => Ellipsoid::new(p("radiusX")?, p("radiusY")?, p("radiusZ")?)?.into(),
            ShapeKind::Prism => Prism::new(p("baseArea")?, p("basePerimeter")?, p("height")?)?.into(),
        };
        Ok(shape)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Planar(s) => s.kind(),
            Shape::Solid(s) => s.kind(),
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Shape::Solid(_))
    }

    /// The numbers the shape was built from, in declaration order
    pub fn parameters(&self) -> Parameters {
        match self {
            Shape::Planar(s) => s.parameters(),
            Shape::Solid(s) => s.parameters(),
        }
    }
}

fn trapezoid_from_parameters(params: &Parameters) -> ShapeOutcome<Trapezoid> {
    let top = params.require("topWidth")?;
    let bottom = params.require("bottomWidth")?;
    let height = params.require("height")?;

    let legs = match (params.get("leftSide"), params.get("rightSide")) {
        (None, None) => TrapezoidLegs::Isosceles,
        (left, right) => {
            let derived = || Trapezoid::isosceles_leg(top, bottom, height);
            TrapezoidLegs::Supplied {
                left: left.unwrap_or_else(derived),
                right: right.unwrap_or_else(derived),
            }
        }
    };
    Trapezoid::new(top, bottom, height, legs)
}

impl From<PlanarShape> for Shape {
    fn from(shape: PlanarShape) -> Self {
        Shape::Planar(shape)
    }
}

impl From<SolidShape> for Shape {
    fn from(shape: SolidShape) -> Self {
        Shape::Solid(shape)
    }
}

macro_rules! impl_from_figure {
    ($family:ident => $($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Shape::from($family::from(shape))
                }
            }
        )*
    };
}

impl_from_figure!(PlanarShape =>
    Circle, Ellipse, Rectangle, Square, Triangle, RegularPolygon, Trapezoid, Rhombus, Parallelogram, Sector,
);
impl_from_figure!(SolidShape => Sphere, Cube, Cylinder, Cone, Pyramid, Torus, Ellipsoid, Prism);
