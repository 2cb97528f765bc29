//! Plane figures: area and perimeter.

mod polygon;
mod quad;
mod round;
mod triangle;

pub use polygon::RegularPolygon;
pub use quad::{Parallelogram, Rectangle, Rhombus, Square, Trapezoid, TrapezoidLegs};
pub use round::{Circle, Ellipse, Sector};
pub use triangle::Triangle;

use crate::error::ShapeOutcome;
use crate::kind::ShapeKind;
use crate::params::Parameters;

/// Any plane figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanarShape {
    Circle(Circle),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
    RegularPolygon(RegularPolygon),
    Trapezoid(Trapezoid),
    Rhombus(Rhombus),
    Parallelogram(Parallelogram),
    Sector(Sector),
}

impl PlanarShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            PlanarShape::Circle(_) => ShapeKind::Circle,
            PlanarShape::Ellipse(_) => ShapeKind::Ellipse,
            PlanarShape::Rectangle(_) => ShapeKind::Rectangle,
            PlanarShape::Square(_) => ShapeKind::Square,
            PlanarShape::Triangle(_) => ShapeKind::Triangle,
            PlanarShape::RegularPolygon(_) => ShapeKind::RegularPolygon,
            PlanarShape::Trapezoid(_) => ShapeKind::Trapezoid,
            PlanarShape::Rhombus(_) => ShapeKind::Rhombus,
            PlanarShape::Parallelogram(_) => ShapeKind::Parallelogram,
            PlanarShape::Sector(_) => ShapeKind::Sector,
        }
    }

    /// Only the triangle can fail here (Heron's radicand)
    pub fn area(&self) -> ShapeOutcome<f64> {
        Ok(match self {
            PlanarShape::Circle(s) => s.area(),
            PlanarShape::Ellipse(s) => s.area(),
            PlanarShape::Rectangle(s) => s.area(),
            PlanarShape::Square(s) => s.area(),
            PlanarShape::Triangle(s) => s.area()?,
            PlanarShape::RegularPolygon(s) => s.area(),
            PlanarShape::Trapezoid(s) => s.area(),
            PlanarShape::Rhombus(s) => s.area(),
            PlanarShape::Parallelogram(s) => s.area(),
            PlanarShape::Sector(s) => s.area(),
        })
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            PlanarShape::Circle(s) => s.perimeter(),
            PlanarShape::Ellipse(s) => s.perimeter(),
            PlanarShape::Rectangle(s) => s.perimeter(),
            PlanarShape::Square(s) => s.perimeter(),
            PlanarShape::Triangle(s) => s.perimeter(),
            PlanarShape::RegularPolygon(s) => s.perimeter(),
            PlanarShape::Trapezoid(s) => s.perimeter(),
            PlanarShape::Rhombus(s) => s.perimeter(),
            PlanarShape::Parallelogram(s) => s.perimeter(),
            PlanarShape::Sector(s) => s.perimeter(),
        }
    }

    pub fn parameters(&self) -> Parameters {
        match self {
            PlanarShape::Circle(s) => s.parameters(),
            PlanarShape::Ellipse(s) => s.parameters(),
            PlanarShape::Rectangle(s) => s.parameters(),
            PlanarShape::Square(s) => s.parameters(),
            PlanarShape::Triangle(s) => s.parameters(),
            PlanarShape::RegularPolygon(s) => s.parameters(),
            PlanarShape::Trapezoid(s) => s.parameters(),
            PlanarShape::Rhombus(s) => s.parameters(),
            PlanarShape::Parallelogram(s) => s.parameters(),
            PlanarShape::Sector(s) => s.parameters(),
        }
    }
}

macro_rules! impl_from_planar {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for PlanarShape {
                fn from(shape: $ty) -> Self {
                    PlanarShape::$ty(shape)
                }
            }
        )*
    };
}

impl_from_planar!(
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
);
