//! Solid figures: volume, surface area and a boundary length.
//!
//! For uniform reporting alongside plane figures every solid also answers
//! `area` (its surface area) and `perimeter` (its boundary: a base
//! circumference, an edge sum and so on, depending on the figure).

mod polyhedral;
mod round;

pub use polyhedral::{Cube, Prism, Pyramid};
pub use round::{Cone, Cylinder, Ellipsoid, Sphere, Torus};

use crate::kind::ShapeKind;
use crate::params::Parameters;

/// Any solid figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidShape {
    Sphere(Sphere),
    Cube(Cube),
    Cylinder(Cylinder),
    Cone(Cone),
    Pyramid(Pyramid),
    Torus(Torus),
    Ellipsoid(Ellipsoid),
    Prism(Prism),
}

impl SolidShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            SolidShape::Sphere(_) => ShapeKind::Sphere,
            SolidShape::Cube(_) => ShapeKind::Cube,
            SolidShape::Cylinder(_) => ShapeKind::Cylinder,
            SolidShape::Cone(_) => ShapeKind::Cone,
            SolidShape::Pyramid(_) => ShapeKind::Pyramid,
            SolidShape::Torus(_) => ShapeKind::Torus,
            SolidShape::Ellipsoid(_) => ShapeKind::Ellipsoid,
            SolidShape::Prism(_) => ShapeKind::Prism,
        }
    }

    pub fn volume(&self) -> f64 {
        match self {
            SolidShape::Sphere(s) => s.volume(),
            SolidShape::Cube(s) => s.volume(),
            SolidShape::Cylinder(s) => s.volume(),
            SolidShape::Cone(s) => s.volume(),
            SolidShape::Pyramid(s) => s.volume(),
            SolidShape::Torus(s) => s.volume(),
            SolidShape::Ellipsoid(s) => s.volume(),
            SolidShape::Prism(s) => s.volume(),
        }
    }

    pub fn surface_area(&self) -> f64 {
        match self {
            SolidShape::Sphere(s) => s.surface_area(),
            SolidShape::Cube(s) => s.surface_area(),
            SolidShape::Cylinder(s) => s.surface_area(),
            SolidShape::Cone(s) => s.surface_area(),
            SolidShape::Pyramid(s) => s.surface_area(),
            SolidShape::Torus(s) => s.surface_area(),
            SolidShape::Ellipsoid(s) => s.surface_area(),
            SolidShape::Prism(s) => s.surface_area(),
        }
    }

    /// Alias of [`SolidShape::surface_area`]
    pub fn area(&self) -> f64 {
        self.surface_area()
    }

    /// Figure-specific boundary length, reported in the perimeter slot
    pub fn perimeter(&self) -> f64 {
        match self {
            SolidShape::Sphere(s) => s.boundary(),
            SolidShape::Cube(s) => s.boundary(),
            SolidShape::Cylinder(s) => s.boundary(),
            SolidShape::Cone(s) => s.boundary(),
            SolidShape::Pyramid(s) => s.boundary(),
            SolidShape::Torus(s) => s.boundary(),
            SolidShape::Ellipsoid(s) => s.boundary(),
            SolidShape::Prism(s) => s.boundary(),
        }
    }

    pub fn parameters(&self) -> Parameters {
        match self {
            SolidShape::Sphere(s) => s.parameters(),
            SolidShape::Cube(s) => s.parameters(),
            SolidShape::Cylinder(s) => s.parameters(),
            SolidShape::Cone(s) => s.parameters(),
            SolidShape::Pyramid(s) => s.parameters(),
            SolidShape::Torus(s) => s.parameters(),
            SolidShape::Ellipsoid(s) => s.parameters(),
            SolidShape::Prism(s) => s.parameters(),
        }
    }
}

macro_rules! impl_from_solid {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for SolidShape {
                fn from(shape: $ty) -> Self {
                    SolidShape::$ty(shape)
                }
            }
        )*
    };
}

impl_from_solid!(Sphere, Cube, Cylinder, Cone, Pyramid, Torus, Ellipsoid, Prism);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_aliases_surface_area() {
        let solids: Vec<SolidShape> = vec![
            Sphere::new(1.5).unwrap().into(),
            Cube::new(2.0).unwrap().into(),
            Torus::new(4.0, 1.0).unwrap().into(),
            Prism::new(3.0, 8.0, 2.0).unwrap().into(),
        ];
        for solid in solids {
            assert_eq!(solid.area(), solid.surface_area(), "{:?}", solid.kind());
            assert!(solid.kind().is_solid());
        }
    }

    #[test]
    fn test_perimeter_is_boundary() {
        let cube: SolidShape = Cube::new(2.0).unwrap().into();
        assert_eq!(cube.perimeter(), 24.0);
    }
}
