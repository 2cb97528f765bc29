use std::f64::consts::PI;

use crate::error::ShapeOutcome;
use crate::params::Parameters;
use crate::validation::{require_positive, require_radii_ordered};

/// Exponent of Knud Thomsen's ellipsoid surface approximation
const THOMSEN_P: f64 = 1.6075;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> ShapeOutcome<Self> {
        require_positive(radius, "Radius")?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius.powf(3.0)
    }

    pub fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius.powi(2)
    }

    /// Great-circle circumference
    pub fn boundary(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new().with("radius", self.radius)
    }
}

/// Right circular cylinder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
    height: f64,
}

impl Cylinder {
    pub fn new(radius: f64, height: f64) -> ShapeOutcome<Self> {
        require_positive(radius, "Radius")?;
        require_positive(height, "Height")?;
        Ok(Self { radius, height })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.height
    }

    pub fn surface_area(&self) -> f64 {
        2.0 * PI * self.radius.powi(2) + 2.0 * PI * self.radius * self.height
    }

    /// Circumferences of both end caps
    pub fn boundary(&self) -> f64 {
        4.0 * PI * self.radius
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("radius", self.radius)
            .with("height", self.height)
    }
}

/// Right circular cone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    radius: f64,
    height: f64,
}

impl Cone {
    pub fn new(radius: f64, height: f64) -> ShapeOutcome<Self> {
        require_positive(radius, "Radius")?;
        require_positive(height, "Height")?;
        Ok(Self { radius, height })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn slant_height(&self) -> f64 {
        (self.radius.powi(2) + self.height.powi(2)).sqrt()
    }

    pub fn volume(&self) -> f64 {
        (1.0 / 3.0) * PI * self.radius.powi(2) * self.height
    }

    /// Base disc plus lateral surface
    pub fn surface_area(&self) -> f64 {
        PI * self.radius.powi(2) + PI * self.radius * self.slant_height()
    }

    /// Base circumference
    pub fn boundary(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("radius", self.radius)
            .with("height", self.height)
    }
}

/// Ring torus: `major_radius` to the tube centre, `minor_radius` of the tube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    major_radius: f64,
    minor_radius: f64,
}

impl Torus {
    pub fn new(major_radius: f64, minor_radius: f64) -> ShapeOutcome<Self> {
        require_positive(major_radius, "Major Radius")?;
        require_positive(minor_radius, "Minor Radius")?;
        require_radii_ordered(major_radius, minor_radius)?;
        Ok(Self {
            major_radius,
            minor_radius,
        })
    }

    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    pub fn volume(&self) -> f64 {
        2.0 * PI.powi(2) * self.major_radius * self.minor_radius.powi(2)
    }

    pub fn surface_area(&self) -> f64 {
        4.0 * PI.powi(2) * self.major_radius * self.minor_radius
    }

    /// Outer equator circumference
    pub fn boundary(&self) -> f64 {
        2.0 * PI * (self.major_radius + self.minor_radius)
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("majorRadius", self.major_radius)
            .with("minorRadius", self.minor_radius)
    }
}

/// Triaxial ellipsoid given by its semi-axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radius_x: f64,
    radius_y: f64,
    radius_z: f64,
}

impl Ellipsoid {
    pub fn new(radius_x: f64, radius_y: f64, radius_z: f64) -> ShapeOutcome<Self> {
        require_positive(radius_x, "Radius X")?;
        require_positive(radius_y, "Radius Y")?;
        require_positive(radius_z, "Radius Z")?;
        Ok(Self {
            radius_x,
            radius_y,
            radius_z,
        })
    }

    pub fn radii(&self) -> (f64, f64, f64) {
        (self.radius_x, self.radius_y, self.radius_z)
    }

    pub fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius_x * self.radius_y * self.radius_z
    }

    /// Knud Thomsen's approximation, relative error within about 1.06%
    pub fn surface_area(&self) -> f64 {
        let (a, b, c) = self.radii();
        let ab = (a * b).powf(THOMSEN_P);
        let ac = (a * c).powf(THOMSEN_P);
        let bc = (b * c).powf(THOMSEN_P);
        4.0 * PI * ((ab + ac + bc) / 3.0).powf(1.0 / THOMSEN_P)
    }

    /// Circumference of the largest principal circle
    pub fn boundary(&self) -> f64 {
        let max_radius = self.radius_x.max(self.radius_y).max(self.radius_z);
        2.0 * PI * max_radius
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("radiusX", self.radius_x)
            .with("radiusY", self.radius_y)
            .with("radiusZ", self.radius_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_sphere() {
        let s = Sphere::new(3.0).unwrap();
        assert!(approx(s.volume(), 36.0 * PI));
        assert!(approx(s.surface_area(), 36.0 * PI));
        assert!(approx(s.boundary(), 6.0 * PI));
    }

    #[test]
    fn test_cylinder() {
        let c = Cylinder::new(2.0, 5.0).unwrap();
        assert!(approx(c.volume(), 20.0 * PI));
        assert!(approx(c.surface_area(), 8.0 * PI + 20.0 * PI));
        assert!(approx(c.boundary(), 8.0 * PI));
        assert!(Cylinder::new(2.0, 0.0).is_err());
    }

    #[test]
    fn test_cone() {
        let c = Cone::new(3.0, 4.0).unwrap();
        assert_eq!(c.slant_height(), 5.0);
        assert!(approx(c.volume(), 12.0 * PI));
        assert!(approx(c.surface_area(), 9.0 * PI + 15.0 * PI));
        assert!(approx(c.boundary(), 6.0 * PI));
    }

    #[test]
    fn test_torus_radius_ordering() {
        assert!(Torus::new(5.0, 6.0).is_err());
        assert!(Torus::new(5.0, 5.0).is_err());
        let t = Torus::new(5.0, 3.0).unwrap();
        assert!(approx(t.volume(), 2.0 * PI * PI * 5.0 * 9.0));
        assert!(approx(t.surface_area(), 4.0 * PI * PI * 15.0));
        assert!(approx(t.boundary(), 16.0 * PI));
    }

    #[test]
    fn test_ellipsoid_sphere_case() {
        // With equal axes Thomsen's formula reduces to 4πr² exactly
        let e = Ellipsoid::new(2.0, 2.0, 2.0).unwrap();
        let s = Sphere::new(2.0).unwrap();
        assert!(approx(e.volume(), s.volume()));
        assert!(approx(e.surface_area(), s.surface_area()));
    }

    #[test]
    fn test_ellipsoid_boundary_uses_largest_axis() {
        let e = Ellipsoid::new(1.0, 4.0, 2.0).unwrap();
        assert!(approx(e.boundary(), 8.0 * PI));
        assert!(Ellipsoid::new(1.0, 1.0, -1.0).is_err());
    }
}
