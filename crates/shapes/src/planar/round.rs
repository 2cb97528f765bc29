use std::f64::consts::PI;

use crate::error::ShapeOutcome;
use crate::params::Parameters;
use crate::validation::{require_positive, require_sector_angle, FULL_TURN_DEGREES};

/// Circle of a given radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> ShapeOutcome<Self> {
        require_positive(radius, "Radius")?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new().with("radius", self.radius)
    }
}

/// Axis-aligned ellipse given by its two semi-axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(radius_x: f64, radius_y: f64) -> ShapeOutcome<Self> {
        require_positive(radius_x, "Radius X")?;
        require_positive(radius_y, "Radius Y")?;
        Ok(Self { radius_x, radius_y })
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    pub fn area(&self) -> f64 {
        PI * self.radius_x * self.radius_y
    }

    /// Ramanujan's second approximation
    pub fn perimeter(&self) -> f64 {
        let (a, b) = (self.radius_x, self.radius_y);
        let h = ((a - b) / (a + b)).powi(2);
        PI * (a + b) * (1.0 + (3.0 * h) / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("radiusX", self.radius_x)
            .with("radiusY", self.radius_y)
    }
}

/// Circular sector; `angle` is the central angle in degrees, `(0, 360]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    radius: f64,
    angle: f64,
}

impl Sector {
    pub fn new(radius: f64, angle: f64) -> ShapeOutcome<Self> {
        require_positive(radius, "Radius")?;
        require_sector_angle(angle)?;
        Ok(Self { radius, angle })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn area(&self) -> f64 {
        (self.angle / FULL_TURN_DEGREES) * PI * self.radius.powi(2)
    }

    /// Two radii plus the arc
    pub fn perimeter(&self) -> f64 {
        2.0 * self.radius + self.radius * self.angle * (PI / 180.0)
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("radius", self.radius)
            .with("angle", self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_circle() {
        let c = Circle::new(2.0).unwrap();
        assert!(approx(c.area(), PI * 4.0));
        assert!(approx(c.perimeter(), 4.0 * PI));
        assert!(Circle::new(0.0).is_err());
        assert!(Circle::new(-1.0).is_err());
    }

    #[test]
    fn test_ellipse_with_equal_axes_is_a_circle() {
        let e = Ellipse::new(3.0, 3.0).unwrap();
        let c = Circle::new(3.0).unwrap();
        assert!(approx(e.area(), c.area()));
        assert!(approx(e.perimeter(), c.perimeter()));
    }

    #[test]
    fn test_ellipse_ramanujan() {
        let e = Ellipse::new(5.0, 3.0).unwrap();
        // h = (2/8)^2 = 0.0625
        let h: f64 = 0.0625;
        let expected = PI * 8.0 * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
        assert!(approx(e.perimeter(), expected));
        assert!(approx(e.area(), 15.0 * PI));
        assert!(Ellipse::new(1.0, 0.0).is_err());
    }

    #[test]
    fn test_sector_full_turn_is_circle() {
        let s = Sector::new(2.0, 360.0).unwrap();
        assert!(approx(s.area(), PI * 4.0));
        assert!(approx(s.perimeter(), 4.0 + 4.0 * PI));
    }

    #[test]
    fn test_sector_angle_bounds() {
        assert!(Sector::new(2.0, 0.0).is_err());
        assert!(Sector::new(2.0, 361.0).is_err());
        assert!(Sector::new(0.0, 90.0).is_err());
        let quarter = Sector::new(2.0, 90.0).unwrap();
        assert!(approx(quarter.area(), PI));
    }
}
