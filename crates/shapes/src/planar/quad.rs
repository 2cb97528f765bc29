use crate::error::ShapeOutcome;
use crate::params::Parameters;
use crate::validation::{require_height_within_side, require_positive, require_rhombus_diagonals};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> ShapeOutcome<Self> {
        require_positive(length, "Length")?;
        require_positive(width, "Width")?;
        Ok(Self { length, width })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("length", self.length)
            .with("width", self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> ShapeOutcome<Self> {
        require_positive(side, "Side length")?;
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    pub fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new().with("side", self.side)
    }
}

/// How a trapezoid's slanted legs are obtained
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrapezoidLegs {
    /// Both legs derived from the widths and height, isosceles assumption
    Isosceles,
    /// Caller-supplied legs; checked for positivity only
    Supplied { left: f64, right: f64 },
}

/// Trapezoid with horizontal parallel sides `top_width` and `bottom_width`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    top_width: f64,
    bottom_width: f64,
    height: f64,
    left_side: f64,
    right_side: f64,
}

impl Trapezoid {
    pub fn new(top_width: f64, bottom_width: f64, height: f64, legs: TrapezoidLegs) -> ShapeOutcome<Self> {
        require_positive(top_width, "Top width")?;
        require_positive(bottom_width, "Bottom width")?;
        require_positive(height, "Height")?;

        let (left_side, right_side) = match legs {
            TrapezoidLegs::Isosceles => {
                let leg = Self::isosceles_leg(top_width, bottom_width, height);
                (leg, leg)
            }
            TrapezoidLegs::Supplied { left, right } => {
                // No cross-check against the widths and height: any positive
                // pair is accepted, even one that can't close the figure.
                require_positive(left, "Left side")?;
                require_positive(right, "Right side")?;
                (left, right)
            }
        };

        Ok(Self {
            top_width,
            bottom_width,
            height,
            left_side,
            right_side,
        })
    }

    /// Isosceles trapezoid, both legs derived
    pub fn isosceles(top_width: f64, bottom_width: f64, height: f64) -> ShapeOutcome<Self> {
        Self::new(top_width, bottom_width, height, TrapezoidLegs::Isosceles)
    }

    /// Leg length of an isosceles trapezoid: `sqrt(h² + (|bottom − top| / 2)²)`
    pub fn isosceles_leg(top_width: f64, bottom_width: f64, height: f64) -> f64 {
        let overhang = (bottom_width - top_width).abs() / 2.0;
        (height * height + overhang * overhang).sqrt()
    }

    pub fn top_width(&self) -> f64 {
        self.top_width
    }

    pub fn bottom_width(&self) -> f64 {
        self.bottom_width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left_side(&self) -> f64 {
        self.left_side
    }

    pub fn right_side(&self) -> f64 {
        self.right_side
    }

    pub fn area(&self) -> f64 {
        ((self.top_width + self.bottom_width) / 2.0) * self.height
    }

    pub fn perimeter(&self) -> f64 {
        self.top_width + self.bottom_width + self.left_side + self.right_side
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("topWidth", self.top_width)
            .with("bottomWidth", self.bottom_width)
            .with("height", self.height)
            .with("leftSide", self.left_side)
            .with("rightSide", self.right_side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rhombus {
    side: f64,
    diagonal1: f64,
    diagonal2: f64,
}

impl Rhombus {
    pub fn new(side: f64, diagonal1: f64, diagonal2: f64) -> ShapeOutcome<Self> {
        require_positive(side, "Side")?;
        require_positive(diagonal1, "Diagonal 1")?;
        require_positive(diagonal2, "Diagonal 2")?;
        require_rhombus_diagonals(side, diagonal1, diagonal2)?;
        Ok(Self {
            side,
            diagonal1,
            diagonal2,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn diagonals(&self) -> (f64, f64) {
        (self.diagonal1, self.diagonal2)
    }

    pub fn area(&self) -> f64 {
        (self.diagonal1 * self.diagonal2) / 2.0
    }

    pub fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("side", self.side)
            .with("diagonal1", self.diagonal1)
            .with("diagonal2", self.diagonal2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallelogram {
    base: f64,
    side: f64,
    height: f64,
}

impl Parallelogram {
    pub fn new(base: f64, side: f64, height: f64) -> ShapeOutcome<Self> {
        require_positive(base, "Base")?;
        require_positive(side, "Side")?;
        require_positive(height, "Height")?;
        require_height_within_side(side, height)?;
        Ok(Self { base, side, height })
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.base * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.base + self.side)
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("base", self.base)
            .with("side", self.side)
            .with("height", self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn test_rectangle() {
        let r = Rectangle::new(3.0, 4.0).unwrap();
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.perimeter(), 14.0);
        assert!(Rectangle::new(3.0, 0.0).is_err());
    }

    #[test]
    fn test_square_matches_rectangle() {
        let s = Square::new(2.5).unwrap();
        let r = Rectangle::new(2.5, 2.5).unwrap();
        assert_eq!(s.area(), r.area());
        assert_eq!(s.perimeter(), r.perimeter());
    }

    #[test]
    fn test_isosceles_trapezoid_derives_legs() {
        let t = Trapezoid::isosceles(4.0, 10.0, 4.0).unwrap();
        // overhang 3, height 4
        assert_eq!(t.left_side(), 5.0);
        assert_eq!(t.right_side(), 5.0);
        assert_eq!(t.area(), 28.0);
        assert_eq!(t.perimeter(), 24.0);
    }

    #[test]
    fn test_isosceles_leg_is_symmetric_in_widths() {
        assert_eq!(
            Trapezoid::isosceles_leg(10.0, 4.0, 4.0),
            Trapezoid::isosceles_leg(4.0, 10.0, 4.0)
        );
        // Equal widths: the legs are vertical
        assert_eq!(Trapezoid::isosceles_leg(3.0, 3.0, 2.0), 2.0);
    }

    #[test]
    fn test_supplied_legs_only_checked_for_positivity() {
        // Legs far too short to reach across a height of 10; accepted as-is.
        let t = Trapezoid::new(2.0, 4.0, 10.0, TrapezoidLegs::Supplied { left: 0.5, right: 0.5 }).unwrap();
        assert_eq!(t.perimeter(), 7.0);

        let err = Trapezoid::new(2.0, 4.0, 1.0, TrapezoidLegs::Supplied { left: 1.0, right: 0.0 }).unwrap_err();
        assert_eq!(err, ShapeError::validation("Right side must be a positive number"));
    }

    #[test]
    fn test_rhombus_consistency() {
        let r = Rhombus::new(5.0, 6.0, 8.0).unwrap();
        assert_eq!(r.area(), 24.0);
        assert_eq!(r.perimeter(), 20.0);
        assert!(Rhombus::new(5.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_parallelogram_height_bound() {
        let p = Parallelogram::new(6.0, 5.0, 5.0).unwrap();
        assert_eq!(p.area(), 30.0);
        assert_eq!(p.perimeter(), 22.0);
        let err = Parallelogram::new(6.0, 5.0, 6.0).unwrap_err();
        assert!(err.message().contains("side=5, height=6"));
    }
}
