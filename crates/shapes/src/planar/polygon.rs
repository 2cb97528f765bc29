use std::f64::consts::PI;

use crate::error::ShapeOutcome;
use crate::params::Parameters;
use crate::validation::{require_polygon_sides, require_positive};

/// Regular n-gon given by side count and side length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    sides: f64,
    side_length: f64,
}

impl RegularPolygon {
    pub fn new(sides: u32, side_length: f64) -> ShapeOutcome<Self> {
        Self::from_side_count(f64::from(sides), side_length)
    }

    /// Build from a side count carried as a raw number, e.g. from [`Parameters`].
    ///
    /// The count is checked against the three-side minimum before anything else.
    pub fn from_side_count(sides: f64, side_length: f64) -> ShapeOutcome<Self> {
        require_polygon_sides(sides)?;
        require_positive(sides, "Number of sides")?;
        require_positive(side_length, "Side length")?;
        Ok(Self { sides, side_length })
    }

    /// Always a whole number of at least 3
    pub fn sides(&self) -> f64 {
        self.sides
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn area(&self) -> f64 {
        let n = self.sides;
        let s = self.side_length;
        (n * s * s) / (4.0 * (PI / n).tan())
    }

    pub fn perimeter(&self) -> f64 {
        self.sides * self.side_length
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("sides", self.sides)
            .with("sideLength", self.side_length)
    }
}
