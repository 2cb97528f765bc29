use crate::error::ShapeOutcome;
use crate::params::Parameters;
use crate::validation::require_positive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    side: f64,
}

impl Cube {
    pub fn new(side: f64) -> ShapeOutcome<Self> {
        require_positive(side, "Side length")?;
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn volume(&self) -> f64 {
        self.side.powf(3.0)
    }

    pub fn surface_area(&self) -> f64 {
        6.0 * self.side.powi(2)
    }

    /// Sum of the twelve edges
    pub fn boundary(&self) -> f64 {
        12.0 * self.side
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new().with("side", self.side)
    }
}

/// Right pyramid over a square base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pyramid {
    base_length: f64,
    height: f64,
}

impl Pyramid {
    pub fn new(base_length: f64, height: f64) -> ShapeOutcome<Self> {
        require_positive(base_length, "Base length")?;
        require_positive(height, "Height")?;
        Ok(Self { base_length, height })
    }

    pub fn base_length(&self) -> f64 {
        self.base_length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Height of each triangular face, apex to base edge midpoint
    pub fn slant_height(&self) -> f64 {
        let half_base = self.base_length / 2.0;
        (self.height.powi(2) + half_base.powi(2)).sqrt()
    }

    pub fn volume(&self) -> f64 {
        (1.0 / 3.0) * self.base_length.powi(2) * self.height
    }

    pub fn surface_area(&self) -> f64 {
        let base_area = self.base_length.powi(2);
        let face_area = (self.base_length * self.slant_height()) / 2.0;
        base_area + 4.0 * face_area
    }

    /// Perimeter of the base
    pub fn boundary(&self) -> f64 {
        4.0 * self.base_length
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("baseLength", self.base_length)
            .with("height", self.height)
    }
}

/// Right prism over an arbitrary base, described by the base's area and perimeter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism {
    base_area: f64,
    base_perimeter: f64,
    height: f64,
}

impl Prism {
    pub fn new(base_area: f64, base_perimeter: f64, height: f64) -> ShapeOutcome<Self> {
        require_positive(base_area, "Base Area")?;
        require_positive(base_perimeter, "Base Perimeter")?;
        require_positive(height, "Height")?;
        Ok(Self {
            base_area,
            base_perimeter,
            height,
        })
    }

    pub fn base_area(&self) -> f64 {
        self.base_area
    }

    pub fn base_perimeter(&self) -> f64 {
        self.base_perimeter
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn volume(&self) -> f64 {
        self.base_area * self.height
    }

    /// Two bases plus the lateral faces
    pub fn surface_area(&self) -> f64 {
        2.0 * self.base_area + self.base_perimeter * self.height
    }

    pub fn boundary(&self) -> f64 {
        self.base_perimeter
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("baseArea", self.base_area)
            .with("basePerimeter", self.base_perimeter)
            .with("height", self.height)
    }
}
