use crate::error::{ShapeError, ShapeOutcome};
use crate::params::Parameters;
use crate::validation::{require_positive, require_triangle_inequality};

/// Triangle given by its three side lengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    side_a: f64,
    side_b: f64,
    side_c: f64,
}

impl Triangle {
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> ShapeOutcome<Self> {
        require_positive(side_a, "Side A")?;
        require_positive(side_b, "Side B")?;
        require_positive(side_c, "Side C")?;
        require_triangle_inequality(side_a, side_b, side_c)?;
        Ok(Self { side_a, side_b, side_c })
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.side_a, self.side_b, self.side_c)
    }

    /// Heron's formula.
    ///
    /// Near the inequality boundary the radicand can still round below zero;
    /// that surfaces as [`ShapeError::Computation`] rather than NaN.
    pub fn area(&self) -> ShapeOutcome<f64> {
        let (a, b, c) = self.sides();
        heron(a, b, c)
    }

    pub fn perimeter(&self) -> f64 {
        self.side_a + self.side_b + self.side_c
    }

    pub fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("sideA", self.side_a)
            .with("sideB", self.side_b)
            .with("sideC", self.side_c)
    }
}

fn heron(a: f64, b: f64, c: f64) -> ShapeOutcome<f64> {
    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).sqrt();
    if area.is_nan() {
        return Err(ShapeError::computation(format!(
            "Cannot calculate triangle area: the given sides cannot form a valid triangle. \
             Current values: a={a}, b={b}, c={c}"
        )));
    }
    Ok(area)
}
