//! Geometric consistency checks shared by the shape constructors.
//!
//! Each check is a free function over the values it inspects plus a label
//! for diagnostics, so a constructor composes only the rules it needs:
//!
//! ```
//! use shapes::validation::{require_positive, require_triangle_inequality};
//!
//! # fn main() -> Result<(), shapes::ShapeError> {
//! require_positive(3.0, "Side A")?;
//! require_triangle_inequality(3.0, 4.0, 5.0)?;
//! # Ok(())
//! # }
//! ```

use crate::error::{ShapeError, ShapeOutcome};

/// Relative tolerance for the rhombus identity `4·side² = d1² + d2²`
pub const RHOMBUS_TOLERANCE: f64 = 0.001;

/// Smallest number of sides a polygon can have
pub const MIN_POLYGON_SIDES: f64 = 3.0;

/// Largest sector angle, in degrees
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Lengths, radii, areas and angle magnitudes must be strictly positive.
///
/// NaN is not greater than zero and is rejected as well.
pub fn require_positive(value: f64, name: &str) -> ShapeOutcome<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::validation(format!("{name} must be a positive number")))
    }
}

/// Each side must be strictly shorter than the sum of the other two
pub fn require_triangle_inequality(a: f64, b: f64, c: f64) -> ShapeOutcome<()> {
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(ShapeError::validation(format!(
            "Invalid triangle dimensions: the sum of any two sides must be greater than the third side. \
             Current values: a={a}, b={b}, c={c}"
        )));
    }
    Ok(())
}

/// A polygon needs at least three sides, and a whole number of them
pub fn require_polygon_sides(sides: f64) -> ShapeOutcome<()> {
    if !(sides >= MIN_POLYGON_SIDES) {
        return Err(ShapeError::validation(format!(
            "A polygon must have at least 3 sides. Current value: sides={sides}"
        )));
    }
    if sides.fract() != 0.0 {
        return Err(ShapeError::validation(format!(
            "Number of sides must be a whole number. Current value: sides={sides}"
        )));
    }
    Ok(())
}

/// The slanted side of a parallelogram can't be shorter than its height
pub fn require_height_within_side(side: f64, height: f64) -> ShapeOutcome<()> {
    if height > side {
        return Err(ShapeError::validation(format!(
            "Invalid parallelogram dimensions: the height cannot be greater than the side. \
             Current values: side={side}, height={height}"
        )));
    }
    Ok(())
}

/// `4·side²` must match `d1² + d2²` within [`RHOMBUS_TOLERANCE`] of `4·side²`
pub fn require_rhombus_diagonals(side: f64, diagonal1: f64, diagonal2: f64) -> ShapeOutcome<()> {
    let lhs = 4.0 * side.powi(2);
    let rhs = diagonal1.powi(2) + diagonal2.powi(2);
    if (lhs - rhs).abs() > RHOMBUS_TOLERANCE * lhs {
        return Err(ShapeError::validation(format!(
            "Invalid rhombus dimensions: the diagonals and side length are incompatible. \
             4 * side^2 should equal diagonal1^2 + diagonal2^2. \
             Current values: side={side}, diagonal1={diagonal1}, diagonal2={diagonal2}"
        )));
    }
    Ok(())
}

/// Sector angle in degrees, within `(0, 360]`
pub fn require_sector_angle(angle: f64) -> ShapeOutcome<()> {
    if !(angle > 0.0 && angle <= FULL_TURN_DEGREES) {
        return Err(ShapeError::validation(format!(
            "Invalid sector angle: the angle must be between 0 and 360 degrees. \
             Current value: angle={angle}"
        )));
    }
    Ok(())
}

/// Torus tube radius must be strictly smaller than the ring radius
pub fn require_radii_ordered(major_radius: f64, minor_radius: f64) -> ShapeOutcome<()> {
    if minor_radius >= major_radius {
        return Err(ShapeError::validation(format!(
            "Invalid torus dimensions: the minor radius must be less than the major radius. \
             Current values: majorRadius={major_radius}, minorRadius={minor_radius}"
        )));
    }
    Ok(())
}
