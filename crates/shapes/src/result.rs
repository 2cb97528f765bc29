//! Uniform measurement entry point and the result record.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{ShapeError, ShapeOutcome};
use crate::kind::ShapeKind;
use crate::params::Parameters;
use crate::shape::Shape;

/// Outcome of measuring one shape.
///
/// On success `volume` and `surface_area` are present exactly for solids.
/// On failure `error` holds the diagnostic, `area` and `perimeter` are 0 and
/// the solid-only fields are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeResult {
    /// Caller-assigned or time-derived; uniqueness is not enforced
    pub id: String,
    pub kind: ShapeKind,
    pub area: f64,
    /// Perimeter for plane figures, boundary length for solids
    pub perimeter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<f64>,
    pub parameters: Parameters,
    pub error: Option<String>,
}

impl ShapeResult {
    /// Error record for input that never became a shape, or failed to measure
    pub fn failed(id: impl Into<String>, kind: ShapeKind, parameters: Parameters, error: &ShapeError) -> Self {
        Self {
            id: id.into(),
            kind,
            area: 0.0,
            perimeter: 0.0,
            volume: None,
            surface_area: None,
            parameters,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// The numeric part of a successful measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub area: f64,
    pub perimeter: f64,
    pub volume: Option<f64>,
    pub surface_area: Option<f64>,
}

impl Measurement {
    /// Measure a shape; NaN in any quantity is a [`ShapeError::Computation`].
    pub fn of(shape: &Shape) -> ShapeOutcome<Self> {
        let measurement = match shape {
            Shape::Planar(planar) => Measurement {
                area: planar.area()?,
                perimeter: planar.perimeter(),
                volume: None,
                surface_area: None,
            },
            Shape::Solid(solid) => Measurement {
                area: solid.area(),
                perimeter: solid.perimeter(),
                volume: Some(solid.volume()),
                surface_area: Some(solid.surface_area()),
            },
        };
        measurement.check_finite_numbers(shape.kind())?;
        Ok(measurement)
    }

    fn check_finite_numbers(&self, kind: ShapeKind) -> ShapeOutcome<()> {
        let quantities = [
            ("area", Some(self.area)),
            ("perimeter", Some(self.perimeter)),
            ("volume", self.volume),
            ("surface area", self.surface_area),
        ];
        for (name, value) in quantities {
            if value.is_some_and(f64::is_nan) {
                return Err(ShapeError::computation(format!(
                    "Cannot calculate {kind} {name}: the result is not a number"
                )));
            }
        }
        Ok(())
    }
}

/// Measure a shape under a time-derived id (milliseconds since the UNIX epoch).
pub fn measure(shape: &Shape) -> ShapeResult {
    measure_with_id(shape, timestamp_id())
}

/// Measure a shape under a caller-assigned id.
///
/// Never fails: computation errors land in [`ShapeResult::error`].
pub fn measure_with_id(shape: &Shape, id: impl Into<String>) -> ShapeResult {
    let kind = shape.kind();
    let parameters = shape.parameters();
    match Measurement::of(shape) {
        Ok(m) => ShapeResult {
            id: id.into(),
            kind,
            area: m.area,
            perimeter: m.perimeter,
            volume: m.volume,
            surface_area: m.surface_area,
            parameters,
            error: None,
        },
        Err(err) => ShapeResult::failed(id, kind, parameters, &err),
    }
}

fn timestamp_id() -> String {
    // A clock before 1970 yields "0"; ids are not required to be unique
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    millis.to_string()
}
