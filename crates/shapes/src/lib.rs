//! Closed-form measurements for plane and solid figures.
//!
//! Build a [`Shape`] from validated numbers, then hand it to [`measure`]:
//!
//! ```
//! use shapes::{measure_with_id, planar::Rhombus, Shape};
//!
//! # fn main() -> Result<(), shapes::ShapeError> {
//! let shape: Shape = Rhombus::new(5.0, 6.0, 8.0)?.into();
//! let result = measure_with_id(&shape, "r1");
//! assert_eq!(result.area, 24.0);
//! assert!(result.volume.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! Invalid input never produces a shape; it fails at construction with
//! [`ShapeError::Validation`]. Numeric trouble found while measuring is
//! reported in [`ShapeResult::error`] instead.

pub mod calculator;
pub mod comparison;
mod error;
pub mod history;
mod kind;
mod params;
pub mod planar;
mod result;
mod shape;
pub mod solid;
pub mod validation;

pub use comparison::{measure_all, ComparisonSummary};
pub use error::{ShapeError, ShapeErrorKind, ShapeOutcome};
pub use history::{History, SavedResults};
pub use kind::ShapeKind;
pub use params::Parameters;
pub use planar::PlanarShape;
pub use result::{measure, measure_with_id, Measurement, ShapeResult};
pub use shape::Shape;
pub use solid::SolidShape;
