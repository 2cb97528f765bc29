use serde::{Deserialize, Serialize};

/// Result of building or measuring a shape
pub type ShapeOutcome<T> = Result<T, ShapeError>;

/// Failures raised by the geometry core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// Malformed or geometrically inconsistent input, raised at construction
    #[error("{0}")]
    Validation(String),
    /// Numeric degeneracy discovered while measuring
    #[error("{0}")]
    Computation(String),
}

/// Discriminant of [`ShapeError`], for callers that branch on the failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeErrorKind {
    Validation,
    Computation,
}

impl ShapeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ShapeError::Validation(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        ShapeError::Computation(msg.into())
    }

    pub fn kind(&self) -> ShapeErrorKind {
        match self {
            ShapeError::Validation(_) => ShapeErrorKind::Validation,
            ShapeError::Computation(_) => ShapeErrorKind::Computation,
        }
    }

    /// Diagnostic text without the variant wrapper
    pub fn message(&self) -> &str {
        match self {
            ShapeError::Validation(msg) | ShapeError::Computation(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let err = ShapeError::validation("Radius must be a positive number");
        assert_eq!(err.to_string(), "Radius must be a positive number");
        assert_eq!(err.message(), "Radius must be a positive number");
    }

    #[test]
    fn test_kind_discriminant() {
        assert_eq!(ShapeError::validation("x").kind(), ShapeErrorKind::Validation);
        assert_eq!(ShapeError::computation("x").kind(), ShapeErrorKind::Computation);
        let json = serde_json::to_string(&ShapeErrorKind::Computation).unwrap();
        assert_eq!(json, r#""computation""#);
    }
}
