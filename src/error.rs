// src/error.rs
use thiserror::Error;

/// Error types for the options-analytics library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Input outside its financial domain (S ≤ 0, K ≤ 0, σ < 0, T < 0, NaN...)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// The closed-form formulas would divide by zero (σ = 0 with T > 0)
    #[error("Division singularity in {operation}: {reason}")]
    DivisionSingularity { operation: String, reason: String },

    /// Sampling range misconfiguration
    #[error("Invalid range for '{field}': {reason}")]
    InvalidRange { field: String, reason: String },

    /// Strategy template lookup miss
    #[error("Unknown strategy template '{name}'")]
    UnknownTemplate { name: String },
}

/// Result type alias for options-analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Validation utilities
pub mod validation {
    use super::{AnalyticsError, AnalyticsResult};

    /// Upper bound on the number of increments along one sampling axis.
    pub const MAX_STEPS: usize = 100_000;

    /// Upper bound on the number of cells in a two-axis grid.
    pub const MAX_GRID_CELLS: usize = 5_000_000;

    fn invalid(name: &str, value: f64, constraint: &str) -> AnalyticsError {
        AnalyticsError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: constraint.to_string(),
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> AnalyticsResult<()> {
        if !value.is_finite() {
            Err(invalid(name, value, "must be finite (not NaN or infinite)"))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and positive
    pub fn validate_positive(name: &str, value: f64) -> AnalyticsResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(invalid(name, value, "must be positive (> 0)"))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> AnalyticsResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(invalid(name, value, "must be non-negative (≥ 0)"))
        } else {
            Ok(())
        }
    }

    /// Validate the cell count of a grid spanned by two sampling axes
    pub fn validate_grid(field: &str, rows: usize, columns: usize) -> AnalyticsResult<()> {
        match rows.checked_mul(columns) {
            Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
            _ => Err(AnalyticsError::InvalidRange {
                field: field.to_string(),
                reason: format!(
                    "{} × {} cells exceeds maximum allowed ({})",
                    rows, columns, MAX_GRID_CELLS
                ),
            }),
        }
    }

    /// Validate a sampling axis step count
    pub fn validate_steps(field: &str, steps: usize) -> AnalyticsResult<()> {
        if steps == 0 {
            Err(AnalyticsError::InvalidRange {
                field: field.to_string(),
                reason: "steps must be greater than 0".to_string(),
            })
        } else if steps > MAX_STEPS {
            Err(AnalyticsError::InvalidRange {
                field: field.to_string(),
                reason: format!("steps exceeds maximum allowed ({})", MAX_STEPS),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("spot", 100.0).is_ok());
        assert!(validate_positive("spot", 0.0).is_err());
        assert!(validate_positive("spot", -1.0).is_err());
        assert!(validate_positive("spot", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("sigma", 0.0).is_ok());
        assert!(validate_non_negative("sigma", 0.25).is_ok());
        assert!(validate_non_negative("sigma", -0.01).is_err());
        assert!(validate_non_negative("sigma", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("rate", -0.01).is_ok());
        assert!(validate_finite("rate", f64::NAN).is_err());
        assert!(validate_finite("rate", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps("strikes", 1).is_ok());
        assert!(validate_steps("strikes", MAX_STEPS).is_ok());
        assert!(matches!(
            validate_steps("strikes", 0),
            Err(AnalyticsError::InvalidRange { .. })
        ));
        assert!(validate_steps("strikes", MAX_STEPS + 1).is_err());
    }

    #[test]
    fn test_validate_grid() {
        assert!(validate_grid("grid", 1_000, 5_000).is_ok());
        assert!(matches!(
            validate_grid("grid", 1_000, 5_001),
            Err(AnalyticsError::InvalidRange { .. })
        ));
        assert!(validate_grid("grid", usize::MAX, 2).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = AnalyticsError::InvalidParameter {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be non-negative".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("non-negative"));
    }

    #[test]
    fn test_singularity_display() {
        let error = AnalyticsError::DivisionSingularity {
            operation: "price".to_string(),
            reason: "sigma = 0 with T = 0.25".to_string(),
        };

        let display = error.to_string();
        assert!(display.contains("price"));
        assert!(display.contains("0.25"));
    }
}
