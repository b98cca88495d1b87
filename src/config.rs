// src/config.rs
//! Sampling ranges shared by the surface generator and payoff curves.

use crate::error::{validation::validate_steps, AnalyticsError, AnalyticsResult};
use serde::{Deserialize, Serialize};

/// `steps` equal increments from `min` to `max`, i.e. `steps + 1` samples
/// with both endpoints included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl SampleRange {
    pub fn new(min: f64, max: f64, steps: usize) -> Self {
        SampleRange { min, max, steps }
    }

    /// Validate the range; `field` names the axis in error messages
    pub fn validate(&self, field: &str) -> AnalyticsResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AnalyticsError::InvalidRange {
                field: field.to_string(),
                reason: format!("bounds must be finite (min = {}, max = {})", self.min, self.max),
            });
        }
        if self.min > self.max {
            return Err(AnalyticsError::InvalidRange {
                field: field.to_string(),
                reason: format!("min ({}) is greater than max ({})", self.min, self.max),
            });
        }
        validate_steps(field, self.steps)
    }

    pub fn step_size(&self) -> f64 {
        (self.max - self.min) / self.steps as f64
    }

    pub fn sample_count(&self) -> usize {
        self.steps + 1
    }

    /// The i-th sample; the last one is exactly `max`
    pub fn value_at(&self, i: usize) -> f64 {
        if i >= self.steps {
            self.max
        } else {
            self.min + self.step_size() * i as f64
        }
    }

    pub fn values(&self) -> Vec<f64> {
        (0..self.sample_count()).map(|i| self.value_at(i)).collect()
    }
}
