// src/models/option.rs
use crate::error::{validation::*, AnalyticsResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

/// Inputs to a single European option evaluation.
///
/// Fields are public so hosts can build the record from a form, but every
/// operation re-validates it before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionParameters {
    pub spot: f64,           // Underlying price S
    pub strike: f64,         // Strike K
    pub time_to_expiry: f64, // Years to expiry T
    pub rate: f64,           // Annualized risk-free rate r (decimal)
    pub sigma: f64,          // Annualized volatility σ (decimal)
    pub kind: OptionKind,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        sigma: f64,
        kind: OptionKind,
    ) -> AnalyticsResult<Self> {
        let params = OptionParameters {
            spot,
            strike,
            time_to_expiry,
            rate,
            sigma,
            kind,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_non_negative("time_to_expiry", self.time_to_expiry)?;
        validate_finite("rate", self.rate)?;
        validate_non_negative("sigma", self.sigma)?;
        Ok(())
    }

    pub fn with_spot(&self, spot: f64) -> Self {
        OptionParameters { spot, ..*self }
    }

    pub fn with_strike(&self, strike: f64) -> Self {
        OptionParameters { strike, ..*self }
    }

    pub fn with_time(&self, time_to_expiry: f64) -> Self {
        OptionParameters {
            time_to_expiry,
            ..*self
        }
    }

    pub fn is_expired(&self) -> bool {
        self.time_to_expiry <= 0.0
    }
}
