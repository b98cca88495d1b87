// src/surface.rs
//! Discretized price surface over (strike × time-to-expiry)
//!
//! # Grid
//!
//! Strikes and times are each sampled at `steps + 1` equally spaced values.
//! Every (K, T) pair is priced with the closed-form engine; pairs with
//! `T < SURFACE_MIN_TIME` are dropped from the output rather than zeroed, so
//! the kink of the payoff at expiry does not dominate a rendered surface.
//!
//! # Parallelism
//!
//! Grid cells are independent and evaluated with Rayon. The indexed collect
//! keeps strike-major order, so repeated calls return identical vectors.

use crate::analytics::bs_analytic;
use crate::config::SampleRange;
use crate::error::{validation::*, AnalyticsResult};
use crate::models::{OptionKind, OptionParameters};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Times below this many years are left out of the surface
pub const SURFACE_MIN_TIME: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfacePoint {
    pub strike: f64,
    pub time_to_expiry: f64,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub spot: f64,
    pub rate: f64,
    pub sigma: f64,
    pub kind: OptionKind,
    pub strikes: SampleRange,
    pub times: SampleRange,
}

impl SurfaceConfig {
    /// Validate the surface configuration
    pub fn validate(&self) -> AnalyticsResult<()> {
        validate_positive("spot", self.spot)?;
        validate_finite("rate", self.rate)?;
        validate_non_negative("sigma", self.sigma)?;
        self.strikes.validate("strikes")?;
        self.times.validate("times")?;
        validate_positive("strikes.min", self.strikes.min)?;
        validate_non_negative("times.min", self.times.min)?;
        validate_grid(
            "strikes × times",
            self.strikes.sample_count(),
            self.times.sample_count(),
        )?;
        Ok(())
    }

    fn params_at(&self, strike: f64, time_to_expiry: f64) -> OptionParameters {
        OptionParameters {
            spot: self.spot,
            strike,
            time_to_expiry,
            rate: self.rate,
            sigma: self.sigma,
            kind: self.kind,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            spot: 100.0,
            rate: 0.05,
            sigma: 0.3,
            kind: OptionKind::Call,
            strikes: SampleRange::new(70.0, 130.0, 30),
            times: SampleRange::new(0.0, 1.0, 24),
        }
    }
}

/// Price every retained (strike, time) cell of the grid
///
/// # Errors
///
/// Fails before producing any point on an invalid configuration, and fails
/// as a whole if any cell cannot be priced (σ = 0 with T > 0).
pub fn generate_surface(cfg: &SurfaceConfig) -> AnalyticsResult<Vec<SurfacePoint>> {
    cfg.validate()?;

    let n_times = cfg.times.sample_count();
    let n_cells = cfg.strikes.sample_count() * n_times;

    let cells: Vec<Option<SurfacePoint>> = (0..n_cells)
        .into_par_iter()
        .map(|idx| -> AnalyticsResult<Option<SurfacePoint>> {
            let strike = cfg.strikes.value_at(idx / n_times);
            let time_to_expiry = cfg.times.value_at(idx % n_times);
            if time_to_expiry < SURFACE_MIN_TIME {
                return Ok(None);
            }
            let result = bs_analytic::price(&cfg.params_at(strike, time_to_expiry))?;
            Ok(Some(SurfacePoint {
                strike,
                time_to_expiry,
                price: result.price,
            }))
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    let points: Vec<SurfacePoint> = cells.into_iter().flatten().collect();
    tracing::debug!(
        cells = n_cells,
        retained = points.len(),
        skipped = n_cells - points.len(),
        kind = ?cfg.kind,
        "generated price surface"
    );

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SurfaceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_strike_range_rejected() {
        let cfg = SurfaceConfig {
            strikes: SampleRange::new(0.0, 100.0, 10),
            ..Default::default()
        };
        assert!(generate_surface(&cfg).is_err());
    }

    #[test]
    fn test_negative_time_range_rejected() {
        let cfg = SurfaceConfig {
            times: SampleRange::new(-0.5, 1.0, 10),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        // each axis is within MAX_STEPS but the product is not
        let cfg = SurfaceConfig {
            strikes: SampleRange::new(50.0, 150.0, MAX_STEPS),
            times: SampleRange::new(0.0, 1.0, MAX_STEPS),
            ..Default::default()
        };
        assert!(cfg.strikes.validate("strikes").is_ok());
        assert!(matches!(
            generate_surface(&cfg),
            Err(crate::error::AnalyticsError::InvalidRange { .. })
        ));
    }
}
