// src/analytics/greeks.rs
//! Black-Scholes sensitivities in display units
//!
//! | Greek | Formula                                              | Unit                 |
//! |-------|------------------------------------------------------|----------------------|
//! | Δ     | Φ(d₁) (call), Φ(d₁) - 1 (put)                        | per 1.00 of spot     |
//! | Γ     | φ(d₁) / (S σ √T)                                     | per 1.00 of spot     |
//! | Θ     | [-Sφ(d₁)σ/(2√T) ∓ rKe^(-rT)Φ(±d₂)] / 365             | per calendar day     |
//! | ν     | S √T φ(d₁) / 100                                     | per 1 vol point      |
//! | ρ     | ±K T e^(-rT) Φ(±d₂) / 100                            | per 1 rate point     |
//!
//! Theta, vega and rho are deliberately rescaled from the raw partial
//! derivatives (per year, per unit σ, per unit r).

use super::bs_analytic::d_statistics;
use crate::calendar::DAYS_PER_YEAR;
use crate::error::AnalyticsResult;
use crate::models::{OptionKind, OptionParameters};
use serde::{Deserialize, Serialize};

/// Points per unit for vega and rho (1% = 0.01)
const PERCENT: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl Greeks {
    /// Scale every sensitivity, e.g. by signed quantity × contract multiplier.
    pub fn scale(&self, factor: f64) -> Self {
        Greeks {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    pub fn add(&self, other: &Greeks) -> Self {
        Greeks {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            theta: self.theta + other.theta,
            vega: self.vega + other.vega,
            rho: self.rho + other.rho,
        }
    }
}

/// First-order sensitivities (and gamma) of a European option
///
/// An expired option (T = 0) has all Greeks exactly zero.
pub fn greeks(params: &OptionParameters) -> AnalyticsResult<Greeks> {
    params.validate()?;

    if params.is_expired() {
        return Ok(Greeks::default());
    }

    let ds = d_statistics(params, "greeks")?;
    let OptionParameters {
        spot: s,
        strike: k,
        time_to_expiry: t,
        rate: r,
        sigma,
        kind,
    } = *params;

    let gamma = ds.pdf_d1 / (s * sigma * ds.sqrt_t);
    let vega = s * ds.sqrt_t * ds.pdf_d1 / PERCENT;
    let decay = -(s * ds.pdf_d1 * sigma) / (2.0 * ds.sqrt_t);

    let greeks = match kind {
        OptionKind::Call => Greeks {
            delta: ds.n_d1,
            gamma,
            theta: (decay - r * k * ds.discount * ds.n_d2) / DAYS_PER_YEAR,
            vega,
            rho: k * t * ds.discount * ds.n_d2 / PERCENT,
        },
        OptionKind::Put => Greeks {
            delta: ds.n_d1 - 1.0,
            gamma,
            theta: (decay + r * k * ds.discount * ds.n_minus_d2) / DAYS_PER_YEAR,
            vega,
            rho: -k * t * ds.discount * ds.n_minus_d2 / PERCENT,
        },
    };

    Ok(greeks)
}
