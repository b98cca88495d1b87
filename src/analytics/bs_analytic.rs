// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! and European options have the closed-form values
//! ```text
//! C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//!
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! At T = 0 the option is worth its intrinsic value and the d-statistics are
//! reported as zero. σ = 0 with T > 0 has no closed form here and is an
//! error rather than a silent clamp.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::models::{OptionKind, OptionParameters};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}

/// Intermediate statistics shared by the pricing and Greeks engines.
///
/// Only defined for T > 0 and σ > 0.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DStatistics {
    pub d1: f64,
    pub d2: f64,
    pub sqrt_t: f64,
    pub discount: f64, // e^(-rT)
    pub n_d1: f64,
    pub n_d2: f64,
    pub n_minus_d1: f64,
    pub n_minus_d2: f64,
    pub pdf_d1: f64,
}

pub(crate) fn d_statistics(
    params: &OptionParameters,
    operation: &str,
) -> AnalyticsResult<DStatistics> {
    let OptionParameters {
        spot: s,
        strike: k,
        time_to_expiry: t,
        rate: r,
        sigma,
        ..
    } = *params;

    let sqrt_t = t.sqrt();
    let sigma_sqrt_t = sigma * sqrt_t;

    // σ√T can underflow to zero for a subnormal σ even though σ > 0
    if sigma_sqrt_t == 0.0 {
        return Err(AnalyticsError::DivisionSingularity {
            operation: operation.to_string(),
            reason: format!("sigma = {:e} with T = {} makes σ√T zero", sigma, t),
        });
    }

    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    if d1.is_nan() {
        return Err(AnalyticsError::DivisionSingularity {
            operation: operation.to_string(),
            reason: format!("d1 is undefined for sigma = {:e}, T = {}", sigma, t),
        });
    }
    let d2 = d1 - sigma_sqrt_t;

    Ok(DStatistics {
        d1,
        d2,
        sqrt_t,
        discount: (-r * t).exp(),
        n_d1: norm_cdf(d1),
        n_d2: norm_cdf(d2),
        n_minus_d1: norm_cdf(-d1),
        n_minus_d2: norm_cdf(-d2),
        pdf_d1: norm_pdf(d1),
    })
}

/// Payoff if exercised immediately
pub fn intrinsic_value(spot: f64, strike: f64, kind: OptionKind) -> f64 {
    match kind {
        OptionKind::Call => (spot - strike).max(0.0),
        OptionKind::Put => (strike - spot).max(0.0),
    }
}

/// Theoretical price of a European option
///
/// # Errors
///
/// - `InvalidParameter` when S ≤ 0, K ≤ 0, T < 0, σ < 0 or any input is not finite
/// - `DivisionSingularity` when σ√T is zero with T > 0
pub fn price(params: &OptionParameters) -> AnalyticsResult<PriceResult> {
    params.validate()?;

    if params.is_expired() {
        return Ok(PriceResult {
            price: intrinsic_value(params.spot, params.strike, params.kind),
            d1: 0.0,
            d2: 0.0,
        });
    }

    let ds = d_statistics(params, "price")?;
    let s = params.spot;
    let k = params.strike;
    let value = match params.kind {
        OptionKind::Call => s * ds.n_d1 - k * ds.discount * ds.n_d2,
        OptionKind::Put => k * ds.discount * ds.n_minus_d2 - s * ds.n_minus_d1,
    };

    Ok(PriceResult {
        // the CDF approximation can leave a dust-sized negative on deep OTM options
        price: value.max(0.0),
        d1: ds.d1,
        d2: ds.d2,
    })
}

/// Black-Scholes European call price from raw scalars
pub fn call_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> AnalyticsResult<f64> {
    Ok(price(&OptionParameters::new(s, k, t, r, sigma, OptionKind::Call)?)?.price)
}

/// Black-Scholes European put price from raw scalars
pub fn put_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> AnalyticsResult<f64> {
    Ok(price(&OptionParameters::new(s, k, t, r, sigma, OptionKind::Put)?)?.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_value() {
        assert_eq!(intrinsic_value(110.0, 100.0, OptionKind::Call), 10.0);
        assert_eq!(intrinsic_value(90.0, 100.0, OptionKind::Call), 0.0);
        assert_eq!(intrinsic_value(90.0, 100.0, OptionKind::Put), 10.0);
        assert_eq!(intrinsic_value(110.0, 100.0, OptionKind::Put), 0.0);
    }

    #[test]
    fn test_d_statistics_relationship() {
        let p = OptionParameters::new(105.0, 100.0, 0.5, 0.03, 0.25, OptionKind::Call).unwrap();
        let ds = d_statistics(&p, "test").unwrap();
        assert!((ds.d1 - ds.d2 - 0.25 * 0.5_f64.sqrt()).abs() < 1e-12);
        assert!((ds.n_d1 + ds.n_minus_d1 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_vol_is_singular() {
        let p = OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.0, OptionKind::Call).unwrap();
        assert!(matches!(
            price(&p),
            Err(AnalyticsError::DivisionSingularity { .. })
        ));
    }

    #[test]
    fn test_subnormal_vol_is_singular() {
        let p = OptionParameters::new(100.0, 100.0, 0.01, 0.0, 5e-324, OptionKind::Call).unwrap();
        assert!(matches!(
            price(&p),
            Err(AnalyticsError::DivisionSingularity { .. })
        ));
        assert!(d_statistics(&p.with_spot(110.0), "test").is_err());
    }

    #[test]
    fn test_scalar_wrappers() {
        let c = call_price(100.0, 100.0, 0.25, 0.05, 0.3).unwrap();
        let p = put_price(100.0, 100.0, 0.25, 0.05, 0.3).unwrap();
        assert!((c - 6.583_083_8).abs() < 1e-6);
        assert!((p - 5.340_863_8).abs() < 1e-6);
        assert!(call_price(-1.0, 100.0, 0.25, 0.05, 0.3).is_err());
    }
}
