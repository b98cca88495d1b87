// src/strategy/payoff.rs
//! Net P&L of a multi-leg position across a range of underlying prices
//!
//! # P&L per leg
//!
//! ```text
//! pnl = (value - entry_premium) × quantity × 100
//! ```
//!
//! where `value` is the intrinsic value at expiry, or the Black-Scholes value
//! at the caller's current time-to-expiry for the "now" curve. The ×100 is
//! the equity-option contract multiplier.
//!
//! # Breakevens
//!
//! Breakevens are located on the sampled expiry curve by linear
//! interpolation between adjacent samples whose P&L signs differ. Expiry P&L
//! is piecewise linear in S, so the result is exact unless a strike lies
//! inside the crossing cell; crossings narrower than one cell are missed.

use crate::analytics::{bs_analytic, greeks, Greeks};
use crate::config::SampleRange;
use crate::error::{validation::*, AnalyticsError, AnalyticsResult};
use crate::models::{OptionKind, OptionLeg};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Shares per option contract
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPoint {
    pub underlying_price: f64,
    pub pnl_now: f64,
    pub pnl_at_expiry: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAnalysis {
    pub max_profit: f64,
    pub max_loss: f64,
    pub breakevens: Vec<f64>,
}

/// Behaviour of expiry P&L as the underlying rises without bound
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpsideExposure {
    Bounded,
    UnboundedProfit,
    UnboundedLoss,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffConfig {
    pub prices: SampleRange,
    /// Time-to-expiry (years) for the "now" curve; `None` or 0 collapses it onto expiry
    pub current_time: Option<f64>,
}

impl PayoffConfig {
    /// Validate the payoff configuration
    pub fn validate(&self) -> AnalyticsResult<()> {
        self.prices.validate("prices")?;
        validate_positive("prices.min", self.prices.min)?;
        if let Some(t) = self.current_time {
            validate_non_negative("current_time", t)?;
        }
        Ok(())
    }
}

impl Default for PayoffConfig {
    fn default() -> Self {
        PayoffConfig {
            prices: SampleRange::new(50.0, 150.0, 200),
            current_time: None,
        }
    }
}

fn leg_pnl(leg: &OptionLeg, value: f64) -> f64 {
    (value - leg.entry_premium) * leg.quantity as f64 * CONTRACT_MULTIPLIER
}

/// Expiry P&L of the whole position at one underlying price
pub fn expiry_pnl(legs: &[OptionLeg], spot: f64) -> f64 {
    legs.iter()
        .map(|leg| {
            let value = bs_analytic::intrinsic_value(spot, leg.params.strike, leg.params.kind);
            leg_pnl(leg, value)
        })
        .sum()
}

/// P&L if the position were marked at `spot` with `time_to_expiry` remaining
fn mark_to_model_pnl(legs: &[OptionLeg], spot: f64, time_to_expiry: f64) -> AnalyticsResult<f64> {
    let mut total = 0.0;
    for leg in legs {
        let params = leg.params.with_spot(spot).with_time(time_to_expiry);
        total += leg_pnl(leg, bs_analytic::price(&params)?.price);
    }
    Ok(total)
}

/// Sample the position's P&L now and at expiry across `cfg.prices`
///
/// # Errors
///
/// - `InvalidRange` / `InvalidParameter` for a bad configuration or leg
/// - `DivisionSingularity` when a leg has σ = 0 and a current time is given
pub fn payoff_curve(legs: &[OptionLeg], cfg: &PayoffConfig) -> AnalyticsResult<Vec<PayoffPoint>> {
    cfg.validate()?;
    for leg in legs {
        leg.validate()?;
    }

    let current_time = cfg.current_time.filter(|&t| t > 0.0);

    let curve = (0..cfg.prices.sample_count())
        .into_par_iter()
        .map(|i| -> AnalyticsResult<PayoffPoint> {
            let s = cfg.prices.value_at(i);
            let pnl_at_expiry = expiry_pnl(legs, s);
            let pnl_now = match current_time {
                Some(t) => mark_to_model_pnl(legs, s, t)?,
                None => pnl_at_expiry,
            };
            Ok(PayoffPoint {
                underlying_price: s,
                pnl_now,
                pnl_at_expiry,
            })
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    tracing::debug!(
        legs = legs.len(),
        samples = curve.len(),
        current_time = ?current_time,
        "sampled payoff curve"
    );

    Ok(curve)
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Max profit, max loss and breakevens of the sampled expiry curve
///
/// Extremes are taken over the samples only. Strategies with unbounded
/// upside report the value at the last sample; see [`upside_exposure`].
pub fn analyze_strategy(curve: &[PayoffPoint]) -> AnalyticsResult<StrategyAnalysis> {
    if curve.is_empty() {
        return Err(AnalyticsError::InvalidRange {
            field: "curve".to_string(),
            reason: "payoff curve has no points".to_string(),
        });
    }

    let mut max_profit = f64::NEG_INFINITY;
    let mut max_loss = f64::INFINITY;
    for p in curve {
        max_profit = max_profit.max(p.pnl_at_expiry);
        max_loss = max_loss.min(p.pnl_at_expiry);
    }

    let mut breakevens: Vec<f64> = Vec::new();
    for pair in curve.windows(2) {
        let (p0, p1) = (&pair[0], &pair[1]);
        if sign(p0.pnl_at_expiry) == sign(p1.pnl_at_expiry) {
            continue;
        }
        let crossing = if p0.pnl_at_expiry == 0.0 {
            p0.underlying_price
        } else if p1.pnl_at_expiry == 0.0 {
            p1.underlying_price
        } else {
            let fraction = -p0.pnl_at_expiry / (p1.pnl_at_expiry - p0.pnl_at_expiry);
            p0.underlying_price + fraction * (p1.underlying_price - p0.underlying_price)
        };
        // a sample sitting exactly on zero closes one pair and opens the next
        if breakevens.last() != Some(&crossing) {
            breakevens.push(crossing);
        }
    }

    Ok(StrategyAnalysis {
        max_profit,
        max_loss,
        breakevens,
    })
}

/// Classify expiry P&L as S → ∞ from the net call quantity
///
/// Puts are worthless for large S, so only calls contribute slope.
pub fn upside_exposure(legs: &[OptionLeg]) -> UpsideExposure {
    let net_calls: i64 = legs
        .iter()
        .filter(|leg| leg.params.kind == OptionKind::Call)
        .map(|leg| leg.quantity as i64)
        .sum();
    match net_calls {
        n if n > 0 => UpsideExposure::UnboundedProfit,
        n if n < 0 => UpsideExposure::UnboundedLoss,
        _ => UpsideExposure::Bounded,
    }
}

/// Net position Greeks in currency terms (Σ greeks × quantity × 100)
pub fn position_greeks(legs: &[OptionLeg]) -> AnalyticsResult<Greeks> {
    legs.iter().try_fold(Greeks::default(), |acc, leg| {
        let g = greeks(&leg.params)?;
        Ok(acc.add(&g.scale(leg.quantity as f64 * CONTRACT_MULTIPLIER)))
    })
}
