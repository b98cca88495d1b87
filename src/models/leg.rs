// src/models/leg.rs
//! One option position inside a multi-leg strategy.
//!
//! The entry premium is locked when the leg is created. Editing the leg's
//! parameters never reprices it implicitly: callers go through
//! [`OptionLeg::repriced`] when they want a fresh premium.

use super::option::OptionParameters;
use crate::analytics::bs_analytic;
use crate::error::{validation::*, AnalyticsResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionLeg {
    #[serde(flatten)]
    pub params: OptionParameters,
    pub quantity: i32,      // > 0 long, < 0 short (contracts)
    pub entry_premium: f64, // Per-share premium paid or received
}

impl OptionLeg {
    /// Leg with a caller-supplied entry premium (e.g. an actual fill price)
    pub fn new(
        params: OptionParameters,
        quantity: i32,
        entry_premium: f64,
    ) -> AnalyticsResult<Self> {
        let leg = OptionLeg {
            params,
            quantity,
            entry_premium,
        };
        leg.validate()?;
        Ok(leg)
    }

    /// Leg whose entry premium is the current theoretical price
    pub fn priced(params: OptionParameters, quantity: i32) -> AnalyticsResult<Self> {
        let premium = bs_analytic::price(&params)?.price;
        tracing::trace!(
            strike = params.strike,
            kind = ?params.kind,
            quantity,
            premium,
            "locked leg premium"
        );
        Self::new(params, quantity, premium)
    }

    /// New leg with edited parameters and a recomputed entry premium
    pub fn repriced(&self, params: OptionParameters) -> AnalyticsResult<Self> {
        Self::priced(params, self.quantity)
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        self.params.validate()?;
        validate_non_negative("entry_premium", self.entry_premium)?;
        Ok(())
    }

    pub fn is_long(&self) -> bool {
        self.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::option::OptionKind;

    fn atm_call() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.3, OptionKind::Call).unwrap()
    }

    #[test]
    fn test_priced_locks_theoretical_premium() {
        let leg = OptionLeg::priced(atm_call(), 1).unwrap();
        assert!((leg.entry_premium - 6.5831).abs() < 1e-3);
        assert!(leg.is_long());
    }

    #[test]
    fn test_premium_is_not_recalculated_implicitly() {
        let leg = OptionLeg::priced(atm_call(), -2).unwrap();
        let mut edited = leg;
        edited.params = edited.params.with_spot(120.0);
        assert_eq!(edited.entry_premium, leg.entry_premium);

        let repriced = leg.repriced(leg.params.with_spot(120.0)).unwrap();
        assert!(repriced.entry_premium > leg.entry_premium);
        assert_eq!(repriced.quantity, -2);
    }

    #[test]
    fn test_negative_premium_rejected() {
        assert!(OptionLeg::new(atm_call(), 1, -0.5).is_err());
    }

    #[test]
    fn test_flattened_wire_format() {
        let leg = OptionLeg::new(atm_call(), -1, 2.5).unwrap();
        let json = serde_json::to_value(leg).unwrap();
        assert_eq!(json["strike"], 100.0);
        assert_eq!(json["quantity"], -1);
        assert_eq!(json["entryPremium"], 2.5);
    }
}
