// src/strategy/templates.rs
//! Static catalog of common multi-leg strategies
//!
//! Templates only describe leg shapes. Strikes are given as moneyness
//! (strike / spot) so one template fits any underlying; instantiating it
//! against a live spot, rate and volatility prices each leg and locks its
//! entry premium.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::OptionKind::{self, Call, Put};
use crate::models::{OptionLeg, OptionParameters};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLeg {
    pub moneyness: f64,
    pub time_to_expiry: f64,
    pub kind: OptionKind,
    pub quantity: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrategyTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub legs: &'static [TemplateLeg],
}

const QUARTER: f64 = 0.25;

const fn leg(moneyness: f64, kind: OptionKind, quantity: i32) -> TemplateLeg {
    TemplateLeg {
        moneyness,
        time_to_expiry: QUARTER,
        kind,
        quantity,
    }
}

static CATALOG: [StrategyTemplate; 8] = [
    StrategyTemplate {
        name: "Long Call",
        description: "Bullish; limited risk, unlimited upside",
        legs: &[leg(1.00, Call, 1)],
    },
    StrategyTemplate {
        name: "Long Put",
        description: "Bearish; limited risk, profit grows as the underlying falls",
        legs: &[leg(1.00, Put, 1)],
    },
    StrategyTemplate {
        name: "Bull Call Spread",
        description: "Moderately bullish; long lower-strike call, short higher-strike call",
        legs: &[leg(0.95, Call, 1), leg(1.05, Call, -1)],
    },
    StrategyTemplate {
        name: "Bear Put Spread",
        description: "Moderately bearish; long higher-strike put, short lower-strike put",
        legs: &[leg(1.05, Put, 1), leg(0.95, Put, -1)],
    },
    StrategyTemplate {
        name: "Long Straddle",
        description: "Long volatility; call and put at the same strike",
        legs: &[leg(1.00, Call, 1), leg(1.00, Put, 1)],
    },
    StrategyTemplate {
        name: "Long Strangle",
        description: "Long volatility; out-of-the-money call and put",
        legs: &[leg(1.05, Call, 1), leg(0.95, Put, 1)],
    },
    StrategyTemplate {
        name: "Iron Condor",
        description: "Range-bound; short put spread plus short call spread",
        legs: &[
            leg(0.90, Put, 1),
            leg(0.95, Put, -1),
            leg(1.05, Call, -1),
            leg(1.10, Call, 1),
        ],
    },
    StrategyTemplate {
        name: "Butterfly",
        description: "Pin risk play; profits most if the underlying settles at the middle strike",
        legs: &[leg(0.95, Call, 1), leg(1.00, Call, -2), leg(1.05, Call, 1)],
    },
];

impl StrategyTemplate {
    pub fn catalog() -> &'static [StrategyTemplate] {
        &CATALOG
    }

    /// Case-insensitive lookup by display name
    pub fn find(name: &str) -> AnalyticsResult<&'static StrategyTemplate> {
        CATALOG
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| AnalyticsError::UnknownTemplate {
                name: name.to_string(),
            })
    }

    /// Live legs at `spot`, each priced to lock its entry premium
    pub fn instantiate(&self, spot: f64, rate: f64, sigma: f64) -> AnalyticsResult<Vec<OptionLeg>> {
        let legs = self
            .legs
            .iter()
            .map(|tl| -> AnalyticsResult<OptionLeg> {
                let params = OptionParameters::new(
                    spot,
                    spot * tl.moneyness,
                    tl.time_to_expiry,
                    rate,
                    sigma,
                    tl.kind,
                )?;
                OptionLeg::priced(params, tl.quantity)
            })
            .collect::<AnalyticsResult<Vec<_>>>()?;

        tracing::debug!(
            template = self.name,
            spot,
            rate,
            sigma,
            legs = legs.len(),
            "instantiated strategy template"
        );
        Ok(legs)
    }
}
