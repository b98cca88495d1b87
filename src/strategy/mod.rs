pub mod payoff;
pub mod templates;

pub use payoff::{
    analyze_strategy, expiry_pnl, payoff_curve, position_greeks, upside_exposure, PayoffConfig,
    PayoffPoint, StrategyAnalysis, UpsideExposure, CONTRACT_MULTIPLIER,
};
pub use templates::{StrategyTemplate, TemplateLeg};
