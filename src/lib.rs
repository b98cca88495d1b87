//! # options-analytics: Closed-Form Option Analytics
//!
//! The quantitative core of an options-analytics front end: European option
//! valuation, Greeks, price surfaces for visualization and multi-leg
//! strategy payoffs.
//!
//! ## Key Features
//!
//! - **Black-Scholes-Merton pricing**: closed-form European calls and puts
//! - **Greeks**: delta, gamma, theta (per day), vega and rho (per 1%)
//! - **Price surfaces**: strike × time grids evaluated in parallel with Rayon
//! - **Strategies**: payoff curves, breakevens and a template catalog
//! - **Typed errors**: invalid inputs and singular cases never become NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use options_analytics::analytics::{greeks, price};
//! use options_analytics::models::{OptionKind, OptionParameters};
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.30, OptionKind::Call)
//!     .expect("Valid parameters");
//!
//! let value = price(&params).expect("Priced");
//! let sens = greeks(&params).expect("Greeks");
//! println!("Call: {:.4} (delta {:.3}, vega {:.3})", value.price, sens.delta, sens.vega);
//! ```
//!
//! ## Strategies
//!
//! ```rust
//! use options_analytics::strategy::{
//!     analyze_strategy, payoff_curve, PayoffConfig, StrategyTemplate,
//! };
//!
//! let legs = StrategyTemplate::find("Bull Call Spread")?.instantiate(100.0, 0.05, 0.30)?;
//! let curve = payoff_curve(&legs, &PayoffConfig::default())?;
//! let analysis = analyze_strategy(&curve)?;
//! assert_eq!(analysis.breakevens.len(), 1);
//! # Ok::<(), options_analytics::AnalyticsError>(())
//! ```
//!
//! Every operation is a pure function of its inputs. The library emits
//! `tracing` events but never installs a subscriber.

// Module declarations
pub mod analytics;
pub mod calendar;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod strategy;
pub mod surface;

// Re-export commonly used types for convenience
pub use analytics::{greeks, price, Greeks, PriceResult};
pub use config::SampleRange;
pub use error::{AnalyticsError, AnalyticsResult};
pub use models::{OptionKind, OptionLeg, OptionParameters};
pub use strategy::{analyze_strategy, payoff_curve, PayoffConfig, PayoffPoint, StrategyAnalysis};
pub use surface::{generate_surface, SurfaceConfig, SurfacePoint};
