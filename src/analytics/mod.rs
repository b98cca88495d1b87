pub mod bs_analytic;
pub mod greeks;

pub use bs_analytic::{intrinsic_value, price, PriceResult};
pub use greeks::{greeks, Greeks};
