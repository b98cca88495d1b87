// src/math_utils.rs
//! Standard normal distribution helpers
//!
//! The CDF uses the Abramowitz & Stegun rational approximation (26.2.17):
//! ```text
//! t    = 1 / (1 + 0.2316419·|x|)
//! p(x) = φ(|x|) · t · (b₁ + t(b₂ + t(b₃ + t(b₄ + t·b₅))))
//! Φ(x) = 1 - p(x)   for x > 0
//! Φ(x) = p(x)       for x ≤ 0
//! ```
//! Absolute error is bounded by 7.5e-8.

use std::f64::consts::PI;

const P: f64 = 0.231_641_9;
const B1: f64 = 0.319_381_530;
const B2: f64 = -0.356_563_782;
const B3: f64 = 1.781_477_937;
const B4: f64 = -1.821_255_978;
const B5: f64 = 1.330_274_429;

/// Standard normal probability density function
///
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution function (A&S approximation)
///
/// Reflection keeps `norm_cdf(x) + norm_cdf(-x) == 1` up to rounding.
pub fn norm_cdf(x: f64) -> f64 {
    let abs_x = x.abs();
    let t = 1.0 / (1.0 + P * abs_x);
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let tail = norm_pdf(abs_x) * poly;
    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
