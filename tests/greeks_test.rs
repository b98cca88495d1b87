// tests/greeks_test.rs
use approx::assert_abs_diff_eq;
use options_analytics::analytics::{greeks, price, Greeks};
use options_analytics::error::AnalyticsError;
use options_analytics::models::{OptionKind, OptionParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn params(s: f64, k: f64, t: f64, r: f64, sigma: f64, kind: OptionKind) -> OptionParameters {
    OptionParameters::new(s, k, t, r, sigma, kind).expect("Valid parameters")
}

fn value(p: &OptionParameters) -> f64 {
    price(p).expect("Priced").price
}

#[test]
fn test_atm_call_reference_greeks() {
    let g = greeks(&params(100.0, 100.0, 0.25, 0.05, 0.30, OptionKind::Call)).unwrap();

    println!("\nATM call Greeks: {:?}", g);

    assert_abs_diff_eq!(g.delta, 0.56, epsilon = 0.01);
    assert_abs_diff_eq!(g.vega, 0.20, epsilon = 0.01);
    assert_abs_diff_eq!(g.gamma, 0.026_264_857, epsilon = 1e-6);
    assert_abs_diff_eq!(g.theta, -0.039_190_538, epsilon = 1e-6);
    assert_abs_diff_eq!(g.rho, 0.124_268_026, epsilon = 1e-6);
}

#[test]
fn test_atm_put_reference_greeks() {
    let g = greeks(&params(100.0, 100.0, 0.25, 0.05, 0.30, OptionKind::Put)).unwrap();

    assert_abs_diff_eq!(g.delta, -0.437_097_059, epsilon = 1e-6);
    assert_abs_diff_eq!(g.theta, -0.025_662_075, epsilon = 1e-6);
    assert_abs_diff_eq!(g.rho, -0.122_626_424, epsilon = 1e-6);
}

#[test]
fn test_unit_conventions_against_finite_differences() {
    let p = params(100.0, 100.0, 1.0, 0.05, 0.20, OptionKind::Call);
    let g = greeks(&p).unwrap();

    let h_s = 0.5;
    let fd_delta =
        (value(&p.with_spot(100.0 + h_s)) - value(&p.with_spot(100.0 - h_s))) / (2.0 * h_s);
    let fd_gamma = (value(&p.with_spot(101.0)) - 2.0 * value(&p) + value(&p.with_spot(99.0))) / 1.0;

    // per 1 vol point
    let h_v = 0.01;
    let up = OptionParameters { sigma: 0.20 + h_v, ..p };
    let down = OptionParameters { sigma: 0.20 - h_v, ..p };
    let fd_vega = (value(&up) - value(&down)) / (2.0 * h_v) / 100.0;

    // per 1 rate point
    let h_r = 0.001;
    let up = OptionParameters { rate: 0.05 + h_r, ..p };
    let down = OptionParameters { rate: 0.05 - h_r, ..p };
    let fd_rho = (value(&up) - value(&down)) / (2.0 * h_r) / 100.0;

    // per calendar day, as time passes (T shrinks)
    let h_t = 0.01;
    let fd_theta =
        (value(&p.with_time(1.0 - h_t)) - value(&p.with_time(1.0 + h_t))) / (2.0 * h_t) / 365.0;

    println!("\nAnalytic: {:?}", g);
    println!(
        "Finite difference: delta {}, gamma {}, theta {}, vega {}, rho {}",
        fd_delta, fd_gamma, fd_theta, fd_vega, fd_rho
    );

    assert_abs_diff_eq!(g.delta, fd_delta, epsilon = 1e-3);
    assert_abs_diff_eq!(g.gamma, fd_gamma, epsilon = 1e-3);
    assert_abs_diff_eq!(g.vega, fd_vega, epsilon = 1e-3);
    assert_abs_diff_eq!(g.rho, fd_rho, epsilon = 1e-3);
    assert_abs_diff_eq!(g.theta, fd_theta, epsilon = 1e-4);
}

#[test]
fn test_delta_bounds_and_gamma_symmetry() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let s = rng.gen_range(10.0..300.0);
        let k = rng.gen_range(10.0..300.0);
        let t = rng.gen_range(0.001..3.0);
        let r = rng.gen_range(-0.02..0.1);
        let sigma = rng.gen_range(0.01..1.5);

        let call = greeks(&params(s, k, t, r, sigma, OptionKind::Call)).unwrap();
        let put = greeks(&params(s, k, t, r, sigma, OptionKind::Put)).unwrap();

        assert!((0.0..=1.0).contains(&call.delta), "call delta {} out of [0,1]", call.delta);
        assert!((-1.0..=0.0).contains(&put.delta), "put delta {} out of [-1,0]", put.delta);
        assert!(call.gamma >= 0.0);
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
    }
}

#[test]
fn test_expired_greeks_are_zero() {
    // deep in the money: intrinsic value is non-zero but nothing moves any more
    let g = greeks(&params(150.0, 100.0, 0.0, 0.05, 0.3, OptionKind::Call)).unwrap();
    assert_eq!(g, Greeks::default());
    assert_eq!(value(&params(150.0, 100.0, 0.0, 0.05, 0.3, OptionKind::Call)), 50.0);
}

#[test]
fn test_zero_volatility_before_expiry_is_singular() {
    let result = greeks(&params(100.0, 100.0, 0.5, 0.05, 0.0, OptionKind::Call));
    assert!(matches!(result, Err(AnalyticsError::DivisionSingularity { .. })));
}

#[test]
fn test_subnormal_volatility_is_singular() {
    // σ > 0 passes validation but σ√T underflows to zero
    let p = params(100.0, 100.0, 0.01, 0.0, 5e-324, OptionKind::Call);
    assert!(matches!(greeks(&p), Err(AnalyticsError::DivisionSingularity { .. })));
    assert!(matches!(price(&p), Err(AnalyticsError::DivisionSingularity { .. })));
}

#[test]
fn test_greeks_are_idempotent() {
    let p = params(97.5, 101.0, 0.4, 0.02, 0.35, OptionKind::Put);
    let a = greeks(&p).unwrap();
    let b = greeks(&p).unwrap();
    assert_eq!(a.delta.to_bits(), b.delta.to_bits());
    assert_eq!(a.gamma.to_bits(), b.gamma.to_bits());
    assert_eq!(a.theta.to_bits(), b.theta.to_bits());
    assert_eq!(a.vega.to_bits(), b.vega.to_bits());
    assert_eq!(a.rho.to_bits(), b.rho.to_bits());
}

#[test]
fn test_scale_and_add() {
    let a = Greeks {
        delta: 0.5,
        gamma: 0.02,
        theta: -0.03,
        vega: 0.2,
        rho: 0.1,
    };
    let b = a.scale(-2.0);
    let net = a.add(&b);
    assert_abs_diff_eq!(net.delta, -0.5);
    assert_abs_diff_eq!(net.gamma, -0.02);
    assert_abs_diff_eq!(net.vega, -0.2);
}
