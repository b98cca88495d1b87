// demos/demo.rs
use options_analytics::analytics::{greeks, price};
use options_analytics::calendar::{days_to_expiry, year_fraction};
use options_analytics::config::SampleRange;
use options_analytics::models::{OptionKind, OptionParameters};
use options_analytics::output;
use options_analytics::strategy::{
    analyze_strategy, payoff_curve, position_greeks, upside_exposure, PayoffConfig,
    StrategyTemplate, UpsideExposure,
};
use options_analytics::surface::{generate_surface, SurfaceConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Running options-analytics Demo\n");

    let valuation = chrono::NaiveDate::from_ymd_opt(2025, 1, 2).expect("Valid date");
    let expiry = chrono::NaiveDate::from_ymd_opt(2025, 4, 3).expect("Valid date");
    let t = year_fraction(valuation, expiry).expect("Expiry after valuation");

    let spot = 100.0;
    let r = 0.05;
    let sigma = 0.30;

    println!(
        "Single options (T = {:.4} years, {} days)",
        t,
        days_to_expiry(t)
    );
    println!(
        "{:<6} {:>8} {:>10} {:>8} {:>8} {:>9} {:>8} {:>8}",
        "Kind", "Strike", "Price", "Delta", "Gamma", "Theta", "Vega", "Rho"
    );
    for &kind in &[OptionKind::Call, OptionKind::Put] {
        for &k in &[90.0, 100.0, 110.0] {
            let params =
                OptionParameters::new(spot, k, t, r, sigma, kind).expect("Valid parameters");
            let value = price(&params).expect("Priced");
            let g = greeks(&params).expect("Greeks");
            println!(
                "{:<6} {:>8.2} {:>10.4} {:>8.4} {:>8.4} {:>9.4} {:>8.4} {:>8.4}",
                format!("{:?}", kind),
                k,
                value.price,
                g.delta,
                g.gamma,
                g.theta,
                g.vega,
                g.rho
            );
        }
    }

    println!("\nStrategy templates (spot {}, r {}, sigma {})", spot, r, sigma);
    let cfg = PayoffConfig {
        prices: SampleRange::new(60.0, 140.0, 320),
        current_time: Some(0.1),
    };
    for template in StrategyTemplate::catalog() {
        let legs = template.instantiate(spot, r, sigma).expect("Valid template");
        let curve = payoff_curve(&legs, &cfg).expect("Valid curve");
        let analysis = analyze_strategy(&curve).expect("Non-empty curve");
        let net = position_greeks(&legs).expect("Greeks");

        let max_profit = match upside_exposure(&legs) {
            UpsideExposure::UnboundedProfit => "unlimited".to_string(),
            _ => format!("{:.2}", analysis.max_profit),
        };
        let max_loss = match upside_exposure(&legs) {
            UpsideExposure::UnboundedLoss => "unlimited".to_string(),
            _ => format!("{:.2}", analysis.max_loss),
        };
        let breakevens: Vec<String> = analysis
            .breakevens
            .iter()
            .map(|b| format!("{:.2}", b))
            .collect();
        let (long, short): (Vec<&_>, Vec<&_>) = legs.iter().partition(|leg| leg.is_long());

        println!(
            "  {:<18} {} long / {} short  max profit {:>10}  max loss {:>10}  breakevens [{}]",
            template.name,
            long.len(),
            short.len(),
            max_profit,
            max_loss,
            breakevens.join(", "),
        );
        println!(
            "  {:<18} delta {:>8.2}  theta {:>7.2}/day",
            "", net.delta, net.theta
        );

        if template.name == "Iron Condor" {
            match output::write_payoff_csv("iron_condor_payoff.csv", &curve) {
                Ok(()) => println!("    payoff curve written to iron_condor_payoff.csv"),
                Err(e) => eprintln!("Error writing payoff curve: {}", e),
            }
        }
    }

    let surface_cfg = SurfaceConfig::default();
    let surface = generate_surface(&surface_cfg).expect("Valid surface");
    println!("\nCall price surface: {} points", surface.len());
    match output::write_surface_csv("call_surface.csv", &surface) {
        Ok(()) => println!("Surface written to call_surface.csv"),
        Err(e) => eprintln!("Error writing surface data: {}", e),
    }
}
