// demos/error_handling_demo.rs
use options_analytics::analytics::price;
use options_analytics::config::SampleRange;
use options_analytics::error::AnalyticsError;
use options_analytics::models::{OptionKind, OptionParameters};
use options_analytics::strategy::{analyze_strategy, StrategyTemplate};
use options_analytics::surface::{generate_surface, SurfaceConfig};

fn main() {
    tracing_subscriber::fmt().init();

    println!("Error Handling Demo for options-analytics");
    println!("=========================================\n");

    // Test 1: Negative spot
    println!("1. Testing negative spot price...");
    match OptionParameters::new(-100.0, 100.0, 0.25, 0.05, 0.3, OptionKind::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero volatility before expiry
    println!("\n2. Testing zero volatility with time remaining...");
    let flat = OptionParameters {
        spot: 100.0,
        strike: 100.0,
        time_to_expiry: 0.25,
        rate: 0.05,
        sigma: 0.0,
        kind: OptionKind::Call,
    };
    match price(&flat) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Expired option with zero volatility is fine
    println!("\n3. Testing expired option (T = 0, sigma = 0)...");
    match price(&flat.with_time(0.0).with_spot(104.0)) {
        Ok(result) => println!("   ✓ Intrinsic value: {:.2}", result.price),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 4: Misconfigured grid
    println!("\n4. Testing surface with zero steps...");
    let cfg = SurfaceConfig {
        strikes: SampleRange::new(80.0, 120.0, 0),
        ..Default::default()
    };
    match generate_surface(&cfg) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Unknown template and empty analysis
    println!("\n5. Testing unknown template and empty payoff curve...");
    match StrategyTemplate::find("Jade Lizard") {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
    match analyze_strategy(&[]) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Error type matching
    println!("\n6. Testing error type matching...");
    let bad = OptionParameters { sigma: -0.2, ..flat };
    match price(&bad) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(AnalyticsError::InvalidParameter { parameter, value, constraint }) => {
            println!("   ✓ Caught InvalidParameter: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
