// scripts/benchmark.rs
use options_analytics::analytics::bs_analytic::{call_price, put_price};
use options_analytics::analytics::{greeks, price};
use options_analytics::config::SampleRange;
use options_analytics::math_utils::Timer;
use options_analytics::models::{OptionKind, OptionParameters};
use options_analytics::strategy::{analyze_strategy, payoff_curve, PayoffConfig, StrategyTemplate};
use options_analytics::surface::{generate_surface, SurfaceConfig};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Command::new("rustc")
                .arg("--version")
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown Rust version".to_string()),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    evaluations: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    value: f64,
}

impl BenchmarkResult {
    fn new(name: String, evaluations: usize, time_ms: f64, value: f64) -> Self {
        BenchmarkResult {
            name,
            evaluations,
            time_ms,
            throughput_per_sec: evaluations as f64 / (time_ms / 1000.0),
            value,
        }
    }
}

fn run_pricing_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let n = 1_000_000;
    let base = OptionParameters::new(100.0, 100.0, 0.25, 0.05, 0.3, OptionKind::Call)
        .expect("Valid parameters");

    let mut timer = Timer::new();
    timer.start();
    let mut total = 0.0;
    for i in 0..n {
        let p = base.with_spot(80.0 + (i % 400) as f64 * 0.1);
        total += price(&p).expect("Priced").price;
    }
    results.push(BenchmarkResult::new(
        "Call price".to_string(),
        n,
        timer.elapsed_ms(),
        total / n as f64,
    ));

    timer.start();
    let mut total_parity = 0.0;
    for i in 0..n {
        let s = 80.0 + (i % 400) as f64 * 0.1;
        let call = call_price(s, 100.0, 0.25, 0.05, 0.3).expect("Priced");
        let put = put_price(s, 100.0, 0.25, 0.05, 0.3).expect("Priced");
        total_parity += call - put;
    }
    results.push(BenchmarkResult::new(
        "Call/put pair (scalar)".to_string(),
        2 * n,
        timer.elapsed_ms(),
        total_parity / n as f64,
    ));

    timer.start();
    let mut total_delta = 0.0;
    for i in 0..n {
        let p = base.with_spot(80.0 + (i % 400) as f64 * 0.1);
        total_delta += greeks(&p).expect("Greeks").delta;
    }
    results.push(BenchmarkResult::new(
        "Call Greeks".to_string(),
        n,
        timer.elapsed_ms(),
        total_delta / n as f64,
    ));

    results
}

fn run_surface_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &steps in &[50usize, 200, 1000] {
        println!("Benchmarking {}x{} surface...", steps + 1, steps + 1);
        let cfg = SurfaceConfig {
            strikes: SampleRange::new(50.0, 150.0, steps),
            times: SampleRange::new(0.0, 2.0, steps),
            ..Default::default()
        };

        let mut timer = Timer::new();
        timer.start();
        let surface = generate_surface(&cfg).expect("Valid surface");
        let time_ms = timer.elapsed_ms();
        let mean = surface.iter().map(|p| p.price).sum::<f64>() / surface.len() as f64;

        results.push(BenchmarkResult::new(
            format!("Price surface ({} steps)", steps),
            surface.len(),
            time_ms,
            mean,
        ));
    }

    results
}

fn run_strategy_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let cfg = PayoffConfig {
        prices: SampleRange::new(50.0, 150.0, 10_000),
        current_time: Some(0.1),
    };

    for template in StrategyTemplate::catalog() {
        let legs = template.instantiate(100.0, 0.05, 0.3).expect("Valid template");
        let mut timer = Timer::new();
        timer.start();
        let curve = payoff_curve(&legs, &cfg).expect("Valid curve");
        let analysis = analyze_strategy(&curve).expect("Non-empty curve");
        results.push(BenchmarkResult::new(
            format!("{} payoff", template.name),
            curve.len() * legs.len(),
            timer.elapsed_ms(),
            analysis.max_loss,
        ));
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(file, "Benchmark,Evaluations,Time_ms,Throughput_per_sec,Value")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6}",
            result.name, result.evaluations, result.time_ms, result.throughput_per_sec, result.value
        )?;
    }
    Ok(())
}

fn main() {
    let system_info = SystemInfo::gather();
    println!("options-analytics benchmark");
    println!("===========================");
    println!("{:#?}\n", system_info);

    let mut results = run_pricing_benchmarks();
    results.extend(run_surface_benchmarks());
    results.extend(run_strategy_benchmarks());

    println!(
        "\n{:<32} {:>12} {:>12} {:>16} {:>14}",
        "Benchmark", "Evaluations", "Time (ms)", "Throughput/s", "Value"
    );
    for r in &results {
        println!(
            "{:<32} {:>12} {:>12.2} {:>16.0} {:>14.6}",
            r.name, r.evaluations, r.time_ms, r.throughput_per_sec, r.value
        );
    }

    let filename = env::args()
        .nth(1)
        .unwrap_or_else(|| "benchmark_results.csv".to_string());
    match write_results_to_csv(&results, &system_info, &filename) {
        Ok(()) => println!("\nResults written to {}", filename),
        Err(e) => eprintln!("Error writing benchmark results: {}", e),
    }
}
