// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and sensitivity sweeps
//!
//! This example shows how to:
//! 1. Price a European call and put
//! 2. Check put-call parity
//! 3. Sweep each input and print the resulting curves

use anyhow::Result;
use option_sensitivity::{
    format_currency, price, price_summary, sweep_all, OptionKind, OptionParameters,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Pricing and Sensitivity Demo");
    println!("==========================================");

    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
    println!(
        "Spot {} | Strike {} | T {:.2}y | r {:.1}% | vol {:.1}%",
        format_currency(params.spot),
        format_currency(params.strike),
        params.maturity,
        params.rate * 100.0,
        params.volatility * 100.0
    );

    println!("\nStep 1: Pricing...");
    let call = price(&params)?;
    let put = price(&params.with_kind(OptionKind::Put))?;
    println!("  {}", price_summary(OptionKind::Call, call));
    println!("  {}", price_summary(OptionKind::Put, put));

    println!("\nStep 2: Put-call parity check...");
    let lhs = call - put;
    let rhs = params.spot - params.discounted_strike();
    println!("  C - P = {:.6}, S - K e^(-rT) = {:.6}", lhs, rhs);

    println!("\nStep 3: Sensitivity sweeps (8 points each)...");
    for result in sweep_all(&params, 8)? {
        println!("\n  {}", result.varied.axis_label());
        println!("  {:<12} {:<12}", "Value", "Call Price");
        println!("  {}", "-".repeat(24));
        for sample in &result.samples {
            println!("  {:<12.4} {:<12.4}", sample.value, sample.price);
        }
    }

    Ok(())
}
