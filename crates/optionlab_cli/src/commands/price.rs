//! Price command implementation.
//!
//! Prices a European call/put pair with Greeks and prints the result
//! as a table or JSON.

use tracing::info;

use optionlab_models::analytical::BlackScholes;
use optionlab_models::instruments::{OptionContract, OptionType};

use crate::{CliError, Result};

/// Run the price command
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    format: &str,
) -> Result<()> {
    info!("Pricing: S={spot} K={strike} T={expiry} σ={volatility} r={rate}");

    let model = BlackScholes::new(spot, rate, volatility)?;
    let contract = OptionContract::new(strike, expiry)?;

    let call_price = model.price_call(&contract);
    let put_price = model.price_put(&contract);
    let call_greeks = model.greeks(&contract, OptionType::Call);
    let put_greeks = model.greeks(&contract, OptionType::Put);

    match format {
        "table" => {
            println!("\n┌────────────┬────────────┬────────────┐");
            println!("│            │ CALL       │ PUT        │");
            println!("├────────────┼────────────┼────────────┤");
            println!("│ Value      │ {:>10.4} │ {:>10.4} │", call_price, put_price);
            println!(
                "│ Delta      │ {:>10.4} │ {:>10.4} │",
                call_greeks.delta, put_greeks.delta
            );
            println!(
                "│ Vega       │ {:>10.4} │ {:>10.4} │",
                call_greeks.vega, put_greeks.vega
            );
            println!("└────────────┴────────────┴────────────┘");
        }
        "json" => {
            let output = serde_json::json!({
                "inputs": {
                    "spot": spot,
                    "strike": strike,
                    "expiry": expiry,
                    "volatility": volatility,
                    "rate": rate,
                },
                "call": { "price": call_price, "greeks": call_greeks },
                "put": { "price": put_price, "greeks": put_greeks },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}
