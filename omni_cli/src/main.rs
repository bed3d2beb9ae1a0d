//! # Omnicalc CLI Application
//!
//! Two modes:
//!
//! - `omni_cli <file.json>` reads a serialized `CalculationItem`, runs it,
//!   and prints the `CalculationOutput` as pretty JSON. Errors print as
//!   structured JSON to stderr with exit code 1.
//! - With no argument, runs an interactive mortgage demo.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use omni_core::calculations::mortgage::{calculate, MortgageInput};
use omni_core::CalculationItem;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn run_json_file(path: &str) -> ExitCode {
    let payload = match std::fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let item: CalculationItem = match serde_json::from_str(&payload) {
        Ok(item) => item,
        Err(e) => {
            eprintln!("Error: invalid calculation JSON: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match item.calculate() {
        Ok(output) => {
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_interactive_demo() -> ExitCode {
    println!("Omnicalc CLI - Formula Calculators");
    println!("==================================");
    println!();
    println!("Pass a JSON file to run any calculator. Running mortgage demo...");
    println!();

    let home_price = prompt_f64("Enter home price [300000]: ", 300_000.0);
    let down_payment = prompt_f64("Enter down payment [60000]: ", 60_000.0);
    let annual_rate_pct = prompt_f64("Enter annual rate (%) [6.0]: ", 6.0);
    let term_years = prompt_f64("Enter term (years) [30]: ", 30.0) as u32;

    let input = MortgageInput {
        home_price,
        down_payment,
        annual_rate_pct,
        term_years,
    };

    match calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  MORTGAGE CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Price:    {:.2}", input.home_price);
            println!("  Down:     {:.2} ({:.1}%)", input.down_payment, input.down_payment_pct());
            println!("  Rate:     {:.2}%", input.annual_rate_pct);
            println!("  Term:     {} years", input.term_years);
            println!();
            println!("Results:");
            println!("  Loan amount:     {:.2}", result.loan_amount);
            println!("  Monthly payment: {:.2}", result.monthly_payment);
            println!("  Total paid:      {:.2}", result.total_paid);
            println!("  Total interest:  {:.2}", result.total_interest);
            println!();
            println!("Steps:");
            for step in &result.steps {
                println!("  {}: {} = {}", step.label, step.formula, step.value);
            }
            if !result.recommendations.is_empty() {
                println!();
                println!("Recommendations:");
                for rec in &result.recommendations {
                    println!("  [{}] {}", rec.category, rec.text);
                }
            }

            println!();
            println!("JSON Output (for UI/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    match std::env::args().nth(1) {
        Some(path) => run_json_file(&path),
        None => run_interactive_demo(),
    }
}
