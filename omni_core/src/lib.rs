//! # omni_core - Omnicalc Calculation Engine
//!
//! `omni_core` is the computational heart of Omnicalc, a catalog of
//! single-purpose formula calculators with a clean, JSON-first API. Every
//! calculator is a pure function from one input record to one result
//! record, making the crate trivial to embed behind any UI layer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explainable**: Every result carries ordered calculation steps and
//!   recommendation text alongside the numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use omni_core::calculations::mortgage::{MortgageInput, calculate};
//!
//! let input = MortgageInput {
//!     home_price: 300_000.0,
//!     down_payment: 60_000.0,
//!     annual_rate_pct: 6.0,
//!     term_years: 30,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Monthly payment: {:.2}", result.monthly_payment);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculator types and the dispatch wrapper
//! - [`elements`] - Static periodic-table database
//! - [`errors`] - Structured error types
//! - [`report`] - Shared step/recommendation result shaping
//! - [`units`] - Type-safe unit wrappers

pub mod calculations;
pub mod elements;
pub mod errors;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use report::{CalculationStep, Recommendation};
