//! Options-selling calculator service.
//!
//! Fetches a stock's current price from Finnhub and computes payoff
//! metrics for two strategies:
//!
//! - **Cash-secured put** ([`metrics::put`]): return on collateral, breakeven,
//!   simple annualized yield and P/L at expiration for one 100-share contract.
//! - **Covered call** ([`metrics::call`]): premium return, called-away gain,
//!   breakeven and P/L at expiration for a position of `shares` shares.
//!
//! The calculators are pure functions with no input guards; the HTTP layer in
//! [`server`] validates requests before calling them. The Finnhub API key lives
//! in a one-row SQLite store ([`credentials`]).

pub mod config;
pub mod credentials;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod quote;
pub mod server;
pub mod state;
