pub mod call;
pub mod put;
pub mod validate;

pub use call::{compute_call, compute_call_with, CallInputs, CallPayoffMode, CallResult};
pub use put::{compute_put, PutInputs, PutResult};

/// Shares per standard equity option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Day count used to annualize a period return (simple, no compounding).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Two-decimal rendering used for display strings. Non-finite values
/// print as `inf`/`-inf`/`NaN` so a bad input is visible, not hidden.
#[inline]
pub fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}
