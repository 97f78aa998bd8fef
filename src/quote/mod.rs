pub mod finnhub;

pub use finnhub::{normalize_symbol, FinnhubClient};

/// Latest quote for one symbol. Only `price` feeds the calculators;
/// the rest is passed through for display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub previous_close: Option<f64>,
    /// RFC 3339, absent when Finnhub sends no trade time.
    pub timestamp: Option<String>,
}
