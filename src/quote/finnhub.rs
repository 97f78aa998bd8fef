use super::Quote;
use crate::errors::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;

/// Finnhub REST quote client. One GET per lookup, no retry, no cache.
#[derive(Clone)]
pub struct FinnhubClient {
    client: Client,
    base_url: String,
}

// Finnhub /quote response:
// {
//   "c": 261.74,      current
//   "d": 0.28,        change
//   "dp": 0.107,      percent change
//   "h": 263.31,
//   "l": 260.68,
//   "o": 261.07,
//   "pc": 261.46,     previous close
//   "t": 1582641000   unix seconds
// }
// Unknown symbols come back as all zeros with d/dp null.

#[derive(serde::Deserialize)]
struct QuoteResponse {
    c: Option<f64>,
    d: Option<f64>,
    dp: Option<f64>,
    h: Option<f64>,
    l: Option<f64>,
    o: Option<f64>,
    pc: Option<f64>,
    t: Option<i64>,
}

impl FinnhubClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .pool_max_idle_per_host(4)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Current quote for `symbol`. The symbol is trimmed and upper-cased.
    /// Non-2xx answers fail as `HTTP <status>`.
    pub async fn fetch_price(&self, symbol: &str, credential: &str) -> AppResult<Quote> {
        let symbol = normalize_symbol(symbol)?;
        let url = format!("{}/quote", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", symbol.as_str())])
            .header("X-Finnhub-Token", credential)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(symbol = %symbol, status = status.as_u16(), "finnhub quote rejected");
            return Err(AppError::QuoteApi {
                status: status.as_u16(),
                body,
            });
        }

        let data: QuoteResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("quote {symbol}: {e}")))?;

        let price = data.c.unwrap_or(0.0);
        if price <= 0.0 || !price.is_finite() {
            return Err(AppError::UnknownSymbol(symbol));
        }

        let timestamp = data
            .t
            .filter(|t| *t > 0)
            .and_then(|t| chrono::DateTime::from_timestamp(t, 0))
            .map(|dt| dt.to_rfc3339());

        tracing::debug!(symbol = %symbol, price = price, "quote fetched");

        Ok(Quote {
            symbol,
            price,
            change: data.d,
            percent_change: data.dp,
            high: data.h,
            low: data.l,
            open: data.o,
            previous_close: data.pc,
            timestamp,
        })
    }
}

/// Trimmed, upper-cased ticker; blank input is rejected.
pub fn normalize_symbol(symbol: &str) -> AppResult<String> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::invalid("symbol cannot be empty"));
    }
    Ok(symbol)
}
