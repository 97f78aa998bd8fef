use crate::credentials::CredentialStatus;
use crate::errors::{AppError, AppResult};
use crate::metrics::{CallInputs, CallPayoffMode, CallResult, PutInputs, PutResult};
use crate::quote::{normalize_symbol, Quote};
use crate::state::{AppState, RequestCounters};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, serde::Deserialize)]
pub struct PutRequest {
    /// Taken from a live quote for `symbol` when absent.
    pub stock_price: Option<f64>,
    pub symbol: Option<String>,
    pub strike_price: f64,
    pub premium: f64,
    /// Wins over `expiration` when both are sent.
    pub days_to_expiration: Option<f64>,
    pub expiration: Option<NaiveDate>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CallRequest {
    pub stock_price: Option<f64>,
    pub symbol: Option<String>,
    pub strike_price: f64,
    pub premium: f64,
    pub shares: f64,
    #[serde(default)]
    pub payoff_mode: CallPayoffMode,
}

#[derive(Debug, serde::Deserialize)]
pub struct CredentialBody {
    pub value: String,
}

#[derive(Debug, serde::Serialize)]
pub struct PutResponse {
    pub inputs: PutInputs,
    pub result: PutResult,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

#[derive(Debug, serde::Serialize)]
pub struct CallResponse {
    pub inputs: CallInputs,
    pub payoff_mode: CallPayoffMode,
    pub result: CallResult,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

/// GET /api/quote/{symbol} -- live quote with the saved key
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> AppResult<Json<Quote>> {
    let quote = fetch_quote(&state, &symbol).await?;
    Ok(Json(quote))
}

/// POST /api/put -- cash-secured put metrics
pub async fn post_put(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PutRequest>, JsonRejection>,
) -> AppResult<Json<PutResponse>> {
    let req = json_body(&state, payload)?;
    let days_to_expiration = match (req.days_to_expiration, req.expiration) {
        (Some(days), _) => days,
        (None, Some(date)) => days_until(date, chrono::Utc::now().date_naive()),
        (None, None) => {
            return Err(reject(&state, AppError::invalid(
                "days_to_expiration or expiration is required",
            )))
        }
    };

    let (stock_price, quote) =
        resolve_stock_price(&state, req.stock_price, req.symbol.as_deref()).await?;

    let inputs = PutInputs {
        stock_price,
        strike_price: req.strike_price,
        premium: req.premium,
        days_to_expiration,
    };
    inputs.validate().map_err(|e| reject(&state, e))?;

    let result = inputs.compute();
    RequestCounters::bump(&state.counters.puts_computed);
    tracing::info!(
        stock = inputs.stock_price,
        strike = inputs.strike_price,
        days = inputs.days_to_expiration,
        result = %result,
        "put computed"
    );

    Ok(Json(PutResponse {
        inputs,
        result,
        summary: result.to_string(),
        quote,
    }))
}

/// POST /api/call -- covered call metrics
pub async fn post_call(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> AppResult<Json<CallResponse>> {
    let req = json_body(&state, payload)?;
    let (stock_price, quote) =
        resolve_stock_price(&state, req.stock_price, req.symbol.as_deref()).await?;

    let inputs = CallInputs {
        stock_price,
        strike_price: req.strike_price,
        premium: req.premium,
        shares: req.shares,
    };
    inputs.validate().map_err(|e| reject(&state, e))?;

    let result = inputs.compute(req.payoff_mode);
    RequestCounters::bump(&state.counters.calls_computed);
    tracing::info!(
        stock = inputs.stock_price,
        strike = inputs.strike_price,
        shares = inputs.shares,
        mode = %req.payoff_mode,
        result = %result,
        "covered call computed"
    );

    Ok(Json(CallResponse {
        inputs,
        payoff_mode: req.payoff_mode,
        result,
        summary: result.to_string(),
        quote,
    }))
}

/// GET /api/credential -- whether a key is saved (masked)
pub async fn get_credential(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<CredentialStatus>> {
    Ok(Json(state.credentials.status()?))
}

/// PUT /api/credential -- save the key
pub async fn put_credential(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialBody>, JsonRejection>,
) -> AppResult<Json<CredentialStatus>> {
    let body = json_body(&state, payload)?;
    state.credentials.set(&body.value)?;
    Ok(Json(state.credentials.status()?))
}

/// DELETE /api/credential -- forget the key
pub async fn delete_credential(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<CredentialStatus>> {
    state.credentials.clear()?;
    Ok(Json(state.credentials.status()?))
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.counters.snapshot())
}

// ── Helpers ──

/// Malformed or incomplete bodies come back in the same `{ "error": .. }` shape as every other rejection.
fn json_body<T>(state: &AppState, payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| reject(state, AppError::invalid(e.body_text())))
}

async fn fetch_quote(state: &AppState, symbol: &str) -> AppResult<Quote> {
    // A blank symbol is bad input, not a failed lookup
    let symbol = normalize_symbol(symbol).map_err(|e| reject(state, e))?;
    let credential = state.credentials.require()?;
    match state.quotes.fetch_price(&symbol, &credential).await {
        Ok(quote) => {
            RequestCounters::bump(&state.counters.quotes_fetched);
            Ok(quote)
        }
        Err(e) => {
            RequestCounters::bump(&state.counters.quote_failures);
            tracing::warn!(symbol = %symbol, error = %e, "quote fetch failed");
            Err(e)
        }
    }
}

/// An explicit price wins; otherwise the symbol is quoted.
async fn resolve_stock_price(
    state: &AppState,
    stock_price: Option<f64>,
    symbol: Option<&str>,
) -> AppResult<(f64, Option<Quote>)> {
    match (stock_price, symbol) {
        (Some(price), _) => Ok((price, None)),
        (None, Some(symbol)) => {
            let quote = fetch_quote(state, symbol).await?;
            Ok((quote.price, Some(quote)))
        }
        (None, None) => Err(reject(state, AppError::invalid("stock_price or symbol is required"))),
    }
}

/// Calendar days from `today` to `expiration`; zero or negative once expired.
fn days_until(expiration: NaiveDate, today: NaiveDate) -> f64 {
    (expiration - today).num_days() as f64
}

fn reject(state: &AppState, e: AppError) -> AppError {
    RequestCounters::bump(&state.counters.inputs_rejected);
    e
}
