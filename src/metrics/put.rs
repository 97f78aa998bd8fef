//! Cash-secured put metrics.
//!
//! ROC          = premium / (K * 100) * 100
//! breakeven    = K - premium
//! annualized   = ROC * (365 / days)
//! P/L @ expiry = premium                        if S > K
//!              = premium - (K - S) * 100        otherwise
//!
//! One standard contract (100 shares) is always assumed. Pure function,
//! no guards: a zero strike or zero days comes back as inf/NaN.
use super::{fmt2, CONTRACT_MULTIPLIER, DAYS_PER_YEAR};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PutInputs {
    pub stock_price: f64,
    pub strike_price: f64,
    pub premium: f64,
    pub days_to_expiration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PutResult {
    /// Percent of the cash collateral (strike * 100).
    pub return_on_capital: f64,
    pub breakeven_price: f64,
    /// Percent, simple linear scaling to 365 days.
    pub annualized_yield: f64,
    pub profit_loss_at_expiration: f64,
}

#[inline]
pub fn compute_put(
    stock_price: f64,
    strike_price: f64,
    premium: f64,
    days_to_expiration: f64,
) -> PutResult {
    let collateral = strike_price * CONTRACT_MULTIPLIER;
    let return_on_capital = premium / collateral * 100.0;
    let breakeven_price = strike_price - premium;
    let annualized_yield = return_on_capital * (DAYS_PER_YEAR / days_to_expiration);

    // Expires worthless above the strike; otherwise assigned 100 shares at K.
    let profit_loss_at_expiration = if stock_price > strike_price {
        premium
    } else {
        premium - (strike_price - stock_price) * CONTRACT_MULTIPLIER
    };

    PutResult {
        return_on_capital,
        breakeven_price,
        annualized_yield,
        profit_loss_at_expiration,
    }
}

impl PutInputs {
    #[inline]
    pub fn compute(&self) -> PutResult {
        compute_put(
            self.stock_price,
            self.strike_price,
            self.premium,
            self.days_to_expiration,
        )
    }
}

impl fmt::Display for PutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "return on capital {}%, breakeven ${}, annualized yield {}%, P/L at expiration ${}",
            fmt2(self.return_on_capital),
            fmt2(self.breakeven_price),
            fmt2(self.annualized_yield),
            fmt2(self.profit_loss_at_expiration),
        )
    }
}
