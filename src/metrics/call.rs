//! Covered call metrics for a short call against `shares` long shares.
//!
//! premium return = premium / (S * shares) * 100
//! total gain     = premium + (K - S) * shares     (if called away at K)
//! breakeven      = K - premium / shares           (strike-anchored)
//! P/L @ expiry   = premium                        if S < K
//!                = total gain                     otherwise
//!
//! Pure function, no guards: zero shares or a zero stock price come back as inf/NaN.
use super::fmt2;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallInputs {
    pub stock_price: f64,
    pub strike_price: f64,
    pub premium: f64,
    pub shares: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallResult {
    /// Percent of the covered position's market value.
    pub premium_return: f64,
    pub total_potential_gain: f64,
    pub breakeven_price: f64,
    pub profit_loss_at_expiration: f64,
}

/// How the below-strike branch of the expiration P/L is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallPayoffMode {
    /// Premium only below the strike.
    #[default]
    AsQuoted,
    /// Premium plus `(K - S) * shares` below the strike, same as the called-away gain.
    Symmetric,
}

impl fmt::Display for CallPayoffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AsQuoted => write!(f, "as_quoted"),
            Self::Symmetric => write!(f, "symmetric"),
        }
    }
}

#[inline]
pub fn compute_call(stock_price: f64, strike_price: f64, premium: f64, shares: f64) -> CallResult {
    compute_call_with(stock_price, strike_price, premium, shares, CallPayoffMode::AsQuoted)
}

#[inline]
pub fn compute_call_with(
    stock_price: f64,
    strike_price: f64,
    premium: f64,
    shares: f64,
    mode: CallPayoffMode,
) -> CallResult {
    let premium_return = premium / (stock_price * shares) * 100.0;
    let total_potential_gain = premium + (strike_price - stock_price) * shares;
    let breakeven_price = strike_price - premium / shares;

    let profit_loss_at_expiration = if stock_price < strike_price {
        match mode {
            CallPayoffMode::AsQuoted => premium,
            CallPayoffMode::Symmetric => (strike_price - stock_price) * shares + premium,
        }
    } else {
        total_potential_gain
    };

    CallResult {
        premium_return,
        total_potential_gain,
        breakeven_price,
        profit_loss_at_expiration,
    }
}

impl CallInputs {
    #[inline]
    pub fn compute(&self, mode: CallPayoffMode) -> CallResult {
        compute_call_with(self.stock_price, self.strike_price, self.premium, self.shares, mode)
    }
}

impl fmt::Display for CallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "premium return {}%, total potential gain ${}, breakeven ${}, P/L at expiration ${}",
            fmt2(self.premium_return),
            fmt2(self.total_potential_gain),
            fmt2(self.breakeven_price),
            fmt2(self.profit_loss_at_expiration),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_below_strike_keeps_premium_only() {
        let r = compute_call(100.0, 105.0, 3.0, 100.0);
        assert!((r.premium_return - 0.03).abs() < EPS, "premium_return={}", r.premium_return);
        assert_eq!(r.total_potential_gain, 503.0);
        assert!((r.breakeven_price - 104.97).abs() < EPS, "breakeven={}", r.breakeven_price);
        assert_eq!(r.profit_loss_at_expiration, 3.0, "not the 503 called-away gain");
    }

    #[test]
    fn test_above_strike_is_called_away() {
        let r = compute_call(110.0, 105.0, 3.0, 100.0);
        assert_eq!(r.total_potential_gain, -497.0);
        assert_eq!(r.profit_loss_at_expiration, -497.0);
    }

    #[test]
    fn test_at_strike_uses_called_away_branch() {
        let r = compute_call(105.0, 105.0, 3.0, 100.0);
        assert_eq!(r.profit_loss_at_expiration, r.total_potential_gain);
        assert_eq!(r.profit_loss_at_expiration, 3.0);
    }

    #[test]
    fn test_breakeven_anchored_on_strike_not_stock() {
        let a = compute_call(80.0, 105.0, 3.0, 100.0);
        let b = compute_call(120.0, 105.0, 3.0, 100.0);
        assert_eq!(a.breakeven_price, b.breakeven_price);
    }

    #[test]
    fn test_symmetric_mode_only_changes_below_strike() {
        let quoted = compute_call_with(100.0, 105.0, 3.0, 100.0, CallPayoffMode::AsQuoted);
        let sym = compute_call_with(100.0, 105.0, 3.0, 100.0, CallPayoffMode::Symmetric);
        assert_eq!(quoted.profit_loss_at_expiration, 3.0);
        assert_eq!(sym.profit_loss_at_expiration, 503.0);
        assert_eq!(quoted.premium_return, sym.premium_return);
        assert_eq!(quoted.breakeven_price, sym.breakeven_price);

        let quoted = compute_call_with(110.0, 105.0, 3.0, 100.0, CallPayoffMode::AsQuoted);
        let sym = compute_call_with(110.0, 105.0, 3.0, 100.0, CallPayoffMode::Symmetric);
        assert_eq!(quoted, sym);
    }

    #[test]
    fn test_default_mode_is_as_quoted() {
        assert_eq!(CallPayoffMode::default(), CallPayoffMode::AsQuoted);
        let inputs = CallInputs {
            stock_price: 100.0,
            strike_price: 105.0,
            premium: 3.0,
            shares: 100.0,
        };
        assert_eq!(inputs.compute(CallPayoffMode::default()), compute_call(100.0, 105.0, 3.0, 100.0));
    }

    #[test]
    fn test_zero_shares_passes_through() {
        let r = compute_call(100.0, 105.0, 3.0, 0.0);
        assert_eq!(r.premium_return, f64::INFINITY);
        assert_eq!(r.breakeven_price, f64::NEG_INFINITY);
        assert_eq!(r.total_potential_gain, 3.0);
    }

    #[test]
    fn test_zero_stock_price_passes_through() {
        let r = compute_call(0.0, 105.0, 3.0, 100.0);
        assert_eq!(r.premium_return, f64::INFINITY);
        let r = compute_call(0.0, 105.0, 0.0, 100.0);
        assert!(r.premium_return.is_nan());
    }

    #[test]
    fn test_deterministic_bit_identical() {
        let a = compute_call(47.31, 50.0, 0.87, 300.0);
        let b = compute_call(47.31, 50.0, 0.87, 300.0);
        assert_eq!(a.premium_return.to_bits(), b.premium_return.to_bits());
        assert_eq!(a.total_potential_gain.to_bits(), b.total_potential_gain.to_bits());
        assert_eq!(a.breakeven_price.to_bits(), b.breakeven_price.to_bits());
        assert_eq!(
            a.profit_loss_at_expiration.to_bits(),
            b.profit_loss_at_expiration.to_bits()
        );
    }

    #[test]
    fn test_payoff_mode_serde_names() {
        let m: CallPayoffMode = serde_json::from_str("\"symmetric\"").unwrap();
        assert_eq!(m, CallPayoffMode::Symmetric);
        assert_eq!(serde_json::to_string(&CallPayoffMode::AsQuoted).unwrap(), "\"as_quoted\"");
    }

    #[test]
    fn test_display_two_decimals() {
        let s = compute_call(100.0, 105.0, 3.0, 100.0).to_string();
        assert!(s.contains("premium return 0.03%"), "{s}");
        assert!(s.contains("breakeven $104.97"), "{s}");
    }
}
