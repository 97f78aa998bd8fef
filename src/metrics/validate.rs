//! Caller-side precondition checks. The calculators never call these;
//! request handlers run them before computing so bad input fails fast
//! instead of coming back as inf/NaN.
use super::call::CallInputs;
use super::put::PutInputs;
use crate::errors::{AppError, AppResult};

fn finite(name: &str, v: f64) -> AppResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AppError::invalid(format!("{name} must be a finite number")))
    }
}

fn positive(name: &str, v: f64) -> AppResult<f64> {
    if finite(name, v)? > 0.0 {
        Ok(v)
    } else {
        Err(AppError::invalid(format!("{name} must be greater than zero, got {v}")))
    }
}

fn non_negative(name: &str, v: f64) -> AppResult<f64> {
    if finite(name, v)? >= 0.0 {
        Ok(v)
    } else {
        Err(AppError::invalid(format!("{name} must not be negative, got {v}")))
    }
}

impl PutInputs {
    pub fn validate(&self) -> AppResult<()> {
        positive("stock_price", self.stock_price)?;
        positive("strike_price", self.strike_price)?;
        non_negative("premium", self.premium)?;
        positive("days_to_expiration", self.days_to_expiration)?;
        Ok(())
    }
}

impl CallInputs {
    pub fn validate(&self) -> AppResult<()> {
        positive("stock_price", self.stock_price)?;
        positive("strike_price", self.strike_price)?;
        non_negative("premium", self.premium)?;
        positive("shares", self.shares)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put() -> PutInputs {
        PutInputs {
            stock_price: 100.0,
            strike_price: 95.0,
            premium: 2.0,
            days_to_expiration: 30.0,
        }
    }

    fn call() -> CallInputs {
        CallInputs {
            stock_price: 100.0,
            strike_price: 105.0,
            premium: 3.0,
            shares: 100.0,
        }
    }

    fn message(r: AppResult<()>) -> String {
        match r {
            Err(AppError::InvalidArgument(m)) => m,
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(put().validate().is_ok());
        assert!(call().validate().is_ok());
        assert!(PutInputs { premium: 0.0, ..put() }.validate().is_ok());
    }

    #[test]
    fn test_put_rejects_zero_days() {
        let m = message(PutInputs { days_to_expiration: 0.0, ..put() }.validate());
        assert!(m.contains("days_to_expiration"), "{m}");
        assert!(PutInputs { days_to_expiration: -3.0, ..put() }.validate().is_err());
    }

    #[test]
    fn test_put_rejects_bad_strike_and_premium() {
        assert!(message(PutInputs { strike_price: 0.0, ..put() }.validate()).contains("strike_price"));
        assert!(message(PutInputs { premium: -0.5, ..put() }.validate()).contains("premium"));
    }

    #[test]
    fn test_call_rejects_zero_shares_and_stock() {
        assert!(message(CallInputs { shares: 0.0, ..call() }.validate()).contains("shares"));
        assert!(message(CallInputs { stock_price: 0.0, ..call() }.validate()).contains("stock_price"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let m = message(CallInputs { premium: f64::NAN, ..call() }.validate());
        assert!(m.contains("finite"), "{m}");
        assert!(PutInputs { stock_price: f64::INFINITY, ..put() }.validate().is_err());
    }
}
