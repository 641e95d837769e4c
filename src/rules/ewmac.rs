use crate::error::EngineError;
use crate::indicator::ema::Ema;
use crate::rules::scalars::forecast_scalar;
use crate::rules::{MarketView, Rule};

/// Trend-crossover (EWMAC): fast minus slow EMA, risk-adjusted by the
/// instrument's volatility in price units.
#[derive(Debug)]
pub struct EwmacRule {
    name: String,
    scalar: f64,
    fast_ma: Ema,
    slow_ma: Ema,
    vol_ready: bool,
}

impl EwmacRule {
    /// `slow` defaults to four times `fast`.
    pub fn new(name: &str, fast: usize, slow: Option<usize>) -> Result<Self, EngineError> {
        let slow = slow.unwrap_or(fast * 4);
        if fast >= slow {
            return Err(EngineError::Configuration(format!(
                "ewmac rule '{name}': fast period {fast} must be below slow period {slow}"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            scalar: forecast_scalar(name)?,
            fast_ma: Ema::new(fast),
            slow_ma: Ema::new(slow),
            vol_ready: false,
        })
    }
}

impl Rule for EwmacRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn ready(&self) -> bool {
        self.slow_ma.is_ready() && self.vol_ready
    }

    fn update(&mut self, view: &MarketView) {
        if let Some(price) = view.price {
            self.fast_ma.push(price);
            self.slow_ma.push(price);
        }
        self.vol_ready = view.volatility.is_some();
    }

    fn forecast(&self, view: &MarketView) -> f64 {
        let (Some(price), Some(vol)) = (view.price, view.volatility) else {
            tracing::debug!(rule = %self.name, "unable to forecast - missing price or volatility");
            return 0.0;
        };
        let (Some(fast), Some(slow)) = (self.fast_ma.value(), self.slow_ma.value()) else {
            return 0.0;
        };
        let mac = fast - slow;
        // Instrument risk in price units = percentage volatility x price.
        let risk_in_price_units = vol * price;
        if risk_in_price_units <= 0.0 {
            return 0.0;
        }
        (mac / risk_in_price_units) * self.scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(price: f64, vol: Option<f64>) -> MarketView {
        MarketView {
            price: Some(price),
            volatility: vol,
        }
    }

    #[test]
    fn slow_defaults_to_four_times_fast() {
        let mut rule = EwmacRule::new("momentum8", 8, None).unwrap();
        // slow EMA spans 32 samples; not ready before then even with vol
        for i in 0..31 {
            rule.update(&view(100.0 + i as f64 * 0.1, Some(0.16)));
            assert!(!rule.ready(), "ready too early at sample {i}");
        }
        rule.update(&view(103.2, Some(0.16)));
        assert!(rule.ready());
    }

    #[test]
    fn not_ready_without_volatility() {
        let mut rule = EwmacRule::new("momentum8", 8, None).unwrap();
        for i in 0..40 {
            rule.update(&view(100.0 + i as f64 * 0.1, None));
        }
        assert!(!rule.ready());
    }

    #[test]
    fn uptrend_gives_positive_forecast() {
        let mut rule = EwmacRule::new("momentum8", 8, None).unwrap();
        for i in 0..80 {
            rule.update(&view(100.0 + i as f64, Some(0.16)));
        }
        let f = rule.forecast(&view(180.0, Some(0.16)));
        assert!(f > 0.0, "expected positive forecast in uptrend, got {f}");
    }

    #[test]
    fn fast_not_below_slow_is_rejected() {
        assert!(EwmacRule::new("momentum8", 8, Some(8)).is_err());
    }
}
