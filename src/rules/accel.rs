use crate::error::EngineError;
use crate::indicator::delay::Delay;
use crate::indicator::ema::Ema;
use crate::rules::scalars::forecast_scalar;
use crate::rules::{MarketView, Rule};

/// Acceleration: change in the risk-adjusted EWMAC over a lag of `fast`
/// periods. The lagged MAC is divided by the current volatility and price,
/// not the lagged ones; the historical ones would be more correct but this
/// approximation is part of the rule's defined output.
#[derive(Debug)]
pub struct AccelRule {
    name: String,
    scalar: f64,
    fast_ma: Ema,
    slow_ma: Ema,
    fast_ma_lag: Delay,
    slow_ma_lag: Delay,
    vol_ready: bool,
}

impl AccelRule {
    /// `slow` defaults to four times `fast`; the lag equals `fast`.
    pub fn new(name: &str, fast: usize, slow: Option<usize>) -> Result<Self, EngineError> {
        let slow = slow.unwrap_or(fast * 4);
        if fast >= slow {
            return Err(EngineError::Configuration(format!(
                "accel rule '{name}': fast period {fast} must be below slow period {slow}"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            scalar: forecast_scalar(name)?,
            fast_ma: Ema::new(fast),
            slow_ma: Ema::new(slow),
            fast_ma_lag: Delay::new(fast),
            slow_ma_lag: Delay::new(fast),
            vol_ready: false,
        })
    }
}

impl Rule for AccelRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn ready(&self) -> bool {
        self.slow_ma_lag.is_ready() && self.vol_ready
    }

    fn update(&mut self, view: &MarketView) {
        if let Some(price) = view.price {
            if let Some(fast) = self.fast_ma.push(price) {
                self.fast_ma_lag.push(fast);
            }
            if let Some(slow) = self.slow_ma.push(price) {
                self.slow_ma_lag.push(slow);
            }
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
        let (Some(fast_lag), Some(slow_lag)) =
            (self.fast_ma_lag.value(), self.slow_ma_lag.value())
        else {
            return 0.0;
        };
        let risk_in_price_units = vol * price;
        if risk_in_price_units <= 0.0 {
            return 0.0;
        }
        let risk_adj_mac = (fast - slow) / risk_in_price_units;
        let risk_adj_mac_lag = (fast_lag - slow_lag) / risk_in_price_units;
        (risk_adj_mac - risk_adj_mac_lag) * self.scalar
    }
}
