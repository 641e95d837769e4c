use crate::error::EngineError;
use crate::indicator::minmax::RollingExtrema;
use crate::rules::scalars::forecast_scalar;
use crate::rules::{MarketView, Rule};

/// Price-channel breakout: signal is where the close sits inside the rolling
/// min/max range, scaled so the historical average absolute forecast is 10.
#[derive(Debug)]
pub struct BreakoutRule {
    name: String,
    scalar: f64,
    extrema: RollingExtrema,
}

impl BreakoutRule {
    pub fn new(name: &str, window: usize) -> Result<Self, EngineError> {
        Ok(Self {
            name: name.to_string(),
            scalar: forecast_scalar(name)?,
            extrema: RollingExtrema::new(window),
        })
    }
}

impl Rule for BreakoutRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn ready(&self) -> bool {
        self.extrema.is_ready()
    }

    fn update(&mut self, view: &MarketView) {
        if let Some(price) = view.price {
            self.extrema.push(price);
        }
    }

    fn forecast(&self, view: &MarketView) -> f64 {
        let Some(price) = view.price else {
            tracing::debug!(rule = %self.name, "unable to forecast - missing price");
            return 0.0;
        };
        let (Some(min), Some(max)) = (self.extrema.min(), self.extrema.max()) else {
            return 0.0;
        };
        let range = max - min;
        if range <= 0.0 {
            return 0.0;
        }
        let avg = (max + min) / 2.0;
        let signal = (price - avg) / range;
        signal * self.scalar
    }
}
