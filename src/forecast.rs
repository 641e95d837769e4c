use crate::rules::{MarketView, Rule};

/// Forecasts are scaled so 10 is the average historical signal magnitude,
/// and capped at twice that.
pub const FORECAST_CAP: f64 = 20.0;

/// Cap a raw forecast to [-FORECAST_CAP, FORECAST_CAP]; zero stays zero.
pub fn capped_forecast(raw: f64) -> f64 {
    if raw > 0.0 {
        raw.min(FORECAST_CAP)
    } else if raw < 0.0 {
        raw.max(-FORECAST_CAP)
    } else {
        0.0
    }
}

/// One rule's contribution to a blended forecast, kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub name: String,
    pub weight: f64,
    pub forecast: f64,
}

/// Combines a fixed, ordered set of weighted rules into one scalar forecast.
pub struct ForecastBlender {
    rules: Vec<(f64, Box<dyn Rule>)>,
}

impl ForecastBlender {
    pub fn new(rules: Vec<(f64, Box<dyn Rule>)>) -> Self {
        Self { rules }
    }

    /// Ready only when every constituent rule has enough history.
    pub fn ready(&self) -> bool {
        self.rules.iter().all(|(_, rule)| rule.ready())
    }

    /// Feed the current observation into every rule's indicators.
    pub fn update(&mut self, view: &MarketView) {
        for (_, rule) in &mut self.rules {
            rule.update(view);
        }
    }

    /// Weighted sum of capped per-rule forecasts, plus the per-rule detail
    /// in rule order. Pure given current rule state.
    pub fn forecast(&self, view: &MarketView) -> (f64, Vec<Forecast>) {
        let forecasts: Vec<Forecast> = self
            .rules
            .iter()
            .map(|(weight, rule)| Forecast {
                name: rule.name().to_string(),
                weight: *weight,
                forecast: capped_forecast(rule.forecast(view)),
            })
            .collect();

        let blended = forecasts.iter().map(|f| f.weight * f.forecast).sum();
        (blended, forecasts)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
