pub mod accel;
pub mod breakout;
pub mod ewmac;
pub mod scalars;

use serde::Deserialize;

use crate::error::EngineError;

pub use accel::AccelRule;
pub use breakout::BreakoutRule;
pub use ewmac::EwmacRule;
pub use scalars::forecast_scalar;

/// Per-observation market snapshot handed to every rule. `price` is absent
/// when the feed produced no bar for the instrument this cycle; `volatility`
/// is absent until the estimator has warmed up.
#[derive(Debug, Clone, Copy)]
pub struct MarketView {
    pub price: Option<f64>,
    pub volatility: Option<f64>,
}

/// A trading rule: rolling indicators updated once per observation, plus a
/// raw directional forecast read from the current indicator state. The
/// blender caps and weights raw forecasts.
pub trait Rule {
    fn name(&self) -> &str;

    /// True once every indicator the rule reads has enough history.
    fn ready(&self) -> bool;

    /// Feed the current observation into the rule's rolling indicators.
    fn update(&mut self, view: &MarketView);

    /// Raw (uncapped) forecast from current indicator state. Pure.
    fn forecast(&self, view: &MarketView) -> f64;
}

/// Declarative description of one rule instance, as it appears in config.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    /// One of "breakout", "ewmac", "accel".
    pub kind: String,
    /// Named instance, must exist in the forecast-scalar table.
    pub name: String,
    /// Blending weight.
    pub weight: f64,
    /// Breakout lookback window.
    #[serde(default)]
    pub window: Option<usize>,
    /// Fast EMA period for ewmac/accel.
    #[serde(default)]
    pub fast: Option<usize>,
    /// Slow EMA period; defaults to 4x fast.
    #[serde(default)]
    pub slow: Option<usize>,
}

/// Instantiate a rule from its spec. Unknown kinds, missing parameters and
/// unknown scalar names are all fatal configuration errors.
pub fn build_rule(spec: &RuleSpec) -> Result<Box<dyn Rule>, EngineError> {
    match spec.kind.as_str() {
        "breakout" => {
            let window = spec.window.ok_or_else(|| {
                EngineError::Configuration(format!(
                    "breakout rule '{}' requires a window",
                    spec.name
                ))
            })?;
            Ok(Box::new(BreakoutRule::new(&spec.name, window)?))
        }
        "ewmac" => {
            let fast = spec.fast.ok_or_else(|| {
                EngineError::Configuration(format!(
                    "ewmac rule '{}' requires a fast period",
                    spec.name
                ))
            })?;
            Ok(Box::new(EwmacRule::new(&spec.name, fast, spec.slow)?))
        }
        "accel" => {
            let fast = spec.fast.ok_or_else(|| {
                EngineError::Configuration(format!(
                    "accel rule '{}' requires a fast period",
                    spec.name
                ))
            })?;
            Ok(Box::new(AccelRule::new(&spec.name, fast, spec.slow)?))
        }
        other => Err(EngineError::Configuration(format!(
            "unknown rule kind '{other}' for rule '{}'",
            spec.name
        ))),
    }
}
