use std::collections::HashMap;

use crate::error::EngineError;
use crate::forecast::{Forecast, ForecastBlender};
use crate::model::account::AccountView;
use crate::model::intent::{PositionIntent, TradeIntent};
use crate::model::observation::PriceObservation;
use crate::risk_target::{self, RiskTargetEntry};
use crate::rules::{build_rule, MarketView, RuleSpec};
use crate::screen::{AnomalyScreen, Validation};
use crate::sizer::PositionSizer;
use crate::volatility::VolatilityEstimator;

/// Engine-wide tunables.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Fast volatility window in observations.
    pub vol_window: usize,
    pub exposure_deviation_threshold: f64,
    pub personal_risk_appetite: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            vol_window: 35,
            exposure_deviation_threshold: 0.2,
            personal_risk_appetite: 0.25,
        }
    }
}

/// Everything one evaluation cycle produced. `trade` is the only output
/// with trading consequence; the rest is diagnostics.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub validation: Validation,
    /// `None` while the blender is still warming up.
    pub intent: Option<PositionIntent>,
    pub forecasts: Vec<Forecast>,
    pub trade: Option<TradeIntent>,
}

struct InstrumentState {
    volatility: VolatilityEstimator,
    blender: ForecastBlender,
    last_close: Option<f64>,
}

/// Per-instrument orchestration of the full data flow: anomaly screen,
/// return computation, volatility update, rule updates, forecast blending,
/// position sizing. Pure with respect to external I/O; the trade decision is
/// returned to the caller, never executed.
pub struct Engine {
    screen: AnomalyScreen,
    sizer: PositionSizer,
    risk_target: RiskTargetEntry,
    instruments: HashMap<String, InstrumentState>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

impl Engine {
    /// Build an engine for a fixed instrument set with one shared rule set.
    /// The risk-target bucket is resolved from the instrument count.
    pub fn new(
        settings: EngineSettings,
        instruments: &[String],
        rule_specs: &[RuleSpec],
    ) -> Result<Self, EngineError> {
        if instruments.is_empty() {
            return Err(EngineError::Configuration(
                "engine requires at least one instrument".to_string(),
            ));
        }
        if rule_specs.is_empty() {
            return Err(EngineError::Configuration(
                "engine requires at least one rule".to_string(),
            ));
        }
        let risk_target = *risk_target::resolve(instruments.len())?;

        let mut states = HashMap::new();
        for instrument in instruments {
            let rules = rule_specs
                .iter()
                .map(|spec| build_rule(spec).map(|rule| (spec.weight, rule)))
                .collect::<Result<Vec<_>, _>>()?;
            states.insert(
                instrument.clone(),
                InstrumentState {
                    volatility: VolatilityEstimator::new(settings.vol_window),
                    blender: ForecastBlender::new(rules),
                    last_close: None,
                },
            );
        }

        Ok(Self {
            screen: AnomalyScreen::default(),
            sizer: PositionSizer {
                exposure_deviation_threshold: settings.exposure_deviation_threshold,
                personal_risk_appetite: settings.personal_risk_appetite,
            },
            risk_target,
            instruments: states,
        })
    }

    pub fn risk_target(&self) -> &RiskTargetEntry {
        &self.risk_target
    }

    /// Process one price observation for one instrument. Observations per
    /// instrument must arrive in timestamp order.
    pub fn on_observation(
        &mut self,
        obs: &PriceObservation,
        account: &AccountView,
    ) -> Result<Evaluation, EngineError> {
        let validation = self.screen.validate(obs)?;

        let state = self.instruments.get_mut(&obs.instrument).ok_or_else(|| {
            EngineError::Configuration(format!("unknown instrument '{}'", obs.instrument))
        })?;

        let price = obs.mid_close();
        if let Some(prev_close) = state.last_close {
            let return_pct = (price - prev_close) / prev_close;
            state.volatility.update(return_pct);
        }
        state.last_close = Some(price);

        let view = MarketView {
            price: Some(price),
            volatility: state.volatility.estimate(),
        };
        state.blender.update(&view);

        if !state.blender.ready() {
            return Ok(Evaluation {
                validation,
                intent: None,
                forecasts: Vec::new(),
                trade: None,
            });
        }
        let Some(volatility) = view.volatility.filter(|v| v.is_finite() && *v > 0.0) else {
            return Ok(Evaluation {
                validation,
                intent: None,
                forecasts: Vec::new(),
                trade: None,
            });
        };

        let (blended, forecasts) = state.blender.forecast(&view);
        let (intent, trade) = self.sizer.evaluate(
            &obs.instrument,
            blended,
            volatility,
            price,
            account,
            &self.risk_target,
        )?;

        Ok(Evaluation {
            validation,
            intent: Some(intent),
            forecasts,
            trade,
        })
    }
}
