use std::collections::HashMap;

use chrono::Duration;

use crate::error::EngineError;
use crate::model::observation::PriceObservation;

/// Outcome of a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Clean,
    /// Consecutive observations are further apart than the stale-gap limit.
    /// Non-fatal; processing continues.
    StaleGap { gap_days: i64 },
}

/// Validates successive price observations per instrument for implausible
/// jumps and stale gaps. Stateful and sequential: the previous accepted
/// observation is the baseline for the next comparison.
#[derive(Debug)]
pub struct AnomalyScreen {
    high_tolerance: f64,
    low_tolerance: f64,
    max_gap: Duration,
    baselines: HashMap<String, PriceObservation>,
}

impl Default for AnomalyScreen {
    fn default() -> Self {
        Self::new(0.25, 5)
    }
}

impl AnomalyScreen {
    pub fn new(tolerance: f64, max_gap_days: i64) -> Self {
        Self {
            high_tolerance: 1.0 + tolerance,
            low_tolerance: 1.0 - tolerance,
            max_gap: Duration::days(max_gap_days),
            baselines: HashMap::new(),
        }
    }

    /// Validate one observation against the instrument's baseline. The very
    /// first observation for an instrument is accepted unconditionally. The
    /// baseline advances only on success.
    pub fn validate(&mut self, obs: &PriceObservation) -> Result<Validation, EngineError> {
        let Some(last) = self.baselines.get(&obs.instrument) else {
            self.baselines.insert(obs.instrument.clone(), obs.clone());
            return Ok(Validation::Clean);
        };

        let pairs: [(&'static str, f64, f64); 4] = [
            ("bid_open", obs.bid_open, last.bid_open),
            ("bid_close", obs.bid_close, last.bid_close),
            ("ask_open", obs.ask_open, last.ask_open),
            ("ask_close", obs.ask_close, last.ask_close),
        ];
        for (field, current, previous) in pairs {
            if current > previous * self.high_tolerance || current < previous * self.low_tolerance
            {
                return Err(EngineError::DataAnomaly {
                    instrument: obs.instrument.clone(),
                    field,
                    previous,
                    current,
                    last_seen: last.timestamp,
                    observed: obs.timestamp,
                });
            }
        }

        let gap = obs.timestamp - last.timestamp;
        let outcome = if gap > self.max_gap {
            tracing::warn!(
                instrument = %obs.instrument,
                gap_days = gap.num_days(),
                last_bar = %last.timestamp,
                new_bar = %obs.timestamp,
                "gap between observations exceeds stale limit"
            );
            Validation::StaleGap {
                gap_days: gap.num_days(),
            }
        } else {
            Validation::Clean
        };

        self.baselines.insert(obs.instrument.clone(), obs.clone());
        Ok(outcome)
    }
}
