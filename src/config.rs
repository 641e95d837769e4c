use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::engine::EngineSettings;
use crate::rules::RuleSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub engine: EngineConfig,
    /// Instrument identifiers the engine will size positions for.
    pub instruments: Vec<String>,
    /// Rule instances applied to every instrument.
    pub rules: Vec<RuleSpec>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Total notional trading capital in account currency.
    pub capital: f64,
    #[serde(default = "default_deviation_threshold")]
    pub exposure_deviation_threshold: f64,
    #[serde(default = "default_risk_appetite")]
    pub personal_risk_appetite: f64,
    #[serde(default = "default_vol_window")]
    pub vol_window: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_deviation_threshold() -> f64 {
    0.2
}

fn default_risk_appetite() -> f64 {
    0.25
}

fn default_vol_window() -> usize {
    35
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if config.instruments.is_empty() {
            anyhow::bail!("config lists no instruments");
        }
        if config.rules.is_empty() {
            anyhow::bail!("config lists no rules");
        }

        Ok(config)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            vol_window: self.engine.vol_window,
            exposure_deviation_threshold: self.engine.exposure_deviation_threshold,
            personal_risk_appetite: self.engine.personal_risk_appetite,
        }
    }

    /// Capital allocated to each instrument (even split).
    pub fn capital_per_instrument(&self) -> f64 {
        (self.engine.capital / self.instruments.len() as f64).round()
    }
}

fn spec(kind: &str, name: &str, weight: f64, window: Option<usize>, fast: Option<usize>) -> RuleSpec {
    RuleSpec {
        kind: kind.to_string(),
        name: name.to_string(),
        weight,
        window,
        fast,
        slow: None,
    }
}

/// The standard thirteen-rule portfolio: four trend crossovers, six
/// breakouts and three acceleration rules, each family weighted 0.3 split
/// evenly across its members.
pub fn default_rule_set() -> Vec<RuleSpec> {
    vec![
        spec("ewmac", "momentum8", 0.3 / 4.0, None, Some(8)),
        spec("ewmac", "momentum16", 0.3 / 4.0, None, Some(16)),
        spec("ewmac", "momentum32", 0.3 / 4.0, None, Some(32)),
        spec("ewmac", "momentum64", 0.3 / 4.0, None, Some(64)),
        spec("breakout", "breakout10", 0.3 / 6.0, Some(10), None),
        spec("breakout", "breakout20", 0.3 / 6.0, Some(20), None),
        spec("breakout", "breakout40", 0.3 / 6.0, Some(40), None),
        spec("breakout", "breakout80", 0.3 / 6.0, Some(80), None),
        spec("breakout", "breakout160", 0.3 / 6.0, Some(160), None),
        spec("breakout", "breakout320", 0.3 / 6.0, Some(320), None),
        spec("accel", "accel16", 0.3 / 3.0, None, Some(16)),
        spec("accel", "accel32", 0.3 / 3.0, None, Some(32)),
        spec("accel", "accel64", 0.3 / 3.0, None, Some(64)),
    ]
}
