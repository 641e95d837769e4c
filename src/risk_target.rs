use crate::error::EngineError;

/// Risk budgets for a given number of traded instruments.
///
/// Theoretical SR = 0.24 x IDM; theoretical risk target = SR / 2 (do not
/// use directly); the recommended account-level target is the deliberately
/// more conservative column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskTargetEntry {
    /// Instrument diversification multiplier.
    pub idm: f64,
    pub theoretical_sharpe: f64,
    pub theoretical_risk_target: f64,
    /// Recommended account-level risk target (half-Kelly ceiling).
    pub account_risk_target: f64,
    /// Recommended instrument-level risk target (= idm x account target).
    pub instrument_risk_target: f64,
}

const fn entry(
    idm: f64,
    theoretical_sharpe: f64,
    theoretical_risk_target: f64,
    account_risk_target: f64,
    instrument_risk_target: f64,
) -> RiskTargetEntry {
    RiskTargetEntry {
        idm,
        theoretical_sharpe,
        theoretical_risk_target,
        account_risk_target,
        instrument_risk_target,
    }
}

/// (inclusive lower bound, exclusive upper bound, entry)
const RISK_TARGET_BUCKETS: [(usize, usize, RiskTargetEntry); 11] = [
    (1, 2, entry(1.00, 0.240, 0.120, 0.12, 0.120)),
    (2, 3, entry(1.20, 0.288, 0.144, 0.13, 0.156)),
    (3, 4, entry(1.48, 0.355, 0.178, 0.14, 0.207)),
    (4, 5, entry(1.56, 0.374, 0.187, 0.17, 0.265)),
    (5, 6, entry(1.70, 0.408, 0.204, 0.19, 0.323)),
    (6, 7, entry(1.90, 0.456, 0.228, 0.20, 0.380)),
    (7, 8, entry(2.10, 0.504, 0.252, 0.23, 0.483)),
    (8, 15, entry(2.2, 0.528, 0.264, 0.24, 0.528)),
    (15, 25, entry(2.3, 0.552, 0.276, 0.25, 0.575)),
    (25, 30, entry(2.4, 0.576, 0.288, 0.25, 0.600)),
    (30, 100, entry(2.5, 0.600, 0.300, 0.25, 0.625)),
];

/// Resolve the risk-target entry for the number of traded instruments.
/// Counts outside every bucket indicate a setup mistake and are fatal.
pub fn resolve(instrument_count: usize) -> Result<&'static RiskTargetEntry, EngineError> {
    RISK_TARGET_BUCKETS
        .iter()
        .find(|(lo, hi, _)| instrument_count >= *lo && instrument_count < *hi)
        .map(|(_, _, entry)| entry)
        .ok_or_else(|| {
            EngineError::Configuration(format!(
                "no risk-target bucket for {instrument_count} instruments"
            ))
        })
}

/// The full bucket table, for diagnostics and tests.
pub fn buckets() -> &'static [(usize, usize, RiskTargetEntry)] {
    &RISK_TARGET_BUCKETS
}
