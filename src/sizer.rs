use crate::error::EngineError;
use crate::model::account::AccountView;
use crate::model::intent::{PositionIntent, TradeIntent};
use crate::risk_target::RiskTargetEntry;
use crate::util::round_to_lot_size;

/// Converts a blended forecast into a bounded notional exposure and, when
/// the deviation from the current position is economically meaningful, a
/// trade quantity.
///
/// Callers must gate on forecast/volatility readiness before evaluating;
/// the sizer assumes a positive, finite volatility estimate.
#[derive(Debug, Clone)]
pub struct PositionSizer {
    /// Normalized exposure drift below which no trade is emitted. Avoids
    /// continuous micro-rebalancing from forecast noise.
    pub exposure_deviation_threshold: f64,
    /// Annual account stdev the operator is willing to bear.
    pub personal_risk_appetite: f64,
}

impl Default for PositionSizer {
    fn default() -> Self {
        Self {
            exposure_deviation_threshold: 0.2,
            personal_risk_appetite: 0.25,
        }
    }
}

impl PositionSizer {
    /// Risk target before diversification: the most conservative of the
    /// leverage-implied maximum, the personal appetite, and the half-Kelly
    /// ceiling from the bucket table.
    pub fn raw_target_risk(
        &self,
        volatility: f64,
        account: &AccountView,
        risk: &RiskTargetEntry,
    ) -> f64 {
        let risk_given_max_leverage = account.leverage * volatility;
        let half_kelly = risk.account_risk_target;
        risk_given_max_leverage
            .min(self.personal_risk_appetite)
            .min(half_kelly)
    }

    pub fn target_risk(&self, volatility: f64, account: &AccountView, risk: &RiskTargetEntry) -> f64 {
        self.raw_target_risk(volatility, account, risk) * risk.idm
    }

    /// Full sizing pass for one evaluation cycle.
    pub fn evaluate(
        &self,
        instrument: &str,
        forecast: f64,
        volatility: f64,
        price: f64,
        account: &AccountView,
        risk: &RiskTargetEntry,
    ) -> Result<(PositionIntent, Option<TradeIntent>), EngineError> {
        let raw_target_risk = self.raw_target_risk(volatility, account, risk);
        let target_risk = raw_target_risk * risk.idm;

        // Notional exposure = (forecast / 10) x target risk % x capital
        // / instrument risk %, where 10 is the average-strength forecast.
        let ideal_notional_exposure =
            (forecast / 10.0) * target_risk * account.capital / volatility;

        let margin_limit = account.margin_remaining * account.leverage;
        let capped_notional_exposure = if margin_limit < ideal_notional_exposure.abs() {
            margin_limit.copysign(ideal_notional_exposure)
        } else {
            ideal_notional_exposure
        };

        let current_notional_exposure = account.held_quantity
            * price
            * account.contract_multiplier
            * account.fx_instrument_to_account;

        // Exposure implied by a forecast of 10; normalizes the deviation.
        let average_notional_exposure = target_risk * account.capital / volatility;
        let exposure_deviation =
            (capped_notional_exposure - current_notional_exposure) / average_notional_exposure;

        let raw_contracts = (capped_notional_exposure * account.fx_account_to_instrument())
            / (price * account.contract_multiplier);
        let target_contracts = round_to_lot_size(raw_contracts, account.lot_size)?;

        let intent = PositionIntent {
            forecast,
            raw_target_risk,
            target_risk,
            ideal_notional_exposure,
            capped_notional_exposure,
            current_notional_exposure,
            average_notional_exposure,
            exposure_deviation,
            target_contracts,
        };

        tracing::debug!(
            instrument,
            forecast = %format!("{forecast:.1}"),
            volatility = %format!("{volatility:.4}"),
            price,
            raw_target_risk = %format!("{raw_target_risk:.2}"),
            target_risk = %format!("{target_risk:.2}"),
            ideal_exposure = %format!("{ideal_notional_exposure:.1}"),
            capped_exposure = %format!("{capped_notional_exposure:.1}"),
            current_exposure = %format!("{current_notional_exposure:.1}"),
            average_exposure = %format!("{average_notional_exposure:.1}"),
            exposure_deviation = %format!("{exposure_deviation:.2}"),
            target_contracts,
            held = account.held_quantity,
            "sizing"
        );

        if exposure_deviation.abs() > self.exposure_deviation_threshold {
            let quantity_delta =
                round_to_lot_size(target_contracts - account.held_quantity, account.lot_size)?;
            if quantity_delta != 0.0 {
                return Ok((
                    intent,
                    Some(TradeIntent {
                        instrument: instrument.to_string(),
                        quantity_delta,
                    }),
                ));
            }
        }
        Ok((intent, None))
    }
}
