/// Full sizing breakdown for one evaluation cycle. Recomputed from scratch
/// every cycle; never persisted.
#[derive(Debug, Clone)]
pub struct PositionIntent {
    /// Blended forecast that drove this cycle.
    pub forecast: f64,
    /// Risk target before the diversification multiplier.
    pub raw_target_risk: f64,
    /// Risk target after the diversification multiplier.
    pub target_risk: f64,
    /// Exposure the forecast asks for, in account currency.
    pub ideal_notional_exposure: f64,
    /// Ideal exposure after the margin/leverage cap.
    pub capped_notional_exposure: f64,
    /// Exposure of the currently held position, in account currency.
    pub current_notional_exposure: f64,
    /// Exposure a forecast of 10 would imply; normalizes the deviation.
    pub average_notional_exposure: f64,
    /// Normalized gap between capped and current exposure.
    pub exposure_deviation: f64,
    /// Target contract count after lot-size rounding.
    pub target_contracts: f64,
}

/// The engine's only output with trading consequence: a signed quantity
/// delta for the caller's order sink.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeIntent {
    pub instrument: String,
    pub quantity_delta: f64,
}
