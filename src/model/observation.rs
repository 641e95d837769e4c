use chrono::{DateTime, Utc};

/// One externally produced bar of bid/ask quotes for a single instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceObservation {
    pub instrument: String,
    pub timestamp: DateTime<Utc>,
    pub bid_open: f64,
    pub bid_close: f64,
    pub ask_open: f64,
    pub ask_close: f64,
}

impl PriceObservation {
    /// Mid price at the close, used as the tradable price for signals.
    pub fn mid_close(&self) -> f64 {
        (self.bid_close + self.ask_close) / 2.0
    }

    /// Create a synthetic observation from a single close price (for warm-up
    /// and tests).
    pub fn from_close(instrument: &str, timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            instrument: instrument.to_string(),
            timestamp,
            bid_open: close,
            bid_close: close,
            ask_open: close,
            ask_close: close,
        }
    }
}
