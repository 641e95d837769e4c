use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(
        "data anomaly for {instrument}: {field} moved {previous} -> {current} \
         (last bar {last_seen}, new bar {observed})"
    )]
    DataAnomaly {
        instrument: String,
        field: &'static str,
        previous: f64,
        current: f64,
        last_seen: DateTime<Utc>,
        observed: DateTime<Utc>,
    },
}
