use crate::error::EngineError;

pub const CALENDAR_DAYS_IN_YEAR: f64 = 365.25;
pub const BUSINESS_DAYS_IN_YEAR: f64 = 256.0;
// Returns are assumed not iid, so annualization scales by sqrt(256) = 16.
pub const ROOT_BDAYS_IN_YEAR: f64 = 16.0;

/// Round a contract quantity to the instrument's minimum tradable increment.
///
/// Only the lot sizes the broker actually quotes are supported; anything else
/// is a setup mistake, not a runtime condition.
pub fn round_to_lot_size(quantity: f64, lot_size: f64) -> Result<f64, EngineError> {
    const SUPPORTED: [f64; 5] = [0.01, 0.1, 1.0, 10.0, 100.0];
    if !SUPPORTED.iter().any(|&s| (lot_size - s).abs() < 1e-12) {
        return Err(EngineError::Configuration(format!(
            "unknown lot size {lot_size}"
        )));
    }
    Ok((quantity / lot_size).round() * lot_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_supported_lot_sizes() {
        assert!((round_to_lot_size(-0.29, 0.1).unwrap() - -0.3).abs() < 1e-9);
        assert!((round_to_lot_size(1.43243, 1.0).unwrap() - 1.0).abs() < 1e-9);
        assert!((round_to_lot_size(292.0, 10.0).unwrap() - 290.0).abs() < 1e-9);
        assert!((round_to_lot_size(292.0, 100.0).unwrap() - 300.0).abs() < 1e-9);
        assert!((round_to_lot_size(0.126, 0.01).unwrap() - 0.13).abs() < 1e-9);
    }

    #[test]
    fn unknown_lot_size_is_a_configuration_error() {
        let err = round_to_lot_size(10.0, 0.5).unwrap_err();
        assert!(err.to_string().contains("unknown lot size"));
    }
}
