use crate::error::EngineError;

/// Forecast scalars, one per named rule instance, precomputed historically
/// to normalize the average absolute forecast to 10
/// (10 / avg(unscaled forecasts across instruments)).
const FORECAST_SCALARS: &[(&str, f64)] = &[
    ("momentum8", 109.473551),
    ("momentum16", 77.45129409),
    ("momentum32", 54.77242347),
    ("momentum64", 38.14611924),
    ("breakout10", 24.30102541),
    ("breakout20", 28.15312063),
    ("breakout40", 30.99295079),
    ("breakout80", 32.53503213),
    ("breakout160", 33.90593672),
    ("breakout320", 34.25142134),
    ("accel16", 115.1031721),
    ("accel32", 81.77387461),
    ("accel64", 57.03119723),
    ("assettrend2", 10.846520114531351),
    ("assettrend4", 7.572334583056326),
    ("assettrend8", 5.190470936448635),
    ("assettrend16", 3.549452858682833),
    ("assettrend32", 2.3449234496490723),
    ("assettrend64", 1.5465144366886119),
    ("normmom2", 12.388305650778637),
    ("normmom4", 8.614429965006694),
    ("normmom8", 5.979138542342214),
    ("normmom16", 4.116536590599602),
    ("normmom32", 2.758872936017786),
    ("normmom64", 1.8706800701120874),
    ("carry10", 27.815707053556984),
    ("carry125", 29.366474500729886),
    ("carry30", 28.384062881349813),
    ("carry60", 28.40072429176199),
    ("mrinasset160", 216.84406362722757),
    ("mrwrings4", 2.1443531683677626),
    ("relcarry", 49.44179741391023),
    ("relmomentum10", 61.24026078373817),
    ("relmomentum20", 86.50746400987076),
    ("relmomentum40", 117.77937298659975),
    ("relmomentum80", 159.87802982511536),
    ("skewabs180", 4.590246757939031),
    ("skewabs365", 2.351483885205172),
    ("skewrv180", 5.244752769697409),
    ("skewrv365", 3.002222097593425),
];

/// Look up the scalar for a named rule instance. An unknown name is a setup
/// mistake and fatal.
pub fn forecast_scalar(name: &str) -> Result<f64, EngineError> {
    FORECAST_SCALARS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, s)| *s)
        .ok_or_else(|| EngineError::Configuration(format!("unknown forecast scalar '{name}'")))
}
