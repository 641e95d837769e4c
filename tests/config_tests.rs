use trend_sizer::config::{default_rule_set, Config};
use trend_sizer::rules::build_rule;

#[test]
fn parse_full_toml() {
    let toml_str = r#"
instruments = ["XAUUSD", "XAGUSD", "WTICOUSD"]

[engine]
capital = 25000.0
exposure_deviation_threshold = 0.2
personal_risk_appetite = 0.25
vol_window = 35

[[rules]]
kind = "ewmac"
name = "momentum16"
weight = 0.075
fast = 16

[[rules]]
kind = "breakout"
name = "breakout20"
weight = 0.05
window = 20

[[rules]]
kind = "accel"
name = "accel32"
weight = 0.1
fast = 32

[logging]
level = "debug"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!((config.engine.capital - 25000.0).abs() < f64::EPSILON);
    assert_eq!(config.engine.vol_window, 35);
    assert_eq!(config.instruments.len(), 3);
    assert_eq!(config.rules.len(), 3);
    assert_eq!(config.rules[0].kind, "ewmac");
    assert_eq!(config.rules[0].fast, Some(16));
    assert_eq!(config.rules[1].window, Some(20));
    assert_eq!(config.logging.level, "debug");
    assert!((config.capital_per_instrument() - 8333.0).abs() < f64::EPSILON);
}

#[test]
fn engine_tunables_fall_back_to_defaults() {
    let toml_str = r#"
instruments = ["XAUUSD"]

[engine]
capital = 10000.0

[[rules]]
kind = "breakout"
name = "breakout10"
weight = 1.0
window = 10

[logging]
level = "info"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let settings = config.engine_settings();
    assert_eq!(settings.vol_window, 35);
    assert!((settings.exposure_deviation_threshold - 0.2).abs() < f64::EPSILON);
    assert!((settings.personal_risk_appetite - 0.25).abs() < f64::EPSILON);
}

#[test]
fn default_rule_set_is_the_thirteen_rule_portfolio() {
    let rules = default_rule_set();
    assert_eq!(rules.len(), 13);

    let total_weight: f64 = rules.iter().map(|r| r.weight).sum();
    assert!((total_weight - 0.9).abs() < 1e-12);

    // every entry builds: names resolve to scalars and parameters are sound
    for spec in &rules {
        build_rule(spec).unwrap();
    }
}

#[test]
fn unknown_rule_kind_fails_to_build() {
    let mut rules = default_rule_set();
    rules[0].kind = "carry".to_string();
    assert!(build_rule(&rules[0]).is_err());
}
