use trend_sizer::forecast::{capped_forecast, ForecastBlender, FORECAST_CAP};
use trend_sizer::rules::{MarketView, Rule};

/// Rule stub with a fixed raw forecast and readiness flag.
struct FixedRule {
    name: &'static str,
    raw: f64,
    ready: bool,
}

impl Rule for FixedRule {
    fn name(&self) -> &str {
        self.name
    }

    fn ready(&self) -> bool {
        self.ready
    }

    fn update(&mut self, _view: &MarketView) {}

    fn forecast(&self, _view: &MarketView) -> f64 {
        self.raw
    }
}

fn fixed(name: &'static str, raw: f64) -> Box<dyn Rule> {
    Box::new(FixedRule {
        name,
        raw,
        ready: true,
    })
}

fn view() -> MarketView {
    MarketView {
        price: Some(100.0),
        volatility: Some(0.16),
    }
}

#[test]
fn blended_forecast_is_weighted_sum_of_capped_forecasts() {
    let blender = ForecastBlender::new(vec![
        (0.5, fixed("a", 8.0)),
        (0.25, fixed("b", -4.0)),
        (0.25, fixed("c", 100.0)), // caps to 20
    ]);
    let (blended, detail) = blender.forecast(&view());
    let expected = 0.5 * 8.0 + 0.25 * -4.0 + 0.25 * FORECAST_CAP;
    assert!((blended - expected).abs() < 1e-12);
    assert_eq!(detail.len(), 3);
    assert!((detail[2].forecast - FORECAST_CAP).abs() < 1e-12);
}

#[test]
fn blended_forecast_is_linear_in_weights() {
    let build = |k: f64| {
        ForecastBlender::new(vec![
            (k * 0.3, fixed("a", 6.0)),
            (k * 0.7, fixed("b", -11.0)),
        ])
    };
    let (base, _) = build(1.0).forecast(&view());
    let (scaled, _) = build(3.5).forecast(&view());
    assert!((scaled - 3.5 * base).abs() < 1e-12);
}

#[test]
fn detail_preserves_rule_order() {
    let blender = ForecastBlender::new(vec![
        (0.1, fixed("first", 1.0)),
        (0.1, fixed("second", 2.0)),
        (0.1, fixed("third", 3.0)),
    ]);
    let (_, detail) = blender.forecast(&view());
    let names: Vec<&str> = detail.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn ready_requires_every_rule() {
    let blender = ForecastBlender::new(vec![
        (
            0.5,
            Box::new(FixedRule {
                name: "warm",
                raw: 1.0,
                ready: true,
            }) as Box<dyn Rule>,
        ),
        (
            0.5,
            Box::new(FixedRule {
                name: "cold",
                raw: 1.0,
                ready: false,
            }),
        ),
    ]);
    assert!(!blender.ready());
}

#[test]
fn capping_bounds_any_raw_forecast() {
    for r in [-1e12, -20.5, -20.0, -3.0, 0.0, 3.0, 20.0, 21.0, 1e12] {
        let c = capped_forecast(r);
        assert!((-FORECAST_CAP..=FORECAST_CAP).contains(&c));
        if r.abs() <= FORECAST_CAP {
            assert_eq!(c, r);
        }
    }
}
