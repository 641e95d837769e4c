use trend_sizer::error::EngineError;
use trend_sizer::risk_target::{buckets, resolve};

#[test]
fn literal_entries_match_the_published_table() {
    let one = resolve(1).unwrap();
    assert_eq!(
        (
            one.idm,
            one.theoretical_sharpe,
            one.theoretical_risk_target,
            one.account_risk_target,
            one.instrument_risk_target,
        ),
        (1.00, 0.240, 0.120, 0.12, 0.120)
    );

    let eight = resolve(8).unwrap();
    assert_eq!(
        (
            eight.idm,
            eight.theoretical_sharpe,
            eight.theoretical_risk_target,
            eight.account_risk_target,
            eight.instrument_risk_target,
        ),
        (2.2, 0.528, 0.264, 0.24, 0.528)
    );

    let thirty = resolve(30).unwrap();
    assert_eq!(
        (
            thirty.idm,
            thirty.theoretical_sharpe,
            thirty.theoretical_risk_target,
            thirty.account_risk_target,
            thirty.instrument_risk_target,
        ),
        (2.5, 0.600, 0.300, 0.25, 0.625)
    );
}

#[test]
fn every_count_in_a_bucket_shares_its_entry() {
    assert_eq!(resolve(8).unwrap(), resolve(14).unwrap());
    assert_eq!(resolve(15).unwrap(), resolve(24).unwrap());
    assert_eq!(resolve(30).unwrap(), resolve(99).unwrap());
    assert_ne!(resolve(7).unwrap(), resolve(8).unwrap());
}

#[test]
fn idm_is_monotone_non_decreasing_across_buckets() {
    let mut prev = f64::MIN;
    for (_, _, entry) in buckets() {
        assert!(entry.idm >= prev, "idm decreased at entry {entry:?}");
        prev = entry.idm;
    }
}

#[test]
fn counts_outside_every_bucket_are_fatal() {
    assert!(matches!(resolve(0), Err(EngineError::Configuration(_))));
    assert!(matches!(resolve(100), Err(EngineError::Configuration(_))));
    assert!(matches!(resolve(5000), Err(EngineError::Configuration(_))));
}
