use strobetools::bhv::{BhvLog, Trial};

#[test]
fn strips_header_and_footer_keys() {
    let x = r#"{
        "MLConfig": {"SubjectName": "m1", "ExperimentName": "task"},
        "Trial1": {
            "Block": 1.0,
            "BehavioralCodes": {"CodeNumbers": [9.0, 40.0, 18.0]}
        },
        "Trial2": {
            "Block": 2.0,
            "BehavioralCodes": {"CodeNumbers": [9.0, 41.0, 18.0]}
        },
        "LastTrialAnalyzed": 2
    }"#;

    let bhv = BhvLog::from_json(x.as_bytes()).unwrap();
    assert_eq!(
        BhvLog {
            trials: vec![
                Trial {
                    block: 1,
                    codes: vec![9, 40, 18]
                },
                Trial {
                    block: 2,
                    codes: vec![9, 41, 18]
                },
            ]
        },
        bhv
    );
    assert_eq!(vec![9, 40, 18, 9, 41, 18], bhv.codes());
    assert_eq!(vec![1, 2], bhv.blocks());
}

#[test]
fn key_order_is_trial_order_not_lexical() {
    // Trial10 sorts before Trial9 lexically but comes later in the file
    let x = r#"{
        "MLConfig": {},
        "Trial9": {
            "Block": 1,
            "BehavioralCodes": {"CodeNumbers": [9, 18]}
        },
        "Trial10": {
            "Block": 2,
            "BehavioralCodes": {"CodeNumbers": [9, 18]}
        },
        "LastTrialAnalyzed": 10
    }"#;

    let bhv = BhvLog::from_json(x.as_bytes()).unwrap();
    assert_eq!(vec![1, 2], bhv.blocks());
}

#[test]
fn short_logs_yield_no_trials() {
    let bhv = BhvLog::from_json(r#"{"MLConfig": {}, "LastTrialAnalyzed": 0}"#.as_bytes()).unwrap();
    assert!(bhv.trials.is_empty());
    assert!(bhv.codes().is_empty());
}

#[test]
fn malformed_trial_is_an_error() {
    let x = r#"{
        "MLConfig": {},
        "Trial1": {"Block": 1},
        "LastTrialAnalyzed": 1
    }"#;
    assert!(BhvLog::from_json(x.as_bytes()).is_err());
}
