use strobetools::cfg::{CodeMap, LfpSettings, Session};

fn serialize_config(config: &Session) -> String {
    let ser = serde_json::to_string(config).unwrap();
    return ser;
}

fn deserialize_config(config: &str) -> Session {
    let de: Session = serde_json::from_str(config).unwrap();
    return de;
}

#[test]
fn serde_roundtrip() {
    let config = Session {
        name: String::from("test_settings_serde"),
        timestamp: None,
        node: 0,
        recording: 1,
        codes: CodeMap {
            start_code: 9,
            end_code: 18,
            strobe_channel: 8,
            data_mask: 0x7f,
        },
        pre_event: Some(std::time::Duration::from_secs(10)),
        lfp: Some(LfpSettings {
            fc: 250.0,
            fs: 30_000.0,
            order: 5,
            downsample: 30,
        }),
    };
    let serconfig = serialize_config(&config);
    let deconfig = deserialize_config(&serconfig);
    assert_eq!(config, deconfig);
}

#[test]
fn de_simple() {
    let x = r#"{
        "name": "session1",
        "timestamp": null,
        "node": 0,
        "recording": 0,
        "lfp": null
    }"#;

    let de: Session = serde_json::from_str(x).unwrap();

    let r = Session {
        name: String::from("session1"),
        ..Default::default()
    };

    assert_eq!(r, de);
    // Deployment defaults fill in the code map
    assert_eq!(9, de.codes.start_code);
    assert_eq!(18, de.codes.end_code);
    assert_eq!(8, de.codes.strobe_channel);
    assert_eq!(0x7f, de.codes.data_mask);
}

#[test]
fn de_complex() {
    let x = r#"{
        "name": "session2",
        "timestamp": null,
        "node": 1,
        "recording": 2,
        "codes": {"start_code": 11, "end_code": 22},
        "pre_event": "10s",
        "lfp": {"fc": 250.0, "fs": 30000.0, "order": 5, "downsample": 30}
    }"#;

    let de: Session = serde_json::from_str(x).unwrap();

    let r = Session {
        name: String::from("session2"),
        node: 1,
        recording: 2,
        codes: CodeMap {
            start_code: 11,
            end_code: 22,
            ..Default::default()
        },
        pre_event: Some("10s".parse::<humantime::Duration>().unwrap().into()),
        lfp: Some(LfpSettings {
            fc: 250.0,
            fs: 30_000.0,
            order: 5,
            downsample: 30,
        }),
        ..Default::default()
    };

    assert_eq!(r, de);
}
