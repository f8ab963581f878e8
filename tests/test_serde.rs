#![cfg(feature = "serde")]

use mkga::{evolution::EvolutionOptions, solve, EncodingMode, Instance};

#[test]
fn test_instance_from_json() {
    let json = r#"{
        "items": [
            { "benefit": 3.0, "weights": [2.0, 1.0] },
            { "benefit": 4.0, "weights": [1.0, 5.0] }
        ],
        "knapsacks": [{ "capacity": 4.0 }, { "capacity": 5.0 }]
    }"#;

    let instance: Instance = serde_json::from_str(json).unwrap();
    assert_eq!(instance.benefits(), &[3.0, 4.0]);
    assert_eq!(instance.weight_matrix()[1], vec![1.0, 5.0]);

    let round_trip: Instance =
        serde_json::from_str(&serde_json::to_string(&instance).unwrap()).unwrap();
    assert_eq!(round_trip, instance);
}

#[test]
fn test_malformed_instance_is_rejected() {
    let json = r#"{
        "items": [{ "benefit": 3.0, "weights": [2.0] }],
        "knapsacks": [{ "capacity": 4.0 }, { "capacity": 5.0 }]
    }"#;

    let err = serde_json::from_str::<Instance>(json).unwrap_err();
    assert!(err.to_string().contains("2 knapsacks"));
}

#[test]
fn test_result_serializes() {
    let json = r#"{
        "items": [{ "benefit": 3.0, "weights": [2.0] }, { "benefit": 5.0, "weights": [3.0] }],
        "knapsacks": [{ "capacity": 4.0 }]
    }"#;
    let instance: Instance = serde_json::from_str(json).unwrap();
    let options = EvolutionOptions::builder()
        .generation_size(4)
        .iteration_budget(10)
        .build();

    let result = solve(instance, EncodingMode::Single, &options, Some(1)).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["violation_count"], 0);
    assert_eq!(value["iterations"], 10);
}
