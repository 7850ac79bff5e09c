#![cfg(feature = "serde")]
//! Serde round-trip tests, only compiled with the `serde` feature.

use gta_vehicles::VehicleHash;

#[test]
fn serializes_as_symbolic_name() {
    let json = serde_json::to_string(&VehicleHash::Adder).unwrap();
    assert_eq!(json, "\"Adder\"");
}

#[test]
fn deserializes_from_symbolic_name() {
    let vehicle: VehicleHash = serde_json::from_str("\"ZType\"").unwrap();
    assert_eq!(vehicle, VehicleHash::ZType);
}

#[test]
fn unknown_name_fails_to_deserialize() {
    let result: Result<VehicleHash, _> = serde_json::from_str("\"DoesNotExist\"");
    assert!(result.is_err());
}
