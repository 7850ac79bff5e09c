//! Table-wide integrity tests for the vehicle identifier table.
//!
//! The lookup API is covered by unit tests next to the table itself;
//! these tests check the properties that must hold across all entries
//! at once.

use gta_vehicles::VehicleHash;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

/// Number of active entries transcribed from the source table.
const ENTRY_COUNT: usize = 519;

#[test]
fn table_has_expected_entry_count() {
    assert_eq!(VehicleHash::ALL.len(), ENTRY_COUNT);
}

#[test]
fn names_are_unique() {
    let names: HashSet<&str> = VehicleHash::ALL.iter().map(|v| v.name()).collect();
    assert_eq!(names.len(), ENTRY_COUNT);
}

#[test]
fn hashes_are_unique() {
    let hashes: HashSet<u32> = VehicleHash::ALL.iter().map(|v| v.hash()).collect();
    assert_eq!(hashes.len(), ENTRY_COUNT);
}

#[test]
fn every_name_round_trips() {
    for vehicle in VehicleHash::ALL {
        assert_eq!(VehicleHash::from_name(vehicle.name()), Some(vehicle));
    }
}

#[test]
fn every_hash_round_trips() {
    for vehicle in VehicleHash::ALL {
        assert_eq!(VehicleHash::from_hash(vehicle.hash()), Some(vehicle));
    }
}

#[test]
fn lowercased_names_resolve() {
    for vehicle in VehicleHash::ALL {
        let lower = vehicle.name().to_ascii_lowercase();
        assert_eq!(VehicleHash::from_name(&lower), Some(vehicle));
    }
}

#[test]
fn retired_utility_truck_names_resolve_to_renamed_entries() {
    let aliases = [
        ("UtilityTruck", VehicleHash::UtilliTruck, 516990260),
        ("UtilityTruck2", VehicleHash::UtilliTruck2, 887537515),
        ("UtilityTruck3", VehicleHash::UtilliTruck3, 2132890591),
    ];
    for (old_name, vehicle, hash) in aliases {
        assert_eq!(VehicleHash::from_name(old_name), Some(vehicle));
        assert_eq!(vehicle.hash(), hash);
    }
}

#[test]
fn declaration_order_starts_and_ends_as_transcribed() {
    assert_eq!(VehicleHash::ALL[0], VehicleHash::Adder);
    assert_eq!(VehicleHash::ALL[ENTRY_COUNT - 1], VehicleHash::ZType);
}
