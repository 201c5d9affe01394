use super::*;
use crate::helpers::*;

#[test]
fn can_keep_fleet_order() {
    let fleets = create_fleet_table(&[
        ("TRUCK", create_fleet(0.8, 0, 500, 50)),
        ("VAN", create_fleet(0.5, 10, 100, 20)),
        ("BIKE", create_fleet(0.3, 0, 50, 50)),
    ]);

    assert_eq!(fleets.ids(), &["TRUCK".to_string(), "VAN".to_string(), "BIKE".to_string()]);
    assert_eq!(fleets.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(), vec!["TRUCK", "VAN", "BIKE"]);
    assert_eq!(fleets.len(), 3);
}

#[test]
fn can_override_duplicated_fleet_keeping_first_position() {
    let fleets = create_fleet_table(&[
        ("VAN", create_fleet(0.5, 10, 100, 20)),
        ("TRUCK", create_fleet(0.8, 0, 500, 50)),
        ("VAN", create_fleet(0.6, 1, 2, 3)),
    ]);

    assert_eq!(fleets.ids(), &["VAN".to_string(), "TRUCK".to_string()]);
    assert_eq!(fleets.get("VAN"), Some(&create_fleet(0.6, 1, 2, 3)));
}

#[test]
fn can_project_attribute() {
    let fleets =
        create_fleet_table(&[("VAN", create_fleet(0.5, 10, 100, 20)), ("TRUCK", create_fleet(0.8, 0, 500, 50))]);

    let green = fleets.project(|attrs| attrs.green_capacity);

    assert_eq!(green.len(), 2);
    assert_eq!(green["VAN"], 20);
    assert_eq!(green["TRUCK"], 50);
    assert!(FleetTable::default().is_empty());
}
