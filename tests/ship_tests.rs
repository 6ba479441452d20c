use broadside::{GameError, Orientation, Ship, ShipClass};

#[test]
fn cells_and_contains() {
    let class = ShipClass::new("Battleship", 4);
    let ship = Ship::new(class, (1, 3), Orientation::Vertical).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(1, 3), (2, 3), (3, 3), (4, 3)]);
    for (r, c) in cells {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(5, 3));
    assert!(!ship.contains(1, 4));
}

#[test]
fn out_of_bounds_placement_fails() {
    let class = ShipClass::new("Carrier", 5);
    assert_eq!(
        Ship::new(class, (0, 6), Orientation::Horizontal).unwrap_err(),
        GameError::IllegalPlacement
    );
    assert_eq!(
        Ship::new(class, (8, 0), Orientation::Vertical).unwrap_err(),
        GameError::IllegalPlacement
    );
    assert!(Ship::new(class, (0, 5), Orientation::Horizontal).is_ok());
}

#[test]
fn register_hit_and_sink() {
    let class = ShipClass::new("Destroyer", 2);
    let mut ship = Ship::new(class, (4, 4), Orientation::Horizontal).unwrap();

    assert!(!ship.register_hit(3, 4));
    assert_eq!(ship.hit_count(), 0);

    assert!(ship.register_hit(4, 4));
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());

    // Re-hitting the same cell never inflates the count.
    assert!(ship.register_hit(4, 4));
    assert_eq!(ship.hit_count(), 1);

    assert!(ship.register_hit(4, 5));
    assert_eq!(ship.hit_count(), 2);
    assert!(ship.is_sunk());
}
