use broadside::{Board, Fleet, GameError, Orientation, NUM_SHIPS, ROSTER, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn manual_place_rejects_bad_commands() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();

    assert_eq!(
        fleet.place(&mut board, NUM_SHIPS, (0, 0), Orientation::Horizontal),
        Err(GameError::InvalidShipIndex)
    );

    fleet.place(&mut board, 0, (0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(
        fleet.place(&mut board, 0, (5, 0), Orientation::Horizontal),
        Err(GameError::ShipAlreadyPlaced)
    );
    // Overlapping the carrier.
    assert_eq!(
        fleet.place(&mut board, 1, (0, 2), Orientation::Vertical),
        Err(GameError::IllegalPlacement)
    );
    // Off the board.
    assert_eq!(
        fleet.place(&mut board, 1, (9, 7), Orientation::Horizontal),
        Err(GameError::IllegalPlacement)
    );
    // A rejected command changes nothing.
    assert_eq!(board.occupied_count(), ROSTER[0].size());
}

#[test]
fn find_ship_at_locates_owner() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    fleet.place(&mut board, 4, (3, 4), Orientation::Horizontal).unwrap();

    assert_eq!(fleet.find_ship_at((3, 5)).unwrap().class().name(), "Destroyer");
    assert!(fleet.find_ship_at((3, 6)).is_none());
}

#[test]
fn status_reports_placement() {
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    fleet.place(&mut board, 2, (0, 0), Orientation::Vertical).unwrap();

    let status = fleet.status();
    assert!(status[2].placed);
    assert!(!status[2].sunk);
    assert!(!status[0].placed);
    assert_eq!(status[2].name, "Cruiser");
    assert!(!fleet.all_placed());
    assert!(!fleet.is_defeated());
}

#[test]
fn auto_place_always_succeeds() {
    // The fixed roster must never exhaust its attempt budget on a 10x10
    // board, and every placement must be non-overlapping and in bounds.
    for seed in 0..1000u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut fleet = Fleet::new();
        fleet.auto_place_remaining(&mut board, &mut rng).unwrap();

        assert!(fleet.all_placed());
        // 17 occupied cells means no two ships ever shared a cell.
        assert_eq!(board.occupied_count(), TOTAL_SHIP_CELLS);
    }
}

#[test]
fn auto_place_skips_manual_placements() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    let mut fleet = Fleet::new();
    fleet.place(&mut board, 0, (0, 0), Orientation::Horizontal).unwrap();
    fleet.auto_place_remaining(&mut board, &mut rng).unwrap();

    let carrier = fleet.find_ship_at((0, 0)).unwrap();
    assert_eq!(carrier.origin(), (0, 0));
    assert_eq!(carrier.orientation(), Orientation::Horizontal);
    assert_eq!(board.occupied_count(), TOTAL_SHIP_CELLS);
}
