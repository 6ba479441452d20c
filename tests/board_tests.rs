use broadside::{Board, CellState, Orientation, Ship, ShipClass, BOARD_SIZE};

fn destroyer() -> ShipClass {
    ShipClass::new("Destroyer", 2)
}

#[test]
fn can_place_respects_bounds() {
    let board = Board::new();
    assert!(board.can_place((0, 5), 5, Orientation::Horizontal));
    assert!(!board.can_place((0, 6), 5, Orientation::Horizontal));
    assert!(board.can_place((5, 0), 5, Orientation::Vertical));
    assert!(!board.can_place((6, 0), 5, Orientation::Vertical));
    assert!(!board.can_place((0, BOARD_SIZE), 1, Orientation::Horizontal));
}

#[test]
fn can_place_rejects_overlap() {
    let mut board = Board::new();
    let ship = Ship::new(ShipClass::new("Cruiser", 3), (4, 4), Orientation::Horizontal).unwrap();
    board.place(&ship);

    // Crossing the placed ship fails, adjacent is fine.
    assert!(!board.can_place((3, 5), 3, Orientation::Vertical));
    assert!(!board.can_place((4, 2), 3, Orientation::Horizontal));
    assert!(board.can_place((5, 4), 3, Orientation::Horizontal));
}

#[test]
fn place_marks_cells_occupied() {
    let mut board = Board::new();
    let ship = Ship::new(destroyer(), (3, 4), Orientation::Horizontal).unwrap();
    board.place(&ship);

    assert_eq!(board.cell((3, 4)), CellState::Occupied);
    assert_eq!(board.cell((3, 5)), CellState::Occupied);
    assert_eq!(board.cell((3, 6)), CellState::Empty);
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn attackable_tracks_shot_history() {
    let mut board = Board::new();
    let ship = Ship::new(destroyer(), (0, 0), Orientation::Horizontal).unwrap();
    board.place(&ship);

    // Both empty and occupied cells are attackable until fired upon.
    assert!(board.is_attackable((0, 0)));
    assert!(board.is_attackable((9, 9)));
}

#[test]
fn fog_hides_unrevealed_ships() {
    let mut board = Board::new();
    let ship = Ship::new(destroyer(), (2, 2), Orientation::Vertical).unwrap();
    board.place(&ship);

    let own = board.grid(false);
    let enemy = board.grid(true);
    assert_eq!(own[2][2], CellState::Occupied);
    assert_eq!(enemy[2][2], CellState::Empty);
}
