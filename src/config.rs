use crate::ship::ShipClass;

/// Side length of each square board.
pub const BOARD_SIZE: usize = 10;
/// Number of ships in a fleet.
pub const NUM_SHIPS: usize = 5;
/// Total cells occupied by a fully placed fleet.
pub const TOTAL_SHIP_CELLS: usize = 17;
/// Random placement gives up after this many rejected draws for one ship.
/// The fleet always fits on a 10x10 board well under this cap; exhausting it
/// indicates a misconfigured roster rather than bad luck.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// The fixed fleet roster, largest ship first.
pub const ROSTER: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];
