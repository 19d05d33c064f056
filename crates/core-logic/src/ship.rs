use strum::{Display, EnumIter};

use crate::Coord;

/// The types of ships there are.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Display, EnumIter)]
pub enum ShipKind {
    Battleship,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// The number of fields a ship of this kind takes up.
    pub fn size(&self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 2,
        }
    }
}

/// The ships each player gets, and how many of each.
pub const AVAILABLE_SHIPS: [(ShipKind, usize); 3] = [
    (ShipKind::Battleship, 1),
    (ShipKind::Destroyer, 1),
    (ShipKind::Submarine, 2),
];

/// A single ship in a player's fleet.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Ship {
    pub kind: ShipKind,
    /// How many of the ship's fields haven't been hit yet.
    pub fields_intact: usize,
    /// The fields the ship takes up, or empty if it hasn't been placed yet.
    pub coords: Vec<Coord>,
}

impl Ship {
    /// Creates an undamaged ship.
    pub fn new(kind: ShipKind) -> Ship {
        Ship {
            kind,
            fields_intact: kind.size(),
            coords: Vec::new(),
        }
    }

    /// The number of fields this ship takes up.
    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Records a hit on one of this ship's fields.
    pub fn hit(&mut self) {
        self.fields_intact = self.fields_intact.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.fields_intact == 0
    }
}

/// Builds the fleet a player has to place, in placement order.
///
/// Each ship is its own value, so sinking one submarine doesn't affect the other.
pub fn generate_ships_to_place() -> Vec<Ship> {
    AVAILABLE_SHIPS
        .iter()
        .flat_map(|(kind, count)| (0..*count).map(|_| Ship::new(*kind)))
        .collect()
}
