use glam::IVec2;

/// One of the 8 compass directions a mob can step in on the tile grid.
///
/// Discriminants are the values the movement packets carry. "No
/// displacement" has no variant: it is `None` at the API level and −1 on
/// the wire (see [`protocol_value`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NorthWest = 0,
    North = 1,
    NorthEast = 2,
    West = 3,
    East = 4,
    SouthWest = 5,
    South = 6,
    SouthEast = 7,
}

/// All 8 directions in protocol order.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
    Direction::West,
    Direction::East,
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
];

impl Direction {
    /// Unit offset for this direction as (dx, dz). North is +z, east is +x.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::NorthWest => IVec2::new(-1, 1),
            Direction::North => IVec2::new(0, 1),
            Direction::NorthEast => IVec2::new(1, 1),
            Direction::West => IVec2::new(-1, 0),
            Direction::East => IVec2::new(1, 0),
            Direction::SouthWest => IVec2::new(-1, -1),
            Direction::South => IVec2::new(0, -1),
            Direction::SouthEast => IVec2::new(1, -1),
        }
    }

    /// Classify a step delta into a compass direction.
    ///
    /// Only the signs of `dx` and `dz` matter. Returns `None` for (0, 0):
    /// the mob is already standing on the target tile.
    pub fn from_delta(dx: i32, dz: i32) -> Option<Direction> {
        match (dx.signum(), dz.signum()) {
            (-1, -1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::NorthWest),
            (0, -1) => Some(Direction::South),
            (0, 1) => Some(Direction::North),
            (1, -1) => Some(Direction::SouthEast),
            (1, 0) => Some(Direction::East),
            (1, 1) => Some(Direction::NorthEast),
            _ => None,
        }
    }

    /// Whether this step moves along both axes.
    pub fn is_diagonal(self) -> bool {
        let offset = self.offset();
        offset.x != 0 && offset.y != 0
    }
}

/// Wire encoding of an optional direction: the compass discriminant, or −1
/// for "no displacement".
pub fn protocol_value(direction: Option<Direction>) -> i8 {
    direction.map(|d| d as i8).unwrap_or(-1)
}
