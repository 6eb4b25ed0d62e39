//! Single source of truth for protocol and gameplay constants.
//! These values are shared by the movement core, the streaming geometry,
//! and the packed-coordinate wire encoding.

/// Bits per axis in a packed coordinate.
pub const COORD_BITS: u32 = 14;

/// Mask for one packed axis (14 bits).
pub const COORD_MASK: u32 = (1 << COORD_BITS) - 1;

/// Mask for the height level (2 bits).
pub const LEVEL_MASK: u32 = 0x3;

/// Bit offset of `x` within a packed coordinate.
pub const X_SHIFT: u32 = 14;

/// Bit offset of the level within a packed coordinate.
pub const LEVEL_SHIFT: u32 = 28;

/// Highest coordinate the packed wire format can carry per axis (2^14 - 1).
pub const MAX_COORD: u32 = COORD_MASK;

/// Highest coordinate gameplay accepts per axis. Deliberately below
/// [`MAX_COORD`]: the wire format has headroom the world map does not use,
/// and the two bounds are intentionally not derived from each other.
pub const MAX_PLAYABLE_COORD: u32 = 12_800;

/// Number of height levels (0..=3).
pub const LEVEL_COUNT: u32 = 4;

/// Zone granularity: 8 tiles per zone (`coord >> ZONE_SHIFT`).
pub const ZONE_SHIFT: u32 = 3;

/// Mapsquare granularity: 64 tiles per region (`coord >> REGION_SHIFT`).
pub const REGION_SHIFT: u32 = 6;

/// Historical offset baked into the protocol: client-local coordinates are
/// measured from a zone 6 zones below the anchoring position's own zone.
pub const ZONE_ORIGIN_OFFSET: u32 = 6;

/// Maximum queued destinations per movement handler.
pub const MAX_WAYPOINTS: usize = 100;

/// Maximum run energy. One unit is drained per running sub-step.
pub const MAX_RUN_ENERGY: u16 = 10_000;

/// Smallest viewable `observer - target` axis delta (inclusive).
pub const VIEW_DELTA_MIN: i32 = -15;

/// Largest viewable `observer - target` axis delta (inclusive).
pub const VIEW_DELTA_MAX: i32 = 14;

/// Zones a mob may drift behind its synchronized origin (32 tiles) before
/// a map rebuild is due.
pub const RELOAD_ZONES_BEHIND: i32 = 4;

/// Zones a mob may advance past its synchronized origin (40 tiles) before
/// a map rebuild is due.
pub const RELOAD_ZONES_AHEAD: i32 = 5;

/// Reference period of the driving game loop, in milliseconds.
pub const TICK_MILLIS: u64 = 600;

/// Default spawn tile for newly created mobs.
pub const DEFAULT_SPAWN_X: u32 = 3_222;

/// Default spawn tile for newly created mobs.
pub const DEFAULT_SPAWN_Z: u32 = 3_218;

/// Default spawn height level.
pub const DEFAULT_SPAWN_LEVEL: u8 = 0;
