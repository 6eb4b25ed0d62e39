use crate::constants::{
    COORD_MASK, LEVEL_MASK, LEVEL_SHIFT, REGION_SHIFT, VIEW_DELTA_MAX, VIEW_DELTA_MIN,
    X_SHIFT, ZONE_ORIGIN_OFFSET, ZONE_SHIFT,
};
use crate::types::{PackedCoord, Position};

/// Pack a level/x/z triple into the 32-bit wire representation.
///
/// Each field is masked to its width before placement, so out-of-range
/// values truncate silently rather than fail. Producers validate against
/// the gameplay bound before calling this.
pub fn pack(level: u8, x: u32, z: u32) -> PackedCoord {
    let packed = (z & COORD_MASK)
        | ((x & COORD_MASK) << X_SHIFT)
        | ((u32::from(level) & LEVEL_MASK) << LEVEL_SHIFT);
    PackedCoord(packed)
}

/// Unpack the wire representation back into `(level, x, z)`.
pub fn unpack(coord: PackedCoord) -> (u8, u32, u32) {
    let level = ((coord.0 >> LEVEL_SHIFT) & LEVEL_MASK) as u8;
    let x = (coord.0 >> X_SHIFT) & COORD_MASK;
    let z = coord.0 & COORD_MASK;
    (level, x, z)
}

/// Zone (8-tile block) containing a coordinate.
pub fn zone(coord: u32) -> u32 {
    coord >> ZONE_SHIFT
}

/// Zone that client-local coordinates are measured from: a fixed 6 zones
/// below the anchoring coordinate's own zone.
pub fn zone_origin(coord: u32) -> u32 {
    zone(coord).wrapping_sub(ZONE_ORIGIN_OFFSET)
}

/// Mapsquare (64-tile block) containing a coordinate.
pub fn region(coord: u32) -> u32 {
    coord >> REGION_SHIFT
}

/// Coordinate relative to the 8-tile-aligned block anchored at `base`.
///
/// Shrinks an absolute coordinate for cheap transmission. The result only
/// stays inside the map built around `base` while `pos` does.
pub fn local(pos: u32, base: u32) -> u32 {
    pos.wrapping_sub(zone_origin(base) << ZONE_SHIFT)
}

/// Whether `pos` falls inside `observer`'s update viewport.
///
/// The viewport is an intentionally asymmetric 30x30 rectangle, favoring
/// two integer range checks over a distance computation.
pub fn is_viewable_from(pos: Position, observer: Position) -> bool {
    let dx = observer.x as i32 - pos.x as i32;
    let dz = observer.z as i32 - pos.z as i32;
    (VIEW_DELTA_MIN..=VIEW_DELTA_MAX).contains(&dx)
        && (VIEW_DELTA_MIN..=VIEW_DELTA_MAX).contains(&dz)
}
