use glam::IVec2;
use tessera_core::constants::{RELOAD_ZONES_AHEAD, RELOAD_ZONES_BEHIND};
use tessera_core::coords;
use tessera_core::types::Position;

/// The zone-granular origin a mob's world view was last built around.
///
/// The margin around it is asymmetric: the view survives 4 zones of drift
/// behind the origin but 5 ahead, matching the off-center window the map
/// protocol builds. This is a coarser boundary than per-observer
/// viewability, which governs update payloads instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    base_zone: IVec2,
}

impl Viewport {
    /// Viewport synchronized at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            base_zone: zone_of(position),
        }
    }

    /// Zone the current view was built around.
    pub fn base_zone(&self) -> IVec2 {
        self.base_zone
    }

    /// Whether `position` has left the synchronized view's margin on
    /// either axis.
    pub fn is_stale(&self, position: Position) -> bool {
        let delta = zone_of(position) - self.base_zone;
        outside_margin(delta.x) || outside_margin(delta.y)
    }

    /// Re-anchor the view on the mob's current zone.
    pub fn synchronize(&mut self, position: Position) {
        self.base_zone = zone_of(position);
    }
}

fn zone_of(position: Position) -> IVec2 {
    IVec2::new(
        coords::zone(position.x) as i32,
        coords::zone(position.z) as i32,
    )
}

fn outside_margin(delta: i32) -> bool {
    delta < -RELOAD_ZONES_BEHIND || delta > RELOAD_ZONES_AHEAD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u32, z: u32) -> Position {
        Position::new(x, z, 0)
    }

    #[test]
    fn test_fresh_viewport_is_not_stale() {
        let viewport = Viewport::new(pos(3200, 3200));
        assert!(!viewport.is_stale(pos(3200, 3200)));
        assert_eq!(viewport.base_zone(), IVec2::new(400, 400));
    }

    #[test]
    fn test_margin_ahead_is_five_zones() {
        let viewport = Viewport::new(pos(3200, 3200));
        // 40 tiles ahead is zone delta +5: still inside.
        assert!(!viewport.is_stale(pos(3240, 3200)));
        // One more zone is outside.
        assert!(viewport.is_stale(pos(3248, 3200)));
    }

    #[test]
    fn test_margin_behind_is_four_zones() {
        let viewport = Viewport::new(pos(3200, 3200));
        // 32 tiles behind is zone delta -4: still inside.
        assert!(!viewport.is_stale(pos(3168, 3200)));
        // One more zone is outside.
        assert!(viewport.is_stale(pos(3160, 3200)));
    }

    #[test]
    fn test_either_axis_triggers() {
        let viewport = Viewport::new(pos(3200, 3200));
        assert!(viewport.is_stale(pos(3200, 3248)));
        assert!(viewport.is_stale(pos(3160, 3248)));
    }

    #[test]
    fn test_synchronize_reanchors() {
        let mut viewport = Viewport::new(pos(3200, 3200));
        assert!(viewport.is_stale(pos(3248, 3200)));

        viewport.synchronize(pos(3248, 3200));
        assert!(!viewport.is_stale(pos(3248, 3200)));
        assert_eq!(viewport.base_zone(), IVec2::new(406, 400));
    }
}
