//! The signal handed to the map-streaming collaborator.
//!
//! This crate decides *when* a mob's world data must be resent; building
//! and transmitting the actual map payload belongs to the streaming layer.

use glam::IVec2;
use tessera_core::coords;
use tessera_core::types::{MobId, Position};

/// One due rebuild: resend world data centered on the mob's mapsquare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRefresh {
    pub mob: MobId,
    /// Mapsquare (64-tile) coordinates the resent view is centered on.
    pub region: IVec2,
}

impl MapRefresh {
    /// Refresh centered on the mapsquare containing `position`.
    pub fn for_mob(mob: MobId, position: Position) -> Self {
        Self {
            mob,
            region: IVec2::new(
                coords::region(position.x) as i32,
                coords::region(position.z) as i32,
            ),
        }
    }
}

/// Implemented by the map-streaming collaborator.
pub trait MapStream {
    /// Resend world data for `refresh.mob` centered on `refresh.region`.
    fn rebuild(&mut self, refresh: MapRefresh);
}

/// Rebuilds collected over one tick, in mob iteration order.
#[derive(Debug, Clone, Default)]
pub struct RebuildList {
    pub entries: Vec<MapRefresh>,
}

impl RebuildList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand every collected rebuild to the streaming collaborator.
    pub fn dispatch(&self, stream: &mut impl MapStream) {
        for &refresh in &self.entries {
            stream.rebuild(refresh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingStream {
        rebuilt: Vec<MapRefresh>,
    }

    impl MapStream for RecordingStream {
        fn rebuild(&mut self, refresh: MapRefresh) {
            self.rebuilt.push(refresh);
        }
    }

    #[test]
    fn test_refresh_carries_the_mapsquare() {
        let refresh = MapRefresh::for_mob(MobId(9), Position::new(3222, 3218, 0));
        assert_eq!(refresh.region, IVec2::new(50, 50));
    }

    #[test]
    fn test_dispatch_preserves_order() {
        let mut list = RebuildList::new();
        list.entries
            .push(MapRefresh::for_mob(MobId(1), Position::new(3222, 3218, 0)));
        list.entries
            .push(MapRefresh::for_mob(MobId(2), Position::new(3100, 3300, 0)));

        let mut stream = RecordingStream::default();
        list.dispatch(&mut stream);
        assert_eq!(stream.rebuilt.len(), 2);
        assert_eq!(stream.rebuilt[0].mob, MobId(1));
        assert_eq!(stream.rebuilt[1].mob, MobId(2));
    }
}
