pub mod spawns;
pub mod streaming;
pub mod viewport;

use std::collections::HashMap;

use tessera_core::types::{MobId, Position};

use streaming::{MapRefresh, RebuildList};
use viewport::Viewport;

/// Primary public struct for the tessera-world crate: tracks every attached
/// mob's synchronized viewport and decides when its world data must be
/// resent.
pub struct World {
    viewports: HashMap<MobId, Viewport>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            viewports: HashMap::new(),
        }
    }

    /// Register a mob at spawn/login. Returns the initial map load for the
    /// streaming layer. Re-attaching an id re-synchronizes it.
    pub fn attach(&mut self, id: MobId, position: Position) -> MapRefresh {
        self.viewports.insert(id, Viewport::new(position));
        MapRefresh::for_mob(id, position)
    }

    /// Drop a mob's streaming state at despawn. Idempotent.
    pub fn detach(&mut self, id: MobId) {
        self.viewports.remove(&id);
    }

    pub fn is_attached(&self, id: MobId) -> bool {
        self.viewports.contains_key(&id)
    }

    pub fn attached_count(&self) -> usize {
        self.viewports.len()
    }

    /// Check every mob against its synchronized origin after the tick's
    /// movement, collecting the rebuilds that are due. A due viewport is
    /// re-anchored on the mob's current zone as its rebuild is recorded.
    pub fn update(&mut self, mobs: &[(MobId, Position)]) -> RebuildList {
        let mut list = RebuildList::new();
        for &(id, position) in mobs {
            let Some(viewport) = self.viewports.get_mut(&id) else {
                log::warn!("mob {} is not attached to the world", id.0);
                continue;
            };
            if viewport.is_stale(position) {
                viewport.synchronize(position);
                list.entries.push(MapRefresh::for_mob(id, position));
            }
        }
        list
    }
}
