use tessera_core::constants::{DEFAULT_SPAWN_LEVEL, DEFAULT_SPAWN_X, DEFAULT_SPAWN_Z};
use tessera_core::types::{MobId, Position};

use crate::movement::MovementHandler;
use crate::step::TickSteps;

/// One mobile entity, player or NPC.
///
/// All movement state is per-mob and owned exclusively by the tick loop;
/// nothing in this crate holds module-level mutable state.
#[derive(Debug, Clone)]
pub struct Mob {
    pub id: MobId,
    pub position: Position,
    pub movement: MovementHandler,
    /// Sub-steps resolved in the most recent tick, consumed by the update
    /// packet serializer.
    pub last_steps: TickSteps,
}

impl Mob {
    pub fn new(id: MobId, position: Position) -> Self {
        Self {
            id,
            position,
            movement: MovementHandler::new(),
            last_steps: TickSteps::default(),
        }
    }

    /// Spawn at the default home tile.
    pub fn at_default_spawn(id: MobId) -> Self {
        Self::new(
            id,
            Position::new(DEFAULT_SPAWN_X, DEFAULT_SPAWN_Z, DEFAULT_SPAWN_LEVEL),
        )
    }

    /// Move instantly to `destination`, dropping queued movement and run
    /// flags. Run energy is untouched.
    pub fn teleport(&mut self, destination: Position) {
        self.movement.clear();
        self.last_steps = TickSteps::default();
        self.position = destination;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spawn_tile() {
        let mob = Mob::at_default_spawn(MobId(1));
        assert_eq!(mob.position, Position::new(3222, 3218, 0));
        assert!(mob.movement.is_empty());
    }

    #[test]
    fn test_teleport_clears_movement_keeps_energy() {
        let mut mob = Mob::at_default_spawn(MobId(1));
        mob.movement.enqueue(3230, 3220);
        mob.movement.set_run_path(true);
        mob.movement.set_run_energy(4000);

        mob.teleport(Position::new(3100, 3100, 1));
        assert_eq!(mob.position, Position::new(3100, 3100, 1));
        assert!(mob.movement.is_empty());
        assert!(!mob.movement.run_path());
        assert_eq!(mob.movement.run_energy(), 4000);
    }
}
