//! Per-tick step resolution: current position plus queued destinations in,
//! at most one compass direction per sub-step out.

use tessera_core::coords;
use tessera_core::direction::Direction;
use tessera_core::types::Position;

use crate::movement::MovementHandler;

/// Veto point for unsafe steps, consulted after a direction is derived and
/// before the waypoint is consumed.
///
/// The movement core itself assumes every queued step is walkable; a
/// collision-flag store implements this to override a step to "no
/// movement" without losing the waypoint.
pub trait StepValidator {
    fn can_step(&self, from: Position, direction: Direction) -> bool;
}

/// Default validator: every step is allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unobstructed;

impl StepValidator for Unobstructed {
    fn can_step(&self, _from: Position, _direction: Direction) -> bool {
        true
    }
}

/// The two sub-steps resolved for a mob in one tick, in the form the
/// update serializer consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSteps {
    /// The walk sub-step, always resolved first.
    pub primary: Option<Direction>,
    /// The run sub-step, attempted only while effectively running.
    pub secondary: Option<Direction>,
}

/// Resolve at most one single-tile step toward the front waypoint,
/// consuming the queue and draining run energy as side effects.
///
/// A waypoint equal to the current position is stale: it is consumed and
/// the next entry examined. The retry is a loop bounded by the queue
/// capacity rather than recursion, since every retry removes an entry.
///
/// A waypoint is dequeued only at the moment the resolved step reaches it.
/// Removing it when movement toward it is merely decided would stop the
/// mob one tile short of its destination.
pub fn resolve_step<V: StepValidator>(
    position: Position,
    movement: &mut MovementHandler,
    validator: &V,
) -> Option<Direction> {
    for _ in 0..=MovementHandler::capacity() {
        let target = movement.peek_front()?;
        let (_, target_x, target_z) = coords::unpack(target);

        let dx = target_x as i32 - position.x as i32;
        let dz = target_z as i32 - position.z as i32;
        let Some(direction) = Direction::from_delta(dx, dz) else {
            // Stale or duplicate entry: consume it, look at the next.
            movement.dequeue_front();
            continue;
        };

        if !validator.can_step(position, direction) {
            return None;
        }

        let step = direction.offset();
        let reached = position.x as i32 + step.x == target_x as i32
            && position.z as i32 + step.y == target_z as i32;
        if reached {
            movement.dequeue_front();
        }

        movement.drain_energy();
        return Some(direction);
    }
    None
}

/// Resolve one full tick for a mob: the walk sub-step, then, while still
/// effectively running with movement queued, the run sub-step.
///
/// Each sub-step's displacement lands on `position` before the next is
/// attempted, so the two sub-steps together cover up to two tiles.
pub fn resolve_tick<V: StepValidator>(
    position: &mut Position,
    movement: &mut MovementHandler,
    validator: &V,
) -> TickSteps {
    let primary = resolve_step(*position, movement, validator);
    if let Some(direction) = primary {
        position.step(direction);
    }

    let mut secondary = None;
    if movement.running() && !movement.is_empty() {
        secondary = resolve_step(*position, movement, validator);
        if let Some(direction) = secondary {
            position.step(direction);
        }
    }

    TickSteps { primary, secondary }
}
