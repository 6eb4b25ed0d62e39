//! The per-tick driving loop over all active mobs.

use crate::mob::Mob;
use crate::step::{self, StepValidator, Unobstructed};

/// Single public struct owning the tick-resolution loop.
///
/// Single-threaded and cooperative: each mob is resolved exactly once per
/// tick, the walk sub-step always before the run sub-step, with no state
/// shared across mobs. The reference tick period is
/// [`tessera_core::constants::TICK_MILLIS`]; pacing belongs to the caller.
pub struct TickPipeline<V = Unobstructed> {
    validator: V,
    tick_count: u64,
    paused: bool,
    single_step_requested: bool,
}

impl TickPipeline<Unobstructed> {
    /// Pipeline with the permissive default validator.
    pub fn new() -> Self {
        Self::with_validator(Unobstructed)
    }
}

impl Default for TickPipeline<Unobstructed> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: StepValidator> TickPipeline<V> {
    /// Pipeline consulting `validator` before every sub-step.
    pub fn with_validator(validator: V) -> Self {
        Self {
            validator,
            tick_count: 0,
            paused: false,
            single_step_requested: false,
        }
    }

    /// Run one simulation tick over `mobs`.
    ///
    /// Returns true if the tick actually ran (not paused).
    pub fn tick(&mut self, mobs: &mut [Mob]) -> bool {
        if self.paused && !self.single_step_requested {
            return false;
        }
        self.single_step_requested = false;

        for mob in mobs.iter_mut() {
            mob.last_steps =
                step::resolve_tick(&mut mob.position, &mut mob.movement, &self.validator);
        }

        self.tick_count += 1;
        true
    }

    /// Pause the simulation.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the simulation.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Request a single simulation step (advances by exactly 1 tick).
    pub fn single_step(&mut self) {
        self.single_step_requested = true;
    }

    /// Whether the simulation is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current tick count.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::direction::Direction;
    use tessera_core::types::{MobId, Position};

    fn walker(id: u32, x: u32, z: u32, to_x: u32, to_z: u32) -> Mob {
        let mut mob = Mob::new(MobId(id), Position::new(x, z, 0));
        crate::route::plot_naive(&mut mob.movement, mob.position, to_x, to_z);
        mob
    }

    #[test]
    fn test_tick_resolves_every_mob() {
        let mut pipeline = TickPipeline::new();
        let mut mobs = vec![
            walker(1, 3200, 3200, 3202, 3200),
            walker(2, 3100, 3100, 3100, 3098),
        ];

        assert!(pipeline.tick(&mut mobs));
        assert_eq!(mobs[0].position, Position::new(3201, 3200, 0));
        assert_eq!(mobs[0].last_steps.primary, Some(Direction::East));
        assert_eq!(mobs[1].position, Position::new(3100, 3099, 0));
        assert_eq!(mobs[1].last_steps.primary, Some(Direction::South));
        assert_eq!(pipeline.tick_count(), 1);
    }

    #[test]
    fn test_paused_pipeline_resolves_nothing() {
        let mut pipeline = TickPipeline::new();
        let mut mobs = vec![walker(1, 3200, 3200, 3202, 3200)];

        pipeline.pause();
        assert!(!pipeline.tick(&mut mobs));
        assert_eq!(mobs[0].position, Position::new(3200, 3200, 0));
        assert_eq!(pipeline.tick_count(), 0);

        pipeline.resume();
        assert!(pipeline.tick(&mut mobs));
        assert_eq!(pipeline.tick_count(), 1);
    }

    #[test]
    fn test_single_step_advances_exactly_one_tick() {
        let mut pipeline = TickPipeline::new();
        let mut mobs = vec![walker(1, 3200, 3200, 3204, 3200)];

        pipeline.pause();
        pipeline.single_step();
        assert!(pipeline.tick(&mut mobs));
        assert!(!pipeline.tick(&mut mobs));
        assert_eq!(mobs[0].position, Position::new(3201, 3200, 0));
        assert_eq!(pipeline.tick_count(), 1);
    }

    #[test]
    fn test_idle_mob_reports_no_movement() {
        let mut pipeline = TickPipeline::new();
        let mut mobs = vec![Mob::new(MobId(1), Position::new(3200, 3200, 0))];

        assert!(pipeline.tick(&mut mobs));
        assert_eq!(mobs[0].last_steps.primary, None);
        assert_eq!(mobs[0].last_steps.secondary, None);
    }
}
