use std::time::Instant;

use tessera_core::constants::TICK_MILLIS;
use tessera_core::types::{MobId, Position};
use tessera_sim::mob::Mob;
use tessera_sim::pipeline::TickPipeline;
use tessera_sim::route;
use tessera_world::spawns;
use tessera_world::World;

use crate::scenes::{self, SceneConfig};

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub mob_count: u32,
    pub tick_count: u32,
    /// Total sub-steps resolved across all mobs and ticks.
    pub steps_resolved: u64,
    /// Total map rebuilds signalled to the streaming layer.
    pub rebuilds: u64,
    /// Ticks that exceeded the 600 ms tick budget.
    pub budget_overruns: u32,
    pub timings: TimingSeries,
}

/// Runs movement-core benchmarks on synthetic mob populations.
pub struct BenchmarkRunner {
    tick_count: u32,
}

impl BenchmarkRunner {
    pub fn new(tick_count: u32) -> Self {
        Self { tick_count }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> BenchmarkResult {
        log::info!(
            "Running scene '{}' ({} mobs)...",
            config.name,
            config.mob_count
        );

        let spawn_table = spawns::load_spawns_from_str(include_str!("../data/spawns.ron"))
            .expect("failed to parse bench spawns RON");
        if let Err(errors) = spawns::validate_spawns(&spawn_table) {
            for e in &errors {
                log::error!("Spawn validation error: {e}");
            }
            panic!("Spawn validation failed with {} errors", errors.len());
        }

        // Scatter the population around the spawn points.
        let mut mobs = Vec::with_capacity(config.mob_count as usize);
        let mut world = World::new();
        for i in 0..config.mob_count {
            let def = &spawn_table.spawns[i as usize % spawn_table.len()];
            let position = Position::new(
                scenes::jittered_coord(def.x, scenes::jitter(i, 0, config.roam_radius)),
                scenes::jittered_coord(def.z, scenes::jitter(i, 1, config.roam_radius)),
                def.level,
            );
            let mut mob = Mob::new(MobId(i), position);
            if def.run || i % 100 < config.run_percent {
                mob.movement.set_run_path(true);
            }
            world.attach(mob.id, mob.position);
            mobs.push(mob);
        }

        let mut pipeline = TickPipeline::new();
        let mut positions = Vec::with_capacity(mobs.len());
        let mut tick_times = Vec::with_capacity(self.tick_count as usize);
        let mut steps_resolved = 0u64;
        let mut rebuilds = 0u64;

        for tick in 0..self.tick_count {
            // Re-task idle mobs before the timed region; route production
            // belongs to the path producers, not the core.
            for (i, mob) in mobs.iter_mut().enumerate() {
                if mob.movement.is_empty() {
                    let def = &spawn_table.spawns[i % spawn_table.len()];
                    let to_x = scenes::jittered_coord(
                        def.x,
                        scenes::jitter(i as u32, tick.wrapping_mul(2) + 2, config.roam_radius),
                    );
                    let to_z = scenes::jittered_coord(
                        def.z,
                        scenes::jitter(i as u32, tick.wrapping_mul(2) + 3, config.roam_radius),
                    );
                    route::plot_naive(&mut mob.movement, mob.position, to_x, to_z);
                }
            }

            let tick_start = Instant::now();

            pipeline.tick(&mut mobs);

            positions.clear();
            positions.extend(mobs.iter().map(|mob| (mob.id, mob.position)));
            let rebuild_list = world.update(&positions);

            let elapsed = tick_start.elapsed().as_secs_f64() * 1000.0;
            tick_times.push(elapsed);

            rebuilds += rebuild_list.len() as u64;
            for mob in &mobs {
                steps_resolved += mob.last_steps.primary.is_some() as u64;
                steps_resolved += mob.last_steps.secondary.is_some() as u64;
            }
        }

        let budget_overruns = tick_times
            .iter()
            .filter(|&&ms| ms > TICK_MILLIS as f64)
            .count() as u32;

        let timings = compute_timings(&tick_times);
        log::info!(
            "  Done: mean={:.3}ms, p95={:.3}ms, p99={:.3}ms, {} rebuilds",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms,
            rebuilds
        );

        BenchmarkResult {
            scene_name: config.name.to_string(),
            mob_count: config.mob_count,
            tick_count: self.tick_count,
            steps_resolved,
            rebuilds,
            budget_overruns,
            timings,
        }
    }
}

/// Compute timing statistics from a list of tick times in milliseconds.
fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}
