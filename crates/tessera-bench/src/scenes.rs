use tessera_core::constants::MAX_PLAYABLE_COORD;

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub mob_count: u32,
    /// Tiles of jitter around a mob's spawn when it is handed a new route.
    pub roam_radius: u32,
    /// Percentage of mobs with run intent enabled.
    pub run_percent: u32,
}

/// Return the standard suite of benchmark scenes (1K to 50K active mobs).
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "1K",
            mob_count: 1_000,
            roam_radius: 24,
            run_percent: 25,
        },
        SceneConfig {
            name: "5K",
            mob_count: 5_000,
            roam_radius: 24,
            run_percent: 25,
        },
        SceneConfig {
            name: "10K",
            mob_count: 10_000,
            roam_radius: 32,
            run_percent: 25,
        },
        SceneConfig {
            name: "25K",
            mob_count: 25_000,
            roam_radius: 32,
            run_percent: 50,
        },
        SceneConfig {
            name: "50K",
            mob_count: 50_000,
            roam_radius: 48,
            run_percent: 50,
        },
    ]
}

/// Deterministic pseudo-random jitter in [-radius, radius] for a mob index
/// and a salt.
pub fn jitter(mob_index: u32, salt: u32, radius: u32) -> i32 {
    if radius == 0 {
        return 0;
    }
    let hash = (mob_index as usize)
        .wrapping_mul(31337)
        .wrapping_add(1)
        ^ (salt as usize).wrapping_mul(7919);
    (hash % (2 * radius as usize + 1)) as i32 - radius as i32
}

/// Apply a signed jitter to a coordinate, clamped to the playable map.
pub fn jittered_coord(base: u32, delta: i32) -> u32 {
    base.saturating_add_signed(delta).min(MAX_PLAYABLE_COORD)
}
