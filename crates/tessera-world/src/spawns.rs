//! RON spawn-table loading and validation.

use std::collections::HashSet;

use tessera_core::constants::{LEVEL_COUNT, MAX_PLAYABLE_COORD};
use tessera_core::spawn::{SpawnDef, SpawnTable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse spawns RON: {0}")]
    SpawnParseError(String),
}

/// Parse a single spawns RON string into a SpawnTable.
pub fn load_spawns_from_str(ron_str: &str) -> Result<SpawnTable, LoadError> {
    let options = ron::Options::default();
    let spawns: Vec<SpawnDef> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::SpawnParseError(e.to_string()))?;
    Ok(SpawnTable { spawns })
}

/// Load and merge multiple spawn sources into a single table.
pub fn load_all_spawns(sources: &[&str]) -> Result<SpawnTable, LoadError> {
    let mut all_spawns = Vec::new();
    for source in sources {
        let table = load_spawns_from_str(source)?;
        all_spawns.extend(table.spawns);
    }
    Ok(SpawnTable { spawns: all_spawns })
}

/// Validate a spawn table against the playable map.
///
/// Returns every problem found, not just the first: data authors fix whole
/// files at a time.
pub fn validate_spawns(table: &SpawnTable) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for def in &table.spawns {
        if !seen_ids.insert(def.id) {
            errors.push(format!("spawn {} ({}): duplicate id", def.id, def.name));
        }
        if def.x > MAX_PLAYABLE_COORD || def.z > MAX_PLAYABLE_COORD {
            errors.push(format!(
                "spawn {} ({}): tile ({}, {}) is beyond the playable map",
                def.id, def.name, def.x, def.z
            ));
        }
        if u32::from(def.level) >= LEVEL_COUNT {
            errors.push(format!(
                "spawn {} ({}): level {} out of range",
                def.id, def.name, def.level
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RON: &str = r#"[
        (id: 1, name: "harbor watch", x: 3222, z: 3218),
        (id: 2, name: "mill courier", x: 3166, z: 3305, run: true),
        (id: 3, name: "cellar rat", x: 3208, z: 3212, level: 1),
    ]"#;

    #[test]
    fn test_load_valid_spawns() {
        let table = load_spawns_from_str(VALID_RON).expect("valid RON");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2).map(|s| s.run), Some(true));
        assert_eq!(table.get(1).map(|s| s.level), Some(0));
        assert!(validate_spawns(&table).is_ok());
    }

    #[test]
    fn test_load_rejects_malformed_ron() {
        let result = load_spawns_from_str("[(id: 1, name: ]");
        assert!(matches!(result, Err(LoadError::SpawnParseError(_))));
    }

    #[test]
    fn test_load_all_merges_sources() {
        let extra = r#"[(id: 9, name: "gate sentry", x: 3012, z: 3190)]"#;
        let table = load_all_spawns(&[VALID_RON, extra]).expect("valid RON");
        assert_eq!(table.len(), 4);
        assert!(table.get(9).is_some());
    }

    #[test]
    fn test_validate_reports_out_of_bounds() {
        let table = load_spawns_from_str(r#"[(id: 4, name: "lost soul", x: 12801, z: 3000)]"#)
            .expect("valid RON");
        let errors = validate_spawns(&table).expect_err("out of bounds");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("spawn 4"));
        assert!(errors[0].contains("beyond the playable map"));
    }

    #[test]
    fn test_validate_reports_bad_level_and_duplicates() {
        let table = load_spawns_from_str(
            r#"[
                (id: 5, name: "roof archer", x: 3200, z: 3200, level: 4),
                (id: 5, name: "roof archer twin", x: 3201, z: 3200),
            ]"#,
        )
        .expect("valid RON");
        let errors = validate_spawns(&table).expect_err("invalid table");
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("level 4 out of range")));
        assert!(errors.iter().any(|e| e.contains("duplicate id")));
    }
}
