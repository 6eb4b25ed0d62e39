use serde::{Deserialize, Serialize};

/// A single mob spawn definition loaded from RON data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDef {
    /// Stable spawn ID, unique within a table.
    pub id: u32,
    /// Human-readable name for logs and debug display.
    pub name: String,
    /// Spawn tile x coordinate.
    pub x: u32,
    /// Spawn tile z coordinate.
    pub z: u32,
    /// Height level, 0 by default.
    #[serde(default)]
    pub level: u8,
    /// Whether the mob spawns with run intent set.
    #[serde(default)]
    pub run: bool,
}

/// Collection of spawn definitions indexed by ID.
#[derive(Debug, Clone, Default)]
pub struct SpawnTable {
    pub spawns: Vec<SpawnDef>,
}

impl SpawnTable {
    /// Look up a spawn by ID. Returns None if not found.
    pub fn get(&self, id: u32) -> Option<&SpawnDef> {
        self.spawns.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.spawns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_id() {
        let table = SpawnTable {
            spawns: vec![
                SpawnDef {
                    id: 1,
                    name: "harbor watch".to_string(),
                    x: 3222,
                    z: 3218,
                    level: 0,
                    run: false,
                },
                SpawnDef {
                    id: 7,
                    name: "mill courier".to_string(),
                    x: 3166,
                    z: 3305,
                    level: 0,
                    run: true,
                },
            ],
        };
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(7).map(|s| s.x), Some(3166));
        assert!(table.get(2).is_none());
    }
}
