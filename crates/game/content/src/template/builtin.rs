//! Template types every content set can use.

use dungeon_core::{TerrainFlags, TerrainKind, TerrainType};
use serde::{Deserialize, Serialize};

use super::{Record, Template, from_record};
use crate::error::TemplateError;

/// Blueprint for an item lying on the floor or carried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemTemplate {
    pub name: String,
    pub glyph: char,
    pub description: String,
    pub weight: u32,
    pub value: u32,
    pub stackable: bool,
}

impl Default for ItemTemplate {
    fn default() -> Self {
        Self {
            name: String::new(),
            glyph: '?',
            description: String::new(),
            weight: 0,
            value: 0,
            stackable: false,
        }
    }
}

impl Template for ItemTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn populate(&mut self, record: &Record) -> Result<(), TemplateError> {
        let parsed: Self = from_record(record)?;
        if parsed.name.is_empty() {
            return Err(TemplateError::Invalid("item template needs a name".into()));
        }
        *self = parsed;
        Ok(())
    }
}

/// Blueprint for a monster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureTemplate {
    pub name: String,
    pub glyph: char,
    pub max_hp: u32,
    /// Action speed; 100 is normal.
    pub speed: u32,
    pub attack: u32,
    pub defense: u32,
    pub tags: Vec<String>,
}

impl Default for CreatureTemplate {
    fn default() -> Self {
        Self {
            name: String::new(),
            glyph: 'm',
            max_hp: 1,
            speed: 100,
            attack: 0,
            defense: 0,
            tags: Vec::new(),
        }
    }
}

impl Template for CreatureTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn populate(&mut self, record: &Record) -> Result<(), TemplateError> {
        let parsed: Self = from_record(record)?;
        if parsed.name.is_empty() {
            return Err(TemplateError::Invalid("creature template needs a name".into()));
        }
        if parsed.max_hp == 0 {
            return Err(TemplateError::Invalid(format!(
                "creature '{}' must have max_hp above zero",
                parsed.name
            )));
        }
        *self = parsed;
        Ok(())
    }
}

/// Blueprint for a terrain variant, optionally overriding the kind's flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainTemplate {
    pub name: String,
    pub kind: TerrainKind,
    pub passable: Option<bool>,
    pub transparent: Option<bool>,
}

impl TerrainTemplate {
    /// Flags after applying overrides to the kind's defaults.
    pub fn flags(&self) -> TerrainFlags {
        let mut flags = self.kind.default_flags();
        if let Some(passable) = self.passable {
            flags.set(TerrainFlags::PASSABLE, passable);
        }
        if let Some(transparent) = self.transparent {
            flags.set(TerrainFlags::TRANSPARENT, transparent);
        }
        flags
    }

    /// Builds a fresh terrain entity from this blueprint.
    pub fn build(&self) -> TerrainType {
        TerrainType::with_flags(self.kind, self.flags())
    }
}

impl Template for TerrainTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn populate(&mut self, record: &Record) -> Result<(), TemplateError> {
        let parsed: Self = from_record(record)?;
        if parsed.name.is_empty() {
            return Err(TemplateError::Invalid("terrain template needs a name".into()));
        }
        *self = parsed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use dungeon_core::{Terrain, WallStyle};
    use serde_json::{Value, json};

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn item_ignores_loader_tags_and_fills_defaults() {
        let mut item = ItemTemplate::default();
        item.populate(&record(json!({
            "name": "longsword",
            "type": "template",
            "glyph": "/",
            "value": 15
        })))
        .unwrap();

        assert_eq!(item.name, "longsword");
        assert_eq!(item.glyph, '/');
        assert_eq!(item.value, 15);
        assert_eq!(item.weight, 0);
        assert!(!item.stackable);
    }

    #[test]
    fn unnamed_item_is_invalid() {
        let mut item = ItemTemplate::default();
        let err = item.populate(&record(json!({"weight": 3}))).unwrap_err();
        assert!(matches!(err, TemplateError::Invalid(_)));
    }

    #[test]
    fn creature_rejects_zero_hp() {
        let mut creature = CreatureTemplate::default();
        let err = creature
            .populate(&record(json!({"name": "ghost", "max_hp": 0})))
            .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn creature_keeps_tags() {
        let mut creature = CreatureTemplate::default();
        creature
            .populate(&record(json!({
                "name": "goblin",
                "max_hp": 7,
                "tags": ["greenskin", "coward"]
            })))
            .unwrap();

        assert_eq!(creature.speed, 100);
        assert_eq!(creature.tags, ["greenskin", "coward"]);
    }

    #[test]
    fn terrain_overrides_default_flags() {
        let mut terrain = TerrainTemplate::default();
        terrain
            .populate(&record(json!({
                "name": "glass wall",
                "kind": {"wall": "stone"},
                "transparent": true
            })))
            .unwrap();

        assert_eq!(terrain.kind, TerrainKind::Wall(WallStyle::Stone));
        let built = terrain.build();
        assert!(!built.is_passable());
        assert!(built.is_transparent());
    }

    #[test]
    fn terrain_kind_uses_snake_case_names() {
        let mut terrain = TerrainTemplate::default();
        terrain
            .populate(&record(json!({"name": "ford", "kind": "shallow_water"})))
            .unwrap();
        assert!(terrain.build().is_passable());
    }

    #[test]
    fn terrain_without_kind_is_rock_wall() {
        let mut terrain = TerrainTemplate::default();
        terrain
            .populate(&record(json!({"name": "plain wall"})))
            .unwrap();

        assert_eq!(terrain.kind, TerrainKind::Wall(WallStyle::Rock));
        assert!(!terrain.build().is_passable());
    }
}
