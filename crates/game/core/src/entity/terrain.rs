use bitflags::bitflags;

use super::{Entity, Message, Terrain, TileChild, TileRef};

bitflags! {
    /// Physical properties of a terrain type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TerrainFlags: u8 {
        const PASSABLE    = 1 << 0;
        const TRANSPARENT = 1 << 1;
    }
}

/// Material of a wall.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WallStyle {
    #[default]
    Rock,
    Stone,
    Brick,
}

/// Canonical terrain classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainKind {
    Floor,
    Wall(WallStyle),
    Door,
    Stairs,
    ShallowWater,
    DeepWater,
    Lava,
    /// Indestructible rock bounding the map.
    Bedrock,
}

impl Default for TerrainKind {
    fn default() -> Self {
        Self::Wall(WallStyle::Rock)
    }
}

impl TerrainKind {
    /// Flags a freshly built terrain of this kind starts with.
    pub const fn default_flags(self) -> TerrainFlags {
        match self {
            Self::Floor | Self::Stairs | Self::ShallowWater => {
                TerrainFlags::PASSABLE.union(TerrainFlags::TRANSPARENT)
            }
            Self::Door => TerrainFlags::PASSABLE,
            Self::DeepWater | Self::Lava => TerrainFlags::TRANSPARENT,
            Self::Wall(_) | Self::Bedrock => TerrainFlags::empty(),
        }
    }
}

/// Terrain entity backing every tile.
///
/// Terrain has no behavior of its own yet; it counts the turns and messages it
/// has seen so hazards layered on top can key off them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainType {
    kind: TerrainKind,
    flags: TerrainFlags,
    owner: Option<TileRef>,
    turns_elapsed: u64,
    messages_received: u64,
}

impl TerrainType {
    pub fn new(kind: TerrainKind) -> Self {
        Self::with_flags(kind, kind.default_flags())
    }

    /// Builds a terrain whose flags differ from the kind's defaults
    /// (a secret door that looks like a wall, a glass wall).
    pub fn with_flags(kind: TerrainKind, flags: TerrainFlags) -> Self {
        Self {
            kind,
            flags,
            owner: None,
            turns_elapsed: 0,
            messages_received: 0,
        }
    }

    /// Impassable, opaque rock wall. Used when no terrain is given.
    pub fn rock_wall() -> Self {
        Self::new(TerrainKind::Wall(WallStyle::Rock))
    }

    pub fn floor() -> Self {
        Self::new(TerrainKind::Floor)
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    pub fn flags(&self) -> TerrainFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: TerrainFlags) {
        self.flags = flags;
    }

    pub fn turns_elapsed(&self) -> u64 {
        self.turns_elapsed
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received
    }
}

impl Default for TerrainType {
    fn default() -> Self {
        Self::rock_wall()
    }
}

impl Entity for TerrainType {
    fn advance_one_turn(&mut self) {
        self.turns_elapsed += 1;
    }

    fn receive_message(&mut self, _message: &Message) {
        self.messages_received += 1;
    }
}

impl TileChild for TerrainType {
    fn owner(&self) -> Option<TileRef> {
        self.owner
    }

    fn attach(&mut self, owner: TileRef) {
        self.owner = Some(owner);
    }
}

impl Terrain for TerrainType {
    fn is_passable(&self) -> bool {
        self.flags.contains(TerrainFlags::PASSABLE)
    }

    fn is_transparent(&self) -> bool {
        self.flags.contains(TerrainFlags::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::MessageKind;

    #[test]
    fn rock_wall_blocks_movement_and_sight() {
        let wall = TerrainType::rock_wall();
        assert_eq!(wall.kind(), TerrainKind::Wall(WallStyle::Rock));
        assert!(!wall.is_passable());
        assert!(!wall.is_transparent());
    }

    #[test]
    fn default_flags_per_kind() {
        assert!(TerrainType::floor().is_passable());
        assert!(TerrainType::floor().is_transparent());

        let lava = TerrainType::new(TerrainKind::Lava);
        assert!(!lava.is_passable());
        assert!(lava.is_transparent());

        let door = TerrainType::new(TerrainKind::Door);
        assert!(door.is_passable());
        assert!(!door.is_transparent());
    }

    #[test]
    fn custom_flags_override_kind_defaults() {
        let glass = TerrainType::with_flags(
            TerrainKind::Wall(WallStyle::Stone),
            TerrainFlags::TRANSPARENT,
        );
        assert!(!glass.is_passable());
        assert!(glass.is_transparent());
    }

    #[test]
    fn counts_turns_and_messages() {
        let mut floor = TerrainType::floor();
        floor.advance_one_turn();
        floor.advance_one_turn();
        floor.receive_message(&Message::new(MessageKind::Noise));

        assert_eq!(floor.turns_elapsed(), 2);
        assert_eq!(floor.messages_received(), 1);
    }

    #[test]
    fn default_kind_matches_default_terrain() {
        assert_eq!(TerrainKind::default(), TerrainType::default().kind());
        assert_eq!(TerrainType::default(), TerrainType::rock_wall());
    }

    #[test]
    fn kind_parses_from_snake_case() {
        assert_eq!(
            TerrainKind::from_str("shallow_water").ok(),
            Some(TerrainKind::ShallowWater)
        );
        assert_eq!(TerrainKind::DeepWater.to_string(), "deep_water");
    }
}
