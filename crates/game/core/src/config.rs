use crate::map::MapDimensions;

/// Dungeon-wide constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DungeonConfig;

impl DungeonConfig {
    /// Number of tile columns in a dungeon level.
    pub const WIDTH: u32 = 80;
    /// Number of tile rows in a dungeon level.
    pub const HEIGHT: u32 = 40;

    /// Grid bounds every tile position is validated against by default.
    pub const DIMENSIONS: MapDimensions = MapDimensions::new(Self::WIDTH, Self::HEIGHT);

    pub const fn dimensions() -> MapDimensions {
        Self::DIMENSIONS
    }
}
