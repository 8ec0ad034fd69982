//! Entity composition for dungeon tiles.
//!
//! `dungeon-core` defines the [`Entity`] capability set shared by everything
//! that lives on the map, and the [`Tile`] composite that owns a cell's
//! terrain, creature, items and transient effects. A simulation turn reaches
//! every occupant of a tile through [`Tile::advance_one_turn`], and broadcast
//! events through [`Tile::receive_message`].
//!
//! Nothing here performs I/O or logging. Failures are reported as values
//! classified by [`error::DungeonError`].
pub mod config;
pub mod entity;
pub mod error;
pub mod map;
pub mod tile;

pub use config::DungeonConfig;
pub use entity::{
    Creature, Effect, Entity, Item, Message, MessageKind, Terrain, TerrainFlags, TerrainKind,
    TerrainType, TileChild, TileRef, WallStyle,
};
pub use error::{DungeonError, ErrorCategory};
pub use map::{MapDimensions, Position};
pub use tile::{OccupiedError, Tile, TileError};
