//! Entity capability set.
//!
//! Every object that lives on the map implements [`Entity`]: it can be
//! advanced by one simulation turn and it can receive broadcast messages.
//! Objects placed on a [`crate::Tile`] additionally implement [`TileChild`]
//! so the tile can record itself as their owner. The owner is a plain
//! [`TileRef`] (a position), never a pointer: the tile owns its children and
//! the back-reference exists for diagnostics only.

mod message;
mod terrain;

use std::fmt;

pub use message::{Message, MessageKind};
pub use terrain::{TerrainFlags, TerrainKind, TerrainType, WallStyle};

use crate::map::Position;

/// Something that takes part in the simulation.
pub trait Entity {
    /// Performs one unit of simulation time.
    ///
    /// Called once per turn. Side effects stay within this entity and the
    /// entities it owns; turn order is the caller's responsibility.
    fn advance_one_turn(&mut self);

    /// Delivers a broadcast event. Entities owning others forward it to all of
    /// them in insertion order.
    fn receive_message(&mut self, message: &Message);
}

/// Non-owning reference from a child entity back to the tile holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileRef(pub Position);

impl TileRef {
    pub fn position(self) -> Position {
        self.0
    }
}

impl fmt::Display for TileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile {}", self.0)
    }
}

/// An entity that can be placed on a tile.
pub trait TileChild: Entity + fmt::Debug {
    /// Tile currently holding this entity, if it has been placed.
    fn owner(&self) -> Option<TileRef>;

    /// Records the owning tile. Called by the tile when the entity is placed.
    fn attach(&mut self, owner: TileRef);
}

/// A monster or the player. At most one occupies a tile.
pub trait Creature: TileChild {}

/// An object lying on the floor. Tiles stack them.
pub trait Item: TileChild {}

/// A transient entity such as a projectile or a spell in flight.
pub trait Effect: TileChild {
    /// Expired effects are dropped by [`crate::Tile::purge_expired_effects`].
    fn is_expired(&self) -> bool {
        false
    }
}

/// The ground a tile is made of.
pub trait Terrain: TileChild {
    /// Whether a creature may enter.
    fn is_passable(&self) -> bool;

    /// Whether light and sight pass through.
    fn is_transparent(&self) -> bool;
}
