//! Per-cell composite entity.
//!
//! A [`Tile`] owns everything standing on one grid cell:
//!
//! - transient effects (projectiles, spells), kept in insertion order
//! - at most one creature
//! - a stack of items, the most recently dropped on top
//! - exactly one terrain
//!
//! Turns and messages fan out in a fixed order: effects, creature, items from
//! the top of the stack down, terrain. Effects such as damage over time land
//! before the creature acts, and terrain (spreading fire) resolves after every
//! occupant.

use crate::config::DungeonConfig;
use crate::entity::{Creature, Effect, Entity, Item, Message, Terrain, TerrainType, TileRef};
use crate::error::{DungeonError, ErrorCategory};
use crate::map::{MapDimensions, Position};

/// Errors raised by tile operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    /// A coordinate falls outside the grid.
    #[error("tile position {position} is outside the {width}x{height} dungeon")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    /// A creature already stands on the tile.
    #[error("tile {0} is already occupied by a creature")]
    AlreadyOccupied(Position),
}

impl DungeonError for TileError {
    fn category(&self) -> ErrorCategory {
        match self {
            TileError::OutOfBounds { .. } | TileError::AlreadyOccupied(_) => {
                ErrorCategory::InvariantViolation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TileError::OutOfBounds { .. } => "TILE_OUT_OF_BOUNDS",
            TileError::AlreadyOccupied(_) => "TILE_ALREADY_OCCUPIED",
        }
    }
}

/// A creature refused by an occupied tile, handed back to the caller.
#[derive(Debug, thiserror::Error)]
#[error("tile {position} is already occupied by a creature")]
pub struct OccupiedError {
    position: Position,
    creature: Box<dyn Creature>,
}

impl OccupiedError {
    pub fn position(&self) -> Position {
        self.position
    }

    /// The creature that was not placed.
    pub fn creature(&self) -> &dyn Creature {
        self.creature.as_ref()
    }

    pub fn into_creature(self) -> Box<dyn Creature> {
        self.creature
    }
}

impl From<OccupiedError> for TileError {
    fn from(err: OccupiedError) -> Self {
        TileError::AlreadyOccupied(err.position)
    }
}

impl DungeonError for OccupiedError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::InvariantViolation
    }

    fn error_code(&self) -> &'static str {
        "TILE_ALREADY_OCCUPIED"
    }
}

/// A single dungeon cell and everything on it.
#[derive(Debug)]
pub struct Tile {
    position: Position,
    visible: bool,
    generated: bool,
    effects: Vec<Box<dyn Effect>>,
    creature: Option<Box<dyn Creature>>,
    /// Bottom of the stack first; iterate in reverse for top-down order.
    items: Vec<Box<dyn Item>>,
    terrain: Box<dyn Terrain>,
}

impl Tile {
    /// Creates a tile inside the default dungeon bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::OutOfBounds`] if `x` or `y` lies outside
    /// [`DungeonConfig::DIMENSIONS`].
    pub fn new(terrain: Box<dyn Terrain>, x: i32, y: i32) -> Result<Self, TileError> {
        Self::with_bounds(terrain, x, y, DungeonConfig::DIMENSIONS)
    }

    /// Creates a rock-wall tile inside the default dungeon bounds.
    pub fn rock(x: i32, y: i32) -> Result<Self, TileError> {
        Self::new(Box::new(TerrainType::rock_wall()), x, y)
    }

    /// Creates a tile validated against explicit grid bounds.
    pub fn with_bounds(
        mut terrain: Box<dyn Terrain>,
        x: i32,
        y: i32,
        bounds: MapDimensions,
    ) -> Result<Self, TileError> {
        let position = Position::new(x, y);
        if !bounds.contains_x(x) || !bounds.contains_y(y) {
            return Err(TileError::OutOfBounds {
                position,
                width: bounds.width,
                height: bounds.height,
            });
        }

        terrain.attach(TileRef(position));
        Ok(Self {
            position,
            visible: false,
            generated: false,
            effects: Vec::new(),
            creature: None,
            items: Vec::new(),
            terrain,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    fn tile_ref(&self) -> TileRef {
        TileRef(self.position)
    }

    // ===== effects =====

    /// Appends a transient effect and takes ownership of it.
    pub fn add_effect(&mut self, mut effect: Box<dyn Effect>) {
        effect.attach(self.tile_ref());
        self.effects.push(effect);
    }

    /// Effects in insertion order.
    pub fn effects(&self) -> impl DoubleEndedIterator<Item = &(dyn Effect + 'static)> + '_ {
        self.effects.iter().map(|effect| &**effect)
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Drops every effect reporting itself expired. Returns how many were removed.
    pub fn purge_expired_effects(&mut self) -> usize {
        let before = self.effects.len();
        self.effects.retain(|effect| !effect.is_expired());
        before - self.effects.len()
    }

    // ===== items =====

    /// Pushes an item on top of the stack and takes ownership of it.
    pub fn add_item(&mut self, mut item: Box<dyn Item>) {
        item.attach(self.tile_ref());
        self.items.push(item);
    }

    /// Removes and returns the item on top of the stack.
    pub fn take_item(&mut self) -> Option<Box<dyn Item>> {
        self.items.pop()
    }

    /// Items from the top of the stack down (most recently added first).
    pub fn items(&self) -> impl DoubleEndedIterator<Item = &(dyn Item + 'static)> + '_ {
        self.items.iter().rev().map(|item| &**item)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // ===== creature =====

    pub fn creature(&self) -> Option<&dyn Creature> {
        self.creature.as_deref()
    }

    pub fn creature_mut(&mut self) -> Option<&mut (dyn Creature + 'static)> {
        self.creature.as_deref_mut()
    }

    pub fn has_creature(&self) -> bool {
        self.creature.is_some()
    }

    /// Places a creature on the tile, or clears it with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedError`] when placing a creature on a tile that
    /// already has one. The resident stays and the refused creature is
    /// returned inside the error.
    pub fn set_creature(
        &mut self,
        creature: Option<Box<dyn Creature>>,
    ) -> Result<(), OccupiedError> {
        match creature {
            None => {
                self.creature = None;
                Ok(())
            }
            Some(creature) if self.creature.is_some() => Err(OccupiedError {
                position: self.position,
                creature,
            }),
            Some(mut creature) => {
                creature.attach(self.tile_ref());
                self.creature = Some(creature);
                Ok(())
            }
        }
    }

    /// Detaches and returns the current creature, leaving the tile empty.
    pub fn remove_creature(&mut self) -> Option<Box<dyn Creature>> {
        self.creature.take()
    }

    // ===== terrain =====

    pub fn terrain(&self) -> &dyn Terrain {
        self.terrain.as_ref()
    }

    /// Replaces the terrain unconditionally and returns the previous one.
    pub fn set_terrain(&mut self, mut terrain: Box<dyn Terrain>) -> Box<dyn Terrain> {
        terrain.attach(self.tile_ref());
        std::mem::replace(&mut self.terrain, terrain)
    }

    /// A creature blocks the tile; otherwise the terrain decides.
    pub fn is_passable(&self) -> bool {
        self.creature.is_none() && self.terrain.is_passable()
    }

    /// Occupants never block sight.
    pub fn is_transparent(&self) -> bool {
        self.terrain.is_transparent()
    }

    // ===== flags =====

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Marker owned by map generation; runtime behavior ignores it.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn set_generated(&mut self, generated: bool) {
        self.generated = generated;
    }
}

impl Entity for Tile {
    fn advance_one_turn(&mut self) {
        for effect in &mut self.effects {
            effect.advance_one_turn();
        }
        if let Some(creature) = &mut self.creature {
            creature.advance_one_turn();
        }
        for item in self.items.iter_mut().rev() {
            item.advance_one_turn();
        }
        self.terrain.advance_one_turn();
    }

    fn receive_message(&mut self, message: &Message) {
        for effect in &mut self.effects {
            effect.receive_message(message);
        }
        if let Some(creature) = &mut self.creature {
            creature.receive_message(message);
        }
        for item in self.items.iter_mut().rev() {
            item.receive_message(message);
        }
        self.terrain.receive_message(message);
    }
}
