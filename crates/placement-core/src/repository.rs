//! Read-only lookups the validator resolves rooms and catalog entries through

use std::collections::HashMap;

use crate::error::PlacementError;
use crate::types::{FurnitureKind, Room};

pub trait RoomRepository {
    /// Resolve a room, or `PlacementError::NotFound` naming `Entity::Room`
    fn room(&self, id: i64) -> Result<Room, PlacementError>;
}

pub trait FurnitureRepository {
    /// Resolve a catalog entry, or `PlacementError::NotFound` naming `Entity::Furniture`
    fn furniture(&self, id: i64) -> Result<FurnitureKind, PlacementError>;
}

/// In-memory snapshot of rooms and catalog entries
///
/// The HTTP layer loads exactly the rows a check needs into one of these,
/// releases its database connection, then hands it to the validator.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    rooms: HashMap<i64, Room>,
    furniture: HashMap<i64, FurnitureKind>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    pub fn insert_furniture(&mut self, kind: FurnitureKind) {
        self.furniture.insert(kind.id, kind);
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.insert_room(room);
        self
    }

    pub fn with_furniture(mut self, kind: FurnitureKind) -> Self {
        self.insert_furniture(kind);
        self
    }
}

impl RoomRepository for InMemoryCatalog {
    fn room(&self, id: i64) -> Result<Room, PlacementError> {
        self.rooms
            .get(&id)
            .cloned()
            .ok_or_else(|| PlacementError::room_not_found(id))
    }
}

impl FurnitureRepository for InMemoryCatalog {
    fn furniture(&self, id: i64) -> Result<FurnitureKind, PlacementError> {
        self.furniture
            .get(&id)
            .cloned()
            .ok_or_else(|| PlacementError::furniture_not_found(id))
    }
}
