use std::fmt;

use thiserror::Error;

/// Kind of record a lookup failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Room,
    Furniture,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Room => write!(f, "Room"),
            Entity::Furniture => write!(f, "Furniture"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("{entity} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("Placement processing failed: {0}")]
    Processing(String),
}

impl PlacementError {
    pub fn room_not_found(id: i64) -> Self {
        PlacementError::NotFound {
            entity: Entity::Room,
            id,
        }
    }

    pub fn furniture_not_found(id: i64) -> Self {
        PlacementError::NotFound {
            entity: Entity::Furniture,
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PlacementError::NotFound { .. })
    }
}
