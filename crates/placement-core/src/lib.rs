//! Furniture placement validation
//!
//! This crate checks whether furniture placed in a rectangular room is
//! geometrically valid: inside the room, not overlapping other pieces, and
//! leaving enough clearance to walk around.
//!
//! The validator is pure. Rooms and catalog entries are resolved through the
//! `RoomRepository` / `FurnitureRepository` traits, which callers implement
//! over their own store or fill an `InMemoryCatalog` for.

pub mod error;
pub mod repository;
pub mod types;
pub mod validator;

pub use error::{Entity, PlacementError};
pub use repository::{FurnitureRepository, InMemoryCatalog, RoomRepository};
pub use types::{Footprint, FurnitureKind, Placement, Rect, Room, Rotation};
pub use validator::{
    check_fitness, check_multiple_fitness, FitnessCheckRequest, FitnessReport,
    MultipleFitnessCheckRequest, MultipleFitnessReport, PlacementReport, MIN_WALKING_SPACE,
};
