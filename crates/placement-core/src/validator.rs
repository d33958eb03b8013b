//! Placement validation
//!
//! Two checks are provided:
//! - `check_fitness`: one catalog item at its nominal orientation. Missing
//!   room or furniture is an error.
//! - `check_multiple_fitness`: a whole arrangement with rotations and
//!   pairwise collision detection. Placements whose furniture id does not
//!   resolve are skipped; only a missing room aborts the check.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlacementError;
use crate::repository::{FurnitureRepository, RoomRepository};
use crate::types::{Footprint, FurnitureKind, Placement, Rect, Room};

/// Clearance needed on at least one side to walk around a piece
pub const MIN_WALKING_SPACE: f64 = 2.0;

pub const MSG_FITS: &str = "Fits perfectly! ✅";
pub const MSG_DOES_NOT_FIT: &str = "Doesn't fit! ❌";
pub const MSG_DOES_NOT_FIT_IN_ROOM: &str = "Doesn't fit in room! ❌";
pub const MSG_ALL_FIT: &str = "All furniture fits perfectly! 🎉";
pub const MSG_SOME_DO_NOT_FIT: &str = "Some furniture doesn't fit properly ⚠️";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessCheckRequest {
    pub room_id: i64,
    pub furniture_id: i64,
    pub position_x: f64,
    pub position_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    pub fits: bool,
    pub adequate_space: bool,
    pub walking_space_x: f64,
    pub walking_space_y: f64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleFitnessCheckRequest {
    pub room_id: i64,
    pub furniture_items: Vec<Placement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub furniture_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<i64>,
    pub furniture_name: String,
    pub fits: bool,
    pub collisions: Vec<String>,
    pub adequate_space: bool,
    pub walking_space_x: f64,
    pub walking_space_y: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleFitnessReport {
    pub all_fits: bool,
    pub results: Vec<PlacementReport>,
    pub overall_message: String,
}

/// Residual clearance between the far edges of `rect` and the room (may be negative)
pub fn walking_space(room: &Room, rect: &Rect) -> (f64, f64) {
    (room.width - rect.right(), room.depth - rect.top())
}

pub fn has_adequate_space(walking_space_x: f64, walking_space_y: f64) -> bool {
    walking_space_x >= MIN_WALKING_SPACE || walking_space_y >= MIN_WALKING_SPACE
}

/// Upper-bound containment only; negative anchors are not rejected here
fn within_far_walls(room: &Room, rect: &Rect) -> bool {
    rect.right() <= room.width && rect.top() <= room.depth
}

fn within_room(room: &Room, rect: &Rect) -> bool {
    rect.x >= 0.0 && rect.y >= 0.0 && within_far_walls(room, rect)
}

/// Check a single catalog item at its nominal orientation
pub fn check_fitness<R, F>(
    rooms: &R,
    furniture: &F,
    request: &FitnessCheckRequest,
) -> Result<FitnessReport, PlacementError>
where
    R: RoomRepository + ?Sized,
    F: FurnitureRepository + ?Sized,
{
    let room = rooms.room(request.room_id)?;
    let kind = furniture.furniture(request.furniture_id)?;

    let rect = Footprint::new(kind.width, kind.depth)
        .at(request.position_x, request.position_y);
    let fits = within_far_walls(&room, &rect);
    let (walking_space_x, walking_space_y) = walking_space(&room, &rect);

    Ok(FitnessReport {
        fits,
        adequate_space: has_adequate_space(walking_space_x, walking_space_y),
        walking_space_x,
        walking_space_y,
        message: if fits { MSG_FITS } else { MSG_DOES_NOT_FIT }.to_string(),
    })
}

/// A placement whose catalog entry resolved
struct ResolvedPlacement<'a> {
    placement: &'a Placement,
    kind: FurnitureKind,
    rect: Rect,
}

/// Check an arrangement: room bounds, rotations and pairwise collisions
///
/// Collision checking is O(n²) over the resolved placements. Items are
/// compared by furniture id to exclude self-comparison, so two placements of
/// the same catalog entry are never reported as colliding with each other.
pub fn check_multiple_fitness<R, F>(
    rooms: &R,
    furniture: &F,
    request: &MultipleFitnessCheckRequest,
) -> Result<MultipleFitnessReport, PlacementError>
where
    R: RoomRepository + ?Sized,
    F: FurnitureRepository + ?Sized,
{
    let room = rooms.room(request.room_id)?;

    let mut resolved = Vec::with_capacity(request.furniture_items.len());
    for placement in &request.furniture_items {
        let kind = match furniture.furniture(placement.furniture_id) {
            Ok(kind) => kind,
            Err(err) if err.is_not_found() => {
                debug!(
                    "Skipping placement of unknown furniture {}",
                    placement.furniture_id
                );
                continue;
            }
            Err(err) => return Err(err),
        };
        let rect = kind
            .footprint(placement.rotation)
            .at(placement.position_x, placement.position_y);
        resolved.push(ResolvedPlacement {
            placement,
            kind,
            rect,
        });
    }

    let results: Vec<PlacementReport> = resolved
        .iter()
        .map(|item| evaluate(&room, item, &resolved))
        .collect();

    let all_fits = results.iter().all(|r| r.fits && r.collisions.is_empty());

    Ok(MultipleFitnessReport {
        all_fits,
        results,
        overall_message: if all_fits {
            MSG_ALL_FIT
        } else {
            MSG_SOME_DO_NOT_FIT
        }
        .to_string(),
    })
}

fn evaluate(
    room: &Room,
    item: &ResolvedPlacement<'_>,
    all: &[ResolvedPlacement<'_>],
) -> PlacementReport {
    let fits = within_room(room, &item.rect);

    let collisions: Vec<String> = all
        .iter()
        .filter(|other| other.kind.id != item.kind.id)
        .filter(|other| item.rect.overlaps(&other.rect))
        .map(|other| other.kind.name.clone())
        .collect();

    if !collisions.is_empty() {
        debug!("{} collides with {:?}", item.kind.name, collisions);
    }

    let (walking_space_x, walking_space_y) = walking_space(room, &item.rect);

    let message = if fits && collisions.is_empty() {
        MSG_FITS.to_string()
    } else if !collisions.is_empty() {
        format!("Collides with {} ❌", collisions.join(", "))
    } else {
        MSG_DOES_NOT_FIT_IN_ROOM.to_string()
    };

    PlacementReport {
        furniture_id: item.placement.furniture_id,
        instance_id: item.placement.instance_id,
        furniture_name: item.kind.name.clone(),
        fits,
        collisions,
        adequate_space: has_adequate_space(walking_space_x, walking_space_y),
        walking_space_x,
        walking_space_y,
        message,
    }
}
