//! Data models for the Room Design API

use chrono::{DateTime, Utc};
use placement_core::{FurnitureKind, Placement, Room};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// Room row
#[derive(Debug, Clone, FromRow)]
pub struct DbRoom {
    pub id: i64,
    pub name: String,
    pub width: f64,
    pub depth: f64,
}

impl From<DbRoom> for Room {
    fn from(row: DbRoom) -> Self {
        Room {
            id: row.id,
            name: row.name,
            width: row.width,
            depth: row.depth,
        }
    }
}

/// Furniture catalog entry, as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Furniture {
    pub id: i64,
    pub name: String,
    /// Free-form category such as "sofa" or "bed"
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub category: String,
    pub width: f64,
    pub depth: f64,
}

impl From<Furniture> for FurnitureKind {
    fn from(furniture: Furniture) -> Self {
        FurnitureKind {
            id: furniture.id,
            name: furniture.name,
            width: furniture.width,
            depth: furniture.depth,
        }
    }
}

/// Saved design row; placements are kept as a JSON array
#[derive(Debug, Clone, FromRow)]
pub struct DbSavedDesign {
    pub id: i64,
    pub name: String,
    pub room_id: i64,
    pub furniture_data: String,
    pub created_at: DateTime<Utc>,
}

/// Saved design response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDesign {
    pub id: i64,
    pub name: String,
    pub room_id: i64,
    pub furniture_items: Vec<Placement>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbSavedDesign> for SavedDesign {
    type Error = ApiError;

    fn try_from(row: DbSavedDesign) -> Result<Self, Self::Error> {
        let furniture_items = if row.furniture_data.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&row.furniture_data).map_err(|e| ApiError::Internal(e.into()))?
        };

        Ok(SavedDesign {
            id: row.id,
            name: row.name,
            room_id: row.room_id,
            furniture_items,
            created_at: row.created_at,
        })
    }
}

/// Response from saving a design
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDesignSummary {
    pub id: i64,
    pub name: String,
    pub room_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Request to create a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub width: f64,
    pub depth: f64,
}

/// Request to add a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFurnitureRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub width: f64,
    pub depth: f64,
}

/// Request to save an arrangement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveDesignRequest {
    pub name: String,
    pub room_id: i64,
    #[serde(default)]
    pub furniture_items: Vec<Placement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: i64,
}

/// Room and furniture extents must be positive, finite numbers
pub fn validate_extents(width: f64, depth: f64) -> Result<(), ApiError> {
    for (label, value) in [("width", width), ("depth", depth)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ApiError::InvalidRequest(format!(
                "{} must be a positive number, got {}",
                label, value
            )));
        }
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::InvalidRequest("name must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furniture_serializes_category_as_type() {
        let furniture = Furniture {
            id: 1,
            name: "Sofa".into(),
            category: "sofa".into(),
            width: 6.0,
            depth: 3.0,
        };
        let json = serde_json::to_value(&furniture).unwrap();
        assert_eq!(json["type"], "sofa");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_validate_extents_rejects_non_positive() {
        assert!(validate_extents(10.0, 12.5).is_ok());
        assert!(validate_extents(0.0, 12.0).is_err());
        assert!(validate_extents(10.0, -1.0).is_err());
        assert!(validate_extents(f64::NAN, 1.0).is_err());
        assert!(validate_extents(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_saved_design_tolerates_empty_furniture_data() {
        let row = DbSavedDesign {
            id: 3,
            name: "Empty".into(),
            room_id: 1,
            furniture_data: String::new(),
            created_at: Utc::now(),
        };
        let design = SavedDesign::try_from(row).unwrap();
        assert!(design.furniture_items.is_empty());
    }
}
