//! HTTP handlers for the Room Design API

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use placement_core::{
    FitnessCheckRequest, FitnessReport, MultipleFitnessCheckRequest, MultipleFitnessReport, Room,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;
use crate::store;

/// API banner
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Room Design API is running",
        status: "success",
    })
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "room-design-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================
// Rooms
// ============================================================

pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Room>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let rooms = store::list_rooms(&mut conn).await?;
    Ok(Json(rooms))
}

pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Room>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let room = store::fetch_room(&mut conn, id)
        .await?
        .ok_or(ApiError::NotFound("Room"))?;
    Ok(Json(room))
}

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<Room>, ApiError> {
    validate_name(&req.name)?;
    validate_extents(req.width, req.depth)?;

    let mut conn = state.db.acquire().await?;
    let room = store::insert_room(&mut conn, &req).await?;

    tracing::info!(
        "Created room {} ({}): {} x {}",
        room.id,
        room.name,
        room.width,
        room.depth
    );

    Ok(Json(room))
}

// ============================================================
// Furniture catalog
// ============================================================

pub async fn list_furniture(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Furniture>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let furniture = store::list_furniture(&mut conn).await?;
    Ok(Json(furniture))
}

pub async fn create_furniture(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateFurnitureRequest>,
) -> Result<Json<Furniture>, ApiError> {
    validate_name(&req.name)?;
    validate_extents(req.width, req.depth)?;

    let mut conn = state.db.acquire().await?;
    let furniture = store::insert_furniture(&mut conn, &req).await?;

    tracing::info!("Added furniture {} ({})", furniture.id, furniture.name);

    Ok(Json(furniture))
}

// ============================================================
// Fitness checks
// ============================================================

/// Check a single item at its nominal orientation
pub async fn check_fitness(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FitnessCheckRequest>,
) -> Result<Json<FitnessReport>, ApiError> {
    let catalog = {
        let mut conn = state.db.acquire().await?;
        store::load_catalog(&mut conn, req.room_id, [req.furniture_id]).await?
    };

    let report = placement_core::check_fitness(&catalog, &catalog, &req)?;

    tracing::debug!(
        "Fitness check room={} furniture={}: fits={}",
        req.room_id,
        req.furniture_id,
        report.fits
    );

    Ok(Json(report))
}

/// Check a whole arrangement, including collisions between items
pub async fn check_multiple_fitness(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MultipleFitnessCheckRequest>,
) -> Result<Json<MultipleFitnessReport>, ApiError> {
    // Read room and catalog rows from one snapshot
    let catalog = {
        let mut tx = state.db.begin().await?;
        let catalog = store::load_catalog(
            &mut tx,
            req.room_id,
            req.furniture_items.iter().map(|item| item.furniture_id),
        )
        .await?;
        tx.commit().await?;
        catalog
    };

    let report = placement_core::check_multiple_fitness(&catalog, &catalog, &req)?;

    tracing::info!(
        "Checked {} placements in room {}: {} evaluated, all_fits={}",
        req.furniture_items.len(),
        req.room_id,
        report.results.len(),
        report.all_fits
    );

    Ok(Json(report))
}

// ============================================================
// Saved designs
// ============================================================

pub async fn save_design(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveDesignRequest>,
) -> Result<Json<SavedDesignSummary>, ApiError> {
    validate_name(&req.name)?;

    let mut tx = state.db.begin().await?;

    store::fetch_room(&mut tx, req.room_id)
        .await?
        .ok_or(ApiError::NotFound("Room"))?;

    let created_at = Utc::now();
    let id = store::insert_design(
        &mut tx,
        &req.name,
        req.room_id,
        &req.furniture_items,
        created_at,
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        "Saved design {} ({}) for room {} with {} items",
        id,
        req.name,
        req.room_id,
        req.furniture_items.len()
    );

    Ok(Json(SavedDesignSummary {
        id,
        name: req.name,
        room_id: req.room_id,
        created_at,
    }))
}

pub async fn list_saved_designs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SavedDesign>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let designs = store::list_designs(&mut conn).await?;
    Ok(Json(designs))
}

pub async fn delete_saved_design(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut conn = state.db.acquire().await?;

    if !store::delete_design(&mut conn, id).await? {
        return Err(ApiError::NotFound("Design"));
    }

    tracing::info!("Deleted design {}", id);

    Ok(Json(DeleteResponse {
        message: "Design deleted successfully",
        id,
    }))
}
