//! SQLite queries for rooms, the furniture catalog and saved designs
//!
//! Every function borrows a connection; callers own acquisition (pool
//! connection or transaction) so it is released when they drop it.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use placement_core::{InMemoryCatalog, Placement, Room};
use sqlx::SqliteConnection;

use crate::error::ApiError;
use crate::models::{
    CreateFurnitureRequest, CreateRoomRequest, DbRoom, DbSavedDesign, Furniture, SavedDesign,
};

/// Catalog added to an empty database on startup: (name, type, width, depth)
pub const SAMPLE_FURNITURE: [(&str, &str, f64, f64); 5] = [
    ("Sofa", "sofa", 6.0, 3.0),
    ("Dining Table", "table", 4.0, 3.0),
    ("Queen Bed", "bed", 5.0, 7.0),
    ("Bookshelf", "storage", 3.0, 1.0),
    ("Armchair", "chair", 2.5, 2.5),
];

// ============================================================
// Rooms
// ============================================================

pub async fn list_rooms(conn: &mut SqliteConnection) -> Result<Vec<Room>, ApiError> {
    let rows: Vec<DbRoom> = sqlx::query_as("SELECT id, name, width, depth FROM rooms ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(Room::from).collect())
}

pub async fn fetch_room(conn: &mut SqliteConnection, id: i64) -> Result<Option<Room>, ApiError> {
    let row: Option<DbRoom> =
        sqlx::query_as("SELECT id, name, width, depth FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

    Ok(row.map(Room::from))
}

pub async fn insert_room(
    conn: &mut SqliteConnection,
    req: &CreateRoomRequest,
) -> Result<Room, ApiError> {
    let id = sqlx::query("INSERT INTO rooms (name, width, depth) VALUES (?, ?, ?)")
        .bind(&req.name)
        .bind(req.width)
        .bind(req.depth)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

    Ok(Room {
        id,
        name: req.name.clone(),
        width: req.width,
        depth: req.depth,
    })
}

// ============================================================
// Furniture catalog
// ============================================================

pub async fn list_furniture(conn: &mut SqliteConnection) -> Result<Vec<Furniture>, ApiError> {
    let rows = sqlx::query_as("SELECT id, name, type, width, depth FROM furniture ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows)
}

pub async fn fetch_furniture(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Furniture>, ApiError> {
    let row = sqlx::query_as("SELECT id, name, type, width, depth FROM furniture WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row)
}

pub async fn insert_furniture(
    conn: &mut SqliteConnection,
    req: &CreateFurnitureRequest,
) -> Result<Furniture, ApiError> {
    let id = sqlx::query("INSERT INTO furniture (name, type, width, depth) VALUES (?, ?, ?, ?)")
        .bind(&req.name)
        .bind(&req.category)
        .bind(req.width)
        .bind(req.depth)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

    Ok(Furniture {
        id,
        name: req.name.clone(),
        category: req.category.clone(),
        width: req.width,
        depth: req.depth,
    })
}

/// Insert `SAMPLE_FURNITURE` if the catalog is empty; returns how many rows were added
pub async fn seed_sample_furniture(conn: &mut SqliteConnection) -> Result<usize, ApiError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM furniture")
        .fetch_one(&mut *conn)
        .await?;

    if existing > 0 {
        tracing::info!("Catalog already has {} furniture items", existing);
        return Ok(0);
    }

    for (name, category, width, depth) in SAMPLE_FURNITURE {
        insert_furniture(
            conn,
            &CreateFurnitureRequest {
                name: name.to_string(),
                category: category.to_string(),
                width,
                depth,
            },
        )
        .await?;
    }

    tracing::info!("Seeded {} sample furniture items", SAMPLE_FURNITURE.len());
    Ok(SAMPLE_FURNITURE.len())
}

/// Load the room and the referenced catalog entries a check needs
///
/// Missing rows are simply absent from the snapshot; the validator decides
/// whether that is an error or a skipped placement.
pub async fn load_catalog(
    conn: &mut SqliteConnection,
    room_id: i64,
    furniture_ids: impl IntoIterator<Item = i64>,
) -> Result<InMemoryCatalog, ApiError> {
    let mut catalog = InMemoryCatalog::new();

    let Some(room) = fetch_room(conn, room_id).await? else {
        return Ok(catalog);
    };
    catalog.insert_room(room);

    let ids: BTreeSet<i64> = furniture_ids.into_iter().collect();
    for id in ids {
        if let Some(furniture) = fetch_furniture(conn, id).await? {
            catalog.insert_furniture(furniture.into());
        }
    }

    Ok(catalog)
}

// ============================================================
// Saved designs
// ============================================================

pub async fn insert_design(
    conn: &mut SqliteConnection,
    name: &str,
    room_id: i64,
    furniture_items: &[Placement],
    created_at: DateTime<Utc>,
) -> Result<i64, ApiError> {
    let furniture_data =
        serde_json::to_string(furniture_items).map_err(|e| ApiError::Internal(e.into()))?;

    let id = sqlx::query(
        r#"
        INSERT INTO saved_designs (name, room_id, furniture_data, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(room_id)
    .bind(&furniture_data)
    .bind(created_at.to_rfc3339())
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn list_designs(conn: &mut SqliteConnection) -> Result<Vec<SavedDesign>, ApiError> {
    let rows: Vec<DbSavedDesign> = sqlx::query_as(
        r#"
        SELECT id, name, room_id, furniture_data, created_at
        FROM saved_designs
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    rows.into_iter().map(SavedDesign::try_from).collect()
}

/// Returns false when no design had this id
pub async fn delete_design(conn: &mut SqliteConnection, id: i64) -> Result<bool, ApiError> {
    let deleted = sqlx::query("DELETE FROM saved_designs WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    Ok(deleted > 0)
}
