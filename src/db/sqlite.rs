// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite client wrapper with typed activity operations.
//!
//! The connection is shared behind a mutex; every operation is a single
//! short statement, so callers never hold the lock across an await point.

use crate::config::IN_MEMORY_DATABASE;
use crate::db::tables;
use crate::error::AppError;
use crate::models::Activity;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Relational activity store.
#[derive(Clone)]
pub struct SqliteDb {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDb {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: &str) -> Result<Self, AppError> {
        let conn = if path == IN_MEMORY_DATABASE {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.migrate()?;

        tracing::info!(path, "Opened activity database");
        Ok(db)
    }

    /// Fresh in-memory database (tests and local experiments).
    pub fn in_memory() -> Result<Self, AppError> {
        Self::open(IN_MEMORY_DATABASE)
    }

    fn migrate(&self) -> Result<(), AppError> {
        self.lock()?.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                city TEXT NOT NULL,
                venue TEXT NOT NULL
            );",
            tables::ACTIVITIES
        ))?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, AppError> {
        self.conn
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("database connection lock poisoned")))
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// All activities, oldest first.
    pub fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT id, title, category, description, date, city, venue
             FROM {} ORDER BY date ASC",
            tables::ACTIVITIES
        ))?;

        let rows = stmt.query_map([], activity_from_row)?;
        let activities = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(activities)
    }

    /// Find an activity by id.
    pub fn find_activity(&self, id: Uuid) -> Result<Option<Activity>, AppError> {
        let activity = self
            .lock()?
            .query_row(
                &format!(
                    "SELECT id, title, category, description, date, city, venue
                     FROM {} WHERE id = ?1",
                    tables::ACTIVITIES
                ),
                params![id.to_string()],
                activity_from_row,
            )
            .optional()?;
        Ok(activity)
    }

    /// Insert a new activity. Returns the number of rows written.
    ///
    /// An id that is already stored is a `BadRequest`.
    pub fn insert_activity(&self, activity: &Activity) -> Result<usize, AppError> {
        let result = self.lock()?.execute(
            &format!(
                "INSERT INTO {} (id, title, category, description, date, city, venue)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                tables::ACTIVITIES
            ),
            params![
                activity.id.to_string(),
                activity.title,
                activity.category,
                activity.description,
                activity.date,
                activity.city,
                activity.venue,
            ],
        );

        match result {
            Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => Err(
                AppError::BadRequest(format!("Activity {} already exists", activity.id)),
            ),
            other => Ok(other?),
        }
    }

    /// Save an existing activity. Returns the number of rows affected.
    pub fn save_activity(&self, activity: &Activity) -> Result<usize, AppError> {
        let count = self.lock()?.execute(
            &format!(
                "UPDATE {} SET title = ?2, category = ?3, description = ?4,
                    date = ?5, city = ?6, venue = ?7
                 WHERE id = ?1",
                tables::ACTIVITIES
            ),
            params![
                activity.id.to_string(),
                activity.title,
                activity.category,
                activity.description,
                activity.date,
                activity.city,
                activity.venue,
            ],
        )?;
        Ok(count)
    }

    /// Delete an activity. Returns the number of rows removed.
    pub fn delete_activity(&self, id: Uuid) -> Result<usize, AppError> {
        let count = self.lock()?.execute(
            &format!("DELETE FROM {} WHERE id = ?1", tables::ACTIVITIES),
            params![id.to_string()],
        )?;
        Ok(count)
    }
}

fn activity_from_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
    let raw_id: String = row.get(0)?;
    let id = Uuid::parse_str(&raw_id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Activity {
        id,
        title: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        date: row.get(4)?,
        city: row.get(5)?,
        venue: row.get(6)?,
    })
}
