// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity handlers.
//!
//! Each operation reads or writes a single row:
//! 1. List all activities
//! 2. Details for one activity (NotFound if absent)
//! 3. Create with a caller-supplied id
//! 4. Edit by partial overwrite (NotFound if absent, Persistence if nothing saved)
//! 5. Delete (NotFound if absent)

use crate::db::SqliteDb;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityPatch};
use crate::time_utils::{format_activity_date, parse_activity_date};
use uuid::Uuid;
use validator::Validate;

/// Activity operations over the relational store.
///
/// SQLite calls block, so each operation runs on tokio's blocking pool.
#[derive(Clone)]
pub struct ActivityService {
    db: SqliteDb,
}

impl ActivityService {
    pub fn new(db: SqliteDb) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Activity>> {
        let activities = self.blocking(|db| db.list_activities()).await?;
        tracing::debug!(count = activities.len(), "Listed activities");
        Ok(activities)
    }

    pub async fn details(&self, id: Uuid) -> Result<Activity> {
        self.blocking(move |db| db.find_activity(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
    }

    /// Insert a new activity. An id that is already stored fails the
    /// primary-key constraint and is reported as BadRequest.
    pub async fn create(&self, mut activity: Activity) -> Result<()> {
        activity.validate()?;
        activity.date = normalize_date(&activity.date)?;

        let id = activity.id;
        let count = self
            .blocking(move |db| db.insert_activity(&activity))
            .await?;
        if count == 0 {
            return Err(AppError::Persistence(
                "Problem saving changes".to_string(),
            ));
        }

        tracing::info!(activity_id = %id, "Created activity");
        Ok(())
    }

    /// Overwrite the fields present in `patch`.
    ///
    /// Fails with Persistence when nothing would be written: either the patch
    /// leaves every field as stored, or the row vanished before the save.
    pub async fn edit(&self, id: Uuid, mut patch: ActivityPatch) -> Result<()> {
        self.blocking(move |db| {
            let mut activity = db
                .find_activity(id)?
                .ok_or_else(|| AppError::NotFound(format!("Could not find activity {}", id)))?;

            if let Some(date) = patch.date.take() {
                patch.date = Some(normalize_date(&date)?);
            }

            let before = activity.clone();
            patch.apply(&mut activity);
            if activity == before || db.save_activity(&activity)? == 0 {
                return Err(AppError::Persistence(
                    "Problem saving changes".to_string(),
                ));
            }
            Ok(())
        })
        .await?;

        tracing::info!(activity_id = %id, "Edited activity");
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if self.blocking(move |db| db.delete_activity(id)).await? == 0 {
            return Err(AppError::NotFound(format!("Activity {} not found", id)));
        }

        tracing::info!(activity_id = %id, "Deleted activity");
        Ok(())
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&SqliteDb) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || op(&db))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("database task failed: {}", e)))?
    }
}

fn normalize_date(raw: &str) -> Result<String> {
    parse_activity_date(raw)
        .map(format_activity_date)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid activity date: {:?}", raw)))
}
