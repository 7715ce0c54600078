// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side activity cache.
//!
//! Mirrors server state in an id-keyed registry and tracks the selected
//! activity plus in-flight flags. Every operation awaits exactly one remote
//! call and then applies its outcome in a single `send_modify`, so
//! subscribers never observe a half-applied mutation.
//!
//! Concurrent operations are not coordinated: when two calls touching the
//! same id are in flight, the one that completes last wins.

use crate::client::api::ActivitiesApi;
use crate::client::grouping::{group_by_date, DateGroup, GroupingError};
use crate::error::ClientError;
use crate::models::Activity;
use crate::time_utils::truncate_fractional_seconds;
use std::collections::HashMap;
use tokio::sync::watch;
use uuid::Uuid;

/// Observable store state.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub registry: HashMap<Uuid, Activity>,
    /// Copy of the activity being viewed; not updated when the registry changes.
    pub selected: Option<Activity>,
    /// A list or detail fetch is in progress.
    pub loading_initial: bool,
    /// A create, edit or delete is in progress.
    pub submitting: bool,
    /// Tag of the control that started the current delete, or empty.
    pub target: String,
}

impl StoreState {
    /// Registry contents grouped by calendar day, recomputed on every call.
    pub fn activities_by_date(&self) -> Result<Vec<DateGroup>, GroupingError> {
        group_by_date(self.registry.values().cloned())
    }
}

/// Cache of activities synchronized against an [`ActivitiesApi`].
pub struct ActivityStore<A> {
    api: A,
    state: watch::Sender<StoreState>,
}

impl<A: ActivitiesApi> ActivityStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: watch::Sender::new(StoreState::default()),
        }
    }

    /// Receive a notification after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Cached activity by id, without any remote call.
    pub fn get(&self, id: Uuid) -> Option<Activity> {
        self.state.borrow().registry.get(&id).cloned()
    }

    pub fn selected(&self) -> Option<Activity> {
        self.state.borrow().selected.clone()
    }

    pub fn loading_initial(&self) -> bool {
        self.state.borrow().loading_initial
    }

    pub fn submitting(&self) -> bool {
        self.state.borrow().submitting
    }

    pub fn target(&self) -> String {
        self.state.borrow().target.clone()
    }

    pub fn activities_by_date(&self) -> Result<Vec<DateGroup>, GroupingError> {
        self.state.borrow().activities_by_date()
    }

    /// Fetch the full list and upsert every entry into the registry.
    ///
    /// Entries missing from the response are kept; this never shrinks the
    /// registry. Returns the number of activities received.
    pub async fn load_all(&self) -> Result<usize, ClientError> {
        self.state.send_modify(|s| s.loading_initial = true);

        match self.api.list().await {
            Ok(activities) => {
                let count = activities.len();
                self.state.send_modify(|s| {
                    for mut activity in activities {
                        activity.date = truncate_fractional_seconds(&activity.date).to_string();
                        s.registry.insert(activity.id, activity);
                    }
                    s.loading_initial = false;
                });
                tracing::debug!(count, "Loaded activities");
                Ok(count)
            }
            Err(e) => {
                self.state.send_modify(|s| s.loading_initial = false);
                tracing::warn!(error = %e, "Failed to load activities");
                Err(e)
            }
        }
    }

    /// Select an activity, fetching it only when it is not cached.
    ///
    /// A cached entry is used as-is, however old it is.
    pub async fn load_one(&self, id: Uuid) -> Result<Activity, ClientError> {
        let mut cached = None;
        self.state.send_if_modified(|s| match s.registry.get(&id) {
            Some(activity) => {
                s.selected = Some(activity.clone());
                cached = Some(activity.clone());
                true
            }
            None => false,
        });
        if let Some(activity) = cached {
            tracing::debug!(activity_id = %id, "Activity served from cache");
            return Ok(activity);
        }

        self.state.send_modify(|s| s.loading_initial = true);

        let result = self.api.details(id).await;

        self.state.send_modify(|s| {
            if let Ok(activity) = &result {
                s.selected = Some(activity.clone());
            }
            s.loading_initial = false;
        });

        result.inspect_err(|e| {
            tracing::warn!(activity_id = %id, error = %e, "Failed to load activity");
        })
    }

    pub fn clear_selection(&self) {
        self.state.send_modify(|s| s.selected = None);
    }

    /// Create on the server, then add to the registry.
    pub async fn create(&self, activity: Activity) -> Result<(), ClientError> {
        self.state.send_modify(|s| s.submitting = true);

        let result = self.api.create(&activity).await;

        let id = activity.id;
        self.state.send_modify(|s| {
            if result.is_ok() {
                s.registry.insert(activity.id, activity);
            }
            s.submitting = false;
        });

        match &result {
            Ok(()) => tracing::info!(activity_id = %id, "Created activity"),
            Err(e) => tracing::warn!(activity_id = %id, error = %e, "Failed to create activity"),
        }
        result
    }

    /// Send the full activity as an edit; on success it replaces both the
    /// registry entry and the selection.
    pub async fn edit(&self, activity: Activity) -> Result<(), ClientError> {
        self.state.send_modify(|s| s.submitting = true);

        let result = self.api.update(&activity).await;

        let id = activity.id;
        self.state.send_modify(|s| {
            if result.is_ok() {
                s.selected = Some(activity.clone());
                s.registry.insert(activity.id, activity);
            }
            s.submitting = false;
        });

        match &result {
            Ok(()) => tracing::info!(activity_id = %id, "Edited activity"),
            Err(e) => tracing::warn!(activity_id = %id, error = %e, "Failed to edit activity"),
        }
        result
    }

    /// Delete on the server, then drop the registry entry.
    ///
    /// `target` names the control that started the delete so a renderer can
    /// mark just that control as busy. A NotFound reply counts as success:
    /// the activity is gone either way.
    pub async fn delete(&self, id: Uuid, target: impl Into<String>) -> Result<(), ClientError> {
        let target = target.into();
        self.state.send_modify(|s| {
            s.submitting = true;
            s.target = target;
        });

        let result = match self.api.delete(id).await {
            Err(ClientError::NotFound(msg)) => {
                tracing::debug!(activity_id = %id, reason = %msg, "Activity already deleted");
                Ok(())
            }
            other => other,
        };

        self.state.send_modify(|s| {
            if result.is_ok() {
                s.registry.remove(&id);
            }
            s.submitting = false;
            s.target.clear();
        });

        match &result {
            Ok(()) => tracing::info!(activity_id = %id, "Deleted activity"),
            Err(e) => tracing::warn!(activity_id = %id, error = %e, "Failed to delete activity"),
        }
        result
    }
}
