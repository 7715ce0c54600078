// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use reactivities::client::ActivitiesApi;
use reactivities::config::Config;
use reactivities::db::SqliteDb;
use reactivities::error::ClientError;
use reactivities::models::Activity;
use reactivities::routes::create_router;
use reactivities::services::ActivityService;
use reactivities::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use uuid::Uuid;

/// Build an activity with a predictable id.
#[allow(dead_code)]
pub fn activity(n: u128, date: &str) -> Activity {
    Activity {
        id: Uuid::from_u128(n),
        title: format!("Activity {}", n),
        category: "drinks".to_string(),
        description: format!("Description of activity {}", n),
        date: date.to_string(),
        city: "London".to_string(),
        venue: "Pub".to_string(),
    }
}

/// Create a test app backed by an in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = SqliteDb::open(&config.database_path).expect("Failed to open in-memory database");

    let state = Arc::new(AppState {
        config,
        activities: ActivityService::new(db),
    });

    (create_router(state.clone()), state)
}

/// Serve a fresh test app on an ephemeral local port. Returns its base URL.
#[allow(dead_code)]
pub async fn spawn_server() -> String {
    let (app, _state) = create_test_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

#[allow(dead_code)]
#[derive(Default)]
struct FakeServer {
    records: HashMap<Uuid, Activity>,
    /// Served by the next `list` call instead of `records`.
    list_override: Option<Vec<Activity>>,
    fail_next: Option<ClientError>,
    hold: bool,
    held: Vec<Option<oneshot::Sender<()>>>,
    calls: Vec<&'static str>,
}

/// In-process stand-in for the activities API.
///
/// Calls apply to `records` when they complete, like a real server would.
/// With `hold_calls(true)` each call parks until released by index, which
/// lets a test pick the order in which concurrent calls resolve.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeServer>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn server(&self) -> std::sync::MutexGuard<'_, FakeServer> {
        self.inner.lock().expect("fake api lock poisoned")
    }

    pub fn seed(&self, activities: impl IntoIterator<Item = Activity>) {
        let mut server = self.server();
        for activity in activities {
            server.records.insert(activity.id, activity);
        }
    }

    pub fn remove(&self, id: Uuid) {
        self.server().records.remove(&id);
    }

    pub fn record(&self, id: Uuid) -> Option<Activity> {
        self.server().records.get(&id).cloned()
    }

    pub fn override_next_list(&self, activities: Vec<Activity>) {
        self.server().list_override = Some(activities);
    }

    pub fn fail_next(&self, err: ClientError) {
        self.server().fail_next = Some(err);
    }

    pub fn hold_calls(&self, hold: bool) {
        self.server().hold = hold;
    }

    /// Number of calls that have parked so far (released ones included).
    pub fn held_count(&self) -> usize {
        self.server().held.len()
    }

    pub fn release(&self, index: usize) {
        if let Some(tx) = self.server().held.get_mut(index).and_then(Option::take) {
            let _ = tx.send(());
        }
    }

    pub fn calls(&self, op: &str) -> usize {
        self.server().calls.iter().filter(|c| **c == op).count()
    }

    /// Yield until `count` calls are parked.
    pub async fn wait_for_held(&self, count: usize) {
        for _ in 0..10_000 {
            if self.held_count() >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {} held calls, saw {}", count, self.held_count());
    }

    async fn enter(&self, op: &'static str) -> Result<(), ClientError> {
        let parked = {
            let mut server = self.server();
            server.calls.push(op);
            if server.hold {
                let (tx, rx) = oneshot::channel();
                server.held.push(Some(tx));
                Some(rx)
            } else {
                None
            }
        };

        if let Some(rx) = parked {
            let _ = rx.await;
        }

        match self.server().fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ActivitiesApi for FakeApi {
    async fn list(&self) -> Result<Vec<Activity>, ClientError> {
        self.enter("list").await?;
        let mut server = self.server();
        Ok(match server.list_override.take() {
            Some(activities) => activities,
            None => server.records.values().cloned().collect(),
        })
    }

    async fn details(&self, id: Uuid) -> Result<Activity, ClientError> {
        self.enter("details").await?;
        self.record(id)
            .ok_or_else(|| ClientError::NotFound(format!("Activity {} not found", id)))
    }

    async fn create(&self, activity: &Activity) -> Result<(), ClientError> {
        self.enter("create").await?;
        let mut server = self.server();
        if server.records.contains_key(&activity.id) {
            return Err(ClientError::Validation(format!(
                "Activity {} already exists",
                activity.id
            )));
        }
        server.records.insert(activity.id, activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), ClientError> {
        self.enter("update").await?;
        let mut server = self.server();
        match server.records.get_mut(&activity.id) {
            Some(stored) => {
                *stored = activity.clone();
                Ok(())
            }
            None => Err(ClientError::NotFound(format!(
                "Could not find activity {}",
                activity.id
            ))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.enter("delete").await?;
        match self.server().records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ClientError::NotFound(format!("Activity {} not found", id))),
        }
    }
}
